//! Declarative option tables.
//!
//! Each command type builds one [`OptionTable`] that maps option names to
//! typed setters. The binder looks options up here instead of inspecting the
//! command at runtime.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use indexmap::IndexMap;
use log::warn;

use crate::error::{Error, Result};

/// The kind of value an option accepts on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean switch; takes no value token.
    Flag,
    Integer,
    Unsigned,
    Float,
    Text,
    Path,
    /// `;`-separated `key=value` pairs.
    Properties,
}

impl ValueKind {
    /// Placeholder shown after the option name in usage text.
    #[must_use]
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Flag => None,
            Self::Integer => Some("<int>"),
            Self::Unsigned => Some("<uint>"),
            Self::Float => Some("<number>"),
            Self::Text => Some("<text>"),
            Self::Path => Some("<path>"),
            Self::Properties => Some("<key=value;...>"),
        }
    }
}

/// Types an option value can be converted into.
///
/// Conversion uses the type's standard textual parsing, attempted once.
pub trait OptionValue: Sized {
    const KIND: ValueKind;

    fn parse_value(raw: &str) -> Option<Self>;
}

macro_rules! from_str_option_value {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl OptionValue for $ty {
                const KIND: ValueKind = $kind;

                fn parse_value(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )+
    };
}

from_str_option_value!(ValueKind::Integer => i8, i16, i32, i64, isize);
from_str_option_value!(ValueKind::Unsigned => u8, u16, u32, u64, usize);
from_str_option_value!(ValueKind::Float => f32, f64);

impl OptionValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl OptionValue for PathBuf {
    const KIND: ValueKind = ValueKind::Path;

    fn parse_value(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }
}

/// How a declared option writes into its command.
pub(crate) enum Setter<C> {
    Flag(Box<dyn Fn(&mut C, bool)>),
    /// Returns `false` when the raw value does not convert.
    Value(Box<dyn Fn(&mut C, &str) -> bool>),
    Properties(Box<dyn Fn(&mut C, String, String)>),
}

/// A single declared option.
pub struct OptionDescriptor<C> {
    name: String,
    alt_name: Option<String>,
    description: String,
    kind: ValueKind,
    pub(crate) setter: Setter<C>,
}

impl<C> OptionDescriptor<C> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alt_name(&self) -> Option<&str> {
        self.alt_name.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[must_use]
    pub fn info(&self) -> OptionInfo {
        OptionInfo {
            name: self.name.clone(),
            alt_name: self.alt_name.clone(),
            description: self.description.clone(),
            kind: self.kind,
        }
    }
}

/// Untyped view of a declared option, for help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionInfo {
    pub name: String,
    pub alt_name: Option<String>,
    pub description: String,
    pub kind: ValueKind,
}

impl Display for OptionInfo {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "-{}", self.name)?;

        if let Some(alt_name) = &self.alt_name {
            write!(formatter, " (-{alt_name})")?;
        }

        if let Some(placeholder) = self.kind.placeholder() {
            write!(formatter, " {placeholder}")?;
        }

        Ok(())
    }
}

/// Option declarations for one command type, looked up case-insensitively.
///
/// # Examples
///
/// ```rust
/// use cmdbind_core::options::{OptionTable, ValueKind};
///
/// #[derive(Default)]
/// struct Pack {
///     verbose: bool,
///     version: Option<String>,
/// }
///
/// let options = OptionTable::<Pack>::new()
///     .flag("Verbose", "Show detailed output", |pack, value| pack.verbose = value)
///     .alt_name("v")
///     .value("Version", "Override the version", |pack, value: String| {
///         pack.version = Some(value);
///     });
///
/// assert_eq!(options.get("verbose").unwrap().kind(), ValueKind::Flag);
/// assert_eq!(options.get("V").unwrap().name(), "Verbose");
/// assert!(options.validate().is_ok());
/// ```
pub struct OptionTable<C> {
    descriptors: Vec<OptionDescriptor<C>>,
    lookup: IndexMap<String, usize>,
    conflicts: Vec<String>,
}

impl<C> Default for OptionTable<C> {
    fn default() -> Self {
        Self {
            descriptors: Vec::new(),
            lookup: IndexMap::new(),
            conflicts: Vec::new(),
        }
    }
}

impl<C: 'static> OptionTable<C> {
    /// Declares a boolean option. Present means `true`, a trailing `-` on the
    /// name means `false`.
    #[must_use]
    pub fn flag(
        self,
        name: &str,
        description: &str,
        setter: impl Fn(&mut C, bool) + 'static,
    ) -> Self {
        self.declare(name, description, ValueKind::Flag, Setter::Flag(Box::new(setter)))
    }

    /// Declares an option that takes the following token as its value.
    #[must_use]
    pub fn value<T: OptionValue + 'static>(
        self,
        name: &str,
        description: &str,
        setter: impl Fn(&mut C, T) + 'static,
    ) -> Self {
        let assign = move |command: &mut C, raw: &str| match T::parse_value(raw) {
            Some(value) => {
                setter(command, value);
                true
            }
            None => false,
        };

        self.declare(name, description, T::KIND, Setter::Value(Box::new(assign)))
    }

    /// Declares an option whose value is a `;`-separated list of `key=value`
    /// pairs. The setter is called once per pair.
    #[must_use]
    pub fn properties(
        self,
        name: &str,
        description: &str,
        setter: impl Fn(&mut C, String, String) + 'static,
    ) -> Self {
        self.declare(
            name,
            description,
            ValueKind::Properties,
            Setter::Properties(Box::new(setter)),
        )
    }
}

impl<C> OptionTable<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives the most recently declared option an alternate name.
    ///
    /// An option has at most one alternate name; a second one is recorded as
    /// a conflict and reported by [`OptionTable::validate`].
    #[must_use]
    pub fn alt_name(mut self, alt_name: &str) -> Self {
        let Some(index) = self.descriptors.len().checked_sub(1) else {
            warn!("Alternate name `{alt_name}` declared before any option, ignoring");
            return self;
        };

        if self.descriptors[index].alt_name.is_some() {
            self.conflicts.push(alt_name.to_string());
            return self;
        }

        self.index(alt_name, index);
        self.descriptors[index].alt_name = Some(alt_name.to_string());
        self
    }

    fn declare(
        mut self,
        name: &str,
        description: &str,
        kind: ValueKind,
        setter: Setter<C>,
    ) -> Self {
        let index = self.descriptors.len();
        self.index(name, index);
        self.descriptors.push(OptionDescriptor {
            name: name.to_string(),
            alt_name: None,
            description: description.to_string(),
            kind,
            setter,
        });
        self
    }

    fn index(&mut self, name: &str, index: usize) {
        let key = name.to_lowercase();
        if self.lookup.contains_key(&key) {
            self.conflicts.push(name.to_string());
        } else {
            self.lookup.insert(key, index);
        }
    }

    /// Finds an option by name or alternate name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionDescriptor<C>> {
        self.lookup
            .get(&name.to_lowercase())
            .map(|&index| &self.descriptors[index])
    }

    /// Checks that every name is non-empty and unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] or [`Error::DuplicateOption`] for the
    /// first offending declaration.
    pub fn validate(&self) -> Result<()> {
        if self.lookup.contains_key("") || self.conflicts.iter().any(String::is_empty) {
            return Err(Error::EmptyName);
        }

        match self.conflicts.first() {
            Some(name) => Err(Error::DuplicateOption(name.clone())),
            None => Ok(()),
        }
    }

    /// Declared options, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor<C>> {
        self.descriptors.iter()
    }

    #[must_use]
    pub fn infos(&self) -> Vec<OptionInfo> {
        self.iter().map(OptionDescriptor::info).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
