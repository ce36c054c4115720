//! Token classification: positional argument or option reference.

/// Characters that mark a token as an option reference. Both are
/// interchangeable.
pub const OPTION_PREFIXES: [char; 2] = ['/', '-'];

/// Trailing marker on a boolean option name that sets it to `false`.
pub const NEGATION_MARKER: char = '-';

/// A classified command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Not an option; kept exactly as it appeared.
    Argument(&'a str),
    /// Refers to a declared option by name.
    Option(OptionReference<'a>),
}

/// An option token split into the parts the binder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionReference<'a> {
    /// The token as typed, prefix and any negation marker included. Used
    /// verbatim in error messages.
    pub token: &'a str,
    /// Name used for lookup, with prefix and negation marker removed.
    pub name: &'a str,
    /// Whether the name carried a trailing negation marker.
    pub negated: bool,
}

/// Classifies a single token.
///
/// # Examples
///
/// ```rust
/// use cmdbind_core::classify::{classify, Token};
///
/// assert_eq!(classify("foo bar"), Token::Argument("foo bar"));
///
/// let Token::Option(reference) = classify("-IsWorking-") else {
///     panic!("expected an option");
/// };
/// assert_eq!(reference.name, "IsWorking");
/// assert!(reference.negated);
/// ```
#[must_use]
pub fn classify(token: &str) -> Token<'_> {
    let Some(candidate) = token.strip_prefix(OPTION_PREFIXES) else {
        return Token::Argument(token);
    };

    let name = candidate.trim_end_matches(NEGATION_MARKER);

    Token::Option(OptionReference {
        token,
        name,
        negated: name.len() != candidate.len(),
    })
}
