//! Assigns option values to a command through its option table.

use log::debug;

use crate::classify::OptionReference;
use crate::error::{Error, Result};
use crate::options::{OptionTable, Setter};
use crate::tokenizer::{next_command_line_item, ArgCursor};

const PROPERTY_SEPARATOR: char = ';';
const KEY_VALUE_SEPARATOR: char = '=';

/// Binds one option reference onto `command`.
///
/// Flags consume no further tokens. Every other kind takes the next token
/// from `cursor` as its value, whatever that token looks like.
///
/// # Errors
///
/// - [`Error::UnknownOption`] if the table has no such option
/// - [`Error::MissingOptionValue`] if a value is required and the cursor is exhausted
/// - [`Error::InvalidOptionValue`] if the value does not convert to the target type
pub fn bind_option<C>(
    command: &mut C,
    options: &OptionTable<C>,
    reference: OptionReference<'_>,
    cursor: &mut ArgCursor<'_>,
) -> Result<()> {
    let descriptor = options
        .get(reference.name)
        .ok_or_else(|| Error::UnknownOption(reference.token.to_string()))?;

    let mut take_value = || {
        let raw = next_command_line_item(Some(&mut *cursor))
            .ok_or_else(|| Error::MissingOptionValue(reference.token.to_string()))?;
        debug!("Binding option `{}` = `{raw}`", descriptor.name());
        Ok::<_, Error>(raw)
    };

    match &descriptor.setter {
        Setter::Flag(set) => {
            debug!("Binding flag `{}` = {}", descriptor.name(), !reference.negated);
            set(command, !reference.negated);
        }
        Setter::Value(assign) => {
            let raw = take_value()?;
            if !assign(command, &raw) {
                return Err(Error::invalid_option_value(reference.token, &raw));
            }
        }
        Setter::Properties(set) => {
            let raw = take_value()?;
            let pairs = parse_properties(&raw)
                .ok_or_else(|| Error::invalid_option_value(reference.token, &raw))?;
            for (key, value) in pairs {
                set(command, key, value);
            }
        }
    }

    Ok(())
}

/// Splits `a=1;b=2` into pairs. Returns `None` if any non-empty segment
/// lacks a key.
fn parse_properties(raw: &str) -> Option<Vec<(String, String)>> {
    raw.split(PROPERTY_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once(KEY_VALUE_SEPARATOR)?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, Token};

    #[derive(Default)]
    struct Target {
        verbose: bool,
        retries: u32,
        label: Option<String>,
        properties: Vec<(String, String)>,
    }

    fn options() -> OptionTable<Target> {
        OptionTable::<Target>::new()
            .flag("Verbose", "", |target, value| target.verbose = value)
            .value("Retries", "", |target, value: u32| target.retries = value)
            .value("Label", "", |target, value: String| target.label = Some(value))
            .properties("Property", "", |target, key, value| {
                target.properties.push((key, value));
            })
    }

    fn bind(target: &mut Target, token: &str, rest: &[&str]) -> Result<usize> {
        let Token::Option(reference) = classify(token) else {
            panic!("Expected `{token}` to be an option");
        };
        let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
        let mut cursor = ArgCursor::new(&rest);
        bind_option(target, &options(), reference, &mut cursor)?;
        Ok(cursor.remaining().len())
    }

    #[test]
    fn test_flag_consumes_nothing() {
        let mut target = Target::default();
        let remaining = bind(&mut target, "-Verbose", &["next"]).unwrap();
        assert!(target.verbose);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_negated_flag_binds_false() {
        let mut target = Target {
            verbose: true,
            ..Target::default()
        };
        let remaining = bind(&mut target, "/Verbose-", &["next"]).unwrap();
        assert!(!target.verbose);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_value_consumes_next_token() {
        let mut target = Target::default();
        let remaining = bind(&mut target, "-Retries", &["3", "after"]).unwrap();
        assert_eq!(target.retries, 3);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_value_may_look_like_an_option() {
        let mut target = Target::default();
        bind(&mut target, "-Label", &["-Verbose"]).unwrap();
        assert_eq!(target.label.as_deref(), Some("-Verbose"));
        assert!(!target.verbose);
    }

    #[test]
    fn test_negation_marker_ignored_for_values() {
        let mut target = Target::default();
        bind(&mut target, "-Label-", &["text"]).unwrap();
        assert_eq!(target.label.as_deref(), Some("text"));
    }

    #[test]
    fn test_unknown_option_uses_original_token() {
        let mut target = Target::default();
        let err = bind(&mut target, "/Nope-", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown option: '/Nope-'");
    }

    #[test]
    fn test_missing_value() {
        let mut target = Target::default();
        let err = bind(&mut target, "-retries", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Missing option value for: '-retries'");
    }

    #[test]
    fn test_unconvertible_value() {
        let mut target = Target::default();
        let err = bind(&mut target, "/Retries", &["-1"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid option value: '/Retries -1'");
        assert_eq!(target.retries, 0);
    }

    #[test]
    fn test_properties_bind_each_pair() {
        let mut target = Target::default();
        bind(&mut target, "-Property", &["Configuration=Release;Version=1.0=beta;"]).unwrap();
        assert_eq!(
            target.properties,
            vec![
                ("Configuration".to_string(), "Release".to_string()),
                ("Version".to_string(), "1.0=beta".to_string()),
            ]
        );
    }

    #[test]
    fn test_properties_reject_segment_without_key() {
        let mut target = Target::default();
        let err = bind(&mut target, "-Property", &["a=1;oops"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid option value: '-Property a=1;oops'");
        // Nothing is assigned when any pair is malformed
        assert!(target.properties.is_empty());

        let err = bind(&mut target, "-Property", &["=1"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid option value: '-Property =1'");
    }
}
