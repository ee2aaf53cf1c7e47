//! Errors reported by the parsing entry points.

use std::error::Error;
use std::fmt;

/// Errors that can occur while parsing a textual color notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// A hex code had an invalid digit count or non-hex characters.
    MalformedHex(String),
    /// Functional notation carried fewer than 3 or more than 4 arguments.
    InvalidComponentCount(usize),
    /// Every parsing strategy was exhausted without success.
    UnparsableColor(String),
    /// A structural component received a token it cannot accept.
    InvalidComponentType {
        /// The component that rejected the token, e.g. `"hue"`.
        component: &'static str,
        /// The offending token, rendered as text.
        token: String,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHex(input) => {
                write!(
                    f,
                    "malformed hex color {input:?}, expected 3, 4, 6 or 8 hex digits"
                )
            }
            Self::InvalidComponentCount(count) => {
                write!(
                    f,
                    "functional notation takes 3 or 4 components, found {count}"
                )
            }
            Self::UnparsableColor(input) => {
                write!(f, "the value {input:?} cannot be parsed as a color")
            }
            Self::InvalidComponentType { component, token } => {
                write!(f, "invalid {component} component {token:?}")
            }
        }
    }
}

impl Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let error = ParseColorError::MalformedHex("#12345".to_string());
        assert!(error.to_string().contains("#12345"));

        let error = ParseColorError::InvalidComponentCount(5);
        assert!(error.to_string().contains('5'));

        let error = ParseColorError::InvalidComponentType {
            component: "hue",
            token: "50%".to_string(),
        };
        assert!(error.to_string().contains("hue"));
    }
}
