//! Classification of the single arguments accepted by functional notation
//! and the variadic color constructors.

use std::fmt;

use crate::math::wrap_degrees;
use crate::Component;

const PI: Component = std::f64::consts::PI as Component;

/// A single component argument, either a bare number or a piece of text
/// still to be classified.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A numeric argument. Classified by inspecting the value directly.
    Number(Component),
    /// A textual argument. Classified by matching against the component
    /// grammars.
    Text(String),
}

impl From<Component> for Token {
    fn from(value: Component) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Self::Number(value as Component)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// The syntactic kinds a [`Token`] can classify as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// The literal keyword `none`, carrying the value 0.
    None,
    /// A whole number, e.g. `64` or `+127`.
    Integer,
    /// A decimal number, including scientific notation, e.g. `1.27e2`.
    Float,
    /// A percentage, normalized by dividing by 100.
    Percentage,
    /// An angle with an explicit unit, normalized to degrees in `[0, 360)`.
    Angle,
    /// Anything else. Carries the value 0; the caller decides policy.
    Unknown,
}

/// The result of classifying a [`Token`]: its detected kind and the
/// normalized numeric value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Param {
    /// The detected syntactic kind.
    pub kind: ParamKind,
    /// The normalized value for that kind.
    pub value: Component,
}

impl Param {
    /// Classify a token. Numbers never go through text matching, they are
    /// inspected directly.
    pub fn classify(token: &Token) -> Self {
        match token {
            Token::Number(value) => {
                let kind = if value.fract() == 0.0 {
                    ParamKind::Integer
                } else {
                    ParamKind::Float
                };
                Self { kind, value: *value }
            }
            Token::Text(text) => Self::classify_text(text),
        }
    }

    /// Classify a textual token against the component grammars, in
    /// priority order. The first matching grammar wins.
    pub fn classify_text(text: &str) -> Self {
        let clean = text.trim().to_ascii_lowercase();

        if clean == "none" {
            return Self {
                kind: ParamKind::None,
                value: 0.0,
            };
        }

        if let Some(value) = scan_integer(&clean) {
            return Self {
                kind: ParamKind::Integer,
                value,
            };
        }

        if let Some(value) = scan_percentage(&clean) {
            return Self {
                kind: ParamKind::Percentage,
                value: value / 100.0,
            };
        }

        if let Some(value) = scan_number(&clean) {
            return Self {
                kind: ParamKind::Float,
                value,
            };
        }

        if let Some(degrees) = scan_angle(&clean) {
            return Self {
                kind: ParamKind::Angle,
                value: degrees,
            };
        }

        Self {
            kind: ParamKind::Unknown,
            value: 0.0,
        }
    }
}

/// Match `[+-]?\d+`.
fn scan_integer(text: &str) -> Option<Component> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Match a decimal number without an exponent: `[+-]?\d*\.?\d+`.
fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => ("", unsigned),
    };

    !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && whole.bytes().all(|b| b.is_ascii_digit())
}

/// Match a percentage and return the value before the `%` sign.
fn scan_percentage(text: &str) -> Option<Component> {
    let number = text.strip_suffix('%')?;
    if !is_decimal(number) {
        return None;
    }
    number.parse().ok()
}

/// Match a CSS number: a decimal with an optional exponent. A bare or
/// dangling `e` (as in `"1e"`) does not match.
fn scan_number(text: &str) -> Option<Component> {
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };

    if !is_decimal(mantissa) {
        return None;
    }

    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    text.parse().ok()
}

/// Match a number with an angle unit and convert it to degrees, wrapped
/// into `[0, 360)`. Unitless numbers have already matched as integers or
/// floats by the time this runs.
fn scan_angle(text: &str) -> Option<Component> {
    // `grad` must be tried before `rad`, which it ends with.
    const UNITS: [(&str, Component); 4] = [
        ("deg", 1.0),
        ("grad", 180.0 / 200.0),
        ("rad", 180.0 / PI),
        ("turn", 360.0),
    ];

    for (unit, factor) in UNITS {
        if let Some(number) = text.strip_suffix(unit) {
            let value = scan_number(number)?;
            return Some(wrap_degrees(value * factor));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn classify(text: &str) -> Param {
        Param::classify_text(text)
    }

    #[test]
    fn accepts_the_none_keyword() {
        assert_eq!(classify("none").kind, ParamKind::None);
        assert_eq!(classify(" NONE ").kind, ParamKind::None);
        assert_eq!(classify("none").value, 0.0);
    }

    #[test]
    fn detects_integers() {
        assert_eq!(classify("50"), Param { kind: ParamKind::Integer, value: 50.0 });
        assert_eq!(classify("-123").value, -123.0);
        assert_eq!(classify("+64").kind, ParamKind::Integer);
    }

    #[test]
    fn detects_percentages_by_suffix() {
        assert_eq!(classify("50%"), Param { kind: ParamKind::Percentage, value: 0.5 });
        assert_eq!(classify("-20%").value, -0.2);
        assert_eq!(classify("50.0%").kind, ParamKind::Percentage);
        assert_eq!(classify("50%0").kind, ParamKind::Unknown);
    }

    #[test]
    fn detects_floats_with_decimals_or_exponents() {
        assert_eq!(classify("3.14"), Param { kind: ParamKind::Float, value: 3.14 });
        assert_eq!(classify("3e2").value, 300.0);
        assert_eq!(classify("1.27e2").value, 127.0);
        assert_eq!(classify("6.4e1").value, 64.0);
        assert_eq!(classify(".5").kind, ParamKind::Float);
    }

    #[test]
    fn rejects_dangling_exponents() {
        assert_eq!(classify("1e").kind, ParamKind::Unknown);
        assert_eq!(classify("e5").kind, ParamKind::Unknown);
        assert_eq!(classify("1e2e3").kind, ParamKind::Unknown);
    }

    #[test]
    fn converts_angle_units_to_degrees() {
        assert_component_eq!(classify("90deg").value, 90.0);
        assert_component_eq!(classify("100grad").value, 90.0);
        assert_component_eq!(classify("0.25turn").value, 90.0);
        assert_component_eq!(classify("3.14159265rad").value, 180.0);
        assert_eq!(classify("90deg").kind, ParamKind::Angle);
    }

    #[test]
    fn wraps_angles_into_range() {
        assert_component_eq!(classify("-90deg").value, 270.0);
        assert_component_eq!(classify("2turn").value, 0.0);
        assert_component_eq!(classify("520deg").value, 160.0);
    }

    #[test]
    fn quietly_rejects_unknowns_as_zero() {
        let param = classify("bad");
        assert_eq!(param.kind, ParamKind::Unknown);
        assert_eq!(param.value, 0.0);
        assert_eq!(classify("").kind, ParamKind::Unknown);
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify("3.14");
        let again = classify(&first.value.to_string());
        assert_eq!(again.kind, ParamKind::Float);
        assert_component_eq!(again.value, first.value);

        let first = classify("64");
        let again = classify(&first.value.to_string());
        assert_eq!(again.kind, ParamKind::Integer);
        assert_eq!(again.value, first.value);
    }

    #[test]
    fn numbers_classify_by_inspection() {
        let param = Param::classify(&Token::from(50));
        assert_eq!(param.kind, ParamKind::Integer);
        assert_eq!(param.value, 50.0);

        let param = Param::classify(&Token::from(3.14 as crate::Component));
        assert_eq!(param.kind, ParamKind::Float);
    }
}
