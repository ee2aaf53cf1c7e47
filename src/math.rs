//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Restrict `value` to the range `[min, max]`. Out-of-range input is
/// silently clamped, never an error.
pub fn clamp(value: Component, min: Component, max: Component) -> Component {
    value.max(min).min(max)
}

/// Restrict `value` to the unit range `[0, 1]`.
pub fn clamp_unit(value: Component) -> Component {
    clamp(value, 0.0, 1.0)
}

/// Restrict `value` to the byte range `[0, 255]`, truncating any
/// fractional part.
pub fn clamp_byte(value: Component) -> Component {
    clamp(value, 0.0, 255.0).trunc()
}

/// Rescale a unit float to a byte, truncating.
pub fn byte_from_unit(unit: Component) -> u8 {
    (clamp_unit(unit) * 255.0).trunc() as u8
}

/// Rescale a byte-range value to a unit float.
pub fn unit_from_byte(byte: Component) -> Component {
    clamp(byte, 0.0, 255.0) / 255.0
}

/// Linearly interpolate from `start` to `end` using `t` as the progress
/// between them. `t` is not clamped.
pub fn lerp<T: Float>(start: T, end: T, t: T) -> T {
    start + (end - start) * t
}

/// Wrap `value` into the half-open range `[0, range)`. Negative values
/// wrap around from the top.
pub fn wrap(value: Component, range: Component) -> Component {
    let wrapped = if value < 0.0 {
        range - (-value % range)
    } else {
        value % range
    };

    // The negative branch lands exactly on `range` when the remainder is 0.
    if wrapped == range {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(value: Component) -> Component {
    wrap(value, 360.0)
}

/// Format a unit float as a percentage string. When `round` is true the
/// percentage is rounded to a whole number, otherwise decimal precision is
/// retained.
pub fn to_percent_string(unit: Component, round: bool) -> String {
    let percent = unit * 100.0;
    if round {
        format!("{}%", percent.round())
    } else {
        format!("{}%", clean_float_str(percent, 4))
    }
}

/// Fixed-precision decimal formatting with trailing zeros stripped, e.g.
/// `0.5` at precision 4 becomes `"0.5"` and `1.0` becomes `"1"`.
pub fn clean_float_str(value: Component, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_defaults_to_given_range() {
        assert_eq!(clamp(-5.0, 0.0, 255.0), 0.0);
        assert_eq!(clamp(300.0, 0.0, 255.0), 255.0);
        assert_eq!(clamp(-0.3, -1.0, 1.0), -0.3);
        assert_eq!(clamp(1.0, -3.0, -0.5), -0.5);
    }

    #[test]
    fn clamp_unit_restricts_to_unit_range() {
        assert_eq!(clamp_unit(0.5), 0.5);
        assert_eq!(clamp_unit(-1.5), 0.0);
        assert_eq!(clamp_unit(5.2), 1.0);
    }

    #[test]
    fn clamp_byte_truncates() {
        assert_eq!(clamp_byte(64.0), 64.0);
        assert_eq!(clamp_byte(-2.0), 0.0);
        assert_eq!(clamp_byte(512.0), 255.0);
        assert_eq!(clamp_byte(3.9), 3.0);
        assert_eq!(clamp_byte(254.6), 254.0);
    }

    #[test]
    fn byte_unit_rescaling() {
        assert_eq!(byte_from_unit(1.0), 255);
        assert_eq!(byte_from_unit(0.0), 0);
        assert_eq!(byte_from_unit(2.0), 255);
        assert_eq!(unit_from_byte(255.0), 1.0);
        assert_eq!(unit_from_byte(512.0), 1.0);
        assert_eq!(unit_from_byte(0.0), 0.0);
    }

    #[test]
    fn lerp_is_unclamped() {
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    }

    #[test]
    fn wrap_degrees_handles_all_quadrants() {
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_eq!(wrap_degrees(90.0), 90.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-360.0), 0.0);
        assert_eq!(wrap_degrees(520.0), 160.0);
    }

    #[test]
    fn percent_strings() {
        assert_eq!(to_percent_string(0.5, false), "50%");
        assert_eq!(to_percent_string(0.333, true), "33%");
        assert_eq!(to_percent_string(1.0, false), "100%");
    }

    #[test]
    fn clean_float_strings() {
        assert_eq!(clean_float_str(0.5, 4), "0.5");
        assert_eq!(clean_float_str(1.0, 4), "1");
        assert_eq!(clean_float_str(0.125, 4), "0.125");
        assert_eq!(clean_float_str(127.0, 4), "127");
    }
}
