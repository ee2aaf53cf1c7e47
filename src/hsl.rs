//! Model a color with the HSL notation in the sRGB color space.
//!
//! The hue component is held as a degree float in `[0, 360)`, following
//! the standard color wheel where 0 and 360 are the same point. The
//! remaining components are unit floats.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::math::{clamp_unit, clean_float_str, to_percent_string, wrap_degrees};
use crate::parameter::{Param, ParamKind, Token};
use crate::{functional, Component};

/// Recognized fields for building an [`Hsl`] from key/value data.
/// Missing components default to 0 and a missing alpha to fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HslFields {
    /// The hue in degrees.
    pub hue: Option<Component>,
    /// The saturation as a unit float.
    pub saturation: Option<Component>,
    /// The lightness as a unit float.
    pub lightness: Option<Component>,
    /// The alpha component as a unit float.
    pub alpha: Option<Component>,
}

/// A color specified with the HSL notation.
///
/// Values are immutable; every `with_*` or `set` operation returns a new
/// instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    hue: Component,
    saturation: Component,
    lightness: Component,
    alpha: Component,
}

impl Default for Hsl {
    /// Opaque black.
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            lightness: 0.0,
            alpha: 1.0,
        }
    }
}

impl Hsl {
    /// Create a new color from its components. The hue wraps circularly
    /// into `[0, 360)`; saturation, lightness and alpha are clamped to
    /// the unit range.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Self {
            hue: wrap_degrees(hue),
            saturation: clamp_unit(saturation),
            lightness: clamp_unit(lightness),
            alpha: clamp_unit(alpha),
        }
    }

    /// The hue component, in degrees `[0, 360)`.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation component, a unit float. 0 is completely gray.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// The lightness component, a unit float. 0 is black and 1 is white
    /// regardless of the other components.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// The alpha component, a unit float.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Return a new color with the given hue, wrapped into `[0, 360)`.
    pub fn with_hue(&self, hue: Component) -> Self {
        Self {
            hue: wrap_degrees(hue),
            ..*self
        }
    }

    /// Return a new color with the given saturation, clamped to unit.
    pub fn with_saturation(&self, saturation: Component) -> Self {
        Self {
            saturation: clamp_unit(saturation),
            ..*self
        }
    }

    /// Return a new color with the given lightness, clamped to unit.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self {
            lightness: clamp_unit(lightness),
            ..*self
        }
    }

    /// Return a new color with the given alpha, clamped to unit.
    pub fn with_alpha(&self, alpha: Component) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            ..*self
        }
    }

    /// Build a color from component tokens in hue, saturation, lightness,
    /// alpha order, starting from opaque black.
    ///
    /// Unlike the lenient RGB bulk setter this is strict: a token whose
    /// kind a component cannot accept is an error. Out-of-range hues wrap
    /// rather than erroring; the unit components clamp.
    pub fn apply(tokens: &[Token]) -> Result<Self, ParseColorError> {
        Self::default().set(tokens)
    }

    /// Return a new color with the given tokens overlaid onto this one.
    /// Components without a token keep their current value; tokens past
    /// the fourth are ignored.
    pub fn set(&self, tokens: &[Token]) -> Result<Self, ParseColorError> {
        let mut next = *self;

        for (index, token) in tokens.iter().take(4).enumerate() {
            next = next.assign(index, token)?;
        }

        Ok(next)
    }

    fn assign(&self, index: usize, token: &Token) -> Result<Self, ParseColorError> {
        let param = Param::classify(token);
        let reject = |component: &'static str| ParseColorError::InvalidComponentType {
            component,
            token: token.to_string(),
        };

        match index {
            0 => {
                // A bare number is taken as degrees; angle tokens arrive
                // already converted and wrapped.
                let hue = match param.kind {
                    ParamKind::Integer | ParamKind::Float => wrap_degrees(param.value),
                    ParamKind::Angle => param.value,
                    ParamKind::None => 0.0,
                    _ => return Err(reject("hue")),
                };
                Ok(Self { hue, ..*self })
            }
            1 | 2 => {
                let value = match param.kind {
                    ParamKind::Integer | ParamKind::Float | ParamKind::Percentage => {
                        clamp_unit(param.value)
                    }
                    ParamKind::None => 0.0,
                    _ => {
                        return Err(reject(if index == 1 { "saturation" } else { "lightness" }))
                    }
                };
                if index == 1 {
                    Ok(Self {
                        saturation: value,
                        ..*self
                    })
                } else {
                    Ok(Self {
                        lightness: value,
                        ..*self
                    })
                }
            }
            _ => {
                let alpha = match param.kind {
                    ParamKind::Integer | ParamKind::Float | ParamKind::Percentage => {
                        clamp_unit(param.value)
                    }
                    ParamKind::None => 0.0,
                    _ => return Err(reject("alpha")),
                };
                Ok(Self { alpha, ..*self })
            }
        }
    }

    /// Build a color from fields, defaulting missing components to 0 and
    /// a missing alpha to fully opaque.
    pub fn from_fields(fields: HslFields) -> Self {
        Self::new(
            fields.hue.unwrap_or(0.0),
            fields.saturation.unwrap_or(0.0),
            fields.lightness.unwrap_or(0.0),
            fields.alpha.unwrap_or(1.0),
        )
    }

    /// Parse CSS functional notation, accepting only the `hsl()` and
    /// `hsla()` functions. The two names parse identically; both the
    /// comma- and the space-separated forms are accepted, with `/` before
    /// a space-separated alpha.
    pub fn from_functional_str(input: &str) -> Result<Self, ParseColorError> {
        let unparsable = || ParseColorError::UnparsableColor(input.to_string());

        let call = functional::scan(input.trim()).ok_or_else(unparsable)?;
        if !call.name_matches(&["hsl", "hsla"]) {
            return Err(unparsable());
        }
        if !(3..=4).contains(&call.args.len()) {
            return Err(ParseColorError::InvalidComponentCount(call.args.len()));
        }

        let tokens: Vec<Token> = call.args.iter().map(|arg| Token::from(*arg)).collect();
        Self::apply(&tokens)
    }

    /// Parse a string as an HSL color: the `transparent` keyword or
    /// functional notation. No RGB pre-conversion of any kind happens
    /// here.
    pub fn from_string(input: &str) -> Result<Self, ParseColorError> {
        let clean = input.trim().to_ascii_lowercase();

        if clean == "transparent" {
            return Ok(Self::new(0.0, 0.0, 0.0, 0.0));
        }

        Self::from_functional_str(&clean)
    }

    /// Serialize as functional notation, `hsl(H, S%, L%)`, switching to
    /// `hsla()` with the alpha appended when `force_alpha` is set or the
    /// color is not fully opaque. With `whole` the percentages round to
    /// whole numbers.
    pub fn to_functional_string(&self, force_alpha: bool, whole: bool) -> String {
        let hue = clean_float_str(self.hue, 4);
        let saturation = to_percent_string(self.saturation, whole);
        let lightness = to_percent_string(self.lightness, whole);

        if force_alpha || self.alpha != 1.0 {
            format!(
                "hsla({hue}, {saturation}, {lightness}, {})",
                clean_float_str(self.alpha, 4)
            )
        } else {
            format!("hsl({hue}, {saturation}, {lightness})")
        }
    }

    /// The components as an array in hue, saturation, lightness, alpha
    /// order.
    pub fn to_array(&self) -> [Component; 4] {
        [self.hue, self.saturation, self.lightness, self.alpha]
    }

    /// The WCAG relative luminance, computed through the RGB conversion.
    pub fn luminosity(&self) -> Component {
        self.to_rgb().luminosity()
    }

    /// The WCAG contrast ratio between this color and another.
    pub fn contrast(&self, other: &Hsl) -> Component {
        self.to_rgb().contrast(&other.to_rgb())
    }

    /// The WCAG accessibility level of the contrast between two colors.
    pub fn contrast_level(&self, other: &Hsl) -> &'static str {
        self.to_rgb().contrast_level(&other.to_rgb())
    }

    /// The YIQ brightness value, computed through the RGB conversion.
    pub fn to_yiq(&self) -> Component {
        self.to_rgb().to_yiq()
    }

    /// Whether this color reads as dark.
    pub fn is_dark(&self) -> bool {
        self.to_rgb().is_dark()
    }

    /// Whether this color reads as light.
    pub fn is_light(&self) -> bool {
        self.to_rgb().is_light()
    }

    /// Pick the candidate with the highest contrast against this color.
    /// An empty slice picks between black and white.
    pub fn pick_using_contrast(&self, options: &[Hsl]) -> Hsl {
        let rgb_options: Vec<crate::Rgb> = options.iter().map(Hsl::to_rgb).collect();
        self.to_rgb().pick_using_contrast(&rgb_options).to_hsl()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_functional_string(false, false))
    }
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn tokens(values: &[&str]) -> Vec<Token> {
        values.iter().map(|value| Token::from(*value)).collect()
    }

    #[test]
    fn new_wraps_hue_and_clamps_the_rest() {
        let color = Hsl::new(520.0, 1.5, -0.25, 2.0);
        assert_component_eq!(color.hue(), 160.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.lightness(), 0.0);
        assert_eq!(color.alpha(), 1.0);

        assert_component_eq!(Hsl::new(-90.0, 0.0, 0.0, 1.0).hue(), 270.0);
    }

    #[test]
    fn apply_accepts_numbers_and_angles_for_hue() {
        let color = Hsl::apply(&tokens(&["120", "50%", "50%"])).unwrap();
        assert_component_eq!(color.hue(), 120.0);
        assert_component_eq!(color.saturation(), 0.5);
        assert_component_eq!(color.lightness(), 0.5);

        let color = Hsl::apply(&tokens(&["90deg", "1", "0.5"])).unwrap();
        assert_component_eq!(color.hue(), 90.0);

        let color = Hsl::apply(&tokens(&["520", "1", "0.5"])).unwrap();
        assert_component_eq!(color.hue(), 160.0);
    }

    #[test]
    fn apply_zeroes_none_components() {
        let color = Hsl::apply(&tokens(&["none", "none", "none", "none"])).unwrap();
        assert_eq!(color.to_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn apply_rejects_percentage_hues() {
        let error = Hsl::apply(&tokens(&["50%", "1", "0.5"])).unwrap_err();
        assert!(matches!(
            error,
            ParseColorError::InvalidComponentType { component: "hue", .. }
        ));
    }

    #[test]
    fn apply_rejects_unparsable_components() {
        assert!(Hsl::apply(&tokens(&["bad", "1", "0.5"])).is_err());
        assert!(Hsl::apply(&tokens(&["120", "loud", "0.5"])).is_err());
        assert!(Hsl::apply(&tokens(&["120", "1", "0.5", "opaque"])).is_err());
    }

    #[test]
    fn apply_clamps_unit_components() {
        let color = Hsl::apply(&tokens(&["120", "150%", "-0.5", "2"])).unwrap();
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.lightness(), 0.0);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn set_overlays_onto_the_current_color() {
        let base = Hsl::new(120.0, 0.5, 0.25, 1.0);
        let color = base.set(&tokens(&["240"])).unwrap();
        assert_component_eq!(color.hue(), 240.0);
        assert_component_eq!(color.saturation(), 0.5);
        assert_component_eq!(color.lightness(), 0.25);
    }

    #[test]
    fn functional_parsing() {
        let color = Hsl::from_functional_str("hsl(120, 50%, 50%)").unwrap();
        assert_component_eq!(color.hue(), 120.0);
        assert_component_eq!(color.saturation(), 0.5);
        assert_component_eq!(color.lightness(), 0.5);
        assert_eq!(color.alpha(), 1.0);

        let color = Hsl::from_functional_str("hsl(120deg 100% 50% / 0.5)").unwrap();
        assert_component_eq!(color.hue(), 120.0);
        assert_component_eq!(color.saturation(), 1.0);
        assert_eq!(color.alpha(), 0.5);

        let color = Hsl::from_functional_str("HSLA(0.25turn, 50%, 50%)").unwrap();
        assert_component_eq!(color.hue(), 90.0);
    }

    #[test]
    fn functional_parsing_validates_arity() {
        assert!(matches!(
            Hsl::from_functional_str("hsl(120, 50%)"),
            Err(ParseColorError::InvalidComponentCount(2))
        ));
    }

    #[test]
    fn functional_parsing_rejects_other_functions() {
        assert!(Hsl::from_functional_str("rgb(255, 127, 64)").is_err());
        assert!(Hsl::from_functional_str("bad string").is_err());
    }

    #[test]
    fn from_string_accepts_transparent() {
        let color = Hsl::from_string("transparent").unwrap();
        assert_eq!(color.to_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn functional_serialization() {
        let color = Hsl::new(120.0, 0.5, 0.5, 1.0);
        assert_eq!(color.to_functional_string(false, false), "hsl(120, 50%, 50%)");
        assert_eq!(
            color.to_functional_string(true, false),
            "hsla(120, 50%, 50%, 1)"
        );
        assert_eq!(
            color.with_alpha(0.5).to_functional_string(false, false),
            "hsla(120, 50%, 50%, 0.5)"
        );
        assert_eq!(color.to_string(), "hsl(120, 50%, 50%)");
    }

    #[test]
    fn fields_default_missing_components() {
        let color = Hsl::from_fields(HslFields {
            hue: Some(200.0),
            saturation: Some(0.4),
            ..Default::default()
        });
        assert_component_eq!(color.hue(), 200.0);
        assert_component_eq!(color.saturation(), 0.4);
        assert_eq!(color.lightness(), 0.0);
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn delegated_operations_match_the_rgb_model() {
        let color = Hsl::new(25.0, 0.75, 0.470588, 1.0);
        let rgb = color.to_rgb();
        assert_component_eq!(color.luminosity(), rgb.luminosity());
        assert_eq!(color.is_dark(), rgb.is_dark());
    }
}
