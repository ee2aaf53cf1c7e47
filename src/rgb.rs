//! Model a color in the RGB color space.
//!
//! Channels are stored as unit floats and surfaced in both the unit and
//! the byte (0..255) representation. Ingestion paths that take byte-range
//! values truncate; serialization paths round, matching how CSS
//! serializes bytes.

use std::fmt;
use std::str::FromStr;

use euclid::default::Vector3D;

use crate::error::ParseColorError;
use crate::math::{clamp, clamp_byte, clamp_unit, clean_float_str, lerp, unit_from_byte};
use crate::parameter::{Param, ParamKind, Token};
use crate::{functional, hex, named, Component};

/// WCAG relative-luminance weights, applied to linearized channels.
const WCAG_WEIGHTS: Vector3D<Component> = Vector3D::new(0.2126, 0.7152, 0.0722);

/// NTSC luma weights. Deliberately different from the WCAG weights, these
/// drive the YIQ brightness value and desaturation.
const NTSC_WEIGHTS: Vector3D<Component> = Vector3D::new(0.299, 0.587, 0.114);

/// String output formats supported by [`Rgb::to_format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RgbFormat {
    /// A packed integer, alpha included only when not fully opaque.
    Integer,
    /// A packed integer with the alpha byte always included.
    IntegerAlpha,
    /// A hex string, alpha included only when not fully opaque.
    Hex,
    /// A hex string with the alpha pair always included.
    HexAlpha,
    /// Functional notation, `rgba()` only when not fully opaque.
    Functional,
    /// Functional notation, always `rgba()`.
    FunctionalAlpha,
}

impl RgbFormat {
    /// Resolve a format from its selector name, e.g. `"HEX_ALPHA"`.
    /// Matching ignores case.
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: [(&str, RgbFormat); 6] = [
            ("INTEGER", RgbFormat::Integer),
            ("INTEGER_ALPHA", RgbFormat::IntegerAlpha),
            ("HEX", RgbFormat::Hex),
            ("HEX_ALPHA", RgbFormat::HexAlpha),
            ("FUNCTIONAL", RgbFormat::Functional),
            ("FUNCTIONAL_ALPHA", RgbFormat::FunctionalAlpha),
        ];

        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, format)| *format)
    }
}

/// Recognized channel fields for building an [`Rgb`] from key/value data.
/// Channels are byte-range values; missing channels default to 0 and a
/// missing alpha to fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbFields {
    /// The red channel, 0..255.
    pub red: Option<Component>,
    /// The green channel, 0..255.
    pub green: Option<Component>,
    /// The blue channel, 0..255.
    pub blue: Option<Component>,
    /// The alpha component as a unit float.
    pub alpha: Option<Component>,
}

/// Any single value an [`Rgb`] color can be parsed from, dispatched by
/// [`Rgb::parse`].
#[derive(Clone, Debug)]
pub enum ColorInput<'a> {
    /// A packed `0xRRGGBB` integer.
    Integer(u32),
    /// Textual notation: a named color, hex code or functional notation.
    Text(&'a str),
    /// Individual component tokens in red, green, blue, alpha order.
    Components(&'a [Token]),
    /// Key/value channel data.
    Fields(RgbFields),
    /// An existing color, taken as-is.
    Color(Rgb),
}

impl From<u32> for ColorInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(value)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a [Token]> for ColorInput<'a> {
    fn from(value: &'a [Token]) -> Self {
        Self::Components(value)
    }
}

impl From<RgbFields> for ColorInput<'_> {
    fn from(value: RgbFields) -> Self {
        Self::Fields(value)
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(value: Rgb) -> Self {
        Self::Color(value)
    }
}

/// An RGB color with an alpha component.
///
/// Values are immutable; every `with_*` or `apply` operation returns a
/// new instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    red: Component,
    green: Component,
    blue: Component,
    alpha: Component,
}

impl Default for Rgb {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Rgb = Rgb {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Create a new color from unit-float components. Each component is
    /// clamped to the unit range.
    pub fn new(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
        }
    }

    /// Create an opaque color from byte channels.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as Component / 255.0,
            green: green as Component / 255.0,
            blue: blue as Component / 255.0,
            alpha: 1.0,
        }
    }

    /// Parse any of the supported input forms into a color.
    ///
    /// Integers are taken as packed `0xRRGGBB`. Text dispatches through
    /// the `transparent` keyword, the named-color table, the hex decoder
    /// and the functional-notation parser, in that order. Component
    /// tokens and field data apply onto opaque black.
    pub fn parse<'a>(input: impl Into<ColorInput<'a>>) -> Result<Self, ParseColorError> {
        match input.into() {
            ColorInput::Integer(value) => Ok(Self::from_integer(value, false, false)),
            ColorInput::Text(text) => Self::from_string(text),
            ColorInput::Components(tokens) => Ok(Self::default().apply(tokens)),
            ColorInput::Fields(fields) => Ok(Self::from_fields(fields)),
            ColorInput::Color(color) => Ok(color),
        }
    }

    /// The red component as a byte.
    pub fn red(&self) -> u8 {
        (self.red * 255.0).round() as u8
    }

    /// The green component as a byte.
    pub fn green(&self) -> u8 {
        (self.green * 255.0).round() as u8
    }

    /// The blue component as a byte.
    pub fn blue(&self) -> u8 {
        (self.blue * 255.0).round() as u8
    }

    /// The red component as a unit float.
    pub fn red_unit(&self) -> Component {
        self.red
    }

    /// The green component as a unit float.
    pub fn green_unit(&self) -> Component {
        self.green
    }

    /// The blue component as a unit float.
    pub fn blue_unit(&self) -> Component {
        self.blue
    }

    /// The alpha component as a unit float.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    fn alpha_byte(&self) -> u8 {
        (self.alpha * 255.0).round() as u8
    }

    /// Return a new color with the red channel set from a byte-range
    /// value. Fractions truncate.
    pub fn with_red(&self, byte: Component) -> Self {
        Self {
            red: unit_from_byte(clamp_byte(byte)),
            ..*self
        }
    }

    /// Return a new color with the green channel set from a byte-range
    /// value. Fractions truncate.
    pub fn with_green(&self, byte: Component) -> Self {
        Self {
            green: unit_from_byte(clamp_byte(byte)),
            ..*self
        }
    }

    /// Return a new color with the blue channel set from a byte-range
    /// value. Fractions truncate.
    pub fn with_blue(&self, byte: Component) -> Self {
        Self {
            blue: unit_from_byte(clamp_byte(byte)),
            ..*self
        }
    }

    /// Return a new color with the red channel set from a unit float.
    pub fn with_red_unit(&self, unit: Component) -> Self {
        Self {
            red: clamp_unit(unit),
            ..*self
        }
    }

    /// Return a new color with the green channel set from a unit float.
    pub fn with_green_unit(&self, unit: Component) -> Self {
        Self {
            green: clamp_unit(unit),
            ..*self
        }
    }

    /// Return a new color with the blue channel set from a unit float.
    pub fn with_blue_unit(&self, unit: Component) -> Self {
        Self {
            blue: clamp_unit(unit),
            ..*self
        }
    }

    /// Return a new color with the given alpha, clamped to the unit
    /// range.
    pub fn with_alpha(&self, alpha: Component) -> Self {
        Self {
            alpha: clamp_unit(alpha),
            ..*self
        }
    }

    /// Return a new color with the given component tokens applied in red,
    /// green, blue, alpha order.
    ///
    /// This is the lenient bulk setter: integers clamp to the byte range,
    /// floats truncate to bytes, percentages scale to the byte range, and
    /// the `none` keyword or an unparsable token degrades silently to 0.
    /// The alpha token is clamped to the unit range whatever its kind.
    /// Tokens past the fourth are ignored and channels without a token
    /// keep their current value.
    pub fn apply(&self, tokens: &[Token]) -> Self {
        let mut next = *self;

        for (index, token) in tokens.iter().take(4).enumerate() {
            let param = Param::classify(token);

            if index == 3 {
                next.alpha = clamp_unit(param.value);
                continue;
            }

            let byte = match param.kind {
                ParamKind::Integer => clamp(param.value, 0.0, 255.0),
                ParamKind::Float => clamp_byte(param.value),
                ParamKind::Percentage => clamp_byte(param.value * 255.0),
                _ => 0.0,
            };
            let unit = unit_from_byte(byte);

            match index {
                0 => next.red = unit,
                1 => next.green = unit,
                _ => next.blue = unit,
            }
        }

        next
    }

    /// Build a color from channel fields, defaulting missing channels to
    /// 0 and a missing alpha to fully opaque.
    pub fn from_fields(fields: RgbFields) -> Self {
        Self::default()
            .with_red(fields.red.unwrap_or(0.0))
            .with_green(fields.green.unwrap_or(0.0))
            .with_blue(fields.blue.unwrap_or(0.0))
            .with_alpha(fields.alpha.unwrap_or(1.0))
    }

    /// Unpack an integer into its RGB(A) channels.
    ///
    /// When `use_alpha` is set the alpha byte is taken from the least
    /// significant byte, or from the most significant byte when
    /// `alpha_msb` is also set. Without `use_alpha` the low 24 bits are
    /// the RGB channels and alpha defaults to fully opaque.
    pub fn from_integer(value: u32, use_alpha: bool, alpha_msb: bool) -> Self {
        let mut int = value;
        let mut alpha = 1.0;

        if use_alpha {
            let byte = if alpha_msb { int >> 24 } else { int } & 0xFF;
            alpha = byte as Component / 255.0;

            if alpha_msb {
                int &= 0xFF_FFFF;
            } else {
                int >>= 8;
            }
        }

        Self {
            red: (int >> 16 & 0xFF) as Component / 255.0,
            green: (int >> 8 & 0xFF) as Component / 255.0,
            blue: (int & 0xFF) as Component / 255.0,
            alpha,
        }
    }

    /// Pack this color into an integer as `R<<16 | G<<8 | B`.
    ///
    /// The alpha byte joins the result when `force_alpha` is set or the
    /// color is not fully opaque: by default the 24-bit RGB value shifts
    /// left and alpha becomes the least significant byte; with
    /// `alpha_msb` the RGB bits stay put and alpha occupies bits 24..32.
    /// The two layouts are structurally different, not a byte swap.
    pub fn to_integer(&self, force_alpha: bool, alpha_msb: bool) -> u32 {
        let mut value = u32::from(self.red()) << 16
            | u32::from(self.green()) << 8
            | u32::from(self.blue());

        if force_alpha || self.alpha != 1.0 {
            let alpha = u32::from(self.alpha_byte());
            value = if alpha_msb {
                alpha << 24 | value
            } else {
                value << 8 | alpha
            };
        }

        value
    }

    /// Parse a hexadecimal notation string. The `#` prefix is optional
    /// and matching is case-insensitive; shorthand nibbles widen to full
    /// bytes.
    pub fn from_hex_str(input: &str) -> Result<Self, ParseColorError> {
        let (red, green, blue, alpha) = hex::decode(input)?;
        Ok(Self::from_bytes(red, green, blue).with_alpha(alpha as Component / 255.0))
    }

    /// Serialize as a lowercase hex string with a `#` prefix.
    ///
    /// The alpha pair joins the output when `force_alpha` is set or the
    /// color is not fully opaque, appended at the end by default or
    /// directly after the `#` with `alpha_msb`.
    pub fn to_hex_string(&self, force_alpha: bool, alpha_msb: bool) -> String {
        let rgb = format!("{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue());

        if force_alpha || self.alpha != 1.0 {
            let alpha = format!("{:02x}", self.alpha_byte());
            if alpha_msb {
                format!("#{alpha}{rgb}")
            } else {
                format!("#{rgb}{alpha}")
            }
        } else {
            format!("#{rgb}")
        }
    }

    /// Parse CSS functional notation, accepting only the `rgb()` and
    /// `rgba()` functions. The two names parse identically; both the
    /// comma- and the space-separated forms are accepted, with `/` before
    /// a space-separated alpha.
    pub fn from_functional_str(input: &str) -> Result<Self, ParseColorError> {
        let unparsable = || ParseColorError::UnparsableColor(input.to_string());

        let call = functional::scan(input.trim()).ok_or_else(unparsable)?;
        if !call.name_matches(&["rgb", "rgba"]) {
            return Err(unparsable());
        }
        if !(3..=4).contains(&call.args.len()) {
            return Err(ParseColorError::InvalidComponentCount(call.args.len()));
        }

        let tokens: Vec<Token> = call.args.iter().map(|arg| Token::from(*arg)).collect();
        Ok(Self::default().apply(&tokens))
    }

    /// Serialize as functional notation, `rgb(R, G, B)`, switching to
    /// `rgba()` with the alpha appended when `force_alpha` is set or the
    /// color is not fully opaque.
    pub fn to_functional_string(&self, force_alpha: bool) -> String {
        if force_alpha || self.alpha != 1.0 {
            format!(
                "rgba({}, {}, {}, {})",
                self.red(),
                self.green(),
                self.blue(),
                clean_float_str(self.alpha, 4)
            )
        } else {
            format!("rgb({}, {}, {})", self.red(), self.green(), self.blue())
        }
    }

    /// Parse a string by trying each strategy in turn: the `transparent`
    /// keyword, the named-color table, hexadecimal notation, then
    /// functional notation. Rejections along the way surface at debug
    /// level; only full exhaustion is an error.
    pub fn from_string(input: &str) -> Result<Self, ParseColorError> {
        let clean = input.trim().to_ascii_lowercase();

        if clean == "transparent" {
            return Ok(Self::BLACK.with_alpha(0.0));
        }

        if let Some(packed) = named::lookup(&clean) {
            return Ok(Self::from_integer(packed, false, false));
        }

        match Self::from_hex_str(&clean) {
            Ok(color) => return Ok(color),
            Err(error) => log::debug!("hex strategy rejected {input:?}: {error}"),
        }

        match Self::from_functional_str(&clean) {
            Ok(color) => return Ok(color),
            Err(error) => log::debug!("functional strategy rejected {input:?}: {error}"),
        }

        Err(ParseColorError::UnparsableColor(input.to_string()))
    }

    /// Serialize with the given output format.
    pub fn to_format(&self, format: RgbFormat) -> String {
        match format {
            RgbFormat::Integer => self.to_integer(false, false).to_string(),
            RgbFormat::IntegerAlpha => self.to_integer(true, false).to_string(),
            RgbFormat::Hex => self.to_hex_string(false, false),
            RgbFormat::HexAlpha => self.to_hex_string(true, false),
            RgbFormat::Functional => self.to_functional_string(false),
            RgbFormat::FunctionalAlpha => self.to_functional_string(true),
        }
    }

    /// Serialize with a format resolved from its selector name. An
    /// unknown selector is not an error: a warning is logged and the
    /// output falls back to hex.
    pub fn to_format_named(&self, name: &str) -> String {
        match RgbFormat::from_name(name) {
            Some(format) => self.to_format(format),
            None => {
                log::warn!("unknown string format {name:?}, falling back to hex");
                self.to_hex_string(false, false)
            }
        }
    }

    /// The components as an array: byte channels followed by the unit
    /// alpha.
    pub fn to_array(&self) -> [Component; 4] {
        [
            self.red() as Component,
            self.green() as Component,
            self.blue() as Component,
            self.alpha,
        ]
    }

    /// The components as an array of unit floats.
    pub fn to_unit_array(&self) -> [Component; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// The WCAG relative luminance of this color.
    /// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    pub fn luminosity(&self) -> Component {
        fn linearize(channel: Component) -> Component {
            if channel < 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }

        WCAG_WEIGHTS.dot(Vector3D::new(
            linearize(self.red),
            linearize(self.green),
            linearize(self.blue),
        ))
    }

    /// The WCAG contrast ratio between this color and another, in the
    /// range 1..21. Symmetric in its arguments.
    pub fn contrast(&self, other: &Rgb) -> Component {
        let ours = self.luminosity();
        let theirs = other.luminosity();
        (ours.max(theirs) + 0.05) / (ours.min(theirs) + 0.05)
    }

    /// The WCAG accessibility level the contrast between the two colors
    /// reaches: `"AAA"`, `"AA"`, or `""` when neither level is met.
    pub fn contrast_level(&self, other: &Rgb) -> &'static str {
        let ratio = self.contrast(other);
        if ratio >= 7.1 {
            "AAA"
        } else if ratio >= 4.5 {
            "AA"
        } else {
            ""
        }
    }

    /// The YIQ brightness value of this color, in the range 0..255.
    pub fn to_yiq(&self) -> Component {
        NTSC_WEIGHTS.dot(Vector3D::new(
            self.red() as Component,
            self.green() as Component,
            self.blue() as Component,
        ))
    }

    /// Whether this color reads as dark, thresholding the YIQ value
    /// at 128.
    pub fn is_dark(&self) -> bool {
        self.to_yiq() < 128.0
    }

    /// Whether this color reads as light.
    pub fn is_light(&self) -> bool {
        self.to_yiq() >= 128.0
    }

    /// Linearly interpolate from this color to another, including the
    /// alpha component, using `t` as the progress between them.
    pub fn lerp(&self, other: &Rgb, t: Component) -> Rgb {
        Rgb::new(
            lerp(self.red, other.red, t),
            lerp(self.green, other.green, t),
            lerp(self.blue, other.blue, t),
            lerp(self.alpha, other.alpha, t),
        )
    }

    /// Invert each RGB channel. Alpha is inverted only when
    /// `include_alpha` is set.
    pub fn invert(&self, include_alpha: bool) -> Rgb {
        Rgb::new(
            1.0 - self.red,
            1.0 - self.green,
            1.0 - self.blue,
            if include_alpha {
                1.0 - self.alpha
            } else {
                self.alpha
            },
        )
    }

    /// Desaturate toward the NTSC-weighted gray by `fraction`, where 1
    /// yields the fully grayscale color.
    pub fn desaturate(&self, fraction: Component) -> Rgb {
        let gray = NTSC_WEIGHTS.dot(Vector3D::new(self.red, self.green, self.blue));
        let t = clamp_unit(fraction);

        Rgb::new(
            lerp(self.red, gray, t),
            lerp(self.green, gray, t),
            lerp(self.blue, gray, t),
            self.alpha,
        )
    }

    /// Pick the candidate with the highest contrast against this color.
    /// An empty slice picks between black and white.
    pub fn pick_using_contrast(&self, options: &[Rgb]) -> Rgb {
        const FALLBACK: [Rgb; 2] = [Rgb::BLACK, Rgb::WHITE];

        let candidates = if options.is_empty() {
            &FALLBACK[..]
        } else {
            options
        };

        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if self.contrast(candidate) > self.contrast(&best) {
                best = *candidate;
            }
        }
        best
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_functional_string(false))
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
