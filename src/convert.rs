//! Conversion between the RGB and HSL notations.
//!
//! Conversions operate on the three color components; alpha passes
//! through untouched.

use crate::{Hsl, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, saturation, lightness) =
            util::rgb_to_hsl(self.red_unit(), self.green_unit(), self.blue_unit());
        Hsl::new(hue, saturation, lightness, self.alpha())
    }
}

impl Hsl {
    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = util::hsl_to_rgb(self.hue(), self.saturation(), self.lightness());
        Rgb::new(red, green, blue, self.alpha())
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

mod util {
    use crate::math::wrap_degrees;
    use crate::Component;

    /// Convert unit-float RGB components to HSL components.
    ///
    /// An achromatic color has no chroma; its hue and saturation are both
    /// 0 rather than dividing by zero.
    pub fn rgb_to_hsl(
        red: Component,
        green: Component,
        blue: Component,
    ) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let chroma = max - min;

        let hue = if chroma == 0.0 {
            0.0
        } else if max == red {
            wrap_degrees(60.0 * ((green - blue) / chroma))
        } else if max == green {
            60.0 * ((blue - red) / chroma + 2.0)
        } else {
            60.0 * ((red - green) / chroma + 4.0)
        };

        let lightness = (max + min) / 2.0;

        let saturation = if chroma == 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        (hue, saturation, lightness)
    }

    /// Convert HSL components to unit-float RGB components, assigning
    /// chroma and its second-largest companion per 60-degree hue sector.
    pub fn hsl_to_rgb(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> (Component, Component, Component) {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

        let (red, green, blue) = match (hue / 60.0) as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let offset = lightness - chroma / 2.0;
        (red + offset, green + offset, blue + offset)
    }
}
