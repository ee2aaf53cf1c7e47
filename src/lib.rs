//! tinct models colors in the RGB and HSL notations and converts them to
//! and from the textual forms used by CSS: hex codes, functional notation,
//! named colors and packed integers.

#![deny(missing_docs)]

mod convert;
mod error;
mod functional;
mod hex;
mod hsl;
pub mod math;
pub mod named;
mod parameter;
mod rgb;
#[cfg(test)]
mod test;

pub use error::ParseColorError;
pub use hsl::{Hsl, HslFields};
pub use parameter::{Param, ParamKind, Token};
pub use rgb::{ColorInput, Rgb, RgbFields, RgbFormat};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;
