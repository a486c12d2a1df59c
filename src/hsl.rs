//! HSL colors

use std::{fmt::Display, str::FromStr};

use owo_colors::OwoColorize;
use palette::{FromColor, Srgb};

use crate::regex;

/// Hue/saturation/lightness color
///
/// Hue is in degrees `[0, 360]`, saturation and lightness are percentages
/// `[0, 100]`. The [`Display`] impl writes the CSS functional notation,
/// which [`FromStr`] reads back:
///
/// ```
/// use duotone::Hsl;
/// let color = Hsl::new(210, 80, 25).unwrap();
/// assert_eq!(color.to_string(), "hsl(210, 80%, 25%)");
/// assert_eq!("hsl(210, 80%, 25%)".parse::<Hsl>().unwrap(), color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub(crate) hue: u16,
    pub(crate) saturation: u8,
    pub(crate) lightness: u8,
}

const MAX_HUE: u16 = 360;
const MAX_PERCENT: u8 = 100;

impl Hsl {
    /// `None` if any component is out of range
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Option<Self> {
        if hue > MAX_HUE || saturation > MAX_PERCENT || lightness > MAX_PERCENT {
            return None;
        }
        Some(Self {
            hue,
            saturation,
            lightness,
        })
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    /// sRGB version, only used to preview the color in a terminal
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let hsl = palette::Hsl::new(
            f32::from(self.hue % MAX_HUE),
            f32::from(self.saturation) / 100.0,
            f32::from(self.lightness) / 100.0,
        );
        let rgb: Srgb<u8> = Srgb::from_color(hsl).into_format();
        (rgb.red, rgb.green, rgb.blue)
    }

    /// A block filled with this color for terminal output
    ///
    /// Always outputs ANSI color codes.
    pub fn swatch(&self) -> Swatch {
        Swatch(*self)
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Error from [`Hsl::from_str`]
#[derive(Debug, thiserror::Error)]
pub enum HslParseError {
    #[error("the input is not an hsl color")]
    NoMatch,
    #[error("invalid hsl color: {0}")]
    Invalid(String),
}

const HUE: &str = "hue";
const SATURATION: &str = "saturation";
const LIGHTNESS: &str = "lightness";

fn check_component<T: PartialOrd + Display>(
    value: T,
    max: T,
    part: &str,
) -> Result<T, HslParseError> {
    if value > max {
        return Err(HslParseError::Invalid(format!(
            "{part}: {value} is over {max}"
        )));
    }
    Ok(value)
}

impl FromStr for Hsl {
    type Err = HslParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = regex!(r"\A\s*hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})%\s*,\s*(\d{1,3})%\s*\)\s*\z");

        let caps = re.captures(s).ok_or(HslParseError::NoMatch)?;

        // at most 3 digits, always fits
        let hue = check_component(caps[1].parse::<u16>().unwrap(), MAX_HUE, HUE)?;
        let saturation = check_component(caps[2].parse::<u16>().unwrap(), 100, SATURATION)?;
        let lightness = check_component(caps[3].parse::<u16>().unwrap(), 100, LIGHTNESS)?;

        Ok(Self {
            hue,
            saturation: saturation as u8,
            lightness: lightness as u8,
        })
    }
}

/// See [`Hsl::swatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch(Hsl);

impl Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.0.to_rgb();
        let color = owo_colors::DynColors::Rgb(r, g, b);
        write!(f, "{}", "      ".on_color(color))
    }
}
