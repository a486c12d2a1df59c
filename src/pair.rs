//! Duotone pair generation
//!
//! A dark, saturated primary color and a light secondary one with a roughly
//! complementary hue (opposite on the color wheel, give or take
//! [`HUE_OFFSET`] degrees).

use std::fmt::Display;

use rand::Rng;

use crate::random::Bounds;
use crate::Hsl;

pub const PRIMARY_HUE: Bounds = Bounds::new(0, 360);
pub const PRIMARY_SATURATION: Bounds = Bounds::new(60, 90);
pub const PRIMARY_LIGHTNESS: Bounds = Bounds::new(15, 35);
/// Deviation from the exact complementary hue
pub const HUE_OFFSET: Bounds = Bounds::new(-20, 20);
pub const SECONDARY_SATURATION: Bounds = Bounds::new(70, 100);
pub const SECONDARY_LIGHTNESS: Bounds = Bounds::new(70, 90);

/// Two contrasting colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuotonePair {
    /// Dark color
    pub primary: Hsl,
    /// Light color, with a hue close to the complementary of the primary
    pub secondary: Hsl,
}

/// Generate a new pair
///
/// Draws, in order: primary hue, saturation and lightness, the offset from
/// the complementary hue and secondary saturation and lightness. The same
/// rng state always produces the same pair.
///
/// A primary hue draw of 360 is stored as 0, the same angle, so hue 0 comes
/// out with a `2 / 361` chance and `hsl(360, ..)` is never produced.
pub fn generate_pair<R: Rng + ?Sized>(rng: &mut R) -> DuotonePair {
    let primary_hue = PRIMARY_HUE.sample(rng);
    let primary = Hsl {
        // 360 is the same angle as 0
        hue: (primary_hue % 360) as u16,
        saturation: PRIMARY_SATURATION.sample(rng) as u8,
        lightness: PRIMARY_LIGHTNESS.sample(rng) as u8,
    };

    let offset = HUE_OFFSET.sample(rng);
    let secondary = Hsl {
        hue: complementary_hue(primary_hue, offset),
        saturation: SECONDARY_SATURATION.sample(rng) as u8,
        lightness: SECONDARY_LIGHTNESS.sample(rng) as u8,
    };

    DuotonePair { primary, secondary }
}

/// Hue opposite to `hue`, moved by `offset` degrees, in `[0, 360)`
///
/// `offset` must be in `(-360, 360)`.
pub fn complementary_hue(hue: i32, offset: i32) -> u16 {
    let base = (hue + 180) % 360;
    // `%` keeps the sign of the dividend, +360 keeps it positive
    ((base + offset + 360) % 360) as u16
}

impl Display for DuotonePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "primary {}, secondary {}",
            self.primary, self.secondary
        )
    }
}
