//! Bounded random integers

use rand::Rng;

use crate::Error;

/// Inclusive integer range to draw from
///
/// Built with a `const fn` so the fixed ranges used by the generator are
/// checked at compile time:
///
/// ```
/// use duotone::random::Bounds;
/// const DICE: Bounds = Bounds::new(1, 6);
/// assert_eq!(DICE.min(), 1);
/// assert_eq!(DICE.max(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i32,
    max: i32,
}

impl Bounds {
    /// Panics if `min > max`. In a `const` this is a compile error.
    pub const fn new(min: i32, max: i32) -> Self {
        assert!(min <= max, "empty bounds");
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draw an integer uniformly from `[min, max]`
    ///
    /// Scales a single uniform `[0, 1)` float over the range, so every
    /// value has the same `1 / (max - min + 1)` chance.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let unit: f64 = rng.gen();
        let span = f64::from(self.max) - f64::from(self.min) + 1.0;
        let offset = (unit * span).floor() as i64;
        // float rounding can land on `span` for huge ranges
        (i64::from(self.min) + offset).min(i64::from(self.max)) as i32
    }
}

/// Random integer between `min` and `max`, both inclusive
///
/// The bounds are rounded inwards (`min` up, `max` down) before drawing.
///
/// ```
/// use rand::SeedableRng;
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
/// let n = duotone::random::random_int(&mut rng, 0.5, 2.5).unwrap();
/// assert!(n == 1 || n == 2);
/// ```
///
/// # Errors
///
/// [`Error::InvalidRange`] if a bound is not finite, does not fit an `i32`
/// or the rounded range is empty.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<i32, Error> {
    let invalid = || Error::InvalidRange { min, max };
    if !min.is_finite() || !max.is_finite() {
        return Err(invalid());
    }
    let low = min.ceil();
    let high = max.floor();
    if low > high || low < f64::from(i32::MIN) || high > f64::from(i32::MAX) {
        return Err(invalid());
    }
    Ok(Bounds::new(low as i32, high as i32).sample(rng))
}
