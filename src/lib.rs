//! Random complementary duotone colors
//!
//! Generates a pair of contrasting [`Hsl`] colors, a dark primary and a light
//! secondary with a near complementary hue, and applies them as the
//! `--duotone-primary` and `--duotone-secondary` style variables of a
//! [`StyleSurface`].
//!
//! Use [`generate_and_apply_duotone_colors`] for a one shot with a fresh
//! random seed, or a [`Duotone`] generator to control the seed and reuse it.
//!
//! ```
//! use duotone::{Duotone, StyleSheet, Surface};
//!
//! let mut sheet = StyleSheet::default();
//! let pair = Duotone::with_seed(7)
//!     .apply(Surface::Available(&mut sheet))
//!     .unwrap()
//!     .expect("surface is available");
//! assert_eq!(sheet.get("--duotone-primary"), Some(pair.primary.to_string().as_str()));
//! ```

pub mod hsl;
pub mod pair;
pub mod random;
pub mod surface;

use rand::SeedableRng;
use rand_pcg::Pcg64 as Pcg;
use tracing::{info, warn};

pub use hsl::{Hsl, HslParseError};
pub use pair::{generate_pair, DuotonePair};
pub use surface::{StyleSheet, StyleSurface, Surface};

use surface::{PRIMARY_VAR, SECONDARY_VAR};

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}
pub(crate) use regex;

/// Generate a new pair and apply it to `surface`
///
/// The generator is seeded from entropy. See [`Duotone::apply`].
pub fn generate_and_apply_duotone_colors(
    surface: Surface<'_>,
) -> Result<Option<DuotonePair>, Error> {
    Duotone::new().apply(surface)
}

/// Duotone pair generator
#[derive(Debug, Clone, PartialEq)]
pub struct Duotone {
    rng: Pcg,
}

impl Duotone {
    /// Create a new generator
    ///
    /// Seed is autogenerated from entropy.
    pub fn new() -> Self {
        Self::from_rng(Pcg::from_entropy())
    }
    /// Create a new generator with a seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Pcg::seed_from_u64(seed))
    }
    fn from_rng(rng: Pcg) -> Self {
        Self { rng }
    }
}

impl Default for Duotone {
    fn default() -> Self {
        Self::new()
    }
}

impl Duotone {
    /// Generate the next pair
    pub fn generate(&mut self) -> DuotonePair {
        generate_pair(&mut self.rng)
    }

    /// Generate a pair and set it as the style variables of `surface`
    ///
    /// If there is no surface nothing is generated, a warning is logged and
    /// `Ok(None)` returned.
    pub fn apply(&mut self, surface: Surface<'_>) -> Result<Option<DuotonePair>, Error> {
        let Surface::Available(target) = surface else {
            warn!("No style surface available, duotone variables will not be set");
            return Ok(None);
        };

        let pair = self.generate();
        target.set_property(PRIMARY_VAR, &pair.primary.to_string())?;
        target.set_property(SECONDARY_VAR, &pair.secondary.to_string())?;

        info!("Applied complementary duotone colors: {}", pair);
        Ok(Some(pair))
    }
}

/// Duotone error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty, non finite or too big range in [`random::random_int`]
    #[error("invalid range: [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
    /// Writing to a [`StyleSurface`]
    #[error("style surface: {0}")]
    Surface(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct BrokenSurface;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` and return everything it logged at INFO and above
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    impl StyleSurface for BrokenSurface {
        fn set_property(&mut self, _name: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn unavailable_is_noop() {
        let mut generator = Duotone::with_seed(1);
        let before = generator.clone();
        assert!(generator.apply(Surface::Unavailable).unwrap().is_none());
        assert_eq!(generator, before);
        assert!(generate_and_apply_duotone_colors(Surface::Unavailable)
            .unwrap()
            .is_none());
    }

    #[test]
    fn unavailable_warns() {
        let logs = capture_logs(|| {
            let applied = Duotone::with_seed(1).apply(Surface::Unavailable).unwrap();
            assert!(applied.is_none());
        });
        let lines = logs.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1, "{logs}");
        assert!(lines[0].contains("WARN"), "{logs}");
        assert!(lines[0].contains("No style surface available"), "{logs}");
    }

    #[test]
    fn apply_logs_both_colors() {
        let mut sheet = StyleSheet::default();
        let mut pair = None;
        let logs = capture_logs(|| {
            pair = Duotone::with_seed(11)
                .apply(Surface::Available(&mut sheet))
                .unwrap();
        });
        let pair = pair.expect("surface is available");
        let lines = logs.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1, "{logs}");
        assert!(lines[0].contains("INFO"), "{logs}");
        assert!(!logs.contains("WARN"), "{logs}");
        assert!(lines[0].contains(&pair.primary.to_string()), "{logs}");
        assert!(lines[0].contains(&pair.secondary.to_string()), "{logs}");
    }

    #[test]
    fn sets_both_variables() {
        for seed in 0..200 {
            let mut sheet = StyleSheet::default();
            let pair = Duotone::with_seed(seed)
                .apply(Surface::Available(&mut sheet))
                .unwrap()
                .unwrap();

            let primary: Hsl = sheet.get("--duotone-primary").unwrap().parse().unwrap();
            let secondary: Hsl = sheet.get("--duotone-secondary").unwrap().parse().unwrap();
            assert_eq!(primary, pair.primary);
            assert_eq!(secondary, pair.secondary);

            assert!(primary.hue() < 360);
            assert!((60..=90).contains(&primary.saturation()));
            assert!((15..=35).contains(&primary.lightness()));
            assert!((70..=100).contains(&secondary.saturation()));
            assert!((70..=90).contains(&secondary.lightness()));
        }
    }

    #[test]
    fn entropy_seeded_apply() {
        let mut sheet = StyleSheet::default();
        let pair = generate_and_apply_duotone_colors(Surface::Available(&mut sheet))
            .unwrap()
            .unwrap();
        assert_eq!(sheet.get(PRIMARY_VAR), Some(pair.primary.to_string().as_str()));
        assert_eq!(sheet.get(SECONDARY_VAR), Some(pair.secondary.to_string().as_str()));
    }

    #[test]
    fn apply_matches_generate() {
        let mut sheet = StyleSheet::default();
        let applied = Duotone::with_seed(99)
            .apply(Surface::Available(&mut sheet))
            .unwrap();
        let generated = Duotone::with_seed(99).generate();
        assert_eq!(applied, Some(generated));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Duotone::with_seed(5);
        let mut b = Duotone::with_seed(5);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn surface_error() {
        let err = Duotone::with_seed(0)
            .apply(Surface::Available(&mut BrokenSurface))
            .unwrap_err();
        assert!(matches!(err, Error::Surface(_)));
    }
}
