//! Targets for the generated colors

use std::fmt::Display;
use std::io;

/// Style variable holding the primary color
pub const PRIMARY_VAR: &str = "--duotone-primary";
/// Style variable holding the secondary color
pub const SECONDARY_VAR: &str = "--duotone-secondary";

/// Something that accepts named style variables, like the root element of a
/// document
pub trait StyleSurface {
    /// Set (or replace) the variable `name` to `value`
    fn set_property(&mut self, name: &str, value: &str) -> io::Result<()>;
}

/// Where to apply the colors, if anywhere
///
/// ```
/// use duotone::{StyleSheet, Surface};
/// let mut sheet = StyleSheet::default();
/// assert!(Surface::from(Some(&mut sheet)).is_available());
/// assert!(!Surface::from(None::<&mut StyleSheet>).is_available());
/// ```
pub enum Surface<'a> {
    Available(&'a mut dyn StyleSurface),
    Unavailable,
}

impl Surface<'_> {
    pub fn is_available(&self) -> bool {
        matches!(self, Surface::Available(_))
    }
}

impl<'a, S: StyleSurface + 'a> From<Option<&'a mut S>> for Surface<'a> {
    fn from(value: Option<&'a mut S>) -> Self {
        match value {
            Some(s) => Surface::Available(s),
            None => Surface::Unavailable,
        }
    }
}

impl std::fmt::Debug for Surface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available(_) => f.write_str("Available(..)"),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// In memory CSS rule
///
/// Variables keep the order in which they were first set. The [`Display`]
/// impl writes the rule:
///
/// ```
/// use duotone::{StyleSheet, StyleSurface};
/// let mut sheet = StyleSheet::new("body");
/// sheet.set_property("--accent", "hsl(1, 2%, 3%)").unwrap();
/// assert_eq!(sheet.to_string(), "body {\n  --accent: hsl(1, 2%, 3%);\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    selector: String,
    properties: Vec<(String, String)>,
}

impl StyleSheet {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: Vec::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.properties
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new(":root")
    }
}

impl StyleSurface for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) -> io::Result<()> {
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .properties
                .push((name.to_string(), value.to_string())),
        }
        Ok(())
    }
}

impl Display for StyleSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (name, value) in &self.properties {
            writeln!(f, "  {name}: {value};")?;
        }
        writeln!(f, "}}")
    }
}
