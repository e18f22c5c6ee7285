//! Style options and their validation
//!
//! A [`StyleOptions`] value is an ordered list of named boolean flags.
//! Names are validated against the fixed [`StyleAttr`] enumeration when the
//! text is rendered; a name outside the set is rejected, and so is a
//! recognized flag passed with a `false` value — a flag must be truthy to
//! enable its attribute.

mod attr;

pub use attr::StyleAttr;

use yansi::Style;

use crate::error::{Result, TermlineError};

/// Ordered collection of named style flags for one piece of text
#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    flags: Vec<(String, bool)>,
}

impl StyleOptions {
    /// No flags; renders text unchanged
    pub fn new() -> StyleOptions {
        StyleOptions::default()
    }

    /// Request a named flag with an explicit on/off value
    pub fn set(mut self, name: &str, on: bool) -> StyleOptions {
        self.flags.push((name.to_string(), on));
        self
    }

    /// Enable a named flag
    pub fn with(self, name: &str) -> StyleOptions {
        self.set(name, true)
    }

    pub fn bold(self) -> StyleOptions {
        self.with("bold")
    }

    pub fn red(self) -> StyleOptions {
        self.with("red")
    }

    pub fn green(self) -> StyleOptions {
        self.with("green")
    }

    pub fn yellow(self) -> StyleOptions {
        self.with("yellow")
    }

    pub fn blue(self) -> StyleOptions {
        self.with("blue")
    }

    pub fn cyan(self) -> StyleOptions {
        self.with("cyan")
    }

    pub fn invert(self) -> StyleOptions {
        self.with("invert")
    }

    /// Whether no flags were requested
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Validate every flag and fold the attributes into an ANSI style
    pub(crate) fn resolve(&self) -> Result<Style> {
        let mut style = Style::new();
        for (name, on) in &self.flags {
            let attr = StyleAttr::from_name(name)
                .ok_or_else(|| TermlineError::InvalidStyleOption(name.clone()))?;
            if !*on {
                return Err(TermlineError::InvalidStyleOption(format!(
                    "{}=false",
                    name
                )));
            }
            style = attr.apply(style);
        }
        Ok(style)
    }
}
