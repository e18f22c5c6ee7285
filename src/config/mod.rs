//! Output configuration
//!
//! Optional TOML-backed settings that override what detection decides:
//! a fixed column width, markup forced on or off, and the byte encoding.
//! Everything defaults to "let detection decide".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, TermlineError};
use crate::sink::Encoding;
use crate::writer::TerminalWriter;

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Encoding used when the sink takes bytes
    pub encoding: Encoding,

    /// Force markup on or off, overriding terminal detection
    pub markup: Option<bool>,

    /// Fixed column width, overriding terminal detection
    pub width: Option<u16>,
}

impl OutputConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<OutputConfig> {
        let content = fs::read_to_string(path).map_err(|e| {
            TermlineError::Config(format!(
                "Cannot read config from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: OutputConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<OutputConfig> {
        Ok(toml::from_str(content)?)
    }

    /// Apply the overrides to an already-constructed writer
    pub fn apply(&self, writer: &mut TerminalWriter) {
        writer.set_encoding(self.encoding);
        if let Some(markup) = self.markup {
            writer.set_markup(markup);
        }
        if let Some(width) = self.width {
            writer.set_fullwidth(width);
        }
    }
}
