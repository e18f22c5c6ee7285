use serde::{Deserialize, Serialize};

use crate::error::{Result, TermlineError};

/// Text encoding used when a sink takes bytes rather than native text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, the platform default
    #[default]
    Utf8,
    /// ISO 8859-1, one byte per code point up to U+00FF
    Latin1,
}

impl Encoding {
    /// Serialize text to bytes in this encoding.
    ///
    /// Latin-1 can only carry the first 256 code points; anything beyond
    /// that is an [`TermlineError::Encoding`] error.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(c as u32).map_err(|_| {
                        TermlineError::Encoding(format!("character '{}' does not fit latin1", c))
                    })
                })
                .collect(),
        }
    }

    /// Decode bytes produced by [`Encoding::encode`] back into text
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| TermlineError::Encoding(e.to_string())),
            Encoding::Latin1 => Ok(bytes.iter().map(|b| char::from(*b)).collect()),
        }
    }
}
