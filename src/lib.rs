//! Line-oriented terminal output with width detection and ANSI styling.
//!
//! A [`TerminalWriter`] is bound to exactly one [`Sink`] (a byte stream, an
//! in-memory buffer, or a callback) and decides at construction how many
//! columns the destination offers and whether it can render ANSI markup.
//! Everything funnels through one raw write primitive; lines and labeled
//! separators are built on top of it.

pub mod config;
pub mod error;
pub mod sink;
pub mod style;
pub mod term;
pub mod writer;

pub use config::OutputConfig;
pub use error::{Result, TermlineError};
pub use sink::{Encoding, Sink};
pub use style::{StyleAttr, StyleOptions};
pub use term::{FixedProbe, SystemProbe, TermProbe};
pub use writer::TerminalWriter;
