//! Terminal width and markup capability detection
//!
//! Both detections are snapshots taken through a [`TermProbe`]; failures
//! never surface as errors, they fall through to defaults.

mod probe;

pub use probe::{FixedProbe, SystemProbe, TermProbe};

use log::debug;

/// Width assumed when no detection path yields a usable value
const DEFAULT_WIDTH: u16 = 80;

/// Determine the usable terminal width in columns.
///
/// Priority order:
/// 1. The platform size query (ioctl-style, via the probe)
/// 2. The `COLUMNS` environment variable, if it parses as a positive integer
/// 3. A default of 80
///
/// One column is subtracted from the resolved value as a margin against
/// line-wrap artifacts in some terminal emulators. The result is never
/// below 1.
pub fn detect_width(probe: &dyn TermProbe) -> u16 {
    let width = match probe.dimensions() {
        Some((columns, _)) if columns > 0 => columns,
        _ => match columns_from_env(probe) {
            Some(columns) => columns,
            None => {
                debug!("terminal size unavailable, assuming {} columns", DEFAULT_WIDTH);
                DEFAULT_WIDTH
            }
        },
    };

    width.saturating_sub(1).max(1)
}

fn columns_from_env(probe: &dyn TermProbe) -> Option<u16> {
    let raw = probe.env("COLUMNS")?;
    match raw.parse::<u16>() {
        Ok(columns) if columns > 0 => Some(columns),
        _ => {
            debug!("ignoring unusable COLUMNS value '{}'", raw);
            None
        }
    }
}

/// Decide whether a sink connected as `interactive` may carry ANSI markup.
///
/// Non-interactive sinks never do. Interactive ones do unless the terminal
/// declares itself incapable via `TERM=dumb`.
pub fn supports_markup(probe: &dyn TermProbe, interactive: bool) -> bool {
    if !interactive {
        return false;
    }
    probe.env("TERM").as_deref() != Some("dumb")
}
