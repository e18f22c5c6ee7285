use std::collections::HashMap;

/// Source of ambient terminal facts: the platform size query and
/// environment variables.
///
/// Detection reads the environment through this trait instead of touching
/// globals directly, so callers and tests can substitute fixed values.
pub trait TermProbe {
    /// Platform terminal-size query as `(columns, rows)`, `None` when the
    /// output descriptor has no measurable terminal.
    fn dimensions(&self) -> Option<(u16, u16)>;

    /// Read an environment variable.
    fn env(&self, key: &str) -> Option<String>;
}

/// Probe backed by the live process environment and terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl TermProbe for SystemProbe {
    fn dimensions(&self) -> Option<(u16, u16)> {
        terminal_size::terminal_size().map(|(width, height)| (width.0, height.0))
    }

    fn env(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Probe returning fixed values
#[derive(Debug, Clone, Default)]
pub struct FixedProbe {
    dimensions: Option<(u16, u16)>,
    vars: HashMap<String, String>,
}

impl FixedProbe {
    /// Probe with no measurable terminal and an empty environment
    pub fn new() -> FixedProbe {
        FixedProbe::default()
    }

    /// Set the size the platform query reports
    pub fn with_dimensions(mut self, columns: u16, rows: u16) -> FixedProbe {
        self.dimensions = Some((columns, rows));
        self
    }

    /// Set an environment variable
    pub fn with_var(mut self, key: &str, value: &str) -> FixedProbe {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl TermProbe for FixedProbe {
    fn dimensions(&self) -> Option<(u16, u16)> {
        self.dimensions
    }

    fn env(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
