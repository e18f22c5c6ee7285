//! Line-oriented terminal writer
//!
//! Ties a sink to the detected terminal capabilities: column width for
//! separators and markup eligibility for styled text. Width and markup
//! support are snapshots taken at construction; the setters override them
//! and every write consults the current value at call time.

use unicode_width::UnicodeWidthStr;
use yansi::Paint as _;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::sink::{Encoding, Sink};
use crate::style::StyleOptions;
use crate::term::{self, SystemProbe, TermProbe};

/// Writes lines and separators to a sink, with optional ANSI markup
#[derive(Debug)]
pub struct TerminalWriter {
    sink: Sink,
    fullwidth: u16,
    hasmarkup: bool,
    encoding: Encoding,
}

impl TerminalWriter {
    /// Writer over the given sink, probing the live environment
    pub fn new(sink: Sink) -> TerminalWriter {
        TerminalWriter::with_probe(sink, &SystemProbe)
    }

    /// Writer over the process stdout
    pub fn stdout() -> TerminalWriter {
        TerminalWriter::new(Sink::stdout())
    }

    /// Writer with width and markup support taken from `probe`
    pub fn with_probe(sink: Sink, probe: &dyn TermProbe) -> TerminalWriter {
        let fullwidth = term::detect_width(probe);
        let hasmarkup = term::supports_markup(probe, sink.is_interactive());
        TerminalWriter {
            sink,
            fullwidth,
            hasmarkup,
            encoding: Encoding::default(),
        }
    }

    /// Writer with config overrides applied on top of detection
    pub fn with_config(sink: Sink, config: &OutputConfig) -> TerminalWriter {
        let mut writer = TerminalWriter::new(sink);
        config.apply(&mut writer);
        writer
    }

    /// Cached effective column count
    pub fn fullwidth(&self) -> u16 {
        self.fullwidth
    }

    /// Override the cached column count; clamped to at least 1
    pub fn set_fullwidth(&mut self, fullwidth: u16) {
        self.fullwidth = fullwidth.max(1);
    }

    /// Whether styled writes embed ANSI sequences
    pub fn has_markup(&self) -> bool {
        self.hasmarkup
    }

    /// Override markup support
    pub fn set_markup(&mut self, hasmarkup: bool) {
        self.hasmarkup = hasmarkup;
    }

    /// Encoding used when the sink takes bytes
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Change the encoding used when the sink takes bytes
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    /// Render `text` with the given style flags.
    ///
    /// Flags are validated regardless of markup support. With markup off
    /// (or no flags) the text comes back unchanged; with markup on it is
    /// wrapped in the start/reset sequence pair for the enabled
    /// attributes, leaving the original text findable as a contiguous
    /// substring. Never writes to the sink.
    pub fn markup(&self, text: &str, style: &StyleOptions) -> Result<String> {
        let resolved = style.resolve()?;
        if !self.hasmarkup || style.is_empty() {
            return Ok(text.to_string());
        }
        Ok(text.paint(resolved).to_string())
    }

    /// Write `text` as-is, without a trailing newline
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.write_styled(text, &StyleOptions::new())
    }

    /// Write styled `text`, without a trailing newline
    pub fn write_styled(&mut self, text: &str, style: &StyleOptions) -> Result<()> {
        let rendered = self.markup(text, style)?;
        self.sink.write_chunk(&rendered, self.encoding)
    }

    /// Write `text` followed by a newline, as one chunk
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.line_styled(text, &StyleOptions::new())
    }

    /// Write styled `text` followed by a newline, as one chunk
    pub fn line_styled(&mut self, text: &str, style: &StyleOptions) -> Result<()> {
        let mut rendered = self.markup(text, style)?;
        rendered.push('\n');
        self.sink.write_chunk(&rendered, self.encoding)
    }

    /// Write a separator line filling the cached width
    pub fn sep(&mut self, sepchar: &str, title: Option<&str>) -> Result<()> {
        self.sep_with_width(sepchar, title, self.fullwidth)
    }

    /// Write a separator line filling an explicit width.
    ///
    /// With a title, `" " + title + " "` is centered between two runs of
    /// `sepchar`; when the remaining width is odd the right run gets the
    /// extra column. Run lengths are display widths, so multi-character
    /// or wide separators repeat whole without overshooting.
    pub fn sep_with_width(
        &mut self,
        sepchar: &str,
        title: Option<&str>,
        fullwidth: u16,
    ) -> Result<()> {
        let fullwidth = fullwidth as usize;
        let sep_len = sepchar.width().max(1);
        let line = match title {
            Some(title) => {
                let titled = format!(" {} ", title);
                let rem = fullwidth.saturating_sub(titled.width());
                let left = (rem / 2) / sep_len;
                let right = (rem - left * sep_len) / sep_len;
                format!("{}{}{}", sepchar.repeat(left), titled, sepchar.repeat(right))
            }
            None => sepchar.repeat(fullwidth / sep_len),
        };
        self.line(&line)
    }

    /// Flush a stream sink; no-op for buffers and callbacks
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Contents written so far, for buffer sinks
    pub fn buffer_contents(&self) -> Option<&str> {
        self.sink.buffer_contents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::FixedProbe;

    fn buffer_writer() -> TerminalWriter {
        TerminalWriter::with_probe(Sink::buffer(), &FixedProbe::new())
    }

    #[test]
    fn test_line_appends_newline() {
        let mut tw = buffer_writer();
        tw.line("hello").unwrap();
        assert_eq!(tw.buffer_contents(), Some("hello\n"));
    }

    #[test]
    fn test_write_appends_nothing() {
        let mut tw = buffer_writer();
        tw.write("hello").unwrap();
        assert_eq!(tw.buffer_contents(), Some("hello"));
    }

    #[test]
    fn test_markup_passthrough_without_support() {
        let tw = buffer_writer();
        assert!(!tw.has_markup());
        let rendered = tw.markup("hello", &StyleOptions::new().red().bold()).unwrap();
        assert_eq!(rendered, "hello");
    }

    #[test]
    fn test_markup_wraps_when_enabled() {
        let mut tw = buffer_writer();
        tw.set_markup(true);
        let rendered = tw.markup("hello", &StyleOptions::new().red().bold()).unwrap();
        assert!(rendered.contains("hello"));
        assert!(rendered.len() > "hello".len());
        assert!(rendered.contains('\x1b'));
    }

    #[test]
    fn test_markup_no_flags_is_identity_even_when_enabled() {
        let mut tw = buffer_writer();
        tw.set_markup(true);
        assert_eq!(tw.markup("hello", &StyleOptions::new()).unwrap(), "hello");
    }

    #[test]
    fn test_markup_validates_even_without_support() {
        let tw = buffer_writer();
        assert!(tw
            .markup("x", &StyleOptions::new().set("wrongopt", true))
            .is_err());
        assert!(tw.markup("x", &StyleOptions::new().set("red", false)).is_err());
    }

    #[test]
    fn test_sep_no_title() {
        let mut tw = buffer_writer();
        tw.sep_with_width("-", None, 60).unwrap();
        assert_eq!(tw.buffer_contents(), Some(format!("{}\n", "-".repeat(60)).as_str()));
    }

    #[test]
    fn test_sep_with_title_splits_26_27() {
        let mut tw = buffer_writer();
        tw.sep_with_width("-", Some("hello"), 60).unwrap();
        let expected = format!("{} hello {}\n", "-".repeat(26), "-".repeat(27));
        assert_eq!(tw.buffer_contents(), Some(expected.as_str()));
    }

    #[test]
    fn test_sep_uses_cached_fullwidth() {
        let mut tw = buffer_writer();
        tw.sep_with_width("-", Some("hello"), 70).unwrap();
        tw.set_fullwidth(70);
        tw.sep("-", Some("hello")).unwrap();
        let lines: Vec<&str> = tw.buffer_contents().unwrap().lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_sep_title_wider_than_line() {
        let mut tw = buffer_writer();
        tw.sep_with_width("-", Some("a very long title"), 10).unwrap();
        assert_eq!(tw.buffer_contents(), Some(" a very long title \n"));
    }

    #[test]
    fn test_sep_multichar_separator_never_overshoots() {
        let mut tw = buffer_writer();
        tw.sep_with_width("=-", None, 7).unwrap();
        assert_eq!(tw.buffer_contents(), Some("=-=-=-\n"));
    }

    #[test]
    fn test_set_fullwidth_clamps_to_one() {
        let mut tw = buffer_writer();
        tw.set_fullwidth(0);
        assert_eq!(tw.fullwidth(), 1);
    }

    #[test]
    fn test_default_width_without_detection() {
        assert_eq!(buffer_writer().fullwidth(), 79);
    }
}
