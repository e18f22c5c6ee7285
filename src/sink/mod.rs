//! Output sink abstraction
//!
//! A writer is bound to exactly one sink: an open writable byte stream, an
//! append-only in-memory buffer, or a callback invoked once per write.
//! Streams and byte callbacks take encoded bytes; buffers and text
//! callbacks take native text and skip the encoding step entirely.

mod encoding;

pub use encoding::Encoding;

use std::fmt;
use std::io::{self, IsTerminal, Write};

use crate::error::Result;

/// Destination accepting formatted output
pub enum Sink {
    /// An open writable byte stream, e.g. stdout or a file
    Stream {
        stream: Box<dyn Write>,
        interactive: bool,
    },
    /// Append-only in-memory text buffer with readback
    Buffer(String),
    /// Callback receiving each chunk as native text
    TextCallback(Box<dyn FnMut(&str)>),
    /// Callback receiving each chunk encoded to bytes
    BytesCallback(Box<dyn FnMut(&[u8])>),
}

impl Sink {
    /// Sink over the process stdout, noting whether it is a terminal
    pub fn stdout() -> Sink {
        Sink::Stream {
            interactive: io::stdout().is_terminal(),
            stream: Box::new(io::stdout()),
        }
    }

    /// Sink over the process stderr, noting whether it is a terminal
    pub fn stderr() -> Sink {
        Sink::Stream {
            interactive: io::stderr().is_terminal(),
            stream: Box::new(io::stderr()),
        }
    }

    /// Sink over an arbitrary byte stream, assumed non-interactive
    pub fn stream(stream: impl Write + 'static) -> Sink {
        Sink::Stream {
            stream: Box::new(stream),
            interactive: false,
        }
    }

    /// Sink over a byte stream whose terminal status the caller knows
    pub fn stream_with_interactive(stream: impl Write + 'static, interactive: bool) -> Sink {
        Sink::Stream {
            stream: Box::new(stream),
            interactive,
        }
    }

    /// Fresh in-memory buffer sink
    pub fn buffer() -> Sink {
        Sink::Buffer(String::new())
    }

    /// Callback sink receiving native text
    pub fn text_callback(callback: impl FnMut(&str) + 'static) -> Sink {
        Sink::TextCallback(Box::new(callback))
    }

    /// Callback sink receiving encoded bytes
    pub fn bytes_callback(callback: impl FnMut(&[u8]) + 'static) -> Sink {
        Sink::BytesCallback(Box::new(callback))
    }

    /// Whether the sink is connected to an interactive terminal
    pub fn is_interactive(&self) -> bool {
        match self {
            Sink::Stream { interactive, .. } => *interactive,
            _ => false,
        }
    }

    /// Contents written so far, for buffer sinks
    pub fn buffer_contents(&self) -> Option<&str> {
        match self {
            Sink::Buffer(contents) => Some(contents),
            _ => None,
        }
    }

    /// Hand one rendered chunk to the destination.
    ///
    /// I/O errors from stream sinks propagate unmodified; buffer and
    /// callback sinks cannot fail at this layer (an unencodable chunk for
    /// a bytes callback is an encoding error, not an I/O one).
    pub(crate) fn write_chunk(&mut self, chunk: &str, encoding: Encoding) -> Result<()> {
        match self {
            Sink::Stream { stream, .. } => stream.write_all(&encoding.encode(chunk)?)?,
            Sink::Buffer(contents) => contents.push_str(chunk),
            Sink::TextCallback(callback) => callback(chunk),
            Sink::BytesCallback(callback) => callback(&encoding.encode(chunk)?),
        }
        Ok(())
    }

    /// Flush a stream sink; no-op for buffers and callbacks
    pub(crate) fn flush(&mut self) -> Result<()> {
        if let Sink::Stream { stream, .. } = self {
            stream.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stream { interactive, .. } => f
                .debug_struct("Stream")
                .field("interactive", interactive)
                .finish_non_exhaustive(),
            Sink::Buffer(contents) => f.debug_tuple("Buffer").field(&contents.len()).finish(),
            Sink::TextCallback(_) => f.write_str("TextCallback"),
            Sink::BytesCallback(_) => f.write_str("BytesCallback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_buffer_appends_text() {
        let mut sink = Sink::buffer();
        sink.write_chunk("hello ", Encoding::Utf8).unwrap();
        sink.write_chunk("world", Encoding::Utf8).unwrap();
        assert_eq!(sink.buffer_contents(), Some("hello world"));
    }

    #[test]
    fn test_buffer_skips_encoding() {
        // Text that latin1 could not carry still lands in the buffer,
        // since buffers take native text.
        let mut sink = Sink::buffer();
        sink.write_chunk("h€y", Encoding::Latin1).unwrap();
        assert_eq!(sink.buffer_contents(), Some("h€y"));
    }

    #[test]
    fn test_text_callback_receives_each_chunk() {
        let chunks = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&chunks);
        let mut sink = Sink::text_callback(move |chunk| seen.borrow_mut().push(chunk.to_string()));

        sink.write_chunk("one", Encoding::Utf8).unwrap();
        sink.write_chunk("two", Encoding::Utf8).unwrap();
        assert_eq!(*chunks.borrow(), vec!["one", "two"]);
    }

    #[test]
    fn test_bytes_callback_receives_encoded_bytes() {
        let chunks = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&chunks);
        let mut sink = Sink::bytes_callback(move |bytes| seen.borrow_mut().push(bytes.to_vec()));

        sink.write_chunk("höy", Encoding::Latin1).unwrap();
        assert_eq!(*chunks.borrow(), vec![b"h\xf6y".to_vec()]);
    }

    #[test]
    fn test_stream_writes_encoded_bytes() {
        let mut sink = Sink::stream(Vec::new());
        sink.write_chunk("höy", Encoding::Utf8).unwrap();
        // The Vec is owned by the sink; poke at it through Debug only to
        // confirm the variant, the byte-level check lives in writer tests
        // where the stream is observable.
        assert!(format!("{:?}", sink).starts_with("Stream"));
    }

    #[test]
    fn test_non_stream_sinks_are_not_interactive() {
        assert!(!Sink::buffer().is_interactive());
        assert!(!Sink::text_callback(|_| {}).is_interactive());
        assert!(!Sink::bytes_callback(|_| {}).is_interactive());
    }

    #[test]
    fn test_stream_interactive_flag() {
        assert!(!Sink::stream(Vec::new()).is_interactive());
        assert!(Sink::stream_with_interactive(io::sink(), true).is_interactive());
    }
}
