//! Bounded, non-blocking line assembly

use heapless::Vec;

use super::CommandLink;
use crate::config::LINE_CAPACITY;

/// Assembles newline-terminated lines from a [`CommandLink`]
///
/// At most `LINE_CAPACITY` bytes of a line are kept; the rest of an overlong
/// line is dropped up to its newline. A line without its newline yet stays
/// buffered across calls.
#[derive(Debug, Default)]
pub struct LineReader {
    buf: Vec<u8, LINE_CAPACITY>,
    truncated: bool,
}

impl LineReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull bytes until one complete line is available
    ///
    /// Stops at the first newline, leaving later bytes in the link for the
    /// next call.
    ///
    /// # Returns
    ///
    /// The completed line without its `\n`, or `None` if the link ran dry
    /// first.
    pub fn poll(&mut self, link: &mut dyn CommandLink) -> Option<Vec<u8, LINE_CAPACITY>> {
        while let Some(byte) = link.read_byte() {
            if byte == b'\n' {
                self.truncated = false;
                return Some(core::mem::take(&mut self.buf));
            }
            if self.buf.push(byte).is_err() {
                self.truncated = true;
            }
        }
        None
    }

    /// Whether the line being assembled has already lost bytes
    pub fn is_truncating(&self) -> bool {
        self.truncated
    }

    /// Bytes of the partial line buffered so far
    pub fn partial_len(&self) -> usize {
        self.buf.len()
    }

    /// Drop the partial line and everything pending on the link
    pub fn discard(&mut self, link: &mut dyn CommandLink) {
        self.buf.clear();
        self.truncated = false;
        link.discard_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MockLink;

    #[test]
    fn test_single_line() {
        let mut link = MockLink::new();
        let mut reader = LineReader::new();
        link.inject(b"10,20\n");

        let line = reader.poll(&mut link).unwrap();
        assert_eq!(&line[..], b"10,20");
        assert!(reader.poll(&mut link).is_none());
    }

    #[test]
    fn test_partial_line_survives_polls() {
        let mut link = MockLink::new();
        let mut reader = LineReader::new();

        link.inject(b"10,");
        assert!(reader.poll(&mut link).is_none());
        assert_eq!(reader.partial_len(), 3);

        link.inject(b"20\n");
        let line = reader.poll(&mut link).unwrap();
        assert_eq!(&line[..], b"10,20");
    }

    #[test]
    fn test_one_line_per_poll() {
        let mut link = MockLink::new();
        let mut reader = LineReader::new();
        link.inject(b"1,2\n3,4\n");

        assert_eq!(&reader.poll(&mut link).unwrap()[..], b"1,2");
        assert_eq!(link.pending(), 4);
        assert_eq!(&reader.poll(&mut link).unwrap()[..], b"3,4");
    }

    #[test]
    fn test_overlong_line_is_truncated() {
        let mut link = MockLink::new();
        let mut reader = LineReader::new();
        link.inject(b"0000000000000000000000000000012,34\n");

        let line = reader.poll(&mut link).unwrap();
        assert_eq!(line.len(), LINE_CAPACITY);
        assert_eq!(&line[..], b"0000000000000000000000000000012");
        assert!(!reader.is_truncating());
    }

    #[test]
    fn test_discard_clears_partial_and_link() {
        let mut link = MockLink::new();
        let mut reader = LineReader::new();
        link.inject(b"50,");
        reader.poll(&mut link);
        link.inject(b"-30");

        reader.discard(&mut link);
        assert_eq!(reader.partial_len(), 0);
        assert_eq!(link.pending(), 0);

        link.inject(b"\n");
        assert_eq!(reader.poll(&mut link).map(|l| l.len()), Some(0));
    }
}
