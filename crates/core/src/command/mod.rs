//! Autonomous command input
//!
//! In autonomous mode the host sends one ASCII line per command:
//!
//! ```text
//! <steer>,<throttle>\n
//! ```
//!
//! Both fields are signed decimal integers (percent). Anything that is not
//! exactly two integers separated by one comma is rejected, and the loop
//! falls back to neutral pulses for that iteration only. Lines are assembled
//! without blocking by [`LineReader`].

mod line;

pub use line::LineReader;

use heapless::Deque;

/// One parsed autonomous command (percent, before limiting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveCommand {
    /// Steering command, -100 (left) to +100 (right)
    pub steering: i32,
    /// Throttle command, negative = reverse
    pub throttle: i32,
}

impl DriveCommand {
    /// Create a command
    pub const fn new(steering: i32, throttle: i32) -> Self {
        Self { steering, throttle }
    }
}

/// Parse one command line
///
/// Surrounding ASCII whitespace around each field (including the `\r` of a
/// CRLF line ending) is ignored.
///
/// # Returns
///
/// `Some(command)` for exactly two comma-separated `i32` values, `None` for
/// anything else (non-numeric, missing or extra fields, overflow).
///
/// # Example
///
/// ```
/// use rc_mixer_core::command::{parse, DriveCommand};
///
/// assert_eq!(parse("50,-30"), Some(DriveCommand::new(50, -30)));
/// assert_eq!(parse("1,2,3"), None);
/// ```
pub fn parse(line: &str) -> Option<DriveCommand> {
    let mut fields = line.split(',');
    let steering = parse_field(fields.next()?)?;
    let throttle = parse_field(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some(DriveCommand::new(steering, throttle))
}

/// Parse a raw line from the serial link
///
/// Non-UTF-8 input is rejected.
pub fn parse_bytes(line: &[u8]) -> Option<DriveCommand> {
    parse(core::str::from_utf8(line).ok()?)
}

fn parse_field(field: &str) -> Option<i32> {
    field.trim_matches(|c: char| c.is_ascii_whitespace()).parse().ok()
}

/// Serial command link capability
///
/// Reads never block: only bytes already received are returned.
pub trait CommandLink {
    /// Take the next received byte, if any
    fn read_byte(&mut self) -> Option<u8>;

    /// Drop everything received but not yet read
    fn discard_pending(&mut self);
}

/// Receive capacity of the mock link
const MOCK_LINK_CAPACITY: usize = 256;

/// In-memory command link for tests
#[derive(Debug, Default)]
pub struct MockLink {
    rx: Deque<u8, MOCK_LINK_CAPACITY>,
    discards: u32,
}

impl MockLink {
    /// Create an empty link
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue received bytes; bytes beyond capacity are dropped
    pub fn inject(&mut self, data: &[u8]) {
        for &byte in data {
            if self.rx.push_back(byte).is_err() {
                break;
            }
        }
    }

    /// Number of bytes waiting to be read
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Number of `discard_pending` calls
    pub fn discards(&self) -> u32 {
        self.discards
    }
}

impl CommandLink for MockLink {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn discard_pending(&mut self) {
        self.rx.clear();
        self.discards += 1;
    }
}
