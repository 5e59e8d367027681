//! Serial link: autonomous command input and status echo
//!
//! Incoming bytes feed the core `LineReader` one at a time; outgoing status
//! lines are rendered with CRLF endings. The port is shared, so both traits
//! are implemented for `&SerialLink` and one link can fill both slots of a
//! `MixerIo`.

use core::cell::{Cell, Ref, RefCell};

use crate::platform::traits::UartInterface;

// Re-export core serial types
pub use rc_mixer_core::command::CommandLink;
pub use rc_mixer_core::status::{Status, StatusSink};

/// Chunk size used when draining the receive side
const DRAIN_CHUNK: usize = 16;

/// UART-backed command link and status sink
pub struct SerialLink<U: UartInterface> {
    uart: RefCell<U>,
    read_errors: Cell<u32>,
    dropped_reports: Cell<u32>,
}

impl<U: UartInterface> SerialLink<U> {
    /// Wrap a configured UART
    pub fn new(uart: U) -> Self {
        Self {
            uart: RefCell::new(uart),
            read_errors: Cell::new(0),
            dropped_reports: Cell::new(0),
        }
    }

    /// Underlying UART
    pub fn uart(&self) -> Ref<'_, U> {
        self.uart.borrow()
    }

    /// Mutable underlying UART
    pub fn uart_mut(&mut self) -> &mut U {
        self.uart.get_mut()
    }

    /// Failed receive attempts
    pub fn read_errors(&self) -> u32 {
        self.read_errors.get()
    }

    /// Status lines that could not be written in full
    pub fn dropped_reports(&self) -> u32 {
        self.dropped_reports.get()
    }

    fn bump(counter: &Cell<u32>) {
        counter.set(counter.get().saturating_add(1));
    }
}

impl<U: UartInterface> CommandLink for &SerialLink<U> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut uart = self.uart.borrow_mut();
        if !uart.available() {
            return None;
        }
        let mut byte = [0u8; 1];
        match uart.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) => {
                SerialLink::<U>::bump(&self.read_errors);
                crate::log_debug!("Serial read failed: {}", e.as_str());
                None
            }
        }
    }

    fn discard_pending(&mut self) {
        let mut uart = self.uart.borrow_mut();
        let mut chunk = [0u8; DRAIN_CHUNK];
        while uart.available() {
            match uart.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
        }
    }
}

impl<U: UartInterface> StatusSink for &SerialLink<U> {
    fn report(&mut self, status: &Status) {
        let Some(line) = status.render() else {
            SerialLink::<U>::bump(&self.dropped_reports);
            return;
        };
        match self.uart.borrow_mut().write(line.as_bytes()) {
            Ok(written) if written == line.len() => {}
            _ => SerialLink::<U>::bump(&self.dropped_reports),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockUart;
    use crate::platform::traits::UartConfig;
    use rc_mixer_core::command::LineReader;

    fn link() -> SerialLink<MockUart> {
        SerialLink::new(MockUart::new(UartConfig::default()))
    }

    #[test]
    fn test_read_byte_in_order() {
        let mut link = link();
        link.uart_mut().inject_rx_data(b"5,");
        let mut rx = &link;
        assert_eq!(rx.read_byte(), Some(b'5'));
        assert_eq!(rx.read_byte(), Some(b','));
        assert_eq!(rx.read_byte(), None);
    }

    #[test]
    fn test_line_reader_over_uart() {
        let mut link = link();
        link.uart_mut().inject_rx_data(b"50,-30\r\n0,0\n");

        let mut lines = LineReader::new();
        let first = lines.poll(&mut &link).unwrap();
        assert_eq!(&first[..], b"50,-30\r");
        assert_eq!(link.uart().rx_pending(), 4);
    }

    #[test]
    fn test_discard_pending_empties_receive_side() {
        let mut link = link();
        link.uart_mut()
            .inject_rx_data(b"10,10\n20,20\n30,30\n40,40\n50,50\n");
        let mut rx = &link;
        rx.discard_pending();
        assert_eq!(link.uart().rx_pending(), 0);
        assert_eq!(rx.read_byte(), None);
    }

    #[test]
    fn test_report_writes_auto_line() {
        let link = link();
        (&link).report(&Status::Auto {
            steering_us: 1750,
            throttle_us: 1553,
        });
        assert_eq!(
            link.uart().tx_buffer(),
            "AUTO → steer: 1750  throttle: 1553\r\n".as_bytes()
        );
    }

    #[test]
    fn test_report_writes_manual_line() {
        let link = link();
        (&link).report(&Status::Manual {
            steering_in_us: 0,
            throttle_raw_us: 1500,
        });
        assert_eq!(
            link.uart().tx_buffer(),
            "MANUAL → steerIn: 0  throttleRaw: 1500\r\n".as_bytes()
        );
    }

    #[test]
    fn test_one_link_serves_both_roles() {
        let mut link = link();
        link.uart_mut().inject_rx_data(b"1,2\n");
        let (mut rx, mut tx) = (&link, &link);
        let mut lines = LineReader::new();
        assert!(lines.poll(&mut rx).is_some());
        tx.report(&Status::Auto {
            steering_us: 1510,
            throttle_us: 1553,
        });
        assert_eq!(link.uart().rx_pending(), 0);
        assert!(!link.uart().tx_buffer().is_empty());
    }

    #[test]
    fn test_failed_report_is_counted() {
        let mut link = link();
        link.uart_mut().set_fail_writes(true);
        (&link).report(&Status::Auto {
            steering_us: 1500,
            throttle_us: 1500,
        });
        assert_eq!(link.dropped_reports(), 1);
        assert!(link.uart().tx_buffer().is_empty());
    }
}
