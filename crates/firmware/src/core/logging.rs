//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (pico2_w): Uses defmt over RTT
//! - Host tests: Uses println!/eprintln!
//! - Host non-test: No-op (arguments are still type-checked)
//!
//! Arguments must be defmt-compatible: stick to `{}` with integers, bools
//! and `&str`.
//!
//! The status echo (`AUTO → ...` / `MANUAL → ...`) is not logging; it goes to
//! the serial link through `libraries::serial_link`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico2_w")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico2_w"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico2_w")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico2_w"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico2_w")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico2_w"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico2_w")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico2_w"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico2_w")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[TRACE] {}", format!($($arg)*));

        #[cfg(all(not(feature = "pico2_w"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_accept_format_args() {
        let pulse: u16 = 1553;
        crate::log_info!("throttle {}", pulse);
        crate::log_warn!("mode {}", "AUTO");
        crate::log_error!("write failed: {}", "PWM error");
        crate::log_debug!("rejected line");
        crate::log_trace!("tick {}", 1u32);
    }
}
