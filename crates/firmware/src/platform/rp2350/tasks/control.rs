//! Control Loop Task
//!
//! Embassy task that runs the mixer loop forever. There is no fixed rate:
//! each iteration takes as long as its pulse measurements (up to one timeout
//! per channel read), then yields so the serial receive task can run.

use crate::platform::rp2350::BoardVehicle;
use crate::platform::EmbassyTime;
use embassy_futures::yield_now;

/// Control loop task
///
/// # Example
///
/// ```rust,ignore
/// #[embassy_executor::main]
/// async fn main(spawner: Spawner) {
///     let p = embassy_rp::init(Default::default());
///     let (vehicle, rx) = init_board(p, MixerConfig::default()).unwrap();
///     spawner.spawn(uart_rx_task(rx)).unwrap();
///     spawner.spawn(control_loop_task(vehicle)).unwrap();
/// }
/// ```
#[embassy_executor::task]
pub async fn control_loop_task(mut vehicle: BoardVehicle) {
    let config = *vehicle.config();
    crate::log_info!("Control loop task started");
    crate::log_info!(
        "  Limits: forward {}%, reverse {}%",
        config.forward_limit,
        config.reverse_limit
    );
    crate::log_info!(
        "  Blink interval {} ms, pulse timeout {} us",
        config.blink_interval_ms,
        config.pulse_timeout_us
    );

    let time = EmbassyTime;
    loop {
        vehicle.run_iteration(&time);
        yield_now().await;
    }
}
