//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs batch progress after an item completes.
///
/// # Arguments
///
/// * `processed` - Number of items processed so far (1-based)
/// * `total` - Number of items in the batch
/// * `start_time` - When the batch started
pub fn log_progress(processed: usize, total: usize, start_time: Instant) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let percent = if total > 0 {
        processed as f64 * 100.0 / total as f64
    } else {
        100.0
    };
    info!(
        "Processed {}/{} ({:.0}%) in {:.2} seconds",
        processed, total, percent, elapsed_secs
    );
}
