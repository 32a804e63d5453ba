use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Spawns the refresh timer thread. Ticks land on multiples of the
/// interval since the epoch, so a 60s clock redraws on the minute instead
/// of drifting from whenever the bar started. The thread exits once the
/// receiving side is dropped.
pub fn spawn(interval_secs: u64) -> async_channel::Receiver<()> {
    let (tx, rx) = async_channel::bounded(1);
    let interval = Duration::from_secs(interval_secs.max(1));

    thread::spawn(move || {
        loop {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            thread::sleep(until_next_tick(now, interval));
            if tx.send_blocking(()).is_err() {
                break;
            }
        }
    });

    rx
}

/// Time left until the next aligned boundary: `interval - (now % interval)`.
fn until_next_tick(now: Duration, interval: Duration) -> Duration {
    let elapsed = Duration::from_nanos((now.as_nanos() % interval.as_nanos()) as u64);
    interval - elapsed
}
