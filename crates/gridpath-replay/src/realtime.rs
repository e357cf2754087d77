//! Wall-clock replay with live speed changes and cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crate::driver::{Renderer, ReplayDriver, Tick};

/// Handle shared with the thread that owns the input loop.
///
/// Both values are read by [`run_realtime`] before every suspension point;
/// nothing is torn down forcibly.
#[derive(Clone, Debug)]
pub struct ReplayControl {
    delay_ms: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

impl ReplayControl {
    /// Create a control starting at `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: Arc::new(AtomicU64::new(millis(delay))),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request a new delay for the steps not yet scheduled.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(millis(delay), Ordering::Relaxed);
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::Relaxed))
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Drive a replay to completion on the current thread, sleeping between
/// steps.
///
/// Before each wait the driver's delay is synced from `control`, so a speed
/// change made elsewhere affects the next step scheduled. Cancellation is
/// checked before and after each wait; a cancelled run stops at once and
/// the driver's generation is bumped so no later tick can apply.
///
/// Returns `true` if the replay ran to completion.
pub fn run_realtime(
    driver: &mut ReplayDriver,
    first: Option<Tick>,
    renderer: &mut impl Renderer,
    control: &ReplayControl,
) -> bool {
    let mut next = first;
    while let Some(tick) = next {
        if control.is_cancelled() {
            driver.cancel();
            return false;
        }
        let wanted = control.delay();
        if wanted != driver.delay() {
            driver.set_delay(wanted);
        }
        if !tick.delay().is_zero() {
            std::thread::sleep(tick.delay());
        }
        if control.is_cancelled() {
            driver.cancel();
            return false;
        }
        next = driver.step(tick, renderer);
    }
    true
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
