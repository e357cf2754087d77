//! A deterministic, single-threaded timer queue for driving replays.

use std::time::Duration;

use gridpath_paths::{Frontier, MinQueue, Prioritized};

use crate::driver::{Renderer, ReplayDriver, Tick};

/// Virtual time in milliseconds. Ticks are kept in a min-queue keyed by due
/// time; ticks due at the same instant fire in scheduling order.
///
/// Nothing here sleeps: [`advance_by`](Self::advance_by) moves time forward
/// and delivers every tick that came due, scheduling whatever tick each
/// step returns. Stale ticks left over from a cancelled run are delivered
/// too and dropped by the driver.
#[derive(Default)]
pub struct VirtualClock {
    now: u64,
    queue: MinQueue<Tick>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.now)
    }

    /// Number of ticks waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue `tick` to fire after its delay, counted from now.
    pub fn schedule(&mut self, tick: Tick) {
        let due = self.now.saturating_add(millis(tick.delay()));
        self.queue.push(Prioritized::new(due, tick));
    }

    /// Advance time by `by`, firing due ticks in order. Returns how many
    /// ticks were delivered.
    pub fn advance_by(
        &mut self,
        by: Duration,
        driver: &mut ReplayDriver,
        renderer: &mut impl Renderer,
    ) -> usize {
        let target = self.now.saturating_add(millis(by));
        let mut fired = 0;
        loop {
            match self.queue.peek_priority() {
                Some(due) if due <= target => {}
                _ => break,
            }
            let Some(Prioritized { priority, item: tick }) = self.queue.pop() else {
                break;
            };
            self.now = priority.max(self.now);
            fired += 1;
            if let Some(next) = driver.step(tick, renderer) {
                self.schedule(next);
            }
        }
        self.now = target;
        fired
    }

    /// Fire ticks until none are left. Returns the virtual time that passed.
    pub fn run_until_idle(
        &mut self,
        driver: &mut ReplayDriver,
        renderer: &mut impl Renderer,
    ) -> Duration {
        let begin = self.now;
        while let Some(due) = self.queue.peek_priority() {
            let wait = due.saturating_sub(self.now);
            self.advance_by(Duration::from_millis(wait), driver, renderer);
        }
        Duration::from_millis(self.now - begin)
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
