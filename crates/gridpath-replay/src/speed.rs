use std::fmt;
use std::time::Duration;

/// Replay speed as a percentage, `1..=100`.
///
/// The delay between reveals is `101 - speed` milliseconds, so 100 is the
/// fastest (1 ms) and 1 the slowest (100 ms).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(1);
    pub const MAX: Speed = Speed(100);
    /// Amount added by [`faster`](Self::faster).
    pub const STEP: u8 = 10;

    /// Create a speed, clamping into `1..=100`.
    pub fn new(percent: u32) -> Self {
        Self(percent.clamp(1, 100) as u8)
    }

    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Delay between two reveals at this speed.
    #[inline]
    pub fn delay(self) -> Duration {
        Duration::from_millis(101 - u64::from(self.0))
    }

    /// One notch faster, capped at [`MAX`](Self::MAX).
    pub fn faster(self) -> Self {
        Self::new(u32::from(self.0) + u32::from(Self::STEP))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
