//! Replay of search results as a timed sequence of cell reveals.
//!
//! [`ReplayDriver`] turns a [`SearchResult`](gridpath_paths::SearchResult)
//! into [`RevealEvent`]s on its own display grid. It never sleeps: each
//! [`step`](ReplayDriver::step) consumes a [`Tick`] and returns the next one
//! together with the delay to wait before delivering it. Hosts decide how
//! to wait:
//!
//! - [`VirtualClock`]: a deterministic cooperative timer queue
//! - [`run_realtime`]: a blocking loop with live speed/cancel via
//!   [`ReplayControl`]
//!
//! Every tick carries the run generation it was issued for. Cancelling,
//! restarting, or resetting the driver bumps the generation, so ticks still
//! in flight for an older run are dropped without touching the display.

mod clock;
mod driver;
mod realtime;
mod speed;

pub use clock::VirtualClock;
pub use driver::{Notice, Recorder, Renderer, ReplayDriver, ReplayState, RevealEvent, Tick};
pub use realtime::{ReplayControl, run_realtime};
pub use speed::Speed;
