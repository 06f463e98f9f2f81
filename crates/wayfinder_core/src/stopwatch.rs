use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tracing::debug;

/// Measures one named phase (a load or a search) and reports it at debug
/// level when finished.
pub(crate) struct Stopwatch {
    start_time: Instant,
    phase: &'static str,
}

impl Stopwatch {
    pub(crate) fn start(phase: &'static str) -> Self {
        Self {
            start_time: Instant::now(),
            phase,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub(crate) fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(phase = self.phase, ?elapsed, "phase finished");
        elapsed
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {:?}", self.phase, self.elapsed())
    }
}
