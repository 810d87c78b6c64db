//! Deterministic time gates for pointer and resize bursts.
//!
//! Nothing here reads a clock. Callers pass explicit timestamps in
//! milliseconds, which keeps stepping reproducible in tests and leaves the
//! event loop in charge of time.

/// Admits at most one event per `min_interval_ms`.
///
/// Pointer-move hit-testing runs on the UI thread and competes with
/// rendering, so evaluation is rate-limited regardless of how fast the host
/// delivers move events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrottleGate {
    min_interval_ms: f64,
    last_pass_ms: Option<f64>,
}

impl ThrottleGate {
    #[must_use]
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.max(0.0),
            last_pass_ms: None,
        }
    }

    /// Returns `true` when the event at `now_ms` passes the gate.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last_pass_ms {
            Some(last) if now_ms - last < self.min_interval_ms => false,
            _ => {
                self.last_pass_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forgets the last admission so the next event passes immediately.
    pub fn reset(&mut self) {
        self.last_pass_ms = None;
    }
}

/// Coalesces a burst of invalidations to animation-frame granularity.
///
/// Continuous container resizing marks the debounce repeatedly; the geometry
/// recompute runs once per elapsed frame instead of per event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDebounce {
    frame_ms: f64,
    pending_since_ms: Option<f64>,
}

impl FrameDebounce {
    #[must_use]
    pub fn new(frame_ms: f64) -> Self {
        Self {
            frame_ms: frame_ms.max(0.0),
            pending_since_ms: None,
        }
    }

    /// Records an invalidation at `now_ms`. The pending window is anchored to
    /// the first mark of a burst.
    pub fn mark(&mut self, now_ms: f64) {
        if self.pending_since_ms.is_none() {
            self.pending_since_ms = Some(now_ms);
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending_since_ms.is_some()
    }

    /// Returns `true` once per burst, after a frame has elapsed, and clears
    /// the pending mark.
    pub fn due(&mut self, now_ms: f64) -> bool {
        match self.pending_since_ms {
            Some(since) if now_ms - since >= self.frame_ms => {
                self.pending_since_ms = None;
                true
            }
            _ => false,
        }
    }
}
