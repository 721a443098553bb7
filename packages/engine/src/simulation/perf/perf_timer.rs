//! Stopwatch behind the opt-in perf counters.
//!
//! wasm32 has no usable `Instant`, so the browser build reads `Date.now()`
//! (millisecond resolution; sub-millisecond passes read as 0).

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
}

impl PerfTimer {
    /// `None` while perf collection is off, so a normal tick never reads the clock
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { started: now() })
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            // Date.now() can step backwards with the system clock
            (now() - self.started).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed().as_secs_f64() * 1000.0
        }
    }
}
