/// Default sampling interval: process one frame out of every 30 delivered.
pub const DEFAULT_SAMPLE_INTERVAL: u32 = 30;

/// Frame-rate throttle for one capture source.
///
/// Selects the first frame and every `interval`th frame after it; everything
/// else is dropped before detection is ever invoked. The counter is owned
/// instance state, so independent pipelines sample independently. Frames are
/// expected to arrive strictly sequentially from a single source — this type
/// is deliberately not shareable across frame producers.
#[derive(Debug)]
pub struct FrameSampler {
    interval: u32,
    counter: u32,
}

impl FrameSampler {
    /// An interval of 0 is treated as 1 (process every frame).
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            counter: 0,
        }
    }

    /// Decide whether the next frame in arrival order should be processed.
    ///
    /// Returns `true` once per `interval` calls; the counter wraps to zero
    /// immediately after a `true` decision.
    pub fn admit(&mut self) -> bool {
        let selected = self.counter == 0;
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
        }
        selected
    }
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL)
    }
}
