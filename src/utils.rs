use std::time::Instant;

/// Simple log helper that prepends messages with the elapsed time
pub struct DebugTime {
    start: Instant,
    prev: Instant,
}

impl DebugTime {
    pub fn new() -> Self {
        let start = Instant::now();
        DebugTime { start, prev: start }
    }

    pub fn msg<T: std::fmt::Display>(&mut self, s: T) {
        let now = Instant::now();
        let total_dt = now - self.start;
        let prev_dt = now - self.prev;
        self.prev = now;
        println!(
            "[{:6.1}s ({:+5.1}s)] {}",
            total_dt.as_secs_f32(),
            prev_dt.as_secs_f32(),
            s
        );
    }
}

impl Default for DebugTime {
    fn default() -> Self {
        Self::new()
    }
}
