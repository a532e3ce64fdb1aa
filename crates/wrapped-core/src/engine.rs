//! Generation-tagged transition timing.
//!
//! One slot holds the in-flight [`TimerRun`]; starting a new run
//! overwrites it, which is the whole cancellation story. A run that was
//! overwritten never delivers its completion, and a completion whose
//! generation no longer matches the controller's is dropped by the
//! caller, so a stale run can never re-unlock navigation.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct TimerRun {
    generation: u32,
    started_ms: u64,
    duration_ms: u16,
}

pub struct TransitionEngine {
    run: Option<TimerRun>,
    grace_ms: u16,
}

impl TransitionEngine {
    pub const fn new(grace_ms: u16) -> Self {
        Self {
            run: None,
            grace_ms,
        }
    }

    /// Begin a run, replacing any previous one.
    pub fn start(&mut self, generation: u32, now_ms: u64, duration_ms: u16) {
        self.run = Some(TimerRun {
            generation,
            started_ms: now_ms,
            duration_ms: duration_ms.max(1),
        });
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Progress of the active run in 0..=100, or `None` when idle.
    /// Holds at 100 through the grace window until the completion is
    /// polled off.
    pub fn progress_pct(&self, now_ms: u64) -> Option<u8> {
        let run = self.run?;
        let elapsed = now_ms.saturating_sub(run.started_ms);
        Some(((elapsed * 100) / run.duration_ms as u64).min(100) as u8)
    }

    /// Deliver the finished run's generation exactly once, a grace
    /// period after it reached full progress.
    pub fn poll_complete(&mut self, now_ms: u64) -> Option<u32> {
        let run = self.run?;
        let done_at = run
            .started_ms
            .saturating_add(run.duration_ms as u64)
            .saturating_add(self.grace_ms as u64);
        if now_ms < done_at {
            return None;
        }

        self.run = None;
        Some(run.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_at_full() {
        let mut engine = TransitionEngine::new(100);
        engine.start(1, 0, 1_000);
        assert_eq!(engine.progress_pct(0), Some(0));
        assert_eq!(engine.progress_pct(250), Some(25));
        assert_eq!(engine.progress_pct(1_000), Some(100));
        assert_eq!(engine.progress_pct(5_000), Some(100));
    }

    #[test]
    fn completion_waits_for_grace_and_fires_once() {
        let mut engine = TransitionEngine::new(100);
        engine.start(3, 0, 1_000);
        assert_eq!(engine.poll_complete(1_000), None);
        assert_eq!(engine.poll_complete(1_099), None);
        assert_eq!(engine.poll_complete(1_100), Some(3));
        assert_eq!(engine.poll_complete(1_100), None);
        assert!(!engine.is_running());
    }

    #[test]
    fn restart_orphans_the_previous_run() {
        let mut engine = TransitionEngine::new(100);
        engine.start(1, 0, 1_000);
        engine.start(2, 400, 1_000);
        // The first run's deadline passes without a delivery.
        assert_eq!(engine.poll_complete(1_100), None);
        assert_eq!(engine.poll_complete(1_500), Some(2));
    }

    #[test]
    fn idle_engine_reports_nothing() {
        let mut engine = TransitionEngine::new(100);
        assert_eq!(engine.progress_pct(10), None);
        assert_eq!(engine.poll_complete(10), None);
    }

    #[test]
    fn zero_duration_is_treated_as_one_ms() {
        let mut engine = TransitionEngine::new(0);
        engine.start(1, 5, 0);
        assert_eq!(engine.progress_pct(5), Some(0));
        assert_eq!(engine.poll_complete(6), Some(1));
    }
}
