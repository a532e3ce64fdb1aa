impl<IN, AN, AS> StoryApp<IN, AN, AS>
where
    IN: InputProvider,
    AN: AnalyticsSink,
    AS: AssetGate,
{
    fn tick_choice_ack(&mut self, now_ms: u64) {
        let Some(due_ms) = self.pending_choice_ms else {
            return;
        };
        if now_ms < due_ms {
            return;
        }

        self.pending_choice_ms = None;
        self.advance(now_ms);
    }

    fn tick_transition(&mut self, now_ms: u64) {
        let Some(generation) = self.engine.poll_complete(now_ms) else {
            return;
        };

        if generation == self.generation {
            self.locked = false;
            self.pending_redraw = true;
            debug!(
                "story-nav: transition complete generation={} slide={}",
                generation, self.current
            );
        } else {
            debug!(
                "story-nav: stale completion dropped generation={} current_generation={}",
                generation, self.generation
            );
        }
    }
}
