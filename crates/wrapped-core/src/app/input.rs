impl<IN, AN, AS> StoryApp<IN, AN, AS>
where
    IN: InputProvider,
    AN: AnalyticsSink,
    AS: AssetGate,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("story-nav: input provider error, draining stopped");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::TapNext => self.advance(now_ms),
            InputEvent::TapBack => self.retreat(now_ms),
            InputEvent::SegmentTap(target) => {
                // Rail taps never touch the bypass flag.
                let _ = self.jump_to(target, false, now_ms);
            }
            InputEvent::ChooseTone(tone) => self.choose_tone(tone, now_ms),
            InputEvent::Cta(action) => self.apply_cta(action, now_ms),
            InputEvent::OpenShare => self.open_share(),
            InputEvent::DismissShare => self.dismiss_share(),
        }
    }
}
