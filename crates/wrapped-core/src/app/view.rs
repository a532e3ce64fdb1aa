impl<IN, AN, AS> StoryApp<IN, AN, AS>
where
    IN: InputProvider,
    AN: AnalyticsSink,
    AS: AssetGate,
{
    pub fn new(deck: Deck, input: IN, analytics: AN, assets: AS, config: StoryConfig) -> Self {
        let active_transition = deck.slide(0).transition;

        Self {
            input,
            analytics,
            assets,
            config,
            deck,
            current: 0,
            previous: 0,
            direction: Direction::Forward,
            locked: false,
            bypass: false,
            tone: None,
            share_open: false,
            generation: 0,
            engine: TransitionEngine::new(config.unlock_grace_ms),
            active_transition,
            pending_choice_ms: None,
            pending_redraw: true,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.tick_choice_ack(now_ms);
        self.tick_transition(now_ms);

        if self.engine.is_running() {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        if !self.assets.is_ready() {
            f(Screen::Loading);
            return;
        }

        let progress = self.engine.progress_pct(now_ms);

        let mut segments = [SegmentFill::Empty; SLIDE_COUNT as usize];
        for (index, slot) in segments.iter_mut().enumerate() {
            let index = index as u16;
            *slot = if index < self.current {
                SegmentFill::Full
            } else if index == self.current {
                match progress {
                    Some(pct) => SegmentFill::Partial(pct),
                    None => SegmentFill::Full,
                }
            } else {
                SegmentFill::Empty
            };
        }

        let transition = progress.map(|progress_pct| TransitionFrame {
            kind: self.active_transition.kind,
            direction: self.direction,
            progress_pct,
        });

        f(Screen::Story {
            current: self.current,
            previous: self.previous,
            direction: self.direction,
            label: self.deck.slide(self.current).label,
            transition,
            locked: self.locked,
            tone: self.tone,
            awaiting_tone: self.current == self.deck.branch().gate() && self.tone.is_none(),
            share_open: self.share_open,
            segments: &segments,
        });
    }

    pub fn current_index(&self) -> u16 {
        self.current
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn tone(&self) -> Option<Tone> {
        self.tone
    }
}
