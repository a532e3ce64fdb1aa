impl<IN, AN, AS> StoryApp<IN, AN, AS>
where
    IN: InputProvider,
    AN: AnalyticsSink,
    AS: AssetGate,
{
    /// Forward tap. An open share overlay absorbs the tap; the gate
    /// slide refuses to move until a tone is chosen; a locked or
    /// still-loading app drops the tap outright (no queueing, so a
    /// double-tap mid-transition yields one navigation, not two).
    fn advance(&mut self, now_ms: u64) {
        if self.share_open {
            self.share_open = false;
            self.pending_redraw = true;
            debug!("story-nav: advance closed share overlay slide={}", self.current);
            return;
        }

        if self.current == self.deck.branch().gate() && self.tone.is_none() {
            debug!("story-nav: advance blocked, tone unresolved");
            return;
        }

        if self.locked || !self.assets.is_ready() {
            debug!(
                "story-nav: advance dropped locked={} slide={}",
                self.locked, self.current
            );
            return;
        }

        if self.current == 0 {
            self.report(tags::FIRST_PAGE);
        }

        let target = if !self.bypass && self.deck.branch().skips(self.current) {
            self.deck.branch().terminal()
        } else {
            (self.current + 1) % SLIDE_COUNT
        };
        self.bypass = false;

        debug!(
            "story-nav: advance slide={} -> {} generation={}",
            self.current,
            target,
            self.generation.wrapping_add(1)
        );
        self.begin_transition(target, Direction::Forward, now_ms);
    }

    /// Pure linear back-navigation; no branch rule applies.
    fn retreat(&mut self, now_ms: u64) {
        if self.share_open {
            debug!("story-nav: retreat ignored, share overlay open");
            return;
        }

        if self.current == 0 || self.locked || !self.assets.is_ready() {
            debug!(
                "story-nav: retreat dropped slide={} locked={}",
                self.current, self.locked
            );
            return;
        }

        let target = self.current - 1;
        debug!("story-nav: retreat slide={} -> {}", self.current, target);
        self.begin_transition(target, Direction::Backward, now_ms);
    }

    /// Explicit navigation to a slide. Out-of-range targets are clamped,
    /// never an error. A jump that would cross the gate while the tone
    /// is unresolved is dropped. Returns whether navigation started.
    fn jump_to(&mut self, target: u16, arm_bypass: bool, now_ms: u64) -> bool {
        if self.share_open {
            debug!("story-nav: jump ignored, share overlay open");
            return false;
        }

        if self.locked || !self.assets.is_ready() {
            debug!(
                "story-nav: jump dropped target={} locked={}",
                target, self.locked
            );
            return false;
        }

        let target = target.min(SLIDE_COUNT.saturating_sub(1));

        let gate = self.deck.branch().gate();
        if self.tone.is_none() && self.current <= gate && target > gate {
            debug!(
                "story-nav: jump blocked at gate slide={} target={}",
                self.current, target
            );
            return false;
        }

        // Ties keep the prior direction.
        let direction = if target > self.current {
            Direction::Forward
        } else if target < self.current {
            Direction::Backward
        } else {
            self.direction
        };

        if arm_bypass {
            self.bypass = true;
        }

        debug!(
            "story-nav: jump slide={} -> {} bypass={}",
            self.current, target, self.bypass
        );
        self.begin_transition(target, direction, now_ms);
        true
    }

    fn apply_cta(&mut self, action: CtaAction, now_ms: u64) {
        let route = self.deck.route(action);
        if self.jump_to(route.target, route.arm_bypass, now_ms) {
            if let Some(tag) = route.tag {
                self.report(tag);
            }
        }
    }

    /// One-shot: only while the gate slide is showing and no tone has
    /// been recorded. Schedules a single acknowledged advance so the
    /// selection is visible before the view moves on.
    fn choose_tone(&mut self, tone: Tone, now_ms: u64) {
        if self.current != self.deck.branch().gate() || self.tone.is_some() {
            debug!("story-nav: tone choice ignored slide={}", self.current);
            return;
        }

        self.tone = Some(tone);
        self.pending_choice_ms = Some(now_ms + self.config.choice_ack_ms as u64);
        self.pending_redraw = true;
        debug!("story-nav: tone chosen {:?}", tone);
    }

    fn open_share(&mut self) {
        if !self.share_open {
            self.share_open = true;
            self.pending_redraw = true;
        }
    }

    fn dismiss_share(&mut self) {
        if self.share_open {
            self.share_open = false;
            self.pending_redraw = true;
        }
    }

    fn begin_transition(&mut self, target: u16, direction: Direction, now_ms: u64) {
        let spec = self.deck.transition_into(self.current, target, direction);
        self.previous = self.current;
        self.current = target;
        self.direction = direction;
        self.locked = true;
        self.generation = self.generation.wrapping_add(1);
        self.active_transition = spec;
        self.engine.start(self.generation, now_ms, spec.duration_ms);
        self.pending_redraw = true;
    }

    fn report(&mut self, tag: &'static str) {
        if self.analytics.report(tag, SOURCE_TAG).is_err() {
            debug!("story-nav: analytics event dropped tag={}", tag);
        }
    }
}
