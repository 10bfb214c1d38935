//! The timer widget: a clock plus the audio cue that listens to it.

use log::warn;

use crate::audio::AudioCue;
use crate::clock::{ClockEvent, ClockSnapshot, LengthTarget, PomodoroClock, Scheduler};

/// The user-facing Pomodoro timer.
///
/// Every control returns the clock events it caused, after the audio cue has
/// already reacted to them.
pub struct TimerWidget<S: Scheduler, A: AudioCue> {
    clock: PomodoroClock<S>,
    audio: Option<A>,
}

impl<S: Scheduler, A: AudioCue> TimerWidget<S, A> {
    /// Wrap `clock`, sounding `audio` on phase changes when present.
    pub fn new(clock: PomodoroClock<S>, audio: Option<A>) -> Self {
        Self { clock, audio }
    }

    /// Current clock state.
    #[must_use]
    pub const fn snapshot(&self) -> ClockSnapshot {
        self.clock.snapshot()
    }

    /// Underlying clock.
    #[must_use]
    pub const fn clock(&self) -> &PomodoroClock<S> {
        &self.clock
    }

    /// Lengthen `target` by one minute.
    pub fn increment(&mut self, target: LengthTarget) -> Vec<ClockEvent> {
        self.clock.increment(target);
        self.dispatch()
    }

    /// Shorten `target` by one minute.
    pub fn decrement(&mut self, target: LengthTarget) -> Vec<ClockEvent> {
        self.clock.decrement(target);
        self.dispatch()
    }

    /// Start or pause the countdown.
    pub fn toggle(&mut self) -> Vec<ClockEvent> {
        self.clock.toggle();
        self.dispatch()
    }

    /// Restore defaults and silence the cue.
    pub fn reset(&mut self) -> Vec<ClockEvent> {
        self.clock.reset();
        self.dispatch()
    }

    /// Apply due ticks.
    pub fn poll(&mut self) -> Vec<ClockEvent> {
        self.clock.poll();
        self.dispatch()
    }

    /// Release the tick registration.
    pub fn dispose(&mut self) {
        self.clock.dispose();
    }

    /// Play the cue. Failures are logged and otherwise ignored.
    pub fn play_beep(&mut self) {
        if let Some(audio) = self.audio.as_mut() {
            if let Err(e) = audio.play() {
                warn!("cue not played: {e}");
            }
        }
    }

    fn stop_beep(&mut self) {
        if let Some(audio) = self.audio.as_mut() {
            if let Err(e) = audio.stop() {
                warn!("cue not stopped: {e}");
            }
        }
    }

    fn dispatch(&mut self) -> Vec<ClockEvent> {
        let events = self.clock.drain_events();
        for event in &events {
            match event {
                ClockEvent::PhaseTransitioned { .. } => self.play_beep(),
                ClockEvent::Reset => self.stop_beep(),
                ClockEvent::Started | ClockEvent::Paused | ClockEvent::LengthChanged { .. } => {}
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockAudioCue;
    use crate::clock::{IntervalScheduler, Length, ManualTime, Phase};
    use crate::error::PomoError;

    type Widget = TimerWidget<IntervalScheduler<ManualTime>, MockAudioCue>;

    fn widget(audio: Option<MockAudioCue>) -> (ManualTime, Widget) {
        let time = ManualTime::new();
        let clock = PomodoroClock::new(IntervalScheduler::new(time.clone()));
        (time, TimerWidget::new(clock, audio))
    }

    fn one_minute_session(widget: &mut Widget) {
        for _ in 0..24 {
            widget.decrement(LengthTarget::Session);
        }
    }

    #[test]
    fn test_beep_on_phase_transition() {
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(1).returning(|| Ok(()));
        let (time, mut widget) = widget(Some(audio));
        one_minute_session(&mut widget);

        widget.toggle();
        time.advance_secs(60);
        assert!(widget.poll().is_empty());

        time.advance_secs(1);
        let events = widget.poll();
        assert_eq!(
            events,
            vec![ClockEvent::PhaseTransitioned {
                from: Phase::Session,
                to: Phase::Break
            }]
        );
    }

    #[test]
    fn test_audio_failure_does_not_stop_clock() {
        let mut audio = MockAudioCue::new();
        audio
            .expect_play()
            .returning(|| Err(PomoError::Audio("autoplay denied".to_string())));
        let (time, mut widget) = widget(Some(audio));
        one_minute_session(&mut widget);

        widget.toggle();
        time.advance_secs(62);
        widget.poll();

        let snap = widget.snapshot();
        assert!(snap.running);
        assert_eq!(snap.phase, Phase::Break);
        assert_eq!(snap.time_left, 299);
    }

    #[test]
    fn test_reset_stops_audio() {
        let mut audio = MockAudioCue::new();
        audio.expect_stop().times(1).returning(|| Ok(()));
        audio.expect_play().never();
        let (time, mut widget) = widget(Some(audio));

        for _ in 0..7 {
            widget.increment(LengthTarget::Break);
        }
        widget.toggle();
        time.advance_secs(40);
        widget.poll();

        let events = widget.reset();
        assert_eq!(events, vec![ClockEvent::Reset]);

        let snap = widget.snapshot();
        assert!(!snap.running);
        assert_eq!(snap.break_length, Length::DEFAULT_BREAK);
        assert_eq!(snap.session_length, Length::DEFAULT_SESSION);
        assert_eq!(snap.time_left, 1500);
        assert_eq!(snap.phase, Phase::Session);
    }

    #[test]
    fn test_without_audio_handle() {
        let (time, mut widget) = widget(None);
        one_minute_session(&mut widget);
        widget.toggle();
        time.advance_secs(61);

        let events = widget.poll();
        assert_eq!(events.len(), 1);
        assert_eq!(widget.snapshot().phase, Phase::Break);
        widget.reset();
    }

    #[test]
    fn test_dispose_halts_countdown() {
        let (time, mut widget) = widget(None);
        widget.toggle();
        widget.dispose();

        time.advance_secs(5);
        widget.poll();
        assert_eq!(widget.snapshot().time_left, 1500);
        assert!(!widget.snapshot().running);
    }

    #[test]
    fn test_controls_return_events() {
        let (_, mut widget) = widget(None);
        assert_eq!(
            widget.increment(LengthTarget::Break),
            vec![ClockEvent::LengthChanged {
                target: LengthTarget::Break,
                length: Length::new(6).unwrap()
            }]
        );
        assert_eq!(widget.toggle(), vec![ClockEvent::Started]);
        assert!(widget.increment(LengthTarget::Break).is_empty());
        assert_eq!(widget.toggle(), vec![ClockEvent::Paused]);
    }
}
