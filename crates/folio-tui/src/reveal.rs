//! Tick-stepped visual transitions.
//!
//! Two kinds run through the same machinery: the max-height clamp release
//! when a panel expands, and a short accent pulse on the selected timeline
//! entry. Each advances once per 250ms tick; when one finishes the app
//! reports it settled so the controller can drop the clamp for good.

use folio_core::panel::{Height, TransitionProperty};

/// Ticks for the expand transition (500ms at 250ms per tick).
pub const CLAMP_TICKS: u8 = 2;

/// Ticks for the selection accent pulse.
pub const PULSE_TICKS: u8 = 3;

/// One in-flight transition on a timeline entry.
#[derive(Debug, Clone)]
pub struct Reveal {
    entry_id: String,
    property: TransitionProperty,
    from: Height,
    to: Height,
    elapsed: u8,
    total: u8,
}

impl Reveal {
    /// Max-height release from the collapsed clamp to the natural height.
    pub fn clamp(entry_id: impl Into<String>, from: Height, to: Height) -> Self {
        Self {
            entry_id: entry_id.into(),
            property: TransitionProperty::MaxHeight,
            from,
            to,
            elapsed: 0,
            total: CLAMP_TICKS,
        }
    }

    /// Accent pulse on the selected entry; carries no height.
    pub fn pulse(entry_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            property: TransitionProperty::Accent,
            from: 0,
            to: 0,
            elapsed: 0,
            total: PULSE_TICKS,
        }
    }

    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    pub fn property(&self) -> TransitionProperty {
        self.property
    }

    /// Advance one tick. Saturates at the end.
    pub fn tick(&mut self) {
        self.elapsed = (self.elapsed + 1).min(self.total);
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.total
    }

    /// Current interpolated height, linear in elapsed ticks.
    pub fn current(&self) -> Height {
        if self.total == 0 || self.elapsed >= self.total {
            return self.to;
        }
        let elapsed = Height::from(self.elapsed);
        let total = Height::from(self.total);
        if self.to >= self.from {
            self.from + (self.to - self.from) * elapsed / total
        } else {
            self.from - (self.from - self.to) * elapsed / total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::COLLAPSED_MAX_HEIGHT;

    #[test]
    fn test_clamp_starts_at_from() {
        let reveal = Reveal::clamp("e1", COLLAPSED_MAX_HEIGHT, 480);
        assert_eq!(reveal.current(), COLLAPSED_MAX_HEIGHT);
        assert!(!reveal.finished());
    }

    #[test]
    fn test_clamp_ends_at_to() {
        let mut reveal = Reveal::clamp("e1", COLLAPSED_MAX_HEIGHT, 480);
        for _ in 0..CLAMP_TICKS {
            reveal.tick();
        }
        assert!(reveal.finished());
        assert_eq!(reveal.current(), 480);
    }

    #[test]
    fn test_clamp_is_monotonic() {
        let mut reveal = Reveal::clamp("e1", 224, 480);
        let mut prev = reveal.current();
        while !reveal.finished() {
            reveal.tick();
            let now = reveal.current();
            assert!(now >= prev);
            prev = now;
        }
    }

    #[test]
    fn test_tick_saturates_after_finish() {
        let mut reveal = Reveal::clamp("e1", 224, 480);
        for _ in 0..10 {
            reveal.tick();
        }
        assert!(reveal.finished());
        assert_eq!(reveal.current(), 480);
    }

    #[test]
    fn test_pulse_finishes() {
        let mut pulse = Reveal::pulse("e1");
        assert_eq!(pulse.property(), TransitionProperty::Accent);
        for _ in 0..PULSE_TICKS {
            assert!(!pulse.finished());
            pulse.tick();
        }
        assert!(pulse.finished());
    }
}
