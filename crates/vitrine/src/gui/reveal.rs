//! "Has this section scrolled into view yet?" for one-shot animations and timers.

/// Share of a section that must be on screen before it counts as shown.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Vertical extent in scrolled-content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub length: f64,
}

impl Span {
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    /// Fraction of this span lying inside `view`; zero for empty spans.
    pub fn visible_fraction(&self, view: Span) -> f64 {
        if self.length <= 0.0 || view.length <= 0.0 {
            return 0.0;
        }
        let overlap = self.end().min(view.end()) - self.start.max(view.start);
        (overlap / self.length).clamp(0.0, 1.0)
    }

    pub fn is_revealed_in(&self, view: Span) -> bool {
        self.visible_fraction(view) >= REVEAL_THRESHOLD
    }
}

/// Latches the first time a section is revealed.
#[derive(Debug, Default)]
pub struct RevealOnce {
    fired: bool,
}

impl RevealOnce {
    /// True exactly once: on the first check where `target` is revealed in `view`.
    pub fn check(&mut self, target: Span, view: Span) -> bool {
        if self.fired || !target.is_revealed_in(view) {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_below_the_fold_is_hidden() {
        // 400px window, radar 300px tall starting at 600px
        let radar = Span::new(600.0, 300.0);
        assert_eq!(radar.visible_fraction(Span::new(0.0, 400.0)), 0.0);
        assert!(!radar.is_revealed_in(Span::new(0.0, 400.0)));
    }

    #[test]
    fn test_threshold_is_ten_percent() {
        let radar = Span::new(600.0, 300.0);
        // 29px visible
        assert!(!radar.is_revealed_in(Span::new(229.0, 400.0)));
        // 30px visible
        assert!(radar.is_revealed_in(Span::new(230.0, 400.0)));
        // partly above the view counts too
        assert!(radar.is_revealed_in(Span::new(850.0, 400.0)));
        assert!(!radar.is_revealed_in(Span::new(900.0, 400.0)));
    }

    #[test]
    fn test_empty_spans_never_reveal() {
        assert!(!Span::new(0.0, 0.0).is_revealed_in(Span::new(0.0, 400.0)));
        assert!(!Span::new(0.0, 100.0).is_revealed_in(Span::new(0.0, 0.0)));
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = RevealOnce::default();
        let section = Span::new(600.0, 300.0);

        assert!(!reveal.check(section, Span::new(0.0, 400.0)));
        assert!(!reveal.has_fired());
        assert!(reveal.check(section, Span::new(500.0, 400.0)));
        assert!(!reveal.check(section, Span::new(600.0, 400.0)));
        assert!(reveal.has_fired());
    }
}
