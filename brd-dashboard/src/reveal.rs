//! Entrance and scroll-reveal animation parameters.
//!
//! Purely cosmetic. The browser side applies these as inline CSS
//! transitions; this module only decides what to animate and when.

use std::collections::HashSet;

/// Elements that fade in as they scroll into view.
pub const REVEAL_SELECTOR: &str = ".chart-container, .stat-card";
/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Starting offset before a reveal, in pixels.
pub const REVEAL_OFFSET_PX: u32 = 30;
pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_STAGGER_MS: u32 = 100;
/// easeOutQuart
pub const REVEAL_EASING: &str = "cubic-bezier(0.25, 1, 0.5, 1)";

/// easeOutExpo
pub const HERO_EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";
pub const HERO_DURATION_MS: u32 = 1000;

/// One step of the hero entrance sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStep {
    pub element_id: &'static str,
    pub offset_px: u32,
    /// Start time relative to page load.
    pub delay_ms: u32,
}

/// Title, then subtitle overlapping it, then the buttons.
pub const HERO_SEQUENCE: [HeroStep; 3] = [
    HeroStep { element_id: "hero-title", offset_px: 50, delay_ms: 500 },
    HeroStep { element_id: "hero-subtitle", offset_px: 30, delay_ms: 1000 },
    HeroStep { element_id: "hero-buttons", offset_px: 20, delay_ms: 1800 },
];

/// Inline style for an element that has not been revealed yet.
pub fn hidden_style(offset_px: u32) -> [(&'static str, String); 2] {
    [
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({offset_px}px)")),
    ]
}

/// Inline style that plays the reveal transition.
pub fn shown_style(duration_ms: u32, delay_ms: u32, easing: &str) -> [(&'static str, String); 3] {
    [
        (
            "transition",
            format!("opacity {duration_ms}ms {easing} {delay_ms}ms, transform {duration_ms}ms {easing} {delay_ms}ms"),
        ),
        ("opacity", "1".to_string()),
        ("transform", "translateY(0)".to_string()),
    ]
}

/// Remembers which elements have already been revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
    pending_in_batch: u32,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stagger delay the first time `key` becomes visible, `None` afterwards.
    pub fn reveal(&mut self, key: &str) -> Option<u32> {
        if !self.revealed.insert(key.to_string()) {
            return None;
        }
        let delay = self.pending_in_batch * REVEAL_STAGGER_MS;
        self.pending_in_batch += 1;
        Some(delay)
    }

    /// Reveal an observed element, keyed by its position in `targets`.
    ///
    /// Elements the observer was not given are ignored.
    pub fn reveal_target<T: PartialEq>(&mut self, targets: &[T], target: &T) -> Option<u32> {
        let index = targets.iter().position(|t| t == target)?;
        self.reveal(&index.to_string())
    }

    /// Marks the end of one visibility callback so the next batch restarts its stagger.
    pub fn end_batch(&mut self) {
        self.pending_in_batch = 0;
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
