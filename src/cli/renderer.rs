//! Plain-text narration of a running search.

use std::thread;
use std::time::Duration;

use gametree::search::{SearchEvent, SearchObserver};
use gametree::tree::Tree;

/// Fraction of the base delay that full speed removes.
const SPEED_RANGE: f32 = 0.9;

/// Prints one narration line per step, indented by the depth of the node it concerns,
/// and waits `frame_delay()` between steps.
pub struct TextRenderer {
    delay: Duration,
    indent: usize,
}

impl TextRenderer {
    /// `speed` runs from 0 (the full base delay) to 1 (a tenth of it).
    pub fn new(base_delay_ms: u64, speed: f32) -> Self {
        let speed = speed.max(0.0).min(1.0);
        let delay_ms = (base_delay_ms as f32 * (1.0 - SPEED_RANGE * speed)).round() as u64;
        Self {
            delay: Duration::from_millis(delay_ms),
            indent: 0,
        }
    }

    pub fn frame_delay(&self) -> Option<Duration> {
        if self.delay.as_nanos() == 0 {
            None
        } else {
            Some(self.delay)
        }
    }
}

impl SearchObserver for TextRenderer {
    fn observe(&mut self, tree: &Tree, event: &SearchEvent) {
        // window updates belong to whichever node was last in view
        if let Some(node) = event.node() {
            self.indent = tree[node].depth();
        }
        println!("{:width$}{}", "", event, width = self.indent * 2);

        if let Some(delay) = self.frame_delay() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_speed_is_a_tenth_of_the_delay() {
        let renderer = TextRenderer::new(1000, 1.0);
        assert_eq!(renderer.frame_delay(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_zero_speed_keeps_the_delay() {
        let renderer = TextRenderer::new(1000, 0.0);
        assert_eq!(renderer.frame_delay(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn test_speed_is_clamped() {
        let fast = TextRenderer::new(1000, 7.0);
        let slow = TextRenderer::new(1000, -1.0);
        assert_eq!(fast.frame_delay(), Some(Duration::from_millis(100)));
        assert_eq!(slow.frame_delay(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn test_no_delay() {
        let renderer = TextRenderer::new(0, 0.5);
        assert_eq!(renderer.frame_delay(), None);
    }
}
