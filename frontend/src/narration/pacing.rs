/// Decides how fast captions are revealed against the audio.
pub trait CaptionPacing {
    /// Milliseconds between two revealed words, or `None` when there is nothing to reveal.
    fn word_interval_ms(&self, duration_secs: f64, word_count: usize) -> Option<u32>;
}

/// Spreads the words evenly over the clip so the last word lands at the end
/// of playback. Approximate only; there is no word timing from the audio.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EvenWordPacing;

impl CaptionPacing for EvenWordPacing {
    fn word_interval_ms(&self, duration_secs: f64, word_count: usize) -> Option<u32> {
        if word_count == 0 || !duration_secs.is_finite() || duration_secs <= 0.0 {
            return None;
        }
        let interval = (duration_secs * 1000.0 / word_count as f64).round();
        Some(interval.clamp(1.0, u32::MAX as f64) as u32)
    }
}
