/// Visible state of one narration: whether audio is playing and what the
/// caption overlay shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrationSession {
    pub is_speaking: bool,
    pub caption_text: String,
    pub is_caption_visible: bool,
    words: Vec<String>,
    revealed: usize,
}

impl NarrationSession {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        !self.is_speaking && !self.is_caption_visible
    }

    pub(crate) fn begin(&mut self) {
        *self = Self { is_speaking: true, is_caption_visible: true, ..Self::default() };
    }

    pub(crate) fn load_words(&mut self, script: &str) -> usize {
        self.words = script.split_whitespace().map(str::to_string).collect();
        self.revealed = 0;
        self.words.len()
    }

    /// Reveals one more word. Returns `false` once every word is shown.
    pub(crate) fn reveal_next(&mut self) -> bool {
        if self.revealed < self.words.len() {
            self.revealed += 1;
            self.caption_text = self.words[..self.revealed].join(" ");
        }
        self.revealed < self.words.len()
    }

    pub(crate) fn stop_speaking(&mut self) {
        self.is_speaking = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::idle();
    }
}
