
// Local builds can point narration at a mock server with SPEECH_API_BASE.
#[cfg(debug_assertions)]
pub fn get_speech_api_base() -> &'static str {
    option_env!("SPEECH_API_BASE").unwrap_or("https://generativelanguage.googleapis.com")
}

#[cfg(not(debug_assertions))]
pub fn get_speech_api_base() -> &'static str {
    "https://generativelanguage.googleapis.com"
}

/// Narration credential, baked in at build time. Narration is disabled without it.
pub fn get_speech_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

pub const SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const SPEECH_VOICE: &str = "Kore";

pub const SPEECH_SAMPLE_RATE: u32 = 24_000;
pub const SPEECH_CHANNELS: u32 = 1;

pub const ANALYZING_DELAY_MS: u32 = 3_000;
pub const CAPTION_LINGER_MS: u32 = 2_000;

// Height of the fixed navigation bar kept clear when scrolling to a section.
pub const NAV_SCROLL_OFFSET: f64 = 60.0;
