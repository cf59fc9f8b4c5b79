//! Client for the generative speech endpoint. One request per narration, no retry.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::NarrationError;
use crate::config;
use crate::content::NARRATION_STYLE;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize, Debug)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'a str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Deserialize, Debug)]
struct InlineData {
    data: String,
}

/// Pulls the first inline audio payload out of a response and decodes it.
pub fn extract_audio(response: GenerateContentResponse) -> Result<Vec<u8>, NarrationError> {
    let payload = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.inline_data))
        .map(|inline| inline.data)
        .filter(|data| !data.is_empty())
        .ok_or(NarrationError::MissingAudio)?;

    Ok(STANDARD.decode(payload.trim())?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechClient {
    base: &'static str,
    api_key: &'static str,
    model: &'static str,
    voice: &'static str,
}

impl SpeechClient {
    /// `None` when no credential was configured at build time.
    pub fn from_config() -> Option<Self> {
        config::get_speech_api_key().map(|api_key| Self {
            base: config::get_speech_api_base(),
            api_key,
            model: config::SPEECH_MODEL,
            voice: config::SPEECH_VOICE,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base.trim_end_matches('/'), self.model)
    }

    pub fn request_body<'a>(&'a self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: vec![Content { parts: vec![TextPart { text: prompt }] }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig { voice_name: self.voice },
                    },
                },
            },
        }
    }

    /// Returns raw little-endian 16-bit PCM.
    pub async fn synthesize(&self, script: &str) -> Result<Vec<u8>, NarrationError> {
        let prompt = format!("{}{}", NARRATION_STYLE, script);
        let response = Request::post(&self.endpoint())
            .header("x-goog-api-key", self.api_key)
            .json(&self.request_body(&prompt))?
            .send()
            .await?;

        if !response.ok() {
            return Err(NarrationError::Status(response.status()));
        }

        let body = response.json::<GenerateContentResponse>().await?;
        extract_audio(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> SpeechClient {
        SpeechClient {
            base: "https://speech.test/",
            api_key: "key",
            model: config::SPEECH_MODEL,
            voice: config::SPEECH_VOICE,
        }
    }

    #[test]
    fn endpoint_names_the_model() {
        assert_eq!(
            client().endpoint(),
            "https://speech.test/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }

    #[test]
    fn request_asks_for_audio_in_the_configured_voice() {
        let client = client();
        let body = serde_json::to_value(client.request_body("Olá")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "Olá" }] }],
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } }
                    }
                }
            })
        );
    }

    #[test]
    fn extracts_inline_audio() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAD/fw==" } }]
                }
            }]
        }))
        .unwrap();
        assert_eq!(extract_audio(response).unwrap(), vec![0x00, 0x00, 0xff, 0x7f]);
    }

    #[test]
    fn missing_payload_is_an_error() {
        for body in [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "sorry" }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "" } }] } }] }),
        ] {
            let response: GenerateContentResponse = serde_json::from_value(body.clone()).unwrap();
            assert!(matches!(extract_audio(response), Err(NarrationError::MissingAudio)), "{}", body);
        }
    }

    #[test]
    fn invalid_base64_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "not base64!" } }] } }]
        }))
        .unwrap();
        assert!(matches!(extract_audio(response), Err(NarrationError::InvalidPayload(_))));
    }
}
