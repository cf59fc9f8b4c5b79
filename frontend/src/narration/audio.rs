//! PCM decoding and playback through a single page-wide audio context.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AudioBufferSourceNode, AudioContext, AudioContextOptions, AudioScheduledSourceNode};

use super::NarrationError;

#[derive(Debug, Clone, PartialEq)]
pub struct PcmClip {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u32,
}

impl PcmClip {
    /// Decodes interleaved signed 16-bit little-endian samples.
    pub fn from_le_bytes(bytes: &[u8], sample_rate: u32, channels: u32) -> Result<Self, NarrationError> {
        if bytes.is_empty() {
            return Err(NarrationError::MissingAudio);
        }
        let frame = 2 * channels as usize;
        if channels == 0 || bytes.len() % frame != 0 {
            return Err(NarrationError::TruncatedPcm(bytes.len()));
        }
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
            .collect();
        Ok(Self { samples, sample_rate, channels })
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.sample_rate)
    }

    fn channel(&self, channel: u32) -> Vec<f32> {
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels as usize)
            .copied()
            .collect()
    }
}

thread_local! {
    static AUDIO_CONTEXT: RefCell<Option<AudioContext>> = RefCell::new(None);
}

// Created on first use and kept for the lifetime of the page.
fn shared_context(sample_rate: u32) -> Result<AudioContext, NarrationError> {
    AUDIO_CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(ctx) = slot.as_ref() {
            return Ok(ctx.clone());
        }
        let options = AudioContextOptions::new();
        options.set_sample_rate(sample_rate as f32);
        let ctx = AudioContext::new_with_context_options(&options)
            .map_err(|e| NarrationError::Audio(format!("{:?}", e)))?;
        *slot = Some(ctx.clone());
        Ok(ctx)
    })
}

/// A clip that is currently playing. Stopping or dropping it silences the
/// output without firing the end callback.
pub struct Playback {
    source: AudioBufferSourceNode,
    _on_ended: Closure<dyn FnMut()>,
}

impl Playback {
    pub fn stop(&self) {
        let node: &AudioScheduledSourceNode = self.source.as_ref();
        node.set_onended(None);
        let _ = node.stop();
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn play(clip: &PcmClip, on_ended: impl FnOnce() + 'static) -> Result<Playback, NarrationError> {
    let audio_err = |e: wasm_bindgen::JsValue| NarrationError::Audio(format!("{:?}", e));

    let ctx = shared_context(clip.sample_rate)?;
    // Contexts created outside a user gesture start suspended.
    let _ = ctx.resume();
    let buffer = ctx
        .create_buffer(clip.channels, clip.frames() as u32, clip.sample_rate as f32)
        .map_err(audio_err)?;
    for channel in 0..clip.channels {
        let mut data = clip.channel(channel);
        buffer.copy_to_channel(&mut data, channel as i32).map_err(audio_err)?;
    }

    let source = ctx.create_buffer_source().map_err(audio_err)?;
    source.set_buffer(Some(&buffer));
    source.connect_with_audio_node(&ctx.destination()).map_err(audio_err)?;

    let mut on_ended = Some(on_ended);
    let on_ended = Closure::wrap(Box::new(move || {
        if let Some(callback) = on_ended.take() {
            callback();
        }
    }) as Box<dyn FnMut()>);
    let node: &AudioScheduledSourceNode = source.as_ref();
    node.set_onended(Some(on_ended.as_ref().unchecked_ref()));
    node.start().map_err(audio_err)?;

    Ok(Playback { source, _on_ended: on_ended })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_i16() {
        let clip = PcmClip::from_le_bytes(&[0x00, 0x00, 0xff, 0x7f, 0x00, 0x80, 0x00, 0x40], 24_000, 1).unwrap();
        assert_eq!(clip.frames(), 4);
        assert_eq!(clip.channel(0), vec![0.0, 32767.0 / 32768.0, -1.0, 0.5]);
    }

    #[test]
    fn duration_follows_sample_rate() {
        let one_second = vec![0u8; 24_000 * 2];
        let clip = PcmClip::from_le_bytes(&one_second, 24_000, 1).unwrap();
        assert!((clip.duration_secs() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn splits_interleaved_channels() {
        let clip = PcmClip::from_le_bytes(&[0x00, 0x40, 0x00, 0xc0, 0x00, 0x20, 0x00, 0xe0], 48_000, 2).unwrap();
        assert_eq!(clip.frames(), 2);
        assert_eq!(clip.channel(0), vec![0.5, 0.25]);
        assert_eq!(clip.channel(1), vec![-0.5, -0.25]);
    }

    #[test]
    fn rejects_truncated_or_empty_payloads() {
        assert!(matches!(PcmClip::from_le_bytes(&[], 24_000, 1), Err(NarrationError::MissingAudio)));
        assert!(matches!(PcmClip::from_le_bytes(&[1, 2, 3], 24_000, 1), Err(NarrationError::TruncatedPcm(3))));
        assert!(matches!(PcmClip::from_le_bytes(&[1, 2], 24_000, 2), Err(NarrationError::TruncatedPcm(2))));
    }
}
