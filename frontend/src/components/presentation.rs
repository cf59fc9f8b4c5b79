use std::rc::Rc;

use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config;
use crate::content::{EXPERT, NARRATION_SCRIPT};
use crate::narration::audio::{self, PcmClip, Playback};
use crate::narration::speech::SpeechClient;
use crate::narration::{NarrationError, NarrationTick, NarrationTrigger};
use crate::schedule::BrowserScheduler;

pub enum PresentationMsg {
    Speak,
    Synthesized(u64, Result<PcmClip, NarrationError>),
    PlaybackEnded(u64),
    Tick(NarrationTick),
    ToggleMute,
}

/// Intro video with the narrated presentation and its caption overlay.
pub struct Presentation {
    trigger: NarrationTrigger,
    playback: Option<Playback>,
    video_ref: NodeRef,
    muted: bool,
}

async fn synthesize_clip(script: &'static str) -> Result<PcmClip, NarrationError> {
    let client = SpeechClient::from_config().ok_or(NarrationError::NotConfigured)?;
    let pcm = client.synthesize(script).await?;
    PcmClip::from_le_bytes(&pcm, config::SPEECH_SAMPLE_RATE, config::SPEECH_CHANNELS)
}

impl Component for Presentation {
    type Message = PresentationMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            trigger: NarrationTrigger::new(
                NARRATION_SCRIPT,
                config::CAPTION_LINGER_MS,
                Rc::new(BrowserScheduler),
                ctx.link().callback(PresentationMsg::Tick),
            ),
            playback: None,
            video_ref: NodeRef::default(),
            muted: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PresentationMsg::Speak => {
                let Some(generation) = self.trigger.speak() else {
                    return false;
                };
                let script = self.trigger.script();
                ctx.link().send_future(async move {
                    PresentationMsg::Synthesized(generation, synthesize_clip(script).await)
                });
                true
            }
            PresentationMsg::Synthesized(generation, Ok(clip)) => {
                if !self.trigger.accepts(generation) {
                    return false;
                }
                let link = ctx.link().clone();
                match audio::play(&clip, move || link.send_message(PresentationMsg::PlaybackEnded(generation))) {
                    Ok(playback) => {
                        self.playback = Some(playback);
                        self.trigger.playback_started(generation, clip.duration_secs());
                    }
                    Err(e) => self.trigger.fail(generation, &e),
                }
                true
            }
            PresentationMsg::Synthesized(generation, Err(e)) => {
                self.trigger.fail(generation, &e);
                true
            }
            PresentationMsg::PlaybackEnded(generation) => {
                // The finished node is kept until the next clip or unmount; this
                // message is delivered from inside its `onended` closure.
                self.trigger.playback_ended(generation);
                true
            }
            PresentationMsg::Tick(tick) => {
                self.trigger.handle(tick);
                true
            }
            PresentationMsg::ToggleMute => {
                if let Some(video) = self.video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(!video.muted());
                    self.muted = video.muted();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = self.trigger.session();
        let on_speak = ctx.link().callback(|_: MouseEvent| PresentationMsg::Speak);
        let on_toggle_mute = ctx.link().callback(|_: MouseEvent| PresentationMsg::ToggleMute);

        html! {
            <section class="presentation">
                <div class="presentation-grid">
                    <div class="presentation-video">
                        <video ref={self.video_ref.clone()} autoplay=true muted=true loop=true playsinline=true>
                            <source src={EXPERT.intro_video} type="video/mp4" />
                        </video>

                        if session.is_caption_visible {
                            <div class="caption-overlay">
                                <p>
                                    if session.caption_text.is_empty() {
                                        {"..."}
                                    } else {
                                        {session.caption_text.clone()}
                                    }
                                </p>
                            </div>
                        }

                        <div class="video-controls">
                            <button class="video-mute" onclick={on_toggle_mute}>
                                if self.muted {
                                    <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z" />
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2" />
                                    </svg>
                                } else {
                                    <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15.536 8.464a5 5 0 010 7.072m2.828-9.9a9 9 0 010 12.728M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z" />
                                    </svg>
                                }
                            </button>
                        </div>
                        <div class="video-badge">{"Original 720p"}</div>
                    </div>

                    <div class="presentation-copy">
                        <div class="presentation-label">
                            <span class="pill">{"Apresentação"}</span>
                            if session.is_speaking {
                                <div class="speaking-indicator">
                                    <div></div><div></div><div></div>
                                </div>
                            }
                        </div>
                        <h3>{"Técnica, sensibilidade e propósito."}</h3>
                        <p class="quote">{NARRATION_SCRIPT}</p>

                        <div class="presentation-actions">
                            <button
                                class={classes!("narrate-button", session.is_speaking.then(|| "speaking"))}
                                disabled={session.is_speaking}
                                onclick={on_speak}
                            >
                                { if session.is_speaking { "Narrando...".to_string() } else { format!("Ouça a Dra. {}", first_name(EXPERT.name)) } }
                            </button>
                            <span class="narrate-note">{"Narrativa Personalizada via AI"}</span>
                        </div>
                    </div>
                </div>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(playback) = self.playback.take() {
            playback.stop();
        }
        self.trigger.cancel();
    }
}

fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_uses_first_name() {
        assert_eq!(first_name(EXPERT.name), "Brenda");
        assert_eq!(first_name("Ana"), "Ana");
        assert_eq!(first_name(""), "");
    }
}
