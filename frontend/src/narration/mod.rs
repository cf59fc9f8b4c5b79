//! "Hear the doctor" narration: fetches generated speech for a fixed script,
//! plays it, and reveals captions word by word while it plays.
//!
//! Best effort with no retry. Any failure puts the session back to idle and is
//! only logged.
//!
//! [`NarrationTrigger`] holds the session lifecycle and its timers. It does no
//! I/O itself; the presentation component performs the request and playback and
//! reports back with the generation number handed out by [`NarrationTrigger::speak`],
//! so late results from an abandoned session are ignored.

pub mod audio;
pub mod pacing;
pub mod session;
pub mod speech;

use std::rc::Rc;

use log::{debug, error, info};
use thiserror::Error;
use yew::Callback;

use crate::schedule::{Scheduler, TaskHandle};
use pacing::{CaptionPacing, EvenWordPacing};
use session::NarrationSession;

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narration is not configured")]
    NotConfigured,
    #[error("speech request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("speech service answered with status {0}")]
    Status(u16),
    #[error("speech response carried no audio")]
    MissingAudio,
    #[error("audio payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
    #[error("audio payload of {0} bytes does not hold whole samples")]
    TruncatedPcm(usize),
    #[error("audio output unavailable: {0}")]
    Audio(String),
}

/// Timer notifications routed back into the owner of the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationTick {
    RevealWord(u64),
    LingerElapsed(u64),
}

pub struct NarrationTrigger<P: CaptionPacing = EvenWordPacing> {
    script: &'static str,
    pacing: P,
    linger_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    notify: Callback<NarrationTick>,
    session: NarrationSession,
    generation: u64,
    caption_task: Option<TaskHandle>,
    linger_task: Option<TaskHandle>,
}

impl NarrationTrigger<EvenWordPacing> {
    pub fn new(
        script: &'static str,
        linger_ms: u32,
        scheduler: Rc<dyn Scheduler>,
        notify: Callback<NarrationTick>,
    ) -> Self {
        Self::with_pacing(script, EvenWordPacing, linger_ms, scheduler, notify)
    }
}

impl<P: CaptionPacing> NarrationTrigger<P> {
    pub fn with_pacing(
        script: &'static str,
        pacing: P,
        linger_ms: u32,
        scheduler: Rc<dyn Scheduler>,
        notify: Callback<NarrationTick>,
    ) -> Self {
        Self {
            script,
            pacing,
            linger_ms,
            scheduler,
            notify,
            session: NarrationSession::idle(),
            generation: 0,
            caption_task: None,
            linger_task: None,
        }
    }

    pub fn script(&self) -> &'static str {
        self.script
    }

    pub fn session(&self) -> &NarrationSession {
        &self.session
    }

    /// Whether results for `generation` still belong to a live session.
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation && self.session.is_speaking
    }

    fn is_current(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!("Dropping narration event from stale session {}", generation);
            return false;
        }
        true
    }

    /// Starts a session. Returns `None`, changing nothing, while one is speaking.
    pub fn speak(&mut self) -> Option<u64> {
        if self.session.is_speaking {
            debug!("Narration already in progress, ignoring trigger");
            return None;
        }
        self.caption_task = None;
        self.linger_task = None;
        self.generation += 1;
        self.session.begin();
        info!("Narration session {} started", self.generation);
        Some(self.generation)
    }

    pub fn fail(&mut self, generation: u64, err: &NarrationError) {
        if !self.is_current(generation) {
            return;
        }
        error!("Narration failed: {}", err);
        self.caption_task = None;
        self.linger_task = None;
        self.session.reset();
    }

    /// Audio has started playing; schedules the caption reveal across its duration.
    pub fn playback_started(&mut self, generation: u64, duration_secs: f64) {
        if !self.is_current(generation) {
            return;
        }
        let words = self.session.load_words(self.script);
        self.caption_task = self.pacing.word_interval_ms(duration_secs, words).map(|interval| {
            let notify = self.notify.clone();
            self.scheduler.every(interval, Box::new(move || notify.emit(NarrationTick::RevealWord(generation))))
        });
    }

    pub fn reveal_word(&mut self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        if !self.session.reveal_next() {
            self.caption_task = None;
        }
    }

    /// Audio finished; captions stay up for the linger delay.
    pub fn playback_ended(&mut self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        info!("Narration session {} finished", generation);
        self.session.stop_speaking();
        let notify = self.notify.clone();
        self.linger_task = Some(
            self.scheduler
                .once(self.linger_ms, Box::new(move || notify.emit(NarrationTick::LingerElapsed(generation)))),
        );
    }

    pub fn linger_elapsed(&mut self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        self.caption_task = None;
        self.linger_task = None;
        self.session.reset();
    }

    pub fn handle(&mut self, tick: NarrationTick) {
        match tick {
            NarrationTick::RevealWord(generation) => self.reveal_word(generation),
            NarrationTick::LingerElapsed(generation) => self.linger_elapsed(generation),
        }
    }

    /// Abandons the current session, if any. Results still in flight are ignored.
    pub fn cancel(&mut self) {
        if !self.session.is_idle() {
            info!("Narration session {} cancelled", self.generation);
        }
        self.generation += 1;
        self.caption_task = None;
        self.linger_task = None;
        self.session.reset();
    }
}
