//! Quiz flow: walks the questions in order, collects one answer per question
//! and hands the answers off after a fixed "analyzing" pause.

use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;
use yew::Callback;

use crate::content::Question;
use crate::schedule::{Scheduler, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Asking,
    Analyzing,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Advanced(usize),
    Analyzing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("the quiz is already analyzing the answers")]
    AlreadyAnalyzing,
    #[error("the quiz was exited")]
    Exited,
    #[error("\"{label}\" is not an option of question {question}")]
    UnknownOption { question: u32, label: String },
}

pub struct QuizController<'q> {
    questions: &'q [Question],
    step: usize,
    answers: Vec<String>,
    phase: QuizPhase,
    analyzing_delay_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    on_complete: Callback<Vec<String>>,
    on_exit: Callback<()>,
    // Dropping the controller drops this and cancels the pending hand-off.
    pending: Option<TaskHandle>,
}

impl<'q> QuizController<'q> {
    /// `questions` must not be empty.
    pub fn new(
        questions: &'q [Question],
        analyzing_delay_ms: u32,
        scheduler: Rc<dyn Scheduler>,
        on_complete: Callback<Vec<String>>,
        on_exit: Callback<()>,
    ) -> Self {
        debug_assert!(!questions.is_empty());
        Self {
            questions,
            step: 0,
            answers: Vec::with_capacity(questions.len()),
            phase: QuizPhase::Asking,
            analyzing_delay_ms,
            scheduler,
            on_complete,
            on_exit,
            pending: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&'q Question> {
        match self.phase {
            QuizPhase::Asking => self.questions.get(self.step),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Share of the quiz reached, in `(0, 1]`. Display only.
    pub fn progress(&self) -> f64 {
        (self.step + 1) as f64 / self.questions.len() as f64
    }

    pub fn answer(&mut self, label: &str) -> Result<QuizStep, QuizError> {
        match self.phase {
            QuizPhase::Analyzing => return Err(QuizError::AlreadyAnalyzing),
            QuizPhase::Exited => return Err(QuizError::Exited),
            QuizPhase::Asking => {}
        }
        let question = &self.questions[self.step];
        if !question.offers(label) {
            return Err(QuizError::UnknownOption { question: question.id, label: label.to_string() });
        }

        self.answers.push(label.to_string());
        if self.step + 1 < self.questions.len() {
            self.step += 1;
            debug!("Quiz advanced to step {}", self.step);
            return Ok(QuizStep::Advanced(self.step));
        }

        info!("Quiz answered, analyzing {} answers", self.answers.len());
        self.phase = QuizPhase::Analyzing;
        let answers = self.answers.clone();
        let on_complete = self.on_complete.clone();
        self.pending = Some(self.scheduler.once(
            self.analyzing_delay_ms,
            Box::new(move || on_complete.emit(answers)),
        ));
        Ok(QuizStep::Analyzing)
    }

    /// Leaves the quiz for the main site. Collected answers are discarded.
    pub fn exit(&mut self) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Analyzing => Err(QuizError::AlreadyAnalyzing),
            QuizPhase::Exited => Err(QuizError::Exited),
            QuizPhase::Asking => {
                info!("Quiz skipped at step {}", self.step);
                self.answers.clear();
                self.phase = QuizPhase::Exited;
                self.on_exit.emit(());
                Ok(())
            }
        }
    }
}
