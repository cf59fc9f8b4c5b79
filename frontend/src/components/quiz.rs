use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::config;
use crate::content::{EXPERT, QUIZ_QUESTIONS};
use crate::quiz::{QuizController, QuizPhase};
use crate::schedule::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct QuizProps {
    pub on_complete: Callback<Vec<String>>,
    pub on_exit: Callback<()>,
}

pub enum QuizMsg {
    Answer(&'static str),
    Exit,
}

pub struct QuizView {
    controller: QuizController<'static>,
}

impl Component for QuizView {
    type Message = QuizMsg;
    type Properties = QuizProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: QuizController::new(
                QUIZ_QUESTIONS,
                config::ANALYZING_DELAY_MS,
                Rc::new(BrowserScheduler),
                props.on_complete.clone(),
                props.on_exit.clone(),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let result = match msg {
            QuizMsg::Answer(label) => self.controller.answer(label).map(|_| ()),
            QuizMsg::Exit => self.controller.exit(),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Quiz input ignored: {}", e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.controller.phase() == QuizPhase::Analyzing {
            return html! {
                <div class="quiz-analyzing">
                    <div class="quiz-analyzing-portrait">
                        <img src={EXPERT.hero_image} alt={EXPERT.name} />
                    </div>
                    <h2>{"Analisando seu perfil..."}</h2>
                    <div class="quiz-analyzing-track">
                        <div class="quiz-analyzing-bar"
                            style={format!("animation-duration: {}ms;", config::ANALYZING_DELAY_MS)}></div>
                    </div>
                    <p class="quiz-analyzing-note">{"Personalizando sua experiência"}</p>
                </div>
            };
        }

        let Some(question) = self.controller.current() else {
            return html! {};
        };
        let step = self.controller.step();
        let progress = self.controller.progress() * 100.0;
        let on_exit = ctx.link().callback(|_: MouseEvent| QuizMsg::Exit);

        html! {
            <div class="quiz-overlay">
                <div class="quiz-card">
                    <div class="quiz-portrait">
                        <div class="quiz-portrait-ring">
                            <img src={EXPERT.hero_image} alt={EXPERT.name} />
                        </div>
                    </div>

                    <div class="quiz-body">
                        <div class="quiz-header">
                            <h3>{format!("Dra. {}", EXPERT.name)}</h3>
                            <div class="quiz-progress">
                                <div class="quiz-progress-track">
                                    <div class="quiz-progress-fill" style={format!("width: {:.0}%;", progress)}></div>
                                </div>
                                <span>{format!("{} / {}", step + 1, self.controller.total())}</span>
                            </div>
                        </div>

                        // Keyed on the step so the entry animation restarts per question.
                        <div key={step} class="quiz-question">
                            <h2>{question.prompt}</h2>
                            <div class="quiz-options">
                                { for question.options.iter().map(|&option| {
                                    let onclick = ctx.link().callback(move |_: MouseEvent| QuizMsg::Answer(option));
                                    html! {
                                        <button class="quiz-option" {onclick}>{option}</button>
                                    }
                                }) }
                            </div>
                        </div>

                        <button class="quiz-skip" onclick={on_exit}>
                            {"Pular e ir para o site"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
