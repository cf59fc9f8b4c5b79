use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod lead;
mod quiz;
mod router;
mod schedule;
mod narration;
mod components {
    pub mod gateway;
    pub mod quiz;
    pub mod result;
    pub mod landing;
    pub mod presentation;
    pub mod gallery;
}

use components::{
    gateway::Gateway,
    quiz::QuizView,
    result::ResultView,
    landing::Landing,
};
use router::{Screen, ScreenEvent, ScreenRouter};


#[function_component]
fn App() -> Html {
    let router = use_reducer(ScreenRouter::default);

    let send = |event: ScreenEvent| {
        let router = router.clone();
        Callback::from(move |_: ()| router.dispatch(event.clone()))
    };

    let on_quiz_complete = {
        let router = router.clone();
        Callback::from(move |answers: Vec<String>| {
            router.dispatch(ScreenEvent::QuizCompleted(answers));
        })
    };

    let screen = match router.screen() {
        Screen::Splash => html! {
            <Gateway
                on_take_assessment={send(ScreenEvent::TakeAssessment)}
                on_explore={send(ScreenEvent::ExploreSite)}
            />
        },
        Screen::Quiz => html! {
            <QuizView
                on_complete={on_quiz_complete}
                on_exit={send(ScreenEvent::SkipQuiz)}
            />
        },
        Screen::Result => html! {
            <ResultView
                answers={router.answers().to_vec()}
                on_continue={send(ScreenEvent::ContinueWithoutSending)}
            />
        },
        Screen::MainContent => html! { <Landing /> },
    };

    html! {
        <div class="app-root">
            { screen }
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
