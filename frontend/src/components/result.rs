use yew::prelude::*;

use crate::content::EXPERT;
use crate::lead::handoff_url;

#[derive(Properties, PartialEq)]
pub struct ResultProps {
    pub answers: Vec<String>,
    pub on_continue: Callback<()>,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultProps) -> Html {
    let whatsapp_with_answers = use_memo(|answers: &Vec<String>| handoff_url(EXPERT.whatsapp, answers), props.answers.clone());
    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    html! {
        <div class="result">
            <div class="result-content">
                <div class="result-portrait">
                    <div class="result-glow"></div>
                    <img src={EXPERT.hero_image} alt={EXPERT.name} />
                </div>

                <div class="result-copy">
                    <h2 class="eyebrow">{"Perfil Compatível"}</h2>
                    <h1>{"Você é a Paciente ideal."}</h1>
                    <p>
                        {"Com base nas suas respostas, o Método da "}
                        <span class="strong">{format!("Dra. {}", EXPERT.name)}</span>
                        {" consegue entregar exatamente a naturalidade e segurança que você procura."}
                    </p>
                </div>

                <div class="result-actions">
                    <a class="button-whatsapp" href={(*whatsapp_with_answers).clone()} target="_blank" rel="noopener noreferrer">
                        {"1 - Enviar minha avaliação à Dra."}
                    </a>
                    <button class="button-primary" onclick={on_continue}>
                        {"2 - Não enviar e continuar no site"}
                    </button>
                    <a class="button-secondary" href={EXPERT.whatsapp} target="_blank" rel="noopener noreferrer">
                        {"3 - Chamar no WhatsApp sem compromisso"}
                    </a>
                </div>
            </div>
        </div>
    }
}
