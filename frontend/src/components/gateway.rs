use yew::prelude::*;

use crate::content::EXPERT;

#[derive(Properties, PartialEq)]
pub struct GatewayProps {
    pub on_take_assessment: Callback<()>,
    pub on_explore: Callback<()>,
}

/// Splash screen: take the assessment or go straight to the site.
#[function_component(Gateway)]
pub fn gateway(props: &GatewayProps) -> Html {
    let take_assessment = {
        let on_take_assessment = props.on_take_assessment.clone();
        Callback::from(move |_: MouseEvent| on_take_assessment.emit(()))
    };
    let explore = {
        let on_explore = props.on_explore.clone();
        Callback::from(move |_: MouseEvent| on_explore.emit(()))
    };

    html! {
        <div class="gateway">
            <div class="gateway-orb gateway-orb-top"></div>
            <div class="gateway-orb gateway-orb-bottom"></div>

            <div class="gateway-content">
                <div class="gateway-portrait">
                    <div class="gateway-portrait-ring">
                        <img src={EXPERT.hero_image} alt={EXPERT.name} />
                    </div>
                    <span class="gateway-badge">{"Premium Expert"}</span>
                </div>

                <div class="gateway-intro">
                    <div class="signature">{format!("Dra. {}", EXPERT.name)}</div>
                    <div class="divider"></div>
                    <h1>
                        {"Sua melhor versão começa com uma "}
                        <span class="italic">{"decisão."}</span>
                    </h1>
                    <p>{"Escolha como deseja iniciar sua experência exclusiva de cuidado e beleza."}</p>
                </div>

                <div class="gateway-actions">
                    <button class="button-primary" onclick={take_assessment}>
                        {"Fazer Avaliação Personalizada"}
                        <svg class="icon-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"></path>
                        </svg>
                    </button>
                    <button class="button-secondary" onclick={explore}>
                        {"Explorar o site completo"}
                    </button>
                </div>
            </div>
        </div>
    }
}
