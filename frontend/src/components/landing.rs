use stylist::yew::styled_component;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::gallery::{ImageGrid, ZoomGallery};
use crate::components::presentation::Presentation;
use crate::config;
use crate::content::{EXPERT, HEART_IMAGES, MAP_EMBED_URL, NAV_SECTIONS, RESULTS_IMAGES, TESTIMONIALS};
use crate::lead::maps_search_url;

/// Page offset to scroll to so a section's top sits just below the fixed nav.
pub fn scroll_target(element_top: f64, page_offset: f64, nav_offset: f64) -> f64 {
    (element_top + page_offset - nav_offset).max(0.0)
}

fn scroll_to_section(anchor: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(anchor)) else {
        gloo_console::warn!("Missing section", anchor);
        return;
    };

    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        config::NAV_SCROLL_OFFSET,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", anchor)));
    }
}

#[styled_component(SectionNav)]
pub fn section_nav() -> Html {
    let links = css!(
        r#"
        a {
            font-size: 8px;
            font-weight: 900;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            color: #6b7280;
            transition: all 0.3s;
            padding: 8px 4px;
            border-bottom: 2px solid transparent;
            flex-shrink: 0;
        }
        a:hover {
            color: #b8860b;
            border-color: #b8860b;
        }
        @media (min-width: 768px) {
            a {
                font-size: 11px;
            }
        }
        "#
    );

    html! {
        <nav class="section-nav">
            <div class={classes!("section-nav-links", links)}>
                { for NAV_SECTIONS.iter().map(|section| {
                    let anchor = section.anchor;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section(anchor);
                    });
                    html! {
                        <a href={format!("#{}", anchor)} {onclick}>{section.label}</a>
                    }
                }) }
            </div>
        </nav>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // The splash screens are fixed overlays; start the site from the top.
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class="landing-page">
            <SectionNav />

            <section class="hero">
                <div class="hero-copy">
                    <h2 class="eyebrow">{format!("Dra. {} | {}", EXPERT.name, EXPERT.cro)}</h2>
                    <h1>
                        {"A sensibilidade de um olhar que valoriza a sua "}
                        <span class="italic">{"essência única."}</span>
                    </h1>
                    <p>{"Realce sua beleza natural com técnica avançada e resultados que não parecem artificiais."}</p>
                    <a href={EXPERT.whatsapp} class="hero-cta">{"Agendar consulta no WhatsApp"}</a>
                </div>
                <div class="hero-image">
                    <img src={EXPERT.hero_image} alt={EXPERT.name} />
                </div>
            </section>

            <Presentation />

            <section id="sobre-dra" class="about">
                <div class="about-copy">
                    <h2>{"A ciência por trás do seu sorriso."}</h2>
                    <p>{format!(
                        "Olá, eu sou a Dra. {}. Minha jornada na {} nasceu da paixão por revelar o que cada rosto tem de mais belo.",
                        EXPERT.name, EXPERT.title
                    )}</p>
                    <ul class="checklist">
                        <li>{"Avaliação honesta e personalizada"}</li>
                        <li>{"Foco total em naturalidade"}</li>
                        <li>{"Materiais de altíssima qualidade"}</li>
                    </ul>
                </div>
                <div class="about-images">
                    <img src={EXPERT.secondary_image} alt="Atendimento" />
                    <img src={EXPERT.tertiary_image} alt={format!("Dra {}", EXPERT.name)} />
                </div>
            </section>

            <section id="prova-visual" class="visual-proof">
                <h2>{"Prova Visual"}</h2>
                <ZoomGallery images={RESULTS_IMAGES} alt_prefix="Resultado" />
            </section>

            <section id="harmonizacao" class="heart">
                <h2>{"Harmonização de ❤️"}</h2>
                <ImageGrid images={HEART_IMAGES} alt="Cuidado" class={classes!("portrait")} />
            </section>

            <section class="testimonials">
                <h2>{"O que minhas pacientes dizem"}</h2>
                <ImageGrid images={TESTIMONIALS} alt="Feedback" class={classes!("cards")} />
            </section>

            <section id="onde-encontrar" class="location">
                <div class="location-copy">
                    <h2>{"Onde nos Encontrar"}</h2>
                    <p class="address">{EXPERT.address}</p>
                    <a href={maps_search_url(EXPERT.address)} target="_blank" rel="noopener noreferrer" class="button-primary">
                        {"Ver no Google Maps"}
                    </a>
                </div>
                <div class="location-map">
                    <iframe src={MAP_EMBED_URL} width="100%" height="100%" style="border: 0;" allowfullscreen=true loading="lazy"></iframe>
                </div>
            </section>

            <footer class="site-footer">
                <div class="signature">{EXPERT.name}</div>
                <p>{format!("{} | {}", EXPERT.title, EXPERT.cro)}</p>
                <a href={EXPERT.instagram} target="_blank" rel="noopener noreferrer" class="social-link">{"Instagram"}</a>
            </footer>

            <a href={EXPERT.whatsapp} class="whatsapp-float" target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">
                <img src="https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg" alt="WhatsApp" />
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_clears_the_nav() {
        assert_eq!(scroll_target(400.0, 1200.0, 60.0), 1540.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 60.0), 840.0);
    }

    #[test]
    fn scroll_target_never_goes_above_the_page() {
        assert_eq!(scroll_target(20.0, 0.0, 60.0), 0.0);
    }
}
