//! Builds the outbound messaging links from the quiz answers.

const ASSESSMENT_HEADING: &str = "*Minha Avaliação:*";

/// Numbered list of answers, preceded by the assessment heading.
pub fn assessment_text(answers: &[String]) -> String {
    let lines: Vec<String> = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("{}. {}", i + 1, answer))
        .collect();
    format!("\n\n{}\n{}", ASSESSMENT_HEADING, lines.join("\n"))
}

/// Appends the encoded assessment to a deep-link template whose last query
/// parameter is the message text.
pub fn handoff_url(template: &str, answers: &[String]) -> String {
    format!("{}{}", template, urlencoding::encode(&assessment_text(answers)))
}

pub fn maps_search_url(address: &str) -> String {
    format!("https://www.google.com/maps/search/{}", urlencoding::encode(address))
}
