//! Static content of the site: practitioner profile, galleries, quiz questions
//! and the narration script. Everything here is read-only.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expert {
    pub name: &'static str,
    pub title: &'static str,
    pub cro: &'static str,
    pub address: &'static str,
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub hero_image: &'static str,
    pub secondary_image: &'static str,
    pub tertiary_image: &'static str,
    pub intro_video: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    pub fn offers(&self, label: &str) -> bool {
        self.options.iter().any(|option| *option == label)
    }
}

/// An in-page anchor of the main content navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub const EXPERT: Expert = Expert {
    name: "Brenda Pereira",
    title: "Harmonização Facial",
    cro: "CRO 20101",
    address: "Araranguá, SC",
    whatsapp: "https://api.whatsapp.com/send?phone=5548996501609&text=Oii%2C%20gostaria%20de%20mais%20informa%C3%A7%C3%B5es%20sobre%20o%20atendimento%20da%20Dra%20Brenda%20",
    instagram: "https://www.instagram.com/drabrendapereira/",
    hero_image: "https://i.imgur.com/Nd23wYi.png",
    secondary_image: "https://i.imgur.com/Fjf3Lh7.png",
    tertiary_image: "https://i.imgur.com/uo2TZ16.png",
    intro_video: "https://i.imgur.com/egBcFU8.mp4",
};

pub const RESULTS_IMAGES: &[&str] = &[
    "https://i.imgur.com/5hyhIAg.png",
    "https://i.imgur.com/MZ3uRmx.png",
    "https://i.imgur.com/406Hjrb.png",
    "https://i.imgur.com/F1hICGv.png",
    "https://i.imgur.com/WgX5yqG.png",
    "https://i.imgur.com/RfDGF6B.png",
    "https://i.imgur.com/drVhT0C.png",
    "https://i.imgur.com/QLMsDB3.png",
    "https://i.imgur.com/qe4eF05.png",
    "https://i.imgur.com/OrBCTXU.png",
];

pub const HEART_IMAGES: &[&str] = &[
    "https://i.imgur.com/Hr6R5pg.png",
    "https://i.imgur.com/8hhQZHQ.png",
    "https://i.imgur.com/eTduk1T.png",
    "https://i.imgur.com/lg4NNUL.png",
    "https://i.imgur.com/eTduk1T.png",
];

pub const TESTIMONIALS: &[&str] = &[
    "https://i.imgur.com/yxPsfTj.png",
    "https://i.imgur.com/gT3pBsk.png",
    "https://i.imgur.com/tZDe2El.png",
    "https://i.imgur.com/9320tKu.png",
    "https://i.imgur.com/x6NOiBC.png",
    "https://i.imgur.com/MvZZb91.png",
];

pub const QUIZ_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        prompt: "O que você mais deseja melhorar no seu rosto hoje?",
        options: &["Linhas de expressão", "Volume labial", "Contorno facial", "Qualidade da pele"],
    },
    Question {
        id: 2,
        prompt: "Qual sua maior preocupação ao realizar um procedimento?",
        options: &["Ficar artificial", "Sentir dor", "O tempo de recuperação", "O valor do investimento"],
    },
    Question {
        id: 3,
        prompt: "Já realizou algum procedimento de harmonização antes?",
        options: &["Nunca fiz", "Sim, há pouco tempo", "Sim, mas faz muito tempo", "Apenas procedimentos estéticos simples"],
    },
    Question {
        id: 4,
        prompt: "Quanto tempo você dispõe para a sua recuperação?",
        options: &["Preciso de algo imediato", "Posso repousar 2-3 dias", "Tenho flexibilidade total", "Ainda não pensei nisso"],
    },
];

pub const NARRATION_SCRIPT: &str = "Descubra como a beleza pode ser realçada com técnica, sensibilidade e propósito. Resultados naturais e transformadores. Aperte o play e sinta a diferença de ser cuidada por quem entende que sua beleza é única, e merece atenção especial.";

// Style instruction sent ahead of the script; it is not part of the captions.
pub const NARRATION_STYLE: &str = "Diga com voz calma, elegante e acolhedora: ";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d14013.391264624135!2d-49.4891461!3d-28.941916!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x9522295555555555%3A0x6b8b8b8b8b8b8b8b!2sArarangu%C3%A1%2C%20SC!5e0!3m2!1spt-BR!2sbr!4v1715000000000!5m2!1spt-BR!2sbr";

pub const NAV_SECTIONS: &[Section] = &[
    Section { anchor: "sobre-dra", label: "Sobre a Dra." },
    Section { anchor: "prova-visual", label: "Prova Visual" },
    Section { anchor: "harmonizacao", label: "Harmonização de ❤️" },
    Section { anchor: "onde-encontrar", label: "Onde nos Encontrar" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn quiz_questions_are_well_formed() {
        assert!(!QUIZ_QUESTIONS.is_empty());
        let mut ids = HashSet::new();
        for question in QUIZ_QUESTIONS {
            assert!((2..=6).contains(&question.options.len()), "question {} has {} options", question.id, question.options.len());
            assert!(ids.insert(question.id), "duplicate question id {}", question.id);
            let unique: HashSet<_> = question.options.iter().collect();
            assert_eq!(unique.len(), question.options.len());
        }
    }

    #[test]
    fn offers_matches_exact_labels_only() {
        let first = &QUIZ_QUESTIONS[0];
        assert!(first.offers("Volume labial"));
        assert!(!first.offers("volume labial"));
        assert!(!first.offers(""));
    }

    #[test]
    fn nav_anchors_are_unique() {
        let anchors: HashSet<_> = NAV_SECTIONS.iter().map(|s| s.anchor).collect();
        assert_eq!(anchors.len(), NAV_SECTIONS.len());
    }

    #[test]
    fn messaging_template_accepts_appended_text() {
        assert!(EXPERT.whatsapp.contains("text="));
        assert!(!EXPERT.whatsapp.contains('#'));
    }
}
