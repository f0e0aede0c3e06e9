use crate::domain::models::Mode;

pub type QuickReplySet = [&'static str; 3];

const EXECUTIVE: QuickReplySet = [
    "¿Cuáles son los precios para Buenos Aires-Mendoza?",
    "¿Hay empty legs disponibles hoy?",
    "Recomiéndame un jet para 6 personas",
];

const MEDICAL: QuickReplySet = [
    "Necesito una ambulancia aérea urgente",
    "¿Qué equipamiento médico tienen?",
    "Protocolo para emergencia cardiológica",
];

const INCUCAI: QuickReplySet = [
    "Trasplante de corazón urgente",
    "¿Cuánto tiempo de isquemia permite?",
    "Activar protocolo INCUCAI",
];

pub fn suggestions_for(mode: Mode) -> &'static QuickReplySet {
    match mode {
        Mode::Executive => &EXECUTIVE,
        Mode::Medical => &MEDICAL,
        Mode::Incucai => &INCUCAI,
    }
}

/// Suggestions for a raw host mode string; unknown modes get the executive set.
pub fn suggestions_for_host(mode: &str) -> &'static QuickReplySet {
    suggestions_for(Mode::from_host(mode))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::domain::models::ResponseCategory;
    use crate::domain::services::IntentResolver;

    #[test]
    fn test_every_mode_has_three_suggestions() {
        for mode in Mode::iter() {
            let suggestions = suggestions_for(mode);
            assert_eq!(suggestions.len(), 3);
            assert!(suggestions.iter().all(|s| !s.trim().is_empty()));
        }
    }

    #[test]
    fn test_unknown_mode_uses_executive_set() {
        assert_eq!(suggestions_for_host("charter"), &EXECUTIVE);
        assert_eq!(suggestions_for_host("medical"), &MEDICAL);
        assert_eq!(suggestions_for_host("INCUCAI"), &INCUCAI);
    }

    #[test]
    fn test_suggestions_hit_their_mode_rules() {
        let expected = [
            (
                Mode::Executive,
                [
                    ResponseCategory::ExecutivePricing,
                    ResponseCategory::ExecutiveEmptyLegs,
                    ResponseCategory::ExecutiveRecommendation,
                ],
            ),
            (
                Mode::Medical,
                [
                    ResponseCategory::MedicalEmergency,
                    ResponseCategory::MedicalEquipment,
                    ResponseCategory::MedicalEmergency,
                ],
            ),
            (
                Mode::Incucai,
                [
                    ResponseCategory::IncucaiOrganTransport,
                    ResponseCategory::IncucaiIschemiaTimes,
                    ResponseCategory::IncucaiGeneral,
                ],
            ),
        ];

        for (mode, categories) in expected {
            for (suggestion, category) in suggestions_for(mode).iter().zip(categories) {
                assert_eq!(IntentResolver::classify(suggestion, mode), category, "{suggestion}");
            }
        }
    }
}
