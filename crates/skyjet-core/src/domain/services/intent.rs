#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;

use super::responses::response_text;
use crate::domain::models::Mode;
use crate::domain::models::Reply;
use crate::domain::models::ResponseCategory;

struct IntentRule {
    keywords: &'static [&'static str],
    category: ResponseCategory,
}

impl IntentRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

struct IntentTable {
    rules: &'static [IntentRule],
    otherwise: ResponseCategory,
}

// Rule order is priority order: the first rule with any matching keyword wins.
static MEDICAL: IntentTable = IntentTable {
    rules: &[
        IntentRule {
            keywords: &["equipamiento", "médico"],
            category: ResponseCategory::MedicalEquipment,
        },
        IntentRule {
            keywords: &["urgente", "emergencia"],
            category: ResponseCategory::MedicalEmergency,
        },
    ],
    otherwise: ResponseCategory::MedicalGeneral,
};

static INCUCAI: IntentTable = IntentTable {
    rules: &[
        IntentRule {
            keywords: &["órgano", "trasplante"],
            category: ResponseCategory::IncucaiOrganTransport,
        },
        IntentRule {
            keywords: &["tiempo", "isquemia"],
            category: ResponseCategory::IncucaiIschemiaTimes,
        },
    ],
    otherwise: ResponseCategory::IncucaiGeneral,
};

static EXECUTIVE: IntentTable = IntentTable {
    rules: &[
        IntentRule {
            keywords: &["precio", "costo"],
            category: ResponseCategory::ExecutivePricing,
        },
        IntentRule {
            keywords: &["empty leg", "oferta"],
            category: ResponseCategory::ExecutiveEmptyLegs,
        },
        IntentRule {
            keywords: &["recomendación", "jet"],
            category: ResponseCategory::ExecutiveRecommendation,
        },
    ],
    otherwise: ResponseCategory::ExecutiveGeneral,
};

fn table_for(mode: Mode) -> &'static IntentTable {
    match mode {
        Mode::Medical => &MEDICAL,
        Mode::Incucai => &INCUCAI,
        Mode::Executive => &EXECUTIVE,
    }
}

/// Deterministic keyword matcher mapping a user message to a canned reply.
///
/// Matching is plain substring search over the lowercased message, so a
/// keyword anywhere in the text counts. The resolver is total: every input
/// produces a reply, falling back to the mode's general answer.
pub struct IntentResolver {}

impl IntentResolver {
    pub fn classify(text: &str, mode: Mode) -> ResponseCategory {
        let lowered = text.to_lowercase();
        let table = table_for(mode);

        table
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.category)
            .unwrap_or(table.otherwise)
    }

    pub fn resolve(text: &str, mode: Mode) -> Reply {
        let category = IntentResolver::classify(text, mode);
        log::debug!("Resolved {} message to {}", mode, category);

        Reply::new(category, response_text(category))
    }
}
