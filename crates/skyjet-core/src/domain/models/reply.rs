use serde::Serialize;
use strum_macros::Display;

/// Which canned answer a turn resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResponseCategory {
    MedicalEquipment,
    MedicalEmergency,
    MedicalGeneral,
    IncucaiOrganTransport,
    IncucaiIschemiaTimes,
    IncucaiGeneral,
    ExecutivePricing,
    ExecutiveEmptyLegs,
    ExecutiveRecommendation,
    ExecutiveGeneral,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub category: ResponseCategory,
    pub text: String,
}

impl Reply {
    pub fn new(category: ResponseCategory, text: &str) -> Self {
        Self {
            category,
            text: text.to_string(),
        }
    }
}
