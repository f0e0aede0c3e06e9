#[cfg(test)]
#[path = "mode_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Executive,
    Medical,
    Incucai,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Mode> {
        let s = s.trim();
        Mode::iter().find(|e| e.to_string().eq_ignore_ascii_case(s))
    }

    /// Mode as supplied by the host. Anything unrecognized is served with the
    /// executive tables.
    pub fn from_host(s: &str) -> Mode {
        match Mode::parse(s) {
            Some(mode) => mode,
            None => {
                log::debug!("Unrecognized service mode '{}', using executive", s);
                Mode::Executive
            }
        }
    }

    pub fn service_name(&self) -> &'static str {
        match self {
            Mode::Executive => "Ejecutivo",
            Mode::Medical => "Médico",
            Mode::Incucai => "INCUCAI",
        }
    }

    pub fn assistant_subtitle(&self) -> &'static str {
        match self {
            Mode::Executive => "Consultor de Vuelos",
            Mode::Medical => "Especialista Médico",
            Mode::Incucai => "Experto INCUCAI",
        }
    }
}

/// Service context the host hands to every turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceContext {
    pub mode: Mode,
    pub emergency: bool,
}

impl ServiceContext {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            emergency: false,
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != Mode::Medical {
            self.emergency = false;
        }
        self.mode = mode;
    }

    pub fn activate_emergency(&mut self) {
        self.mode = Mode::Medical;
        self.emergency = true;
    }
}
