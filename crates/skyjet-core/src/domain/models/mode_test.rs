use std::str::FromStr;

use super::*;

#[test]
fn it_parses_known_modes_case_insensitively() {
    assert_eq!(Mode::parse("executive"), Some(Mode::Executive));
    assert_eq!(Mode::parse("Medical"), Some(Mode::Medical));
    assert_eq!(Mode::parse(" INCUCAI "), Some(Mode::Incucai));
    assert_eq!(Mode::from_str("incucai").unwrap(), Mode::Incucai);
}

#[test]
fn it_falls_back_to_executive_for_unknown_modes() {
    assert_eq!(Mode::parse("cargo"), None);
    assert_eq!(Mode::from_host("cargo"), Mode::Executive);
    assert_eq!(Mode::from_host(""), Mode::Executive);
}

#[test]
fn it_displays_lowercase_names() {
    assert_eq!(Mode::Medical.to_string(), "medical");
    assert_eq!(Mode::Incucai.to_string(), "incucai");
}

#[test]
fn it_exposes_presentation_text() {
    assert_eq!(Mode::Medical.assistant_subtitle(), "Especialista Médico");
    assert_eq!(Mode::Incucai.assistant_subtitle(), "Experto INCUCAI");
    assert_eq!(Mode::Executive.assistant_subtitle(), "Consultor de Vuelos");
    assert_eq!(Mode::Executive.service_name(), "Ejecutivo");
}

#[test]
fn it_switches_to_medical_on_emergency() {
    let mut ctx = ServiceContext::new(Mode::Executive);
    ctx.activate_emergency();
    assert_eq!(ctx.mode, Mode::Medical);
    assert!(ctx.emergency);

    ctx.set_mode(Mode::Medical);
    assert!(ctx.emergency);

    ctx.set_mode(Mode::Incucai);
    assert_eq!(ctx.mode, Mode::Incucai);
    assert!(!ctx.emergency);
}
