use super::*;

#[test]
fn it_starts_with_a_single_assistant_greeting() {
    let session = Session::new("¡Hola!");

    assert_eq!(session.messages().len(), 1);
    let seed = &session.messages()[0];
    assert_eq!(seed.id, 1);
    assert_eq!(seed.role, Role::Assistant);
    assert_eq!(seed.content, "¡Hola!");
    assert!(!session.typing_indicator());
    assert_eq!(session.visibility(), Visibility::Closed);
    assert!(!session.id.is_empty());
}

#[test]
fn it_assigns_sequential_ids_and_ordered_timestamps() {
    let mut session = Session::new("hola");
    session.append(Role::User, "uno");
    session.append(Role::Assistant, "dos");
    session.append(Role::User, "tres");

    let ids = session.messages().iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    for pair in session.messages().windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn it_keeps_typing_up_while_any_turn_is_in_flight() {
    let mut session = Session::new("hola");

    session.begin_turn();
    session.begin_turn();
    assert!(session.typing_indicator());
    assert_eq!(session.turns_in_flight(), 2);

    session.finish_turn();
    assert!(session.typing_indicator());

    session.finish_turn();
    assert!(!session.typing_indicator());

    session.finish_turn();
    assert_eq!(session.turns_in_flight(), 0);
    assert!(!session.typing_indicator());
}

#[test]
fn it_toggles_visibility_without_touching_the_log() {
    let mut session = Session::new("hola");
    session.append(Role::User, "precio");

    assert_eq!(session.toggle(), Visibility::Open);
    assert!(session.is_visible());
    assert_eq!(session.toggle(), Visibility::Closed);

    session.open();
    session.close();
    assert_eq!(session.messages().len(), 2);
}
