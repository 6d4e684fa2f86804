use super::*;

#[test]
fn new_state_holds_only_seed_greeting() {
    let state = ConversationState::new(Locale::En);
    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.transcript()[0].role(), Role::Bot);
    assert_eq!(state.transcript()[0].text(), SEED_GREETING);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.is_open());
    assert!(state.input().is_empty());
}

#[test]
fn seed_greeting_ignores_locale() {
    let state = ConversationState::new(Locale::Am);
    assert_eq!(state.transcript()[0].text(), SEED_GREETING);
}

#[test]
fn begin_submit_appends_trimmed_user_turn() {
    let mut state = ConversationState::new(Locale::En);
    state.set_input("  Hello  ");

    let sent = state.begin_submit("  Hello  ");

    assert_eq!(sent.as_deref(), Some("Hello"));
    assert_eq!(state.transcript().len(), 2);
    assert_eq!(state.transcript()[1].role(), Role::User);
    assert_eq!(state.transcript()[1].text(), "Hello");
    assert!(state.input().is_empty());
    assert_eq!(state.phase(), Phase::Awaiting);
}

#[test]
fn begin_submit_blank_is_dropped() {
    let mut state = ConversationState::new(Locale::En);
    state.set_input("   ");

    for blank in ["", "   ", "\n\t"] {
        assert!(state.begin_submit(blank).is_none());
    }

    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.input(), "   ");
}

#[test]
fn begin_submit_while_awaiting_is_dropped() {
    let mut state = ConversationState::new(Locale::En);
    state.begin_submit("Hello").unwrap();
    state.set_input("Are you there?");

    assert!(state.begin_submit("Are you there?").is_none());

    assert_eq!(state.transcript().len(), 2);
    assert_eq!(state.transcript()[1].text(), "Hello");
    assert_eq!(state.input(), "Are you there?");
}

#[test]
fn settle_appends_bot_turn_and_returns_to_idle() {
    let mut state = ConversationState::new(Locale::En);
    state.begin_submit("Hi").unwrap();

    assert!(state.settle("Hello visitor".into()));

    assert_eq!(state.phase(), Phase::Idle);
    let last = state.last_turn().unwrap();
    assert_eq!(last.role(), Role::Bot);
    assert_eq!(last.text(), "Hello visitor");
}

#[test]
fn settle_without_pending_is_ignored() {
    let mut state = ConversationState::new(Locale::En);
    assert!(!state.settle("stray".into()));
    assert_eq!(state.transcript().len(), 1);
}

#[test]
fn transcript_is_append_only_across_exchanges() {
    let mut state = ConversationState::new(Locale::En);
    let mut seen: Vec<Turn> = state.transcript().to_vec();

    for (question, answer) in [("a", "1"), ("b", "2"), ("c", "3")] {
        state.begin_submit(question).unwrap();
        state.settle(answer.into());

        let now = state.transcript();
        assert_eq!(now.len(), seen.len() + 2);
        assert_eq!(&now[..seen.len()], seen.as_slice());
        seen = now.to_vec();
    }
}

#[test]
fn turn_ids_are_unique() {
    let mut state = ConversationState::new(Locale::En);
    state.begin_submit("a").unwrap();
    state.settle("b".into());
    let ids: std::collections::HashSet<_> = state.transcript().iter().map(Turn::id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn visibility_and_locale_do_not_touch_transcript() {
    let mut state = ConversationState::new(Locale::En);
    state.begin_submit("Hello").unwrap();

    state.set_open(true);
    state.set_open(false);
    state.set_locale(Locale::Am);

    assert_eq!(state.transcript().len(), 2);
    assert_eq!(state.phase(), Phase::Awaiting);
    assert_eq!(state.locale(), Locale::Am);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), "\"bot\"");
}
