use anyhow::anyhow;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use super::AppState;
use super::AppStateProps;
use crate::domain::models::CheckState;
use crate::domain::models::Event;

fn create_app_state() -> AppState {
    return AppState::new(AppStateProps {
        target: "https://charm.sh/".to_string(),
    });
}

#[test]
fn it_renders_the_pending_check() {
    let app_state = create_app_state();

    assert_eq!(app_state.view(), "Checking https://charm.sh/ ... ");
    assert!(matches!(app_state.check, CheckState::Idle));
}

#[test]
fn it_quits_with_an_ok_status() {
    let mut app_state = create_app_state();

    assert!(app_state.handle_event(Event::CheckStatus(200)));
    assert_eq!(app_state.status(), Some(200));
    assert!(app_state.error().is_none());
    insta::assert_snapshot!(app_state.view(), @"Checking https://charm.sh/ ... 200 OK!");
}

#[test]
fn it_quits_with_a_not_found_status() {
    let mut app_state = create_app_state();

    assert!(app_state.handle_event(Event::CheckStatus(404)));
    assert!(app_state.view().ends_with("404 Not Found!"));
    assert!(!app_state.view().contains("trouble"));
}

#[test]
fn it_renders_every_status_with_its_reason() {
    for code in [201, 204, 302, 400, 418, 500, 503] {
        let mut app_state = create_app_state();
        app_state.handle_event(Event::CheckStatus(code));

        let reason = reqwest::StatusCode::from_u16(code)
            .unwrap()
            .canonical_reason()
            .unwrap();
        assert!(app_state.view().contains(&format!("{code} {reason}")));
    }
}

#[test]
fn it_renders_unknown_statuses_without_a_reason() {
    let mut app_state = create_app_state();
    app_state.handle_event(Event::CheckStatus(599));

    assert!(app_state.view().ends_with("599 !"));
}

#[test]
fn it_quits_with_a_timeout_error() {
    let mut app_state = create_app_state();
    let err = anyhow!("operation timed out")
        .context("error sending request for url (https://charm.sh/)");

    assert!(app_state.handle_event(Event::CheckError(err)));
    assert_eq!(app_state.status(), None);

    let view = app_state.view();
    assert!(view.starts_with("We had some trouble: "));
    assert!(view.contains("operation timed out"));
    assert!(!view.contains("Checking"));
    insta::assert_snapshot!(view, @"We had some trouble: error sending request for url (https://charm.sh/): operation timed out");
}

#[test]
fn it_quits_without_a_result_on_ctrl_c() {
    let mut app_state = create_app_state();

    assert!(app_state.handle_event(Event::KeyboardCTRLC));
    assert!(matches!(app_state.check, CheckState::Idle));
    assert_eq!(app_state.status(), None);
    assert!(app_state.error().is_none());
}

#[test]
fn it_ignores_other_events() {
    let mut app_state = create_app_state();

    let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert!(!app_state.handle_event(Event::KeyboardInput(key)));
    assert!(!app_state.handle_event(Event::UITick));
    assert!(!app_state.handle_event(Event::UIResize));
    assert!(matches!(app_state.check, CheckState::Idle));
    assert!(!app_state.should_quit);
}

#[test]
fn it_freezes_after_a_status() {
    let mut app_state = create_app_state();
    app_state.handle_event(Event::CheckStatus(200));

    assert!(app_state.handle_event(Event::CheckStatus(500)));
    assert!(app_state.handle_event(Event::CheckError(anyhow!("late failure"))));
    assert_eq!(app_state.status(), Some(200));
    assert!(app_state.error().is_none());
}

#[test]
fn it_freezes_after_an_error() {
    let mut app_state = create_app_state();
    app_state.handle_event(Event::CheckError(anyhow!("dns failure")));

    assert!(app_state.handle_event(Event::CheckStatus(200)));
    assert_eq!(app_state.status(), None);
    assert_eq!(app_state.error().unwrap().to_string(), "dns failure");
}

#[test]
fn it_freezes_after_ctrl_c() {
    let mut app_state = create_app_state();
    app_state.handle_event(Event::KeyboardCTRLC);

    assert!(app_state.handle_event(Event::CheckStatus(200)));
    assert!(matches!(app_state.check, CheckState::Idle));
}
