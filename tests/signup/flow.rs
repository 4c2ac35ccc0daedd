use std::time::Duration;

use claim::{assert_err, assert_ok};

use hotel_signup::controller::{FormState, KeyEvent};
use hotel_signup::domain::ValidationError;

use crate::helpers::{SurfaceEvent, spawn_form};

#[tokio::test(start_paused = true)]
async fn empty_input_is_rejected_with_the_empty_message() {
    let mut form = spawn_form();

    let outcome = form.controller.submit("").await;

    assert_eq!(outcome, Err(ValidationError::Empty));
    assert_eq!(
        form.surface.visible_error(),
        Some("Please enter your email address".to_string())
    );
    assert!(form.surface.events().contains(&SurfaceEvent::InputFocused));
    assert_eq!(form.controller.state(), FormState::Idle);
    assert_eq!(form.store.load(), Vec::<String>::new());
}

#[tokio::test(start_paused = true)]
async fn whitespace_only_input_is_rejected_as_empty() {
    let mut form = spawn_form();

    let outcome = form.controller.submit("   ").await;

    assert_eq!(outcome, Err(ValidationError::Empty));
    assert_eq!(form.store.load(), Vec::<String>::new());
}

#[tokio::test(start_paused = true)]
async fn malformed_inputs_are_rejected_with_the_invalid_message() {
    let test_cases = vec![
        ("foo", "no @ at all"),
        ("foo@bar", "domain without a dot"),
        ("@bar.com", "missing local part"),
        ("a b@c.com", "embedded whitespace"),
    ];

    for (input, description) in test_cases {
        let mut form = spawn_form();

        let outcome = form.controller.submit(input).await;

        assert_eq!(outcome, Err(ValidationError::Malformed), "{}", description);
        assert_eq!(
            form.surface.visible_error(),
            Some("Please enter a valid email address".to_string()),
            "{}",
            description
        );
        assert_eq!(form.store.load(), Vec::<String>::new(), "{}", description);
    }
}

#[tokio::test(start_paused = true)]
async fn valid_submission_runs_the_full_choreography() {
    let mut form = spawn_form();

    let outcome = form.controller.submit("  a@b.co  ").await;

    assert_ok!(outcome);
    assert_eq!(form.controller.state(), FormState::Succeeded);
    assert_eq!(
        form.surface.events(),
        vec![
            SurfaceEvent::SubmitBusy("Submitting...".to_string()),
            SurfaceEvent::FormHidden,
            SurfaceEvent::SuccessShown,
            SurfaceEvent::SubmitIdle,
        ]
    );
    assert_eq!(form.store.load(), vec!["a@b.co".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn success_panel_precedes_the_button_reset() {
    let mut form = spawn_form();

    assert_ok!(form.controller.submit("user@example.com").await);

    let events = form.surface.events();
    let success_at = events
        .iter()
        .position(|e| *e == SurfaceEvent::SuccessShown)
        .expect("success panel never shown");
    let reset_at = events
        .iter()
        .position(|e| *e == SurfaceEvent::SubmitIdle)
        .expect("submit control never reset");
    assert!(success_at < reset_at);
}

#[tokio::test(start_paused = true)]
async fn success_appears_after_the_simulated_latency_and_the_reset_one_second_later() {
    let form = spawn_form();
    let surface = form.surface.clone();
    let mut controller = form.controller;

    let submission = tokio::spawn(async move { controller.submit("user@example.com").await });

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert!(!surface.events().contains(&SurfaceEvent::SuccessShown));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(surface.events().contains(&SurfaceEvent::SuccessShown));
    assert!(!surface.events().contains(&SurfaceEvent::SubmitIdle));

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(surface.events().contains(&SurfaceEvent::SubmitIdle));

    assert_ok!(submission.await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn submit_after_success_is_ignored() {
    let mut form = spawn_form();

    assert_ok!(form.controller.submit("a@b.co").await);
    let events_after_first = form.surface.events();

    assert_ok!(form.controller.submit("a@b.co").await);

    assert_eq!(form.surface.events(), events_after_first);
    assert_eq!(form.store.load(), vec!["a@b.co".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn error_auto_dismisses_after_five_seconds() {
    let mut form = spawn_form();

    assert_err!(form.controller.submit("foo").await);
    assert!(form.surface.visible_error().is_some());

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert!(form.surface.visible_error().is_some());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(form.surface.visible_error(), None);
}

#[tokio::test(start_paused = true)]
async fn focus_clears_a_visible_error_immediately() {
    let mut form = spawn_form();

    assert_err!(form.controller.submit("foo").await);
    assert!(form.surface.visible_error().is_some());

    form.controller.on_focus();

    assert_eq!(form.surface.visible_error(), None);
}

#[tokio::test(start_paused = true)]
async fn a_new_error_restarts_the_dismiss_clock() {
    let mut form = spawn_form();

    assert_err!(form.controller.submit("foo").await);
    tokio::time::sleep(Duration::from_millis(3000)).await;

    // The second error replaces the first; the first dismiss timer must not
    // clip it at the five second mark of the original error.
    assert_err!(form.controller.submit("").await);
    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert_eq!(
        form.surface.visible_error(),
        Some("Please enter your email address".to_string())
    );

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(form.surface.visible_error(), None);
}

#[tokio::test(start_paused = true)]
async fn enter_submits_the_field_content() {
    let mut form = spawn_form();

    assert_ok!(form.controller.on_key(KeyEvent::Enter, "user@example.com").await);

    assert_eq!(form.controller.state(), FormState::Succeeded);
    assert_eq!(form.store.load(), vec!["user@example.com".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn escape_clears_a_visible_error() {
    let mut form = spawn_form();

    assert_err!(form.controller.submit("foo").await);
    assert!(form.surface.visible_error().is_some());

    assert_ok!(form.controller.on_key(KeyEvent::Escape, "").await);

    assert_eq!(form.surface.visible_error(), None);
}

#[tokio::test(start_paused = true)]
async fn blur_with_invalid_content_shows_the_invalid_message() {
    let mut form = spawn_form();

    form.controller.on_blur("foo@bar");

    assert_eq!(
        form.surface.visible_error(),
        Some("Please enter a valid email address".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn blur_with_empty_or_valid_content_stays_quiet() {
    let mut form = spawn_form();

    form.controller.on_blur("");
    form.controller.on_blur("   ");
    form.controller.on_blur("user@example.com");

    assert_eq!(form.surface.visible_error(), None);
    assert!(
        !form
            .surface
            .events()
            .iter()
            .any(|e| matches!(e, SurfaceEvent::ErrorShown(_)))
    );
}

#[tokio::test(start_paused = true)]
async fn debounced_input_validation_never_touches_the_surface() {
    let mut form = spawn_form();

    form.controller.on_input("fo");
    form.controller.on_input("foo");
    form.controller.on_input("foo@bar.com");

    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert_eq!(form.surface.events(), Vec::new());
}
