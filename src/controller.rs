use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::debounce::Debouncer;
use crate::domain::{SubscriberEmail, ValidationError};
use crate::storage::SubscriberStore;
use crate::surface::FormSurface;

/// Where the form currently is in its submit cycle. `Succeeded` is terminal:
/// the form is not shown again for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Succeeded,
}

/// Timing knobs for the signup choreography.
#[derive(Debug, Clone)]
pub struct Timings {
    /// Simulated round-trip before the success panel appears.
    pub submit_latency: Duration,
    /// Pause between the success panel and the submit control reset.
    pub button_reset: Duration,
    /// How long an error stays on screen if nothing else clears it.
    pub error_dismiss: Duration,
    /// Quiet period before the live input re-check runs.
    pub debounce: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_latency: Duration::from_millis(1500),
            button_reset: Duration::from_millis(1000),
            error_dismiss: Duration::from_millis(5000),
            debounce: Duration::from_millis(500),
        }
    }
}

/// Keys the controller reacts to while the email field is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Enter,
    Escape,
}

/// Owns the email capture flow: validate, simulate the submission round-trip,
/// drive the surface feedback and persist accepted addresses.
pub struct SignupController {
    surface: Arc<dyn FormSurface>,
    store: SubscriberStore,
    timings: Timings,
    busy_label: String,
    state: FormState,
    error_dismiss: Option<JoinHandle<()>>,
    input_validation: Debouncer,
}

impl SignupController {
    pub fn new(
        surface: Arc<dyn FormSurface>,
        store: SubscriberStore,
        timings: Timings,
        busy_label: impl Into<String>,
    ) -> Self {
        let input_validation = Debouncer::new(timings.debounce);
        Self {
            surface,
            store,
            timings,
            busy_label: busy_label.into(),
            state: FormState::Idle,
            error_dismiss: None,
            input_validation,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validates the raw field content and, if it parses, runs the submission
    /// choreography to completion. A validation failure replaces any visible
    /// error and refocuses the input. Ignored unless the form is idle.
    #[tracing::instrument(name = "Submit signup form", skip(self))]
    pub async fn submit(&mut self, raw: &str) -> Result<(), ValidationError> {
        if self.state != FormState::Idle {
            tracing::debug!("Submit ignored in state {:?}", self.state);
            return Ok(());
        }
        let email = match SubscriberEmail::parse(raw.to_owned()) {
            Ok(email) => email,
            Err(e) => {
                tracing::info!("Rejected signup input: {}", e);
                self.show_error(&e);
                return Err(e);
            }
        };
        self.simulate_submission(email).await;
        Ok(())
    }

    /// Fixed-latency stand-in for a real request; a production client would
    /// drive the same surface transitions from the actual response.
    #[tracing::instrument(name = "Simulate submission", skip(self, email), fields(email = %email))]
    async fn simulate_submission(&mut self, email: SubscriberEmail) {
        self.state = FormState::Submitting;
        self.surface.set_submit_busy(&self.busy_label);

        sleep(self.timings.submit_latency).await;

        self.surface.hide_form();
        self.surface.show_success();
        self.state = FormState::Succeeded;

        // Best effort: storage trouble never disturbs the success flow.
        if let Err(e) = self.store.persist(email.as_ref()) {
            tracing::error!("Failed to store subscriber: {:?}", e);
        }

        sleep(self.timings.button_reset).await;
        self.surface.set_submit_idle();
    }

    /// Leaving the field with non-empty content that does not parse surfaces
    /// the malformed-address error.
    pub fn on_blur(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        if let Err(e) = SubscriberEmail::parse(raw.to_owned()) {
            self.show_error(&e);
        }
    }

    /// Entering the field clears any displayed error.
    pub fn on_focus(&mut self) {
        self.clear_error();
    }

    /// Debounced live re-check of the field content. Logs the outcome only;
    /// inline feedback stays with blur and submit.
    pub fn on_input(&mut self, raw: &str) {
        let candidate = raw.trim().to_owned();
        self.input_validation.call(move || {
            if candidate.is_empty() {
                return;
            }
            match SubscriberEmail::parse(candidate.clone()) {
                Ok(_) => tracing::debug!(input = %candidate, "Input is a well-formed address"),
                Err(_) => tracing::debug!(input = %candidate, "Input is not a well-formed address"),
            }
        });
    }

    /// Enter submits the current field content; Escape clears a visible
    /// error. The caller decides whether the field had focus.
    pub async fn on_key(&mut self, key: KeyEvent, raw: &str) -> Result<(), ValidationError> {
        match key {
            KeyEvent::Enter => self.submit(raw).await,
            KeyEvent::Escape => {
                self.clear_error();
                Ok(())
            }
        }
    }

    /// Replaces any visible error with this one, refocuses the input and
    /// schedules the auto-dismiss. The previous dismiss timer is cancelled so
    /// it cannot clip the new error short.
    fn show_error(&mut self, error: &ValidationError) {
        self.clear_error();
        self.surface.show_error(&error.to_string());
        self.surface.focus_input();

        let surface = Arc::clone(&self.surface);
        let dismiss_after = self.timings.error_dismiss;
        self.error_dismiss = Some(tokio::spawn(async move {
            sleep(dismiss_after).await;
            surface.clear_errors();
        }));
    }

    fn clear_error(&mut self) {
        if let Some(pending) = self.error_dismiss.take() {
            pending.abort();
        }
        self.surface.clear_errors();
    }
}

impl Drop for SignupController {
    fn drop(&mut self) {
        if let Some(pending) = self.error_dismiss.take() {
            pending.abort();
        }
    }
}
