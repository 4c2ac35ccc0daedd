/// Handles to the signup form UI, passed to the controller at construction.
/// Implementors render the transitions; the controller decides when they
/// happen.
pub trait FormSurface: Send + Sync {
    /// Replaces any displayed error with `message`.
    fn show_error(&self, message: &str);
    fn clear_errors(&self);
    fn focus_input(&self);
    /// Disables the submit control and swaps its label to `label`.
    fn set_submit_busy(&self, label: &str);
    /// Restores the submit control's original label and enabled state.
    fn set_submit_idle(&self);
    fn hide_form(&self);
    /// Reveals the success panel.
    fn show_success(&self);
}

/// Console rendering of the form transitions, used by the demo binary.
pub struct ConsoleSurface {
    idle_label: String,
}

impl ConsoleSurface {
    /// `idle_label` is the submit control's original label, restored after a
    /// submission completes.
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self { idle_label: idle_label.into() }
    }
}

impl FormSurface for ConsoleSurface {
    fn show_error(&self, message: &str) {
        println!("!! {}", message);
    }

    fn clear_errors(&self) {
        tracing::debug!("Error display cleared");
    }

    fn focus_input(&self) {
        tracing::debug!("Input focused");
    }

    fn set_submit_busy(&self, label: &str) {
        println!(".. {}", label);
    }

    fn set_submit_idle(&self) {
        println!(".. {}", self.idle_label);
    }

    fn hide_form(&self) {
        tracing::debug!("Form hidden");
    }

    fn show_success(&self) {
        println!("Thank you! We'll notify you when we launch.");
    }
}
