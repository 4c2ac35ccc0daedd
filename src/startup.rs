use std::sync::Arc;

use tokio::io::AsyncBufReadExt;

use crate::configuration::Settings;
use crate::controller::{FormState, KeyEvent, SignupController};
use crate::storage::{FileStore, SubscriberStore};
use crate::surface::FormSurface;

pub struct Application {
    controller: SignupController,
}

impl Application {
    pub fn build(configuration: Settings, surface: Arc<dyn FormSurface>) -> Application {
        let store = SubscriberStore::new(
            Arc::new(FileStore::new(configuration.storage.path.as_str())),
            configuration.storage.key.clone(),
        );
        let controller = SignupController::new(
            surface,
            store,
            configuration.application.timings(),
            configuration.application.busy_label.clone(),
        );
        Self { controller }
    }

    /// Drives the controller from stdin until the flow succeeds or input
    /// ends. A plain line is Enter on the focused field; `:blur <text>`,
    /// `:focus`, `:input <text>` and `:esc` map to the other form events.
    pub async fn run_until_stopped(mut self) -> std::io::Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while self.controller.state() != FormState::Succeeded {
            let Some(line) = lines.next_line().await? else {
                break;
            };
            self.dispatch(&line).await;
        }
        Ok(())
    }

    async fn dispatch(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix(":blur") {
            self.controller.on_blur(rest);
        } else if let Some(rest) = line.strip_prefix(":input") {
            self.controller.on_input(rest);
        } else if line == ":focus" {
            self.controller.on_focus();
        } else if line == ":esc" {
            let _ = self.controller.on_key(KeyEvent::Escape, "").await;
        } else {
            let _ = self.controller.on_key(KeyEvent::Enter, line).await;
        }
    }
}
