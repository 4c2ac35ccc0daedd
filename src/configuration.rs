use std::time::Duration;

use config::Config;

use crate::controller::Timings;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub submit_latency_ms: u64,
    pub button_reset_ms: u64,
    pub error_dismiss_ms: u64,
    pub debounce_ms: u64,
    pub busy_label: String,
    pub idle_label: String,
}

impl ApplicationSettings {
    pub fn timings(&self) -> Timings {
        Timings {
            submit_latency: Duration::from_millis(self.submit_latency_ms),
            button_reset: Duration::from_millis(self.button_reset_ms),
            error_dismiss: Duration::from_millis(self.error_dismiss_ms),
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct StorageSettings {
    pub path: String,
    pub key: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");

    let settings = Config::builder()
        .add_source(config::File::from(configuration_directory.join("base")).required(true))
        .add_source(config::File::from(configuration_directory.join(environment.as_str())).required(true))
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// The possible runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
