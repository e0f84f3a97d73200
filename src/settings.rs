use crate::confetti::DEFAULT_PARTICLES;
use crate::draw::{DEFAULT_ROLL_INTERVAL, DEFAULT_ROLL_TICKS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for the AI name generator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NameGenSettings {
    /// API key used directly when set. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable read for the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generative language API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Topic sent with the prompt, e.g. "nomes brasileiros comuns".
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Number of names requested per import.
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

fn default_topic() -> String {
    "nomes variados para sorteio".into()
}

fn default_count() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for NameGenSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            model: default_model(),
            endpoint: default_endpoint(),
            topic: default_topic(),
            count: default_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NameGenSettings {
    /// Resolve the API key from the settings file or the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write logs to this file instead of stdout.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    #[serde(default = "default_window_size")]
    pub window_size: Option<(i32, i32)>,
    /// Delay between preview flips while rolling.
    #[serde(default = "default_roll_interval_ms")]
    pub roll_interval_ms: u64,
    /// Number of preview flips before the winners are revealed.
    #[serde(default = "default_roll_ticks")]
    pub roll_ticks: u32,
    #[serde(default = "default_confetti_particles")]
    pub confetti_particles: usize,
    /// How long the confetti keeps falling. `None` keeps it running until the
    /// next draw or reset.
    #[serde(default = "default_confetti_seconds")]
    pub confetti_seconds: Option<f32>,
    /// Initial `(min, max)` of the numeric range.
    #[serde(default = "default_range")]
    pub default_range: (i64, i64),
    #[serde(default)]
    pub name_gen: NameGenSettings,
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_window_size() -> Option<(i32, i32)> {
    Some((960, 640))
}

fn default_roll_interval_ms() -> u64 {
    DEFAULT_ROLL_INTERVAL.as_millis() as u64
}

fn default_roll_ticks() -> u32 {
    DEFAULT_ROLL_TICKS
}

fn default_confetti_particles() -> usize {
    DEFAULT_PARTICLES
}

fn default_confetti_seconds() -> Option<f32> {
    Some(8.0)
}

fn default_range() -> (i64, i64) {
    (1, 100)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            window_size: default_window_size(),
            roll_interval_ms: default_roll_interval_ms(),
            roll_ticks: default_roll_ticks(),
            confetti_particles: default_confetti_particles(),
            confetti_seconds: default_confetti_seconds(),
            default_range: default_range(),
            name_gen: NameGenSettings::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn roll_interval(&self) -> Duration {
        Duration::from_millis(self.roll_interval_ms)
    }

    /// Confetti lifetime, ignoring non-positive or non-finite values.
    pub fn confetti_lifetime(&self) -> Option<Duration> {
        self.confetti_seconds
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(Duration::from_secs_f32)
    }
}
