use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::{KeyBindings, Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    /// Dataset file to load instead of the bundled one.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Multiplier on every delay and duration; 2.0 plays twice as fast.
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_speed() -> f64 {
    1.0
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            speed: default_speed(),
        }
    }
}

impl Config {
    /// Embedded defaults layered under the user's config files, if any.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading config from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        if !cfg.reveal.speed.is_finite() || cfg.reveal.speed <= 0.0 {
            log::warn!(
                "Ignoring reveal speed {}, using {}",
                cfg.reveal.speed,
                default_speed()
            );
            cfg.reveal.speed = default_speed();
        }
        Ok(cfg)
    }

    /// The bundled defaults alone.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    fn merge_defaults(&mut self, defaults: Config) {
        for (key, action) in defaults.keybindings.0 {
            self.keybindings.entry(key).or_insert(action);
        }
        for (name, style) in defaults.styles.0 {
            self.styles.entry(name).or_insert(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};

    use super::*;
    use crate::presentation::config::Action;

    #[test]
    fn test_embedded_config() -> Result<(), ConfigError> {
        let cfg = Config::embedded()?;
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(cfg.keybindings.action_for(&q), Some(Action::Quit));
        assert_eq!(
            cfg.styles.get_or("muted", Style::default()),
            Style::default().fg(Color::DarkGray)
        );
        assert_eq!(cfg.reveal, RevealConfig::default());
        assert_eq!(cfg.dataset, None);
        Ok(())
    }

    #[test]
    fn test_user_bindings_win_over_defaults() -> Result<(), ConfigError> {
        let mut cfg: Config = json5::from_str(r#"{ keybindings: { "<q>": "GoHome" } }"#)
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        cfg.merge_defaults(Config::embedded()?);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(cfg.keybindings.action_for(&q), Some(Action::GoHome));
        assert_eq!(cfg.keybindings.action_for(&esc), Some(Action::CloseMenu));
        Ok(())
    }

    #[test]
    fn test_reveal_section_defaults() -> Result<(), ConfigError> {
        let cfg: Config = json5::from_str(r#"{ reveal: { speed: 2.5 } }"#)
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        assert!(cfg.reveal.enabled);
        assert_eq!(cfg.reveal.speed, 2.5);
        Ok(())
    }
}
