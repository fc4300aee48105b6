//! Theme palette and preference persistence
//!
//! The active mode comes from config, overridden by a saved preference
//! file when one exists (the preference survives restarts; toggling at
//! runtime writes it back).

use std::path::PathBuf;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const CONFIG_DIR: &str = "formfill";
const PREFERENCE_FILE: &str = "theme";

/// Light or dark palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Resolved style palette consumed by all render code
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Resolve the startup theme: saved preference wins over config
    pub fn resolve(config_mode: ThemeMode) -> Self {
        Self::new(load_preference().unwrap_or(config_mode))
    }

    /// Flip light/dark and persist the choice
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        save_preference(self.mode);
    }

    pub fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Indexed(62),
            ThemeMode::Dark => Color::Indexed(111),
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent())
    }

    pub fn label(&self) -> Style {
        match self.mode {
            ThemeMode::Light => Style::default().fg(Color::Black),
            ThemeMode::Dark => Style::default().fg(Color::Gray),
        }
    }

    pub fn value(&self) -> Style {
        Style::default().fg(self.accent())
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    /// Style for fields written by a recent fill or suggestion
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

fn preference_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(PREFERENCE_FILE))
}

fn load_preference() -> Option<ThemeMode> {
    let path = preference_path()?;
    let contents = std::fs::read_to_string(path).ok()?;
    ThemeMode::from_str(&contents)
}

fn save_preference(mode: ThemeMode) {
    let Some(path) = preference_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && std::fs::create_dir_all(parent).is_err()
    {
        return;
    }
    if let Err(e) = std::fs::write(&path, mode.as_str()) {
        log::debug!("Failed to save theme preference: {}", e);
    }
}
