use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::platform;

/// Where the saved settings live, next to the database.
pub fn settings_path() -> PathBuf {
    platform::data_dir().join("settings.json")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::Auto => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Auto,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cyan,
    Green,
    Magenta,
    Yellow,
}

impl Accent {
    pub fn next(self) -> Self {
        match self {
            Accent::Cyan => Accent::Green,
            Accent::Green => Accent::Magenta,
            Accent::Magenta => Accent::Yellow,
            Accent::Yellow => Accent::Cyan,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Accent::Cyan => "Cyan",
            Accent::Green => "Green",
            Accent::Magenta => "Magenta",
            Accent::Yellow => "Yellow",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Accent::Cyan => Color::Cyan,
            Accent::Green => Color::Green,
            Accent::Magenta => Color::Magenta,
            Accent::Yellow => Color::Yellow,
        }
    }
}

/// Saved user preferences. Unknown or missing fields fall back to the
/// defaults so an old settings file keeps loading after upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub theme: Theme,
    pub accent: Accent,
}

/// Concrete colors the screens draw with, derived from the preferences.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub emphasis: Color,
    pub dim: Color,
    pub text: Color,
}

impl UserData {
    pub fn palette(&self) -> Palette {
        let dim = match self.theme {
            Theme::Light => Color::Gray,
            _ => Color::DarkGray,
        };
        let text = match self.theme {
            Theme::Light => Color::Black,
            Theme::Dark => Color::White,
            Theme::Auto => Color::Reset,
        };
        Palette {
            accent: self.accent.color(),
            emphasis: Color::Yellow,
            dim,
            text,
        }
    }
}

/// A missing or unreadable settings file means defaults, never an error.
pub fn load(path: &Path) -> UserData {
    let Ok(raw) = fs::read_to_string(path) else {
        return UserData::default();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn save(path: &Path, data: &UserData) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
    fs::write(path, raw)
}
