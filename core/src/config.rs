//! Configuration record for the lyric entry tools.
//!
//! One flat structure holding the character class sets, the user conversion
//! dictionary, hotkey bindings and display preferences. Persisted as TOML;
//! a JSON import is kept for documents written by the older `config.json`
//! format. There is no versioning and no partial-load recovery: a record
//! missing a required field fails with an error naming that field.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration load/save error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),

    /// Parse failure; serde reports missing fields by name
    /// (e.g. "missing field `katakana`").
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encode config: {0}")]
    Format(#[from] toml::ser::Error),
}

/// Flat configuration record, loaded once at startup.
///
/// The six class-set strings drive segmentation and highlighting; see
/// `CharClasses::from_config`. `highlight` defaults to the long-vowel mark
/// plus `sokuon` plus `kigo` but can be overridden independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub window_size: (u32, u32),
    pub stay_on_top: bool,
    pub font_size: u32,

    pub text_color: String,
    pub color1: String,
    pub color2: String,

    pub send_mora_hotkey: String,
    pub send_line_hotkey: String,

    /// Ordered literal substitutions applied before the reading service.
    /// Plain string replacement, so mind the contents.
    pub conv_dict: Vec<(String, String)>,
    pub yoon: String,
    pub sokuon: String,
    pub kigo: String,
    pub alphabet: String,
    pub katakana: String,
    pub highlight: String,
}

impl Default for Config {
    fn default() -> Self {
        let sokuon = "っッ".to_string();
        let kigo = "「」『』（）！？!?♥♡、。,.・／/…’”'\"-".to_string();
        Self {
            window_size: (600, 800),
            stay_on_top: true,
            font_size: 11,

            text_color: "#DFE2E6".to_string(),
            color1: "#36414D".to_string(),
            color2: "#20272E".to_string(),

            send_mora_hotkey: "ctrl+alt+pageup".to_string(),
            send_line_hotkey: "ctrl+alt+pagedown".to_string(),

            conv_dict: vec![(
                "個別に変換したい文字列".to_string(),
                "こべつにへんかんしたいもじれつ".to_string(),
            )],
            yoon: "ゃゅょぁぃぅぇぉャュョァィゥェォ".to_string(),
            alphabet: "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZéàèùâêîôûçëïü"
                .to_string(),
            katakana: concat!(
                "アイウエオカキクケコサシスセソタチツテトナニヌネノ",
                "ハヒフヘホマミムメモヤユヨラリルレロワヰウヱヲン",
                "ヴガギグゲゴザジズゼゾダヂヅデドバビブベボヷヸヹヺ",
                "パピプペポ",
                "ァィゥェォヵㇰヶㇱㇲッㇳㇴㇵㇶㇷㇸㇹㇺャュョㇻㇼㇽㇾㇿヮ"
            )
            .to_string(),
            highlight: format!("ー{sokuon}{kigo}"),
            sokuon,
            kigo,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Import a record written by the older JSON format.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load from `path`, or write the defaults there first when absent.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_toml(path)
        } else {
            let cfg = Self::default();
            cfg.save_toml(path)?;
            tracing::info!(path = %path.display(), "wrote default config");
            Ok(cfg)
        }
    }
}
