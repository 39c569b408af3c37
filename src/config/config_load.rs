// src/config/config_load.rs
//
// config.toml discovery and parsing. The file is looked up next to the
// executable first (build.rs puts a copy there), then in the working
// directory; with no file present the built-in defaults apply.

use log::info;
use nannou::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::config_types::{AnimationConfig, ChainConfig, StyleConfig, WindowConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid color {0:?}, expected \"#RRGGBB\"")]
    Color(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chain: ChainConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
    pub window: WindowConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::candidate_paths() {
            if path.exists() {
                let config = Self::load_from(&path)?;
                config.validate()?;
                info!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        info!("no config.toml found, using built-in defaults");
        Ok(Self::default())
    }

    // Exe dir first, working dir second
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            paths.push(exe_dir.join("config.toml"));
        }
        paths.push(PathBuf::from("config.toml"));
        paths
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain.nodes < 1 {
            return Err(ConfigError::Invalid("chain.nodes must be at least 1".into()));
        }
        if self.chain.balls < 1 {
            return Err(ConfigError::Invalid("chain.balls must be at least 1".into()));
        }
        if self.animation.sc_gap <= 0.0 {
            return Err(ConfigError::Invalid(
                "animation.sc_gap must be positive".into(),
            ));
        }
        if self.animation.sc_div <= 0.0 {
            return Err(ConfigError::Invalid(
                "animation.sc_div must be positive".into(),
            ));
        }
        if self.animation.frame_delay_ms < 1 {
            return Err(ConfigError::Invalid(
                "animation.frame_delay_ms must be at least 1".into(),
            ));
        }
        self.style.fore_rgb()?;
        self.style.back_rgb()?;
        Ok(())
    }
}

impl StyleConfig {
    pub fn fore_rgb(&self) -> Result<Rgb<f32>, ConfigError> {
        parse_hex_color(&self.fore_color)
    }

    pub fn back_rgb(&self) -> Result<Rgb<f32>, ConfigError> {
        parse_hex_color(&self.back_color)
    }
}

/// Parses "#RRGGBB" into srgb components.
pub fn parse_hex_color(value: &str) -> Result<Rgb<f32>, ConfigError> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::Color(value.to_string()));
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ConfigError::Color(value.to_string()))?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ConfigError::Color(value.to_string()))?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ConfigError::Color(value.to_string()))?;
    Ok(rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}
