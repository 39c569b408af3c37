// src/config/config_types.rs
//
// Config types for the app. Every field has a default, so the app
// runs without a config.toml.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub nodes: usize, // row length
    pub balls: usize, // lifting segments per node
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { nodes: 5, balls: 3 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub sc_gap: f32,        // base per-tick progress increment
    pub sc_div: f64,        // phase boundary for the mirror selector
    pub frame_delay_ms: u64, // tick period
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            sc_gap: 0.05,
            sc_div: 0.51,
            frame_delay_ms: 20,
        }
    }
}

impl AnimationConfig {
    // Tick period in seconds, the unit the driver accumulates against.
    pub fn frame_duration(&self) -> f32 {
        self.frame_delay_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub fore_color: String,
    pub back_color: String,
    pub size_factor: f32,   // node span = slot gap / size_factor
    pub stroke_factor: f32, // stroke = min(viewport side) / stroke_factor
    pub r_factor: f32,      // ball radius = ball gap / r_factor
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fore_color: "#283593".to_string(),
            back_color: "#BDBDBD".to_string(),
            size_factor: 2.9,
            stroke_factor: 90.0,
            r_factor: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 540,
            height: 960,
            fullscreen: false,
        }
    }
}
