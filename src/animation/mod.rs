// src/animation/mod.rs

pub mod driver;
pub mod scale;
pub mod state;

pub use driver::TickDriver;
pub use scale::{divide_scale, mirror_value, phase_index, update_value};
pub use state::{NodeState, StepPacing};
