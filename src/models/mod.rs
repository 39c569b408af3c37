pub mod chain;

pub use chain::{BallChain, ChainNode, StepEvent};
