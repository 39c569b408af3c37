// src/views/mod.rs

pub mod lifting_balls;

pub use lifting_balls::LiftingBallsView;
