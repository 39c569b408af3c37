// src/lib.rs
//
// liftvis: a horizontal row of lifting-balls nodes. A tap runs one
// step of the current node's animation; the cursor ping-pongs along
// the row, one node per completed step.

pub mod animation;
pub mod config;
pub mod draw;
pub mod models;
pub mod views;
