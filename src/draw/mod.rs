// src/draw/mod.rs
// The node drawing module: screen placement and stroke styling for the
// pre-computed node draw commands.

pub mod node_draw;

pub use node_draw::{draw_node, node_commands, DrawCommand};

use nannou::prelude::*;
use std::f32::consts::PI;

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

// Screen placement of one node: rotate about the node origin, then
// translate. Rotation is in degrees; negative turns clockwise on
// screen in nannou's y-up space.
#[derive(Debug, Clone)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        let rotation = self.rotation * PI / 180.0;
        let cos_rot = rotation.cos();
        let sin_rot = rotation.sin();
        let rotated = pt2(
            point.x * cos_rot - point.y * sin_rot,
            point.x * sin_rot + point.y * cos_rot,
        );
        rotated + self.translation
    }
}
