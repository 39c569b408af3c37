// src/draw/node_draw.rs
//
// One chain node: `balls` line-and-circle segments lifted in sequence
// by the first half of the node's progress, the whole group turned a
// quarter turn by the second half. Geometry is built in node-local
// space and carried to screen space with the node transform, so it can
// be checked without a window.

use nannou::prelude::*;

use crate::animation::divide_scale;
use crate::config::{ChainConfig, StyleConfig};
use crate::draw::{DrawStyle, Transform2D};

// A single pre-computed drawing operation for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { start: Point2, end: Point2 },
    Circle { center: Point2, radius: f32 },
}

impl DrawCommand {
    fn apply_transform(&mut self, transform: &Transform2D) {
        match self {
            DrawCommand::Line { start, end } => {
                *start = transform.apply_to_point(*start);
                *end = transform.apply_to_point(*end);
            }
            DrawCommand::Circle { center, .. } => {
                *center = transform.apply_to_point(*center);
            }
        }
    }

    fn draw(&self, draw: &Draw, style: &DrawStyle) {
        match self {
            DrawCommand::Line { start, end } => {
                draw.line()
                    .start(*start)
                    .end(*end)
                    .stroke_weight(style.stroke_weight)
                    .color(style.color)
                    .caps_round();
            }
            DrawCommand::Circle { center, radius } => {
                draw.ellipse()
                    .x_y(center.x, center.y)
                    .radius(*radius)
                    .stroke(style.color)
                    .stroke_weight(style.stroke_weight)
                    .color(style.color);
            }
        }
    }
}

/// Screen-space draw commands for node `i` at `scale`, in a viewport
/// `w` wide with nannou's centered, y-up coordinates. Balls lift
/// toward the top of the screen and the node turns clockwise, so the
/// lift is positive and the rotation angle negative.
pub fn node_commands(
    w: f32,
    i: usize,
    scale: f32,
    chain: &ChainConfig,
    style: &StyleConfig,
) -> Vec<DrawCommand> {
    let gap = w / (chain.nodes + 1) as f32;
    let size = gap / style.size_factor;
    let x_gap = (2.0 * size) / chain.balls as f32;
    let r = x_gap / style.r_factor;

    let sc1 = divide_scale(scale, 0, 2);
    let sc2 = divide_scale(scale, 1, 2);

    let transform = Transform2D {
        translation: Vec2::new(gap * (i + 1) as f32 - w / 2.0, 0.0),
        rotation: -90.0 * sc2,
    };

    let mut commands = Vec::with_capacity(chain.balls * 3);
    for j in 0..chain.balls {
        let scj = divide_scale(sc1, j, chain.balls);
        let scj1 = divide_scale(scj, 0, 2); // vertical travel
        let scj2 = divide_scale(scj, 1, 2); // radius growth

        let base_x = -size + x_gap * j as f32;
        let mid_x = base_x + x_gap / 2.0;
        let lift = size * scj1;

        commands.push(DrawCommand::Line {
            start: pt2(base_x, lift),
            end: pt2(base_x + x_gap, lift),
        });
        commands.push(DrawCommand::Line {
            start: pt2(mid_x, 0.0),
            end: pt2(mid_x, lift),
        });
        commands.push(DrawCommand::Circle {
            center: pt2(mid_x, lift + r),
            radius: r * scj2,
        });
    }

    for command in &mut commands {
        command.apply_transform(&transform);
    }
    commands
}

/// Emits one node at its current progress to the draw context.
pub fn draw_node(
    draw: &Draw,
    w: f32,
    i: usize,
    scale: f32,
    chain: &ChainConfig,
    style: &StyleConfig,
    draw_style: &DrawStyle,
) {
    for command in node_commands(w, i, scale, chain, style) {
        command.draw(draw, draw_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChainConfig, StyleConfig};

    const W: f32 = 800.0;

    fn configs() -> (ChainConfig, StyleConfig) {
        (ChainConfig::default(), StyleConfig::default())
    }

    fn metrics(chain: &ChainConfig, style: &StyleConfig) -> (f32, f32, f32, f32) {
        let gap = W / (chain.nodes + 1) as f32;
        let size = gap / style.size_factor;
        let x_gap = (2.0 * size) / chain.balls as f32;
        let r = x_gap / style.r_factor;
        (gap, size, x_gap, r)
    }

    #[test]
    fn test_command_count_and_rest_layout() {
        let (chain, style) = configs();
        let (gap, size, x_gap, r) = metrics(&chain, &style);

        let commands = node_commands(W, 0, 0.0, &chain, &style);
        assert_eq!(commands.len(), chain.balls * 3);

        let origin_x = gap - W / 2.0;
        for j in 0..chain.balls {
            let base_x = origin_x - size + x_gap * j as f32;
            let mid_x = base_x + x_gap / 2.0;

            // connector resting on the baseline
            match &commands[j * 3] {
                DrawCommand::Line { start, end } => {
                    assert!((start.x - base_x).abs() < 1e-3);
                    assert!(start.y.abs() < 1e-3);
                    assert!((end.x - (base_x + x_gap)).abs() < 1e-3);
                    assert!(end.y.abs() < 1e-3);
                }
                other => panic!("expected connector line, got {:?}", other),
            }

            // riser collapsed to a point
            match &commands[j * 3 + 1] {
                DrawCommand::Line { start, end } => {
                    assert!((start.x - end.x).abs() < 1e-3);
                    assert!((start.y - end.y).abs() < 1e-3);
                }
                other => panic!("expected riser line, got {:?}", other),
            }

            // ball not grown yet, parked a radius above the connector
            match &commands[j * 3 + 2] {
                DrawCommand::Circle { center, radius } => {
                    assert!(radius.abs() < 1e-6);
                    assert!((center.x - mid_x).abs() < 1e-3);
                    assert!((center.y - r).abs() < 1e-3);
                }
                other => panic!("expected ball circle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_balls_lift_in_sequence() {
        let (chain, style) = configs();
        let (_, size, _, r) = metrics(&chain, &style);

        // scale 0.25 -> first half 0.5: ball 0 done, ball 1 lifted but
        // not grown, ball 2 still on the baseline
        let commands = node_commands(W, 0, 0.25, &chain, &style);

        let mut lifts = Vec::new();
        let mut radii = Vec::new();
        for j in 0..chain.balls {
            match &commands[j * 3 + 1] {
                DrawCommand::Line { start, end } => lifts.push(end.y - start.y),
                other => panic!("expected riser line, got {:?}", other),
            }
            match &commands[j * 3 + 2] {
                DrawCommand::Circle { radius, .. } => radii.push(*radius),
                other => panic!("expected ball circle, got {:?}", other),
            }
        }

        assert!((radii[0] - r).abs() < 1e-3, "ball 0 fully grown");
        assert!(radii[1].abs() < 1e-3, "ball 1 not grown yet");
        assert!(radii[2].abs() < 1e-3, "ball 2 untouched");

        // risers: ball 0 and 1 at full height, ball 2 flat
        assert!((lifts[0] - size).abs() < 1e-3);
        assert!((lifts[1] - size).abs() < 1e-3);
        assert!(lifts[2].abs() < 1e-3);
    }

    #[test]
    fn test_half_scale_is_fully_lifted_and_unrotated() {
        let (chain, style) = configs();
        let (gap, size, x_gap, r) = metrics(&chain, &style);

        let commands = node_commands(W, 0, 0.5, &chain, &style);
        let origin_x = gap - W / 2.0;

        for j in 0..chain.balls {
            let base_x = origin_x - size + x_gap * j as f32;
            match &commands[j * 3] {
                DrawCommand::Line { start, end } => {
                    assert!((start.x - base_x).abs() < 1e-3);
                    assert!((start.y - size).abs() < 1e-3);
                    assert!((end.y - size).abs() < 1e-3);
                }
                other => panic!("expected connector line, got {:?}", other),
            }
            match &commands[j * 3 + 2] {
                DrawCommand::Circle { radius, .. } => {
                    assert!((radius - r).abs() < 1e-3);
                }
                other => panic!("expected ball circle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_full_scale_turns_the_node_clockwise() {
        let (chain, style) = configs();
        let (gap, size, x_gap, _) = metrics(&chain, &style);

        let commands = node_commands(W, 0, 1.0, &chain, &style);
        let origin_x = gap - W / 2.0;

        // ball 0 connector start was (-size, size) locally; a clockwise
        // quarter turn sends it to (size, size) relative to the origin
        match &commands[0] {
            DrawCommand::Line { start, .. } => {
                assert!((start.x - (origin_x + size)).abs() < 1e-3);
                assert!((start.y - size).abs() < 1e-3);
            }
            other => panic!("expected connector line, got {:?}", other),
        }

        // ball 1 riser base was (0, 0) locally: the pivot stays put
        let mid_1 = -size + x_gap + x_gap / 2.0;
        assert!((mid_1 - 0.0).abs() < 1e-3, "middle riser sits on the pivot");
        match &commands[4] {
            DrawCommand::Line { start, .. } => {
                assert!((start.x - origin_x).abs() < 1e-3);
                assert!(start.y.abs() < 1e-3);
            }
            other => panic!("expected riser line, got {:?}", other),
        }
    }

    #[test]
    fn test_nodes_spread_across_the_viewport() {
        let (chain, style) = configs();
        let (gap, _, _, _) = metrics(&chain, &style);

        for i in 0..chain.nodes {
            let commands = node_commands(W, i, 0.0, &chain, &style);
            let origin_x = gap * (i + 1) as f32 - W / 2.0;
            match &commands[2] {
                DrawCommand::Circle { center, .. } => {
                    // the first ball sits left of the node origin and
                    // within half a slot of it
                    assert!(center.x < origin_x);
                    assert!(center.x > origin_x - gap / 2.0);
                }
                other => panic!("expected ball circle, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_degenerate_viewport_yields_degenerate_geometry() {
        let (chain, style) = configs();
        let commands = node_commands(0.0, 0, 0.5, &chain, &style);
        assert_eq!(commands.len(), chain.balls * 3);
        for command in &commands {
            if let DrawCommand::Circle { radius, .. } = command {
                assert!(radius.abs() < 1e-6);
            }
        }
    }
}
