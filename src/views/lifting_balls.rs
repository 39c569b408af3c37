// src/views/lifting_balls.rs
//
// The LiftingBallsView is the main updating entity in the visualisation.
//
// It holds the chain of nodes, the tick driver that paces their steps,
// and the resolved drawing style, and provides the update / draw / tap
// surface the app loop talks to.

use nannou::prelude::*;

use crate::{
    animation::TickDriver,
    config::{ChainConfig, Config, ConfigError, StyleConfig},
    draw::{draw_node, DrawStyle},
    models::BallChain,
};

use log::debug;

pub struct LiftingBallsView {
    pub chain: BallChain,
    pub driver: TickDriver,

    // resolved once at startup
    chain_config: ChainConfig,
    style_config: StyleConfig,
    fore_color: Rgb<f32>,
    back_color: Rgb<f32>,
}

impl LiftingBallsView {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let fore_color = config.style.fore_rgb()?;
        let back_color = config.style.back_rgb()?;

        Ok(Self {
            chain: BallChain::new(&config.chain, &config.animation),
            driver: TickDriver::new(config.animation.frame_duration()),

            chain_config: config.chain.clone(),
            style_config: config.style.clone(),
            fore_color,
            back_color,
        })
    }

    /// Advances the active node by at most one step per call. The
    /// driver owns the pacing; once a node finishes a full step the
    /// driver stops and the view goes quiet until the next tap.
    pub fn update(&mut self, dt: f32) {
        if self.driver.should_advance(dt) {
            if let Some(event) = self.chain.advance() {
                debug!(
                    "node {} finished a step at scale {:.1}, now on node {}",
                    event.node,
                    event.scale,
                    self.chain.current()
                );
                self.driver.stop();
            }
        }
    }

    /// A tap sets the current node moving. Taps landing while a step
    /// is already running are ignored.
    pub fn handle_tap(&mut self) {
        if self.chain.start_current() {
            debug!("tap: node {} starts a step", self.chain.current());
            self.driver.start();
        }
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    pub fn draw(&self, draw: &Draw, rect: Rect) {
        draw.background().color(self.back_color);

        let style = DrawStyle {
            color: self.fore_color,
            stroke_weight: rect.w().min(rect.h()) / self.style_config.stroke_factor,
        };

        for (i, scale) in self.chain.node_scales() {
            draw_node(
                draw,
                rect.w(),
                i,
                scale,
                &self.chain_config,
                &self.style_config,
                &style,
            );
        }
    }
}
