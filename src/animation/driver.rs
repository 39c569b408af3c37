// src/animation/driver.rs
//
// The repeating-tick driver. The frame loop hands us real dt and we
// grant one advance each time the accumulator crosses the tick
// period, so stepping never blocks the render thread.

use log::debug;

#[derive(Debug)]
pub struct TickDriver {
    running: bool,
    frame_timer: f32,
    frame_duration: f32,
}

impl TickDriver {
    pub fn new(frame_duration: f32) -> Self {
        Self {
            running: false,
            frame_timer: 0.0,
            frame_duration,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.frame_timer = 0.0;
            debug!("tick driver started");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("tick driver stopped");
        }
    }

    // True when ready to advance, at most once per call; the remainder
    // carries into the next frame.
    pub fn should_advance(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            true
        } else {
            false
        }
    }
}
