// src/animation/state.rs
//
// Per-node step state machine. A node is idle (dir == 0) or stepping
// (dir == ±1); one step carries its scale from 0 to 1 or back, snaps
// on overshoot, and reports completion exactly once.

use crate::animation::scale::update_value;

/// Pacing values shared by every step, copied out of the animation
/// config by whoever owns the nodes.
#[derive(Debug, Clone, Copy)]
pub struct StepPacing {
    pub balls: usize,
    pub sc_gap: f32,
    pub sc_div: f64,
}

#[derive(Debug, Clone, Default)]
pub struct NodeState {
    scale: f32,
    prev_scale: f32,
    dir: f32,
}

impl NodeState {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    // Advance one tick. Some(resting scale) exactly when the step
    // completes; the increment switches from sc_gap / balls to sc_gap
    // at the phase boundary.
    pub fn update(&mut self, pacing: &StepPacing) -> Option<f32> {
        if self.is_idle() {
            return None;
        }
        self.scale += update_value(
            self.scale,
            self.dir,
            pacing.balls,
            1,
            pacing.sc_gap,
            pacing.sc_div,
        );
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return Some(self.prev_scale);
        }
        None
    }

    // Begin a step only when idle; the direction toggles with the
    // resting scale, so steps alternate 0->1 and 1->0.
    pub fn start(&mut self) -> bool {
        if self.is_idle() {
            self.dir = 1.0 - 2.0 * self.prev_scale;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACING: StepPacing = StepPacing {
        balls: 3,
        sc_gap: 0.05,
        sc_div: 0.51,
    };

    fn run_to_rest(state: &mut NodeState) -> (usize, usize) {
        let mut ticks = 0;
        let mut completions = 0;
        while !state.is_idle() {
            if state.update(&PACING).is_some() {
                completions += 1;
            }
            ticks += 1;
            assert!(ticks < 1000, "step never completed");
        }
        (ticks, completions)
    }

    #[test]
    fn test_idle_update_is_a_noop() {
        let mut state = NodeState::default();
        assert!(state.update(&PACING).is_none());
        assert_eq!(state.scale(), 0.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_start_only_when_idle() {
        let mut state = NodeState::default();
        assert!(state.start());
        assert!(!state.is_idle());
        // a second start while stepping does nothing
        assert!(!state.start());
    }

    #[test]
    fn test_forward_step_converges_to_one() {
        let mut state = NodeState::default();
        assert!(state.start());
        let (ticks, completions) = run_to_rest(&mut state);
        assert_eq!(completions, 1);
        assert!((state.scale() - 1.0).abs() < 1e-6);
        // slow phase to the boundary, fast phase after it
        assert!(ticks > 20 && ticks < 100, "took {} ticks", ticks);
    }

    #[test]
    fn test_reverse_step_returns_to_zero() {
        let mut state = NodeState::default();
        state.start();
        run_to_rest(&mut state);

        assert!(state.start());
        let (_, completions) = run_to_rest(&mut state);
        assert_eq!(completions, 1);
        assert!(state.scale().abs() < 1e-6);

        // and forward again
        assert!(state.start());
        run_to_rest(&mut state);
        assert!((state.scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_overshoot_snaps_exactly() {
        let mut state = NodeState::default();
        state.start();
        let mut peak = 0.0f32;
        while !state.is_idle() {
            state.update(&PACING);
            peak = peak.max(state.scale());
        }
        // the step may transiently exceed 1 but rests exactly on it
        assert!(peak <= 1.0 + PACING.sc_gap + 1e-6);
        assert_eq!(state.scale(), 1.0);
    }
}
