// src/models/chain.rs
//
// The node chain. Logically a fixed row indexed 0..nodes with a single
// cursor that walks it one completed step at a time, reversing at the
// ends instead of wrapping.

use crate::animation::{NodeState, StepPacing};
use crate::config::{AnimationConfig, ChainConfig};

#[derive(Debug)]
pub struct ChainNode {
    pub index: usize,
    pub state: NodeState,
}

/// Reported when the current node finishes a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    pub node: usize,
    pub scale: f32,
}

#[derive(Debug)]
pub struct BallChain {
    nodes: Vec<ChainNode>,
    current: usize,
    dir: i32,
    pacing: StepPacing,
}

impl BallChain {
    pub fn new(chain: &ChainConfig, animation: &AnimationConfig) -> Self {
        let nodes = (0..chain.nodes)
            .map(|index| ChainNode {
                index,
                state: NodeState::default(),
            })
            .collect();
        Self {
            nodes,
            current: 0,
            dir: 1,
            pacing: StepPacing {
                balls: chain.balls,
                sc_gap: animation.sc_gap,
                sc_div: animation.sc_div,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn traversal_dir(&self) -> i32 {
        self.dir
    }

    // (index, scale) for every node in row order; the draw pass input.
    pub fn node_scales(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.nodes.iter().map(|node| (node.index, node.state.scale()))
    }

    // Neighbor in `dir`, or None past either end of the row.
    pub fn neighbor(&self, index: usize, dir: i32) -> Option<usize> {
        let next = index as i32 + dir;
        if next >= 0 && (next as usize) < self.nodes.len() {
            Some(next as usize)
        } else {
            None
        }
    }

    // Advance the current node one tick. When its step completes, the
    // cursor moves to the neighbor in the traversal direction, or flips
    // the direction and stays put at a boundary.
    pub fn advance(&mut self) -> Option<StepEvent> {
        let node = self.current;
        let scale = self.nodes[node].state.update(&self.pacing)?;
        match self.neighbor(node, self.dir) {
            Some(next) => self.current = next,
            None => self.dir = -self.dir,
        }
        Some(StepEvent { node, scale })
    }

    // Begin a step on the current node; false while it is mid-step.
    pub fn start_current(&mut self) -> bool {
        let node = self.current;
        self.nodes[node].state.start()
    }

    // How many nodes are mid-step; never more than one by construction.
    pub fn active_count(&self) -> usize {
        self.nodes.iter().filter(|node| !node.state.is_idle()).count()
    }
}
