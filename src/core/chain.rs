//! Chase-chain engine: a head easing toward the pointer target, trailed by
//! body segments that each ease toward their predecessor. One `advance` call
//! is one tick; easing is asymptotic, so positions approach but never reach
//! their targets.

use super::constants::*;
use glam::Vec2;

pub struct ChaseChain {
    pub head: Vec2,
    nodes: Vec<Vec2>,
}

impl ChaseChain {
    /// All nodes start stacked on `start`; they fan out as the target moves.
    pub fn new(start: Vec2, length: usize) -> Self {
        Self {
            head: start,
            nodes: vec![start; length],
        }
    }

    /// Advance one tick toward `target`. The head closes by `HEAD_EASE`,
    /// node 0 chases the head and node i chases node i-1 by `NODE_EASE`.
    pub fn advance(&mut self, target: Vec2) {
        self.head += (target - self.head) * HEAD_EASE;
        let mut prev = self.head;
        for node in &mut self.nodes {
            *node += (prev - *node) * NODE_EASE;
            prev = *node;
        }
    }

    /// Heading from the head toward `target`, in degrees.
    ///
    /// This is the raw travel direction; any sprite-alignment offset belongs
    /// to the presentation layer.
    pub fn heading_degrees(&self, target: Vec2) -> f32 {
        (target.y - self.head.y)
            .atan2(target.x - self.head.x)
            .to_degrees()
    }

    pub fn nodes(&self) -> &[Vec2] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Display size for segment `index`, shrinking linearly toward the tail and
/// floored at the minimum size. Recomputed from the index alone each tick.
#[inline]
pub fn segment_size(index: usize) -> f32 {
    (SEGMENT_BASE_SIZE - index as f32 * SEGMENT_SHRINK).max(SEGMENT_MIN_SIZE)
}

/// Opacity for segment `index` in a chain of `length`: fully opaque at the
/// head, approaching transparent at the tail.
#[inline]
pub fn segment_opacity(index: usize, length: usize) -> f32 {
    1.0 - index as f32 / length as f32
}
