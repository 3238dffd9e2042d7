//! Progress ring model: geometry of the concentric rings and the entrance
//! animation that fills them.

mod animation;
mod geometry;

pub use animation::RingAnimation;
pub use geometry::RingGeometry;

use std::time::Instant;

/// What one ring looks like at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub index: usize,
    pub radius: f32,
    pub circumference: f32,
    pub dash_offset: f32,
    pub fraction: f32,
}

/// Sample every ring of `animation` at `now` against `geometry`.
pub fn sample_frames(geometry: &RingGeometry, animation: &RingAnimation, now: Instant) -> Vec<RingFrame> {
    animation
        .fractions_at(now)
        .into_iter()
        .enumerate()
        .map(|(index, fraction)| RingFrame {
            index,
            radius: geometry.radius(index),
            circumference: geometry.circumference(index),
            dash_offset: geometry.dash_offset(index, fraction),
            fraction,
        })
        .collect()
}
