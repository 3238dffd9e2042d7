//! Concentric ring geometry and the dash-offset model.
//!
//! A ring's progress is expressed the way a dashed stroke would draw it: the
//! dash length is the full circumference and the offset is the undrawn
//! portion. An offset equal to the circumference draws nothing, an offset of
//! zero draws the full circle.

use egui::{Pos2, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Sizes shared by every ring in a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Radius of the innermost ring
    pub base_radius: f32,
    /// Radius step between neighbouring rings
    pub ring_spacing: f32,
    pub stroke_width: f32,
    /// Edge length of the square canvas the rings are centered in
    pub canvas_size: f32,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::DASHBOARD
    }
}

impl RingGeometry {
    pub const DASHBOARD: RingGeometry = RingGeometry {
        base_radius: 45.0,
        ring_spacing: 15.0,
        stroke_width: 10.0,
        canvas_size: 200.0,
    };

    pub fn radius(&self, index: usize) -> f32 {
        self.base_radius + index as f32 * self.ring_spacing
    }

    pub fn circumference(&self, index: usize) -> f32 {
        TAU * self.radius(index)
    }

    /// Undrawn stroke length when `fraction` of the ring is filled.
    pub fn dash_offset(&self, index: usize, fraction: f32) -> f32 {
        self.circumference(index) * (1.0 - fraction.clamp(0.0, 1.0))
    }

    /// Inverse of [`dash_offset`](Self::dash_offset)
    pub fn drawn_fraction(&self, index: usize, dash_offset: f32) -> f32 {
        let circumference = self.circumference(index);
        if circumference <= 0.0 {
            return 0.0;
        }
        (1.0 - dash_offset / circumference).clamp(0.0, 1.0)
    }

    /// Points along the filled part of ring `index`, starting at 12 o'clock
    /// and running clockwise in screen space (y grows downward).
    ///
    /// Returns an empty vector when nothing is drawn.
    pub fn arc_points(&self, center: Pos2, index: usize, fraction: f32) -> Vec<Pos2> {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction <= 0.0 {
            return Vec::new();
        }

        let radius = self.radius(index);
        let sweep = TAU * fraction;
        // roughly one segment per 4 points of arc length
        let segments = ((radius * sweep / 4.0).ceil() as usize).max(2);
        let start = -FRAC_PI_2;

        (0..=segments)
            .map(|step| {
                let angle = start + sweep * step as f32 / segments as f32;
                center + radius * Vec2::angled(angle)
            })
            .collect()
    }

    /// Outer radius of the whole group including half the stroke
    pub fn outer_extent(&self, ring_count: usize) -> f32 {
        if ring_count == 0 {
            return 0.0;
        }
        self.radius(ring_count - 1) + self.stroke_width / 2.0
    }
}
