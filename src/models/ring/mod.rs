//! Ring model for the progress indicator.
//!
//! Each ring represents one habit category and the fraction of it that has
//! been completed. The values are fixed for the lifetime of the screen.

use serde::{Deserialize, Serialize};

/// Category a progress ring reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RingCategory {
    Urgent,
    Routine,
    Finished,
}

impl RingCategory {
    /// Label shown next to the legend dot
    pub fn legend_label(&self) -> &'static str {
        match self {
            RingCategory::Urgent => "열정",
            RingCategory::Routine => "꾸준",
            RingCategory::Finished => "긍정",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RingCategory::Urgent => "Urgent",
            RingCategory::Routine => "Routine",
            RingCategory::Finished => "Finished",
        }
    }
}

impl std::fmt::Display for RingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain RGB triple, kept free of any UI crate so the model stays portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Red used for the urgent ring (#FF5252)
pub const URGENT_COLOR: RgbColor = RgbColor::new(0xFF, 0x52, 0x52);
/// Amber used for the routine ring (#FFA000)
pub const ROUTINE_COLOR: RgbColor = RgbColor::new(0xFF, 0xA0, 0x00);
/// Green used for the finished ring (#4CAF50)
pub const FINISHED_COLOR: RgbColor = RgbColor::new(0x4C, 0xAF, 0x50);

/// One category's completion fraction and display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingValue {
    pub category: RingCategory,
    /// Final proportion (0–1) the ring animates toward
    pub target_fraction: f32,
    pub color: RgbColor,
}

impl RingValue {
    /// Create a ring value; the fraction is clamped into `[0, 1]`.
    pub fn new(category: RingCategory, target_fraction: f32, color: RgbColor) -> Self {
        let target_fraction = if target_fraction.is_nan() {
            0.0
        } else {
            target_fraction.clamp(0.0, 1.0)
        };
        Self {
            category,
            target_fraction,
            color,
        }
    }

    /// The three rings shown on the dashboard, ordered by increasing radius
    /// (innermost first).
    pub fn dashboard_defaults() -> [RingValue; 3] {
        [
            RingValue::new(RingCategory::Finished, 0.25, FINISHED_COLOR),
            RingValue::new(RingCategory::Routine, 0.45, ROUTINE_COLOR),
            RingValue::new(RingCategory::Urgent, 0.75, URGENT_COLOR),
        ]
    }

    /// Legend order lists the outermost ring first.
    pub fn legend_order(rings: &[RingValue]) -> Vec<RingValue> {
        rings.iter().rev().copied().collect()
    }
}
