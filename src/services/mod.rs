// Service module exports

pub mod ring_progress;
pub mod settings;
