// Module exports for models

pub mod calendar;
pub mod ring;
pub mod settings;
pub mod todo;
