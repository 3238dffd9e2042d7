pub mod action_buttons;
pub mod calendar_strip;
pub mod header;
pub mod legend;
mod palette;
pub mod ring_view;
pub mod todo_list;
