//! The progress dashboard screen.
//!
//! Owns everything the screen shows: the ring values and their entrance
//! animation, the date strip and the checklist. All of it is created once
//! when the screen is built and dropped with it.

use crate::models::calendar::CalendarStrip;
use crate::models::ring::RingValue;
use crate::models::settings::{DashboardSettings, HeaderStyle, TodoMode};
use crate::models::todo::TodoList;
use crate::services::ring_progress::{sample_frames, RingAnimation, RingFrame, RingGeometry};
use crate::ui_egui::theme::DashboardTheme;
use crate::ui_egui::views::action_buttons::render_action_buttons;
use crate::ui_egui::views::calendar_strip::render_calendar_strip;
use crate::ui_egui::views::header::render_header;
use crate::ui_egui::views::legend::render_legend;
use crate::ui_egui::views::ring_view::render_rings;
use crate::ui_egui::views::todo_list::render_todo_list;
use std::time::{Duration, Instant};

/// Layout switches for the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    pub header_style: HeaderStyle,
    pub todo_mode: TodoMode,
    pub show_action_buttons: bool,
    pub animation_duration: Duration,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self::from_settings(&DashboardSettings::default())
    }
}

impl ScreenOptions {
    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self {
            header_style: settings.header_style,
            todo_mode: settings.todo_mode,
            show_action_buttons: settings.show_action_buttons,
            animation_duration: settings.animation_duration(),
        }
    }
}

pub struct ProgressDashboardScreen {
    options: ScreenOptions,
    geometry: RingGeometry,
    rings: [RingValue; 3],
    animation: RingAnimation,
    strip: CalendarStrip,
    todos: TodoList,
}

impl ProgressDashboardScreen {
    pub fn new(options: ScreenOptions) -> Self {
        let rings = RingValue::dashboard_defaults();
        let animation = RingAnimation::new(
            rings.iter().map(|ring| ring.target_fraction),
            options.animation_duration,
        );
        let todos = match options.todo_mode {
            TodoMode::Interactive => TodoList::daily_checklist(),
            TodoMode::ReadOnly => TodoList::draft_checklist(),
            TodoMode::Hidden => TodoList::default(),
        };

        Self {
            options,
            geometry: RingGeometry::DASHBOARD,
            rings,
            animation,
            strip: CalendarStrip::dashboard_week(),
            todos,
        }
    }

    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    pub fn rings(&self) -> &[RingValue] {
        &self.rings
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    pub fn animation(&self) -> &RingAnimation {
        &self.animation
    }

    pub fn strip(&self) -> &CalendarStrip {
        &self.strip
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// Start the entrance animation. Only the first call has any effect.
    pub fn mount(&mut self, now: Instant) {
        self.animation.start(now);
    }

    pub fn ring_frames(&self, now: Instant) -> Vec<RingFrame> {
        sample_frames(&self.geometry, &self.animation, now)
    }

    /// Toggle a todo; only honoured when the list is interactive.
    pub fn toggle_todo(&mut self, id: u32) -> bool {
        if self.options.todo_mode != TodoMode::Interactive {
            return false;
        }
        self.todos.toggle(id)
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &DashboardTheme, now: Instant) {
        self.mount(now);

        render_header(ui, self.options.header_style, theme, |ui| {
            render_calendar_strip(ui, &self.strip, theme);
        });

        ui.add_space(20.0);
        let fractions = self.animation.fractions_at(now);
        ui.vertical_centered(|ui| {
            render_rings(ui, &self.geometry, &self.rings, &fractions, theme);
            ui.add_space(20.0);
        });
        render_legend(ui, &self.rings);

        let mut toggled = None;
        egui::Frame::none()
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                toggled = render_todo_list(ui, &self.todos, self.options.todo_mode, theme);
                if self.options.show_action_buttons {
                    render_action_buttons(ui, theme);
                }
            });
        if let Some(id) = toggled {
            self.toggle_todo(id);
        }

        if self.animation.needs_repaint(now) {
            ui.ctx().request_repaint();
        }
    }
}
