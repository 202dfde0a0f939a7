//! The floating launcher button shown while the panel is collapsed.

use egui::{Button, CornerRadius, RichText, Vec2};

use crate::theme::*;

/// Render the launcher. Returns true when clicked.
pub fn launcher_button(ui: &mut egui::Ui) -> bool {
    let button = Button::new(RichText::new("💬").size(24.0))
        .fill(ACCENT)
        .corner_radius(CornerRadius::same(28))
        .min_size(Vec2::new(56.0, 56.0));
    ui.add(button).clicked()
}
