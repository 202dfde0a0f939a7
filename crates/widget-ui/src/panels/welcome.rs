//! Welcome screen — greeting text, FAQ suggestion buttons, and the
//! view-history shortcut when a persisted transcript exists.

use egui::{Button, RichText, Vec2};

use widget_types::config::WidgetConfig;

use crate::theme::*;

/// What the caller should do after rendering the welcome screen
pub enum WelcomeAction {
    None,
    /// A suggestion button was clicked; carries the full question text
    FaqClicked(String),
    ViewHistory,
}

pub fn welcome_panel(ui: &mut egui::Ui, config: &WidgetConfig, has_history: bool) -> WelcomeAction {
    let mut action = WelcomeAction::None;

    ui.vertical(|ui| {
        ui.add_space(12.0);
        ui.label(RichText::new("💬").size(32.0));
        ui.add_space(4.0);
        ui.heading(
            RichText::new(&config.welcome_heading)
                .color(TEXT_PRIMARY)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(&config.welcome_text).color(TEXT_SECONDARY));

        ui.add_space(16.0);
        ui.label(
            RichText::new("Quick questions")
                .color(ACCENT)
                .strong()
                .small(),
        );
        ui.add_space(4.0);

        for faq in &config.faqs {
            let button = Button::new(RichText::new(&faq.label).color(TEXT_PRIMARY))
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 28.0));
            if ui.add(button).clicked() {
                action = WelcomeAction::FaqClicked(faq.question.clone());
            }
        }

        if has_history {
            ui.add_space(12.0);
            if ui
                .link(RichText::new("View chat history").color(ACCENT).small())
                .clicked()
            {
                action = WelcomeAction::ViewHistory;
            }
        }
    });

    action
}
