//! Pre-chat lead-capture form — name and email, both required.
//!
//! Submission stays disabled until both fields pass the minimal checks; a
//! failed submit (the store revalidates) surfaces as an inline message and
//! moves focus to the offending field. Nothing here touches the network.

use egui::{Button, RichText, TextEdit, Vec2};

use widget_core::store::{valid_email, valid_name};
use widget_types::error::FormField;

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the form
pub enum PrechatAction {
    None,
    /// Both fields passed the minimal checks and submit was clicked
    Submitted { name: String, email: String },
}

pub fn prechat_panel(ui: &mut egui::Ui, state: &mut UiState) -> PrechatAction {
    let mut action = PrechatAction::None;

    ui.vertical(|ui| {
        ui.add_space(12.0);
        ui.heading(RichText::new("Welcome!").color(TEXT_PRIMARY).strong());
        ui.label(
            RichText::new("Please share your details to get started").color(TEXT_SECONDARY),
        );
        ui.add_space(12.0);

        ui.label(RichText::new("Name *").color(TEXT_SECONDARY).small());
        let name_response = ui.add(
            TextEdit::singleline(&mut state.form_name)
                .hint_text("Your full name")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);

        ui.label(RichText::new("Email *").color(TEXT_SECONDARY).small());
        let email_response = ui.add(
            TextEdit::singleline(&mut state.form_email)
                .hint_text("your.email@example.com")
                .desired_width(f32::INFINITY),
        );

        match state.focus_field.take() {
            Some(FormField::Name) => name_response.request_focus(),
            Some(FormField::Email) => email_response.request_focus(),
            None => {}
        }

        if let Some((field, message)) = &state.form_error {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{}: {}", field.label(), message))
                    .color(ERROR)
                    .small(),
            );
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "We'll use this info to provide better support. \
                 Your privacy is important to us.",
            )
            .color(TEXT_SECONDARY)
            .small()
            .italics(),
        );

        ui.add_space(8.0);
        let fields_ok = valid_name(&state.form_name) && valid_email(&state.form_email);
        let submit = ui.add_enabled(
            fields_ok,
            Button::new(RichText::new("Start Chatting").color(TEXT_PRIMARY).strong())
                .fill(ACCENT)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 32.0)),
        );
        if submit.clicked() {
            action = PrechatAction::Submitted {
                name: state.form_name.clone(),
                email: state.form_email.clone(),
            };
        }
    });

    action
}
