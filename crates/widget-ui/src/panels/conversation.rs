//! Conversation view — the scrollable transcript and the composer.
//!
//! Assistant bodies go through the markdown-lite parser and are rendered as
//! structured widgets; user bodies are rendered as literal text, never
//! parsed. Only text from the trusted answering service is treated as
//! markup.

use egui::{Button, Key, OpenUrl, RichText, ScrollArea, TextEdit, Vec2};

use widget_core::markdown::{self, Block, Inline};
use widget_core::transcript::{format_time, Transcript, TranscriptEntry};
use widget_types::message::{Message, Role};

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the composer
pub enum ComposerAction {
    None,
    /// The input gained focus this frame (welcome → conversation trigger)
    Focused,
    /// The user submitted a question
    Submitted(String),
}

/// Render the transcript. `thinking` shows the transient dots placeholder
/// after the last message while a request is outstanding.
pub fn conversation_panel(ui: &mut egui::Ui, transcript: &Transcript, thinking: bool) {
    let today = chrono::Local::now().date_naive();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in transcript.entries(today) {
                match entry {
                    TranscriptEntry::Separator(label) => render_separator(ui, &label),
                    TranscriptEntry::Msg(msg) => render_message(ui, msg),
                }
                ui.add_space(4.0);
            }

            if thinking {
                render_thinking(ui);
            }
        });
}

fn render_separator(ui: &mut egui::Ui, label: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(label).color(SEPARATOR_TEXT).small());
    });
}

fn render_message(ui: &mut egui::Ui, msg: &Message) {
    let (avatar, bubble) = match msg.role {
        Role::Assistant => ("🤖", BUBBLE_ASSISTANT),
        Role::User => ("👤", BUBBLE_USER),
    };

    ui.horizontal_top(|ui| {
        ui.label(RichText::new(avatar).size(18.0));

        egui::Frame::default()
            .fill(bubble)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.set_max_width(ui.available_width() - 8.0);

                    match msg.role {
                        Role::Assistant => {
                            render_markdown(ui, &markdown::parse(&msg.body));
                        }
                        // literal text, never interpreted as markup
                        Role::User => {
                            ui.label(RichText::new(&msg.body).color(TEXT_PRIMARY));
                        }
                    }

                    if !msg.citations.is_empty() {
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new("📚 Sources:")
                                .color(TEXT_SECONDARY)
                                .strong()
                                .small(),
                        );
                        for citation in &msg.citations {
                            let link = ui.link(
                                RichText::new(citation.display_text())
                                    .color(ACCENT)
                                    .small(),
                            );
                            if link.clicked() {
                                // new tab; eframe opens with noopener
                                ui.ctx().open_url(OpenUrl::new_tab(&citation.url));
                            }
                        }
                    }

                    ui.label(
                        RichText::new(format_time(&msg.timestamp))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
            });
    });
}

/// Render parsed markdown-lite blocks as egui widgets.
fn render_markdown(ui: &mut egui::Ui, blocks: &[Block]) {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            ui.add_space(6.0);
        }
        match block {
            Block::Paragraph(inlines) => {
                for line in split_lines(inlines) {
                    render_inline_run(ui, line);
                }
            }
            Block::List(items) => {
                for item in items {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label(RichText::new("•  ").color(TEXT_PRIMARY));
                        render_inlines(ui, item);
                    });
                }
            }
        }
    }
}

/// Split a paragraph's inlines at line breaks.
fn split_lines(inlines: &[Inline]) -> Vec<&[Inline]> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, inline) in inlines.iter().enumerate() {
        if matches!(inline, Inline::LineBreak) {
            lines.push(&inlines[start..i]);
            start = i + 1;
        }
    }
    lines.push(&inlines[start..]);
    lines
}

fn render_inline_run(ui: &mut egui::Ui, inlines: &[Inline]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        render_inlines(ui, inlines);
    });
}

fn render_inlines(ui: &mut egui::Ui, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                ui.label(RichText::new(text).color(TEXT_PRIMARY));
            }
            Inline::Bold(text) => {
                ui.label(RichText::new(text).color(TEXT_PRIMARY).strong());
            }
            Inline::Link { label, url } => {
                let response = ui.link(RichText::new(label).color(ACCENT));
                if response.clicked() {
                    ui.ctx().open_url(OpenUrl::new_tab(url));
                }
            }
            Inline::LineBreak => {}
        }
    }
}

/// The transient three-dot placeholder shown while a request is outstanding.
fn render_thinking(ui: &mut egui::Ui) {
    ui.horizontal_top(|ui| {
        ui.label(RichText::new("🤖").size(18.0));
        egui::Frame::default()
            .fill(BUBBLE_ASSISTANT)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let t = ui.input(|i| i.time);
                let dots = 1 + ((t * 2.5) as usize % 3);
                ui.label(
                    RichText::new("●".repeat(dots))
                        .color(TEXT_SECONDARY)
                        .size(14.0),
                );
            });
    });
}

/// Render the composer. Enter submits, Shift+Enter inserts a newline. The
/// input and send control are disabled while a request is outstanding.
pub fn composer(ui: &mut egui::Ui, state: &mut UiState, placeholder: &str) -> ComposerAction {
    let mut action = ComposerAction::None;
    let pending = state.is_pending();

    ui.horizontal(|ui| {
        let editor = TextEdit::multiline(&mut state.composer_text)
            .hint_text(placeholder)
            .desired_rows(1)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));

        let response = ui.add_enabled(!pending, editor);

        if response.gained_focus() {
            action = ComposerAction::Focused;
        }

        let enter_pressed = response.has_focus()
            && ui.input(|i| i.key_pressed(Key::Enter) && !i.modifiers.shift);
        if enter_pressed && state.composer_text.ends_with('\n') {
            // TextEdit already inserted this Enter's newline; drop it
            state.composer_text.pop();
        }

        let send_enabled = !state.composer_text.trim().is_empty() && !pending;
        let send_btn = ui.add_enabled(
            send_enabled,
            Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        if (enter_pressed && send_enabled) || send_btn.clicked() {
            let text = state.composer_text.trim().to_string();
            state.composer_text.clear();
            action = ComposerAction::Submitted(text);
            response.request_focus();
        }

        // refocus after a request completes, regardless of outcome
        if state.focus_composer && !pending {
            response.request_focus();
            state.focus_composer = false;
        }
    });

    action
}
