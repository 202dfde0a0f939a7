//! Main egui application — owns the controller, transcript, and store, and
//! dispatches questions to the answering service.

use std::rc::Rc;

use egui::{Align, CentralPanel, Layout, RichText, TopBottomPanel};

use widget_core::controller::{ViewState, WidgetController};
use widget_core::event_bus::EventBus;
use widget_core::ports::{AnswerPort, AnswerRequest};
use widget_core::store::SessionStore;
use widget_core::transcript::Transcript;
use widget_platform::http::HttpAnswerClient;
use widget_platform::storage::auto_detect_storage;
use widget_types::config::WidgetConfig;
use widget_types::event::WidgetEvent;
use widget_types::message::Message;
use widget_types::session::Identity;
use widget_types::WidgetError;

use widget_ui::panels::conversation::{self, ComposerAction};
use widget_ui::panels::launcher;
use widget_ui::panels::prechat::{self, PrechatAction};
use widget_ui::panels::welcome::{self, WelcomeAction};
use widget_ui::state::UiState;
use widget_ui::theme;

/// One widget mount. All state is owned here — no module globals — so
/// multiple independent instances per page stay possible.
pub struct ChatWidgetApp {
    config: WidgetConfig,
    controller: WidgetController,
    transcript: Transcript,
    store: SessionStore,
    session_id: String,
    identity: Option<Identity>,
    ui_state: UiState,
    event_bus: EventBus,
    client: Rc<dyn AnswerPort>,
    first_frame: bool,
}

impl ChatWidgetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let storage = auto_detect_storage();
        let store = SessionStore::new(storage);
        let session_id = store.get_or_create_session_id();
        let identity = store.load_identity();
        let controller = WidgetController::new(config.require_identity);
        let client: Rc<dyn AnswerPort> = Rc::new(HttpAnswerClient::new(config.api_url.clone()));

        log::info!(
            "Chat widget initialised (storage: {}, session: {})",
            store.backend_name(),
            session_id
        );

        Self {
            config,
            controller,
            transcript: Transcript::new(),
            store,
            session_id,
            identity,
            ui_state: UiState::new(),
            event_bus: EventBus::new(),
            client,
            first_frame: true,
        }
    }

    fn open_panel(&mut self) {
        let view = self
            .controller
            .open_panel(self.identity.is_some(), self.store.has_transcript());
        if view == ViewState::Conversation {
            self.load_history();
        }
    }

    fn load_history(&mut self) {
        if let Some(messages) = self.store.load_transcript() {
            self.transcript.replace(messages);
        }
    }

    /// An empty conversation opens with one assistant greeting; its date
    /// separator is derived from the message timestamp.
    fn seed_greeting_if_empty(&mut self) {
        if self.transcript.is_empty() {
            self.transcript
                .append(Message::assistant(self.config.greeting.clone()), &self.store);
        }
    }

    fn submit_identity(&mut self, name: &str, email: &str) {
        match self.store.save_identity(name, email) {
            Ok(identity) => {
                log::info!("Identity captured for session {}", self.session_id);
                self.identity = Some(identity);
                self.ui_state.form_error = None;
                self.ui_state.form_name.clear();
                self.ui_state.form_email.clear();
                self.controller.identity_submitted();
            }
            Err(WidgetError::Validation { field, message }) => {
                self.ui_state.focus_field = Some(field);
                self.ui_state.form_error = Some((field, message));
            }
            Err(e) => log::error!("Unexpected identity save failure: {}", e),
        }
    }

    /// Dispatch one question to the answering service (async). The outcome
    /// comes back through the event bus; the disabled composer guarantees at
    /// most one request is outstanding.
    fn submit_question(&mut self, question: String, ctx: &egui::Context) {
        let question = question.trim().to_string();
        if question.is_empty() || self.ui_state.is_pending() {
            return;
        }

        self.controller.show_conversation();
        self.seed_greeting_if_empty();

        // context window excludes the question being asked
        let history = self.transcript.history_window(self.config.history_window);
        self.transcript
            .append(Message::user(question.clone()), &self.store);

        let request_id = self.ui_state.begin_request();
        let request = AnswerRequest {
            question,
            identity: self.identity.clone(),
            session_id: Some(self.session_id.clone()),
            history,
        };

        let client = self.client.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match client.ask(request).await {
                Ok(answer) => bus.emit(WidgetEvent::AnswerReceived { request_id, answer }),
                Err(error) => bus.emit(WidgetEvent::AskFailed { request_id, error }),
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatWidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain request outcomes from spawned futures
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(
                events,
                &mut self.transcript,
                &self.store,
                &self.config.error_message,
            );
            ctx.request_repaint();
        }

        if self.ui_state.is_pending() {
            ctx.request_repaint();
        }

        // ── Collapsed: launcher only ─────────────────────────
        if self.controller.launcher_visible() {
            CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |_ui| {});
            egui::Area::new(egui::Id::new("widget_launcher"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
                .show(ctx, |ui| {
                    if launcher::launcher_button(ui) {
                        self.open_panel();
                    }
                });
            return;
        }

        // ── Header ───────────────────────────────────────────
        TopBottomPanel::top("widget_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let back_active = self.controller.view() == ViewState::Conversation;
                if ui
                    .add_enabled(back_active, egui::Button::new(RichText::new("‹").size(18.0)))
                    .clicked()
                {
                    self.controller.back();
                }
                ui.label(
                    RichText::new(&self.config.title)
                        .strong()
                        .color(theme::TEXT_PRIMARY)
                        .size(16.0),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        self.controller.close_panel();
                    }
                });
            });
        });

        // ── Composer (hidden during the pre-chat form) ───────
        if self.controller.composer_visible() {
            TopBottomPanel::bottom("widget_composer").show(ctx, |ui| {
                let action =
                    conversation::composer(ui, &mut self.ui_state, &self.config.input_placeholder);
                match action {
                    ComposerAction::Focused => {
                        if self.controller.composer_focused() {
                            self.seed_greeting_if_empty();
                        }
                    }
                    ComposerAction::Submitted(text) => self.submit_question(text, ctx),
                    ComposerAction::None => {}
                }
            });
        }

        // ── Active view ──────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.controller.view() {
            ViewState::PrechatForm => {
                if let PrechatAction::Submitted { name, email } =
                    prechat::prechat_panel(ui, &mut self.ui_state)
                {
                    self.submit_identity(&name, &email);
                }
            }
            ViewState::Welcome => {
                let has_history = self.store.has_transcript();
                match welcome::welcome_panel(ui, &self.config, has_history) {
                    WelcomeAction::FaqClicked(question) => {
                        // pre-fill the composer, then submit immediately
                        self.ui_state.composer_text = question;
                        let text = std::mem::take(&mut self.ui_state.composer_text);
                        self.submit_question(text, ctx);
                    }
                    WelcomeAction::ViewHistory => {
                        self.load_history();
                        self.controller.show_conversation();
                    }
                    WelcomeAction::None => {}
                }
            }
            ViewState::Conversation => {
                conversation::conversation_panel(ui, &self.transcript, self.ui_state.is_pending());
            }
        });
    }
}
