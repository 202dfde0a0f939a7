//! View controller — the finite state machine governing which panel is
//! visible. One controller instance per widget mount; no module globals.

/// Exactly one view is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Welcome,
    /// Lead-capture form. Only reachable when the widget requires identity.
    PrechatForm,
    Conversation,
}

pub struct WidgetController {
    view: ViewState,
    panel_open: bool,
    require_identity: bool,
}

impl WidgetController {
    pub fn new(require_identity: bool) -> Self {
        Self {
            view: ViewState::Welcome,
            panel_open: false,
            require_identity,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn is_open(&self) -> bool {
        self.panel_open
    }

    /// Launcher and panel visibility are always complementary.
    pub fn launcher_visible(&self) -> bool {
        !self.panel_open
    }

    /// The composer region is visible iff the active view is not the form.
    pub fn composer_visible(&self) -> bool {
        self.view != ViewState::PrechatForm
    }

    /// Open the panel and pick the initial view: the pre-chat form when
    /// identity is required but absent, else the conversation when a
    /// transcript exists, else the welcome screen.
    pub fn open_panel(&mut self, identity_present: bool, transcript_present: bool) -> ViewState {
        self.panel_open = true;
        self.view = if self.require_identity && !identity_present {
            ViewState::PrechatForm
        } else if transcript_present {
            ViewState::Conversation
        } else {
            ViewState::Welcome
        };
        self.view
    }

    /// Hide the panel and re-show the launcher. View state is retained for
    /// the next open.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Focusing the composer on the welcome screen enters the conversation.
    /// Returns true on that transition so the caller can seed the greeting
    /// into an empty transcript.
    pub fn composer_focused(&mut self) -> bool {
        if self.view == ViewState::Welcome {
            self.view = ViewState::Conversation;
            true
        } else {
            false
        }
    }

    /// Back returns from the conversation to the welcome screen and is a
    /// no-op everywhere else. The composer stays visible.
    pub fn back(&mut self) {
        if self.view == ViewState::Conversation {
            self.view = ViewState::Welcome;
        }
    }

    /// A validated, persisted identity dismisses the form overlay.
    pub fn identity_submitted(&mut self) {
        if self.view == ViewState::PrechatForm {
            self.view = ViewState::Welcome;
        }
    }

    /// FAQ click and view-history both land in the conversation.
    pub fn show_conversation(&mut self) {
        self.view = ViewState::Conversation;
    }
}
