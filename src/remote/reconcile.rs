use crate::api::{ActionResponse, ApiError};
use crate::remote::{PlayerView, RemoteAction};

/// What a dispatch was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchKind {
    Action(RemoteAction),
    Load(u32),
}

/// UI effects of one completed dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Text for the diagnostic `out` element.
    pub diagnostic: String,
    pub message: Option<String>,
    pub view: PlayerView,
    /// Schedule a status refresh shortly after the cooldown is armed.
    pub refresh: bool,
}

impl Reconciliation {
    pub fn from_outcome(
        kind: DispatchKind,
        outcome: &Result<ActionResponse, ApiError>,
        view: &PlayerView,
    ) -> Self {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                return Self {
                    diagnostic: err.to_string(),
                    message: Some(err.to_string()),
                    view: view.clone(),
                    refresh: false,
                }
            }
        };

        let diagnostic = response.pretty();

        if let Some(cooldown_ms) = response.cooldown_ms() {
            return Self {
                diagnostic,
                message: Some(format!("Cooldown active ({cooldown_ms} ms)")),
                view: view.clone(),
                refresh: false,
            };
        }

        if response.is_rejected() || response.error().is_some() {
            let reason = match response.error() {
                Some(error) => error.to_string(),
                None => format!("HTTP {}", response.status),
            };
            return Self {
                diagnostic,
                message: Some(format!("Rejected: {reason}")),
                view: view.clone(),
                refresh: false,
            };
        }

        let mut next = view.clone();
        let message = match kind {
            DispatchKind::Action(RemoteAction::TogglePause) => {
                next.pause = next.pause.toggled();
                None
            }
            DispatchKind::Action(RemoteAction::ToggleMute) => {
                next.mute = next.mute.toggled();
                None
            }
            DispatchKind::Action(_) => None,
            DispatchKind::Load(index) => Some(format!("Episode #{index} requested")),
        };

        Self {
            diagnostic,
            message,
            view: next,
            refresh: true,
        }
    }
}
