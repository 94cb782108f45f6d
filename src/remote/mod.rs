//! Client-side core of the remote: the dispatch gate, the player view and the
//! rules that turn a backend reply into UI changes.

mod gate;
mod playback;
mod reconcile;

pub use gate::*;
pub use playback::*;
pub use reconcile::*;

use std::str::FromStr;

/// Named commands the backend understands on `POST /api/action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAction {
    TogglePause,
    ToggleMute,
    Next,
    Prev,
}

impl RemoteAction {
    pub const ALL: [RemoteAction; 4] = [
        RemoteAction::Prev,
        RemoteAction::TogglePause,
        RemoteAction::ToggleMute,
        RemoteAction::Next,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TogglePause => "toggle_pause",
            Self::ToggleMute => "toggle_mute",
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

impl std::fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "toggle_pause" => Ok(Self::TogglePause),
            "toggle_mute" => Ok(Self::ToggleMute),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            other => Err(format!("Unknown action '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse_back() {
        for action in RemoteAction::ALL {
            assert_eq!(action.as_str().parse::<RemoteAction>(), Ok(action));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert_eq!(
            "rewind".parse::<RemoteAction>(),
            Err("Unknown action 'rewind'".to_string())
        );
    }
}
