use crate::api::PlayerStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseState {
    #[default]
    Playing,
    Paused,
}

impl PauseState {
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Playing
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    /// Glyph shown on the play/pause button: the action a click would take.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Playing => "⏸",
            Self::Paused => "▶",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MuteState {
    #[default]
    Unmuted,
    Muted,
}

impl MuteState {
    pub fn from_muted(muted: bool) -> Self {
        if muted {
            Self::Muted
        } else {
            Self::Unmuted
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Unmuted => Self::Muted,
            Self::Muted => Self::Unmuted,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Unmuted => "🔊",
            Self::Muted => "🔇",
        }
    }
}

/// What the remote page displays about the player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerView {
    pub pause: PauseState,
    pub mute: MuteState,
    pub status_line: String,
}

impl PlayerView {
    pub fn with_status_line(status_line: impl Into<String>) -> Self {
        Self {
            status_line: status_line.into(),
            ..Self::default()
        }
    }

    /// Overwrites the view from authoritative server state. A status carrying
    /// an error only replaces the text; the icons keep their last known state.
    pub fn apply_status(&self, status: &PlayerStatus) -> Self {
        if let Some(error) = status.error.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            return Self {
                status_line: error.to_string(),
                ..self.clone()
            };
        }
        let pause = PauseState::from_paused(status.pause);
        let title = status.media_title.trim();
        let status_line = if title.is_empty() {
            pause.label().to_string()
        } else {
            format!("{} · {}", pause.label(), title)
        };
        Self {
            pause,
            mute: MuteState::from_muted(status.mute),
            status_line,
        }
    }

    /// Same as a failed status payload: text replaced, icons untouched.
    pub fn with_error(&self, message: impl Into<String>) -> Self {
        Self {
            status_line: message.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(pause: bool, mute: bool, title: &str) -> PlayerStatus {
        PlayerStatus {
            pause,
            mute,
            media_title: title.to_string(),
            error: None,
        }
    }

    #[test]
    fn paused_unmuted_status_renders_play_and_speaker() {
        let view = PlayerView::default().apply_status(&status(true, false, "X"));
        assert_eq!(view.pause.glyph(), "▶");
        assert_eq!(view.mute.glyph(), "🔊");
        assert!(view.status_line.contains("Paused"));
        assert!(view.status_line.contains('X'));
    }

    #[test]
    fn playing_muted_status_renders_pause_and_muted_speaker() {
        let view = PlayerView::default().apply_status(&status(false, true, ""));
        assert_eq!(view.pause.glyph(), "⏸");
        assert_eq!(view.mute.glyph(), "🔇");
        assert_eq!(view.status_line, "Playing");
    }

    #[test]
    fn status_error_keeps_icons() {
        let before = PlayerView::default().apply_status(&status(true, true, "Ep"));
        let mut failing = status(false, false, "");
        failing.error = Some("mpv socket unavailable".to_string());
        let after = before.apply_status(&failing);
        assert_eq!(after.pause, PauseState::Paused);
        assert_eq!(after.mute, MuteState::Muted);
        assert_eq!(after.status_line, "mpv socket unavailable");
    }

    #[test]
    fn toggling_pause_twice_returns_to_start() {
        let start = PauseState::Playing;
        assert_eq!(start.glyph(), "⏸");
        let once = start.toggled();
        assert_eq!(once.glyph(), "▶");
        assert_eq!(once.toggled().glyph(), "⏸");
    }

    #[test]
    fn toggling_mute_flips_glyph() {
        assert_eq!(MuteState::Unmuted.toggled().glyph(), "🔇");
        assert_eq!(MuteState::Muted.toggled().glyph(), "🔊");
    }
}
