use crate::components::{RemoteController, StatusPoller};
use crate::remote::{DispatchKind, PlayerView, RemoteAction};
use dioxus::prelude::*;

fn button_id(action: RemoteAction) -> &'static str {
    match action {
        RemoteAction::TogglePause => "btnPlayPause",
        RemoteAction::ToggleMute => "btnMute",
        RemoteAction::Next => "btnNext",
        RemoteAction::Prev => "btnPrev",
    }
}

fn button_glyph(action: RemoteAction, view: &PlayerView) -> &'static str {
    match action {
        RemoteAction::TogglePause => view.pause.glyph(),
        RemoteAction::ToggleMute => view.mute.glyph(),
        RemoteAction::Next => "⏭",
        RemoteAction::Prev => "⏮",
    }
}

fn button_title(action: RemoteAction) -> &'static str {
    match action {
        RemoteAction::TogglePause => "Play / pause",
        RemoteAction::ToggleMute => "Mute / unmute",
        RemoteAction::Next => "Next episode",
        RemoteAction::Prev => "Previous episode",
    }
}

#[component]
pub fn RemoteView() -> Element {
    let controller = use_context::<RemoteController>();
    let state = controller.state;
    let snapshot = state();

    rsx! {
        StatusPoller {}
        section { class: "remote",
            p { id: "statusLine", class: "status-line", "{snapshot.view.status_line}" }
            div {
                class: if snapshot.gate.cooldown_pending() { "controls cooling" } else { "controls" },
                aria_busy: snapshot.gate.is_busy(),
                for action in RemoteAction::ALL {
                    ActionButton {
                        key: "{action}",
                        action,
                        glyph: button_glyph(action, &snapshot.view),
                        disabled: !snapshot.controls_enabled(),
                    }
                }
            }
            if let Some(message) = snapshot.message.clone() {
                p { class: "message", "{message}" }
            }
        }
    }
}

#[component]
fn ActionButton(action: RemoteAction, glyph: &'static str, disabled: bool) -> Element {
    let controller = use_context::<RemoteController>();
    let class = if action == RemoteAction::TogglePause {
        "control-btn primary"
    } else {
        "control-btn"
    };

    rsx! {
        button {
            id: button_id(action),
            class,
            r#type: "button",
            title: button_title(action),
            "data-action": action.as_str(),
            disabled,
            onclick: move |_| controller.dispatch(DispatchKind::Action(action)),
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{MuteState, PauseState};

    #[test]
    fn glyphs_follow_the_player_view() {
        let view = PlayerView {
            pause: PauseState::Paused,
            mute: MuteState::Muted,
            status_line: String::new(),
        };
        assert_eq!(button_glyph(RemoteAction::TogglePause, &view), "▶");
        assert_eq!(button_glyph(RemoteAction::ToggleMute, &view), "🔇");
        assert_eq!(button_id(RemoteAction::TogglePause), "btnPlayPause");
        assert_eq!(button_id(RemoteAction::ToggleMute), "btnMute");
    }
}
