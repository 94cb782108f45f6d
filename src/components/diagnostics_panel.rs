use crate::api::BackendConfig;
use dioxus::prelude::*;

/// Raw request/response echo, only displayed when the backend runs dry.
#[component]
pub fn DiagnosticsPanel(
    visible: bool,
    config: Option<BackendConfig>,
    last_response: Option<String>,
) -> Element {
    let display = if visible { "block" } else { "none" };
    let output = last_response.unwrap_or_else(|| "No command sent yet".to_string());
    let socket = config.as_ref().and_then(|c| c.mpv_socket.clone());
    let episodes_file = config.as_ref().and_then(|c| c.episodes_file.clone());

    rsx! {
        section { id: "lastAction", class: "diagnostics", style: "display: {display}",
            h2 { class: "diagnostics-title", "Last response" }
            if let Some(socket) = socket {
                p { class: "diagnostics-meta", "mpv socket: {socket}" }
            }
            if let Some(file) = episodes_file {
                p { class: "diagnostics-meta", "episodes: {file}" }
            }
            pre { id: "out", class: "diagnostics-out", "{output}" }
        }
    }
}
