use crate::api::HomeroClient;
use crate::components::{AppView, DiagnosticsPanel, NavBar, RemoteController, RemoteState};
use crate::settings::ClientSettings;
use dioxus::prelude::*;

/// Layout shared by every page. Owns the session state and performs the
/// one-time config fetch.
#[component]
pub fn AppShell() -> Element {
    let settings = use_context::<ClientSettings>();
    let state = use_signal(RemoteState::default);
    let controller = use_hook(|| {
        RemoteController::new(state, HomeroClient::from_environment(), settings.clone())
    });

    use_context_provider(|| controller.clone());

    {
        let controller = controller.clone();
        use_future(move || {
            let controller = controller.clone();
            async move { controller.setup().await }
        });
    }

    let snapshot = state();
    let dry_run = snapshot.show_diagnostics();

    rsx! {
        div { class: "app-shell",
            NavBar { dry_run }
            main { class: "page-shell",
                Outlet::<AppView> {}
            }
            DiagnosticsPanel {
                visible: dry_run,
                config: snapshot.config.clone(),
                last_response: snapshot.last_response.clone(),
            }
        }
    }
}
