use crate::api::HomeroClient;
use crate::components::RemoteState;
use crate::remote::DispatchKind;
use crate::settings::ClientSettings;
use crate::utils::delay_ms;
use dioxus::core::spawn_forever;
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

/// Shared handle every page uses to talk to the backend. All writes to
/// `RemoteState` go through here.
#[derive(Clone, PartialEq)]
pub struct RemoteController {
    pub state: Signal<RemoteState>,
    client: HomeroClient,
    settings: ClientSettings,
}

impl RemoteController {
    pub fn new(state: Signal<RemoteState>, client: HomeroClient, settings: ClientSettings) -> Self {
        Self {
            state,
            client,
            settings,
        }
    }

    pub fn client(&self) -> &HomeroClient {
        &self.client
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Fetches the backend config once. Failure leaves the defaults in place.
    pub async fn setup(&self) {
        let mut state = self.state;
        match self.client.fetch_config().await {
            Ok(config) => {
                info!("backend config: {config:?}");
                state.write().apply_config(Some(config));
            }
            Err(err) => {
                warn!("config unavailable, keeping defaults: {err}");
                state.write().apply_config(None);
            }
        }
    }

    /// Overwrites the player view from `/api/status`. Errors replace the
    /// status text and leave the icons alone.
    pub async fn refresh_status(&self) {
        let mut state = self.state;
        let result = self.client.fetch_status().await;
        if let Err(err) = &result {
            warn!("status refresh failed: {err}");
        }
        state.write().apply_status(result);
    }

    /// Sends one action or load request. Ignored while another dispatch is in
    /// flight. Gate release and cooldown arming run on every outcome.
    pub fn dispatch(&self, kind: DispatchKind) {
        let mut state = self.state;
        let Some(start) = state.write().begin_dispatch() else {
            debug!("dispatch ignored while busy: {kind:?}");
            return;
        };

        let controller = self.clone();
        // Not tied to the clicked page: navigating away must not strand the permit.
        spawn_forever(async move {
            let outcome = match kind {
                DispatchKind::Action(action) => controller.client.send_action(action).await,
                DispatchKind::Load(index) => controller.client.load_episode(index).await,
            };
            if let Err(err) = &outcome {
                warn!("dispatch {kind:?} failed: {err}");
            }

            let finish = state.write().finish_dispatch(kind, &outcome, start);
            let ticket = finish.ticket;

            let cooldown_ms = controller.settings.cooldown_ms;
            spawn_forever(async move {
                delay_ms(cooldown_ms).await;
                if state.write().gate.expire(ticket) {
                    debug!("cooldown cleared after {cooldown_ms}ms");
                }
            });

            if finish.refresh {
                delay_ms(controller.settings.refresh_delay_ms).await;
                controller.refresh_status().await;
            }
        });
    }
}
