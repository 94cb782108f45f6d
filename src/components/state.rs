use crate::api::{ActionResponse, ApiError, BackendConfig, PlayerStatus};
use crate::remote::{
    ControlGate, CooldownTicket, DispatchKind, DispatchPermit, PlayerView, Reconciliation,
};

pub const STATUS_CONNECTING: &str = "Connecting…";
pub const STATUS_DRY_RUN: &str = "DRY RUN MODE - No commands will be sent to MPV";
pub const STATUS_READY: &str = "Ready to send commands to MPV";

/// Everything the pages render, owned by the layout for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteState {
    /// `None` until setup succeeds; stays `None` if the config endpoint fails.
    pub config: Option<BackendConfig>,
    pub view: PlayerView,
    pub gate: ControlGate,
    /// Raw body of the last dispatch, shown in the diagnostic panel.
    pub last_response: Option<String>,
    pub message: Option<String>,
    /// Bumped every time a status fetch writes the view.
    status_generation: u64,
}

/// Handed from `begin_dispatch` to `finish_dispatch`.
#[derive(Debug)]
pub struct DispatchStart {
    permit: DispatchPermit,
    status_generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchFinish {
    pub ticket: CooldownTicket,
    pub refresh: bool,
}

impl Default for RemoteState {
    fn default() -> Self {
        Self {
            config: None,
            view: PlayerView::with_status_line(STATUS_CONNECTING),
            gate: ControlGate::default(),
            last_response: None,
            message: None,
            status_generation: 0,
        }
    }
}

impl RemoteState {
    /// Records the backend config. The setup line is only written while no
    /// status has been received yet.
    pub fn apply_config(&mut self, config: Option<BackendConfig>) {
        if self.status_generation == 0 {
            let status_line = match &config {
                Some(config) if config.dry_run => STATUS_DRY_RUN,
                _ => STATUS_READY,
            };
            self.view.status_line = status_line.to_string();
        }
        self.config = config;
    }

    pub fn apply_status(&mut self, result: Result<PlayerStatus, ApiError>) {
        self.view = match result {
            Ok(status) => self.view.apply_status(&status),
            Err(err) => self.view.with_error(err.to_string()),
        };
        self.status_generation = self.status_generation.wrapping_add(1);
    }

    pub fn show_diagnostics(&self) -> bool {
        self.config.as_ref().is_some_and(|config| config.dry_run)
    }

    pub fn controls_enabled(&self) -> bool {
        self.gate.controls_enabled()
    }

    /// `None` while another dispatch is in flight.
    pub fn begin_dispatch(&mut self) -> Option<DispatchStart> {
        let permit = self.gate.try_acquire()?;
        Some(DispatchStart {
            permit,
            status_generation: self.status_generation,
        })
    }

    /// Applies the outcome, arms the cooldown and frees the in-flight slot.
    /// Runs the same way for every outcome. When a status fetch landed while
    /// the request was in flight, the view already reflects the server and no
    /// optimistic toggle is applied on top of it.
    pub fn finish_dispatch(
        &mut self,
        kind: DispatchKind,
        outcome: &Result<ActionResponse, ApiError>,
        start: DispatchStart,
    ) -> DispatchFinish {
        let mut reconciliation = Reconciliation::from_outcome(kind, outcome, &self.view);
        if start.status_generation != self.status_generation {
            reconciliation.view = self.view.clone();
        }
        let refresh = reconciliation.refresh;
        self.apply_reconciliation(reconciliation);
        let ticket = self.gate.arm_cooldown();
        self.gate.release(start.permit);
        DispatchFinish { ticket, refresh }
    }

    fn apply_reconciliation(&mut self, reconciliation: Reconciliation) {
        self.last_response = Some(reconciliation.diagnostic);
        self.message = reconciliation.message;
        self.view = reconciliation.view;
    }
}
