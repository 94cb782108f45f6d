use crate::settings::ClientSettings;
use dioxus::logger::tracing::{info, Level};

pub fn init_logging(settings: &ClientSettings) {
    if let Err(err) = dioxus::logger::init(settings.log_level) {
        eprintln!("[homero] logger already initialized: {err}");
        return;
    }
    info!(
        "homero remote starting | cooldown={}ms poll={}ms refresh={}ms",
        settings.cooldown_ms, settings.poll_interval_ms, settings.refresh_delay_ms
    );
    if settings.log_level >= Level::DEBUG {
        info!("verbose request logging enabled");
    }
}
