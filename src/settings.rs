use dioxus::logger::tracing::Level;

pub const DEFAULT_COOLDOWN_MS: u32 = 350;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2000;
pub const DEFAULT_REFRESH_DELAY_MS: u32 = 250;

/// Client tunables, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub cooldown_ms: u32,
    pub poll_interval_ms: u32,
    pub refresh_delay_ms: u32,
    pub log_level: Level,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            log_level: Level::INFO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    CooldownMs,
    PollIntervalMs,
    RefreshDelayMs,
    LogLevel,
}

impl SettingKey {
    const ALL: [SettingKey; 4] = [
        SettingKey::CooldownMs,
        SettingKey::PollIntervalMs,
        SettingKey::RefreshDelayMs,
        SettingKey::LogLevel,
    ];

    /// Property name on the `window.HOMERO` object.
    pub fn js_name(self) -> &'static str {
        match self {
            Self::CooldownMs => "cooldownMs",
            Self::PollIntervalMs => "pollIntervalMs",
            Self::RefreshDelayMs => "refreshDelayMs",
            Self::LogLevel => "logLevel",
        }
    }

    pub fn env_name(self) -> &'static str {
        match self {
            Self::CooldownMs => "HOMERO_COOLDOWN_MS",
            Self::PollIntervalMs => "HOMERO_POLL_INTERVAL_MS",
            Self::RefreshDelayMs => "HOMERO_REFRESH_DELAY_MS",
            Self::LogLevel => "HOMERO_LOG_LEVEL",
        }
    }
}

fn parse_millis(raw: &str) -> Option<u32> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 1.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value.round() as u32)
}

impl ClientSettings {
    /// Applies overrides from `lookup`; anything missing or unparsable keeps
    /// its default.
    pub fn from_lookup(lookup: impl Fn(SettingKey) -> Option<String>) -> Self {
        let mut settings = Self::default();
        for key in SettingKey::ALL {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match key {
                SettingKey::CooldownMs => {
                    if let Some(ms) = parse_millis(&raw) {
                        settings.cooldown_ms = ms;
                    }
                }
                SettingKey::PollIntervalMs => {
                    if let Some(ms) = parse_millis(&raw) {
                        settings.poll_interval_ms = ms;
                    }
                }
                SettingKey::RefreshDelayMs => {
                    if let Some(ms) = parse_millis(&raw) {
                        settings.refresh_delay_ms = ms;
                    }
                }
                SettingKey::LogLevel => {
                    if let Ok(level) = raw.trim().parse::<Level>() {
                        settings.log_level = level;
                    }
                }
            }
        }
        settings
    }

    /// Reads overrides from the optional `window.HOMERO` object set by the page
    /// before the app boots.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use wasm_bindgen::JsValue;

        let global = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("HOMERO")).ok())
            .filter(|value| value.is_object());
        let Some(global) = global else {
            return Self::default();
        };
        Self::from_lookup(|key| {
            let value = js_sys::Reflect::get(&global, &JsValue::from_str(key.js_name())).ok()?;
            value
                .as_f64()
                .map(|number| number.to_string())
                .or_else(|| value.as_string())
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key.env_name()).ok())
    }
}
