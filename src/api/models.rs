use serde::{Deserialize, Serialize};

/// Backend configuration as reported by `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub mpv_socket: Option<String>,
    #[serde(default)]
    pub episodes_file: Option<String>,
}

/// Player status as reported by `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStatus {
    #[serde(default)]
    pub pause: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub media_title: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/action` and `POST /api/load`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionRequest {
    Action { action: String },
    Load { index: u32 },
}

/// Raw backend reply to a dispatched request. The body is kept verbatim so the
/// diagnostic panel can echo it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ActionResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn is_rejected(&self) -> bool {
        !(200..300).contains(&self.status)
    }

    /// Server-side throttle window, only when strictly positive.
    pub fn cooldown_ms(&self) -> Option<u64> {
        let value = self.body.as_object()?.get("cooldown_ms")?;
        let millis = match value {
            serde_json::Value::Number(number) => number
                .as_u64()
                .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.ceil().max(0.0) as u64)),
            serde_json::Value::String(text) => text.trim().parse::<u64>().ok(),
            _ => None,
        }?;
        (millis > 0).then_some(millis)
    }

    /// Top-level `error` string. mpv answers `"success"` in that field, which
    /// is not an error.
    pub fn error(&self) -> Option<&str> {
        self.body
            .as_object()?
            .get("error")?
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty() && *text != "success")
    }

    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub index: u32,
    pub season: u32,
    pub episode: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Episode {
    pub fn display_label(&self) -> String {
        if let Some(label) = self.label.as_deref().map(str::trim) {
            if !label.is_empty() {
                return label.to_string();
            }
        }
        let code = format!("S{:02}E{:02}", self.season, self.episode);
        let title = self.title.trim();
        if title.is_empty() {
            code
        } else {
            format!("{code} - {title}")
        }
    }
}

/// Consecutive runs of episodes sharing a season, in catalogue order.
pub fn group_by_season(episodes: &[Episode]) -> Vec<(u32, Vec<Episode>)> {
    let mut groups: Vec<(u32, Vec<Episode>)> = Vec::new();
    for episode in episodes {
        match groups.last_mut() {
            Some((season, list)) if *season == episode.season => list.push(episode.clone()),
            _ => groups.push((episode.season, vec![episode.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn episode(index: u32, season: u32, number: u32, title: &str) -> Episode {
        Episode {
            index,
            season,
            episode: number,
            title: title.to_string(),
            label: None,
        }
    }

    #[test]
    fn status_decodes_without_optional_error() {
        let status: PlayerStatus =
            serde_json::from_value(json!({"pause": true, "mute": false, "media_title": "X"}))
                .unwrap();
        assert!(status.pause);
        assert!(!status.mute);
        assert_eq!(status.media_title, "X");
        assert_eq!(status.error, None);
    }

    #[test]
    fn config_tolerates_extra_and_missing_fields() {
        let config: BackendConfig = serde_json::from_value(json!({
            "dry_run": true,
            "mpv_socket": "/run/mpv/socket",
            "unexpected": 1
        }))
        .unwrap();
        assert!(config.dry_run);
        assert_eq!(config.mpv_socket.as_deref(), Some("/run/mpv/socket"));
        assert_eq!(config.episodes_file, None);

        let empty: BackendConfig = serde_json::from_value(json!({})).unwrap();
        assert!(!empty.dry_run);
    }

    #[test]
    fn requests_serialize_to_wire_shapes() {
        let action = ActionRequest::Action {
            action: "toggle_pause".to_string(),
        };
        assert_eq!(serde_json::to_value(action).unwrap(), json!({"action": "toggle_pause"}));
        let load = ActionRequest::Load { index: 7 };
        assert_eq!(serde_json::to_value(load).unwrap(), json!({"index": 7}));
    }

    #[test]
    fn cooldown_only_counts_when_positive() {
        assert_eq!(ActionResponse::new(200, json!({"cooldown_ms": 500})).cooldown_ms(), Some(500));
        assert_eq!(ActionResponse::new(200, json!({"cooldown_ms": 0})).cooldown_ms(), None);
        assert_eq!(ActionResponse::new(200, json!({"cooldown_ms": -3})).cooldown_ms(), None);
        assert_eq!(ActionResponse::new(200, json!({"cooldown_ms": 12.2})).cooldown_ms(), Some(13));
        assert_eq!(ActionResponse::new(200, json!([1, 2])).cooldown_ms(), None);
    }

    #[test]
    fn rejection_reads_status_and_error_field() {
        let rejected = ActionResponse::new(400, json!({"error": "unknown_action", "action": "x"}));
        assert!(rejected.is_rejected());
        assert_eq!(rejected.error(), Some("unknown_action"));

        let ok = ActionResponse::new(200, json!({"error": "", "data": null}));
        assert!(!ok.is_rejected());
        assert_eq!(ok.error(), None);

        let mpv_ok = ActionResponse::new(200, json!({"error": "success", "request_id": 100}));
        assert_eq!(mpv_ok.error(), None);
    }

    #[test]
    fn pretty_uses_indented_json() {
        let response = ActionResponse::new(200, json!({"dry_run": true}));
        assert_eq!(response.pretty(), "{\n  \"dry_run\": true\n}");
    }

    #[test]
    fn labels_fall_back_to_season_episode_code() {
        assert_eq!(episode(0, 1, 2, "").display_label(), "S01E02");
        assert_eq!(episode(0, 10, 3, "Homer Alone").display_label(), "S10E03 - Homer Alone");
        let mut labelled = episode(0, 1, 1, "ignored");
        labelled.label = Some("Custom".to_string());
        assert_eq!(labelled.display_label(), "Custom");
    }

    #[test]
    fn grouping_keeps_catalogue_order() {
        let episodes = vec![
            episode(0, 1, 1, "a"),
            episode(1, 1, 2, "b"),
            episode(2, 2, 1, "c"),
            episode(3, 1, 3, "d"),
        ];
        let groups = group_by_season(&episodes);
        let seasons: Vec<u32> = groups.iter().map(|(season, _)| *season).collect();
        assert_eq!(seasons, vec![1, 2, 1]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[2].1[0].index, 3);
    }
}
