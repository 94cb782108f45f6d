use crate::api::{group_by_season, ApiError, Episode};
use crate::components::RemoteController;
use crate::remote::DispatchKind;
use dioxus::prelude::*;

#[component]
pub fn EpisodesView() -> Element {
    let controller = use_context::<RemoteController>();
    let snapshot = (controller.state)();
    let disabled = !snapshot.controls_enabled();

    let catalogue = {
        let controller = controller.clone();
        use_resource(move || {
            let controller = controller.clone();
            async move { controller.client().fetch_episodes().await }
        })
    };

    let body = match &*catalogue.read() {
        None => rsx! {
            p { class: "muted", "Loading episodes…" }
        },
        Some(Ok(episodes)) if episodes.is_empty() => rsx! {
            p { class: "muted", "No episodes available" }
            ManualLoad { disabled }
        },
        Some(Ok(episodes)) => {
            let seasons = group_by_season(episodes);
            rsx! {
                for (position, (season, list)) in seasons.into_iter().enumerate() {
                    SeasonBlock {
                        key: "{position}",
                        season,
                        episodes: list,
                        disabled,
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            p { class: "muted", "{catalogue_unavailable_message(err)}" }
            ManualLoad { disabled }
        },
    };

    rsx! {
        section { class: "episodes",
            h1 { class: "page-title", "Episodes" }
            if let Some(message) = snapshot.message.clone() {
                p { class: "message", "{message}" }
            }
            {body}
        }
    }
}

/// A server without a catalogue endpoint is the normal case, not a failure.
fn catalogue_unavailable_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(404) | ApiError::Status(405) => {
            "This server does not publish an episode list. Enter an episode index to load it."
                .to_string()
        }
        other => format!("Episode list unavailable ({other}). Enter an episode index to load it."),
    }
}

#[component]
fn SeasonBlock(season: u32, episodes: Vec<Episode>, disabled: bool) -> Element {
    let controller = use_context::<RemoteController>();

    rsx! {
        div { class: "season",
            h2 { class: "season-title", "Season {season}" }
            div { class: "episode-list",
                for episode in episodes {
                    button {
                        key: "{episode.index}",
                        class: "btnLoad",
                        r#type: "button",
                        "data-index": "{episode.index}",
                        disabled,
                        onclick: {
                            let controller = controller.clone();
                            let index = episode.index;
                            move |_| controller.dispatch(DispatchKind::Load(index))
                        },
                        "{episode.display_label()}"
                    }
                }
            }
        }
    }
}

/// Fallback when the catalogue endpoint is unavailable.
#[component]
fn ManualLoad(disabled: bool) -> Element {
    let controller = use_context::<RemoteController>();
    let mut index_input = use_signal(String::new);
    let parsed = index_input().trim().parse::<u32>().ok();

    rsx! {
        div { class: "manual-load",
            input {
                r#type: "number",
                min: "0",
                placeholder: "Episode index",
                value: "{index_input}",
                oninput: move |evt| index_input.set(evt.value()),
            }
            button {
                class: "btnLoad",
                r#type: "button",
                "data-index": parsed.map(|i| i.to_string()).unwrap_or_default(),
                disabled: disabled || parsed.is_none(),
                onclick: move |_| {
                    if let Some(index) = parsed {
                        controller.dispatch(DispatchKind::Load(index));
                    }
                },
                "Load"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_catalogue_endpoint_reads_as_expected() {
        let message = catalogue_unavailable_message(&ApiError::Status(404));
        assert!(!message.contains("404"));
        assert!(message.contains("episode index"));
    }

    #[test]
    fn other_failures_keep_their_cause() {
        let message =
            catalogue_unavailable_message(&ApiError::Transport("connection refused".into()));
        assert!(message.contains("connection refused"));
    }
}
