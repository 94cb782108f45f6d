use crate::components::{view_label, AppView};
use dioxus::prelude::*;

/// Top navigation between the remote and the episode list.
#[component]
pub fn NavBar(dry_run: bool) -> Element {
    let current = use_route::<AppView>();

    rsx! {
        nav { class: "nav-bar",
            div { class: "brand",
                span { class: "brand-mark", "H" }
                span { class: "brand-name", "Homero" }
                if dry_run {
                    span { class: "badge", "DRY RUN" }
                }
            }
            div { class: "nav-links",
                NavItem {
                    target: AppView::RemoteView {},
                    active: matches!(current, AppView::RemoteView {}),
                }
                NavItem {
                    target: AppView::EpisodesView {},
                    active: matches!(current, AppView::EpisodesView {}),
                }
            }
        }
    }
}

#[component]
fn NavItem(target: AppView, active: bool) -> Element {
    let label = view_label(&target);
    let class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        Link { class: "{class}", to: target.clone(), "{label}" }
    }
}
