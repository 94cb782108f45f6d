//! Defines the application routes.

use crate::components::views::{EpisodesView, RemoteView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        RemoteView {},
        #[route("/episodes")]
        EpisodesView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::RemoteView {} => "Remote",
        AppView::EpisodesView {} => "Episodes",
    }
}
