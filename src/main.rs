use dioxus::prelude::*;

mod api;
mod components;
mod diagnostics;
mod remote;
mod settings;
mod utils;

use components::AppView;
use settings::ClientSettings;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    let settings = ClientSettings::load();
    diagnostics::init_logging(&settings);
    dioxus::LaunchBuilder::new()
        .with_context(settings)
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#f6c90e" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Homero" }
        document::Title { "Homero Remote" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
