use dioxus::prelude::*;
use textessence::ApiClient;

mod pages;
mod widgets;

use pages::Neighbors;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/neighbors/:query_key?:current_corpora")]
    Neighbors { query_key: String, current_corpora: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Home page
#[component]
fn Home() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Nearest neighbors" }
            }
            p { "Open a query from the neighbor tables to choose which corpora it aggregates over." }
        }
    }
}

/// Shared navbar component.
#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { to: Route::Home {}, "TextEssence" }
        }
        Outlet::<Route> {}
    }
}
