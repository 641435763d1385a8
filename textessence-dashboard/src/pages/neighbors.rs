use std::rc::Rc;

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use textessence::{Activation, ApiClient, MembershipPanel, MembershipTablePresenter, QueryContext};

use crate::Route;
use crate::widgets::membership_table::MembershipTable;
use crate::widgets::request_status::RequestStatus;

type Presenter = Rc<MembershipTablePresenter<ApiClient>>;

#[component]
pub fn Neighbors(query_key: String, current_corpora: String) -> Element {
    // Keyed so that every query mounts its own presenter and starts hidden
    rsx! {
        QueryMembership { key: "{query_key}", query_key, current_corpora }
    }
}

#[component]
fn QueryMembership(query_key: String, current_corpora: String) -> Element {
    let client = use_context::<ApiClient>();
    let presenter: Presenter = use_hook(|| Rc::new(MembershipTablePresenter::new(client)));
    let mut panel = use_signal(MembershipPanel::default);
    let nav = navigator();

    // Rebuilt from the route on every render
    let context = QueryContext::from_route(&query_key, &current_corpora);

    let on_activate = {
        let presenter = presenter.clone();
        let context = context.clone();
        move |evt: MouseEvent| {
            // The trigger is a link; keep the browser where it is
            evt.prevent_default();

            let presenter = presenter.clone();
            let snapshot = context.clone();
            spawn(async move {
                match presenter.on_trigger_activated(&snapshot).await {
                    Activation::Applied(next) => panel.set(next),
                    Activation::Superseded { ticket, latest } => {
                        debug!(
                            "Ignoring membership response #{} in favour of #{}",
                            ticket.get(),
                            latest.get()
                        );
                    }
                }
            });
        }
    };

    let on_toggle = {
        let presenter = presenter.clone();
        move |index: usize| panel.set(presenter.toggle(index))
    };

    let on_apply = {
        let context = context.clone();
        move |_: MouseEvent| {
            let next = context.with_corpora(panel.read().selected_corpora());
            info!(
                "Applying corpus selection [{}] to query {}",
                next.current_corpora, next.query_key
            );
            nav.push(Route::Neighbors {
                query_key: next.query_key.clone(),
                current_corpora: next.current_corpora.to_param(),
            });
        }
    };

    let current = context.current_corpora.to_string();
    let error = panel.read().error().map(str::to_string);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Nearest neighbors" }
                p { class: "query-key", "Query {query_key}" }
                if !current.is_empty() {
                    p { "Corpora: {current}" }
                }
            }

            a {
                id: "addTableButton",
                class: "button",
                href: "#",
                onclick: on_activate,
                "Choose corpora"
            }

            RequestStatus { message: error }

            MembershipTable { panel: panel(), on_toggle, on_apply }
        }
    }
}
