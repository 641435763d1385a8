use dioxus::prelude::*;
use textessence::MembershipPanel;
use textessence::render::CORPORA_FIELD;

/// Checkbox table listing every corpus of the aggregate query.
///
/// Stays hidden until the first successful membership response.
#[component]
pub fn MembershipTable(
    panel: MembershipPanel,
    on_toggle: EventHandler<usize>,
    on_apply: EventHandler<MouseEvent>,
) -> Element {
    let rows = panel.rows().to_vec();

    rsx! {
        div {
            id: "sourceSelectionPanel",
            class: "source-selection-panel",
            hidden: !panel.is_visible(),
            table { class: "source-selection",
                tbody { id: "sourceSelectionTable",
                    for (index, row) in rows.into_iter().enumerate() {
                        tr { key: "{index}-{row.source}",
                            td {
                                input {
                                    r#type: "checkbox",
                                    name: "{CORPORA_FIELD}",
                                    value: "{row.source}",
                                    checked: row.checked,
                                    onchange: move |_| on_toggle.call(index),
                                }
                            }
                            td { "{row.source}" }
                        }
                    }
                }
            }
            if panel.rows().is_empty() {
                p { class: "empty-table", "No corpora are listed for this query." }
            } else {
                button {
                    class: "button",
                    r#type: "button",
                    onclick: move |e| on_apply.call(e),
                    "Apply selection"
                }
            }
        }
    }
}
