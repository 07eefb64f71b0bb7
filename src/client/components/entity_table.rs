use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight, FaPen, FaTrash};
use dioxus_free_icons::Icon;

use crate::listing::ListingRow;

/// Table of one listing page with pagination controls
#[component]
pub fn EntityTable(
    headers: Vec<&'static str>,
    rows: Vec<ListingRow>,
    page: usize,
    page_count: usize,
    on_page: EventHandler<usize>,
    on_edit: Option<EventHandler<i64>>,
    on_delete: Option<EventHandler<i64>>,
) -> Element {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let colspan = headers.len() + 1;

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        for header in headers.iter() {
                            th { "{header}" }
                        }
                        if has_actions {
                            th {}
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: "{colspan}", class: "text-center text-gray-500",
                                "Nothing to show yet."
                            }
                        }
                    }
                    for row in rows.iter().cloned() {
                        tr { key: "{row.key}",
                            for cell in row.cells.iter() {
                                td { "{cell}" }
                            }
                            if has_actions {
                                td { class: "flex gap-1",
                                    if let Some(on_edit) = on_edit {
                                        button {
                                            class: "btn btn-ghost btn-sm",
                                            onclick: move |_| on_edit.call(row.key),
                                            Icon { width: 14, height: 14, icon: FaPen }
                                        }
                                    }
                                    if let Some(on_delete) = on_delete {
                                        button {
                                            class: "btn btn-ghost btn-sm",
                                            onclick: move |_| on_delete.call(row.key),
                                            Icon { width: 14, height: 14, icon: FaTrash }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        div { class: "flex justify-center items-center gap-4 mt-4",
            button {
                class: "btn btn-outline btn-sm",
                disabled: page <= 1,
                onclick: move |_| on_page.call(page.saturating_sub(1)),
                Icon { width: 12, height: 12, icon: FaChevronLeft }
            }
            span { "Page {page} of {page_count}" }
            button {
                class: "btn btn-outline btn-sm",
                disabled: page >= page_count,
                onclick: move |_| on_page.call(page + 1),
                Icon { width: 12, height: 12, icon: FaChevronRight }
            }
        }
    )
}
