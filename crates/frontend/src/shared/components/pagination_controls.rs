use crate::shared::icons::icon;
use leptos::prelude::*;

/// Paging bar for server-paged tables.
///
/// Pages are 1-based, matching the search endpoint.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total number of records across pages
    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    page_size: Signal<u32>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,

    page_size_options: Vec<u32>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get().max(1),
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                type="button"
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=is_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
