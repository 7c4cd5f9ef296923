use crate::shared::icons::icon;
use leptos::prelude::*;

/// "11-20 de 34" for a 0-indexed page; "0 de 0" when the list is empty
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 || page_size == 0 {
        return "0 de 0".to_string();
    }
    let first = (page * page_size).min(total - 1) + 1;
    let last = (first - 1 + page_size).min(total);
    format!("{}-{} de {}", first, last, total)
}

/// Client-side pager over a fully loaded list.
///
/// Hidden while everything fits on one page. Requests outside
/// `0..total_pages` are never emitted.
#[component]
pub fn PaginationControls(
    /// 0-indexed
    #[prop(into)]
    current_page: Signal<usize>,
    page_size: usize,
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let total_pages = move || total_count.get().div_ceil(page_size.max(1));
    let go = move |target: Option<usize>| {
        if let Some(page) = target.filter(|p| *p < total_pages()) {
            if page != current_page.get_untracked() {
                on_page_change.run(page);
            }
        }
    };
    let nav_button = move |name: &'static str, title: &'static str, target: fn(usize, usize) -> Option<usize>| {
        let disabled = move || {
            let page = current_page.get();
            target(page, total_pages()).map_or(true, |p| p == page)
        };
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=disabled
                on:click=move |_| go(target(current_page.get_untracked(), total_pages()))
            >
                {icon(name)}
            </button>
        }
    };

    view! {
        <Show when=move || { total_pages() > 1 }>
            <nav class="pagination-controls">
                {nav_button("chevrons-left", "Primera página", |_, _| Some(0))}
                {nav_button("chevron-left", "Página anterior", |page, _| page.checked_sub(1))}
                <span class="pagination-info">
                    {move || range_label(current_page.get(), page_size, total_count.get())}
                </span>
                {nav_button("chevron-right", "Página siguiente", |page, total| {
                    Some(page + 1).filter(|p| *p < total)
                })}
                {nav_button("chevrons-right", "Última página", |_, total| total.checked_sub(1))}
            </nav>
        </Show>
    }
}
