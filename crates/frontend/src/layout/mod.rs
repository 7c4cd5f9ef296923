pub mod header;
pub mod navigation_menu;

use leptos::prelude::*;

/// Application shell: top header above the routed page.
///
/// ```text
/// +------------------------------------------+
/// |              Header                      |
/// +------------------------------------------+
/// |              Content                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                {children()}
            </main>
        </div>
    }
}
