use leptos::prelude::*;

fn count_label(count: usize) -> String {
    match count {
        1 => "1 registro".to_string(),
        n => format!("{} registros", n),
    }
}

/// Page title with an optional record counter; children render as actions
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: Option<String>,

    /// Number of loaded records, hidden while `None`
    #[prop(optional, into)]
    count: MaybeProp<usize>,

    children: Children,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    {move || count.get().map(|n| view! {
                        <span class="page-header__count">{count_label(n)}</span>
                    })}
                </h1>
                {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <div class="page-header__actions">{children()}</div>
        </header>
    }
}
