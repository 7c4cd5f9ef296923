use crate::routes::routes::AppRoutes;
use crate::shared::notification::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One notification slot shared by every page
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}
