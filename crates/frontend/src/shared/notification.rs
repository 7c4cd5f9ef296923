//! Dismissable modal notifications.
//!
//! Pages push a [`Notification`] into the [`NotificationService`] found in
//! context; [`NotificationHost`] renders the current one until dismissed.

use super::api_error::ApiError;
use super::modal::Modal;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    /// NotFound shows as a warning titled "No encontrado", everything else as "Error"
    pub fn from_api_error(error: &ApiError) -> Self {
        match error {
            ApiError::NotFound { message } => Self::warning("No encontrado", message.clone()),
            ApiError::Generic { message } => {
                Self::new(NotificationKind::Error, "Error", message.clone())
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// A newer notification replaces the one on screen
    pub fn show(&self, notification: Notification) {
        log::debug!("notification: {} - {}", notification.title, notification.message);
        self.current.set(Some(notification));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();
    let on_close = Callback::new(move |_| notifications.dismiss());

    view! {
        {move || notifications.current().map(|n| view! {
            <Modal title=n.title.clone() kind=n.kind on_close=on_close>
                <p class="notification__message">{n.message.clone()}</p>
            </Modal>
        })}
    }
}
