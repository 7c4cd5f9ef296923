//! Dialog frame of the notification host.

use super::icons::icon;
use super::notification::NotificationKind;
use leptos::ev;
use leptos::prelude::*;

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "modal modal--success",
        NotificationKind::Warning => "modal modal--warning",
        NotificationKind::Error => "modal modal--error",
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "check",
        NotificationKind::Warning | NotificationKind::Error => "alert",
    }
}

/// Centered dialog over a dimmed overlay with a single "Aceptar" action.
///
/// Escape, the close button, "Aceptar" and a click on the overlay all call
/// `on_close`. The keydown listener lives as long as the dialog.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    kind: NotificationKind,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=kind_class(kind)
                role="alertdialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <span class="modal-icon">{icon(kind_icon(kind))}</span>
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-footer">
                    <button class="button button--primary" on:click=move |_| on_close.run(())>
                        "Aceptar"
                    </button>
                </div>
            </div>
        </div>
    }
}
