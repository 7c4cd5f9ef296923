//! Reactive side of a page: holds the workflow state in signals, runs
//! workflow futures with `spawn_local` and executes the resulting effects.

use super::notification::{use_notifications, NotificationService};
use super::workflow::{apply_load, apply_mutation, Effect as PageEffect, LoadOutcome, MutationOutcome, WorkflowState};
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::future::Future;

pub struct PageController<W: WorkflowState + Send + Sync + 'static> {
    pub state: RwSignal<W>,
    /// A mutating request is in flight
    pub pending: RwSignal<bool>,
    /// Inline message of the last rejected form
    pub form_error: RwSignal<Option<String>>,
    pub redirect: RwSignal<Option<AppRoute>>,
    notifications: NotificationService,
}

impl<W: WorkflowState + Send + Sync + 'static> Clone for PageController<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: WorkflowState + Send + Sync + 'static> Copy for PageController<W> {}

impl<W> PageController<W>
where
    W: WorkflowState + Send + Sync + 'static,
    W::Snapshot: 'static,
{
    pub fn new(initial: W) -> Self {
        Self {
            state: RwSignal::new(initial),
            pending: RwSignal::new(false),
            form_error: RwSignal::new(None),
            redirect: RwSignal::new(None),
            notifications: use_notifications(),
        }
    }

    /// Skipped while any request of the page is in flight: a mutation
    /// reloads on its own, and a second load could land after it
    pub fn run_load<F>(&self, load: F)
    where
        F: Future<Output = LoadOutcome<W::Snapshot>> + 'static,
    {
        if !may_start(self.pending.get_untracked(), "load") {
            return;
        }
        let this = *self;
        this.pending.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = load.await;
            let (next, effects) = apply_load(&this.state.get_untracked(), outcome);
            this.commit(next, effects);
            this.pending.set(false);
        });
    }

    /// Runs one mutation at a time; a second click while pending is ignored
    pub fn run_mutation<F>(&self, mutation: F)
    where
        F: Future<Output = MutationOutcome<W::Snapshot>> + 'static,
    {
        if !may_start(self.pending.get_untracked(), "mutation") {
            return;
        }
        let this = *self;
        this.pending.set(true);
        this.form_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = mutation.await;
            let (next, effects) = apply_mutation(&this.state.get_untracked(), outcome);
            this.commit(next, effects);
            this.pending.set(false);
        });
    }

    /// Local, request-free state change (form edits, paging)
    pub fn update(&self, f: impl FnOnce(&W) -> W) {
        let next = f(&self.state.get_untracked());
        self.state.set(next);
    }

    fn commit(&self, next: W, effects: Vec<PageEffect>) {
        self.state.set(next);
        for effect in effects {
            match effect {
                PageEffect::Navigate(route) => self.redirect.set(Some(route)),
                PageEffect::Notify(notification) => self.notifications.show(notification),
                PageEffect::FormError(message) => self.form_error.set(Some(message)),
            }
        }
    }
}

/// One request per page at a time
fn may_start(pending: bool, kind: &str) -> bool {
    if pending {
        log::debug!("{} ignored: request already pending", kind);
    }
    !pending
}

/// Follows the controller's redirect signal with the router
pub fn follow_redirects(redirect: RwSignal<Option<AppRoute>>) {
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(route) = redirect.get() {
            redirect.set(None);
            navigate(&route.path(), Default::default());
        }
    });
}
