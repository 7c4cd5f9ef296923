//! Outcome types shared by the page workflows.
//!
//! A workflow function talks to the service and returns an outcome; applying
//! the outcome to the current page state is pure and yields the next state
//! plus the side effects (navigate, notify) for the view model to run.

use super::api_error::ApiError;
use super::notification::Notification;
use contracts::shared::navigation::AppRoute;
use std::future::Future;

/// Result of (re)loading a page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<S> {
    Ready(S),
    /// A prerequisite is missing; the page must not render its form
    Redirect(AppRoute),
    Failed(ApiError),
}

/// Result of a create/update/delete intent
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<S> {
    /// Form validation failed; nothing was sent
    Invalid(String),
    /// A guard forbids the action; nothing was sent
    Blocked(String),
    /// The operator declined the confirmation; nothing was sent
    Declined,
    Completed {
        failure: Option<ApiError>,
        /// Shown when the request succeeded
        notice: Option<Notification>,
        reload: Option<LoadOutcome<S>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigate(AppRoute),
    Notify(Notification),
    FormError(String),
}

/// Page state that is replaced wholesale by fresh snapshots
pub trait WorkflowState: Clone {
    type Snapshot;

    /// New data, form untouched
    fn with_snapshot(&self, snapshot: Self::Snapshot) -> Self;

    /// New data, form back to create mode
    fn reset(&self, snapshot: Self::Snapshot) -> Self;
}

pub fn apply_load<W: WorkflowState>(state: &W, outcome: LoadOutcome<W::Snapshot>) -> (W, Vec<Effect>) {
    match outcome {
        LoadOutcome::Ready(snapshot) => (state.with_snapshot(snapshot), Vec::new()),
        LoadOutcome::Redirect(route) => {
            log::info!("redirecting to {}", route.path());
            (state.clone(), vec![Effect::Navigate(route)])
        }
        LoadOutcome::Failed(error) => (
            state.clone(),
            vec![Effect::Notify(Notification::from_api_error(&error))],
        ),
    }
}

pub fn apply_mutation<W: WorkflowState>(
    state: &W,
    outcome: MutationOutcome<W::Snapshot>,
) -> (W, Vec<Effect>) {
    match outcome {
        MutationOutcome::Invalid(message) => (state.clone(), vec![Effect::FormError(message)]),
        MutationOutcome::Blocked(message) => (
            state.clone(),
            vec![Effect::Notify(Notification::warning("Atención", message))],
        ),
        MutationOutcome::Declined => (state.clone(), Vec::new()),
        MutationOutcome::Completed {
            failure,
            notice,
            reload,
        } => {
            let succeeded = failure.is_none();
            let mut effects = Vec::new();
            match failure {
                Some(error) => effects.push(Effect::Notify(Notification::from_api_error(&error))),
                None => effects.extend(notice.map(Effect::Notify)),
            }

            let next = match reload {
                Some(LoadOutcome::Ready(snapshot)) if succeeded => state.reset(snapshot),
                Some(LoadOutcome::Ready(snapshot)) => state.with_snapshot(snapshot),
                Some(LoadOutcome::Redirect(route)) => {
                    effects.push(Effect::Navigate(route));
                    state.clone()
                }
                Some(LoadOutcome::Failed(error)) => {
                    effects.push(Effect::Notify(Notification::from_api_error(&error)));
                    state.clone()
                }
                None => state.clone(),
            };
            (next, effects)
        }
    }
}

/// Issue a create/update; reload only when it succeeded
pub async fn save_then_reload<S, Save, SaveFut, Reload, ReloadFut>(
    save: Save,
    reload: Reload,
) -> MutationOutcome<S>
where
    Save: FnOnce() -> SaveFut,
    SaveFut: Future<Output = Result<(), ApiError>>,
    Reload: FnOnce() -> ReloadFut,
    ReloadFut: Future<Output = LoadOutcome<S>>,
{
    match save().await {
        Ok(()) => MutationOutcome::Completed {
            failure: None,
            notice: None,
            reload: Some(reload().await),
        },
        Err(error) => {
            log::warn!("save failed: {}", error);
            MutationOutcome::Completed {
                failure: Some(error),
                notice: None,
                reload: None,
            }
        }
    }
}

/// Confirm, delete, then reload.
///
/// A NotFound answer still reloads: the record is already gone server-side.
pub async fn delete_then_reload<S, Delete, DeleteFut, Reload, ReloadFut>(
    confirmed: bool,
    delete: Delete,
    reload: Reload,
) -> MutationOutcome<S>
where
    Delete: FnOnce() -> DeleteFut,
    DeleteFut: Future<Output = Result<(), ApiError>>,
    Reload: FnOnce() -> ReloadFut,
    ReloadFut: Future<Output = LoadOutcome<S>>,
{
    if !confirmed {
        return MutationOutcome::Declined;
    }
    match delete().await {
        Ok(()) => MutationOutcome::Completed {
            failure: None,
            notice: Some(Notification::success(
                "Eliminado",
                "El registro ha sido eliminado.",
            )),
            reload: Some(reload().await),
        },
        Err(error) if error.is_not_found() => {
            log::warn!("delete target already gone: {}", error);
            MutationOutcome::Completed {
                failure: Some(error),
                notice: None,
                reload: Some(reload().await),
            }
        }
        Err(error) => {
            log::warn!("delete failed: {}", error);
            MutationOutcome::Completed {
                failure: Some(error),
                notice: None,
                reload: None,
            }
        }
    }
}
