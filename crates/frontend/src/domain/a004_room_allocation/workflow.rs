//! Capacity-gated allocation flow of the hotel page.
//!
//! The page state is one [`RoomAllocationState`]; every load or mutation
//! produces a fresh [`RoomAllocationSnapshot`] from the service and the
//! capacity guard is recomputed from it, never adjusted in place.

use crate::shared::service::HotelService;
use crate::shared::workflow::{
    delete_then_reload, save_then_reload, LoadOutcome, MutationOutcome, WorkflowState,
};
use contracts::domain::common::find_by_id;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId};
use contracts::domain::a002_accommodation::aggregate::{Accommodation, AccommodationId};
use contracts::domain::a003_room_type::aggregate::{RoomType, RoomTypeId};
use contracts::domain::a004_room_allocation::aggregate::{RoomAllocation, RoomAllocationId};
use contracts::domain::a004_room_allocation::capacity::CapacityGuard;
use contracts::domain::a004_room_allocation::form::RoomAllocationForm;
use contracts::shared::navigation::redirect_after_allocation_load;

pub const CAPACITY_REACHED_MESSAGE: &str =
    "Ya se ha alcanzado el número máximo de habitaciones permitidas para este hotel.";

const NOT_LOADED_MESSAGE: &str = "Los datos del hotel aún no se han cargado";

#[derive(Debug, Clone, PartialEq)]
pub struct RoomAllocationSnapshot {
    pub hotel: Hotel,
    pub allocations: Vec<RoomAllocation>,
    pub room_types: Vec<RoomType>,
    pub guard: CapacityGuard,
}

impl RoomAllocationSnapshot {
    pub fn new(hotel: Hotel, allocations: Vec<RoomAllocation>, room_types: Vec<RoomType>) -> Self {
        let guard = CapacityGuard::evaluate(&hotel, &allocations);
        Self {
            hotel,
            allocations,
            room_types,
            guard,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomAllocationState {
    /// `None` until the first successful load
    pub snapshot: Option<RoomAllocationSnapshot>,
    pub form: RoomAllocationForm,
}

impl RoomAllocationState {
    /// Only a `Ready` load fills the snapshot; the form renders after that
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn room_types(&self) -> &[RoomType] {
        self.snapshot
            .as_ref()
            .map(|s| s.room_types.as_slice())
            .unwrap_or_default()
    }

    pub fn allocations(&self) -> &[RoomAllocation] {
        self.snapshot
            .as_ref()
            .map(|s| s.allocations.as_slice())
            .unwrap_or_default()
    }

    pub fn capacity_reached(&self) -> bool {
        self.snapshot
            .as_ref()
            .map(|s| s.guard.is_reached())
            .unwrap_or(false)
    }

    /// Create needs loaded data and free capacity; edit only loaded data
    pub fn can_submit(&self) -> bool {
        match (&self.snapshot, self.form.is_edit_mode()) {
            (None, _) => false,
            (Some(_), true) => true,
            (Some(snapshot), false) => !snapshot.guard.is_reached(),
        }
    }

    pub fn options(&self) -> Vec<Accommodation> {
        self.form.options(self.room_types())
    }

    pub fn with_quantity(&self, quantity: String) -> Self {
        let mut next = self.clone();
        next.form.quantity = quantity;
        next
    }

    pub fn select_room_type(&self, room_type_id: Option<RoomTypeId>) -> Self {
        let mut next = self.clone();
        let room_types = self.room_types();
        next.form.select_room_type(room_type_id, room_types);
        next
    }

    pub fn select_accommodation(&self, accommodation_id: Option<AccommodationId>) -> Self {
        let mut next = self.clone();
        next.form.accommodation_id = accommodation_id;
        next
    }

    /// Unknown ids leave the state untouched
    pub fn begin_edit(&self, id: RoomAllocationId) -> Self {
        match find_by_id(self.allocations(), id) {
            Some(allocation) => Self {
                snapshot: self.snapshot.clone(),
                form: RoomAllocationForm::from_allocation(allocation),
            },
            None => self.clone(),
        }
    }

    pub fn cancel_edit(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            form: RoomAllocationForm::default(),
        }
    }
}

impl WorkflowState for RoomAllocationState {
    type Snapshot = RoomAllocationSnapshot;

    fn with_snapshot(&self, snapshot: RoomAllocationSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            form: self.form.clone(),
        }
    }

    fn reset(&self, snapshot: RoomAllocationSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            form: RoomAllocationForm::default(),
        }
    }
}

/// Hotel, allocations and room types fetched concurrently
pub async fn load<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
) -> LoadOutcome<RoomAllocationSnapshot> {
    log::debug!("loading room allocations of hotel {}", hotel_id);
    let (hotel, allocations, room_types) = futures::join!(
        service.get_hotel(hotel_id),
        service.list_room_allocations(hotel_id),
        service.list_room_types(hotel_id),
    );
    let (hotel, allocations, room_types) = match (hotel, allocations, room_types) {
        (Ok(h), Ok(a), Ok(r)) => (h, a, r),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            log::warn!("loading hotel {} failed: {}", hotel_id, e);
            return LoadOutcome::Failed(e);
        }
    };
    if let Some(route) = redirect_after_allocation_load(hotel_id, room_types.len()) {
        return LoadOutcome::Redirect(route);
    }
    LoadOutcome::Ready(RoomAllocationSnapshot::new(hotel, allocations, room_types))
}

/// Create or update depending on the form's edit selection
pub async fn submit<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
    state: &RoomAllocationState,
) -> MutationOutcome<RoomAllocationSnapshot> {
    if state.snapshot.is_none() {
        return MutationOutcome::Blocked(NOT_LOADED_MESSAGE.to_string());
    }
    if !state.can_submit() {
        return MutationOutcome::Blocked(CAPACITY_REACHED_MESSAGE.to_string());
    }
    let payload = match state.form.to_payload(state.room_types()) {
        Ok(payload) => payload,
        Err(message) => return MutationOutcome::Invalid(message),
    };
    let editing = state.form.editing;
    save_then_reload(
        move || async move {
            match editing {
                Some(id) => service.update_room_allocation(hotel_id, id, &payload).await,
                None => service.create_room_allocation(hotel_id, &payload).await,
            }
        },
        move || load(service, hotel_id),
    )
    .await
}

pub async fn remove<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
    id: RoomAllocationId,
    confirmed: bool,
) -> MutationOutcome<RoomAllocationSnapshot> {
    delete_then_reload(
        confirmed,
        move || service.delete_room_allocation(hotel_id, id),
        move || load(service, hotel_id),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::ApiError;
    use crate::shared::notification::NotificationKind;
    use crate::shared::testing::InMemoryHotelService;
    use crate::shared::workflow::{apply_load, apply_mutation, Effect};
    use contracts::shared::navigation::AppRoute;
    use futures::executor::block_on;

    const HOTEL: HotelId = HotelId(1);

    /// Hotel 1 with one room type (10) allowing accommodations 2 and 3
    fn service(capacity: u32) -> InMemoryHotelService {
        InMemoryHotelService::new()
            .with_hotel(1, capacity)
            .with_accommodation(1, 2, "Sencilla")
            .with_accommodation(1, 3, "Doble")
            .with_accommodation(1, 4, "Triple")
            .with_room_type(1, 10, &[2, 3])
    }

    fn loaded(service: &InMemoryHotelService) -> RoomAllocationState {
        let outcome = block_on(load(service, HOTEL));
        let (state, effects) = apply_load(&RoomAllocationState::default(), outcome);
        assert!(effects.is_empty(), "unexpected effects: {:?}", effects);
        state
    }

    fn filled(state: &RoomAllocationState, quantity: &str) -> RoomAllocationState {
        state
            .with_quantity(quantity.to_string())
            .select_room_type(Some(RoomTypeId(10)))
            .select_accommodation(Some(AccommodationId(2)))
    }

    fn submit_and_apply(
        service: &InMemoryHotelService,
        state: &RoomAllocationState,
    ) -> (RoomAllocationState, Vec<Effect>) {
        apply_mutation(state, block_on(submit(service, HOTEL, state)))
    }

    #[test]
    fn test_load_computes_guard_from_quantities() {
        let service = service(5)
            .with_allocation(1, 20, 3, 10, 2)
            .with_allocation(1, 21, 2, 10, 3);
        let state = loaded(&service);
        let snapshot = state.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.guard.provisioned, 5);
        assert!(state.capacity_reached());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_empty_allocation_list_is_success() {
        let state = loaded(&service(3));
        assert!(state.allocations().is_empty());
        assert!(!state.capacity_reached());
        assert!(state.can_submit());
    }

    #[test]
    fn test_load_without_room_types_redirects() {
        let service = InMemoryHotelService::new().with_hotel(1, 3);
        let outcome = block_on(load(&service, HOTEL));
        assert_eq!(outcome, LoadOutcome::Redirect(AppRoute::RoomTypes(HOTEL)));

        let (state, effects) = apply_load(&RoomAllocationState::default(), outcome);
        assert!(state.snapshot.is_none());
        assert!(!state.is_loaded());
        assert_eq!(effects, vec![Effect::Navigate(AppRoute::RoomTypes(HOTEL))]);
    }

    #[test]
    fn test_form_stays_hidden_until_a_ready_load() {
        let fresh = RoomAllocationState::default();
        assert!(!fresh.is_loaded());
        assert!(!fresh.can_submit());

        let without_room_types = InMemoryHotelService::new().with_hotel(1, 3);
        let (redirected, _) = apply_load(&fresh, block_on(load(&without_room_types, HOTEL)));
        assert!(!redirected.is_loaded());
        assert!(redirected.room_types().is_empty());

        let missing = InMemoryHotelService::new();
        let (failed, effects) = apply_load(&fresh, block_on(load(&missing, HOTEL)));
        assert!(!failed.is_loaded());
        assert_eq!(effects.len(), 1);

        assert!(loaded(&service(3)).is_loaded());
    }

    #[test]
    fn test_load_fetches_the_three_sources() {
        let service = service(3);
        block_on(load(&service, HOTEL));
        let mut calls = service.calls();
        calls.sort();
        assert_eq!(calls, vec!["get_hotel", "list_room_allocations", "list_room_types"]);
    }

    #[test]
    fn test_unknown_hotel_reports_not_found_and_keeps_state() {
        let service = service(3);
        let state = loaded(&service);
        let (next, effects) = apply_load(&state, block_on(load(&service, HotelId(99))));
        assert_eq!(next, state);
        match effects.as_slice() {
            [Effect::Notify(n)] => {
                assert_eq!(n.title, "No encontrado");
                assert_eq!(n.kind, NotificationKind::Warning);
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_options_follow_room_type_selection() {
        let service = service(3).with_room_type(1, 11, &[4]);
        let state = loaded(&service);

        let picked = state.select_room_type(Some(RoomTypeId(10)));
        let ids: Vec<_> = picked.options().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AccommodationId(2), AccommodationId(3)]);

        let picked = picked.select_accommodation(Some(AccommodationId(3)));
        let switched = picked.select_room_type(Some(RoomTypeId(11)));
        assert_eq!(switched.form.accommodation_id, None);
        let ids: Vec<_> = switched.options().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AccommodationId(4)]);

        assert!(state.select_room_type(None).options().is_empty());
    }

    #[test]
    fn test_capacity_two_fills_up_after_two_creates() {
        let service = service(2);
        let state = loaded(&service);
        assert!(state.can_submit());

        let (state, effects) = submit_and_apply(&service, &filled(&state, "1"));
        assert!(effects.is_empty());
        assert!(!state.capacity_reached());
        assert_eq!(state.form, RoomAllocationForm::default());

        let (state, _) = submit_and_apply(&service, &filled(&state, "1"));
        assert!(state.capacity_reached());
        assert!(!state.can_submit());
        assert_eq!(service.allocation_count(), 2);

        service.clear_calls();
        let (blocked, effects) = submit_and_apply(&service, &filled(&state, "1"));
        assert!(service.calls().is_empty());
        assert_eq!(blocked.allocations().len(), 2);
        assert!(matches!(effects.as_slice(), [Effect::Notify(n)] if n.message == CAPACITY_REACHED_MESSAGE));
    }

    #[test]
    fn test_edit_stays_possible_while_capacity_reached() {
        let service = service(2).with_allocation(1, 20, 2, 10, 2);
        let state = loaded(&service);
        assert!(state.capacity_reached());

        let editing = state.begin_edit(RoomAllocationId(20));
        assert_eq!(editing.form.quantity, "2");
        assert_eq!(editing.form.accommodation_id, Some(AccommodationId(2)));
        assert!(editing.options().iter().any(|a| a.id == AccommodationId(2)));
        assert!(editing.can_submit());

        let editing = editing
            .with_quantity("1".into())
            .select_accommodation(Some(AccommodationId(3)));
        let (next, effects) = submit_and_apply(&service, &editing);
        assert!(effects.is_empty());
        assert!(!next.capacity_reached());
        assert!(!next.form.is_edit_mode());
        assert_eq!(next.allocations()[0].accommodation_name(), "Doble");
    }

    #[test]
    fn test_cancel_edit_restores_create_mode_only() {
        let service = service(5).with_allocation(1, 20, 2, 10, 2);
        let state = loaded(&service);
        let editing = state.begin_edit(RoomAllocationId(20));
        let cancelled = editing.cancel_edit();
        assert_eq!(cancelled.form, RoomAllocationForm::default());
        assert_eq!(cancelled.snapshot, state.snapshot);
    }

    #[test]
    fn test_invalid_form_issues_no_request() {
        let service = service(5);
        let state = loaded(&service);
        service.clear_calls();

        let (_, effects) = submit_and_apply(&service, &filled(&state, "0"));
        assert_eq!(effects, vec![Effect::FormError("Debe ser al menos 1".into())]);

        let missing = state.with_quantity("2".into());
        let (_, effects) = submit_and_apply(&service, &missing);
        assert_eq!(
            effects,
            vec![Effect::FormError("El tipo de habitación es obligatorio".into())]
        );
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_failed_create_keeps_form_and_list() {
        let service = service(5);
        let state = filled(&loaded(&service), "2");
        service.fail_next("create_room_allocation", ApiError::generic("Error al guardar"));

        let (next, effects) = submit_and_apply(&service, &state);
        assert_eq!(next, state);
        assert!(matches!(effects.as_slice(), [Effect::Notify(n)] if n.title == "Error"));
    }

    #[test]
    fn test_declined_delete_issues_no_request() {
        let service = service(5).with_allocation(1, 20, 2, 10, 2);
        let state = loaded(&service);
        service.clear_calls();

        let outcome = block_on(remove(&service, HOTEL, RoomAllocationId(20), false));
        let (next, effects) = apply_mutation(&state, outcome);
        assert!(service.calls().is_empty());
        assert!(effects.is_empty());
        assert_eq!(next, state);
    }

    #[test]
    fn test_delete_frees_capacity_after_reload() {
        let service = service(2).with_allocation(1, 20, 2, 10, 2);
        let state = loaded(&service);
        assert!(state.capacity_reached());

        let outcome = block_on(remove(&service, HOTEL, RoomAllocationId(20), true));
        let (next, effects) = apply_mutation(&state, outcome);
        assert!(!next.capacity_reached());
        assert!(next.allocations().is_empty());
        assert!(matches!(effects.as_slice(), [Effect::Notify(n)] if n.title == "Eliminado"));
    }

    #[test]
    fn test_delete_of_vanished_allocation_reports_and_reloads() {
        let service = service(5).with_allocation(1, 20, 2, 10, 2);
        let state = loaded(&service);
        service.remove_allocation_silently(20);
        service.clear_calls();

        let outcome = block_on(remove(&service, HOTEL, RoomAllocationId(20), true));
        let (next, effects) = apply_mutation(&state, outcome);
        assert!(service.calls().contains(&"list_room_allocations".to_string()));
        assert!(next.allocations().is_empty());
        assert!(matches!(effects.as_slice(), [Effect::Notify(n)] if n.title == "No encontrado"));
    }
}
