use crate::shared::service::HotelService;
use crate::shared::workflow::{
    delete_then_reload, save_then_reload, LoadOutcome, MutationOutcome, WorkflowState,
};
use contracts::domain::common::find_by_id;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::{
    Accommodation, AccommodationDto, AccommodationId,
};
use contracts::shared::navigation::redirect_after_accommodation_created;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccommodationState {
    pub accommodations: Vec<Accommodation>,
    pub form: AccommodationDto,
}

impl AccommodationState {
    pub fn with_name(&self, name: String) -> Self {
        let mut next = self.clone();
        next.form.name = name;
        next
    }

    pub fn begin_edit(&self, id: AccommodationId) -> Self {
        match find_by_id(&self.accommodations, id) {
            Some(accommodation) => Self {
                accommodations: self.accommodations.clone(),
                form: accommodation.to_dto(),
            },
            None => self.clone(),
        }
    }

    pub fn cancel_edit(&self) -> Self {
        Self {
            accommodations: self.accommodations.clone(),
            form: AccommodationDto::default(),
        }
    }
}

impl WorkflowState for AccommodationState {
    type Snapshot = Vec<Accommodation>;

    fn with_snapshot(&self, snapshot: Vec<Accommodation>) -> Self {
        Self {
            accommodations: snapshot,
            form: self.form.clone(),
        }
    }

    fn reset(&self, snapshot: Vec<Accommodation>) -> Self {
        Self {
            accommodations: snapshot,
            form: AccommodationDto::default(),
        }
    }
}

pub async fn load<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
) -> LoadOutcome<Vec<Accommodation>> {
    log::debug!("loading accommodations of hotel {}", hotel_id);
    match service.list_accommodations(hotel_id).await {
        Ok(list) => LoadOutcome::Ready(list),
        Err(e) => LoadOutcome::Failed(e),
    }
}

/// After a create, a hotel still lacking room types moves on to define them
async fn reload_after_create<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
) -> LoadOutcome<Vec<Accommodation>> {
    let (room_types, reload) = futures::join!(service.list_room_types(hotel_id), load(service, hotel_id));
    match room_types {
        Ok(room_types) => match redirect_after_accommodation_created(hotel_id, room_types.len()) {
            Some(route) => LoadOutcome::Redirect(route),
            None => reload,
        },
        Err(e) => LoadOutcome::Failed(e),
    }
}

pub async fn submit<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
    state: &AccommodationState,
) -> MutationOutcome<Vec<Accommodation>> {
    let payload = match state.form.to_payload() {
        Ok(payload) => payload,
        Err(message) => return MutationOutcome::Invalid(message),
    };
    match state.form.id {
        Some(id) => {
            save_then_reload(
                || service.update_accommodation(hotel_id, id, &payload),
                || load(service, hotel_id),
            )
            .await
        }
        None => {
            save_then_reload(
                || service.create_accommodation(hotel_id, &payload),
                || reload_after_create(service, hotel_id),
            )
            .await
        }
    }
}

pub async fn remove<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
    id: AccommodationId,
    confirmed: bool,
) -> MutationOutcome<Vec<Accommodation>> {
    delete_then_reload(
        confirmed,
        || service.delete_accommodation(hotel_id, id),
        || load(service, hotel_id),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::ApiError;
    use crate::shared::testing::InMemoryHotelService;
    use crate::shared::workflow::{apply_load, apply_mutation, Effect};
    use contracts::shared::navigation::AppRoute;
    use futures::executor::block_on;

    const HOTEL: HotelId = HotelId(1);

    fn loaded(service: &InMemoryHotelService) -> AccommodationState {
        let (state, _) = apply_load(&AccommodationState::default(), block_on(load(service, HOTEL)));
        state
    }

    #[test]
    fn test_first_accommodation_without_room_types_redirects() {
        let service = InMemoryHotelService::new().with_hotel(1, 10);
        let state = loaded(&service).with_name("Sencilla".into());

        let (_, effects) = apply_mutation(&state, block_on(submit(&service, HOTEL, &state)));
        assert_eq!(effects, vec![Effect::Navigate(AppRoute::RoomTypes(HOTEL))]);
    }

    #[test]
    fn test_create_with_existing_room_types_reloads() {
        let service = InMemoryHotelService::new()
            .with_hotel(1, 10)
            .with_accommodation(1, 2, "Sencilla")
            .with_room_type(1, 3, &[2]);
        let state = loaded(&service).with_name("Doble".into());

        let (next, effects) = apply_mutation(&state, block_on(submit(&service, HOTEL, &state)));
        assert!(effects.is_empty());
        let names: Vec<_> = next.accommodations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Sencilla", "Doble"]);
        assert_eq!(next.form, AccommodationDto::default());
    }

    #[test]
    fn test_update_never_redirects() {
        let service = InMemoryHotelService::new()
            .with_hotel(1, 10)
            .with_accommodation(1, 2, "Sencilla");
        let state = loaded(&service)
            .begin_edit(AccommodationId(2))
            .with_name("Individual".into());

        let (next, effects) = apply_mutation(&state, block_on(submit(&service, HOTEL, &state)));
        assert!(effects.is_empty());
        assert_eq!(next.accommodations[0].name, "Individual");
        assert!(!service.calls().contains(&"list_room_types".to_string()));
    }

    #[test]
    fn test_short_name_is_rejected_locally() {
        let service = InMemoryHotelService::new().with_hotel(1, 10);
        let state = loaded(&service).with_name("A".into());
        service.clear_calls();

        let outcome = block_on(submit(&service, HOTEL, &state));
        assert!(matches!(outcome, MutationOutcome::Invalid(_)));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_generic_delete_failure_does_not_reload() {
        let service = InMemoryHotelService::new()
            .with_hotel(1, 10)
            .with_accommodation(1, 2, "Sencilla");
        let state = loaded(&service);
        service.clear_calls();
        service.fail_next("delete_accommodation", ApiError::generic("En uso"));

        let (next, effects) = apply_mutation(
            &state,
            block_on(remove(&service, HOTEL, AccommodationId(2), true)),
        );
        assert_eq!(service.calls(), vec!["delete_accommodation"]);
        assert_eq!(next, state);
        assert!(matches!(effects.as_slice(), [Effect::Notify(n)] if n.message == "En uso"));
    }
}
