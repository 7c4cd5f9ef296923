use crate::shared::service::HotelService;
use crate::shared::workflow::{
    delete_then_reload, save_then_reload, LoadOutcome, MutationOutcome, WorkflowState,
};
use contracts::domain::common::find_by_id;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::{Accommodation, AccommodationId};
use contracts::domain::a003_room_type::aggregate::{RoomType, RoomTypeDto, RoomTypeId};
use contracts::shared::navigation::redirect_after_room_type_created;

/// Room types of the hotel plus the catalogue offered by the multi-select
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomTypeSnapshot {
    pub room_types: Vec<RoomType>,
    pub catalogue: Vec<Accommodation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomTypeState {
    pub snapshot: RoomTypeSnapshot,
    pub form: RoomTypeDto,
}

impl RoomTypeState {
    pub fn with_name(&self, name: String) -> Self {
        let mut next = self.clone();
        next.form.name = name;
        next
    }

    pub fn toggle_accommodation(&self, id: AccommodationId, checked: bool) -> Self {
        let mut next = self.clone();
        next.form.toggle_accommodation(id, checked);
        next
    }

    pub fn is_selected(&self, id: AccommodationId) -> bool {
        self.form.accommodations.contains(&id)
    }

    pub fn begin_edit(&self, id: RoomTypeId) -> Self {
        match find_by_id(&self.snapshot.room_types, id) {
            Some(room_type) => Self {
                snapshot: self.snapshot.clone(),
                form: room_type.to_dto(),
            },
            None => self.clone(),
        }
    }

    pub fn cancel_edit(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            form: RoomTypeDto::default(),
        }
    }
}

impl WorkflowState for RoomTypeState {
    type Snapshot = RoomTypeSnapshot;

    fn with_snapshot(&self, snapshot: RoomTypeSnapshot) -> Self {
        Self {
            snapshot,
            form: self.form.clone(),
        }
    }

    fn reset(&self, snapshot: RoomTypeSnapshot) -> Self {
        Self {
            snapshot,
            form: RoomTypeDto::default(),
        }
    }
}

pub async fn load<S: HotelService + ?Sized>(service: &S, hotel_id: HotelId) -> LoadOutcome<RoomTypeSnapshot> {
    log::debug!("loading room types of hotel {}", hotel_id);
    let (room_types, catalogue) = futures::join!(
        service.list_room_types(hotel_id),
        service.list_accommodations(hotel_id),
    );
    match (room_types, catalogue) {
        (Ok(room_types), Ok(catalogue)) => LoadOutcome::Ready(RoomTypeSnapshot {
            room_types,
            catalogue,
        }),
        (Err(e), _) | (_, Err(e)) => LoadOutcome::Failed(e),
    }
}

/// The hotel's first room type, with no rooms provisioned yet, leads to allocation
async fn reload_after_create<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
) -> LoadOutcome<RoomTypeSnapshot> {
    let (allocations, reload) = futures::join!(
        service.list_room_allocations(hotel_id),
        load(service, hotel_id),
    );
    let allocations = match allocations {
        Ok(allocations) => allocations,
        Err(e) => return LoadOutcome::Failed(e),
    };
    match reload {
        LoadOutcome::Ready(snapshot) => {
            match redirect_after_room_type_created(hotel_id, snapshot.room_types.len(), allocations.len()) {
                Some(route) => LoadOutcome::Redirect(route),
                None => LoadOutcome::Ready(snapshot),
            }
        }
        other => other,
    }
}

pub async fn submit<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
    state: &RoomTypeState,
) -> MutationOutcome<RoomTypeSnapshot> {
    let payload = match state.form.to_payload() {
        Ok(payload) => payload,
        Err(message) => return MutationOutcome::Invalid(message),
    };
    match state.form.id {
        Some(id) => {
            save_then_reload(
                || service.update_room_type(hotel_id, id, &payload),
                || load(service, hotel_id),
            )
            .await
        }
        None => {
            save_then_reload(
                || service.create_room_type(hotel_id, &payload),
                || reload_after_create(service, hotel_id),
            )
            .await
        }
    }
}

pub async fn remove<S: HotelService + ?Sized>(
    service: &S,
    hotel_id: HotelId,
    id: RoomTypeId,
    confirmed: bool,
) -> MutationOutcome<RoomTypeSnapshot> {
    delete_then_reload(
        confirmed,
        || service.delete_room_type(hotel_id, id),
        || load(service, hotel_id),
    )
    .await
}
