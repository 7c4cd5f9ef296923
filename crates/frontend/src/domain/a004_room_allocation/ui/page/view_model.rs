use crate::domain::a004_room_allocation::workflow::{self, RoomAllocationState};
use crate::shared::confirm::confirm_irreversible;
use crate::shared::page::PageController;
use crate::shared::service::HttpHotelService;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::AccommodationId;
use contracts::domain::a003_room_type::aggregate::RoomTypeId;
use contracts::domain::a004_room_allocation::aggregate::RoomAllocationId;
use leptos::prelude::*;

/// ViewModel of the allocation page
#[derive(Clone, Copy)]
pub struct RoomAllocationViewModel {
    pub hotel_id: HotelId,
    pub page: PageController<RoomAllocationState>,
}

impl RoomAllocationViewModel {
    pub fn new(hotel_id: HotelId) -> Self {
        Self {
            hotel_id,
            page: PageController::new(RoomAllocationState::default()),
        }
    }

    pub fn state(&self) -> RoomAllocationState {
        self.page.state.get()
    }

    pub fn load(&self) {
        let hotel_id = self.hotel_id;
        self.page
            .run_load(async move { workflow::load(&HttpHotelService, hotel_id).await });
    }

    pub fn submit(&self) {
        let hotel_id = self.hotel_id;
        let state = self.page.state.get_untracked();
        self.page.run_mutation(async move {
            workflow::submit(&HttpHotelService, hotel_id, &state).await
        });
    }

    pub fn remove(&self, id: RoomAllocationId) {
        let hotel_id = self.hotel_id;
        let confirmed = confirm_irreversible();
        self.page.run_mutation(async move {
            workflow::remove(&HttpHotelService, hotel_id, id, confirmed).await
        });
    }

    pub fn set_quantity(&self, value: String) {
        self.page.update(|s| s.with_quantity(value));
    }

    /// Select values are the raw ids; an empty value clears the selection
    pub fn select_room_type(&self, id: Option<RoomTypeId>) {
        self.page.update(|s| s.select_room_type(id));
    }

    pub fn select_accommodation(&self, id: Option<AccommodationId>) {
        self.page.update(|s| s.select_accommodation(id));
    }

    pub fn begin_edit(&self, id: RoomAllocationId) {
        self.page.form_error.set(None);
        self.page.update(|s| s.begin_edit(id));
    }

    pub fn cancel_edit(&self) {
        self.page.form_error.set(None);
        self.page.update(|s| s.cancel_edit());
    }

    /// Create is disabled while the guard is tripped; edits stay open
    pub fn is_form_disabled(&self) -> bool {
        self.page.pending.get() || !self.page.state.with(|s| s.can_submit())
    }
}
