use crate::domain::a003_room_type::workflow::{self, RoomTypeState};
use crate::shared::confirm::confirm_irreversible;
use crate::shared::page::PageController;
use crate::shared::service::HttpHotelService;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::AccommodationId;
use contracts::domain::a003_room_type::aggregate::RoomTypeId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RoomTypeViewModel {
    pub hotel_id: HotelId,
    pub page: PageController<RoomTypeState>,
}

impl RoomTypeViewModel {
    pub fn new(hotel_id: HotelId) -> Self {
        Self {
            hotel_id,
            page: PageController::new(RoomTypeState::default()),
        }
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

    pub fn remove(&self, id: RoomTypeId) {
        let hotel_id = self.hotel_id;
        let confirmed = confirm_irreversible();
        self.page.run_mutation(async move {
            workflow::remove(&HttpHotelService, hotel_id, id, confirmed).await
        });
    }

    pub fn set_name(&self, name: String) {
        self.page.update(|s| s.with_name(name));
    }

    pub fn toggle_accommodation(&self, id: AccommodationId, checked: bool) {
        self.page.update(|s| s.toggle_accommodation(id, checked));
    }

    pub fn is_selected(&self, id: AccommodationId) -> bool {
        self.page.state.with(|s| s.is_selected(id))
    }

    pub fn is_edit_mode(&self) -> bool {
        self.page.state.with(|s| s.form.is_edit_mode())
    }

    pub fn begin_edit(&self, id: RoomTypeId) {
        self.page.form_error.set(None);
        self.page.update(|s| s.begin_edit(id));
    }

    pub fn cancel_edit(&self) {
        self.page.form_error.set(None);
        self.page.update(|s| s.cancel_edit());
    }
}
