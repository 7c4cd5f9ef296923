use crate::domain::a001_hotel::workflow::{self, HotelField, HotelListState};
use crate::shared::confirm::confirm_irreversible;
use crate::shared::page::PageController;
use crate::shared::service::HttpHotelService;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;

/// ViewModel of the hotel list
#[derive(Clone, Copy)]
pub struct HotelListViewModel {
    pub page: PageController<HotelListState>,
}

impl HotelListViewModel {
    pub fn new() -> Self {
        Self {
            page: PageController::new(HotelListState::default()),
        }
    }

    pub fn load(&self) {
        self.page
            .run_load(async move { workflow::load(&HttpHotelService).await });
    }

    pub fn submit(&self) {
        let state = self.page.state.get_untracked();
        self.page
            .run_mutation(async move { workflow::submit(&HttpHotelService, &state).await });
    }

    pub fn remove(&self, id: HotelId) {
        let confirmed = confirm_irreversible();
        self.page.run_mutation(async move {
            workflow::remove(&HttpHotelService, id, confirmed).await
        });
    }

    pub fn set_field(&self, field: HotelField, value: String) {
        self.page.update(|s| s.with_field(field, value));
    }

    pub fn field(&self, field: HotelField) -> String {
        self.page.state.with(|s| match field {
            HotelField::Name => s.form.name.clone(),
            HotelField::Address => s.form.address.clone(),
            HotelField::City => s.form.city.clone(),
            HotelField::TaxId => s.form.tax_id.clone(),
            HotelField::RoomCapacity => s.form.room_capacity.clone(),
        })
    }

    pub fn is_edit_mode(&self) -> bool {
        self.page.state.with(|s| s.form.is_edit_mode())
    }

    pub fn begin_edit(&self, id: HotelId) {
        self.page.form_error.set(None);
        self.page.update(|s| s.begin_edit(id));
    }

    pub fn cancel_edit(&self) {
        self.page.form_error.set(None);
        self.page.update(|s| s.cancel_edit());
    }

    pub fn go_to_page(&self, page: usize) {
        self.page.update(|s| s.go_to_page(page));
    }

    pub fn open_rooms(&self, id: HotelId) {
        self.page.redirect.set(Some(AppRoute::RoomAllocations(id)));
    }
}
