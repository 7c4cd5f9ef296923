//! Hotel list: paginated table plus the create/edit form.

use crate::shared::service::HotelService;
use crate::shared::workflow::{
    delete_then_reload, save_then_reload, LoadOutcome, MutationOutcome, WorkflowState,
};
use contracts::domain::common::find_by_id;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelDto, HotelId};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelField {
    Name,
    Address,
    City,
    TaxId,
    RoomCapacity,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelListState {
    pub hotels: Vec<Hotel>,
    /// Zero-based
    pub page: usize,
    pub form: HotelDto,
}

impl HotelListState {
    pub fn total_pages(&self) -> usize {
        self.hotels.len().div_ceil(PAGE_SIZE)
    }

    pub fn visible(&self) -> &[Hotel] {
        let start = (self.page * PAGE_SIZE).min(self.hotels.len());
        let end = (start + PAGE_SIZE).min(self.hotels.len());
        &self.hotels[start..end]
    }

    /// Clamped to the last page
    pub fn go_to_page(&self, page: usize) -> Self {
        let mut next = self.clone();
        next.page = page.min(self.total_pages().saturating_sub(1));
        next
    }

    pub fn with_field(&self, field: HotelField, value: String) -> Self {
        let mut next = self.clone();
        let form = &mut next.form;
        match field {
            HotelField::Name => form.name = value,
            HotelField::Address => form.address = value,
            HotelField::City => form.city = value,
            HotelField::TaxId => form.tax_id = value,
            HotelField::RoomCapacity => form.room_capacity = value,
        }
        next
    }

    pub fn begin_edit(&self, id: HotelId) -> Self {
        match find_by_id(&self.hotels, id) {
            Some(hotel) => Self {
                form: hotel.to_dto(),
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    pub fn cancel_edit(&self) -> Self {
        Self {
            form: HotelDto::default(),
            ..self.clone()
        }
    }
}

impl WorkflowState for HotelListState {
    type Snapshot = Vec<Hotel>;

    fn with_snapshot(&self, hotels: Vec<Hotel>) -> Self {
        let next = Self {
            hotels,
            page: self.page,
            form: self.form.clone(),
        };
        // A delete may have emptied the last page
        next.go_to_page(self.page)
    }

    fn reset(&self, hotels: Vec<Hotel>) -> Self {
        Self {
            form: HotelDto::default(),
            ..self.with_snapshot(hotels)
        }
    }
}

pub async fn load<S: HotelService + ?Sized>(service: &S) -> LoadOutcome<Vec<Hotel>> {
    log::debug!("loading hotels");
    match service.list_hotels().await {
        Ok(hotels) => LoadOutcome::Ready(hotels),
        Err(e) => LoadOutcome::Failed(e),
    }
}

pub async fn submit<S: HotelService + ?Sized>(
    service: &S,
    state: &HotelListState,
) -> MutationOutcome<Vec<Hotel>> {
    let payload = match state.form.to_payload() {
        Ok(payload) => payload,
        Err(message) => return MutationOutcome::Invalid(message),
    };
    let editing = state.form.id;
    save_then_reload(
        || async {
            match editing {
                Some(id) => service.update_hotel(id, &payload).await,
                None => service.create_hotel(&payload).await,
            }
        },
        || load(service),
    )
    .await
}

pub async fn remove<S: HotelService + ?Sized>(
    service: &S,
    id: HotelId,
    confirmed: bool,
) -> MutationOutcome<Vec<Hotel>> {
    delete_then_reload(confirmed, || service.delete_hotel(id), || load(service)).await
}
