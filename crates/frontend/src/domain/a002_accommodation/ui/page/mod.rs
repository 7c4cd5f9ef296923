mod view;
mod view_model;

pub use view::AccommodationPage;
pub use view_model::AccommodationViewModel;
