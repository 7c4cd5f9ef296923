//! Hotel list page
//!
//! - view_model.rs: signals + commands over the hotel workflow
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::HotelListPage;
pub use view_model::HotelListViewModel;
