//! Room allocation page of a hotel
//!
//! - view_model.rs: signals + commands over the allocation workflow
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::RoomAllocationPage;
pub use view_model::RoomAllocationViewModel;
