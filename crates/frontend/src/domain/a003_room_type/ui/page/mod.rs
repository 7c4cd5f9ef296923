mod view;
mod view_model;

pub use view::RoomTypePage;
pub use view_model::RoomTypeViewModel;
