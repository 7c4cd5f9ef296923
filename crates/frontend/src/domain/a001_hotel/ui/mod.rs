pub mod info;
pub mod list;
