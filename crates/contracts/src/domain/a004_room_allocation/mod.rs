pub mod aggregate;
pub mod capacity;
pub mod form;
