pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod http;
pub mod icons;
pub mod modal;
pub mod notification;
pub mod page;
pub mod service;
pub mod workflow;

#[cfg(test)]
pub mod testing;
