pub mod api;
pub mod catalog;
pub mod collate;
pub mod error;
pub mod filters;
pub mod models;
pub mod names;
pub mod review;
pub mod services;
pub mod state;
pub mod store;
pub mod views;
