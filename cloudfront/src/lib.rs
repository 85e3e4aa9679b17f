pub mod addr;
pub mod api;
pub mod config;
pub mod connector;
pub mod document;
pub mod error;
pub mod resource;
