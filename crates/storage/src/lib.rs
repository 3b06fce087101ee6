pub mod backend;
pub mod client;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

pub use backend::{Backend, require_session};
pub use client::{BackendClient, BackendConfig};
