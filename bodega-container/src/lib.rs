//! Core container implementation for bodega.

pub mod container;
pub mod error;
pub mod id;
pub mod provider;
pub mod registry;
pub mod service;

pub use container::prelude;
pub use container::Container;
pub use error::{BodegaError, Result};
pub use id::ServiceId;
pub use provider::ServiceProvider;
pub use service::Service;
