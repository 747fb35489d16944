//! # Bodega — a lazy service container for Rust
//!
//! A name-keyed registry that produces and caches services on first access,
//! resolved from an explicitly stored instance, a registered factory, or an
//! attached [`ServiceProvider`] — plus a separate namespace of configuration
//! parameters.
//!
//! # Quickstart
//! ```rust
//! use bodega::prelude::*;
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, msg: &str);
//! }
//!
//! struct ConsoleLogger;
//! impl Logger for ConsoleLogger {
//!     fn log(&self, msg: &str) { println!("{msg}"); }
//! }
//!
//! let container = Container::new();
//!
//! container.set_parameter("app_name", "demo");
//! container.set_factory_arc("logger", |_: &Container| {
//!     Ok(Arc::new(ConsoleLogger) as Arc<dyn Logger>)
//! });
//! container.set_factory("greeting", |c: &Container| {
//!     let app: String = c.parameter_as("app_name")?;
//!     Ok(format!("hello from {app}"))
//! });
//!
//! let logger: Arc<dyn Logger> = container.resolve("logger")?;
//! logger.log(&container.resolve::<String>("greeting")?);
//!
//! assert!(container.initialized("logger"));
//! assert_eq!(
//!     container.service_ids().into_iter().collect::<Vec<_>>(),
//!     vec!["greeting", "logger"],
//! );
//! # Ok::<(), BodegaError>(())
//! ```

pub use bodega_container::{prelude, BodegaError, Container, Result, Service, ServiceId, ServiceProvider};
pub use bodega_support::ident::{pascalize, underscore};
pub use bodega_support::suggest::shorten_type_name;
