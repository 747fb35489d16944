//! Provider trait — an application-supplied source of named services.
//!
//! A [`ServiceProvider`] is the explicit replacement for defining services
//! as convention-named accessor methods on a container subclass: instead of
//! the container discovering `get_foo`-style methods reflectively, the
//! application implements [`provide`](ServiceProvider::provide) as a plain
//! match over the names it knows, and declares that name table through
//! [`service_names`](ServiceProvider::service_names).
//!
//! # Examples
//! ```rust,ignore
//! struct AppProvider;
//!
//! impl ServiceProvider for AppProvider {
//!     fn provide(&self, id: &ServiceId, container: &Container) -> Option<Result<Service>> {
//!         match id.as_pascal() {
//!             "Logger" => Some(Ok(Service::new(ConsoleLogger))),
//!             "Database" => Some(container.get_parameter("database_url").map(|url| {
//!                 Service::new(Database::connect(url.as_str().unwrap_or_default()))
//!             })),
//!             _ => None,
//!         }
//!     }
//!
//!     fn service_names(&self) -> Vec<&'static str> {
//!         vec!["logger", "database"]
//!     }
//! }
//! ```

use crate::container::Container;
use crate::error::Result;
use crate::id::ServiceId;
use crate::service::Service;

/// A source of named services consulted when neither the cache nor the
/// factory map resolves a name.
///
/// Providers are attached with [`Container::add_provider`] and consulted in
/// attachment order; the first one whose `provide` returns `Some` wins.
pub trait ServiceProvider: Send + Sync {
    /// Produces the service for `id`, or `None` if this provider does not
    /// know the name (resolution then falls through to the next provider).
    ///
    /// Receives the container so a produced service can resolve its own
    /// collaborators. A returned `Some(Err(..))` propagates to the caller
    /// unmodified and is not cached.
    fn provide(&self, id: &ServiceId, container: &Container) -> Option<Result<Service>>;

    /// The names this provider can produce, in any case/separator form.
    ///
    /// This declared table is what
    /// [`Container::service_ids`] enumerates and what the default
    /// [`provides`](ServiceProvider::provides) checks.
    fn service_names(&self) -> Vec<&'static str>;

    /// The declared type of a service, without producing it.
    ///
    /// Return `Some` to let [`Container::return_type`] report an abstract
    /// capability (e.g. `"dyn Logger"`) instead of the concrete type of the
    /// realized value. The default declares nothing, in which case
    /// introspection falls back to resolving the service.
    fn declared_type(&self, id: &ServiceId) -> Option<&'static str> {
        let _ = id;
        None
    }

    /// Cheap membership probe used by [`Container::has`]; must not produce
    /// anything.
    fn provides(&self, id: &ServiceId) -> bool {
        self.service_names()
            .iter()
            .any(|name| ServiceId::new(name) == *id)
    }

    /// Optional: human-readable name for log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
