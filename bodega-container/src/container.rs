//! # The Container — heart of bodega
//!
//! A lazy, name-keyed service container. Services are produced at most once
//! per name and memoized; the realized value keeps its identity across every
//! later lookup.
//!
//! # Resolution precedence
//! ```text
//! get(name)
//!   1. service cache      — already realized? return it
//!   2. factory map        — registered factory? run it, memoize
//!   3. providers in order — first provide() that answers, memoize
//!   4. NotFound
//! ```
//!
//! # Examples
//! ```rust
//! use bodega_container::prelude::*;
//!
//! let container = Container::new();
//!
//! container.set_parameter("database_url", "postgres://localhost/myapp");
//! container.set_factory("database", |c: &Container| {
//!     let url = c.parameter_as::<String>("database_url")?;
//!     Ok(format!("connected to {url}"))
//! });
//!
//! let db = container.resolve::<String>("database")?;
//! assert_eq!(*db, "connected to postgres://localhost/myapp");
//!
//! // Same name, same value — the factory ran exactly once.
//! let again = container.resolve::<String>("database")?;
//! assert!(std::sync::Arc::ptr_eq(&db, &again));
//! # Ok::<(), BodegaError>(())
//! ```

use std::any::type_name;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use bodega_support::suggest::{shorten_type_name, suggest_similar};

use crate::error::{BodegaError, NotFoundError, Result};
use crate::id::ServiceId;
use crate::provider::ServiceProvider;
use crate::registry::{FactoryFn, Registry};
use crate::service::Service;

const MAX_SUGGESTIONS: usize = 3;

/// A lazy service registry with a separate configuration-parameter store.
///
/// The container owns three stores — realized services, registered
/// factories, and parameters — plus an ordered list of
/// [`ServiceProvider`]s. All registration and lookup methods take `&self`;
/// the container is `Send + Sync` and can be shared behind an `Arc`.
///
/// Service names are case- and separator-insensitive (see [`ServiceId`]).
/// Parameters live in their own lower-cased namespace: a name may exist as
/// both a parameter and a service without collision.
pub struct Container {
    registry: Registry,
    providers: RwLock<Vec<Arc<dyn ServiceProvider>>>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            providers: RwLock::new(Vec::new()),
        }
    }

    // ── Registration ──

    /// Stores a pre-built value as the realized service for `name`.
    ///
    /// Overwrites any previously cached value under the name. A factory
    /// registered for the same name stays in place but is shadowed, because
    /// the cache is checked first during resolution.
    pub fn set<T: Send + Sync + 'static>(&self, name: &str, value: T) {
        self.registry.store(ServiceId::new(name), Service::new(value));
    }

    /// Stores an already-shared (possibly unsized) value as the realized
    /// service for `name`.
    ///
    /// ```rust,ignore
    /// container.set_arc("logger", Arc::new(ConsoleLogger) as Arc<dyn Logger>);
    /// ```
    pub fn set_arc<T: ?Sized + Send + Sync + 'static>(&self, name: &str, value: Arc<T>) {
        self.registry.store(ServiceId::new(name), Service::from_arc(value));
    }

    /// Registers a factory for `name`.
    ///
    /// The factory runs at most once, on the first `get` that reaches it;
    /// its result is memoized. Overwrites any previous factory under the
    /// name; a value already realized for the name stays cached and keeps
    /// winning.
    ///
    /// A factory error propagates to the caller unmodified and is not
    /// cached — the next `get` runs the factory again.
    pub fn set_factory<T, F>(&self, name: &str, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        let wrapped: FactoryFn = Arc::new(move |container| factory(container).map(Service::new));
        self.registry.store_factory(ServiceId::new(name), wrapped);
    }

    /// Registers a factory producing an already-shared (possibly unsized)
    /// value.
    pub fn set_factory_arc<T, F>(&self, name: &str, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let wrapped: FactoryFn =
            Arc::new(move |container| factory(container).map(Service::from_arc));
        self.registry.store_factory(ServiceId::new(name), wrapped);
    }

    /// Attaches a [`ServiceProvider`].
    ///
    /// Providers are consulted in attachment order, after the cache and the
    /// factory map.
    pub fn add_provider(&self, provider: impl ServiceProvider + 'static) {
        debug!(provider = provider.name(), "Attached provider");
        self.providers.write().push(Arc::new(provider));
    }

    // ── Resolution ──

    /// Resolves a service by name.
    ///
    /// Precedence: cached value, then registered factory, then the first
    /// provider that answers. Exactly one producing path runs, at most once
    /// per name; every later call returns the same [`Service`] (identity
    /// preserved).
    ///
    /// # Errors
    /// [`BodegaError::NotFound`] when no production path resolves the name.
    /// Factory and provider errors propagate unmodified.
    pub fn get(&self, name: &str) -> Result<Service> {
        let id = ServiceId::new(name);
        trace!(id = %id, "Resolving");

        if let Some(service) = self.registry.cached(&id) {
            trace!(id = %id, "Cache hit");
            return Ok(service);
        }

        // No lock is held while producers run, so a factory or provider may
        // resolve its own collaborators through this same container.
        if let Some(factory) = self.registry.factory(&id) {
            let service = factory(self)?;
            return Ok(self.registry.memoize(id, service));
        }

        for provider in self.providers_snapshot() {
            if let Some(produced) = provider.provide(&id, self) {
                let service = produced?;
                debug!(id = %id, provider = provider.name(), "Produced by provider");
                return Ok(self.registry.memoize(id, service));
            }
        }

        Err(self.not_found(&id))
    }

    /// Resolves a service and downcasts it to `Arc<T>`.
    ///
    /// ```rust,ignore
    /// let db: Arc<Database> = container.resolve("database")?;
    /// let logger: Arc<dyn Logger> = container.resolve("logger")?;
    /// ```
    ///
    /// # Errors
    /// Whatever [`get`](Container::get) fails with, or
    /// [`BodegaError::TypeMismatch`] when the service holds a different type.
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        let service = self.get(name)?;
        service.downcast::<T>().ok_or_else(|| BodegaError::TypeMismatch {
            id: ServiceId::new(name).snake(),
            expected: shorten_type_name(type_name::<T>()),
            actual: shorten_type_name(service.type_name()),
        })
    }

    // ── Existence checks ──

    /// Returns true if `get(name)` would find a production path: a cached
    /// value, a registered factory, or a provider that declares the name.
    ///
    /// Never produces anything — no side effects.
    pub fn has(&self, name: &str) -> bool {
        let id = ServiceId::new(name);
        self.registry.has_cached(&id)
            || self.registry.has_factory(&id)
            || self.providers_snapshot().iter().any(|p| p.provides(&id))
    }

    /// Returns true if the service has already been realized.
    ///
    /// Distinguishes "resolvable" from "already resolved" without
    /// triggering instantiation.
    pub fn initialized(&self, name: &str) -> bool {
        self.registry.has_cached(&ServiceId::new(name))
    }

    // ── Parameters ──

    /// Sets a configuration parameter. Names are lower-cased; the parameter
    /// namespace is independent from service names.
    pub fn set_parameter(&self, name: &str, value: impl Into<Value>) {
        self.registry.set_parameter(name, value.into());
    }

    /// Reads a configuration parameter.
    ///
    /// # Errors
    /// [`BodegaError::UnknownParameter`] when the name is absent.
    pub fn get_parameter(&self, name: &str) -> Result<Value> {
        self.registry
            .parameter(name)
            .ok_or_else(|| BodegaError::UnknownParameter { name: name.to_lowercase() })
    }

    /// Returns true if the parameter exists.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.registry.has_parameter(name)
    }

    /// Reads a parameter and deserializes it into `T`.
    ///
    /// ```rust,ignore
    /// container.set_parameter("pool_size", 8);
    /// let size: usize = container.parameter_as("pool_size")?;
    /// ```
    ///
    /// # Errors
    /// [`BodegaError::UnknownParameter`] when absent,
    /// [`BodegaError::ParameterFormat`] when the value does not fit `T`.
    pub fn parameter_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.get_parameter(name)?;
        serde_json::from_value(value).map_err(|source| BodegaError::ParameterFormat {
            name: name.to_lowercase(),
            source,
        })
    }

    // ── Introspection ──

    /// Enumerates every registerable service name, in snake_case.
    ///
    /// The result is the union of factory-registered names and every name
    /// declared by an attached provider, sorted and de-duplicated (a name
    /// known to both a factory and a provider appears once). Empty names
    /// are skipped. Values stored directly with [`set`](Container::set) are
    /// resolvable and visible to [`has`](Container::has) but are not
    /// enumerated here.
    pub fn service_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();

        for id in self.registry.factory_ids() {
            if !id.is_empty() {
                ids.insert(id.snake());
            }
        }

        for provider in self.providers_snapshot() {
            for name in provider.service_names() {
                let id = ServiceId::new(name);
                if !id.is_empty() {
                    ids.insert(id.snake());
                }
            }
        }

        ids
    }

    /// Reports the type of a service.
    ///
    /// Consults the attached providers first: a
    /// [`declared_type`](ServiceProvider::declared_type) answer is returned
    /// without instantiating anything, and may name an abstract capability
    /// rather than a concrete implementation. Otherwise the service is
    /// resolved through [`get`](Container::get) — caching as usual — and the
    /// realized value's type name is reported.
    ///
    /// # Errors
    /// Whatever the fallback `get` fails with.
    #[instrument(skip(self), name = "return_type")]
    pub fn return_type(&self, name: &str) -> Result<&'static str> {
        let id = ServiceId::new(name);

        for provider in self.providers_snapshot() {
            if let Some(declared) = provider.declared_type(&id) {
                trace!(id = %id, declared, "Provider declared a type");
                return Ok(declared);
            }
        }

        Ok(self.get(name)?.type_name())
    }

    // ── Internal ──

    fn providers_snapshot(&self) -> Vec<Arc<dyn ServiceProvider>> {
        self.providers.read().clone()
    }

    fn not_found(&self, id: &ServiceId) -> BodegaError {
        let requested = id.snake();

        let available: Vec<String> = {
            let mut names = BTreeSet::new();
            for known in self.registry.factory_ids() {
                names.insert(known.snake());
            }
            for known in self.registry.cached_ids() {
                names.insert(known.snake());
            }
            for provider in self.providers_snapshot() {
                for name in provider.service_names() {
                    names.insert(ServiceId::new(name).snake());
                }
            }
            names.into_iter().collect()
        };

        BodegaError::NotFound(NotFoundError {
            suggestions: suggest_similar(&requested, &available, MAX_SUGGESTIONS),
            requested,
        })
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("realized", &self.registry.service_count())
            .field("factories", &self.registry.factory_count())
            .field("parameters", &self.registry.parameter_count())
            .field("providers", &self.providers.read().len())
            .finish()
    }
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::Container;
    pub use crate::error::{BodegaError, Result};
    pub use crate::id::ServiceId;
    pub use crate::provider::ServiceProvider;
    pub use crate::service::Service;
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
