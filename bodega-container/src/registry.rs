//! Service registry — the container's three stores.
//!
//! The registry owns the service cache (realized values), the factory map,
//! and the parameter store. Entries are overwritten by explicit
//! registration, created lazily by resolution, and never removed.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::container::Container;
use crate::error::Result;
use crate::id::ServiceId;
use crate::service::Service;

/// Type alias for factory functions.
///
/// A factory takes a reference to the [`Container`] (to resolve its own
/// collaborators) and returns a realized [`Service`] or an error.
///
/// # Why `Arc` and not `Box`?
/// Factories are shared between threads (Container is `Send + Sync`).
/// `Arc` allows cloning a handle out of the map without copying the closure,
/// so no lock is held while the factory runs.
pub type FactoryFn = Arc<dyn Fn(&Container) -> Result<Service> + Send + Sync>;

/// Stores realized services, registered factories, and parameters.
///
/// The three maps are independent: a name may have both a factory and a
/// cached instance at once (resolution precedence decides which wins), and
/// the parameter namespace never collides with service names.
pub(crate) struct Registry {
    services: RwLock<HashMap<ServiceId, Service>>,
    factories: RwLock<HashMap<ServiceId, FactoryFn>>,
    parameters: DashMap<String, Value>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
            factories: RwLock::new(HashMap::new()),
            parameters: DashMap::new(),
        }
    }

    // ── Service cache ──

    /// Returns the cached service for `id`, if realized.
    pub fn cached(&self, id: &ServiceId) -> Option<Service> {
        self.services.read().get(id).cloned()
    }

    pub fn has_cached(&self, id: &ServiceId) -> bool {
        self.services.read().contains_key(id)
    }

    /// Stores a service, overwriting any previous cache entry.
    ///
    /// Used by explicit registration; leaves the factory map untouched.
    pub fn store(&self, id: ServiceId, service: Service) {
        debug!(id = %id, type_name = service.type_name(), "Stored service instance");
        self.services.write().insert(id, service);
    }

    /// Stores a freshly produced service unless one is already cached,
    /// returning whichever value the cache ends up holding.
    ///
    /// First value wins, so racing first resolutions still observe one
    /// identity for the name.
    pub fn memoize(&self, id: ServiceId, service: Service) -> Service {
        let mut services = self.services.write();
        let stored = services.entry(id.clone()).or_insert(service);
        debug!(id = %id, type_name = stored.type_name(), "Realized service");
        stored.clone()
    }

    // ── Factory map ──

    pub fn factory(&self, id: &ServiceId) -> Option<FactoryFn> {
        self.factories.read().get(id).cloned()
    }

    pub fn has_factory(&self, id: &ServiceId) -> bool {
        self.factories.read().contains_key(id)
    }

    /// Stores a factory, overwriting any previous one for the name.
    /// Leaves any cached instance in place.
    pub fn store_factory(&self, id: ServiceId, factory: FactoryFn) {
        debug!(id = %id, "Registered factory");
        self.factories.write().insert(id, factory);
    }

    /// Snapshot of all factory-registered ids.
    pub fn factory_ids(&self) -> Vec<ServiceId> {
        self.factories.read().keys().cloned().collect()
    }

    /// Snapshot of all realized ids.
    pub fn cached_ids(&self) -> Vec<ServiceId> {
        self.services.read().keys().cloned().collect()
    }

    // ── Parameter store ──

    pub fn set_parameter(&self, name: &str, value: Value) {
        let key = name.to_lowercase();
        debug!(name = %key, "Set parameter");
        self.parameters.insert(key, value);
    }

    pub fn parameter(&self, name: &str) -> Option<Value> {
        self.parameters.get(&name.to_lowercase()).map(|v| v.value().clone())
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(&name.to_lowercase())
    }

    // ── Introspection for Debug ──

    pub fn service_count(&self) -> usize {
        self.services.read().len()
    }

    pub fn factory_count(&self) -> usize {
        self.factories.read().len()
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_factory() -> FactoryFn {
        Arc::new(|_| Ok(Service::new(42i32)))
    }

    #[test]
    fn store_and_fetch_service() {
        let registry = Registry::new();
        let id = ServiceId::new("logger");

        registry.store(id.clone(), Service::new(String::from("x")));
        assert!(registry.has_cached(&id));
        assert!(registry.cached(&id).is_some());
        assert!(registry.cached(&ServiceId::new("database")).is_none());
    }

    #[test]
    fn store_overwrites() {
        let registry = Registry::new();
        let id = ServiceId::new("logger");

        registry.store(id.clone(), Service::new(1u32));
        registry.store(id.clone(), Service::new(2u32));

        let got = registry.cached(&id).unwrap();
        assert_eq!(*got.downcast::<u32>().unwrap(), 2);
    }

    #[test]
    fn memoize_first_wins() {
        let registry = Registry::new();
        let id = ServiceId::new("logger");

        let first = registry.memoize(id.clone(), Service::new(1u32));
        let second = registry.memoize(id.clone(), Service::new(2u32));

        assert!(first.ptr_eq(&second));
        assert_eq!(*second.downcast::<u32>().unwrap(), 1);
    }

    #[test]
    fn factory_and_cache_are_independent() {
        let registry = Registry::new();
        let id = ServiceId::new("logger");

        registry.store_factory(id.clone(), dummy_factory());
        registry.store(id.clone(), Service::new(String::from("instance")));

        assert!(registry.has_factory(&id));
        assert!(registry.has_cached(&id));
    }

    #[test]
    fn factory_ids_snapshot() {
        let registry = Registry::new();
        registry.store_factory(ServiceId::new("a"), dummy_factory());
        registry.store_factory(ServiceId::new("b"), dummy_factory());

        let mut ids: Vec<String> = registry.factory_ids().iter().map(ServiceId::snake).collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn parameters_lowercase_keys() {
        let registry = Registry::new();
        registry.set_parameter("Database.URL", Value::from("postgres://localhost"));

        assert!(registry.has_parameter("database.url"));
        assert!(registry.has_parameter("DATABASE.URL"));
        assert_eq!(
            registry.parameter("database.url").unwrap(),
            Value::from("postgres://localhost")
        );
    }
}
