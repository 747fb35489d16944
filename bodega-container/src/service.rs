//! Type-erased realized service values.
//!
//! [`Service`] is what the cache stores and what [`get`] returns: an
//! `Arc`-shared value of any type, plus the type name captured at the
//! point of erasure so introspection and error messages can report it.
//!
//! [`get`]: crate::container::Container::get

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A realized service value, type-erased for storage in the cache.
///
/// The payload is always an `Arc<T>` behind the erasure, so cloning a
/// `Service` is cheap and preserves identity: every clone observes the
/// same underlying allocation, which [`Service::ptr_eq`] checks. Unsized
/// payloads (`Arc<dyn Trait>`) are supported through [`Service::from_arc`].
///
/// # Examples
/// ```
/// use bodega_container::service::Service;
///
/// let service = Service::new(String::from("hello"));
/// assert!(service.type_name().contains("String"));
///
/// let recovered = service.downcast::<String>().unwrap();
/// assert_eq!(*recovered, "hello");
/// ```
#[derive(Clone)]
pub struct Service {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Service {
    /// Erases an owned value, wrapping it in an `Arc`.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Erases an already-shared (possibly unsized) value.
    pub fn from_arc<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            type_name: type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// Returns the type name of the erased payload, captured with
    /// [`std::any::type_name`] when the service was created.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Recovers the payload as `Arc<T>`, or `None` if `T` is not the
    /// erased type.
    pub fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }

    /// Returns true if both services share the same underlying allocation.
    pub fn ptr_eq(&self, other: &Service) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service({})", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;
    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn downcast_owned_value() {
        let service = Service::new(42u32);
        assert_eq!(*service.downcast::<u32>().unwrap(), 42);
    }

    #[test]
    fn downcast_wrong_type_is_none() {
        let service = Service::new(42u32);
        assert!(service.downcast::<String>().is_none());
    }

    #[test]
    fn downcast_unsized_payload() {
        let greeter: Arc<dyn Greeter> = Arc::new(English);
        let service = Service::from_arc(greeter);

        let recovered = service.downcast::<dyn Greeter>().unwrap();
        assert_eq!(recovered.greet(), "hello");
        assert!(service.type_name().contains("Greeter"));
    }

    #[test]
    fn clone_preserves_identity() {
        let service = Service::new(String::from("x"));
        let copy = service.clone();
        assert!(service.ptr_eq(&copy));
    }

    #[test]
    fn distinct_services_not_identical() {
        let a = Service::new(String::from("x"));
        let b = Service::new(String::from("x"));
        assert!(!a.ptr_eq(&b));
    }
}
