//! Schema registry keyed by record type.
//!
//! The registry hands out one shared [`SchemaDescriptor`] per record type. A
//! schema is either registered explicitly or built from the type's [`Record`]
//! implementation the first time it is asked for; either way it is built
//! once and reused by every later parse.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::SchemaError;
use crate::schema::{Record, SchemaBuilder, SchemaDescriptor};

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// A thread-safe cache of built schemas.
///
/// # Thread Safety
///
/// Lookups take a read lock; registration and first-use builds take a write
/// lock. Descriptors are immutable, so parse runs on different threads can
/// share them freely. Cloning the registry shares the same storage.
///
/// # Example
///
/// ```rust
/// use rowbind::{field, SchemaBuilder, SchemaRegistry};
///
/// #[derive(Default)]
/// struct Wafer {
///     fab: Option<String>,
/// }
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register(SchemaBuilder::<Wafer>::new().field(field!(Wafer, "fab" => fab)))
///     .unwrap();
///
/// assert!(registry.get::<Wafer>().is_some());
///
/// // A record type is registered once
/// let again = registry.register(SchemaBuilder::<Wafer>::new());
/// assert!(again.is_err());
/// ```
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Builds and stores the schema for `T`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::AlreadyRegistered` if `T` already has a schema,
    /// or the first definition error reported by [`SchemaBuilder::build`].
    pub fn register<T>(
        &self,
        schema: SchemaBuilder<T>,
    ) -> Result<Arc<SchemaDescriptor<T>>, SchemaError>
    where
        T: Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        if self.schemas.read().contains_key(&key) {
            return Err(SchemaError::AlreadyRegistered(type_name::<T>().to_string()));
        }

        let descriptor = Arc::new(schema.build()?);

        let mut schemas = self.schemas.write();
        if schemas.contains_key(&key) {
            return Err(SchemaError::AlreadyRegistered(type_name::<T>().to_string()));
        }
        schemas.insert(key, descriptor.clone());
        tracing::debug!(
            record = descriptor.record_name(),
            fields = descriptor.len(),
            "registered schema"
        );
        Ok(descriptor)
    }

    /// Returns the schema registered for `T`, if any.
    pub fn get<T>(&self) -> Option<Arc<SchemaDescriptor<T>>>
    where
        T: Send + Sync + 'static,
    {
        let entry = self.schemas.read().get(&TypeId::of::<T>()).cloned()?;
        entry.downcast::<SchemaDescriptor<T>>().ok()
    }

    /// Returns the schema for `T`, building it from `T`'s [`Record`]
    /// declaration on first use.
    ///
    /// # Errors
    ///
    /// Returns the definition error if the declared schema is invalid. A
    /// failed build is not cached.
    pub fn schema_for<T: Record>(&self) -> Result<Arc<SchemaDescriptor<T>>, SchemaError> {
        if let Some(existing) = self.get::<T>() {
            return Ok(existing);
        }

        let built: Arc<dyn Any + Send + Sync> =
            Arc::new(T::schema(SchemaBuilder::new()).build()?);

        let entry = {
            let mut schemas = self.schemas.write();
            schemas.entry(TypeId::of::<T>()).or_insert(built).clone()
        };
        let descriptor = entry
            .downcast::<SchemaDescriptor<T>>()
            .unwrap_or_else(|_| unreachable!("schemas are keyed by their record TypeId"));

        tracing::debug!(
            record = descriptor.record_name(),
            fields = descriptor.len(),
            "built schema on first use"
        );
        Ok(descriptor)
    }

    /// Returns true if `T` has a schema in this registry.
    pub fn contains<T: 'static>(&self) -> bool {
        self.schemas.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[derive(Default)]
    struct Wafer {
        fab: Option<String>,
        vendor_code: Option<String>,
    }

    impl Record for Wafer {
        fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
            schema
                .field(field!(Wafer, "fab" => fab))
                .field(field!(Wafer, "vendor_code" => vendor_code).not_blank())
        }
    }

    #[derive(Default)]
    struct Broken {
        a: Option<String>,
        b: Option<String>,
    }

    impl Record for Broken {
        fn schema(schema: SchemaBuilder<Self>) -> SchemaBuilder<Self> {
            schema
                .field(field!(Broken, "x" => a))
                .field(field!(Broken, "x" => b))
        }
    }

    #[test]
    fn test_schema_for_builds_once() {
        let registry = SchemaRegistry::new();
        assert!(!registry.contains::<Wafer>());

        let first = registry.schema_for::<Wafer>().unwrap();
        let second = registry.schema_for::<Wafer>().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_explicit_registration_wins_over_record() {
        let registry = SchemaRegistry::new();
        let explicit = registry
            .register(SchemaBuilder::<Wafer>::new().field(field!(Wafer, "fab" => fab)))
            .unwrap();

        let looked_up = registry.schema_for::<Wafer>().unwrap();
        assert!(Arc::ptr_eq(&explicit, &looked_up));
        assert_eq!(looked_up.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = SchemaRegistry::new();
        registry.schema_for::<Wafer>().unwrap();

        let result = registry.register(SchemaBuilder::<Wafer>::new());
        assert!(matches!(result, Err(SchemaError::AlreadyRegistered(_))));
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let registry = SchemaRegistry::new();
        assert!(registry.schema_for::<Broken>().is_err());
        assert!(!registry.contains::<Broken>());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clone_shares_storage() {
        let registry = SchemaRegistry::new();
        let clone = registry.clone();
        registry.schema_for::<Wafer>().unwrap();
        assert!(clone.get::<Wafer>().is_some());
    }
}
