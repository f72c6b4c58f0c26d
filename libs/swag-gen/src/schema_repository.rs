//! Shared, deduplicating store of component schemas.
//!
//! Filters never build schemas by hand: they ask the repository for a
//! reference to a Rust type, and the repository registers that type (and all
//! of its transitive dependencies) under `components/schemas` the first time
//! it is seen.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use dashmap::DashMap;
use utoipa::openapi::{Ref, RefOr, schema::Schema};

/// Type alias for schema collections produced by `utoipa`.
pub type SchemaCollection = Vec<(String, RefOr<Schema>)>;

/// Type-erased handle on a `utoipa::ToSchema` type.
///
/// This is what controllers and endpoints store when they need to say "the
/// body is of type `T`" without being generic over `T`.
#[derive(Clone, Copy)]
pub struct TypeSchema {
    type_id: TypeId,
    type_name: &'static str,
    collect: fn() -> (String, SchemaCollection),
}

impl TypeSchema {
    #[must_use]
    pub fn of<T: utoipa::ToSchema + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            collect: collect_schemas::<T>,
        }
    }

    /// Fully qualified Rust type name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for TypeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSchema")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for TypeSchema {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeSchema {}

fn collect_schemas<T: utoipa::ToSchema>() -> (String, SchemaCollection) {
    use utoipa::PartialSchema;

    // T's own schema goes first (actual object, not a ref) to avoid
    // self-referential components.
    let root_name = T::name().to_string();
    let mut collected: SchemaCollection = vec![(root_name.clone(), <T as PartialSchema>::schema())];
    T::schemas(&mut collected);
    (root_name, collected)
}

/// Component schema store, deduplicated by type identity.
pub struct SchemaRepository {
    /// Component name per already registered Rust type
    known_types: DashMap<TypeId, String>,
    /// Store schema components using arc-swap for lock-free reads
    components: ArcSwap<HashMap<String, RefOr<Schema>>>,
}

impl SchemaRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            known_types: DashMap::new(),
            components: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Register `ty` if needed and return a `$ref` to its component.
    #[must_use]
    pub fn generate_schema(&self, ty: &TypeSchema) -> RefOr<Schema> {
        RefOr::Ref(Ref::from_schema_name(self.ensure(ty)))
    }

    /// Typed shorthand for [`Self::generate_schema`].
    #[must_use]
    pub fn generate_schema_for<T: utoipa::ToSchema + 'static>(&self) -> RefOr<Schema> {
        self.generate_schema(&TypeSchema::of::<T>())
    }

    /// Ensure `ty` (including transitive dependencies) is registered and
    /// return its canonical component name.
    pub fn ensure(&self, ty: &TypeSchema) -> String {
        if let Some(name) = self.known_types.get(&ty.type_id) {
            return name.value().clone();
        }

        let (root_name, collected) = (ty.collect)();
        self.merge_components(collected);
        self.known_types.insert(ty.type_id, root_name.clone());

        tracing::debug!(
            type_name = %ty.type_name,
            component = %root_name,
            "Registered schema component"
        );
        root_name
    }

    /// Copy-on-write merge of `schemas` into the component set.
    ///
    /// Identical content under a known name is skipped; differing content
    /// replaces the stored schema.
    fn merge_components(&self, schemas: SchemaCollection) {
        let mut components = (**self.components.load()).clone();

        for (name, schema) in schemas {
            if let Some(existing) = components.get(&name) {
                if serde_json::to_value(existing).ok() == serde_json::to_value(&schema).ok() {
                    continue;
                }
                tracing::warn!(%name, "Schema content conflict; keeping latest registration");
            }
            components.insert(name, schema);
        }

        self.components.store(Arc::new(components));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.load().contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.load().is_empty()
    }

    /// Current set of components.
    #[must_use]
    pub fn snapshot(&self) -> Arc<HashMap<String, RefOr<Schema>>> {
        self.components.load_full()
    }
}

impl Default for SchemaRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchemaRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRepository")
            .field("known_types", &self.known_types.len())
            .field("components", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use utoipa::openapi::schema::{ObjectBuilder, SchemaType, Type};

    #[derive(utoipa::ToSchema)]
    #[allow(dead_code)]
    struct Address {
        street: String,
    }

    #[derive(utoipa::ToSchema)]
    #[allow(dead_code)]
    struct Customer {
        id: i32,
        address: Address,
    }

    #[test]
    fn generate_schema_returns_component_ref() {
        let repo = SchemaRepository::new();
        let schema = repo.generate_schema_for::<Customer>();

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["$ref"], "#/components/schemas/Customer");
        assert!(repo.contains("Customer"));
    }

    #[test]
    fn transitive_dependencies_are_registered() {
        let repo = SchemaRepository::new();
        let _ = repo.generate_schema_for::<Customer>();

        assert!(repo.contains("Customer"));
        assert!(repo.contains("Address"));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn same_type_is_registered_once() {
        let repo = SchemaRepository::new();
        let first = repo.ensure(&TypeSchema::of::<Address>());
        let second = repo.ensure(&TypeSchema::of::<Address>());

        assert_eq!(first, second);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.known_types.len(), 1);
    }

    #[test]
    fn type_schema_equality_follows_type_identity() {
        assert_eq!(TypeSchema::of::<Address>(), TypeSchema::of::<Address>());
        assert_ne!(TypeSchema::of::<Address>(), TypeSchema::of::<Customer>());
        assert!(TypeSchema::of::<Address>().type_name().ends_with("Address"));
    }

    #[test]
    fn schema_conflict_uses_latest_version() {
        let repo = SchemaRepository::new();

        let v1 = Schema::Object(ObjectBuilder::new().schema_type(SchemaType::Type(Type::String)).build());
        repo.merge_components(vec![("Conflict".into(), RefOr::T(v1))]);

        let v2 = Schema::Object(ObjectBuilder::new().schema_type(SchemaType::Type(Type::Integer)).build());
        repo.merge_components(vec![("Conflict".into(), RefOr::T(v2))]);

        let stored = repo.snapshot();
        let json = serde_json::to_value(stored.get("Conflict").unwrap()).unwrap();
        assert_eq!(json["type"], "integer");
    }

    #[test]
    fn identical_registration_is_a_no_op() {
        let repo = SchemaRepository::new();
        let schema = Schema::Object(ObjectBuilder::new().schema_type(SchemaType::Type(Type::String)).build());

        repo.merge_components(vec![("Same".into(), RefOr::T(schema.clone()))]);
        repo.merge_components(vec![("Same".into(), RefOr::T(schema))]);

        assert_eq!(repo.len(), 1);
    }
}
