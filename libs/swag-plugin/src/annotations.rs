//! Declarative documentation metadata for controllers and handlers.
//!
//! Controllers opt into automatic documentation by registering a
//! [`ControllerDoc`] naming the type their success responses carry. Override
//! permissions can be granted for a whole controller or for a single handler;
//! both levels are OR-ed when the CRUD filter resolves them.
//!
//! The registry is filled at route-registration time and is read-only
//! afterwards; share it through an `Arc`.

use std::collections::HashMap;

use swag_gen::TypeSchema;

use crate::helpers;

/// Controller marker: the type documented for 200/201 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerDoc {
    passed_type: TypeSchema,
}

impl ControllerDoc {
    #[must_use]
    pub fn new<T: utoipa::ToSchema + 'static>() -> Self {
        Self::from_type_schema(TypeSchema::of::<T>())
    }

    #[must_use]
    pub const fn from_type_schema(passed_type: TypeSchema) -> Self {
        Self { passed_type }
    }

    #[must_use]
    pub const fn passed_type(&self) -> &TypeSchema {
        &self.passed_type
    }
}

/// Permission for generated text to replace authored summary/description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideFlags {
    pub allow_summary: bool,
    pub allow_description: bool,
}

impl OverrideFlags {
    pub const NONE: Self = Self::new(false, false);
    pub const ALL: Self = Self::new(true, true);

    #[must_use]
    pub const fn new(allow_summary: bool, allow_description: bool) -> Self {
        Self {
            allow_summary,
            allow_description,
        }
    }

    /// Field-wise OR of two flag sets.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            allow_summary: helpers::either(self.allow_summary, other.allow_summary),
            allow_description: helpers::either(self.allow_description, other.allow_description),
        }
    }
}

/// Registry of controller markers and override flags.
#[derive(Debug, Default)]
pub struct SwagAnnotations {
    controllers: HashMap<String, ControllerDoc>,
    class_overrides: HashMap<String, OverrideFlags>,
    /// Keyed by controller, then handler
    method_overrides: HashMap<String, HashMap<String, OverrideFlags>>,
}

impl SwagAnnotations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `controller` for automatic documentation with `T` as its success body.
    pub fn swag_controller<T: utoipa::ToSchema + 'static>(
        &mut self,
        controller: impl Into<String>,
    ) -> &mut Self {
        self.controller_doc(controller, ControllerDoc::new::<T>())
    }

    pub fn controller_doc(&mut self, controller: impl Into<String>, doc: ControllerDoc) -> &mut Self {
        let controller = controller.into();
        tracing::trace!(
            %controller,
            passed_type = doc.passed_type().type_name(),
            "Registered swag controller"
        );
        self.controllers.insert(controller, doc);
        self
    }

    /// Grant override permissions to every handler of `controller`.
    pub fn override_class(&mut self, controller: impl Into<String>, flags: OverrideFlags) -> &mut Self {
        self.class_overrides.insert(controller.into(), flags);
        self
    }

    /// Grant override permissions to one handler.
    pub fn override_method(
        &mut self,
        controller: impl Into<String>,
        handler: impl Into<String>,
        flags: OverrideFlags,
    ) -> &mut Self {
        self.method_overrides
            .entry(controller.into())
            .or_default()
            .insert(handler.into(), flags);
        self
    }

    #[must_use]
    pub fn controller(&self, controller: &str) -> Option<&ControllerDoc> {
        self.controllers.get(controller)
    }

    /// Class-level flags, all false when none were registered.
    #[must_use]
    pub fn class_flags(&self, controller: &str) -> OverrideFlags {
        self.class_overrides
            .get(controller)
            .copied()
            .unwrap_or_default()
    }

    /// Method-level flags, all false when none were registered.
    #[must_use]
    pub fn method_flags(&self, controller: &str, handler: &str) -> OverrideFlags {
        self.method_overrides
            .get(controller)
            .and_then(|handlers| handlers.get(handler))
            .copied()
            .unwrap_or_default()
    }

    /// Class and method flags OR-ed together.
    #[must_use]
    pub fn effective_flags(&self, controller: &str, handler: &str) -> OverrideFlags {
        self.class_flags(controller)
            .merge(self.method_flags(controller, handler))
    }

    #[must_use]
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(utoipa::ToSchema)]
    #[allow(dead_code)]
    struct Pet {
        name: String,
    }

    #[test]
    fn missing_flags_default_to_false() {
        let annotations = SwagAnnotations::new();
        assert_eq!(annotations.class_flags("pets"), OverrideFlags::NONE);
        assert_eq!(annotations.method_flags("pets", "get_pet"), OverrideFlags::NONE);
        assert_eq!(annotations.effective_flags("pets", "get_pet"), OverrideFlags::NONE);
    }

    #[test]
    fn class_and_method_flags_are_ored_per_field() {
        let mut annotations = SwagAnnotations::new();
        annotations
            .override_class("pets", OverrideFlags::new(true, false))
            .override_method("pets", "get_pet", OverrideFlags::new(false, true));

        assert_eq!(annotations.effective_flags("pets", "get_pet"), OverrideFlags::ALL);
        assert_eq!(
            annotations.effective_flags("pets", "list_pets"),
            OverrideFlags::new(true, false)
        );
    }

    #[test]
    fn method_flags_are_scoped_to_their_controller() {
        let mut annotations = SwagAnnotations::new();
        annotations.override_method("pets", "get", OverrideFlags::ALL);

        assert_eq!(annotations.method_flags("owners", "get"), OverrideFlags::NONE);
    }

    #[test]
    fn controller_marker_lookup() {
        let mut annotations = SwagAnnotations::new();
        annotations.swag_controller::<Pet>("pets");

        let doc = annotations.controller("pets").unwrap();
        assert_eq!(*doc.passed_type(), TypeSchema::of::<Pet>());
        assert!(annotations.controller("owners").is_none());
        assert_eq!(annotations.controller_count(), 1);
    }
}
