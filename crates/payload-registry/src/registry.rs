// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type registry: value factories and portable names.
//!
//! Resolves any of the three payload identifiers to a value factory or a
//! portable name:
//!
//! | Identifier      | Builtin types        | Application types            |
//! |-----------------|----------------------|------------------------------|
//! | [`TypeTag`]     | O(1) table index     | n/a (tag is always 0)        |
//! | name (`&str`)   | linear scan (N = 82) | [`CustomTypes`] by name      |
//! | [`NativeType`]  | n/a                  | [`CustomTypes`] by type      |
//!
//! # Thread Safety
//!
//! The builtin table is immutable after construction, so lookups need no
//! synchronization. Application types are read through [`CustomTypes`] on
//! every call and never cached; the implementation is responsible for its
//! own concurrency (the default [`crate::RuntimeConfig`] uses `DashMap`).

use crate::builtin::{validate_builtin_table, BuiltinType, BUILTIN_TYPES};
use crate::config::DEFAULT_TYPE_NAME;
use crate::error::Result;
use crate::native::NativeType;
use crate::tag::TypeTag;
use crate::value::{Payload, TypeErasedValuePtr, ValueFactory};
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// CustomTypes trait
// ---------------------------------------------------------------------------

/// Read-only view of application (non-builtin) payload types.
///
/// Owned by the surrounding configuration, queried by [`TypeRegistry`] at
/// lookup time. The registry never writes through this interface.
pub trait CustomTypes: Send + Sync {
    /// Factory registered under a portable name.
    fn value_factory_by_name(&self, name: &str) -> Option<ValueFactory>;

    /// Factory registered for a native type.
    fn value_factory_by_type(&self, native: &NativeType) -> Option<ValueFactory>;

    /// Portable name registered for a native type.
    fn type_name_by_type(&self, native: &NativeType) -> Option<Arc<str>>;
}

// ---------------------------------------------------------------------------
// TypeRegistry
// ---------------------------------------------------------------------------

struct BuiltinSlot {
    name: Arc<str>,
    factory: ValueFactory,
}

/// Per-context registry of payload types.
///
/// # Example
///
/// ```rust
/// use payload_registry::{NativeType, RuntimeConfig, TypeRegistry, TypeTag};
/// use std::sync::Arc;
///
/// let registry = TypeRegistry::new(Arc::new(RuntimeConfig::new()));
///
/// let tag = registry.builtin_tag("@i32");
/// let value = registry.make_value(tag);
/// assert_eq!(value.downcast_ref::<i32>(), Some(&0));
///
/// assert_eq!(&*registry.portable_name(tag, None), "@i32");
/// assert!(registry.make_value_by_name("not_a_type").is_none());
/// assert_eq!(&*registry.portable_name(TypeTag::NONE, None), "???");
/// ```
pub struct TypeRegistry {
    /// Position `i` holds tag `i + 1`
    builtin: Box<[BuiltinSlot]>,
    /// Injected at construction, never mutated through here
    custom: Arc<dyn CustomTypes>,
    default_type_name: Arc<str>,
}

impl TypeRegistry {
    /// Registry over the default builtin table.
    #[must_use]
    pub fn new(custom: Arc<dyn CustomTypes>) -> Self {
        Self::with_builtins(BUILTIN_TYPES, custom)
    }

    /// Registry over an explicit builtin table.
    ///
    /// # Panics
    ///
    /// Panics if `table` fails [`validate_builtin_table`]: a malformed static
    /// table is a programming error, not a runtime condition.
    #[must_use]
    pub fn with_builtins(table: &[BuiltinType], custom: Arc<dyn CustomTypes>) -> Self {
        match Self::try_with_builtins(table, custom) {
            Ok(registry) => registry,
            Err(e) => panic!("[types] {}", e),
        }
    }

    /// Registry over an explicit builtin table, reporting validation errors.
    pub fn try_with_builtins(table: &[BuiltinType], custom: Arc<dyn CustomTypes>) -> Result<Self> {
        validate_builtin_table(table)?;

        let builtin: Box<[BuiltinSlot]> = table
            .iter()
            .map(|entry| BuiltinSlot {
                name: Arc::from(entry.name),
                factory: entry.factory,
            })
            .collect();

        log::debug!("[types] registry ready with {} builtin types", builtin.len());

        Ok(Self {
            builtin,
            custom,
            default_type_name: Arc::from(DEFAULT_TYPE_NAME),
        })
    }

    // -----------------------------------------------------------------------
    // Value factories
    // -----------------------------------------------------------------------

    /// Create an empty container for a builtin tag.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= tag <= self.len()`. Valid tags only ever come from
    /// this registry or a peer sharing the same table.
    #[must_use]
    pub fn make_value(&self, tag: TypeTag) -> TypeErasedValuePtr {
        (self.slot(tag).factory)()
    }

    /// Create an empty container for a portable name.
    ///
    /// Builtin names are tried first, then application names. Returns `None`
    /// if neither knows `name`; what that means is up to the caller.
    #[must_use]
    pub fn make_value_by_name(&self, name: &str) -> Option<TypeErasedValuePtr> {
        if let Some(slot) = self.builtin.iter().find(|slot| &*slot.name == name) {
            return Some((slot.factory)());
        }
        match self.custom.value_factory_by_name(name) {
            Some(factory) => Some(factory()),
            None => {
                log::debug!("[types] no value factory for name '{}'", name);
                None
            }
        }
    }

    /// Create an empty container for an application type.
    ///
    /// Only application types are resolved here; builtins are identified by
    /// tag or name.
    #[must_use]
    pub fn make_value_by_type(&self, native: &NativeType) -> Option<TypeErasedValuePtr> {
        match self.custom.value_factory_by_type(native) {
            Some(factory) => Some(factory()),
            None => {
                log::debug!("[types] no value factory for type {}", native);
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Portable names
    // -----------------------------------------------------------------------

    /// Portable name for a tag or, if `tag` is [`TypeTag::NONE`], a native type.
    ///
    /// A non-zero tag always wins and `native` is ignored. Never fails:
    /// unresolvable types get [`DEFAULT_TYPE_NAME`].
    ///
    /// # Panics
    ///
    /// Panics if `tag` is non-zero and outside the builtin table.
    #[must_use]
    pub fn portable_name(&self, tag: TypeTag, native: Option<&NativeType>) -> Arc<str> {
        if tag.is_builtin() {
            return Arc::clone(&self.slot(tag).name);
        }
        let Some(native) = native else {
            return Arc::clone(&self.default_type_name);
        };
        self.custom
            .type_name_by_type(native)
            .unwrap_or_else(|| Arc::clone(&self.default_type_name))
    }

    /// Portable name for `T`.
    #[must_use]
    pub fn portable_name_of<T: Payload>(&self) -> Arc<str> {
        self.portable_name(T::TYPE_TAG, Some(&NativeType::of::<T>()))
    }

    /// Name reported for unresolvable types.
    #[inline]
    #[must_use]
    pub fn default_type_name(&self) -> &str {
        &self.default_type_name
    }

    // -----------------------------------------------------------------------
    // Builtin table introspection
    // -----------------------------------------------------------------------

    /// Number of builtin types (highest valid tag).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.builtin.len()
    }

    /// Returns true if the builtin table is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builtin.is_empty()
    }

    /// Checked builtin name lookup; `None` for [`TypeTag::NONE`] or out of range.
    #[must_use]
    pub fn builtin_name(&self, tag: TypeTag) -> Option<&str> {
        tag.index()
            .and_then(|i| self.builtin.get(i))
            .map(|slot| &*slot.name)
    }

    /// Tag of a builtin name, [`TypeTag::NONE`] if `name` is not builtin.
    #[must_use]
    pub fn builtin_tag(&self, name: &str) -> TypeTag {
        self.builtin
            .iter()
            .position(|slot| &*slot.name == name)
            .and_then(TypeTag::from_index)
            .unwrap_or(TypeTag::NONE)
    }

    /// All builtin types in tag order.
    pub fn builtins(&self) -> impl Iterator<Item = (TypeTag, &str)> + '_ {
        self.builtin
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| TypeTag::from_index(i).map(|tag| (tag, &*slot.name)))
    }

    fn slot(&self, tag: TypeTag) -> &BuiltinSlot {
        let slot = tag.index().and_then(|i| self.builtin.get(i));
        match slot {
            Some(slot) => slot,
            None => panic!(
                "[types] type tag {} out of range 1..={}",
                tag,
                self.builtin.len()
            ),
        }
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("builtin", &self.builtin.len())
            .field("default_type_name", &self.default_type_name)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::BUILTIN_COUNT;
    use crate::config::RuntimeConfig;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Order {
        id: u64,
    }

    impl Payload for Order {}

    #[derive(Debug, Clone, Default)]
    struct Unregistered;

    impl Payload for Unregistered {}

    fn registry_with_config() -> (TypeRegistry, RuntimeConfig) {
        let config = RuntimeConfig::new();
        let registry = TypeRegistry::new(Arc::new(config.clone()));
        (registry, config)
    }

    fn small_table() -> [BuiltinType; 2] {
        [
            BuiltinType::new::<i32>(1, "@i32"),
            BuiltinType::new::<String>(2, "@str"),
        ]
    }

    #[test]
    fn test_small_table_scenario() {
        let registry =
            TypeRegistry::with_builtins(&small_table(), Arc::new(RuntimeConfig::new()));
        assert_eq!(registry.len(), 2);

        let by_tag = registry.make_value(TypeTag::new(1));
        let by_name = registry.make_value_by_name("@i32").expect("@i32 is builtin");
        assert_eq!(by_tag.downcast_ref::<i32>(), Some(&0));
        assert_eq!(by_name.downcast_ref::<i32>(), Some(&0));

        assert!(registry.make_value_by_name("not_a_type").is_none());

        let native = NativeType::of::<u8>();
        assert_eq!(&*registry.portable_name(TypeTag::new(2), Some(&native)), "@str");
        assert_eq!(&*registry.portable_name(TypeTag::NONE, None), "???");
    }

    #[test]
    fn test_every_tag_makes_its_type() {
        let (registry, _) = registry_with_config();
        assert_eq!(registry.len(), BUILTIN_COUNT);
        for (tag, name) in registry.builtins() {
            let value = registry.make_value(tag);
            assert_eq!(value.type_tag(), tag, "tag {} ({})", tag, name);
        }
    }

    #[test]
    fn test_successive_values_are_distinct() {
        let (registry, _) = registry_with_config();
        let tag = TypeTag::new(23); // @str
        let mut first = registry.make_value(tag);
        let second = registry.make_value(tag);
        first
            .downcast_mut::<String>()
            .expect("@str holds a String")
            .push_str("changed");
        assert_eq!(second.downcast_ref::<String>().map(String::as_str), Some(""));
    }

    #[test]
    fn test_name_and_tag_agree() {
        let (registry, _) = registry_with_config();
        for (tag, name) in registry.builtins() {
            let by_name = registry.make_value_by_name(name).expect("builtin name");
            let by_tag = registry.make_value(tag);
            assert_eq!(by_name.native_type(), by_tag.native_type(), "{}", name);
            assert_eq!(registry.builtin_tag(name), tag);
            assert_eq!(registry.builtin_name(tag), Some(name));
        }
    }

    #[test]
    fn test_nonzero_tag_ignores_native_type() {
        let (registry, config) = registry_with_config();
        config.add_message_type::<Order>("Order").expect("register Order");
        let native = NativeType::of::<Order>();
        assert_eq!(&*registry.portable_name(TypeTag::new(15), Some(&native)), "@i32");
        assert_eq!(&*registry.portable_name(TypeTag::new(15), None), "@i32");
    }

    #[test]
    fn test_custom_types_resolve_through_config() {
        let (registry, config) = registry_with_config();
        let native = NativeType::of::<Order>();

        // Not yet registered
        assert!(registry.make_value_by_name("Order").is_none());
        assert!(registry.make_value_by_type(&native).is_none());
        assert_eq!(&*registry.portable_name(TypeTag::NONE, Some(&native)), "???");

        // Registered after the registry was built: visible immediately
        config.add_message_type::<Order>("Order").expect("register Order");

        let value = registry.make_value_by_name("Order").expect("by name");
        assert_eq!(value.downcast_ref::<Order>(), Some(&Order::default()));
        let value = registry.make_value_by_type(&native).expect("by type");
        assert!(value.is::<Order>());
        assert_eq!(&*registry.portable_name(TypeTag::NONE, Some(&native)), "Order");
        assert_eq!(&*registry.portable_name_of::<Order>(), "Order");
    }

    #[test]
    fn test_builtins_not_resolved_by_native_type() {
        let (registry, _) = registry_with_config();
        assert!(registry.make_value_by_type(&NativeType::of::<i32>()).is_none());
        // but portable_name_of takes the tag path
        assert_eq!(&*registry.portable_name_of::<i32>(), "@i32");
    }

    #[test]
    fn test_unknown_identifiers() {
        let (registry, config) = registry_with_config();
        assert!(registry.make_value_by_name("").is_none());
        assert!(registry.make_value_by_name("@nope").is_none());
        assert!(registry
            .make_value_by_type(&NativeType::of::<Unregistered>())
            .is_none());
        assert_eq!(&*registry.portable_name_of::<Unregistered>(), "???");
        assert_eq!(registry.builtin_tag("Order"), TypeTag::NONE);
        assert_eq!(registry.builtin_name(TypeTag::NONE), None);
        assert_eq!(registry.builtin_name(TypeTag::new(500)), None);
        assert!(config.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_make_value_zero_tag_panics() {
        let (registry, _) = registry_with_config();
        let _ = registry.make_value(TypeTag::NONE);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_make_value_past_end_panics() {
        let (registry, _) = registry_with_config();
        let _ = registry.make_value(TypeTag::new(BUILTIN_COUNT as u16 + 1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_portable_name_past_end_panics() {
        let registry =
            TypeRegistry::with_builtins(&small_table(), Arc::new(RuntimeConfig::new()));
        let _ = registry.portable_name(TypeTag::new(3), None);
    }

    #[test]
    fn test_try_with_builtins_accepts_unsorted_table() {
        let table = [
            BuiltinType::new::<String>(1, "@str"),
            BuiltinType::new::<i32>(2, "@i32"),
            BuiltinType::new::<f64>(3, "double"),
        ];
        let registry = TypeRegistry::try_with_builtins(&table, Arc::new(RuntimeConfig::new()))
            .expect("unsorted table is valid");
        assert_eq!(registry.builtin_tag("double"), TypeTag::new(3));
        assert!(registry.make_value_by_name("@i32").is_some_and(|v| v.is::<i32>()));
    }

    #[test]
    fn test_try_with_builtins_rejects_bad_table() {
        let duplicate = [
            BuiltinType::new::<String>(1, "@str"),
            BuiltinType::new::<i32>(2, "@str"),
        ];
        assert!(
            TypeRegistry::try_with_builtins(&duplicate, Arc::new(RuntimeConfig::new())).is_err()
        );
    }

    #[test]
    #[should_panic(expected = "Invalid builtin table")]
    fn test_with_builtins_panics_on_bad_table() {
        let table = [BuiltinType::new::<i32>(2, "@i32")];
        let _ = TypeRegistry::with_builtins(&table, Arc::new(RuntimeConfig::new()));
    }

    #[test]
    fn test_registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TypeRegistry>();
    }
}
