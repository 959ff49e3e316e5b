// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime configuration: application (custom) payload types.
//!
//! Builtin types are fixed at compile time (see [`crate::builtin`]). Every
//! other payload type must be announced here before it can be created by
//! name or native type, or given a portable name.
//!
//! # Architecture
//!
//! Three mappings, all keyed for O(1) lookup:
//!
//! - name -> (native type, factory)
//! - native type -> factory
//! - native type -> name
//!
//! # Performance
//!
//! - **Lock-free reads**: `DashMap` sharding, no global `RwLock`
//! - **Cheap clones**: all maps live behind `Arc`, clones share state
//! - **Zero-copy names**: `Arc<str>` shared between maps and callers
//!
//! # Example
//!
//! ```rust
//! use payload_registry::{Payload, RuntimeConfig};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Position {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Payload for Position {}
//!
//! let config = RuntimeConfig::new();
//! config.add_message_type::<Position>("Position").unwrap();
//!
//! // Reserved prefix belongs to builtins
//! assert!(config.add_message_type::<Position>("@position").is_err());
//! ```

use crate::builtin::BUILTIN_TYPES;
use crate::error::{Error, Result};
use crate::native::NativeType;
use crate::registry::CustomTypes;
use crate::value::{make_type_erased_value, Payload, ValueFactory};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

// =======================================================================
// Constants
// =======================================================================

/// Prefix reserved for builtin type names.
///
/// Application type names must not start with it. The few builtins published
/// without it (`bool`, `double`, `float`, the `caf::*_atom` names) are
/// rejected by exact match.
pub const RESERVED_PREFIX: &str = "@";

/// Portable name reported when a type cannot be resolved.
pub const DEFAULT_TYPE_NAME: &str = "???";

// =======================================================================
// Runtime Configuration
// =======================================================================

#[derive(Debug, Clone, Copy)]
struct CustomType {
    native: NativeType,
    factory: ValueFactory,
}

/// Shared store of application payload types (thread-safe, lock-free).
///
/// Populated during setup, read by every [`crate::TypeRegistry`] built
/// from it. Registration stays safe while registries are in service; a
/// type registered late simply becomes visible to the next lookup.
///
/// # Usage Pattern
///
/// ```ignore
/// let config = RuntimeConfig::new();
/// config.add_message_type::<Position>("Position")?;
///
/// // Clone = Arc counter increments, state is shared
/// let context = Context::new(config.clone());
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// name -> (native type, factory)
    value_factories_by_name: Arc<DashMap<Arc<str>, CustomType>>,

    /// native type -> factory
    value_factories_by_type: Arc<DashMap<NativeType, ValueFactory>>,

    /// native type -> name
    type_names_by_type: Arc<DashMap<NativeType, Arc<str>>>,
}

impl RuntimeConfig {
    /// Create an empty configuration (no custom types).
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            value_factories_by_name: Arc::new(DashMap::new()),
            value_factories_by_type: Arc::new(DashMap::new()),
            type_names_by_type: Arc::new(DashMap::new()),
        }
    }

    // ===================================================================
    // Registration
    // ===================================================================

    /// Announce an application payload type under a portable name.
    ///
    /// # Validation
    ///
    /// - Name must be non-empty and must not start with [`RESERVED_PREFIX`]
    /// - Name must not be the portable name of a builtin (`bool`, `double`)
    /// - `T` must not be a builtin type (it already has a tag and a name)
    /// - Name and type must not already be bound to something else
    ///
    /// Registering the exact same `(name, T)` pair twice is a no-op.
    pub fn add_message_type<T: Payload>(&self, name: &str) -> Result<()> {
        let native = NativeType::of::<T>();

        if name.is_empty() {
            return Err(Error::EmptyTypeName);
        }
        if name.starts_with(RESERVED_PREFIX) {
            return Err(Error::ReservedTypeName(name.to_string()));
        }
        if BUILTIN_TYPES.iter().any(|builtin| builtin.name == name) {
            return Err(Error::BuiltinTypeName(name.to_string()));
        }
        if T::TYPE_TAG.is_builtin() {
            return Err(Error::BuiltinTypeRegistration {
                native: native.name(),
                tag: T::TYPE_TAG,
            });
        }

        // Lock order: by_name, then type_names. Holding the name entry makes
        // the check-then-insert atomic against concurrent registrations.
        match self.value_factories_by_name.entry(Arc::from(name)) {
            Entry::Occupied(entry) => {
                let existing = entry.get().native;
                if existing == native {
                    log::debug!("[config] message type '{}' already registered", name);
                    return Ok(());
                }
                Err(Error::DuplicateTypeName {
                    name: name.to_string(),
                    existing: existing.name(),
                })
            }
            Entry::Vacant(entry) => match self.type_names_by_type.entry(native) {
                Entry::Occupied(existing) => Err(Error::DuplicateNativeType {
                    native: native.name(),
                    existing: existing.get().to_string(),
                }),
                Entry::Vacant(names) => {
                    let factory: ValueFactory = make_type_erased_value::<T>;
                    let portable = Arc::clone(entry.key());
                    names.insert(Arc::clone(&portable));
                    self.value_factories_by_type.insert(native, factory);
                    entry.insert(CustomType { native, factory });
                    log::debug!(
                        "[config] registered message type '{}' ({})",
                        portable,
                        native
                    );
                    Ok(())
                }
            },
        }
    }

    /// Remove a previously announced application type.
    ///
    /// Takes the same locks in the same order as registration, so a
    /// concurrent `add_message_type` observes either all three mappings or
    /// none of them.
    ///
    /// Returns `false` if `T` was not registered.
    pub fn remove_message_type<T: Payload>(&self) -> bool {
        let native = NativeType::of::<T>();
        loop {
            let Some(name) = self
                .type_names_by_type
                .get(&native)
                .map(|entry| Arc::clone(&entry))
            else {
                return false;
            };

            // Lock order: by_name, then type_names (see add_message_type).
            let Entry::Occupied(by_name) = self.value_factories_by_name.entry(name) else {
                continue;
            };
            if by_name.get().native != native {
                continue;
            }
            let Entry::Occupied(by_type) = self.type_names_by_type.entry(native) else {
                continue;
            };

            self.value_factories_by_type.remove(&native);
            by_type.remove();
            let (name, _) = by_name.remove_entry();
            log::debug!("[config] removed message type '{}' ({})", name, native);
            return true;
        }
    }

    // ===================================================================
    // Introspection
    // ===================================================================

    /// Number of registered application types.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.value_factories_by_name.len()
    }

    /// Returns true if no application type is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value_factories_by_name.is_empty()
    }

    /// Sorted snapshot of all registered application type names.
    #[must_use]
    pub fn type_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self
            .value_factories_by_name
            .iter()
            .map(|entry| Arc::clone(entry.key()))
            .collect();
        names.sort();
        names
    }

    /// Returns true if a type is registered under `name`.
    #[inline]
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.value_factories_by_name.contains_key(name)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomTypes for RuntimeConfig {
    fn value_factory_by_name(&self, name: &str) -> Option<ValueFactory> {
        self.value_factories_by_name
            .get(name)
            .map(|entry| entry.factory)
    }

    fn value_factory_by_type(&self, native: &NativeType) -> Option<ValueFactory> {
        self.value_factories_by_type.get(native).map(|entry| *entry)
    }

    fn type_name_by_type(&self, native: &NativeType) -> Option<Arc<str>> {
        self.type_names_by_type
            .get(native)
            .map(|entry| Arc::clone(&entry))
    }
}

// =======================================================================
// Tests
// =======================================================================
