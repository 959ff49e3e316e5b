// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Native runtime type descriptors.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime handle for a concrete Rust type.
///
/// Equality and hashing only look at the [`TypeId`]. The diagnostic name comes
/// from [`std::any::type_name`], which is not stable across compiler versions,
/// so it must never be sent over the wire. Use the registry's portable names
/// for that.
#[derive(Clone, Copy)]
pub struct NativeType {
    id: TypeId,
    name: &'static str,
}

impl NativeType {
    /// Descriptor for `T`.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying [`TypeId`].
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Compiler-provided type name (diagnostics only).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this descriptor refers to `T`.
    #[inline]
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for NativeType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NativeType {}

impl Hash for NativeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeType").field(&self.name).finish()
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity() {
        assert_eq!(NativeType::of::<u32>(), NativeType::of::<u32>());
        assert_ne!(NativeType::of::<u32>(), NativeType::of::<i32>());
        assert!(NativeType::of::<String>().is::<String>());
        assert!(!NativeType::of::<String>().is::<&str>());
    }

    #[test]
    fn test_hash_uses_type_id() {
        let mut set = HashSet::new();
        set.insert(NativeType::of::<u8>());
        set.insert(NativeType::of::<u8>());
        set.insert(NativeType::of::<u16>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_name_for_diagnostics() {
        assert_eq!(NativeType::of::<u64>().name(), "u64");
        assert_eq!(NativeType::of::<bool>().to_string(), "bool");
    }
}
