// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-erased payload containers.
//!
//! A [`TypeErasedValue`] holds a value of some concrete [`Payload`] type behind
//! an object-safe interface, so mailboxes and codecs can move it around
//! without knowing the type. Value factories produce fresh, empty
//! (`Default`) containers.
//!
//! # Example
//!
//! ```rust
//! use payload_registry::{make_type_erased_value, Payload, TypeErasedValuePtr};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Reading {
//!     celsius: f64,
//! }
//!
//! impl Payload for Reading {}
//!
//! let mut value: TypeErasedValuePtr = make_type_erased_value::<Reading>();
//! value.downcast_mut::<Reading>().unwrap().celsius = 21.5;
//!
//! let copy = value.copy();
//! assert_eq!(copy.downcast_ref::<Reading>(), Some(&Reading { celsius: 21.5 }));
//! ```

use crate::native::NativeType;
use crate::tag::TypeTag;
use std::any::Any;
use std::fmt;

/// A type that can travel as a message payload.
///
/// Builtin types override [`Payload::TYPE_TAG`] with their reserved wire
/// tag. Application types keep the default ([`TypeTag::NONE`]) and are
/// resolved by name through the configuration store.
pub trait Payload: Any + Clone + fmt::Debug + Default + Send + Sync {
    /// Builtin tag, or [`TypeTag::NONE`] for application types.
    const TYPE_TAG: TypeTag = TypeTag::NONE;
}

/// Object-safe view of a payload value.
pub trait TypeErasedValue: Send + Sync + fmt::Debug {
    /// Builtin tag of the contained type ([`TypeTag::NONE`] if custom).
    fn type_tag(&self) -> TypeTag;

    /// Native descriptor of the contained type.
    fn native_type(&self) -> NativeType;

    /// Borrow the contained value as `Any`.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow the contained value as `Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Deep copy into a new, independently owned container.
    fn copy(&self) -> TypeErasedValuePtr;
}

/// Owned type-erased container.
pub type TypeErasedValuePtr = Box<dyn TypeErasedValue>;

/// Zero-argument constructor for an empty container of one concrete type.
pub type ValueFactory = fn() -> TypeErasedValuePtr;

impl<T: Payload> TypeErasedValue for T {
    fn type_tag(&self) -> TypeTag {
        T::TYPE_TAG
    }

    fn native_type(&self) -> NativeType {
        NativeType::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn copy(&self) -> TypeErasedValuePtr {
        Box::new(self.clone())
    }
}

impl dyn TypeErasedValue {
    /// Returns true if the contained value is a `T`.
    #[inline]
    pub fn is<T: Payload>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the contained value as `T`, if it is one.
    #[inline]
    pub fn downcast_ref<T: Payload>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the contained value as `T`, if it is one.
    #[inline]
    pub fn downcast_mut<T: Payload>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for TypeErasedValuePtr {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Generic value factory: allocate an empty container holding `T::default()`.
#[must_use]
pub fn make_type_erased_value<T: Payload>() -> TypeErasedValuePtr {
    Box::new(T::default())
}

/// Builtin tag of `T`, [`TypeTag::NONE`] for application types.
#[inline]
#[must_use]
pub const fn type_tag_of<T: Payload>() -> TypeTag {
    T::TYPE_TAG
}
