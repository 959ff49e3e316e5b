// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # payload-registry - Runtime payload type registry
//!
//! Lets a messaging system move strongly typed payloads through generic
//! channels (mailboxes, wire codecs) as type-erased values, and recreate
//! them on demand from any of three identifiers:
//!
//! - a compact numeric [`TypeTag`] (builtin types only, wire-visible)
//! - a stable portable name (builtin and application types)
//! - a [`NativeType`] descriptor (application types)
//!
//! ## Quick Start
//!
//! ```rust
//! use payload_registry::{Context, NativeType, Payload, RuntimeConfig, TypeTag};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Temperature {
//!     celsius: f64,
//! }
//!
//! impl Payload for Temperature {}
//!
//! let config = RuntimeConfig::new();
//! config.add_message_type::<Temperature>("sensors.Temperature").unwrap();
//! let context = Context::new(config);
//! let types = context.types();
//!
//! // Builtins: tag <-> name
//! let tag = types.builtin_tag("@str");
//! assert!(types.make_value(tag).is::<String>());
//!
//! // Application types: by name or native type
//! let value = types.make_value_by_name("sensors.Temperature").unwrap();
//! assert!(value.is::<Temperature>());
//! let native = NativeType::of::<Temperature>();
//! assert_eq!(&*types.portable_name(TypeTag::NONE, Some(&native)), "sensors.Temperature");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                  Context (one per messaging system)                 |
//! +---------------------------------------------------------------------+
//! |  TypeRegistry                        |  RuntimeConfig               |
//! |   builtin table (tag, name, factory) |   name -> factory            |
//! |   make_value / portable_name  ------>|   native -> factory / name   |
//! +---------------------------------------------------------------------+
//! |  BUILTIN_TYPES (static, tag order = wire contract)                  |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Modules Overview
//!
//! - [`registry`] - Value factories and portable name resolution
//! - [`builtin`] - The builtin type table and its invariants
//! - [`config`] - Application type registrations
//! - [`value`] - Type-erased containers
//! - [`types`] - Builtin payload types

/// Builtin type table (tags, names, factories).
pub mod builtin;
/// Custom payload type configuration store.
pub mod config;
/// Messaging context owning config and registry.
pub mod context;
/// Error types.
pub mod error;
/// Native runtime type descriptors.
pub mod native;
/// Value factory registry and portable name resolver.
pub mod registry;
/// Numeric type tags.
pub mod tag;
/// Builtin payload types.
pub mod types;
/// Type-erased value containers.
pub mod value;

pub use builtin::{validate_builtin_table, BuiltinType, BUILTIN_COUNT, BUILTIN_TYPES};
pub use config::{RuntimeConfig, DEFAULT_TYPE_NAME, RESERVED_PREFIX};
pub use context::Context;
pub use error::{Error, Result};
pub use native::NativeType;
pub use registry::{CustomTypes, TypeRegistry};
pub use tag::TypeTag;
pub use value::{
    make_type_erased_value, type_tag_of, Payload, TypeErasedValue, TypeErasedValuePtr,
    ValueFactory,
};
