// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for payload type registration.
//!
//! Lookups never fail: an unknown name or native type is reported as `None`
//! and an out-of-range tag is a caller bug (assertion). Errors only arise when
//! the configuration store rejects a registration, or when a builtin table
//! fails its construction-time consistency check.

use crate::tag::TypeTag;

/// Result type for registration and validation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while populating or validating type tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Custom Registration Errors
    // ========================================================================
    /// Custom type names must not be empty.
    EmptyTypeName,
    /// Name uses the prefix reserved for builtin types (e.g. `@i32`).
    ReservedTypeName(String),
    /// Name is the portable name of a builtin type (e.g. `bool`).
    BuiltinTypeName(String),
    /// Type already owns a builtin tag and cannot be registered again.
    BuiltinTypeRegistration {
        /// Diagnostic name of the native type
        native: &'static str,
        /// Builtin tag the type already owns
        tag: TypeTag,
    },
    /// Name is already bound to a different native type.
    DuplicateTypeName {
        /// Conflicting portable name
        name: String,
        /// Diagnostic name of the type currently bound to `name`
        existing: &'static str,
    },
    /// Native type is already registered under a different name.
    DuplicateNativeType {
        /// Diagnostic name of the native type
        native: &'static str,
        /// Name the type is currently registered under
        existing: String,
    },

    // ========================================================================
    // Builtin Table Errors
    // ========================================================================
    /// Builtin table violates a construction invariant.
    InvalidBuiltinTable {
        /// Zero-based position of the offending entry
        position: usize,
        /// Human readable description of the violation
        reason: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyTypeName => write!(f, "Type name must not be empty"),
            Error::ReservedTypeName(name) => write!(
                f,
                "Type name '{}' uses the reserved builtin prefix '{}'",
                name,
                crate::config::RESERVED_PREFIX
            ),
            Error::BuiltinTypeName(name) => {
                write!(f, "Type name '{}' belongs to a builtin type", name)
            }
            Error::BuiltinTypeRegistration { native, tag } => {
                write!(f, "Type {} is builtin (tag {})", native, tag)
            }
            Error::DuplicateTypeName { name, existing } => {
                write!(f, "Type name '{}' already bound to {}", name, existing)
            }
            Error::DuplicateNativeType { native, existing } => {
                write!(f, "Type {} already registered as '{}'", native, existing)
            }
            Error::InvalidBuiltinTable { position, reason } => {
                write!(f, "Invalid builtin table at position {}: {}", position, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
