// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Messaging context: owner of the configuration and the type registry.

use crate::config::RuntimeConfig;
use crate::registry::TypeRegistry;
use std::sync::Arc;

/// One messaging system instance.
///
/// Builds its [`TypeRegistry`] synchronously at construction and keeps it
/// for its whole lifetime. Contexts are isolated: each has its own registry,
/// and custom types are only shared if the contexts share a config.
///
/// # Example
///
/// ```rust
/// use payload_registry::{Context, Payload, RuntimeConfig};
///
/// #[derive(Debug, Clone, Default)]
/// struct Ping(u32);
///
/// impl Payload for Ping {}
///
/// let config = RuntimeConfig::new();
/// config.add_message_type::<Ping>("Ping").unwrap();
///
/// let context = Context::new(config);
/// let value = context.types().make_value_by_name("Ping").unwrap();
/// assert!(value.is::<Ping>());
/// ```
#[derive(Debug)]
pub struct Context {
    config: RuntimeConfig,
    types: TypeRegistry,
}

impl Context {
    /// Create a context around `config`.
    #[must_use]
    pub fn new(config: RuntimeConfig) -> Self {
        let types = TypeRegistry::new(Arc::new(config.clone()));
        log::debug!(
            "[context] started with {} builtin and {} custom types",
            types.len(),
            config.len()
        );
        Self { config, types }
    }

    /// Type registry of this context.
    #[inline]
    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Configuration of this context.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(RuntimeConfig::new())
    }
}
