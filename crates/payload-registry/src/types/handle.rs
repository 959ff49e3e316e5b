// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Actor, node and group handles.
//!
//! These are plain-data handles: they identify an endpoint but carry no
//! runtime state. The default value of each is the "invalid" handle.

use std::fmt;

/// Size of the host identifier in a [`NodeId`].
pub const HOST_ID_SIZE: usize = 20;

/// Identity of a process taking part in the messaging system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// OS process id
    pub process_id: u32,
    /// Stable host fingerprint
    pub host_id: [u8; HOST_ID_SIZE],
}

impl NodeId {
    /// Returns true for the default (unset) node.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.host_id {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "#{}", self.process_id)
    }
}

/// Address of an actor: node plus node-local id. Id 0 is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorAddr {
    /// Hosting node
    pub node: NodeId,
    /// Node-local actor id
    pub id: u64,
}

impl ActorAddr {
    /// Create an address.
    #[must_use]
    pub fn new(node: NodeId, id: u64) -> Self {
        Self { node, id }
    }

    /// Returns true if this address refers to an actor.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.id != 0
    }
}

impl fmt::Display for ActorAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.node)
    }
}

/// Dynamically typed actor handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActorHandle(pub Option<ActorAddr>);

/// Handle that keeps its target alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrongActorPtr(pub Option<ActorAddr>);

/// Handle that does not keep its target alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeakActorPtr(pub Option<ActorAddr>);

impl StrongActorPtr {
    /// Weak counterpart pointing at the same actor.
    #[must_use]
    pub fn downgrade(&self) -> WeakActorPtr {
        WeakActorPtr(self.0)
    }
}

/// Named multicast group: `module:identifier`. Empty module means no group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupHandle {
    /// Group module (e.g. `local`, `remote`)
    pub module: String,
    /// Module-specific group identifier
    pub identifier: String,
}

impl GroupHandle {
    /// Create a group handle.
    pub fn new(module: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            identifier: identifier.into(),
        }
    }

    /// Returns true for the empty group handle.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.module.is_empty()
    }
}

impl fmt::Display for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_invalid() {
        assert!(NodeId::default().is_none());
        assert!(!ActorAddr::default().is_valid());
        assert_eq!(ActorHandle::default().0, None);
        assert!(GroupHandle::default().is_none());
    }

    #[test]
    fn test_display() {
        let node = NodeId {
            process_id: 42,
            host_id: [0xab; HOST_ID_SIZE],
        };
        let addr = ActorAddr::new(node, 7);
        assert!(addr.to_string().starts_with("7@abab"));
        assert!(addr.to_string().ends_with("#42"));
        assert_eq!(GroupHandle::new("local", "chat").to_string(), "local:chat");
    }

    #[test]
    fn test_downgrade_keeps_target() {
        let addr = ActorAddr::new(NodeId::default(), 3);
        let strong = StrongActorPtr(Some(addr));
        assert_eq!(strong.downgrade(), WeakActorPtr(Some(addr)));
    }
}
