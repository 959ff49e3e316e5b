// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Framework-internal system and stream control messages.

use super::handle::{ActorAddr, GroupHandle};
use crate::value::TypeErasedValuePtr;

/// Error value: `code` within `category`. Code 0 means "no error".
#[derive(Debug, Clone, Default)]
pub struct ErrorValue {
    /// Category-specific error code
    pub code: u8,
    /// Error category (e.g. `system`, `runtime`)
    pub category: String,
    /// Optional context payload
    pub context: Message,
}

impl ErrorValue {
    /// Create an error without context.
    pub fn new(code: u8, category: impl Into<String>) -> Self {
        Self {
            code,
            category: category.into(),
            context: Message::default(),
        }
    }

    /// Returns true for the "no error" value.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.code == 0
    }
}

/// Heterogeneous tuple of type-erased values.
#[derive(Debug, Clone, Default)]
pub struct Message {
    elements: Vec<TypeErasedValuePtr>,
}

impl Message {
    /// Build a message from its elements.
    #[must_use]
    pub fn from_elements(elements: Vec<TypeErasedValuePtr>) -> Self {
        Self { elements }
    }

    /// Append an element.
    pub fn push(&mut self, value: TypeErasedValuePtr) {
        self.elements.push(value);
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the message has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow all elements.
    #[must_use]
    pub fn elements(&self) -> &[TypeErasedValuePtr] {
        &self.elements
    }
}

/// Request/response correlation id. The high bit marks responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl MessageId {
    const RESPONSE_FLAG: u64 = 1 << 63;

    /// Id of the response to this request.
    #[must_use]
    pub fn response_id(self) -> Self {
        Self(self.0 | Self::RESPONSE_FLAG)
    }

    /// Returns true if this id belongs to a response.
    #[must_use]
    pub fn is_response(self) -> bool {
        self.0 & Self::RESPONSE_FLAG != 0
    }

    /// Id with the response flag cleared.
    #[must_use]
    pub fn request_id(self) -> Self {
        Self(self.0 & !Self::RESPONSE_FLAG)
    }
}

/// Sent to monitors when a monitored actor terminates.
#[derive(Debug, Clone, Default)]
pub struct DownMsg {
    /// Terminated actor
    pub source: ActorAddr,
    /// Exit reason
    pub reason: ErrorValue,
}

/// Sent to linked actors when an actor terminates.
#[derive(Debug, Clone, Default)]
pub struct ExitMsg {
    /// Terminated actor
    pub source: ActorAddr,
    /// Exit reason
    pub reason: ErrorValue,
}

/// Sent to subscribers when a group becomes unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDownMsg {
    /// Unreachable group
    pub source: GroupHandle,
}

/// Fired by a receive timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutMsg {
    /// Timeout generation; stale timeouts carry an old id
    pub timeout_id: u64,
}

/// Sender and receiver slots of a stream path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StreamSlots {
    /// Slot on the sending side
    pub sender: u16,
    /// Slot on the receiving side
    pub receiver: u16,
}

/// Scheduling priority of a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamPriority {
    #[default]
    Normal,
    High,
}

/// Handshake opening a new stream.
#[derive(Debug, Clone, Default)]
pub struct OpenStreamMsg {
    /// Slot allocated by the sender
    pub slot: u16,
    /// Handshake payload
    pub msg: Message,
    /// Upstream stage
    pub prev_stage: ActorAddr,
    /// Stage that created the stream
    pub original_stage: ActorAddr,
    /// Requested priority
    pub priority: StreamPriority,
}

/// Payload of a [`DownstreamMsg`].
#[derive(Debug, Clone, Default)]
pub enum DownstreamContent {
    /// Batch of stream elements
    Batch {
        /// Number of elements in `xs`
        xs_size: i32,
        /// Elements
        xs: Message,
        /// Batch sequence number
        id: i64,
    },
    /// Orderly end of stream
    #[default]
    Close,
    /// Abnormal end of stream
    ForcedClose {
        /// Failure reason
        reason: ErrorValue,
    },
}

/// Message flowing from source to sink.
#[derive(Debug, Clone, Default)]
pub struct DownstreamMsg {
    /// Path slots
    pub slots: StreamSlots,
    /// Sending stage
    pub sender: ActorAddr,
    /// Content
    pub content: DownstreamContent,
}

/// Payload of an [`UpstreamMsg`].
#[derive(Debug, Clone, Default)]
pub enum UpstreamContent {
    /// Accept an [`OpenStreamMsg`]
    AckOpen {
        /// Stage the stream was addressed to
        rebind_from: ActorAddr,
        /// Stage actually handling the stream
        rebind_to: ActorAddr,
        /// Initial credit
        initial_demand: i32,
        /// Preferred batch size
        desired_batch_size: i32,
    },
    /// Acknowledge a batch and grant credit
    AckBatch {
        /// New credit
        new_capacity: i32,
        /// Preferred batch size
        desired_batch_size: i32,
        /// Highest acknowledged batch id
        acknowledged_id: i64,
    },
    /// Orderly cancellation
    #[default]
    Drop,
    /// Abnormal cancellation
    ForcedDrop {
        /// Failure reason
        reason: ErrorValue,
    },
}

/// Message flowing from sink to source.
#[derive(Debug, Clone, Default)]
pub struct UpstreamMsg {
    /// Path slots
    pub slots: StreamSlots,
    /// Sending stage
    pub sender: ActorAddr,
    /// Content
    pub content: UpstreamContent,
}
