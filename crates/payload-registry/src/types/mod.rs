// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Builtin payload types.
//!
//! Every type here owns a reserved tag in the builtin table (see
//! [`crate::builtin`]). Their `Default` value is what a value factory hands
//! out: an empty container ready to be filled by a decoder.

mod atom;
mod config_value;
mod handle;
mod primitive;
mod system;

pub use atom::*;
pub use config_value::ConfigValue;
pub use handle::{
    ActorAddr, ActorHandle, GroupHandle, NodeId, StrongActorPtr, WeakActorPtr, HOST_ID_SIZE,
};
pub use primitive::{CharBuf, LongDouble, Timestamp, U16String, U32String, LONG_DOUBLE_SIZE};
pub use system::{
    DownMsg, DownstreamContent, DownstreamMsg, ErrorValue, ExitMsg, GroupDownMsg, Message,
    MessageId, OpenStreamMsg, StreamPriority, StreamSlots, TimeoutMsg, UpstreamContent,
    UpstreamMsg,
};

use std::collections::{BTreeMap, BTreeSet};

/// Ordered string-to-string map (`@strmap`).
pub type StrMap = BTreeMap<String, String>;
/// Ordered string set (`@strset`).
pub type StrSet = BTreeSet<String>;
/// String list (`@strvec`).
pub type StrVec = Vec<String>;
/// Raw byte buffer (`@bytebuf`).
pub type ByteBuf = Vec<u8>;
