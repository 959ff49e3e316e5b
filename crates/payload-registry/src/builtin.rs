// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Builtin type table.
//!
//! The single hand-maintained list of builtin payload types. Each entry
//! binds a wire tag, a portable name and a value factory, and gives the
//! Rust type its [`Payload::TYPE_TAG`].
//!
//! # Wire Contract
//!
//! **The order of this table is part of the wire format.** Tag `n` names the
//! entry at position `n - 1` on every peer. Inserting, removing, reordering
//! or renaming an entry changes what a tag means on the wire and breaks
//! compatibility with previously encoded data and with older peers.
//!
//! [`validate_builtin_table`] checks the construction invariants and runs
//! every time a registry is built.

use crate::error::{Error, Result};
use crate::tag::TypeTag;
use crate::types::*;
use crate::value::{make_type_erased_value, Payload, ValueFactory};
use std::collections::HashMap;
use std::time::Duration;

/// One row of a builtin table.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinType {
    /// Wire tag (position + 1)
    pub tag: TypeTag,
    /// Portable name
    pub name: &'static str,
    /// Constructor for an empty container
    pub factory: ValueFactory,
}

impl BuiltinType {
    /// Entry for `T` at the given tag.
    ///
    /// Used to assemble alternative tables (tests, restricted peers). The
    /// default table below is generated by the `builtin_types!` macro.
    #[must_use]
    pub fn new<T: Payload>(tag: u16, name: &'static str) -> Self {
        Self {
            tag: TypeTag::new(tag),
            name,
            factory: make_type_erased_value::<T>,
        }
    }
}

macro_rules! builtin_types {
    ($($tag:literal => $name:literal : $ty:ty;)+) => {
        $(
            impl Payload for $ty {
                const TYPE_TAG: TypeTag = TypeTag::new($tag);
            }
        )+

        /// Default builtin table, in tag order.
        pub static BUILTIN_TYPES: &[BuiltinType] = &[
            $(
                BuiltinType {
                    tag: TypeTag::new($tag),
                    name: $name,
                    factory: make_type_erased_value::<$ty>,
                },
            )+
        ];
    };
}

/// Number of entries in [`BUILTIN_TYPES`].
pub const BUILTIN_COUNT: usize = 82;

builtin_types! {
    1 => "@actor": ActorHandle;
    2 => "@actorvec": Vec<ActorHandle>;
    3 => "@addr": ActorAddr;
    4 => "@addrvec": Vec<ActorAddr>;
    5 => "@bytebuf": ByteBuf;
    6 => "@charbuf": CharBuf;
    7 => "@config_value": ConfigValue;
    8 => "@down": DownMsg;
    9 => "@downstream_msg": DownstreamMsg;
    10 => "@error": ErrorValue;
    11 => "@exit": ExitMsg;
    12 => "@group": GroupHandle;
    13 => "@group_down": GroupDownMsg;
    14 => "@i16": i16;
    15 => "@i32": i32;
    16 => "@i64": i64;
    17 => "@i8": i8;
    18 => "@ldouble": LongDouble;
    19 => "@message": Message;
    20 => "@message_id": MessageId;
    21 => "@node": NodeId;
    22 => "@open_stream_msg": OpenStreamMsg;
    23 => "@str": String;
    24 => "@strmap": StrMap;
    25 => "@strong_actor_ptr": StrongActorPtr;
    26 => "@strset": StrSet;
    27 => "@strvec": StrVec;
    28 => "@timeout": TimeoutMsg;
    29 => "@timespan": Duration;
    30 => "@timestamp": Timestamp;
    31 => "@u16": u16;
    32 => "@u16_str": U16String;
    33 => "@u32": u32;
    34 => "@u32_str": U32String;
    35 => "@u64": u64;
    36 => "@u8": u8;
    37 => "@unit": ();
    38 => "@upstream_msg": UpstreamMsg;
    39 => "@weak_actor_ptr": WeakActorPtr;
    40 => "bool": bool;
    41 => "caf::add_atom": AddAtom;
    42 => "caf::close_atom": CloseAtom;
    43 => "caf::connect_atom": ConnectAtom;
    44 => "caf::contact_atom": ContactAtom;
    45 => "caf::delete_atom": DeleteAtom;
    46 => "caf::demonitor_atom": DemonitorAtom;
    47 => "caf::div_atom": DivAtom;
    48 => "caf::flush_atom": FlushAtom;
    49 => "caf::forward_atom": ForwardAtom;
    50 => "caf::get_atom": GetAtom;
    51 => "caf::idle_atom": IdleAtom;
    52 => "caf::join_atom": JoinAtom;
    53 => "caf::leave_atom": LeaveAtom;
    54 => "caf::link_atom": LinkAtom;
    55 => "caf::migrate_atom": MigrateAtom;
    56 => "caf::monitor_atom": MonitorAtom;
    57 => "caf::mul_atom": MulAtom;
    58 => "caf::ok_atom": OkAtom;
    59 => "caf::open_atom": OpenAtom;
    60 => "caf::pending_atom": PendingAtom;
    61 => "caf::ping_atom": PingAtom;
    62 => "caf::pong_atom": PongAtom;
    63 => "caf::publish_atom": PublishAtom;
    64 => "caf::publish_udp_atom": PublishUdpAtom;
    65 => "caf::put_atom": PutAtom;
    66 => "caf::receive_atom": ReceiveAtom;
    67 => "caf::redirect_atom": RedirectAtom;
    68 => "caf::resolve_atom": ResolveAtom;
    69 => "caf::spawn_atom": SpawnAtom;
    70 => "caf::stream_atom": StreamAtom;
    71 => "caf::sub_atom": SubAtom;
    72 => "caf::subscribe_atom": SubscribeAtom;
    73 => "caf::sys_atom": SysAtom;
    74 => "caf::tick_atom": TickAtom;
    75 => "caf::unlink_atom": UnlinkAtom;
    76 => "caf::unpublish_atom": UnpublishAtom;
    77 => "caf::unpublish_udp_atom": UnpublishUdpAtom;
    78 => "caf::unsubscribe_atom": UnsubscribeAtom;
    79 => "caf::update_atom": UpdateAtom;
    80 => "caf::wait_for_atom": WaitForAtom;
    81 => "double": f64;
    82 => "float": f32;
}

/// Check the construction invariants of a builtin table.
///
/// - the table is not larger than the tag space
/// - entry `i` carries tag `i + 1`
/// - names are distinct
pub fn validate_builtin_table(table: &[BuiltinType]) -> Result<()> {
    if table.len() > usize::from(u16::MAX) {
        return Err(Error::InvalidBuiltinTable {
            position: table.len(),
            reason: format!("{} entries exceed the tag space", table.len()),
        });
    }

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(table.len());
    for (position, entry) in table.iter().enumerate() {
        if entry.tag.index() != Some(position) {
            return Err(Error::InvalidBuiltinTable {
                position,
                reason: format!("expected tag {}, found {}", position + 1, entry.tag),
            });
        }

        if let Some(first) = seen.insert(entry.name, position) {
            return Err(Error::InvalidBuiltinTable {
                position,
                reason: format!("name '{}' already used at position {}", entry.name, first),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::type_tag_of;

    #[test]
    fn test_default_table_is_valid() {
        assert_eq!(BUILTIN_TYPES.len(), BUILTIN_COUNT);
        validate_builtin_table(BUILTIN_TYPES).expect("default table must validate");
    }

    #[test]
    fn test_factories_match_tags() {
        for entry in BUILTIN_TYPES {
            let value = (entry.factory)();
            assert_eq!(value.type_tag(), entry.tag, "factory for {}", entry.name);
        }
    }

    #[test]
    fn test_published_tags_are_stable() {
        // Spot checks against the published numbering.
        assert_eq!(type_tag_of::<ActorHandle>(), TypeTag::new(1));
        assert_eq!(type_tag_of::<ActorAddr>(), TypeTag::new(3));
        assert_eq!(type_tag_of::<ErrorValue>(), TypeTag::new(10));
        assert_eq!(type_tag_of::<i32>(), TypeTag::new(15));
        assert_eq!(type_tag_of::<Message>(), TypeTag::new(19));
        assert_eq!(type_tag_of::<String>(), TypeTag::new(23));
        assert_eq!(type_tag_of::<ByteBuf>(), TypeTag::new(5));
        assert_eq!(type_tag_of::<StrMap>(), TypeTag::new(24));
        assert_eq!(type_tag_of::<StrSet>(), TypeTag::new(26));
        assert_eq!(type_tag_of::<StrVec>(), TypeTag::new(27));
        assert_eq!(type_tag_of::<()>(), TypeTag::new(37));
        assert_eq!(type_tag_of::<WeakActorPtr>(), TypeTag::new(39));
        assert_eq!(type_tag_of::<bool>(), TypeTag::new(40));
        assert_eq!(type_tag_of::<AddAtom>(), TypeTag::new(41));
        assert_eq!(type_tag_of::<WaitForAtom>(), TypeTag::new(80));
        assert_eq!(type_tag_of::<f64>(), TypeTag::new(81));
        assert_eq!(type_tag_of::<f32>(), TypeTag::new(82));

        let names: Vec<&str> = BUILTIN_TYPES.iter().map(|entry| entry.name).collect();
        assert_eq!(&names[..5], ["@actor", "@actorvec", "@addr", "@addrvec", "@bytebuf"]);
        assert_eq!(names[39], "bool");
        assert_eq!(names[40], "caf::add_atom");
        assert_eq!(names[79], "caf::wait_for_atom");
        assert_eq!(&names[80..], ["double", "float"]);
    }

    #[test]
    fn test_atom_entries_match_atom_text() {
        assert_eq!(BUILTIN_TYPES[40].name, format!("caf::{}_atom", AddAtom::TEXT));
        assert_eq!(
            BUILTIN_TYPES[79].name,
            format!("caf::{}_atom", WaitForAtom::TEXT)
        );
    }

    #[test]
    fn test_rejects_wrong_tag() {
        let table = [
            BuiltinType::new::<i32>(1, "@i32"),
            BuiltinType::new::<String>(3, "@str"),
        ];
        let err = validate_builtin_table(&table).unwrap_err();
        assert!(matches!(err, Error::InvalidBuiltinTable { position: 1, .. }));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let duplicate = [
            BuiltinType::new::<i32>(1, "@i32"),
            BuiltinType::new::<i64>(2, "@i64"),
            BuiltinType::new::<i16>(3, "@i32"),
        ];
        assert!(matches!(
            validate_builtin_table(&duplicate),
            Err(Error::InvalidBuiltinTable { position: 2, .. })
        ));
    }

    #[test]
    fn test_accepts_any_order_and_naming() {
        let unsorted = [
            BuiltinType::new::<String>(1, "@str"),
            BuiltinType::new::<i32>(2, "@i32"),
        ];
        assert!(validate_builtin_table(&unsorted).is_ok());

        let unprefixed = [
            BuiltinType::new::<i32>(1, "@i32"),
            BuiltinType::new::<bool>(2, "bool"),
            BuiltinType::new::<f64>(3, "double"),
        ];
        assert!(validate_builtin_table(&unprefixed).is_ok());
    }

    #[test]
    fn test_empty_table_is_valid() {
        assert!(validate_builtin_table(&[]).is_ok());
    }
}
