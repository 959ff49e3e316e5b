// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Atom marker types.
//!
//! Atoms are zero-sized payloads used to select a handler, e.g. a
//! `(GetAtom, String)` request. Each atom is its own type so that it gets its
//! own builtin tag.

macro_rules! atoms {
    ($($(#[$doc:meta])* $ty:ident => $text:literal;)+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $ty;

            impl $ty {
                /// Atom text.
                pub const TEXT: &'static str = $text;
            }
        )+
    };
}

atoms! {
    AddAtom => "add";
    CloseAtom => "close";
    ConnectAtom => "connect";
    ContactAtom => "contact";
    DeleteAtom => "delete";
    DemonitorAtom => "demonitor";
    DivAtom => "div";
    FlushAtom => "flush";
    ForwardAtom => "forward";
    /// Read request.
    GetAtom => "get";
    IdleAtom => "idle";
    JoinAtom => "join";
    LeaveAtom => "leave";
    LinkAtom => "link";
    MigrateAtom => "migrate";
    MonitorAtom => "monitor";
    MulAtom => "mul";
    /// Positive acknowledgement.
    OkAtom => "ok";
    OpenAtom => "open";
    PendingAtom => "pending";
    PingAtom => "ping";
    PongAtom => "pong";
    PublishAtom => "publish";
    PublishUdpAtom => "publish_udp";
    /// Write request.
    PutAtom => "put";
    ReceiveAtom => "receive";
    RedirectAtom => "redirect";
    ResolveAtom => "resolve";
    SpawnAtom => "spawn";
    StreamAtom => "stream";
    SubAtom => "sub";
    SubscribeAtom => "subscribe";
    /// System-level request.
    SysAtom => "sys";
    TickAtom => "tick";
    UnlinkAtom => "unlink";
    UnpublishAtom => "unpublish";
    UnpublishUdpAtom => "unpublish_udp";
    UnsubscribeAtom => "unsubscribe";
    UpdateAtom => "update";
    WaitForAtom => "wait_for";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_text() {
        assert_eq!(GetAtom::TEXT, "get");
        assert_eq!(PublishUdpAtom::TEXT, "publish_udp");
        assert_eq!(std::mem::size_of::<WaitForAtom>(), 0);
    }
}
