// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive payloads without a direct Rust counterpart.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Size in bytes of an extended-precision float on the wire.
pub const LONG_DOUBLE_SIZE: usize = 16;

/// Extended-precision float, carried as raw bytes.
///
/// Rust has no native `long double`; peers that do interpret the bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LongDouble(pub [u8; LONG_DOUBLE_SIZE]);

/// Buffer of narrow (8-bit) characters, distinct from a raw byte buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharBuf(pub Vec<u8>);

/// UTF-16 code unit string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct U16String(pub Vec<u16>);

impl U16String {
    /// Encode a Rust string as UTF-16.
    #[must_use]
    pub fn from_str_lossless(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }

    /// Decode, replacing invalid surrogates.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

/// UTF-32 code point string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct U32String(pub Vec<u32>);

impl U32String {
    /// Encode a Rust string as UTF-32.
    #[must_use]
    pub fn from_str_lossless(s: &str) -> Self {
        Self(s.chars().map(u32::from).collect())
    }

    /// Decode, replacing invalid code points with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        self.0
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

/// Point in time as nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    /// Offset from the Unix epoch, `None` for pre-epoch timestamps.
    #[must_use]
    pub fn since_epoch(&self) -> Option<Duration> {
        u64::try_from(self.0).ok().map(Duration::from_nanos)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp(i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)),
            Err(e) => Timestamp(-i64::try_from(e.duration().as_nanos()).unwrap_or(i64::MAX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_strings() {
        let s = U16String::from_str_lossless("h\u{e9}llo");
        assert_eq!(s.0.len(), 5);
        assert_eq!(s.to_string_lossy(), "h\u{e9}llo");

        let s = U32String::from_str_lossless("\u{1F600}");
        assert_eq!(s.0, vec![0x1F600]);
        assert_eq!(U32String(vec![0xD800]).to_string_lossy(), "\u{FFFD}");
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(Timestamp::default().since_epoch(), Some(Duration::ZERO));
        assert_eq!(Timestamp(-1).since_epoch(), None);
        let t = UNIX_EPOCH + Duration::from_secs(2);
        assert_eq!(Timestamp::from(t), Timestamp(2_000_000_000));
        assert!(Timestamp::now() > Timestamp::default());
    }
}
