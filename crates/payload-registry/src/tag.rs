// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Numeric type tags.
//!
//! Tags are wire-visible: tag `n` always names the builtin at position
//! `n - 1` of the builtin table. Tag `0` means "no builtin tag, resolve by
//! name or native type instead".

use std::fmt;

/// Compact numeric identifier of a builtin payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TypeTag(u16);

impl TypeTag {
    /// Reserved tag for types without a builtin slot.
    pub const NONE: TypeTag = TypeTag(0);

    /// Wrap a raw wire value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        TypeTag(raw)
    }

    /// Raw wire value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns true unless this is [`TypeTag::NONE`].
    ///
    /// Does not check the upper bound; that depends on the table in use.
    #[inline]
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        self.0 != 0
    }

    /// Zero-based table position for this tag, `None` for [`TypeTag::NONE`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    /// Tag for the given zero-based table position.
    ///
    /// Returns `None` if the position does not fit in the tag space.
    #[inline]
    #[must_use]
    pub fn from_index(position: usize) -> Option<Self> {
        u16::try_from(position + 1).ok().map(TypeTag)
    }
}

impl From<u16> for TypeTag {
    fn from(raw: u16) -> Self {
        TypeTag(raw)
    }
}

impl From<TypeTag> for u16 {
    fn from(tag: TypeTag) -> Self {
        tag.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_zero() {
        assert_eq!(TypeTag::NONE.get(), 0);
        assert!(!TypeTag::NONE.is_builtin());
        assert_eq!(TypeTag::NONE.index(), None);
        assert_eq!(TypeTag::default(), TypeTag::NONE);
    }

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(TypeTag::new(1).index(), Some(0));
        assert_eq!(TypeTag::new(82).index(), Some(81));
        assert_eq!(TypeTag::from_index(0), Some(TypeTag::new(1)));
        assert_eq!(TypeTag::from_index(81), Some(TypeTag::new(82)));
        assert_eq!(TypeTag::from_index(u16::MAX as usize), None);
    }

    #[test]
    fn test_conversions() {
        let tag: TypeTag = 7u16.into();
        assert_eq!(u16::from(tag), 7);
        assert_eq!(tag.to_string(), "7");
    }
}
