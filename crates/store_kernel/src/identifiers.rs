//! Record identifiers
//!
//! Every entity collection assigns small sequential integer ids: one greater
//! than the current maximum id, or [`FIRST_RECORD_ID`] for an empty
//! collection. Ids are unique within their collection and immutable once
//! assigned. Each entity kind gets its own newtype so a client id cannot be
//! passed where a policy id is expected.

use std::fmt;

/// The id assigned to the first record added to an empty collection.
pub const FIRST_RECORD_ID: u32 = 1;

/// Computes the next id for a collection of raw ids.
///
/// Returns one greater than the current maximum, or [`FIRST_RECORD_ID`] when
/// the iterator is empty. Deliberately not `count + 1`: after removals the
/// count can collide with a surviving id.
pub fn next_raw_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(FIRST_RECORD_ID, |max| max + 1)
}

/// Common behavior of sequential record identifiers.
///
/// Implemented by the newtypes generated with [`define_record_id!`].
pub trait SequentialId:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + std::hash::Hash + fmt::Debug + fmt::Display
{
    /// Wraps a raw integer id.
    fn from_raw(raw: u32) -> Self;

    /// Returns the raw integer value.
    fn raw(self) -> u32;

    /// The id assigned to the first record in an empty collection.
    fn first() -> Self {
        Self::from_raw(FIRST_RECORD_ID)
    }

    /// The id following this one.
    fn next(self) -> Self {
        Self::from_raw(self.raw() + 1)
    }
}

/// Defines a strongly-typed sequential identifier.
///
/// Generates a `u32` newtype with serde transparency (so ids serialize as
/// plain numbers), `Display` as the bare integer, `FromStr`, and a
/// [`SequentialId`] implementation.
#[macro_export]
macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an id from its raw integer value.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw integer value.
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl $crate::identifiers::SequentialId for $name {
            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            fn raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u32>().map(Self)
            }
        }
    };
}

define_record_id!(
    /// Identifier of a client record.
    ClientId
);

define_record_id!(
    /// Identifier of a policy record.
    PolicyId
);

define_record_id!(
    /// Identifier of a premium payment record.
    PaymentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_raw_id_empty_collection() {
        assert_eq!(next_raw_id(std::iter::empty()), FIRST_RECORD_ID);
    }

    #[test]
    fn test_next_raw_id_is_max_plus_one() {
        assert_eq!(next_raw_id([1, 2, 5].into_iter()), 6);
        assert_eq!(next_raw_id([101, 105, 103].into_iter()), 106);
    }

    #[test]
    fn test_next_raw_id_ignores_gaps() {
        // Removing id 1 from {1, 2} must not lead back to 2.
        assert_eq!(next_raw_id([2].into_iter()), 3);
    }

    #[test]
    fn test_id_display_is_bare_integer() {
        assert_eq!(ClientId::new(7).to_string(), "7");
        assert_eq!(PolicyId::new(101).to_string(), "101");
    }

    #[test]
    fn test_id_from_str_roundtrip() {
        let id: PaymentId = "42".parse().unwrap();
        assert_eq!(id, PaymentId::new(42));
        assert!("not-a-number".parse::<PaymentId>().is_err());
    }

    #[test]
    fn test_sequential_id_first_and_next() {
        assert_eq!(ClientId::first(), ClientId::new(1));
        assert_eq!(ClientId::new(5).next(), ClientId::new(6));
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ClientId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ClientId = serde_json::from_str("3").unwrap();
        assert_eq!(back, ClientId::new(3));
    }
}
