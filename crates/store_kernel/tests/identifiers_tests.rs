//! Unit tests for the identifier types
//!
//! Covers raw id sequencing, typed id creation, parsing, display
//! formatting, and JSON serialization.

use store_kernel::{next_raw_id, ClientId, PaymentId, PolicyId, SequentialId, FIRST_RECORD_ID};

mod next_raw_id_tests {
    use super::*;

    #[test]
    fn test_empty_sequence_starts_at_first_record_id() {
        assert_eq!(next_raw_id(std::iter::empty()), FIRST_RECORD_ID);
        assert_eq!(FIRST_RECORD_ID, 1);
    }

    #[test]
    fn test_successor_of_the_maximum() {
        assert_eq!(next_raw_id([1, 2, 3].into_iter()), 4);
        assert_eq!(next_raw_id([3, 1, 2].into_iter()), 4);
    }

    #[test]
    fn test_gaps_are_not_reused() {
        // 1 was removed at some point; the sequence still moves forward.
        assert_eq!(next_raw_id([2, 5].into_iter()), 6);
        assert_eq!(next_raw_id([2].into_iter()), 3);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(next_raw_id(std::iter::once(101)), 102);
    }
}

mod client_id_tests {
    use super::*;

    #[test]
    fn test_new_wraps_raw_value() {
        let id = ClientId::new(5);
        assert_eq!(id.value(), 5);
    }

    #[test]
    fn test_first_and_next() {
        let first = ClientId::first();
        assert_eq!(first.value(), FIRST_RECORD_ID);
        assert_eq!(first.next().value(), 2);
    }

    #[test]
    fn test_display_is_the_bare_number() {
        assert_eq!(ClientId::new(42).to_string(), "42");
    }

    #[test]
    fn test_from_str_roundtrip() {
        let original = ClientId::new(7);
        let parsed: ClientId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("not-a-number".parse::<ClientId>().is_err());
        assert!("".parse::<ClientId>().is_err());
    }

    #[test]
    fn test_json_serializes_as_plain_number() {
        let id = ClientId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");

        let back: ClientId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ordering_follows_raw_values() {
        assert!(ClientId::new(1) < ClientId::new(2));
        assert_eq!(ClientId::new(9), ClientId::new(9));
    }
}

mod policy_id_tests {
    use super::*;

    #[test]
    fn test_policy_ids_sequence_independently() {
        let seed = [PolicyId::new(101), PolicyId::new(105)];
        let next = next_raw_id(seed.iter().map(|id| id.value()));
        assert_eq!(PolicyId::new(next), PolicyId::new(106));
    }

    #[test]
    fn test_raw_conversions() {
        let id = PolicyId::from(104u32);
        assert_eq!(u32::from(id), 104);
        assert_eq!(PolicyId::from_raw(104), id);
        assert_eq!(id.raw(), 104);
    }
}

mod payment_id_tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id: PaymentId = "10".parse().unwrap();
        assert_eq!(id, PaymentId::new(10));
        assert_eq!(id.to_string(), "10");
    }

    #[test]
    fn test_json_roundtrip_in_a_record_position() {
        let ids = vec![PaymentId::new(1), PaymentId::new(2)];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, "[1,2]");

        let back: Vec<PaymentId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ids);
    }
}
