use time::OffsetDateTime;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 digits are ascii")
}

/// Opaque ID: millisecond clock in base 36 followed by 64 random bits in
/// base 36. Not cryptographic; collisions are negligible for a single-user,
/// low-volume collection.
pub fn generate_id() -> String {
    let millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u128;
    let random = Uuid::new_v4().as_u128() as u64;
    let mut id = to_base36(millis);
    id.push_str(&to_base36(random as u128));
    id
}

/// Keep at most the first three comma-separated segments of an address,
/// trimmed and re-joined. Two or fewer segments pass through unchanged.
pub fn shorten_address(full_address: &str) -> String {
    let parts: Vec<&str> = full_address.split(',').map(str::trim).collect();
    if parts.len() <= 2 {
        return full_address.to_string();
    }
    parts[..3].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_id()), "duplicate id generated");
        }
    }

    #[test]
    fn generated_ids_are_base36() {
        let id = generate_id();
        assert!(!id.is_empty());
        assert!(id.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn shorten_keeps_short_addresses() {
        assert_eq!(shorten_address("A"), "A");
        assert_eq!(shorten_address("A, B"), "A, B");
        // Unchanged means unchanged, whitespace included.
        assert_eq!(shorten_address("A ,  B"), "A ,  B");
    }

    #[test]
    fn shorten_truncates_to_three_segments() {
        assert_eq!(shorten_address("A, B, C, D"), "A, B, C");
        assert_eq!(shorten_address("A,B,C,D"), "A, B, C");
        assert_eq!(
            shorten_address("Storgatan 1, 11122 Stockholm, Sverige, Europa"),
            "Storgatan 1, 11122 Stockholm, Sverige"
        );
    }
}
