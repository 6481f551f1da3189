/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a snowflake-style i64 for use as entity ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// snapshot stays readable by JSON tooling):
///   - 41 bits: milliseconds since 2025-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at
///     single-user desk scale)
///
/// Used for accounts, departments, employees and requests alike.
pub fn entity_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2025-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_735_689_600_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_positive() {
        let id = entity_id();
        assert!(id > 0);
    }

    #[test]
    fn test_entity_id_unique_enough() {
        let ids: std::collections::HashSet<i64> = (0..64).map(|_| entity_id()).collect();
        // 64 draws with 12 random bits per millisecond should not all collide
        assert!(ids.len() > 1);
    }
}
