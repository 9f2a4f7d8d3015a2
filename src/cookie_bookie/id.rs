//! Record identifiers.
//!
//! Ids are UUIDv7 strings: a millisecond timestamp followed by random bits, so they are
//! unique in practice and sort roughly by creation time. Only uniqueness is relied upon.

use uuid::Uuid;

pub fn generate() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_unique_ids() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
