//! Random transaction id source.

use charge_types::{TransactionIdSource, domain::TRANSACTION_ID_PREFIX};

/// Number of alphanumeric characters in the random suffix. Wide enough
/// to make collisions negligible without a registry.
const SUFFIX_LEN: usize = 16;

/// Production id source backed by the thread-local RNG.
///
/// Every call draws an independent suffix; no state is shared between
/// callers beyond the entropy read.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl TransactionIdSource for RandomIdSource {
    fn next_id(&self) -> String {
        use rand::Rng;
        use rand::distr::Alphanumeric;

        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        format!("{}{}", TRANSACTION_ID_PREFIX, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let id = RandomIdSource.next_id();
        let suffix = id.strip_prefix("txn_").expect("txn_ prefix");
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_ids_are_not_repeated() {
        let source = RandomIdSource;
        let a = source.next_id();
        let b = source.next_id();
        assert_ne!(a, b);
    }
}
