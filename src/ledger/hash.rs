use sha2::{Digest, Sha256};

use super::Block;

/// Compute the SHA-256 hex digest of a block's canonical serialization.
///
/// Canonical form is the block rendered through `serde_json::Value`, whose
/// object maps keep keys lexicographically sorted (the `preserve_order`
/// feature must stay off). Two in-memory representations of the same
/// logical block therefore always hash identically, independent of field
/// insertion order.
pub fn hash_block(block: &Block) -> String {
    let canonical = serde_json::to_value(block).expect("block serializes to JSON");
    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string().as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::hash_block;
    use crate::ledger::{Block, GENESIS_PREVIOUS_HASH};
    use crate::transaction::Transaction;

    fn sample_block() -> Block {
        Block {
            index: 2,
            timestamp: 1700000000.25,
            transactions: vec![Transaction::new("A".into(), "B".into(), 5)],
            proof: 35293,
            previous_hash: "abc123".into(),
        }
    }

    #[test]
    fn hash_is_stable_across_calls() {
        let b = sample_block();
        assert_eq!(hash_block(&b), hash_block(&b));
        assert_eq!(hash_block(&b).len(), 64); // SHA-256 hex
    }

    #[test]
    fn hash_ignores_key_insertion_order() {
        let b = sample_block();

        // Rebuild the same logical block as a JSON object with keys
        // inserted in reverse order; the canonical rendering must match.
        let mut reversed = Map::new();
        reversed.insert("transactions".into(), json!(b.transactions));
        reversed.insert("timestamp".into(), json!(b.timestamp));
        reversed.insert("proof".into(), json!(b.proof));
        reversed.insert("previous_hash".into(), json!(b.previous_hash));
        reversed.insert("index".into(), json!(b.index));

        let canonical = serde_json::to_value(&b).expect("serialize block");
        assert_eq!(canonical, Value::Object(reversed.clone()));
        assert_eq!(canonical.to_string(), Value::Object(reversed).to_string());
    }

    #[test]
    fn distinct_blocks_hash_differently() {
        let a = sample_block();
        let mut b = a.clone();
        b.proof += 1;
        assert_ne!(hash_block(&a), hash_block(&b));

        let mut c = a.clone();
        c.previous_hash = GENESIS_PREVIOUS_HASH.into();
        assert_ne!(hash_block(&a), hash_block(&c));
    }
}
