use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// A sealed, immutable batch of transactions plus the metadata linking it
/// to its predecessor. Blocks carry no cached hash; `hash::hash_block`
/// recomputes the digest from content on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Unix timestamp (UTC) with sub-second precision.
    pub timestamp: f64,
    pub transactions: Vec<Transaction>,
    /// Proof-of-Work solution admitting this block.
    pub proof: u64,
    /// Hex digest of the previous block, or `GENESIS_PREVIOUS_HASH`.
    pub previous_hash: String,
}
