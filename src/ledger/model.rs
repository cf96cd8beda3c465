use chrono::Utc;

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF, MINING_REWARD, REWARD_SENDER};
use super::{Block, hash, pow};
use crate::transaction::Transaction;

/// The append-only chain plus the pool of not-yet-sealed transactions.
///
/// In-memory only; all state is lost on process exit. The chain is never
/// empty: construction seals the genesis block immediately.
#[derive(Debug)]
pub struct Ledger {
    pub chain: Vec<Block>,
    pub pending: Vec<Transaction>,
}

impl Ledger {
    /// Initialize a new ledger seeded with the genesis block.
    pub fn new() -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.new_block(GENESIS_PROOF, Some(GENESIS_PREVIOUS_HASH.to_string()));
        ledger
    }

    /// Append a transaction to the pending pool and return the index of the
    /// block that will eventually contain it. Field values are recorded
    /// as-is; nothing is validated.
    pub fn new_transaction(&mut self, sender: String, recipient: String, amount: i64) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.last_block().index + 1
    }

    /// Seal the pending pool into a new block and append it to the chain.
    ///
    /// Uses `previous_hash` if supplied, else the hash of the current last
    /// block. The pool is drained into the block's transactions (insertion
    /// order preserved) and left empty. Sole mutator of the chain.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash =
            previous_hash.unwrap_or_else(|| hash::hash_block(self.last_block()));
        let block = Block {
            index: self.chain.len() as u64 + 1,
            timestamp: unix_timestamp(),
            transactions: std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        };
        self.chain.push(block);
        self.last_block()
    }

    /// Seal a block for an already-found proof: capture the predecessor
    /// hash, credit the mining reward to `node_id`, then append. This is
    /// the short critical section that follows a `pow::find_proof` run.
    pub fn seal_mined_block(&mut self, proof: u64, node_id: &str) -> Block {
        let previous_hash = hash::hash_block(self.last_block());
        self.new_transaction(
            REWARD_SENDER.to_string(),
            node_id.to_string(),
            MINING_REWARD,
        );
        self.new_block(proof, Some(previous_hash)).clone()
    }

    /// Mine in one call: search for a proof over the last block's proof,
    /// then seal. Blocks the calling thread for the whole search; request
    /// handlers snapshot the proof and offload the search instead.
    pub fn mine(&mut self, node_id: &str) -> Block {
        let proof = pow::find_proof(self.last_block().proof);
        self.seal_mined_block(proof, node_id)
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC time as fractional Unix seconds.
fn unix_timestamp() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6
}
