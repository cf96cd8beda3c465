use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use crate::ledger::Ledger;
use crate::transaction::Transaction;

/// Shared application state: the in-memory ledger plus this node's
/// identity. The mutex serializes all chain/pool mutation; handlers keep
/// their critical sections short and never hold the lock across a
/// proof-of-work search.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    /// Process-wide random identity, used as the reward recipient.
    pub node_id: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            node_id: Uuid::new_v4().simple().to_string(),
        }
    }
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

/// All three fields are required; `Option` keeps deserialization from
/// rejecting the request before the handler can answer "Missing Values".
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<i64>,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [crate::ledger::Block],
    pub length: usize,
}
