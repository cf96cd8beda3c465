use serde::{Deserialize, Serialize};

/// A value transfer waiting in the pending pool or sealed into a block.
///
/// Pure bookkeeping record: no balance, uniqueness or sign checks are
/// performed anywhere in the ledger. Immutable once sealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(sender: String, recipient: String, amount: i64) -> Self {
        Self {
            sender,
            recipient,
            amount,
        }
    }
}
