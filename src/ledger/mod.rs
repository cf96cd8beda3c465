pub mod block;
pub mod hash;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::Ledger;

/// Proof-of-Work difficulty: required number of leading hex zeros in the
/// guess digest. Fixed for the lifetime of the chain.
pub const DIFFICULTY: usize = 4;

/// Proof baked into the genesis block (pre-satisfies the puzzle by decree).
pub const GENESIS_PROOF: u64 = 100;

/// `previous_hash` sentinel for the genesis block; not derived from any
/// real block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Sender sentinel on mining-reward transactions, meaning "network-minted".
pub const REWARD_SENDER: &str = "0";

/// Amount paid to the node for each sealed block.
pub const MINING_REWARD: i64 = 1;
