use sha2::{Digest, Sha256};

use super::DIFFICULTY;

/// Check whether `proof` solves the puzzle for `last_proof`: the SHA-256
/// digest of the decimal concatenation `"<last_proof><proof>"` (no
/// separator) must start with `DIFFICULTY` hex zeros.
pub fn valid_proof(last_proof: u64, proof: u64) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest.chars().take(DIFFICULTY).all(|c| c == '0')
}

/// Find the smallest proof satisfying `valid_proof` for `last_proof`.
///
/// Exhaustive search from 0, step 1, first success wins. CPU-bound and
/// blocking with unbounded latency (expected ~16^DIFFICULTY guesses);
/// callers on a request path should run it off the executor and must not
/// hold the ledger lock while it searches.
pub fn find_proof(last_proof: u64) -> u64 {
    let mut proof = 0;
    while !valid_proof(last_proof, proof) {
        proof += 1;
    }
    proof
}
