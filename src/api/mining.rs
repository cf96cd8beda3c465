use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, info};

use super::models::{AppState, MineResponse};
use crate::ledger::pow;

/// Mine one block: run proof-of-work over the last block's proof, credit
/// the reward to this node, and seal the pending pool into a new block.
///
/// The search is CPU-bound with unbounded latency, so it runs on the
/// blocking thread pool with only an immutable proof snapshot as input;
/// the ledger lock is held just for the snapshot and the final seal.
#[get("/mine/")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    let worker_state = state.clone();
    let mined = web::block(move || {
        let last_proof = {
            let ledger = worker_state.ledger.lock().expect("mutex poisoned");
            ledger.last_block().proof
        };
        debug!("MINER - searching proof over last_proof={last_proof}");
        let proof = pow::find_proof(last_proof);

        let mut ledger = worker_state.ledger.lock().expect("mutex poisoned");
        ledger.seal_mined_block(proof, &worker_state.node_id)
    })
    .await;

    let block = match mined {
        Ok(block) => block,
        Err(_) => return HttpResponse::InternalServerError().body("mining task failed"),
    };

    info!(
        "MINER - forged block #{} (proof={}, txs={})",
        block.index,
        block.proof,
        block.transactions.len()
    );

    HttpResponse::Ok().json(MineResponse {
        message: "New Block Forged",
        index: block.index,
        transactions: block.transactions,
        proof: block.proof,
        previous_hash: block.previous_hash,
    })
}
