use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse};

/// Get the full chain as a read-only snapshot.
#[get("/chain/")]
pub async fn full_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        chain: &ledger.chain,
        length: ledger.len(),
    };
    HttpResponse::Ok().json(resp)
}
