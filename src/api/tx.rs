use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse};

/// Submit a transaction into the pending pool.
///
/// `sender`, `recipient` and `amount` are all required; if any is absent
/// the request is rejected before the ledger is touched. Present values
/// are recorded as-is (the core validates nothing).
#[post("/transactions/new/")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let NewTxRequest {
        sender,
        recipient,
        amount,
    } = body.into_inner();

    let (Some(sender), Some(recipient), Some(amount)) = (sender, recipient, amount) else {
        warn!("POST /transactions/new/ - rejected: missing fields");
        return HttpResponse::BadRequest().body("Missing Values");
    };

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.new_transaction(sender, recipient, amount)
    };

    info!("POST /transactions/new/ - accepted into pool, target block {index}");
    HttpResponse::Created().json(NewTxResponse {
        message: format!("Transaction will be added to Block {index}"),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use super::new_transaction;
    use crate::api::models::AppState;

    #[actix_web::test]
    async fn missing_field_is_rejected_before_the_ledger() {
        let state = web::Data::new(AppState::default());
        let app =
            test::init_service(App::new().app_data(state.clone()).service(new_transaction)).await;

        // No amount: reject with the literal message, pool untouched.
        let req = test::TestRequest::post()
            .uri("/transactions/new/")
            .set_json(json!({ "sender": "A", "recipient": "B" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"Missing Values");

        let ledger = state.ledger.lock().expect("mutex poisoned");
        assert!(ledger.pending.is_empty());
    }

    #[actix_web::test]
    async fn accepted_transaction_names_the_target_block() {
        let state = web::Data::new(AppState::default());
        let app =
            test::init_service(App::new().app_data(state.clone()).service(new_transaction)).await;

        let req = test::TestRequest::post()
            .uri("/transactions/new/")
            .set_json(json!({ "sender": "A", "recipient": "B", "amount": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction will be added to Block 2");

        // All three fields reach the pool, amount included.
        let ledger = state.ledger.lock().expect("mutex poisoned");
        assert_eq!(ledger.pending.len(), 1);
        assert_eq!(ledger.pending[0].sender, "A");
        assert_eq!(ledger.pending[0].recipient, "B");
        assert_eq!(ledger.pending[0].amount, 5);
    }
}
