//! This module defines the HTTP routes for the donate action.
//! Routes are registered relative to the configured base path and delegate
//! to the donate controller.
//!
//! The root resources answer both `""` and `"/"` so the action can also be
//! mounted at `/`, where the scope prefix is empty.

use crate::{
    api::controllers::donate,
    models::{ActionPostRequest, ApiError, AppState},
};
use actix_web::{get, options, post, routes, web, HttpResponse, Responder};

/// Lists the suggested donation amounts.
#[routes]
#[get("")]
#[get("/")]
async fn list_donate_actions(data: web::Data<AppState>) -> impl Responder {
    donate::list_donate_actions(&data).await
}

/// Describes the action for a specific amount.
#[get("/{amount}")]
async fn get_donate_action(amount: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    donate::get_donate_action(amount.into_inner(), &data).await
}

/// Builds a donation transaction for the default amount.
#[routes]
#[post("")]
#[post("/")]
async fn create_default_donate_transaction(
    request: web::Json<ActionPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    donate::create_donate_transaction(None, request.into_inner(), &data).await
}

/// Builds a donation transaction for a specific amount.
#[post("/{amount}")]
async fn create_donate_transaction(
    amount: web::Path<String>,
    request: web::Json<ActionPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    donate::create_donate_transaction(Some(amount.into_inner()), request.into_inner(), &data).await
}

/// CORS preflight for the action endpoints.
#[routes]
#[options("")]
#[options("/")]
async fn preflight_root() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[options("/{amount}")]
async fn preflight_amount() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Renders malformed or missing JSON bodies with the same error shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid request body: {err}")).into()
    })
}

/// Initializes the routes for the donate module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(list_donate_actions);
    cfg.service(create_default_donate_transaction);
    cfg.service(preflight_root);
    cfg.service(get_donate_action); // /{amount}
    cfg.service(create_donate_transaction); // /{amount}
    cfg.service(preflight_amount); // /{amount}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DonateConfig,
        models::{ActionGetResponse, ActionPostResponse, SolAmount},
        services::{compile_unsigned_transaction, MockTransactionAssemblerTrait},
        utils::decode_transaction,
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use solana_sdk::{hash::Hash, message::VersionedMessage, pubkey::Pubkey};
    use std::sync::Arc;

    fn create_test_state(assembler: MockTransactionAssemblerTrait) -> web::Data<AppState> {
        create_test_state_at("/api/donate", assembler)
    }

    fn create_test_state_at(
        base_path: &str,
        assembler: MockTransactionAssemblerTrait,
    ) -> web::Data<AppState> {
        let config = DonateConfig::new(
            Pubkey::new_unique(),
            vec![
                SolAmount::new(0.25).unwrap(),
                SolAmount::new(0.5).unwrap(),
                SolAmount::new(1.0).unwrap(),
            ],
            SolAmount::new(1.0).unwrap(),
            base_path,
        )
        .unwrap();
        web::Data::new(AppState::new(config, Arc::new(assembler)))
    }

    fn compiling_assembler(blockhash: Hash) -> MockTransactionAssemblerTrait {
        let mut assembler = MockTransactionAssemblerTrait::new();
        assembler
            .expect_assemble()
            .returning(move |instructions, fee_payer| {
                let result = compile_unsigned_transaction(instructions, fee_payer, blockhash);
                Box::pin(async move { result })
            });
        assembler
    }

    macro_rules! init_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .service(web::scope("/api/donate").configure(init)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_listing() {
        let state = create_test_state(MockTransactionAssemblerTrait::new());
        let app = init_app!(state);

        let req = test::TestRequest::get().uri("/api/donate").to_request();
        let body: ActionGetResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.label, "1 SOL");
        let actions = body.links.unwrap().actions;
        assert_eq!(actions.len(), 4);
        assert!(actions[3].parameters.is_some());
    }

    #[actix_web::test]
    async fn test_get_amount() {
        let state = create_test_state(MockTransactionAssemblerTrait::new());
        let app = init_app!(state);

        let req = test::TestRequest::get().uri("/api/donate/0.5").to_request();
        let body: ActionGetResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.label, "0.5 SOL");
    }

    #[actix_web::test]
    async fn test_post_default_amount_matches_explicit_amount() {
        let blockhash = Hash::new_unique();
        let state = create_test_state(compiling_assembler(blockhash));
        let app = init_app!(state);
        let account = Pubkey::new_unique().to_string();

        let req = test::TestRequest::post()
            .uri("/api/donate")
            .set_json(json!({ "account": account }))
            .to_request();
        let defaulted: ActionPostResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/donate/1")
            .set_json(json!({ "account": account }))
            .to_request();
        let explicit: ActionPostResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(defaulted, explicit);
        let tx = decode_transaction(&explicit.transaction).unwrap();
        assert!(matches!(tx.message, VersionedMessage::V0(_)));
    }

    #[actix_web::test]
    async fn test_post_invalid_account_returns_error_body() {
        let mut assembler = MockTransactionAssemblerTrait::new();
        assembler.expect_assemble().never();
        let state = create_test_state(assembler);
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/donate/1")
            .set_json(json!({ "account": "not-a-key" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("Invalid account"));
        assert!(body.get("transaction").is_none());
    }

    #[actix_web::test]
    async fn test_post_missing_body_returns_error_body() {
        let state = create_test_state(MockTransactionAssemblerTrait::new());
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/donate/1")
            .insert_header(("content-type", "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn test_preflight() {
        let state = create_test_state(MockTransactionAssemblerTrait::new());
        let app = init_app!(state);

        for uri in ["/api/donate", "/api/donate/1"] {
            let req = test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri(uri)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn test_routes_mounted_at_root() {
        let state = create_test_state_at("/", compiling_assembler(Hash::new_unique()));
        assert_eq!(state.config.base_path, "");
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(web::scope(&state.config.base_path).configure(init)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let listing: ActionGetResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listing.label, "1 SOL");
        let actions = listing.links.unwrap().actions;
        assert_eq!(actions[0].href, "/0.25");
        assert_eq!(actions[3].href, "/{amount}");

        let req = test::TestRequest::get().uri("/0.5").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({ "account": Pubkey::new_unique().to_string() }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
