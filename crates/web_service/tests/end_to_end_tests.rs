//! Full-stack tests: real completion client against a wiremock upstream.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, App, Error};
use completion_client::CompletionClient;
use serde::Deserialize;
use serde_json::json;
use web_service::dto::{BlogResponse, GenerateForm};
use web_service::server::{app_config, AppState};
use web_service::services::generation::GenerationService;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn setup_app(
    upstream_uri: &str,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let client = CompletionClient::new("sk-test").with_base_url(upstream_uri);
    let app_state = actix_web::web::Data::new(AppState {
        generation: GenerationService::new(Arc::new(client)),
    });
    test::init_service(App::new().app_data(app_state).configure(app_config)).await
}

fn generate_request(topic: &str) -> Request {
    test::TestRequest::post()
        .uri("/generate")
        .set_form(GenerateForm {
            topic: topic.to_string(),
        })
        .to_request()
}

#[actix_web::test]
async fn test_generate_round_trip_through_http_layer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 800
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "  Wind power is growing fast. Costs keep falling.  "
                },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = setup_app(&mock_server.uri()).await;
    let resp = test::call_service(&app, generate_request("wind power trends")).await;
    assert_eq!(resp.status(), 200);

    let body: BlogResponse = test::read_body_json(resp).await;
    assert_eq!(body.blog, "Wind power is growing fast. Costs keep falling.");
    assert_eq!(body.topic, "wind power trends");
    assert_eq!(body.word_count, 8);
}

#[actix_web::test]
async fn test_upstream_429_surfaces_as_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit reached"))
        .mount(&mock_server)
        .await;

    let app = setup_app(&mock_server.uri()).await;
    let resp = test::call_service(&app, generate_request("wind power trends")).await;
    assert_eq!(resp.status(), 429);

    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.error, "API rate limit exceeded. Please try again in a moment.");
}

#[actix_web::test]
async fn test_upstream_auth_error_surfaces_as_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string("Incorrect API key provided"),
        )
        .mount(&mock_server)
        .await;

    let app = setup_app(&mock_server.uri()).await;
    let resp = test::call_service(&app, generate_request("wind power trends")).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_validation_failure_never_reaches_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = setup_app(&mock_server.uri()).await;
    let resp = test::call_service(&app, generate_request("ab")).await;
    assert_eq!(resp.status(), 400);
}
