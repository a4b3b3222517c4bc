use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yellowclub_api::{ApiTarget, Client, Error, RequestParams, StaticToken};

#[tokio::test]
async fn get_sends_json_headers_and_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = ApiTarget::new(mock_server.uri(), "api/v1");
    let client = Client::new(&target).with_token_source(StaticToken::new("secret-token"));
    let body: Value = client.get("/clients", &RequestParams::new()).await.unwrap();
    assert_eq!(body, json!([{"id": 1}]));
}

#[tokio::test]
async fn get_without_token_has_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let _: Value = client.get("/clients", &RequestParams::new()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn query_skips_empty_values_and_keeps_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let params = RequestParams::new()
        .with("a", 1)
        .with_opt::<&str>("b", None)
        .with("c", "")
        .with("d", "x");

    let client = Client::with_base_url(&mock_server.uri());
    let _: Value = client.get("/widgets", &params).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("a=1&d=x"));
}

#[tokio::test]
async fn get_without_params_has_no_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let _: Value = client.get("/widgets", &RequestParams::new()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn post_and_put_encode_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({"name": "Caneca", "points_price": 500})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 9}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/products/9"))
        .and(body_json(json!({"name": "Caneca azul"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 9}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let created: Value = client
        .post("/products", Some(&json!({"name": "Caneca", "points_price": 500})))
        .await
        .unwrap();
    assert_eq!(created, json!({"data": {"id": 9}}));

    let updated: Value = client
        .put("/products/9", Some(&json!({"name": "Caneca azul"})))
        .await
        .unwrap();
    assert_eq!(updated["data"]["id"], 9);
}

#[tokio::test]
async fn success_body_is_returned_without_unwrapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1}, "message": "ok"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let body: Value = client.get("/clients/1", &RequestParams::new()).await.unwrap();
    assert_eq!(body, json!({"data": {"id": 1}, "message": "ok"}));
}

#[tokio::test]
async fn delete_with_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/clients/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result: Result<(), Error> = client.delete("/clients/1").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn json_error_body_passes_through() {
    let mock_server = MockServer::start().await;
    let error_body = json!({
        "message": "Validation failed",
        "errors": {"email": ["The email has already been taken."]}
    });

    Mock::given(path("/clients"))
        .respond_with(ResponseTemplate::new(422).set_body_json(error_body.clone()))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());

    let get: Result<Value, Error> = client.get("/clients", &RequestParams::new()).await;
    let post: Result<Value, Error> = client.post("/clients", Some(&json!({}))).await;
    let put: Result<Value, Error> = client.put("/clients", Some(&json!({}))).await;
    let delete: Result<Value, Error> = client.delete("/clients").await;

    for result in [get, post, put, delete] {
        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body(), Some(&error_body));
        assert_eq!(err.message(), Some("Validation failed"));
        assert!(err.validation_errors().unwrap().contains_key("email"));
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get::<Value>("/clients", &RequestParams::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus {
            status,
            body,
            raw_text,
        } => {
            assert_eq!(status, 500);
            assert_eq!(body, json!({"message": "Request failed with status 500"}));
            assert_eq!(
                raw_text.as_deref(),
                Some("<html>Internal Server Error</html>")
            );
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get::<Value>("/clients", &RequestParams::new()).await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn error_shaped_success_body_is_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "nothing here"})))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let body: Value = client
        .get("/clients", &RequestParams::new().with("page", 1))
        .await
        .unwrap();
    assert_eq!(body["message"], "nothing here");
}

#[tokio::test]
async fn transport_failure_is_not_translated() {
    // Nothing listens on port 1.
    let client = Client::with_base_url("http://127.0.0.1:1");
    let result = client.get::<Value>("/clients", &RequestParams::new()).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
