use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yellowclub_lib::types::{ServiceOrderInput, ServiceOrderItem, TransactionType};
use yellowclub_lib::{
    ClientQuery, ExtractQuery, PagedQuery, RequestParams, ServiceOrderQuery, YellowClubClient,
    YellowClubError,
};

async fn setup() -> (MockServer, YellowClubClient) {
    let mock_server = MockServer::start().await;
    let client = YellowClubClient::with_base_url(&mock_server.uri());
    (mock_server, client)
}

#[tokio::test]
async fn clients_list_reads_laravel_page() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(query_param("page", "2"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "nome": "Aeroclube de Sorocaba", "cpf_cnpj": "12.345.678/0001-99"},
                {"id": 2, "name": "Maria Souza", "email": "maria@example.com"}
            ],
            "meta": {"current_page": 2, "last_page": 3, "per_page": 2, "total": 6}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client
        .clients()
        .list(&ClientQuery::default().with_page(2).with_status("active"))
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.last_page, 3);
    assert_eq!(page.total, 6);
    assert_eq!(page.data[0].name, "Aeroclube de Sorocaba");
    assert_eq!(page.data[0].document.as_deref(), Some("12.345.678/0001-99"));
}

#[tokio::test]
async fn search_clients_sends_sanitized_term() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let page = client.clients().search_clients("  maria\t ").await.unwrap();
    assert!(page.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=1&search=maria"));
}

#[tokio::test]
async fn search_clients_rejects_blank_term_without_request() {
    let (mock_server, client) = setup().await;
    let result = client.clients().search_clients("   ").await;
    assert!(matches!(result, Err(YellowClubError::InvalidInput(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn validation_error_surfaces_server_body() {
    let (mock_server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {"document": ["The document has already been taken."]}
        })))
        .mount(&mock_server)
        .await;

    let input = yellowclub_lib::types::ClientInput {
        name: "Duplicate".to_string(),
        document: Some("12345678909".to_string()),
        ..Default::default()
    };
    let err = client.clients().create(&input).await.unwrap_err();
    let api = err.api_error().expect("api error");
    assert_eq!(api.status(), Some(422));
    assert!(api.validation_errors().unwrap().contains_key("document"));
}

#[tokio::test]
async fn partners_active_filters_by_status() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/partners"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 5, "nome": "Posto Avgas", "taxa_pontos": "1.5"}],
            "count": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client.partners().active().await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Posto Avgas");
}

#[tokio::test]
async fn aircraft_for_client_and_registration_normalized() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/aircraft"))
        .and(query_param("client_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "matricula": "PR-ABC", "cliente_id": 7}
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/aircraft"))
        .and(body_json(json!({"registration": "PT-XYZ", "client_id": 7})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 4, "registration": "PT-XYZ", "client_id": 7}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let aircraft = client.aircraft();
    let page = aircraft.for_client(7).await.unwrap();
    assert_eq!(page.data[0].registration, "PR-ABC");

    let created = aircraft
        .create(&yellowclub_lib::types::AircraftInput {
            registration: "ptxyz".to_string(),
            client_id: Some(7),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn active_services_drop_inactive_rows() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Hangaragem", "preco": "1500.00", "ativo": 1},
            {"id": 2, "nome": "Lavagem", "preco": 300, "ativo": 0}
        ])))
        .mount(&mock_server)
        .await;

    let page = client.services().active().await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0].name, "Hangaragem");
    assert_eq!(page.data[0].price, Some(1500.0));
}

#[tokio::test]
async fn active_services_keep_rows_without_flag() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .and(query_param("active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "nome": "Hangaragem"},
                {"id": 2, "nome": "Abastecimento"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let page = client.services().active().await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.total, 2);
    assert!(page.data.iter().all(|s| s.active));
}

#[tokio::test]
async fn clients_list_accepts_sql_timestamps() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "nome": "A", "created_at": "2024-05-02 10:00:00"},
                {"id": 2, "nome": "B", "created_at": "2024-05-03T08:30:00.000000Z"},
                {"id": 3, "nome": "C", "created_at": "not a date"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let page = client
        .clients()
        .list(&ClientQuery::default())
        .await
        .unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(
        page.data[0].created_at.map(|t| t.to_rfc3339()),
        Some("2024-05-02T10:00:00+00:00".to_string())
    );
    assert!(page.data[1].created_at.is_some());
    assert!(page.data[2].created_at.is_none());
}

#[tokio::test]
async fn products_list_tolerates_null_flag_and_string_stock() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Boné", "pontos": 100, "ativo": null},
            {"id": 2, "nome": "Caneca", "pontos": "80", "estoque": "10"}
        ])))
        .mount(&mock_server)
        .await;

    let page = client
        .products()
        .list(&RequestParams::new())
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.data[0].active);
    assert_eq!(page.data[0].stock, None);
    assert_eq!(page.data[1].stock, Some(10));
}

#[tokio::test]
async fn store_products_uses_store_subpath() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/products/store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 8, "nome": "Boné", "pontos": "2500", "estoque": 3}],
            "total": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = client.products().store_products().await.unwrap();
    assert_eq!(page.data[0].points_price, 2500.0);
    assert!(page.data[0].in_stock(3));
    assert!(!page.data[0].in_stock(4));
}

#[tokio::test]
async fn service_order_actions() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/service-orders"))
        .and(query_param("client_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 10,
                "numero": "OS-2024-0010",
                "itens": [
                    {"quantidade": 2, "valor_unitario": "150.00"},
                    {"quantidade": 1, "valor_unitario": 99.9}
                ]
            }]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/service-orders/10/duplicate"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 11, "numero": "OS-2024-0011"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service-orders/generate-number"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numero": "OS-2024-0012"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let orders = client.service_orders();
    let page = orders
        .list(&ServiceOrderQuery::default().with_client(4))
        .await
        .unwrap();
    assert_eq!(page.data[0].order_number.as_deref(), Some("OS-2024-0010"));
    assert_eq!(page.data[0].total_or_computed(), 399.9);

    let copy = orders.duplicate_service_order(10).await.unwrap();
    assert_eq!(copy.id, 11);

    assert_eq!(orders.generate_order_number().await.unwrap(), "OS-2024-0012");
}

#[tokio::test]
async fn service_order_create_sends_item_total() {
    let (mock_server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/service-orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 20}})))
        .mount(&mock_server)
        .await;

    let mut input = ServiceOrderInput::new(
        4,
        vec![
            ServiceOrderItem::new(1, 3.0, 10.0),
            ServiceOrderItem::new(2, 1.0, 5.5),
        ],
    );
    input.total = 0.0;
    let order = client.service_orders().create(&input).await.unwrap();
    assert_eq!(order.id, 20);

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["total"], 35.5);
    assert_eq!(sent["client_id"], 4);
}

#[tokio::test]
async fn extract_maps_tipo_and_summarizes() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/points/extract"))
        .and(query_param("data_inicio", "2024-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "tipo": "C", "valor": "1000", "descricao": "Abastecimento"},
                {"id": 2, "tipo": "D", "valor": 400, "descricao": "Resgate boné"},
                {"id": 3, "tipo": "E", "valor": 50},
                {"id": 4, "tipo": "R", "valor": 400}
            ],
            "current_page": 1,
            "last_page": 1,
            "total": 4
        })))
        .mount(&mock_server)
        .await;

    let query = ExtractQuery::default().with_date_range(
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    );
    let (page, summary) = client.points_extract().summarize(&query).await.unwrap();

    assert_eq!(page.data[0].transaction_type, TransactionType::Credit);
    assert_eq!(page.data[1].signed_points(), -400.0);
    assert_eq!(summary.credits, 1000.0);
    assert_eq!(summary.debits, 400.0);
    assert_eq!(summary.expired, 50.0);
    assert_eq!(summary.reversals, 400.0);
    assert_eq!(summary.net, 950.0);
}

#[tokio::test]
async fn balance_unwraps_data() {
    let (mock_server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/points/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"saldo": "12500", "pontos_a_expirar": 300}
        })))
        .mount(&mock_server)
        .await;

    let balance = client.user_points().balance().await.unwrap();
    assert_eq!(balance.balance, 12500.0);
    assert_eq!(balance.expiring_points, Some(300.0));
}

#[tokio::test]
async fn users_reset_password_and_metrics() {
    let (mock_server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/users/3/reset-password"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "E-mail enviado"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/metrics/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"clients": 120, "open_orders": 7}
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/metrics/import-aeroclube"))
        .and(body_json(json!({"rows": [{"matricula": "PP-AAA"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"imported": 1, "skipped": 0}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = client.users().reset_password(3).await.unwrap();
    assert_eq!(message.as_deref(), Some("E-mail enviado"));

    let stats = client.metrics().stats().await.unwrap();
    assert_eq!(stats["clients"], 120);
    assert_eq!(stats.keys().collect::<Vec<_>>(), vec!["clients", "open_orders"]);

    let report = client
        .metrics()
        .import_aeroclube(&json!({"rows": [{"matricula": "PP-AAA"}]}))
        .await
        .unwrap();
    assert_eq!(report["imported"], 1);
}

#[tokio::test]
async fn delete_tolerates_empty_body() {
    let (mock_server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/products/8"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.products().delete(8).await.unwrap();
}
