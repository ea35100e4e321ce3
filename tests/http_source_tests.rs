use pageform::domain::{DataType, EntityData, FieldValue};
use pageform::source::{HttpPageSource, PageSource, SourceError, fetch_page};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_document() -> serde_json::Value {
    json!({
        "formFields": [
            {
                "name": "email",
                "label": "Email",
                "layout": {"formLayout": {"sectionId": "leftSection", "order": 1}},
                "input": {"dataType": "email", "validation": {"required": true}}
            },
            {
                "name": "qty",
                "label": "Quantity",
                "layout": {"formLayout": {"sectionId": "rightSection", "order": 1}},
                "input": {"dataType": "number"}
            }
        ]
    })
}

async fn server_with_orders() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pages/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_document()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "one@example.com", "qty": 2},
            {"id": 2, "email": "two@example.com", "qty": 5}
        ])))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetches_config_and_matching_entity() {
    let server = server_with_orders().await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let snapshot = fetch_page(&source, "orders", "2").await.expect("page");
    assert_eq!(snapshot.config.fields.len(), 2);
    assert_eq!(snapshot.config.fields[0].data_type, DataType::Email);
    let values = snapshot.values.expect("entity");
    assert_eq!(values["email"], FieldValue::text("two@example.com"));
    assert_eq!(values["qty"], FieldValue::Number(5.0));
}

#[tokio::test]
async fn unknown_entity_yields_none() {
    let server = server_with_orders().await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let values = source.load_page_data("orders", "42").await.expect("data");
    assert!(values.is_none());
}

#[tokio::test]
async fn missing_data_collection_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/appeals"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    assert!(source.load_page_data("appeals", "1").await.expect("data").is_none());
}

#[tokio::test]
async fn missing_page_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pages/appeals"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let err = source.load_page_config("appeals").await.unwrap_err();
    assert!(matches!(err, SourceError::NotFound(ref page) if page == "appeals"));
}

#[tokio::test]
async fn server_errors_use_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pages/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let err = source.load_page_config("orders").await.unwrap_err();
    assert_eq!(err.to_string(), "Error Code: 500\nMessage: database offline");
}

#[tokio::test]
async fn invalid_config_is_a_config_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pages/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "formFields": [{"name": "a", "label": "A"}, {"name": "a", "label": "B"}]
        })))
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let err = source.load_page_config("orders").await.unwrap_err();
    assert!(matches!(err, SourceError::Config(_)));
}

#[tokio::test]
async fn save_puts_values_to_entity_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/data/orders/7"))
        .and(body_json(json!({"email": "x@example.com", "id": "7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "7"})))
        .expect(1)
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let mut values = EntityData::new();
    values.insert("email".into(), FieldValue::text("x@example.com"));
    values.insert("id".into(), FieldValue::text("7"));
    source.save_page_data("orders", &values).await.expect("saved");
}

#[tokio::test]
async fn save_without_id_posts_to_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/data/orders"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let mut values = EntityData::new();
    values.insert("email".into(), FieldValue::text("x@example.com"));
    source.save_page_data("orders", &values).await.expect("saved");
}

#[tokio::test]
async fn rejected_save_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/data/orders/1"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;
    let source = HttpPageSource::new(server.uri()).expect("client");
    let mut values = EntityData::new();
    values.insert("id".into(), FieldValue::text("1"));
    let err = source.save_page_data("orders", &values).await.unwrap_err();
    assert!(matches!(err, SourceError::Status { code: 422, .. }));
    assert_eq!(
        err.to_string(),
        "Error Code: 422\nMessage: Unprocessable Entity"
    );
}
