use serde_json::json;
use smartfridge_core::{
    application::Alert,
    domain::{
        common::{PostgrestConfig, entities::app_errors::CoreError, in_flight::RequestKind},
        fridge_item::{
            entities::{Category, Unit},
            ports::FridgeItemRepository,
            value_objects::NewFridgeItem,
        },
    },
    infrastructure::row_store::PostgrestFridgeItemRepository,
};
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const TABLE_PATH: &str = "/rest/v1/fridge_items";

fn repository(server: &MockServer) -> PostgrestFridgeItemRepository {
    PostgrestFridgeItemRepository::new(PostgrestConfig {
        url: server.uri(),
        anon_key: "anon".to_string(),
        table: "fridge_items".to_string(),
    })
}

fn row(id: Uuid, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "quantity": 2,
        "unit": "L",
        "expiry_date": "2030-01-10",
        "category": "Dairy",
        "created_at": "2030-01-01T10:00:00+00:00"
    })
}

#[tokio::test]
async fn test_list_sends_key_and_order() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .and(header("apikey", "anon"))
        .and(header("authorization", "Bearer anon"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row(id, "Milk")])))
        .expect(1)
        .mount(&server)
        .await;

    let items = repository(&server).list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);
    assert_eq!(items[0].unit, Unit::Litre);
    assert_eq!(items[0].category, Category::Dairy);
}

#[tokio::test]
async fn test_missing_table_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "42P01",
            "message": "relation \"public.fridge_items\" does not exist"
        })))
        .mount(&server)
        .await;

    assert_eq!(
        repository(&server).list().await.unwrap_err(),
        CoreError::TableNotFound
    );
}

#[tokio::test]
async fn test_insert_returns_representation() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path(TABLE_PATH))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([row(id, "Milk")])))
        .mount(&server)
        .await;

    let item = NewFridgeItem::new("Milk", 2.0, Unit::Litre, None, Category::Dairy);
    let created = repository(&server).insert(item).await.unwrap();
    assert_eq!(created.id, id);
}

#[tokio::test]
async fn test_delete_of_unknown_row_is_not_found() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(TABLE_PATH))
        .and(query_param("id", format!("eq.{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert_eq!(
        repository(&server).delete(id).await.unwrap_err(),
        CoreError::NotFound
    );
}

#[tokio::test]
async fn test_schema_cache_miss_is_missing_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "PGRST205",
            "message": "Could not find the table 'public.fridge_items' in the schema cache"
        })))
        .mount(&server)
        .await;

    assert_eq!(
        repository(&server).get_by_id(Uuid::new_v4()).await.unwrap_err(),
        CoreError::TableNotFound
    );
}

#[tokio::test]
async fn test_update_of_unknown_row_is_not_found() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("PATCH"))
        .and(path(TABLE_PATH))
        .and(query_param("id", format!("eq.{}", id)))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let item = NewFridgeItem::new("Milk", 1.0, Unit::Litre, None, Category::Dairy);
    assert_eq!(
        repository(&server).update(id, item).await.unwrap_err(),
        CoreError::NotFound
    );
}

#[tokio::test]
async fn test_server_failure_is_generic_row_store_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "XX000",
            "message": "internal error"
        })))
        .mount(&server)
        .await;

    let err = repository(&server).list().await.unwrap_err();
    assert!(matches!(&err, CoreError::RowStore(message) if message.contains("internal error")));

    let alert = Alert::from_failure(Some(RequestKind::LoadItems), &err);
    assert_eq!(alert.message, "Failed to load items");
}
