use aurum_core::catalog::{CatalogRepository, Category, Gem, Metal, NewItem};
use aurum_infrastructure::FirestoreCatalogRepository;
use mockito::{Matcher, Server};

const COLLECTION_PATH: &str = "^/projects/aurum/databases/shop/documents/products";

fn repository(server: &Server) -> FirestoreCatalogRepository {
    FirestoreCatalogRepository::new("aurum")
        .with_base_url(server.url())
        .with_database("shop")
}

fn document(id: &str, name: &str, price: &str) -> String {
    format!(
        r##"{{
            "name": "projects/aurum/databases/shop/documents/products/{id}",
            "fields": {{
                "name": {{"stringValue": "{name}"}},
                "price": {{"integerValue": "{price}"}},
                "description": {{"stringValue": "Hand finished"}},
                "category": {{"stringValue": "Ring"}},
                "metal": {{"stringValue": "Gold"}},
                "gem": {{"stringValue": "Diamond"}},
                "gemColor": {{"stringValue": "#FFFFFF"}},
                "metalColor": {{"stringValue": "#FFD700"}}
            }}
        }}"##
    )
}

#[tokio::test]
async fn test_list_all_follows_page_tokens() {
    let mut server = Server::new_async().await;

    let first_page = server
        .mock("GET", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::Regex("^pageSize=300$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"documents": [{}], "nextPageToken": "p2"}}"#,
            document("a1", "Solitaire", "1200")
        ))
        .create_async()
        .await;
    let second_page = server
        .mock("GET", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::Regex("pageToken=p2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"documents": [{}]}}"#,
            document("b2", "Halo", "2400")
        ))
        .create_async()
        .await;

    let items = repository(&server).list_all().await.unwrap();

    first_page.assert_async().await;
    second_page.assert_async().await;
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "b2"]);
    assert_eq!(items[1].price, 2400);
    assert_eq!(items[0].metal, Metal::Gold);
}

#[tokio::test]
async fn test_empty_collection_lists_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let items = repository(&server).list_all().await.unwrap();

    mock.assert_async().await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_malformed_documents_are_skipped() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"documents": [
                {{"name": "projects/aurum/databases/shop/documents/products/bad", "fields": {{}}}},
                {}
            ]}}"#,
            document("ok", "Tennis", "3100")
        ))
        .create_async()
        .await;

    let items = repository(&server).list_all().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "ok");
}

#[tokio::test]
async fn test_create_returns_store_assigned_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJsonString(
            r#"{"fields": {"name": {"stringValue": "Aurora"}}}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(document("srv-42", "Aurora", "1500"))
        .create_async()
        .await;

    let item = NewItem::new("Aurora", 1500, Category::Necklace, Metal::Platinum, Gem::Sapphire);
    let id = repository(&server).create(&item).await.unwrap();

    mock.assert_async().await;
    assert_eq!(id, "srv-42");
}

#[tokio::test]
async fn test_api_key_is_sent_as_query_parameter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::UrlEncoded("key".to_string(), "secret".to_string()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    repository(&server)
        .with_api_key("secret")
        .list_all()
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_treats_missing_document_as_deleted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", Matcher::Regex(format!("{COLLECTION_PATH}/gone")))
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":{"code":404,"message":"No document","status":"NOT_FOUND"}}"#)
        .create_async()
        .await;

    repository(&server).delete("gone").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unavailable_store_is_retryable_error() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", Matcher::Regex(format!("{COLLECTION_PATH}/busy")))
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body(r#"{"error":{"code":503,"message":"Try later","status":"UNAVAILABLE"}}"#)
        .create_async()
        .await;

    let err = repository(&server).delete("busy").await.unwrap_err();

    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_permission_denied_is_not_retryable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(COLLECTION_PATH.to_string()))
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"message":"Denied","status":"PERMISSION_DENIED"}}"#)
        .create_async()
        .await;

    let err = repository(&server).list_all().await.unwrap_err();

    assert!(!err.is_retryable());
    assert!(err.to_string().contains("PERMISSION_DENIED"));
}
