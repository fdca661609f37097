//! API integration tests
//!
//! Require a running server with a clean database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .subsec_nanos();
    format!("{}-{}", prefix, nanos)
}

fn author_body(name: &str) -> Value {
    json!({
        "name": name,
        "nationality": "British",
        "birthDate": "1775-12-16",
        "biography": "English novelist.",
        "email": "jane@austen.org"
    })
}

fn publisher_body(name: &str) -> Value {
    json!({
        "name": name,
        "contactNumber": "0123456789",
        "email": "contact@murray.co.uk",
        "type": "Trade",
        "country": "United Kingdom",
        "website": "https://johnmurray.co.uk"
    })
}

fn category_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Long-form fiction"
    })
}

fn unique_isbn() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .subsec_nanos();
    format!("9780{:09}", nanos)
}

fn book_body(isbn: &str, author: &str, publisher: &str, category: &str) -> Value {
    json!({
        "title": "Emma",
        "isbn": isbn,
        "pageCount": 474,
        "language": "English",
        "price": 19.99,
        "publicationDate": "1815-12-23",
        "format": "Hardcover",
        "authorNames": [author],
        "categoryNames": [category],
        "publisherNames": [publisher]
    })
}

async fn create_author(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&author_body(name))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_publisher(client: &Client, name: &str) {
    let response = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&publisher_body(name))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

async fn create_category(client: &Client, name: &str) {
    let response = client
        .post(format!("{}/categories", BASE_URL))
        .json(&category_body(name))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_author_sets_location_header() {
    let client = Client::new();
    let name = unique("Jane Austen");

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&author_body(&name))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .expect("No Location header")
        .to_str()
        .expect("Invalid Location header")
        .to_string();

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No id in response");
    assert_eq!(location, format!("/api/authors/{}", id));
    assert_eq!(body["name"], name.as_str());
}

#[tokio::test]
#[ignore]
async fn test_duplicate_author_name_conflicts() {
    let client = Client::new();
    let name = unique("Jane Austen");

    create_author(&client, &name).await;

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&author_body(&name))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_author_validation_messages_are_ordered() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("No errors array");
    assert_eq!(errors[0], "Please provide a name.");
    assert_eq!(errors[2], "Birth date cannot be null.");
}

#[tokio::test]
#[ignore]
async fn test_get_missing_author_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/authors/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Author not found with ID: 999999999");
}

#[tokio::test]
#[ignore]
async fn test_delete_author_lifecycle() {
    let client = Client::new();
    let created = create_author(&client, &unique("Jane Austen")).await;
    let id = created["id"].as_i64().expect("No id in response");

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{}/authors/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_author_replaces_all_fields() {
    let client = Client::new();
    let created = create_author(&client, &unique("Jane Austen")).await;
    let id = created["id"].as_i64().expect("No id in response");

    let new_name = unique("Charlotte Bronte");
    let response = client
        .put(format!("{}/authors/{}", BASE_URL, id))
        .json(&json!({
            "name": new_name,
            "nationality": "English",
            "birthDate": "1816-04-21",
            "biography": "Eldest of the Bronte sisters.",
            "email": "charlotte@bronte.org"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], new_name.as_str());
    assert_eq!(body["nationality"], "English");
}

#[tokio::test]
#[ignore]
async fn test_author_page_without_filters_matches_everything() {
    let client = Client::new();
    create_author(&client, &unique("Jane Austen")).await;

    let response = client
        .get(format!("{}/authors/page", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert!(response.headers().get("cache-control").is_none());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total"].as_i64().expect("No total") >= 1);
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 10);
    assert!(body["items"].as_array().expect("No items").len() <= 10);
}

#[tokio::test]
#[ignore]
async fn test_page_with_negative_index_is_clamped() {
    let client = Client::new();
    create_author(&client, &unique("Jane Austen")).await;

    let response = client
        .get(format!("{}/authors/page?page=-1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total"].as_i64().expect("No total") >= 1);
}

#[tokio::test]
#[ignore]
async fn test_author_page_with_unmatched_filter_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/authors/page?name=no-author-has-this-name",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_book_with_unknown_relation_name_is_not_found() {
    let client = Client::new();
    create_author(&client, &unique("Jane Austen")).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Emma",
            "isbn": "9780141439587",
            "pageCount": 474,
            "language": "English",
            "price": 19.99,
            "publicationDate": "1815-12-23",
            "format": "Hardcover",
            "authorNames": ["nobody-by-this-name"],
            "categoryNames": ["Novel"],
            "publisherNames": ["John Murray"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "One or more of the provided names (author, category or publisher) do not exist."
    );
}

#[tokio::test]
#[ignore]
async fn test_book_crud_with_resolved_relations() {
    let client = Client::new();

    let author = unique("Jane Austen");
    let publisher = unique("John Murray");
    let category = unique("Novel");
    create_author(&client, &author).await;
    create_publisher(&client, &publisher).await;
    create_category(&client, &category).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body(&unique_isbn(), &author, &publisher, &category))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id in response");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .expect("No Cache-Control header")
            .to_str()
            .expect("Invalid Cache-Control header"),
        "no-cache"
    );

    let details: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(details["title"], "Emma");
    assert_eq!(details["authors"][0]["name"], author.as_str());
    assert_eq!(details["publishers"][0]["name"], publisher.as_str());
    assert_eq!(details["categories"][0]["name"], category.as_str());

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_book_update_replaces_relation_sets() {
    let client = Client::new();

    let first_author = unique("Jane Austen");
    let second_author = unique("Charlotte Bronte");
    let publisher = unique("John Murray");
    let category = unique("Novel");
    create_author(&client, &first_author).await;
    create_author(&client, &second_author).await;
    create_publisher(&client, &publisher).await;
    create_category(&client, &category).await;

    let isbn = unique_isbn();
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body(&isbn, &first_author, &publisher, &category))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id in response");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&book_body(&isbn, &second_author, &publisher, &category))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let details: Value = response.json().await.expect("Failed to parse response");
    let authors = details["authors"].as_array().expect("No authors array");
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], second_author.as_str());
}

#[tokio::test]
#[ignore]
async fn test_book_update_with_unknown_relation_name_is_not_found() {
    let client = Client::new();

    let author = unique("Jane Austen");
    let publisher = unique("John Murray");
    let category = unique("Novel");
    create_author(&client, &author).await;
    create_publisher(&client, &publisher).await;
    create_category(&client, &category).await;

    let isbn = unique_isbn();
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book_body(&isbn, &author, &publisher, &category))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id in response");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&book_body(&isbn, "nobody-by-this-name", &publisher, &category))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "One or more of the provided names (author, category or publisher) do not exist."
    );
}

#[tokio::test]
#[ignore]
async fn test_book_validation_rejects_out_of_range_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Emma",
            "isbn": "9780141439587",
            "pageCount": 50,
            "language": "English",
            "price": 1500.0,
            "publicationDate": "1815-12-23",
            "format": "Hardcover",
            "authorNames": ["Jane Austen"],
            "categoryNames": ["Novel"],
            "publisherNames": ["John Murray"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("No errors array");
    assert!(errors.contains(&json!("Page count must be at least 100.")));
    assert!(errors.contains(&json!("Price cannot exceed 1000.")));
}

#[tokio::test]
#[ignore]
async fn test_register_and_lookup_user() {
    let client = Client::new();
    let username = unique("reader");

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "s3cret"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], username.as_str());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());

    let response = client
        .get(format!("{}/auth/users/{}", BASE_URL, username))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_username_conflicts() {
    let client = Client::new();
    let username = unique("reader");

    let register = json!({ "username": username, "password": "s3cret" });

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&register)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&register)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_lookup_missing_user_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/auth/users/nobody-registered-this", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_publisher_page_filters_by_type() {
    let client = Client::new();
    let name = unique("John Murray");

    let response = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&publisher_body(&name))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/publishers/page?type=Trade", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total"].as_i64().expect("No total") >= 1);
    for item in body["items"].as_array().expect("No items") {
        assert!(item["type"]
            .as_str()
            .expect("No type field")
            .contains("Trade"));
    }
}
