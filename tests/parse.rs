use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serial_test::serial;

use crate::setup::start_server;

mod setup;

#[derive(Debug, Clone, Serialize)]
pub struct ParseText<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngredientResponse {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseResponse {
    pub ingredients: Vec<IngredientResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

fn ingredient(name: &str, quantity: &str) -> IngredientResponse {
    IngredientResponse {
        name: name.into(),
        quantity: quantity.into(),
    }
}

#[tokio::test]
#[serial]
async fn health_check() {
    let (client, url) = start_server(5931).await;

    let res = client
        .get(url.join("/health").unwrap())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let health: HealthResponse = res.json().await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
#[serial]
async fn parse_returns_normalized_ingredients() {
    let (client, url) = start_server(5932).await;

    let body = ParseText {
        text: "A burger with a fried chicken patty two brioche buns lettuce a slice of tomato",
    };
    let res = client
        .post(url.join("/parse").unwrap())
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let parsed: ParseResponse = res.json().await.unwrap();
    assert_eq!(
        parsed.ingredients,
        vec![
            ingredient("burger", "1"),
            ingredient("fried chicken patty", "1"),
            ingredient("brioche buns", "two"),
            ingredient("lettuce", ""),
            ingredient("tomato", "1 slice"),
        ]
    );
}

#[tokio::test]
#[serial]
async fn parse_without_text_is_rejected() {
    let (client, url) = start_server(5933).await;

    let res = client
        .post(url.join("/parse").unwrap())
        .json(&serde_json::json!({ "note": "no text here" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = res.json().await.unwrap();
    assert_eq!(error.message, "missing 'text' in JSON body");
}

#[tokio::test]
#[serial]
async fn parse_merges_duplicate_ingredients() {
    let (client, url) = start_server(5934).await;

    let body = ParseText {
        text: "a tomato and some tomato",
    };
    let res = client
        .post(url.join("/parse").unwrap())
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let parsed: ParseResponse = res.json().await.unwrap();
    assert_eq!(parsed.ingredients, vec![ingredient("tomato", "1")]);
}

#[tokio::test]
#[serial]
async fn parse_empty_text_returns_no_ingredients() {
    let (client, url) = start_server(5935).await;

    let res = client
        .post(url.join("/parse").unwrap())
        .json(&ParseText { text: "" })
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let parsed: ParseResponse = res.json().await.unwrap();
    assert_eq!(parsed.ingredients, vec![]);
}
