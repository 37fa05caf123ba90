use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::startup::seeded_state;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

/// Workspace-root api-specs directory, independent of the test's working directory.
fn docs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../api-specs")
}

/// Boot the full router with seeded stores on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(seeded_state(), cors(), &docs_dir());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_api_docs_are_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for resource in ["todos", "categories"] {
        let res = c
            .get(format!("{}/api-docs/{}", app.base_url, resource))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "docs for {resource}");
        let body = res.text().await?;
        assert!(body.starts_with("openapi:"), "docs for {resource} look like OpenAPI");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_seeded_todos_filter_and_limit() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .get(format!("{}/todos?completed=true&limit=10", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let done = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(done.len(), 1);
    assert_eq!(done[0]["id"], "todo-2");

    // limit caps the filtered set
    let res = c.get(format!("{}/todos?limit=1", app.base_url)).send().await?;
    let capped = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(capped.len(), 1);

    // a zero limit is honored, not treated as unlimited
    let res = c.get(format!("{}/todos?limit=0", app.base_url)).send().await?;
    let none = res.json::<Vec<serde_json::Value>>().await?;
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn e2e_todo_crud_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // create
    let res = c
        .post(format!("{}/todos", app.base_url))
        .json(&json!({
            "title": "Write tests",
            "description": "cover the whole surface",
            "completed": false,
            "category_id": "category-1"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().expect("id assigned").to_string();
    assert!(created["created_at"].is_string());
    assert_eq!(created["title"], "Write tests");

    // get returns the same record
    let res = c.get(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched, created);

    // full replacement: omitted fields disappear from the stored record
    let res = c
        .put(format!("{}/todos/{}", app.base_url, id))
        .json(&json!({"title": "Write tests", "completed": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(updated.get("description").is_none());
    assert!(updated.get("category_id").is_none());

    // delete, then everything 404s
    let res = c.delete(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Todo not found");

    let res = c.delete(format!("{}/todos/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_todo_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .put(format!("{}/todos/{}", app.base_url, uuid::Uuid::new_v4()))
        .json(&json!({"title": "ghost"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Todo not found");
    Ok(())
}

#[tokio::test]
async fn e2e_category_crud_and_dangling_reference() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // seeded categories
    let res = c.get(format!("{}/categories", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let all = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(all.len(), 2);

    // identical create inputs yield distinct ids
    let make = || {
        c.post(format!("{}/categories", app.base_url))
            .json(&json!({"name": "Shopping"}))
            .send()
    };
    let first = make().await?.json::<serde_json::Value>().await?;
    let second = make().await?.json::<serde_json::Value>().await?;
    assert_eq!(first["name"], "Shopping");
    assert!(first["created_at"].is_string());
    assert_ne!(first["id"], second["id"]);

    // deleting a referenced category leaves the todo's reference dangling
    let res = c
        .delete(format!("{}/categories/category-1", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/todos/todo-1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let todo = res.json::<serde_json::Value>().await?;
    assert_eq!(todo["category_id"], "category-1");

    // category is gone
    let res = c.get(format!("{}/categories/category-1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Category not found");

    Ok(())
}

#[tokio::test]
async fn e2e_servers_are_independent() -> anyhow::Result<()> {
    // two processes' worth of state never share a map
    let a = start_server().await?;
    let b = start_server().await?;
    let c = client();

    let res = c.delete(format!("{}/todos/todo-1", a.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/todos/todo-1", b.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}
