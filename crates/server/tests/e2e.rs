use std::collections::HashSet;
use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize)]
struct BookDto {
    id: String,
    title: String,
    author: String,
    price: i64,
}

struct TestApp {
    base_url: String,
}

async fn start_server(seed_fixtures: bool) -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.store.seed_fixtures = seed_fixtures;
    let app = server::startup::build_app(&cfg);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_create_and_fetch() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/books", app.base_url))
        .json(&json!({"title": "A", "author": "B", "price": 10}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<BookDto>().await?;

    let res = c.get(format!("{}/books/{}", app.base_url, created.id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<BookDto>().await?;
    assert_eq!(fetched.id, created.id);
    assert_eq!((fetched.title.as_str(), fetched.author.as_str(), fetched.price), ("A", "B", 10));
    Ok(())
}

#[tokio::test]
async fn e2e_text_plain_is_unsupported() -> anyhow::Result<()> {
    let app = start_server(false).await?;
    let res = reqwest::Client::new()
        .post(format!("{}/books", app.base_url))
        .header("content-type", "text/plain")
        .body(r#"{"title":"A","author":"B","price":10}"#)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(res.text().await?, "need content-type 'application/json', but got 'text/plain'");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_parallel_creates_lose_nothing() -> anyhow::Result<()> {
    let app = start_server(true).await?;
    let c = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..100 {
        let c = c.clone();
        let url = format!("{}/books", app.base_url);
        handles.push(tokio::spawn(async move {
            let res = c
                .post(url)
                .json(&json!({"title": format!("title-{i}"), "author": "load", "price": i}))
                .send()
                .await?;
            anyhow::ensure!(res.status() == HttpStatusCode::CREATED, "status {}", res.status());
            Ok::<_, anyhow::Error>(res.json::<BookDto>().await?.id)
        }));
    }

    let mut created = HashSet::new();
    for h in handles {
        assert!(created.insert(h.await??), "duplicate id returned");
    }
    assert_eq!(created.len(), 100);

    let books = c
        .get(format!("{}/books", app.base_url))
        .send()
        .await?
        .json::<Vec<BookDto>>()
        .await?;
    assert_eq!(books.len(), 3 + 100);
    let listed: HashSet<_> = books.iter().map(|b| b.id.clone()).collect();
    assert_eq!(listed.len(), books.len());
    assert!(created.is_subset(&listed));
    for id in ["1", "2", "3"] {
        assert!(listed.contains(id));
    }
    Ok(())
}

#[tokio::test]
async fn e2e_bind_failure_is_reported() -> anyhow::Result<()> {
    let taken = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let mut cfg = AppConfig::default();
    cfg.server.host = "127.0.0.1".into();
    cfg.server.port = taken.local_addr()?.port();

    let res = server::startup::serve(cfg, std::future::pending()).await;
    assert!(res.is_err());
    Ok(())
}
