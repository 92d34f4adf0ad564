//! End-to-end tests over real sockets and a real on-disk SQLite store.
//!
//! Layout per test: a mock upstream (axum), the full cotacao router served on
//! an ephemeral port, and the SDK client polling it - the same three-process
//! chain as production, minus the public internet.

use std::str::FromStr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tokio::net::TcpListener;

use cotacao_client::{ClientError, CotacaoClient};
use cotacao_hex::{QuoteService, inbound::HttpServer};
use cotacao_repo::SqliteQuoteStore;
use cotacao_types::Bid;
use cotacao_upstream::AwesomeApiSource;

struct TestStack {
    _dir: tempfile::TempDir,
    db_url: String,
    base_url: String,
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Boots the full server stack against the given mock upstream router.
async fn spawn_stack(upstream: Router) -> TestStack {
    let upstream_base = spawn(upstream).await;

    let dir = tempfile::tempdir().unwrap();
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("cotacoes.db").display()
    );

    let service = QuoteService::new(
        AwesomeApiSource::new(format!("{upstream_base}/json/last/USD-BRL")),
        SqliteQuoteStore::new(&db_url),
    );
    let base_url = spawn(HttpServer::new(service).router()).await;

    TestStack {
        _dir: dir,
        db_url,
        base_url,
    }
}

async fn row_count(db_url: &str) -> i64 {
    let mut conn = SqliteConnectOptions::from_str(db_url)
        .unwrap()
        .create_if_missing(true)
        .connect()
        .await
        .unwrap();
    // The table may not exist yet when no request ever succeeded.
    sqlx::query("CREATE TABLE IF NOT EXISTS exchange_rates (id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, exchange_rate VARCHAR(10) NOT NULL)")
        .execute(&mut conn)
        .await
        .unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exchange_rates")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();
    count
}

#[tokio::test]
async fn test_happy_path_round_trip() {
    let upstream = Router::new().route(
        "/json/last/USD-BRL",
        get(|| async { r#"{"USDBRL":{"bid":"5.4321","ask":"5.4400"}}"# }),
    );
    let stack = spawn_stack(upstream).await;

    let bid = CotacaoClient::new(&stack.base_url).fetch_bid().await.unwrap();

    assert_eq!(bid, Bid::new("5.4321"));
    assert_eq!(row_count(&stack.db_url).await, 1);
}

#[tokio::test]
async fn test_each_poll_adds_one_row() {
    let upstream = Router::new().route(
        "/json/last/USD-BRL",
        get(|| async { r#"{"USDBRL":{"bid":"5.09"}}"# }),
    );
    let stack = spawn_stack(upstream).await;
    let client = CotacaoClient::new(&stack.base_url);

    client.fetch_bid().await.unwrap();
    client.fetch_bid().await.unwrap();
    client.fetch_bid().await.unwrap();

    assert_eq!(row_count(&stack.db_url).await, 3);
}

#[tokio::test]
async fn test_unreachable_upstream_yields_500_and_no_row() {
    // Upstream port allocated, then released: connection refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream_addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("cotacoes.db").display()
    );
    let service = QuoteService::new(
        AwesomeApiSource::new(format!("http://{upstream_addr}/json/last/USD-BRL")),
        SqliteQuoteStore::new(&db_url),
    );
    let base_url = spawn(HttpServer::new(service).router()).await;

    let err = CotacaoClient::new(&base_url).fetch_bid().await.unwrap_err();

    assert!(matches!(err, ClientError::Status(500)));
    assert_eq!(row_count(&db_url).await, 0);
}

#[tokio::test]
async fn test_malformed_upstream_yields_500_and_no_row() {
    let upstream = Router::new().route(
        "/json/last/USD-BRL",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream down") }),
    );
    let stack = spawn_stack(upstream).await;

    let err = CotacaoClient::new(&stack.base_url)
        .fetch_bid()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status(500)));
    assert_eq!(row_count(&stack.db_url).await, 0);
}
