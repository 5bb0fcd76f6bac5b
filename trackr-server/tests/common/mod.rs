//! Shared test harness: a real server on an ephemeral port

use tempfile::TempDir;
use tokio::net::TcpListener;

use trackr_client::{ClientConfig, HttpClient};
use trackr_server::core::build_app;
use trackr_server::{Config, ServerState};

pub struct TestServer {
    pub base_url: String,
    pub client: HttpClient,
    _work_dir: TempDir,
}

/// Boot a server over a throwaway work dir; the listener picks a free port.
pub async fn spawn_server() -> TestServer {
    let work_dir = tempfile::tempdir().expect("create work dir");

    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize state");

    let app = build_app().with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let base_url = format!("http://{addr}");
    let client = HttpClient::new(&ClientConfig::new(&base_url));

    TestServer {
        base_url,
        client,
        _work_dir: work_dir,
    }
}
