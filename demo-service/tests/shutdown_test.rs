use demo_service::startup::Application;
use reqwest::StatusCode;
use service_core::config::Config;
use std::time::Duration;
use tokio::sync::oneshot;

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Config::default()
    }
}

#[tokio::test]
async fn server_stops_cleanly_when_signalled() {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let app = Application::build_with_shutdown(test_config(), async move {
        stop_rx.await.ok();
    })
    .await
    .expect("Failed to build test application");

    let health_url = format!("http://127.0.0.1:{}/health", app.port());
    let server = tokio::spawn(app.run_until_stopped());

    // No pooled connections, so nothing keeps the server alive after the signal.
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();

    let mut status = None;
    for _ in 0..50 {
        if let Ok(response) = client.get(&health_url).send().await {
            status = Some(response.status());
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert_eq!(status, Some(StatusCode::OK));

    stop_tx.send(()).expect("server dropped the shutdown receiver");

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop after the shutdown signal")
        .expect("server task panicked");
    assert!(result.is_ok());

    assert!(client.get(&health_url).send().await.is_err());
}
