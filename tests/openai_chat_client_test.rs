use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use briefing::application::ports::{ChatClient, ChatClientError};
use briefing::infrastructure::llm::OpenAiChatClient;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn client(base_url: String) -> OpenAiChatClient {
    OpenAiChatClient::new("test-key".to_string(), base_url, "gpt-4o".to_string())
}

#[tokio::test]
async fn given_completion_response_when_completing_then_message_content_is_returned() {
    let body = r#"{"choices": [{"message": {"content": "{\"headline\": \"H\"}"}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let result = client(base_url).complete_json("instruction", "prompt").await;

    assert_eq!(result.unwrap(), r#"{"headline": "H"}"#);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_choices_when_completing_then_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_server(200, r#"{"choices": []}"#).await;

    let result = client(base_url).complete_json("instruction", "prompt").await;

    assert!(matches!(result, Err(ChatClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_body_when_completing_then_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_server(200, "<html>gateway error</html>").await;

    let result = client(base_url).complete_json("instruction", "prompt").await;

    assert!(matches!(result, Err(ChatClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_429_when_completing_then_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_server(429, "slow down").await;

    let result = client(base_url).complete_json("instruction", "prompt").await;

    assert!(matches!(result, Err(ChatClientError::RateLimited(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_image_bytes_when_describing_then_caption_is_returned() {
    let body = r#"{"choices": [{"message": {"content": "A chart of quarterly revenue."}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let result = client(base_url)
        .describe_image("describe this", b"png bytes", "image/png")
        .await;

    assert_eq!(result.unwrap(), "A chart of quarterly revenue.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_null_message_content_when_describing_then_invalid_response() {
    let body = r#"{"choices": [{"message": {"content": null}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let result = client(base_url)
        .describe_image("describe this", b"png bytes", "image/png")
        .await;

    assert!(matches!(result, Err(ChatClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
