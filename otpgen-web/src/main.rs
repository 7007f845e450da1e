#![deny(missing_docs)]
//! A web server for the otpgen tool. Every request is one isolated
//! invocation of the decision pipeline; nothing is shared between requests.

use axum::{
    Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use local_ip_address::local_ip;
use log::{debug, error, warn};
use otpgen_core::{OtpError, Options, RfcBackend, resolve};
use serde_json::{Value, json};
use std::env;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

const DEFAULT_PORT: u16 = 3000;

const HELP: &str = "POST /api/otp with a JSON body such as {\"mode\": \"hmac\", \"secret\": \"JBSWY3DPEHPK3PXP\", \"counter\": 42}. \
Fields: mode (time | hmac | help, default time), secret (Base32), counter (hmac only, default 0), \
digits (1-9, default 6), interval (seconds, default 30), algorithm (sha1 | sha256 | sha512, default sha1).";

#[tokio::main]
async fn main() {
    env_logger::init();
    let port = port_from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    println!("listening on:");
    if let Ok(my_local_ip) = local_ip() {
        println!("  - http://{my_local_ip}:{port}/api/otp");
    }
    println!("  - http://127.0.0.1:{port}/api/otp");

    if let Err(e) = axum::serve(listener, app()).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}

/// Reads the listening port from `OTPGEN_WEB_PORT`, falling back to the default.
fn port_from_env() -> u16 {
    match env::var("OTPGEN_WEB_PORT") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("Ignoring invalid OTPGEN_WEB_PORT '{value}': {e}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn app() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/otp", post(otp_handler))
        .layer(CorsLayer::permissive())
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Resolves one request. A body that is not valid options JSON becomes the
/// warning, so it goes through the same precedence as a command-line typo.
async fn otp_handler(payload: Result<Json<Options>, JsonRejection>) -> (StatusCode, Json<Value>) {
    let options = match payload {
        Ok(Json(options)) => options,
        Err(rejection) => Options::default().with_warning(rejection.body_text()),
    };

    match resolve(&options, &RfcBackend::system(), || HELP.to_owned()) {
        Ok(resolution) => {
            debug!("Answering with {}.", resolution.kind());
            let status = if resolution.is_failure() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::OK
            };
            (
                status,
                Json(json!({ "kind": resolution.kind(), "output": resolution.text() })),
            )
        }
        Err(e) => {
            let status = match e {
                OtpError::Clock(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            };
            warn!("Failed to generate a one-time password: {e}");
            (status, Json(json!({ "error": e.to_string() })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otpgen_core::Mode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    async fn call(options: Options) -> (StatusCode, Value) {
        let (status, Json(body)) = otp_handler(Ok(Json(options))).await;
        (status, body)
    }

    #[tokio::test]
    async fn hmac_request_returns_the_value() {
        let options = Options::new(Mode::Hmac)
            .with_secret(RFC_SECRET)
            .with_counter(5);
        let (status, body) = call(options).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "kind": "value", "output": "254676" }));
    }

    #[tokio::test]
    async fn time_request_returns_digits() {
        let (status, body) = call(Options::new(Mode::Time).with_secret("jbswy3dp")).await;
        assert_eq!(status, StatusCode::OK);
        let output = body["output"].as_str().unwrap();
        assert_eq!(output.len(), 6);
        assert!(output.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn validation_errors_are_uncolored() {
        let (status, body) = call(Options::new(Mode::Time)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "error");
        assert_eq!(
            body["output"],
            "You must also specify a --secret. Try --help for help."
        );
    }

    #[tokio::test]
    async fn help_ignores_the_secret() {
        let (status, body) = call(Options::new(Mode::Help).with_secret("ABC1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "help");
        assert_eq!(body["output"], HELP);
    }

    #[tokio::test]
    async fn computation_failures_are_bad_requests() {
        let (status, body) = call(Options::new(Mode::None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("'none' mode"));

        let (status, _) = call(Options::new(Mode::Time).with_secret("A")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    async fn raw_post(body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move { axum::serve(listener, app()).await });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "POST /api/otp HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn malformed_json_is_a_warning() {
        let response = raw_post(r#"{"mode": "hmac", "secret": "#).await;
        assert!(response.starts_with("HTTP/1.1 422"));
        assert!(response.contains(r#""kind":"warning""#));
    }

    #[tokio::test]
    async fn server_answers_json_requests() {
        let response = raw_post(&format!(
            r#"{{"mode":"hmac","secret":"{RFC_SECRET}","counter":1}}"#
        ))
        .await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains(r#""output":"287082""#));
    }
}
