//! HTTP server for the detection API
//!
//! `voxlot serve --port 8000` → starts the service
//!
//! Routes:
//! - `POST /api/detect`  - classify a base64 audio payload (X-API-Key required)
//! - `GET  /health`      - liveness probe (alias `/healthz`)
//! - `GET  /`            - service identity
//! - `GET  /info`        - supported languages and schema shapes
//!
//! Single-threaded accept loop; the pipeline is pure and fast enough
//! that one worker is plenty for this service's purpose.

use std::io::{self, Cursor};

use serde_json::json;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::decode;
use crate::error::DetectError;
use crate::handler::{DetectRequest, DetectService};
use crate::language;

/// Start the server and run the request loop until the process exits.
pub fn start(port: u16, service: DetectService) -> io::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    log::info!(
        "voxlot listening on http://{} ({} API key(s) configured, team: {})",
        addr,
        service.key_count(),
        service.team()
    );

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &service) {
            log::error!("request I/O error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(mut request: Request, service: &DetectService) -> io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/").to_string();
    let method = request.method().clone();

    // Permissive CORS, matching the original service
    if method == Method::Options {
        log::debug!("{} {} -> 204", method, path);
        return request.respond(preflight_response());
    }

    let (status, body) = match (&method, path.as_str()) {
        (&Method::Get, "/") => (200, identity_payload(service.team())),

        (&Method::Get, "/health") | (&Method::Get, "/healthz") => {
            (200, health_payload(service.team()))
        }

        (&Method::Get, "/info") => (200, info_payload()),

        (&Method::Post, "/api/detect") => detect(&mut request, service),

        _ => (404, error_body("not found")),
    };

    log::info!("{} {} -> {}", method, path, status);
    request.respond(json_response(status, &body))
}

/// Run one detect request: credential header, JSON body, pipeline.
fn detect(request: &mut Request, service: &DetectService) -> (u16, serde_json::Value) {
    let api_key = api_key(request);

    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        return (400, error_body(&format!("unreadable body: {}", e)));
    }

    let detect_request: DetectRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(e) => {
            let err = DetectError::from(e);
            return (err.status_code(), error_body(&err.to_string()));
        }
    };

    match service.detect(api_key.as_deref(), &detect_request) {
        Ok(response) => {
            log::debug!(
                "verdict {} ({:.3}) in {}",
                response.classification,
                response.confidence,
                response.language_detected
            );
            match serde_json::to_value(&response) {
                Ok(value) => (200, value),
                Err(e) => (500, error_body(&format!("serialization failed: {}", e))),
            }
        }
        Err(e) => {
            let status = e.status_code();
            if status == 401 {
                log::warn!("rejected API key");
            } else {
                log::debug!("client error: {}", e);
            }
            (status, error_body(&e.to_string()))
        }
    }
}

/// Extract the `X-API-Key` header value, if present.
fn api_key(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("X-API-Key"))
        .map(|h| h.value.as_str().to_string())
}

fn error_body(message: &str) -> serde_json::Value {
    json!({ "error": message })
}

fn identity_payload(team: &str) -> serde_json::Value {
    json!({
        "service": "voxlot",
        "team": team,
        "endpoint": "/api/detect",
    })
}

fn health_payload(team: &str) -> serde_json::Value {
    json!({
        "status": "healthy",
        "team": team,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

fn info_payload() -> serde_json::Value {
    let languages: serde_json::Map<String, serde_json::Value> = language::SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| (code.to_string(), json!(name)))
        .collect();

    json!({
        "languages": languages,
        "request": {
            "audio_base64": format!(
                "string (base64; first {} characters are decoded)",
                decode::MAX_BASE64_CHARS
            ),
            "language_hint": "string (optional, e.g. \"ta\")",
        },
        "response": {
            "classification": "\"AI\" | \"Human\"",
            "confidence": "number in [0.60, 0.99]",
            "explanation": "string",
            "language_detected": "string",
            "model_metadata": { "version": "string", "team": "string", "method": "string" },
        },
    })
}

fn json_response(status: u16, body: &serde_json::Value) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(body.to_string())
        .with_status_code(status)
        .with_header(
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
        .with_header(cors_header())
}

fn preflight_response() -> Response<Cursor<Vec<u8>>> {
    Response::from_string("")
        .with_status_code(204)
        .with_header(cors_header())
        .with_header(
            Header::from_bytes(&b"Access-Control-Allow-Methods"[..], &b"GET, POST, OPTIONS"[..])
                .unwrap(),
        )
        .with_header(
            Header::from_bytes(
                &b"Access-Control-Allow-Headers"[..],
                &b"Content-Type, X-API-Key"[..],
            )
            .unwrap(),
        )
}

fn cors_header() -> Header {
    Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]).unwrap()
}
