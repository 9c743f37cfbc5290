//! Single-shot JSON-RPC prober
//!
//! A probe is exactly one HTTP round trip. Failures never surface as `Err`:
//! they are folded into the [`ProbeOutcome`] together with the latency, so
//! one bad endpoint cannot abort the evaluation of a pool.

use crate::error::{Result, RpcError};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::future::Future;
use std::time::{Duration, Instant};

/// Default per-probe timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(6);

/// User agent sent with every probe
pub const USER_AGENT: &str = concat!("rollup-rotator/", env!("CARGO_PKG_VERSION"));

/// Why a probe did not produce a usable result
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeError {
    /// Connect, DNS or body read failure
    #[error("transport: {message}")]
    Transport { message: String },

    /// No response within the probe timeout
    #[error("timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// Non-2xx HTTP status
    #[error("HTTP status {status}")]
    Http { status: u16 },

    /// Endpoint answered with a JSON-RPC `error` object
    #[error("rpc error {}: {message}", display_code(.code))]
    Protocol { code: Option<i64>, message: String },

    /// Body was not a JSON-RPC response
    #[error("malformed response: {message}")]
    Malformed { message: String },
}

fn display_code(code: &Option<i64>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string())
}

/// Result of one probe
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// The JSON-RPC `result` payload, or why there is none
    pub result: std::result::Result<Value, ProbeError>,
    /// Wall clock from request start to body read or failure
    pub latency_ms: f64,
}

impl ProbeOutcome {
    pub fn success(result: Value, latency_ms: f64) -> Self {
        Self {
            result: Ok(result),
            latency_ms,
        }
    }

    pub fn failure(error: ProbeError, latency_ms: f64) -> Self {
        Self {
            result: Err(error),
            latency_ms,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Something that can send one JSON-RPC request to a URL
pub trait Prober {
    fn probe(
        &self,
        url: &str,
        method: &str,
        params: Value,
    ) -> impl Future<Output = ProbeOutcome> + Send;
}

/// Build the fixed JSON-RPC 2.0 envelope
pub fn request_body(method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    })
}

/// Interpret a raw response body
pub fn parse_response(body: &[u8]) -> std::result::Result<Value, ProbeError> {
    if body.is_empty() {
        // Empty body: nothing failed, but there is no result either
        return Ok(Value::Null);
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| ProbeError::Malformed {
        message: e.to_string(),
    })?;

    let Value::Object(mut obj) = value else {
        return Err(ProbeError::Malformed {
            message: "response is not a JSON object".to_string(),
        });
    };

    // Any `error` member fails the probe, even `null`
    match obj.remove("error") {
        None => Ok(obj.remove("result").unwrap_or(Value::Null)),
        Some(err) => Err(protocol_error(err)),
    }
}

fn protocol_error(err: Value) -> ProbeError {
    let code = err.get("code").and_then(Value::as_i64);
    let message = match err.get("message").and_then(Value::as_str) {
        Some(m) => m.to_string(),
        None => err.to_string(),
    };
    ProbeError::Protocol { code, message }
}

/// reqwest-backed prober
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProber {
    /// Create a prober with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(RpcError::Client)?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn round_trip(&self, url: &str, body: &Value) -> std::result::Result<Value, ProbeError> {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Http {
                status: status.as_u16(),
            });
        }

        let raw = response.bytes().await.map_err(|e| self.transport_error(e))?;
        parse_response(&raw)
    }

    fn transport_error(&self, e: reqwest::Error) -> ProbeError {
        if e.is_timeout() {
            ProbeError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }
        } else {
            ProbeError::Transport {
                message: e.to_string(),
            }
        }
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str, method: &str, params: Value) -> ProbeOutcome {
        let body = request_body(method, params);

        let start = Instant::now();
        let result = self.round_trip(url, &body).await;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        match &result {
            Ok(_) => tracing::debug!("{} {} ok in {:.1}ms", url, method, latency_ms),
            Err(e) => tracing::debug!("{} {} failed in {:.1}ms: {}", url, method, latency_ms, e),
        }

        ProbeOutcome { result, latency_ms }
    }
}
