use async_trait::async_trait;
use serde_json::Value;
use taskwise_core::api as core_api;
use taskwise_core::api::{CompletionError, TransportErrorKind};

const BODY_PREVIEW_LIMIT: usize = 512;

fn transport_error(err: reqwest::Error) -> CompletionError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_request() {
        TransportErrorKind::Request
    } else if err.is_body() || err.is_decode() {
        TransportErrorKind::Body
    } else {
        TransportErrorKind::Unknown
    };
    CompletionError::UpstreamTransport {
        kind,
        message: err.to_string(),
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out: String = trimmed.chars().take(BODY_PREVIEW_LIMIT).collect();
    if trimmed.chars().nth(BODY_PREVIEW_LIMIT).is_some() {
        out.push_str("...");
    }
    out
}

/// Client for OpenAI-style `POST {base}/chat/completions` endpoints
/// (OpenRouter by default).
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    http: reqwest::Client,
    url_chat: String,
}

impl HttpCompletionClient {
    pub fn new(base_url: String, api_key: String, timeout_ms: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }
        let http = builder.build()?;
        let normalized = base_url.trim_end_matches('/');
        Ok(Self {
            api_key,
            http,
            url_chat: format!("{}/chat/completions", normalized),
        })
    }

    pub fn from_config(cfg: &core_api::CompletionConfig) -> anyhow::Result<Self> {
        Self::new(cfg.base_url.clone(), cfg.api_key.clone(), cfg.timeout_ms)
    }

    pub fn endpoint(&self) -> &str {
        &self.url_chat
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.trim().is_empty() {
            req
        } else {
            req.bearer_auth(&self.api_key)
        }
    }
}

#[async_trait]
impl core_api::CompletionPlugin for HttpCompletionClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn complete(
        &self,
        request: core_api::CompletionRequest,
    ) -> Result<Value, CompletionError> {
        let url = &self.url_chat;
        tracing::debug!(
            target: "taskwise.completion",
            stage = "completion.http.in",
            url = %url,
            model = %request.model,
            messages = request.messages.len()
        );

        let req = self.http.post(url).json(&request);
        let resp = self.auth(req).send().await.map_err(transport_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::warn!(
                target: "taskwise.completion",
                stage = "completion.http.status",
                status = %status,
                body = %preview_body(&body)
            );
            return Err(CompletionError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            target: "taskwise.completion",
            stage = "completion.http.out",
            status = %status,
            bytes = body.len()
        );

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str::<Value>(&body)
            .map_err(|err| CompletionError::Decode(format!("{} | body={}", err, preview_body(&body))))
    }
}
