use crate::{CliClientResult, ClientError, FrameReader};

use cb_core::format_timestamp;

use chrono::Utc;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::{Value, json};

const CALLBACK_PATH: &str = "/api/callback";
const CALLBACKS_PATH: &str = "/api/callbacks";
const OUTPUTS_PATH: &str = "/api/outputs";

/// HTTP client for the cb-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let code = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::api_error(code, message));
        }

        Ok(body)
    }

    /// Callback URL handed to triggered functions when none is given
    pub fn default_callback_url(&self) -> String {
        format!("{}{}", self.base_url, CALLBACK_PATH)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Broadcast an event to open streams, or record it in the polling
    /// history when `history` is set
    pub async fn send_event(&self, event: &Value, history: bool) -> CliClientResult<Value> {
        let path = if history { CALLBACKS_PATH } else { CALLBACK_PATH };
        let req = self.request(Method::POST, path).json(event);
        self.execute(req).await
    }

    /// Persist one text payload
    pub async fn save_output(&self, output: &str) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, OUTPUTS_PATH)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(output.to_string());
        self.execute(req).await
    }

    /// Follow the live stream, calling `on_event` for every frame until the
    /// server closes it
    pub async fn watch<F>(&self, mut on_event: F) -> CliClientResult<()>
    where
        F: FnMut(Value),
    {
        let mut response = self.request(Method::GET, CALLBACK_PATH).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::api_error(
                response.status().as_u16().to_string(),
                "Failed to open stream".to_string(),
            ));
        }

        let mut reader = FrameReader::new();
        while let Some(chunk) = response.chunk().await? {
            for event in reader.push(&chunk)? {
                on_event(event);
            }
        }

        Ok(())
    }

    // =========================================================================
    // History
    // =========================================================================

    pub async fn list_history(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, CALLBACKS_PATH);
        self.execute(req).await
    }

    pub async fn clear_history(&self) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, CALLBACKS_PATH);
        self.execute(req).await
    }

    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/health");
        self.execute(req).await
    }

    // =========================================================================
    // Trigger
    // =========================================================================

    /// POST a job description to an external function URL.
    ///
    /// Returns `{status, data, timestamp}`. Any HTTP status is recorded as
    /// the function's answer; a transport failure or a non-JSON body is
    /// recorded with status `"error"`.
    pub async fn trigger(
        &self,
        function_url: &str,
        project_id: &str,
        target: &str,
        callback_url: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct TriggerRequest<'a> {
            url: &'a str,
            project_id: &'a str,
            target: &'a str,
            callback_url: String,
        }

        for (name, value) in [
            ("function URL", function_url),
            ("project id", project_id),
            ("target", target),
        ] {
            if value.trim().is_empty() {
                return Err(ClientError::validation(format!("{name} is required")));
            }
        }

        let body = TriggerRequest {
            url: function_url,
            project_id,
            target,
            callback_url: callback_url
                .map(String::from)
                .unwrap_or_else(|| self.default_callback_url()),
        };

        let outcome = async {
            let response = self.client.post(function_url).json(&body).send().await?;
            let status = response.status().as_u16();
            let data: Value = response.json().await?;
            Ok::<_, ClientError>((status, data))
        }
        .await;

        let timestamp = format_timestamp(Utc::now());
        Ok(match outcome {
            Ok((status, data)) => json!({ "status": status, "data": data, "timestamp": timestamp }),
            Err(e) => json!({
                "status": "error",
                "data": { "error": e.to_string() },
                "timestamp": timestamp,
            }),
        })
    }
}
