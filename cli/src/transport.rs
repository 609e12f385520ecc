//! Blocking HTTP execution with ureq.

use todoview_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Runs each `HttpRequest` on a shared ureq agent.
///
/// Status-code-as-error is switched off so 4xx/5xx come back as data and
/// `TodoClient` decides what they mean. Only failures that produced no
/// response at all become `ApiError::Transport`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = &self.agent;
        let headers = &req.headers;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => with_headers(agent.get(&req.path), headers).call(),
            (HttpMethod::Delete, _) => with_headers(agent.delete(&req.path), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(agent.post(&req.path), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(agent.post(&req.path), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(agent.put(&req.path), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(agent.put(&req.path), headers).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Copy the headers `TodoClient` built onto the outgoing request.
fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
