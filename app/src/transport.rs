//! ureq-backed executor for the core's HTTP requests.

use todo_client::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Executes `HttpRequest` values over real HTTP.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
/// come back as data; the core decides what a non-2xx status means.
pub struct UreqTransport {
    agent: ureq::Agent,
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
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let content_type = request
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.clone())
            .unwrap_or_default();

        let result = match (&request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type(content_type.as_str())
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type(content_type.as_str())
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
            // DELETE normally has no body, but this API identifies the
            // target through a form-encoded one.
            (HttpMethod::Delete, Some(body)) => self
                .agent
                .delete(&request.path)
                .force_send_body()
                .content_type(content_type.as_str())
                .send(body.as_bytes()),
            (HttpMethod::Delete, None) => self.agent.delete(&request.path).call(),
        };

        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
