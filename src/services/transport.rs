// ============================================================================
// TRANSPORT - Envío HTTP crudo (sin lógica)
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
    /// Enviar cookies (`credentials: 'include'`)
    pub with_credentials: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fallo de red: no se recibió respuesta
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub use gloo::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod gloo {
    use super::*;
    use gloo_net::http::{Method, RequestBuilder};
    use web_sys::RequestCredentials;

    /// Transporte real sobre `fetch` (gloo-net)
    #[derive(Clone, Default)]
    pub struct GlooTransport;

    #[async_trait(?Send)]
    impl HttpTransport for GlooTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let method = match request.method {
                HttpMethod::Get => Method::GET,
                HttpMethod::Post => Method::POST,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            if request.with_credentials {
                builder = builder.credentials(RequestCredentials::Include);
            }

            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(format!("Request build error: {}", e)))?;

            let response = prepared
                .send()
                .await
                .map_err(|e| TransportError(format!("Network error: {}", e)))?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
    }
}
