pub mod transport;
pub mod api_client;
pub mod session_service;

pub use api_client::ApiClient;
pub use session_service::SessionGuard;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

#[cfg(target_arch = "wasm32")]
pub use transport::GlooTransport;
