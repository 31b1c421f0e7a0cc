// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: arma la petición, normaliza éxito/error
// y decodifica. Nunca reintenta ni pone timeouts.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Book, CheckAuthResponse, Collection, Loan, LoginRequest, LoginResponse, NewLoan, NewReservation,
    Reservation,
};
use crate::services::transport::{HttpMethod, HttpRequest, HttpTransport};

/// Dónde buscar el mensaje legible en un cuerpo de error
struct ErrorShape {
    keys: &'static [&'static str],
    fallback: Option<&'static str>,
}

const API_ERRORS: ErrorShape = ErrorShape { keys: &["detail", "error"], fallback: None };

const LOGIN_ERRORS: ErrorShape = ErrorShape {
    keys: &["message", "error"],
    fallback: Some("Credenciales inválidas"),
};

/// Extrae el primer mensaje presente entre `keys`.
/// Valores que no son string (p.ej. el `detail` de validación) se devuelven como JSON.
pub fn error_message(body: &str, keys: &[&str]) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    keys.iter().find_map(|key| match value.get(*key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.is_empty() => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    })
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>) -> Self {
        Self::with_base_url(&CONFIG.api_base, transport)
    }

    pub fn with_base_url(base_url: &str, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Petición genérica contra el API
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<T> {
        self.send(method, path, body, false, &API_ERRORS).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        with_credentials: bool,
        shape: &ErrorShape,
    ) -> ApiResult<T> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            body,
            with_credentials,
        };
        log::debug!("🌐 [API] {:?} {}", request.method, request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let message = error_message(&response.body, shape.keys)
                .or_else(|| shape.fallback.map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            log::warn!("⚠️ [API] {} → HTTP {}: {}", path, response.status, message);
            return Err(ApiError::Application { status: response.status, message });
        }

        let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn to_body<B: Serialize>(body: &B) -> ApiResult<Value> {
        serde_json::to_value(body).map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))
    }

    // --- Colecciones ---

    /// GET completo de una colección.
    /// Un registro ilegible se descarta con un warning; el resto se muestra igual.
    pub async fn get_collection<E: Collection>(&self) -> ApiResult<Vec<E>> {
        let raw: Vec<Value> = self.request(HttpMethod::Get, E::PATH, None).await?;
        let total = raw.len();
        let items: Vec<E> = raw
            .into_iter()
            .filter_map(|value| {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                serde_json::from_value(value)
                    .map_err(|e| log::warn!("⚠️ [API] {} id={} descartado: {}", E::NAME, id, e))
                    .ok()
            })
            .collect();
        if items.len() < total {
            log::warn!("⚠️ [API] {} de {} {} no se pudieron leer", total - items.len(), total, E::NAME);
        }
        Ok(items)
    }

    pub async fn get_books(&self) -> ApiResult<Vec<Book>> {
        self.get_collection().await
    }

    pub async fn get_loans(&self) -> ApiResult<Vec<Loan>> {
        self.get_collection().await
    }

    pub async fn get_reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.get_collection().await
    }

    // --- Mutaciones ---

    pub async fn create_reservation(&self, usuario_id: i64, libro_id: i64) -> ApiResult<Reservation> {
        let body = Self::to_body(&NewReservation { usuario_id, libro_id })?;
        log::info!("📚 [API] Reservando libro {} para usuario {}", libro_id, usuario_id);
        self.request(HttpMethod::Post, "/reservations", Some(body)).await
    }

    pub async fn create_loan(&self, usuario_id: i64, libro_id: i64, dias_prestamo: u32) -> ApiResult<Loan> {
        let body = Self::to_body(&NewLoan { usuario_id, libro_id, dias_prestamo })?;
        log::info!("📚 [API] Préstamo de libro {} ({} días) para usuario {}", libro_id, dias_prestamo, usuario_id);
        self.request(HttpMethod::Post, "/loans", Some(body)).await
    }

    /// El backend responde con el préstamo actualizado o con `{message, multa}`
    pub async fn return_loan(&self, loan_id: i64) -> ApiResult<Value> {
        self.request(HttpMethod::Post, &format!("/loans/{}/return", loan_id), None).await
    }

    pub async fn cancel_reservation(&self, reservation_id: i64) -> ApiResult<Value> {
        self.request(HttpMethod::Post, &format!("/reservations/{}/cancel", reservation_id), None).await
    }

    // --- Autenticación (con cookies) ---

    pub async fn check_auth(&self) -> ApiResult<CheckAuthResponse> {
        self.send(HttpMethod::Get, "/check-auth", None, true, &API_ERRORS).await
    }

    /// Login. Un 2xx con `success: false` también es un error de aplicación.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = Self::to_body(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        log::info!("🔐 [API] Login para usuario: {}", username);

        let response: LoginResponse = self
            .send(HttpMethod::Post, "/login", Some(body), true, &LOGIN_ERRORS)
            .await?;
        if response.success {
            Ok(response)
        } else {
            let message = response
                .message
                .or(response.error)
                .unwrap_or_else(|| "Credenciales inválidas".to_string());
            Err(ApiError::Application { status: 200, message })
        }
    }

    pub async fn logout(&self) -> ApiResult<Value> {
        self.send(HttpMethod::Post, "/logout", None, true, &API_ERRORS).await
    }
}
