// ============================================================================
// ERRORES - Taxonomía de errores del cliente
// ============================================================================
// Todos los errores son terminales solo para la acción que los disparó:
// la página sigue interactiva y el usuario puede reintentar a mano.
// ============================================================================

/// Error de una llamada al backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// La petición no llegó a completarse (sin respuesta)
    #[error("Network error: {0}")]
    Network(String),

    /// El backend respondió con un status no-2xx
    #[error("HTTP {status}: {message}")]
    Application { status: u16, message: String },

    /// Respuesta 2xx con un cuerpo que no se pudo decodificar
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Mensaje para mostrar al usuario.
    /// Los errores de aplicación se muestran tal cual los manda el servidor.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Error de conexión".to_string(),
            ApiError::Application { message, .. } => message.clone(),
            ApiError::Parse(_) => "Respuesta inválida del servidor".to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Evidencia de sesión ausente o ilegible
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("No hay sesión guardada")]
    Missing,

    #[error("Perfil de usuario corrupto: {0}")]
    Corrupted(String),
}

/// Fallo del almacenamiento local del navegador
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage no disponible")]
    Unavailable,

    #[error("Error serializando datos: {0}")]
    Serialize(String),

    #[error("Error de storage: {0}")]
    Backend(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
