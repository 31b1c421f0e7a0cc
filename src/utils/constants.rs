/// Clave de localStorage con el token de sesión
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Clave de localStorage con el perfil del usuario (JSON)
pub const USER_STORAGE_KEY: &str = "user";

/// Cookies de sesión que el backend deja legibles desde JS
pub const SESSION_COOKIES: [&str; 2] = ["token", "user_id"];

/// Atributo con la acción de un botón dentro de una lista renderizada
pub const ACTION_ATTRIBUTE: &str = "data-action";

/// Atributo con el id de la entidad sobre la que actúa el botón
pub const ID_ATTRIBUTE: &str = "data-id";
