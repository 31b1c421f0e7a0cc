use serde::{Deserialize, Serialize};

/// Perfil del usuario autenticado (guardado como JSON en localStorage)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Primer nombre, para el saludo del dashboard
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or(&self.full_name)
    }
}

/// Evidencia local de un login previo
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// Sesión lista para guardar, si la respuesta trae token y usuario
    pub fn into_session(self) -> Option<Session> {
        match (self.token, self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Session { token, user }),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub authenticated: bool,
}

/// Cuentas de demostración sembradas en el backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoAccount {
    Admin,
    Profesor,
    Estudiante,
}

impl DemoAccount {
    /// (usuario, contraseña)
    pub fn credentials(&self) -> (&'static str, &'static str) {
        match self {
            DemoAccount::Admin => ("admin", "admin123"),
            DemoAccount::Profesor => ("profesor1", "prof123"),
            DemoAccount::Estudiante => ("estudiante1", "est123"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_carries_session() {
        let raw = r#"{
            "success": true,
            "message": "Login exitoso",
            "token": "abc",
            "user": {"id": 3, "username": "estudiante1", "email": "e@u.edu",
                     "role": "estudiante", "full_name": "Estudiante Ejemplo"}
        }"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.id, 3);
        assert_eq!(session.user.first_name(), "Estudiante");
    }

    #[test]
    fn login_response_without_token_has_no_session() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": true, "token": "", "user": null}"#).unwrap();
        assert!(response.into_session().is_none());
    }
}
