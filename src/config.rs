use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub environment: String,
    pub enable_logging: bool,
    pub routes: RoutesConfig,
    pub loan_config: LoanConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            routes: RoutesConfig::default(),
            loan_config: LoanConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

/// Rutas de navegación del frontend (servidas por el backend de páginas)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    pub login: String,
    pub dashboard: String,
    pub catalog: String,
    pub loans: String,
    pub reservations: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            dashboard: "/dashboard".to_string(),
            catalog: "/catalogo".to_string(),
            loans: "/prestamos".to_string(),
            reservations: "/reservas".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Duración por defecto de un préstamo nuevo
    pub default_loan_days: u32,
    /// Umbral (en días) para marcar una reserva como "próxima a vencer"
    pub expiring_threshold_days: i64,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            default_loan_days: 15,
            expiring_threshold_days: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Tiempo tras el cual se auto-eliminan alertas de error/info
    pub alert_dismiss_ms: u32,
    /// Tiempo máximo de espera del POST /logout
    pub logout_timeout_ms: u32,
    /// Pausa antes de redirigir a login tras el logout
    pub logout_redirect_delay_ms: u32,
    /// Pausa para que se vea el mensaje de login exitoso
    pub login_redirect_delay_ms: u32,
    /// Refresco del reloj del dashboard
    pub clock_refresh_ms: u32,
    /// Pausa antes de redirigir en el logout rápido
    pub quick_logout_delay_ms: u32,
    /// Pausa antes de enfocar "Iniciar Sesión" tras cargar credenciales demo
    pub demo_focus_delay_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            logout_timeout_ms: 3000,
            logout_redirect_delay_ms: 500,
            login_redirect_delay_ms: 1500,
            clock_refresh_ms: 60_000,
            quick_logout_delay_ms: 100,
            demo_focus_delay_ms: 100,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: option_env!("API_BASE").unwrap_or("/api").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            routes: RoutesConfig {
                login: option_env!("LOGIN_PATH")
                    .unwrap_or("/login").to_string(),
                dashboard: option_env!("DASHBOARD_PATH")
                    .unwrap_or("/dashboard").to_string(),
                ..defaults.routes
            },
            loan_config: LoanConfig {
                default_loan_days: option_env!("DEFAULT_LOAN_DAYS")
                    .unwrap_or("15").parse().unwrap_or(15),
                ..defaults.loan_config
            },
            ui_config: UIConfig {
                alert_dismiss_ms: option_env!("ALERT_DISMISS_MS")
                    .unwrap_or("5000").parse().unwrap_or(5000),
                logout_timeout_ms: option_env!("LOGOUT_TIMEOUT_MS")
                    .unwrap_or("3000").parse().unwrap_or(3000),
                ..defaults.ui_config
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.loan_config.default_loan_days, 15);
        assert_eq!(config.ui_config.logout_timeout_ms, 3000);
        assert_eq!(config.ui_config.alert_dismiss_ms, 5000);
        assert_eq!(config.routes.login, "/login");
    }
}
