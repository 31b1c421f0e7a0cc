// ============================================================================
// AUTH VIEWMODEL - Login, check-auth y logout
// ============================================================================

use futures::future::{self, Either};
use futures::pin_mut;

use crate::config::CONFIG;
use crate::error::{ApiError, StorageError};
use crate::models::DemoAccount;
use crate::platform::Host;
use crate::services::{ApiClient, SessionGuard};
use crate::state::{LoadingGuard, Notification};
use crate::views::render_logout_overlay;

pub const EMPTY_FIELDS_MESSAGE: &str = "Por favor, complete todos los campos";
pub const LOGIN_SUCCESS_MESSAGE: &str = "¡Login exitoso! Redirigiendo...";
pub const LOGIN_NETWORK_MESSAGE: &str =
    "Error de conexión con el servidor. Verifique su conexión e intente nuevamente.";
pub const LOGIN_STORAGE_MESSAGE: &str =
    "No se pudo guardar la sesión en este navegador. Verifique que el almacenamiento local esté habilitado.";

/// Resultado de un intento de login
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    LoggedIn,
    /// Campos vacíos: ni siquiera se envía
    Invalid,
    Rejected(ApiError),
    /// El backend aceptó pero la sesión no se pudo guardar localmente
    NotStored(StorageError),
}

/// Cómo terminó el POST /logout (la limpieza local ocurre igual)
#[derive(Clone, Debug, PartialEq)]
pub enum LogoutOutcome {
    Confirmed,
    Failed(ApiError),
    TimedOut,
}

pub struct AuthViewModel {
    api: ApiClient,
    guard: SessionGuard,
    host: Host,
}

impl AuthViewModel {
    pub fn new(api: ApiClient, host: Host) -> Self {
        let guard = SessionGuard::from_host(&host);
        Self { api, guard, host }
    }

    /// En la página de login: si la cookie sigue viva, directo al dashboard.
    /// Cualquier fallo se interpreta como "no autenticado".
    pub async fn redirect_if_authenticated(&self) -> bool {
        match self.api.check_auth().await {
            Ok(status) if status.authenticated => {
                log::info!("🔓 [AUTH] Usuario ya autenticado, redirigiendo a dashboard");
                self.host.navigator.navigate(&CONFIG.routes.dashboard);
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::info!("🔒 [AUTH] Usuario no autenticado: {}", e);
                false
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            self.host.view.show_notification(&Notification::danger(EMPTY_FIELDS_MESSAGE));
            return LoginOutcome::Invalid;
        }

        let result = {
            let _loading = LoadingGuard::start(self.host.view.as_ref());
            self.api.login(username, password).await
        };

        let session = match result.and_then(|response| {
            response
                .into_session()
                .ok_or_else(|| ApiError::Parse("Respuesta de login sin token o usuario".into()))
        }) {
            Ok(session) => session,
            Err(error) => {
                log::error!("❌ [AUTH] Error de login: {}", error);
                let message = match &error {
                    ApiError::Network(_) => LOGIN_NETWORK_MESSAGE.to_string(),
                    other => format!("Error: {}", other.user_message()),
                };
                self.host.view.show_notification(&Notification::danger(message));
                self.host.view.clear_password();
                return LoginOutcome::Rejected(error);
            }
        };

        if let Err(e) = self.guard.store(&session) {
            // sin evidencia local el guard del dashboard devolvería a login
            log::error!("❌ [AUTH] No se pudo guardar la sesión: {}", e);
            self.guard.clear();
            self.host.view.show_notification(&Notification::danger(LOGIN_STORAGE_MESSAGE));
            return LoginOutcome::NotStored(e);
        }
        self.host.view.show_notification(&Notification::success(LOGIN_SUCCESS_MESSAGE));

        // que se alcance a leer el mensaje
        self.host.timer.sleep(CONFIG.ui_config.login_redirect_delay_ms).await;
        self.host.navigator.navigate(&CONFIG.routes.dashboard);
        LoginOutcome::LoggedIn
    }

    /// Rellena el formulario con una cuenta de prueba y deja el foco en "Iniciar Sesión"
    pub async fn fill_demo_credentials(&self, username: &str, password: &str) {
        log::info!("🧪 [AUTH] Credenciales demo: {}", username);
        self.host.view.fill_credentials(username, password);
        self.host.view.show_notification(&Notification::info(format!(
            "Credenciales de {} cargadas. Puede iniciar sesión.",
            username
        )));
        self.host.timer.sleep(CONFIG.ui_config.demo_focus_delay_ms).await;
        self.host.view.focus_submit();
    }

    pub async fn fill_demo_account(&self, account: DemoAccount) {
        let (username, password) = account.credentials();
        self.fill_demo_credentials(username, password).await;
    }

    /// Limpia la evidencia local primero; el POST /logout compite contra un timeout
    /// y, pase lo que pase, se termina en /login.
    pub async fn logout(&self) -> LogoutOutcome {
        log::info!("🚪 [AUTH] Cerrando sesión...");
        self.host.view.set_loading(true);
        self.host.view.show_overlay(&render_logout_overlay());
        self.host.view.show_notification(&Notification::info("Cerrando sesión..."));
        self.guard.clear();

        let request = self.api.logout();
        let timeout = self.host.timer.sleep(CONFIG.ui_config.logout_timeout_ms);
        pin_mut!(request, timeout);

        let outcome = match future::select(request, timeout).await {
            Either::Left((Ok(_), _)) => {
                log::info!("✅ [AUTH] Logout confirmado por el servidor");
                LogoutOutcome::Confirmed
            }
            Either::Left((Err(e), _)) => {
                log::warn!("⚠️ [AUTH] Logout con error: {}", e);
                LogoutOutcome::Failed(e)
            }
            Either::Right(_) => {
                log::warn!("⏱️ [AUTH] Logout sin respuesta tras {} ms", CONFIG.ui_config.logout_timeout_ms);
                LogoutOutcome::TimedOut
            }
        };

        self.host.timer.sleep(CONFIG.ui_config.logout_redirect_delay_ms).await;
        self.host.navigator.navigate(&CONFIG.routes.login);
        outcome
    }

    /// Logout sin esperar al servidor: limpia, dispara el POST y redirige en 100 ms.
    /// Si el POST responde antes, igual se espera la pausa completa.
    pub async fn quick_logout(&self) {
        log::info!("⚡ [AUTH] Logout rápido");
        self.guard.clear();

        let request = self.api.logout();
        let delay = self.host.timer.sleep(CONFIG.ui_config.quick_logout_delay_ms);
        pin_mut!(request, delay);

        if let Either::Left((result, delay)) = future::select(request, delay).await {
            if let Err(e) = result {
                log::debug!("🔇 [AUTH] Error ignorado en logout rápido: {}", e);
            }
            delay.await;
        }
        self.host.navigator.navigate(&CONFIG.routes.login);
    }
}
