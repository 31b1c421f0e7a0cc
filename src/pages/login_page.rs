// ============================================================================
// LOGIN PAGE
// ============================================================================

use crate::models::DemoAccount;
use crate::platform::Host;
use crate::services::ApiClient;
use crate::viewmodels::{AuthViewModel, LoginOutcome, LogoutOutcome};

pub struct LoginPage {
    auth: AuthViewModel,
}

impl LoginPage {
    pub fn new(host: Host, api: ApiClient) -> Self {
        Self { auth: AuthViewModel::new(api, host) }
    }

    /// Si la cookie del servidor sigue válida no hace falta el formulario
    pub async fn init(&self) -> bool {
        log::info!("🔐 [LOGIN] Verificando estado de autenticación");
        self.auth.redirect_if_authenticated().await
    }

    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        self.auth.login(username, password).await
    }

    pub async fn fill_demo_credentials(&self, username: &str, password: &str) {
        self.auth.fill_demo_credentials(username, password).await
    }

    pub async fn fill_demo_account(&self, account: DemoAccount) {
        self.auth.fill_demo_account(account).await
    }

    /// Las plantillas también exponen logout desde login (cookie vieja)
    pub async fn logout(&self) -> LogoutOutcome {
        self.auth.logout().await
    }

    pub async fn quick_logout(&self) {
        self.auth.quick_logout().await
    }
}
