// ============================================================================
// BIBLIOTECA WEB - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones puras datos → Markup
// - ViewModels: lógica de UI (mutaciones, login/logout)
// - Pages: un controlador por página del sitio
// - Services: SOLO comunicación API + evidencia de sesión
// - State: State Management con Rc<RefCell>
// - Platform: puertos hacia el navegador (web-sys/gloo en wasm32)
// ============================================================================

pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod pages;
pub mod platform;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Biblioteca Web - Rust Puro + MVVM ({})", config::CONFIG.environment);

    let path = dom::current_path();
    match pages::PageKind::from_path(&path) {
        Some(kind) => app::start(kind),
        None => {
            log::warn!("⚠️ [APP] Ruta sin página asociada: {}", path);
            Ok(())
        }
    }
}

/// Logout llamable desde JavaScript (`onclick` en las plantillas)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn handle_logout() {
    app::logout();
}

/// Logout inmediato: limpia, dispara POST /logout y redirige sin esperar
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn quick_logout() {
    app::quick_logout();
}

/// Rellena el login con credenciales de prueba (por defecto, admin)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn fill_demo_credentials(username: Option<String>, password: Option<String>) {
    let credentials = match (username, password) {
        (None, None) => app::DemoCredentials::Account(models::DemoAccount::Admin),
        (username, password) => app::DemoCredentials::Custom {
            username: username.unwrap_or_else(|| "admin".to_string()),
            password: password.unwrap_or_else(|| "admin123".to_string()),
        },
    };
    app::fill_demo(credentials);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn fill_admin_credentials() {
    app::fill_demo(app::DemoCredentials::Account(models::DemoAccount::Admin));
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn fill_profesor_credentials() {
    app::fill_demo(app::DemoCredentials::Account(models::DemoAccount::Profesor));
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn fill_estudiante_credentials() {
    app::fill_demo(app::DemoCredentials::Account(models::DemoAccount::Estudiante));
}
