// ============================================================================
// SESSION GUARD - Evidencia local de sesión
// ============================================================================
// Lee token + perfil de localStorage. Solo el login escribe y solo el
// logout borra; nadie más toca estas claves.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::{SessionError, StorageError};
use crate::models::{Session, User};
use crate::platform::{Cookies, Host, Navigator};
use crate::utils::{
    load_from_storage, save_to_storage, KeyValueStorage, SESSION_COOKIES, TOKEN_STORAGE_KEY,
    USER_STORAGE_KEY,
};

#[derive(Clone)]
pub struct SessionGuard {
    storage: Rc<dyn KeyValueStorage>,
    cookies: Rc<dyn Cookies>,
    navigator: Rc<dyn Navigator>,
    login_path: String,
}

impl SessionGuard {
    pub fn new(storage: Rc<dyn KeyValueStorage>, cookies: Rc<dyn Cookies>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            storage,
            cookies,
            navigator,
            login_path: CONFIG.routes.login.clone(),
        }
    }

    pub fn from_host(host: &Host) -> Self {
        Self::new(host.storage.clone(), host.cookies.clone(), host.navigator.clone())
    }

    /// Lee la sesión sin efectos secundarios
    pub fn read_session(&self) -> Result<Session, SessionError> {
        let token = self
            .storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::Missing)?;

        match load_from_storage::<User>(self.storage.as_ref(), USER_STORAGE_KEY) {
            Ok(Some(user)) => Ok(Session { token, user }),
            Ok(None) => Err(SessionError::Missing),
            Err(StorageError::Serialize(e)) => Err(SessionError::Corrupted(e)),
            Err(_) => Err(SessionError::Missing),
        }
    }

    /// Devuelve la sesión o redirige a login.
    /// `Err` es terminal: el resto de la lógica de la página NO debe ejecutarse.
    pub fn ensure_authenticated(&self) -> Result<Session, SessionError> {
        match self.read_session() {
            Ok(session) => {
                log::info!("✅ [AUTH] Sesión válida para {}", session.user.full_name);
                Ok(session)
            }
            Err(err) => {
                if let SessionError::Corrupted(detail) = &err {
                    // perfil ilegible: se trata como no autenticado y se limpia
                    log::warn!("⚠️ [AUTH] Perfil guardado corrupto ({}), limpiando sesión", detail);
                    self.clear();
                } else {
                    log::info!("🔒 [AUTH] Sin sesión, redirigiendo a {}", self.login_path);
                }
                self.navigator.navigate(&self.login_path);
                Err(err)
            }
        }
    }

    /// Guardar sesión tras un login exitoso
    pub fn store(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(TOKEN_STORAGE_KEY, &session.token)?;
        save_to_storage(self.storage.as_ref(), USER_STORAGE_KEY, &session.user)?;
        log::info!("💾 [AUTH] Sesión guardada para {}", session.user.full_name);
        Ok(())
    }

    /// Borra TODA la evidencia local: storage completo y cookies de sesión.
    /// Si la cookie sobrevive, check-auth manda de login a dashboard y el guard de vuelta.
    pub fn clear(&self) {
        if let Err(e) = self.storage.clear_all() {
            log::error!("❌ [AUTH] Error limpiando storage: {}", e);
            // al menos las claves de sesión
            let _ = self.storage.remove_item(TOKEN_STORAGE_KEY);
            let _ = self.storage.remove_item(USER_STORAGE_KEY);
        }
        for name in SESSION_COOKIES {
            self.cookies.expire(name);
        }
        log::info!("🧹 [AUTH] Evidencia de sesión eliminada");
    }
}
