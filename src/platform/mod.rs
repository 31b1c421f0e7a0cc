// ============================================================================
// PLATFORM - Puertos hacia el navegador
// ============================================================================
// El núcleo (guard, stores, viewmodels, páginas) solo habla con estos
// traits. `browser` los implementa con web-sys/gloo en wasm32.
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::dom::Markup;
use crate::state::Notification;
use crate::utils::KeyValueStorage;

#[cfg(target_arch = "wasm32")]
pub mod browser;

/// Navegación a otra página (fuera de la app actual)
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Cookies legibles desde JS (`httponly=False` en el backend)
pub trait Cookies {
    /// Expira la cookie en `path=/`
    fn expire(&self, name: &str);
}

/// Diálogos bloqueantes del navegador
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
}

#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// Hora local de pared (el backend también usa fechas sin zona)
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Huecos con nombre que cada página expone para mostrar datos
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Contenedor principal de la página (grid, lista o stats)
    Content,
    UserName,
    UserRole,
    DropdownUserName,
    DropdownUserRole,
    Welcome,
    CurrentTime,
}

/// Superficie de la página que pintan los controladores
pub trait PageView {
    fn set_html(&self, slot: Slot, markup: &Markup);

    fn set_text(&self, slot: Slot, text: &str);

    fn set_loading(&self, loading: bool);

    /// Muestra una notificación reemplazando la que hubiera
    fn show_notification(&self, notification: &Notification);

    /// Limpia y enfoca el campo de contraseña (solo login)
    fn clear_password(&self) {}

    /// Rellena usuario y contraseña (solo login)
    fn fill_credentials(&self, _username: &str, _password: &str) {}

    /// Enfoca el botón de envío (solo login)
    fn focus_submit(&self) {}

    /// Capa a pantalla completa encima de la página
    fn show_overlay(&self, _markup: &Markup) {}
}

/// Todo lo que una página necesita del entorno
#[derive(Clone)]
pub struct Host {
    pub storage: Rc<dyn KeyValueStorage>,
    pub cookies: Rc<dyn Cookies>,
    pub navigator: Rc<dyn Navigator>,
    pub dialogs: Rc<dyn Dialogs>,
    pub timer: Rc<dyn Timer>,
    pub clock: Rc<dyn Clock>,
    pub view: Rc<dyn PageView>,
}
