// ============================================================================
// BROWSER PLATFORM - Implementaciones web-sys / gloo de los puertos
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use gloo_storage::{LocalStorage, SessionStorage, Storage as _};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{
    add_class, document, focus, get_element_by_id, get_input_by_id, query_selector, remove_class, window,
    Markup,
};
use crate::error::StorageError;
use crate::platform::{Cookies, Dialogs, Navigator, PageView, Slot, Timer};
use crate::state::{Notification, NotificationState};
use crate::utils::KeyValueStorage;
use crate::views::shared::render_notification;
use crate::views::{submit_button_label, FieldValidity};

// ============================================================================
// STORAGE
// ============================================================================

/// localStorage crudo (el token se guarda sin JSON)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local()?
            .get_item(key)
            .map_err(|_| StorageError::Backend(format!("Error leyendo {}", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local()?
            .set_item(key, value)
            .map_err(|_| StorageError::Backend("Error guardando en localStorage".into()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.local()?
            .remove_item(key)
            .map_err(|_| StorageError::Backend("Error eliminando de localStorage".into()))
    }

    /// localStorage y sessionStorage completos
    fn clear_all(&self) -> Result<(), StorageError> {
        self.local()?;
        LocalStorage::clear();
        SessionStorage::clear();
        Ok(())
    }
}

// ============================================================================
// COOKIES
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl Cookies for BrowserCookies {
    fn expire(&self, name: &str) {
        let Some(html) = document().and_then(|doc| doc.dyn_into::<HtmlDocument>().ok()) else {
            log::warn!("⚠️ [AUTH] Sin documento HTML, no se puede expirar la cookie {}", name);
            return;
        };
        if let Err(e) = html.set_cookie(&format!("{}=; Max-Age=0; path=/", name)) {
            log::error!("❌ [AUTH] No se pudo expirar la cookie {}: {:?}", name, e);
        }
    }
}

// ============================================================================
// NAVEGACIÓN, DIÁLOGOS, TIMERS
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        log::info!("➡️ [NAV] {}", path);
        if let Some(win) = window() {
            if let Err(e) = win.location().set_href(path) {
                log::error!("❌ [NAV] No se pudo navegar a {}: {:?}", path, e);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

// ============================================================================
// VIEW - Elementos de la página resueltos una sola vez
// ============================================================================

/// Dónde insertar las alertas
enum AlertAnchor {
    /// Al principio del contenedor principal
    Prepend(Element),
    /// Justo después del formulario de login
    After(Element),
}

/// Marca `is-valid` / `is-invalid` según el valor actual del input
pub fn apply_validity(input: &HtmlInputElement) {
    let validity = FieldValidity::of(&input.value());
    let _ = add_class(input, validity.class());
    let _ = remove_class(input, validity.opposite_class());
}

pub struct BrowserView {
    slots: HashMap<Slot, Element>,
    loading: Option<Element>,
    username: Option<HtmlInputElement>,
    password: Option<HtmlInputElement>,
    submit: Option<Element>,
    anchor: Option<AlertAnchor>,
    notifications: NotificationState,
    visible_alert: RefCell<Option<Element>>,
}

impl BrowserView {
    /// Resuelve los elementos conocidos; los que falten simplemente no se pintan
    pub fn bind(content_id: Option<&str>) -> Self {
        let mut slots = HashMap::new();
        let ids = [
            (Slot::UserName, "user-name"),
            (Slot::UserRole, "user-role"),
            (Slot::DropdownUserName, "dropdown-user-name"),
            (Slot::DropdownUserRole, "dropdown-user-role"),
            (Slot::Welcome, "user-welcome"),
            (Slot::CurrentTime, "current-time"),
        ];
        for (slot, id) in ids.into_iter().chain(content_id.map(|id| (Slot::Content, id))) {
            if let Some(element) = get_element_by_id(id) {
                slots.insert(slot, element);
            }
        }

        let anchor = match get_element_by_id("login-form") {
            Some(form) => Some(AlertAnchor::After(form)),
            None => query_selector(".container-fluid").ok().flatten().map(AlertAnchor::Prepend),
        };

        Self {
            slots,
            loading: get_element_by_id("loading"),
            username: get_input_by_id("username"),
            password: get_input_by_id("password"),
            submit: query_selector("#login-form button[type=\"submit\"]").ok().flatten(),
            anchor,
            notifications: NotificationState::new(),
            visible_alert: RefCell::new(None),
        }
    }

    fn remove_visible_alert(&self) {
        if let Some(alert) = self.visible_alert.borrow_mut().take() {
            alert.remove();
        }
    }
}

impl PageView for BrowserView {
    fn set_html(&self, slot: Slot, markup: &Markup) {
        if let Some(element) = self.slots.get(&slot) {
            element.set_inner_html(markup.as_str());
        }
    }

    fn set_text(&self, slot: Slot, text: &str) {
        if let Some(element) = self.slots.get(&slot) {
            element.set_text_content(Some(text));
        }
    }

    fn set_loading(&self, loading: bool) {
        if let Some(element) = &self.loading {
            let _ = if loading {
                remove_class(element, "hidden")
            } else {
                add_class(element, "hidden")
            };
        }
        // solo existe en login
        if let Some(button) = &self.submit {
            let _ = if loading {
                button.set_attribute("disabled", "")
            } else {
                button.remove_attribute("disabled")
            };
            button.set_inner_html(submit_button_label(loading).as_str());
        }
    }

    fn show_notification(&self, notification: &Notification) {
        self.remove_visible_alert();
        let id = self.notifications.show(notification.clone());

        let (target, position) = match &self.anchor {
            Some(AlertAnchor::Prepend(container)) => (container, "afterbegin"),
            Some(AlertAnchor::After(form)) => (form, "afterend"),
            None => {
                log::warn!("⚠️ [UI] Sin contenedor para alertas: {}", notification.message);
                return;
            }
        };
        let markup = render_notification(notification);
        if target.insert_adjacent_html(position, markup.as_str()).is_err() {
            return;
        }
        let alert = match position {
            "afterbegin" => target.first_element_child(),
            _ => target.next_element_sibling(),
        };
        if let Some(alert) = &alert {
            if position == "afterend" {
                let _ = add_class(alert, "mt-3");
            }
        }
        *self.visible_alert.borrow_mut() = alert.clone();

        if let (Some(ms), Some(alert)) = (notification.auto_dismiss_ms(CONFIG.ui_config.alert_dismiss_ms), alert) {
            let notifications = self.notifications.clone();
            Timeout::new(ms, move || {
                // solo si no fue reemplazada mientras tanto
                if notifications.dismiss(id) {
                    alert.remove();
                }
            })
            .forget();
        }
    }

    fn clear_password(&self) {
        if let Some(input) = &self.password {
            input.set_value("");
            focus(input);
        }
    }

    fn fill_credentials(&self, username: &str, password: &str) {
        for (input, value) in [(&self.username, username), (&self.password, password)] {
            if let Some(input) = input {
                input.set_value(value);
                apply_validity(input);
            }
        }
    }

    fn focus_submit(&self) {
        if let Some(button) = &self.submit {
            focus(button);
        }
    }

    fn show_overlay(&self, markup: &Markup) {
        match document().and_then(|doc| doc.body()) {
            Some(body) => {
                if let Err(e) = body.insert_adjacent_html("beforeend", markup.as_str()) {
                    log::warn!("⚠️ [UI] No se pudo mostrar la capa: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [UI] Documento sin <body>"),
        }
    }
}
