// ============================================================================
// TEST SUPPORT - Fakes en memoria de los puertos de plataforma
// ============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::dom::Markup;
use crate::platform::{Clock, Cookies, Dialogs, Host, Navigator, PageView, Slot, Timer};
use crate::services::{ApiClient, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::state::Notification;
use crate::error::StorageError;
use crate::utils::{KeyValueStorage, MemoryStorage};

/// Respuestas en orden; sin respuestas restantes falla como red caída
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    pub seen: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(self: &Rc<Self>, status: u16, body: &str) -> Rc<Self> {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
        self.clone()
    }

    pub fn offline(self: &Rc<Self>) -> Rc<Self> {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError("Failed to fetch".into())));
        self.clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("sin respuesta".into())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator(pub RefCell<Vec<String>>);

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_string());
    }
}

/// Anota las cookies expiradas, en orden
#[derive(Default)]
pub struct RecordingCookies(pub RefCell<Vec<String>>);

impl RecordingCookies {
    pub fn expired(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Cookies for RecordingCookies {
    fn expire(&self, name: &str) {
        self.0.borrow_mut().push(name.to_string());
    }
}

/// localStorage bloqueado: se puede leer (vacío) pero no escribir
pub struct ReadOnlyStorage;

impl KeyValueStorage for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Responde siempre lo mismo y guarda las preguntas
pub struct FixedDialogs {
    answer: bool,
    pub asked: RefCell<Vec<String>>,
}

impl Dialogs for FixedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer
    }
}

/// Resuelve al instante y anota la duración pedida
#[derive(Default)]
pub struct InstantTimer(pub RefCell<Vec<u32>>);

#[async_trait(?Send)]
impl Timer for InstantTimer {
    async fn sleep(&self, ms: u32) {
        self.0.borrow_mut().push(ms);
    }
}

/// Siempre el lunes 6 de mayo de 2024 a las 12:00
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub html: RefCell<HashMap<Slot, Markup>>,
    pub text: RefCell<HashMap<Slot, String>>,
    pub loading: RefCell<Vec<bool>>,
    pub notifications: RefCell<Vec<Notification>>,
    pub password_cleared: RefCell<bool>,
    pub credentials: RefCell<Option<(String, String)>>,
    pub submit_focused: RefCell<bool>,
    pub overlays: RefCell<Vec<Markup>>,
}

impl RecordingView {
    pub fn content(&self) -> Markup {
        self.html.borrow().get(&Slot::Content).cloned().unwrap_or_default()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }
}

impl PageView for RecordingView {
    fn set_html(&self, slot: Slot, markup: &Markup) {
        self.html.borrow_mut().insert(slot, markup.clone());
    }

    fn set_text(&self, slot: Slot, text: &str) {
        self.text.borrow_mut().insert(slot, text.to_string());
    }

    fn set_loading(&self, loading: bool) {
        self.loading.borrow_mut().push(loading);
    }

    fn show_notification(&self, notification: &Notification) {
        self.notifications.borrow_mut().push(notification.clone());
    }

    fn clear_password(&self) {
        *self.password_cleared.borrow_mut() = true;
    }

    fn fill_credentials(&self, username: &str, password: &str) {
        *self.credentials.borrow_mut() = Some((username.to_string(), password.to_string()));
    }

    fn focus_submit(&self) {
        *self.submit_focused.borrow_mut() = true;
    }

    fn show_overlay(&self, markup: &Markup) {
        self.overlays.borrow_mut().push(markup.clone());
    }
}

pub const USER_JSON: &str = r#"{"id": 7, "full_name": "Ana Pérez", "role": "estudiante"}"#;

/// Host con fakes; se conservan las piezas para poder inspeccionarlas
pub struct Fakes {
    pub storage: Rc<MemoryStorage>,
    pub cookies: Rc<RecordingCookies>,
    pub navigator: Rc<RecordingNavigator>,
    pub dialogs: Rc<FixedDialogs>,
    pub timer: Rc<InstantTimer>,
    pub view: Rc<RecordingView>,
}

impl Fakes {
    pub fn new(items: &[(&str, &str)], confirm: bool) -> Self {
        Self {
            storage: Rc::new(MemoryStorage::with_items(items.iter().copied())),
            cookies: Rc::new(RecordingCookies::default()),
            navigator: Rc::new(RecordingNavigator::default()),
            dialogs: Rc::new(FixedDialogs { answer: confirm, asked: RefCell::new(Vec::new()) }),
            timer: Rc::new(InstantTimer::default()),
            view: Rc::new(RecordingView::default()),
        }
    }

    /// Sesión válida del usuario 7
    pub fn signed_in(confirm: bool) -> Self {
        Self::new(&[("token", "t0k"), ("user", USER_JSON)], confirm)
    }

    pub fn host(&self) -> Host {
        Host {
            storage: self.storage.clone(),
            cookies: self.cookies.clone(),
            navigator: self.navigator.clone(),
            dialogs: self.dialogs.clone(),
            timer: self.timer.clone(),
            clock: Rc::new(FixedClock),
            view: self.view.clone(),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.navigator.0.borrow().clone()
    }
}

pub fn api(transport: &Rc<ScriptedTransport>) -> ApiClient {
    ApiClient::with_base_url("/api", transport.clone())
}

pub fn book_json(id: i64, disponibles: u32) -> String {
    format!(
        r#"{{"id": {}, "titulo": "Libro {}", "categoria": "ficcion", "isbn": "978-{}",
           "año_publicacion": 1990, "editorial": "Planeta", "ejemplares_disponibles": {}}}"#,
        id, id, id, disponibles
    )
}

pub fn loan_json(id: i64, usuario_id: i64, estado: &str) -> String {
    format!(
        r#"{{"id": {}, "usuario_id": {}, "libro_id": 1, "fecha_prestamo": "2024-05-01T10:00:00",
           "fecha_devolucion_esperada": "2024-05-16T10:00:00", "estado": "{}", "multa": 0}}"#,
        id, usuario_id, estado
    )
}

pub fn reservation_json(id: i64, usuario_id: i64, estado: &str) -> String {
    format!(
        r#"{{"id": {}, "usuario_id": {}, "libro_id": 1, "fecha_reserva": "2024-05-01T10:00:00",
           "fecha_vencimiento": "2024-05-04T10:00:00", "estado": "{}"}}"#,
        id, usuario_id, estado
    )
}

pub fn list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}
