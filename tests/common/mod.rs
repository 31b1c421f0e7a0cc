// Fakes compartidos por los tests de integración

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use biblioteca_web::dom::Markup;
use biblioteca_web::platform::{Clock, Cookies, Dialogs, Host, Navigator, PageView, Slot, Timer};
use biblioteca_web::services::{ApiClient, HttpRequest, HttpResponse, HttpTransport, TransportError};
use biblioteca_web::state::Notification;
use biblioteca_web::utils::MemoryStorage;
use chrono::{NaiveDate, NaiveDateTime};

pub const USER_JSON: &str = r#"{"id": 7, "full_name": "Ana Pérez", "role": "estudiante"}"#;

pub enum Reply {
    Status(u16, String),
    Offline,
    /// Nunca responde
    Hang,
    /// GET /check-auth según la cookie `token` del navegador
    CheckAuth,
}

/// Cookies del documento, compartidas entre navegador y backend
#[derive(Default)]
pub struct CookieJar(RefCell<BTreeSet<String>>);

impl CookieJar {
    pub fn set(&self, name: &str) {
        self.0.borrow_mut().insert(name.to_string());
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.borrow().contains(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.borrow().iter().cloned().collect()
    }
}

impl Cookies for CookieJar {
    fn expire(&self, name: &str) {
        self.0.borrow_mut().remove(name);
    }
}

pub struct FakeBackend {
    replies: RefCell<VecDeque<Reply>>,
    jar: Rc<CookieJar>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl FakeBackend {
    pub fn new(replies: Vec<Reply>, jar: Rc<CookieJar>) -> Rc<Self> {
        Rc::new(Self { replies: RefCell::new(replies.into()), jar, requests: RefCell::new(Vec::new()) })
    }

    pub fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

pub fn ok(body: impl Into<String>) -> Reply {
    Reply::Status(200, body.into())
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front().unwrap_or(Reply::Offline);
        match reply {
            Reply::Status(status, body) => Ok(HttpResponse { status, body }),
            Reply::Offline => Err(TransportError("Failed to fetch".into())),
            Reply::Hang => futures::future::pending().await,
            Reply::CheckAuth => Ok(HttpResponse {
                status: 200,
                body: format!(r#"{{"authenticated": {}}}"#, self.jar.has("token")),
            }),
        }
    }
}

#[derive(Default)]
pub struct Browser {
    pub visited: RefCell<Vec<String>>,
    pub confirm_answer: RefCell<bool>,
    pub sleeps: RefCell<Vec<u32>>,
    pub html: RefCell<HashMap<Slot, Markup>>,
    pub text: RefCell<HashMap<Slot, String>>,
    pub loading: RefCell<Vec<bool>>,
    pub notifications: RefCell<Vec<Notification>>,
}

impl Navigator for Browser {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

impl Dialogs for Browser {
    fn confirm(&self, _message: &str) -> bool {
        *self.confirm_answer.borrow()
    }
}

#[async_trait(?Send)]
impl Timer for Browser {
    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
    }
}

impl Clock for Browser {
    fn now(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }
}

impl PageView for Browser {
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
}

impl Browser {
    pub fn content(&self) -> String {
        self.html
            .borrow()
            .get(&Slot::Content)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn last_message(&self) -> Option<String> {
        self.notifications.borrow().last().map(|n| n.message.clone())
    }
}

pub struct World {
    pub storage: Rc<MemoryStorage>,
    pub cookies: Rc<CookieJar>,
    pub browser: Rc<Browser>,
    pub backend: Rc<FakeBackend>,
}

impl World {
    pub fn new(items: &[(&str, &str)], replies: Vec<Reply>) -> Self {
        let browser = Rc::new(Browser::default());
        *browser.confirm_answer.borrow_mut() = true;
        let cookies = Rc::new(CookieJar::default());
        Self {
            storage: Rc::new(MemoryStorage::with_items(items.iter().copied())),
            backend: FakeBackend::new(replies, cookies.clone()),
            cookies,
            browser,
        }
    }

    /// Como tras un login real: evidencia local más las cookies del backend
    pub fn signed_in(replies: Vec<Reply>) -> Self {
        let world = Self::new(&[("token", "t0k"), ("user", USER_JSON)], replies);
        world.cookies.set("token");
        world.cookies.set("user_id");
        world
    }

    pub fn host(&self) -> Host {
        Host {
            storage: self.storage.clone(),
            cookies: self.cookies.clone(),
            navigator: self.browser.clone(),
            dialogs: self.browser.clone(),
            timer: self.browser.clone(),
            clock: self.browser.clone(),
            view: self.browser.clone(),
        }
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::with_base_url("/api", self.backend.clone())
    }
}

pub fn loan(id: i64, usuario_id: i64, estado: &str, multa: f64) -> String {
    format!(
        r#"{{"id": {id}, "usuario_id": {usuario_id}, "libro_id": 3, "fecha_prestamo": "2024-05-01T10:00:00",
           "fecha_devolucion_esperada": "2024-05-16T10:00:00", "fecha_devolucion_real": null,
           "estado": "{estado}", "multa": {multa}}}"#
    )
}

pub fn book(id: i64, disponibles: u32) -> String {
    format!(
        r#"{{"id": {id}, "titulo": "Libro {id}", "autor_id": 1, "categoria": "ensayo", "isbn": "978-{id}",
           "año_publicacion": 2001, "editorial": "Anagrama", "ejemplares_disponibles": {disponibles},
           "ejemplares_totales": 3}}"#
    )
}

pub fn list(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}
