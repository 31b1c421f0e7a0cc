// ============================================================================
// APP - Arranque en el navegador (solo wasm32)
// ============================================================================
// Resuelve la página por pathname, arma el Host real, registra listeners
// una sola vez y lanza `init()` con spawn_local.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{
    get_element_by_id, get_input_by_id, on_action, on_blur, on_click, on_input, on_submit, query_selector,
};
use crate::models::DemoAccount;
use crate::pages::{CatalogPage, DashboardPage, LoansPage, LoginPage, PageKind, ReservationsPage};
use crate::platform::browser::{
    apply_validity, BrowserCookies, BrowserDialogs, BrowserNavigator, BrowserStorage, BrowserView, GlooTimer,
};
use crate::platform::{Host, SystemClock};
use crate::services::{ApiClient, GlooTransport};
use crate::views::PasswordVisibility;

/// Página activa (una por carga de documento)
#[derive(Clone)]
pub enum ActivePage {
    Login(Rc<LoginPage>),
    Dashboard(Rc<DashboardPage>),
    Catalog(Rc<CatalogPage>),
    Loans(Rc<LoansPage>),
    Reservations(Rc<ReservationsPage>),
}

thread_local! {
    static ACTIVE: RefCell<Option<ActivePage>> = RefCell::new(None);
}

fn host(content_id: Option<&str>) -> Host {
    Host {
        storage: Rc::new(BrowserStorage),
        cookies: Rc::new(BrowserCookies),
        navigator: Rc::new(BrowserNavigator),
        dialogs: Rc::new(BrowserDialogs),
        timer: Rc::new(GlooTimer),
        clock: Rc::new(SystemClock),
        view: Rc::new(BrowserView::bind(content_id)),
    }
}

fn api() -> ApiClient {
    ApiClient::new(Rc::new(GlooTransport))
}

/// Arranca la página indicada
pub fn start(kind: PageKind) -> Result<(), JsValue> {
    log::info!("🚀 [APP] Iniciando página {:?}", kind);
    let page = match kind {
        PageKind::Login => start_login()?,
        PageKind::Dashboard => start_dashboard()?,
        PageKind::Catalog => start_catalog()?,
        PageKind::Loans => start_loans()?,
        PageKind::Reservations => start_reservations()?,
    };
    bind_logout_buttons()?;
    ACTIVE.with(|active| *active.borrow_mut() = Some(page));
    Ok(())
}

fn start_login() -> Result<ActivePage, JsValue> {
    let page = Rc::new(LoginPage::new(host(None), api()));

    if let Some(form) = get_element_by_id("login-form") {
        let submit_page = page.clone();
        on_submit(&form, move || {
            let username = get_input_by_id("username").map(|i| i.value()).unwrap_or_default();
            let password = get_input_by_id("password").map(|i| i.value()).unwrap_or_default();
            let page = submit_page.clone();
            spawn_local(async move {
                page.submit(&username, &password).await;
            });
        })?;
    }

    bind_field_validation()?;
    bind_password_toggle()?;

    let init_page = page.clone();
    spawn_local(async move {
        init_page.init().await;
    });
    Ok(ActivePage::Login(page))
}

/// Usuario y contraseña se marcan válidos/inválidos al escribir y al salir
fn bind_field_validation() -> Result<(), JsValue> {
    for id in ["username", "password"] {
        if let Some(input) = get_input_by_id(id) {
            let on_type = input.clone();
            on_input(&input, move |_| apply_validity(&on_type))?;
            let on_leave = input.clone();
            on_blur(&input, move |_| apply_validity(&on_leave))?;
        }
    }
    Ok(())
}

fn bind_password_toggle() -> Result<(), JsValue> {
    let (Some(toggle), Some(password)) = (get_element_by_id("toggle-password"), get_input_by_id("password")) else {
        return Ok(());
    };
    let button = toggle.clone();
    on_click(&toggle, move |_| {
        let current = password.get_attribute("type").unwrap_or_else(|| "password".to_string());
        let next = PasswordVisibility::from_input_type(&current).toggled();
        let _ = password.set_attribute("type", next.input_type());
        button.set_inner_html(next.toggle_icon().as_str());
    })
}

fn start_dashboard() -> Result<ActivePage, JsValue> {
    let page = Rc::new(DashboardPage::new(host(Some("stats-grid")), api()));

    let clock_page = page.clone();
    Interval::new(CONFIG.ui_config.clock_refresh_ms, move || clock_page.tick_clock()).forget();

    let init_page = page.clone();
    spawn_local(async move {
        let _ = init_page.init().await;
    });
    Ok(ActivePage::Dashboard(page))
}

fn start_catalog() -> Result<ActivePage, JsValue> {
    let page = Rc::new(CatalogPage::new(host(Some("books-grid")), api()));

    if let Some(grid) = get_element_by_id("books-grid") {
        let action_page = page.clone();
        on_action(&grid, move |action| {
            let page = action_page.clone();
            spawn_local(async move {
                page.handle_action(action).await;
            });
        })?;
    }
    if let Some(search) = get_input_by_id("search-input") {
        let search_page = page.clone();
        let input = search.clone();
        on_input(&search, move |_| search_page.search(&input.value()))?;
    }

    let init_page = page.clone();
    spawn_local(async move {
        let _ = init_page.init().await;
    });
    Ok(ActivePage::Catalog(page))
}

fn start_loans() -> Result<ActivePage, JsValue> {
    let page = Rc::new(LoansPage::new(host(Some("loans-container")), api()));

    if let Some(container) = get_element_by_id("loans-container") {
        let action_page = page.clone();
        on_action(&container, move |action| {
            let page = action_page.clone();
            spawn_local(async move {
                page.handle_action(action).await;
            });
        })?;
    }

    let init_page = page.clone();
    spawn_local(async move {
        let _ = init_page.init().await;
    });
    Ok(ActivePage::Loans(page))
}

fn start_reservations() -> Result<ActivePage, JsValue> {
    let page = Rc::new(ReservationsPage::new(host(Some("reservations-container")), api()));

    if let Some(container) = get_element_by_id("reservations-container") {
        let action_page = page.clone();
        on_action(&container, move |action| {
            let page = action_page.clone();
            spawn_local(async move {
                page.handle_action(action).await;
            });
        })?;
    }

    let init_page = page.clone();
    spawn_local(async move {
        let _ = init_page.init().await;
    });
    Ok(ActivePage::Reservations(page))
}

/// Botones/links con `data-logout` en la barra de navegación
fn bind_logout_buttons() -> Result<(), JsValue> {
    if let Some(button) = query_selector("[data-logout]")? {
        on_click(&button, |event| {
            event.prevent_default();
            logout();
        })?;
    }
    Ok(())
}

fn active_page() -> Option<ActivePage> {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Logout de la página activa (también expuesto a JS)
pub fn logout() {
    let page = active_page();
    spawn_local(async move {
        match page {
            Some(ActivePage::Login(page)) => {
                page.logout().await;
            }
            Some(ActivePage::Dashboard(page)) => {
                page.logout().await;
            }
            Some(ActivePage::Catalog(page)) => {
                page.logout().await;
            }
            Some(ActivePage::Loans(page)) => {
                page.logout().await;
            }
            Some(ActivePage::Reservations(page)) => {
                page.logout().await;
            }
            None => {
                log::warn!("⚠️ [APP] Logout sin página activa");
            }
        }
    });
}

/// Logout sin esperar al servidor
pub fn quick_logout() {
    let page = active_page();
    spawn_local(async move {
        match page {
            Some(ActivePage::Login(page)) => page.quick_logout().await,
            Some(ActivePage::Dashboard(page)) => page.quick_logout().await,
            Some(ActivePage::Catalog(page)) => page.quick_logout().await,
            Some(ActivePage::Loans(page)) => page.quick_logout().await,
            Some(ActivePage::Reservations(page)) => page.quick_logout().await,
            None => log::warn!("⚠️ [APP] Logout rápido sin página activa"),
        }
    });
}

/// Credenciales demo: solo tienen sentido en la página de login
pub fn fill_demo(credentials: DemoCredentials) {
    let Some(ActivePage::Login(page)) = active_page() else {
        log::warn!("⚠️ [APP] Credenciales demo fuera de la página de login");
        return;
    };
    spawn_local(async move {
        match credentials {
            DemoCredentials::Account(account) => page.fill_demo_account(account).await,
            DemoCredentials::Custom { username, password } => {
                page.fill_demo_credentials(&username, &password).await
            }
        }
    });
}

pub enum DemoCredentials {
    Account(DemoAccount),
    Custom { username: String, password: String },
}
