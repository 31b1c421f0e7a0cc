// ============================================================================
// PAGES - Controladores por página (composition roots)
// ============================================================================
// Cada página: guard → cabecera de usuario → carga inicial → render.
// Todo el estado vive en el controlador; nada global.
// ============================================================================

use std::cell::RefCell;

use crate::config::CONFIG;
use crate::error::SessionError;
use crate::models::{Collection, User};
use crate::platform::Host;
use crate::services::{ApiClient, SessionGuard};
use crate::state::{CollectionStore, LoadingGuard, Notification, PageState, PageStatus};
use crate::viewmodels::{AuthViewModel, LogoutOutcome, MutationViewModel};
use crate::views::shared::user_header;

pub mod catalog_page;
pub mod dashboard_page;
pub mod loans_page;
pub mod login_page;
pub mod reservations_page;

pub use catalog_page::CatalogPage;
pub use dashboard_page::DashboardPage;
pub use loans_page::LoansPage;
pub use login_page::LoginPage;
pub use reservations_page::ReservationsPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Login,
    Dashboard,
    Catalog,
    Loans,
    Reservations,
}

impl PageKind {
    /// Página según `location.pathname` (tolera "/" final)
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let routes = &CONFIG.routes;
        if path == routes.login || path == "/" {
            Some(PageKind::Login)
        } else if path == routes.dashboard {
            Some(PageKind::Dashboard)
        } else if path == routes.catalog {
            Some(PageKind::Catalog)
        } else if path == routes.loans {
            Some(PageKind::Loans)
        } else if path == routes.reservations {
            Some(PageKind::Reservations)
        } else {
            None
        }
    }
}

/// Lo que comparten todas las páginas protegidas
pub struct PageContext {
    pub host: Host,
    pub api: ApiClient,
    pub state: PageState,
    guard: SessionGuard,
    user: RefCell<Option<User>>,
}

impl PageContext {
    pub fn new(host: Host, api: ApiClient) -> Self {
        let guard = SessionGuard::from_host(&host);
        Self {
            host,
            api,
            state: PageState::new(),
            guard,
            user: RefCell::new(None),
        }
    }

    /// Guard + cabecera. En `Err` la página ya redirigió y no debe seguir.
    pub fn authenticate(&self) -> Result<User, SessionError> {
        match self.guard.ensure_authenticated() {
            Ok(session) => {
                for (slot, text) in user_header(&session.user) {
                    self.host.view.set_text(slot, &text);
                }
                *self.user.borrow_mut() = Some(session.user.clone());
                Ok(session.user)
            }
            Err(e) => {
                self.state.set_status(PageStatus::Redirected);
                Err(e)
            }
        }
    }

    /// Usuario autenticado; `None` antes de `authenticate` o tras redirigir
    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.borrow().as_ref().map(|user| user.id)
    }

    /// Carga con indicador; en error notifica y deja el snapshot como estaba
    pub async fn load<E: Collection>(&self, store: &CollectionStore<E>) -> bool {
        self.state.set_status(PageStatus::Loading);
        let result = {
            let _loading = LoadingGuard::start(self.host.view.as_ref());
            store.load(&self.api).await
        };
        self.state.set_status(PageStatus::Ready);
        match result {
            Ok(_) => true,
            Err(_) => {
                self.notify(Notification::danger(E::LOAD_ERROR));
                false
            }
        }
    }

    pub fn notify(&self, notification: Notification) {
        self.host.view.show_notification(&notification);
    }

    pub fn mutations(&self) -> MutationViewModel {
        MutationViewModel::new(
            self.api.clone(),
            self.host.dialogs.clone(),
            self.host.view.clone(),
            self.state.clone(),
        )
    }

    pub async fn logout(&self) -> LogoutOutcome {
        self.state.set_status(PageStatus::Redirected);
        AuthViewModel::new(self.api.clone(), self.host.clone()).logout().await
    }

    pub async fn quick_logout(&self) {
        self.state.set_status(PageStatus::Redirected);
        AuthViewModel::new(self.api.clone(), self.host.clone()).quick_logout().await
    }
}
