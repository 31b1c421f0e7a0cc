// ============================================================================
// CATALOG PAGE - Catálogo de libros con búsqueda
// ============================================================================

use std::cell::RefCell;

use crate::error::SessionError;
use crate::models::Book;
use crate::pages::PageContext;
use crate::platform::{Host, Slot};
use crate::services::ApiClient;
use crate::state::{CollectionStore, PageStatus};
use crate::viewmodels::{LogoutOutcome, MutationOutcome};
use crate::views::{filter_books, render_books, ActionKind, UserAction};

pub struct CatalogPage {
    ctx: PageContext,
    books: CollectionStore<Book>,
    search_term: RefCell<String>,
}

impl CatalogPage {
    pub fn new(host: Host, api: ApiClient) -> Self {
        Self {
            ctx: PageContext::new(host, api),
            books: CollectionStore::new(),
            search_term: RefCell::new(String::new()),
        }
    }

    pub async fn init(&self) -> Result<(), SessionError> {
        log::info!("📖 [CATALOGO] Inicializando página");
        self.ctx.authenticate()?;
        if self.ctx.load(&self.books).await {
            self.render();
        }
        Ok(())
    }

    /// Filtra el snapshot local; no va a la red
    pub fn search(&self, term: &str) {
        *self.search_term.borrow_mut() = term.trim().to_string();
        self.render();
    }

    /// Reservar o prestar; otras acciones no aplican en el catálogo
    pub async fn handle_action(&self, action: UserAction) -> Option<MutationOutcome> {
        if self.ctx.state.status() == PageStatus::Redirected {
            return None;
        }
        let user_id = self.ctx.user_id()?;
        let mutations = self.ctx.mutations();
        let outcome = match action.kind {
            ActionKind::Reserve => mutations.reserve(user_id, action.id, &self.books).await,
            ActionKind::Loan => mutations.loan(user_id, action.id, &self.books).await,
            other => {
                log::warn!("⚠️ [CATALOGO] Acción {:?} ignorada", other);
                return None;
            }
        };
        if outcome.is_done() {
            self.render();
        }
        Some(outcome)
    }

    pub async fn logout(&self) -> LogoutOutcome {
        self.ctx.logout().await
    }

    pub async fn quick_logout(&self) {
        self.ctx.quick_logout().await
    }

    pub fn books(&self) -> &CollectionStore<Book> {
        &self.books
    }

    fn render(&self) {
        let all = self.books.items();
        let term = self.search_term.borrow();
        let visible = if term.is_empty() { all } else { filter_books(&all, &term) };
        self.ctx.host.view.set_html(Slot::Content, &render_books(&visible));
    }
}
