// ============================================================================
// MUTATION VIEWMODEL - Reservar, prestar, devolver, cancelar
// ============================================================================
// confirm (si aplica) → request → notificación → recarga completa.
// En error el snapshot queda como estaba.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{Book, Collection, Loan, Reservation};
use crate::platform::{Dialogs, PageView};
use crate::services::ApiClient;
use crate::state::{CollectionStore, LoadingGuard, Notification, PageState, PageStatus};

#[derive(Clone, Debug, PartialEq)]
pub enum MutationOutcome {
    /// El backend aceptó; la colección se recargó (o se intentó)
    Done,
    Failed(ApiError),
    /// El usuario dijo que no en el confirm
    Cancelled,
}

impl MutationOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, MutationOutcome::Done)
    }
}

/// Textos de una mutación
struct MutationText {
    confirm: Option<&'static str>,
    success: &'static str,
    failure: &'static str,
}

const RESERVE: MutationText = MutationText {
    confirm: None,
    success: "Libro reservado exitosamente",
    failure: "Error al reservar el libro",
};

const LOAN: MutationText = MutationText {
    confirm: None,
    success: "Préstamo realizado exitosamente",
    failure: "Error al realizar el préstamo",
};

const RETURN: MutationText = MutationText {
    confirm: Some("¿Estás seguro de que deseas devolver este libro?"),
    success: "Libro devuelto exitosamente",
    failure: "Error al devolver el libro",
};

const CANCEL: MutationText = MutationText {
    confirm: Some("¿Estás seguro de que deseas cancelar esta reserva?"),
    success: "Reserva cancelada exitosamente",
    failure: "Error al cancelar la reserva",
};

/// Mensaje de fallo: red caída → "Error de conexión"; rechazo → prefijo + detalle
pub fn failure_message(prefix: &str, error: &ApiError) -> String {
    if error.is_network() {
        error.user_message()
    } else {
        format!("{}: {}", prefix, error.user_message())
    }
}

#[derive(Clone)]
pub struct MutationViewModel {
    api: ApiClient,
    dialogs: Rc<dyn Dialogs>,
    view: Rc<dyn PageView>,
    page_state: PageState,
}

impl MutationViewModel {
    pub fn new(api: ApiClient, dialogs: Rc<dyn Dialogs>, view: Rc<dyn PageView>, page_state: PageState) -> Self {
        Self { api, dialogs, view, page_state }
    }

    pub async fn reserve(&self, user_id: i64, book_id: i64, books: &CollectionStore<Book>) -> MutationOutcome {
        log::info!("📚 [MUTATION] Reservar libro {}", book_id);
        self.run(&RESERVE, books, self.api.create_reservation(user_id, book_id)).await
    }

    pub async fn loan(&self, user_id: i64, book_id: i64, books: &CollectionStore<Book>) -> MutationOutcome {
        log::info!("📚 [MUTATION] Prestar libro {}", book_id);
        let days = CONFIG.loan_config.default_loan_days;
        self.run(&LOAN, books, self.api.create_loan(user_id, book_id, days)).await
    }

    pub async fn return_loan(&self, loan_id: i64, loans: &CollectionStore<Loan>) -> MutationOutcome {
        log::info!("📚 [MUTATION] Devolver préstamo {}", loan_id);
        self.run(&RETURN, loans, self.api.return_loan(loan_id)).await
    }

    pub async fn cancel_reservation(
        &self,
        reservation_id: i64,
        reservations: &CollectionStore<Reservation>,
    ) -> MutationOutcome {
        log::info!("📚 [MUTATION] Cancelar reserva {}", reservation_id);
        self.run(&CANCEL, reservations, self.api.cancel_reservation(reservation_id)).await
    }

    async fn run<E, T, F>(&self, text: &MutationText, store: &CollectionStore<E>, request: F) -> MutationOutcome
    where
        E: Collection,
        F: Future<Output = ApiResult<T>>,
    {
        // el future no arranca hasta el await: declinar no toca la red
        if let Some(question) = text.confirm {
            if !self.dialogs.confirm(question) {
                log::info!("↩️ [MUTATION] Cancelado por el usuario");
                return MutationOutcome::Cancelled;
            }
        }

        self.page_state.set_status(PageStatus::Mutating);
        let _loading = LoadingGuard::start(self.view.as_ref());
        let outcome = match request.await {
            Ok(_) => {
                log::info!("✅ [MUTATION] {}", text.success);
                self.view.show_notification(&Notification::success(text.success));
                if let Err(e) = store.reload(&self.api).await {
                    log::warn!("⚠️ [MUTATION] Recarga de {} fallida: {}", E::NAME, e);
                    self.view.show_notification(&Notification::danger(E::LOAD_ERROR));
                }
                MutationOutcome::Done
            }
            Err(error) => {
                log::error!("❌ [MUTATION] {}: {}", text.failure, error);
                self.view
                    .show_notification(&Notification::danger(failure_message(text.failure, &error)));
                MutationOutcome::Failed(error)
            }
        };
        self.page_state.set_status(PageStatus::Ready);
        outcome
    }
}
