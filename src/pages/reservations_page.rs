// ============================================================================
// RESERVATIONS PAGE - Reservas del usuario
// ============================================================================

use crate::error::SessionError;
use crate::models::Reservation;
use crate::pages::PageContext;
use crate::platform::{Host, Slot};
use crate::services::ApiClient;
use crate::state::CollectionStore;
use crate::viewmodels::{LogoutOutcome, MutationOutcome};
use crate::views::{render_reservations, ActionKind, UserAction};

pub struct ReservationsPage {
    ctx: PageContext,
    reservations: CollectionStore<Reservation>,
}

impl ReservationsPage {
    pub fn new(host: Host, api: ApiClient) -> Self {
        Self {
            ctx: PageContext::new(host, api),
            reservations: CollectionStore::new(),
        }
    }

    pub async fn init(&self) -> Result<(), SessionError> {
        log::info!("📅 [RESERVAS] Inicializando página");
        self.ctx.authenticate()?;
        if self.ctx.load(&self.reservations).await {
            self.render();
        }
        Ok(())
    }

    pub async fn handle_action(&self, action: UserAction) -> Option<MutationOutcome> {
        if action.kind != ActionKind::Cancel || self.ctx.state.is_redirected() {
            return None;
        }
        let outcome = self
            .ctx
            .mutations()
            .cancel_reservation(action.id, &self.reservations)
            .await;
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

    /// "Próxima a vencer" se recalcula con la hora actual en cada render
    fn render(&self) {
        if let Some(user_id) = self.ctx.user_id() {
            let now = self.ctx.host.clock.now();
            let markup = render_reservations(&self.reservations.scoped(user_id), user_id, now);
            self.ctx.host.view.set_html(Slot::Content, &markup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{api, list, reservation_json, Fakes, ScriptedTransport};
    use futures::executor::block_on;

    #[test]
    fn cancel_reloads_and_rerenders() {
        let fakes = Fakes::signed_in(true);
        let transport = ScriptedTransport::new()
            .reply(200, &list(&[reservation_json(4, 7, "activa")]))
            .reply(200, r#"{"message": "Reserva cancelada"}"#)
            .reply(200, &list(&[reservation_json(4, 7, "cancelada")]));
        let page = ReservationsPage::new(fakes.host(), api(&transport));
        block_on(page.init()).unwrap();
        assert!(fakes.view.content().contains("data-action=\"cancel\""));

        let outcome = block_on(page.handle_action(UserAction { kind: ActionKind::Cancel, id: 4 }));

        assert_eq!(outcome, Some(MutationOutcome::Done));
        assert_eq!(
            transport.urls(),
            vec!["/api/reservations", "/api/reservations/4/cancel", "/api/reservations"]
        );
        assert!(!fakes.view.content().contains("data-action"));
        assert_eq!(
            fakes.dialogs.asked.borrow()[0],
            "¿Estás seguro de que deseas cancelar esta reserva?"
        );
    }

    #[test]
    fn other_actions_are_ignored() {
        let fakes = Fakes::signed_in(true);
        let transport = ScriptedTransport::new().reply(200, "[]");
        let page = ReservationsPage::new(fakes.host(), api(&transport));
        block_on(page.init()).unwrap();

        assert_eq!(block_on(page.handle_action(UserAction { kind: ActionKind::Loan, id: 1 })), None);
        assert!(fakes.view.content().contains("No tienes reservas activas"));
    }
}
