// ============================================================================
// LOANS PAGE - Préstamos del usuario
// ============================================================================

use crate::error::SessionError;
use crate::models::Loan;
use crate::pages::PageContext;
use crate::platform::{Host, Slot};
use crate::services::ApiClient;
use crate::state::CollectionStore;
use crate::viewmodels::{LogoutOutcome, MutationOutcome};
use crate::views::{render_loans, ActionKind, UserAction};

pub struct LoansPage {
    ctx: PageContext,
    loans: CollectionStore<Loan>,
}

impl LoansPage {
    pub fn new(host: Host, api: ApiClient) -> Self {
        Self {
            ctx: PageContext::new(host, api),
            loans: CollectionStore::new(),
        }
    }

    pub async fn init(&self) -> Result<(), SessionError> {
        log::info!("🔄 [PRESTAMOS] Inicializando página");
        self.ctx.authenticate()?;
        if self.ctx.load(&self.loans).await {
            self.render();
        }
        Ok(())
    }

    pub async fn handle_action(&self, action: UserAction) -> Option<MutationOutcome> {
        if action.kind != ActionKind::Return || self.ctx.state.is_redirected() {
            return None;
        }
        let outcome = self.ctx.mutations().return_loan(action.id, &self.loans).await;
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

    fn render(&self) {
        if let Some(user_id) = self.ctx.user_id() {
            let markup = render_loans(&self.loans.scoped(user_id), user_id);
            self.ctx.host.view.set_html(Slot::Content, &markup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{api, list, loan_json, Fakes, ScriptedTransport};
    use futures::executor::block_on;

    #[test]
    fn shows_only_own_loans() {
        let fakes = Fakes::signed_in(true);
        let transport = ScriptedTransport::new()
            .reply(200, &list(&[loan_json(1, 7, "activo"), loan_json(2, 9, "devuelto")]));
        let page = LoansPage::new(fakes.host(), api(&transport));

        block_on(page.init()).unwrap();

        let content = fakes.view.content();
        assert!(content.contains("Préstamo #1"));
        assert!(!content.contains("Préstamo #2"));
        assert!(content.contains("data-action=\"return\""));
    }

    #[test]
    fn declined_return_does_nothing() {
        let fakes = Fakes::signed_in(false);
        let transport = ScriptedTransport::new().reply(200, &list(&[loan_json(1, 7, "activo")]));
        let page = LoansPage::new(fakes.host(), api(&transport));
        block_on(page.init()).unwrap();

        let outcome = block_on(page.handle_action(UserAction { kind: ActionKind::Return, id: 1 }));

        assert_eq!(outcome, Some(MutationOutcome::Cancelled));
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn missing_session_redirects_without_network() {
        let fakes = Fakes::new(&[], true);
        let transport = ScriptedTransport::new();
        let page = LoansPage::new(fakes.host(), api(&transport));

        assert!(block_on(page.init()).is_err());
        assert!(transport.seen.borrow().is_empty());
        assert_eq!(fakes.redirects(), vec!["/login"]);
        assert_eq!(block_on(page.handle_action(UserAction { kind: ActionKind::Return, id: 1 })), None);
    }
}
