// ============================================================================
// DASHBOARD PAGE - Estadísticas globales + bienvenida
// ============================================================================

use crate::error::SessionError;
use crate::pages::PageContext;
use crate::platform::{Host, Slot};
use crate::services::ApiClient;
use crate::state::{LoadingGuard, Notification, PageStatus};
use crate::utils::format_current_time;
use crate::viewmodels::LogoutOutcome;
use crate::views::shared::welcome_text;
use crate::views::{render_stats, DashboardStats};

pub const DASHBOARD_LOAD_ERROR: &str = "Error al cargar el dashboard";

pub struct DashboardPage {
    ctx: PageContext,
}

impl DashboardPage {
    pub fn new(host: Host, api: ApiClient) -> Self {
        Self { ctx: PageContext::new(host, api) }
    }

    pub async fn init(&self) -> Result<(), SessionError> {
        log::info!("📊 [DASHBOARD] Inicializando página");
        let user = self.ctx.authenticate()?;
        self.ctx.host.view.set_text(Slot::Welcome, &welcome_text(&user));
        self.tick_clock();
        self.load_stats().await;
        Ok(())
    }

    /// Hora actual en el header; la página la refresca cada minuto
    pub fn tick_clock(&self) {
        let now = self.ctx.host.clock.now();
        self.ctx.host.view.set_text(Slot::CurrentTime, &format_current_time(now));
    }

    /// Las tres colecciones o nada: un fallo cualquiera descarta el resto
    pub async fn load_stats(&self) -> Option<DashboardStats> {
        let api = &self.ctx.api;
        self.ctx.state.set_status(PageStatus::Loading);
        let result = {
            let _loading = LoadingGuard::start(self.ctx.host.view.as_ref());
            futures::try_join!(api.get_books(), api.get_loans(), api.get_reservations())
        };
        self.ctx.state.set_status(PageStatus::Ready);

        match result {
            Ok((books, loans, reservations)) => {
                let stats = DashboardStats::from_collections(&books, &loans, &reservations);
                log::info!(
                    "📊 [DASHBOARD] {} libros, {} préstamos activos, {} reservas activas",
                    stats.total_books,
                    stats.active_loans,
                    stats.active_reservations
                );
                self.ctx.host.view.set_html(Slot::Content, &render_stats(&stats));
                Some(stats)
            }
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error cargando estadísticas: {}", e);
                self.ctx.notify(Notification::danger(DASHBOARD_LOAD_ERROR));
                None
            }
        }
    }

    pub async fn logout(&self) -> LogoutOutcome {
        self.ctx.logout().await
    }

    pub async fn quick_logout(&self) {
        self.ctx.quick_logout().await
    }
}
