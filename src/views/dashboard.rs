// ============================================================================
// DASHBOARD VIEW - Tarjetas de estadísticas
// ============================================================================

use crate::dom::{icon, ElementBuilder, Markup};
use crate::models::{Book, Loan, Reservation};

/// Conteos globales (no filtrados por usuario)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_books: usize,
    pub active_loans: usize,
    pub active_reservations: usize,
}

impl DashboardStats {
    pub fn from_collections(books: &[Book], loans: &[Loan], reservations: &[Reservation]) -> Self {
        Self {
            total_books: books.len(),
            active_loans: loans.iter().filter(|loan| loan.is_active()).count(),
            active_reservations: reservations.iter().filter(|r| r.is_active()).count(),
        }
    }
}

pub fn render_stats(stats: &DashboardStats) -> Markup {
    Markup::concat(vec![
        stat_card("books", "book-half", "primary", stats.total_books, "Total de Libros"),
        stat_card("loans", "arrow-left-right", "success", stats.active_loans, "Préstamos Activos"),
        stat_card("reservations", "calendar-check", "warning", stats.active_reservations, "Reservas Activas"),
    ])
}

fn stat_card(kind: &str, icon_name: &str, color: &str, value: usize, label: &str) -> Markup {
    let stat_icon = ElementBuilder::new("div")
        .class(&format!("stat-icon bg-{0} bg-opacity-10 text-{0} me-3", color))
        .child(icon(icon_name, "fs-2"))
        .build();

    let text = ElementBuilder::new("div")
        .child(
            ElementBuilder::new("h3")
                .class(&format!("h2 fw-bold text-{} mb-0", color))
                .attr("data-stat", kind)
                .text(&value.to_string())
                .build(),
        )
        .child(ElementBuilder::new("p").class("text-muted mb-0 fw-semibold").text(label).build())
        .build();

    ElementBuilder::new("div")
        .class("col-md-4")
        .child(
            ElementBuilder::new("div")
                .class("card stat-card border-0 shadow-sm")
                .add_class(kind)
                .child(
                    ElementBuilder::new("div")
                        .class("card-body p-4")
                        .child(
                            ElementBuilder::new("div")
                                .class("d-flex align-items-center")
                                .child(stat_icon)
                                .child(text)
                                .build(),
                        )
                        .build(),
                )
                .build(),
        )
        .build()
}
