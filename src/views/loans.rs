// ============================================================================
// LOANS VIEW - Préstamos del usuario
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{icon, ElementBuilder, Markup};
use crate::models::Loan;
use crate::utils::format_short_date;
use crate::views::actions::{action_button, ActionKind};
use crate::views::shared::{badge, loan_status_badge, render_empty_state, EmptyHint};

pub const LOAN_CARD_CLASS: &str = "loan-card";

/// Solo los préstamos de `user_id`; uno por tarjeta
pub fn render_loans(loans: &[Loan], user_id: i64) -> Markup {
    let mine: Vec<&Loan> = loans.iter().filter(|loan| loan.usuario_id == user_id).collect();

    if mine.is_empty() {
        return render_empty_state(
            "arrow-left-right",
            "No tienes préstamos activos",
            &EmptyHint::Navigate {
                hint: "Visita el catálogo para solicitar un préstamo",
                href: CONFIG.routes.catalog.clone(),
                label: "Ir al Catálogo",
            },
        );
    }
    Markup::concat(mine.into_iter().map(render_loan_card))
}

pub fn render_loan_card(loan: &Loan) -> Markup {
    let mut details = ElementBuilder::new("div")
        .class("row text-muted small")
        .child(detail("book", "Libro ID:", &loan.libro_id.to_string()))
        .child(detail("calendar", "Fecha préstamo:", &format_short_date(loan.fecha_prestamo.date())))
        .child(detail("clock", "Devolución:", &format_short_date(loan.fecha_devolucion_esperada.date())))
        .child(
            ElementBuilder::new("div")
                .class("col-sm-6 mb-2")
                .child(badge(loan_status_badge(&loan.estado), loan.estado.as_str()))
                .build(),
        );

    if loan.has_fine() {
        details = details.child(
            ElementBuilder::new("div")
                .class("col-12 mt-2")
                .child(
                    ElementBuilder::new("span")
                        .class("badge bg-danger fine-badge")
                        .child(icon("exclamation-triangle", "me-1"))
                        .text(&format!("Multa: ${}", format_amount(loan.multa)))
                        .build(),
                )
                .build(),
        );
    }

    // solo un préstamo activo se puede devolver
    let action = if loan.is_active() {
        action_button(ActionKind::Return, loan.id, "btn btn-primary", "arrow-return-left", "Devolver", true)
    } else {
        ElementBuilder::new("span").class("text-muted fst-italic").text("Finalizado").build()
    };

    let row = ElementBuilder::new("div")
        .class("row align-items-center")
        .child(
            ElementBuilder::new("div")
                .class("col-md-8")
                .child(
                    ElementBuilder::new("h5")
                        .class("card-title fw-bold text-primary")
                        .text(&format!("Préstamo #{}", loan.id))
                        .build(),
                )
                .child(details.build())
                .build(),
        )
        .child(ElementBuilder::new("div").class("col-md-4 text-end").child(action).build())
        .build();

    ElementBuilder::new("div")
        .class("col-12")
        .child(
            ElementBuilder::new("div")
                .class("card border-0 shadow-sm mb-3")
                .add_class(LOAN_CARD_CLASS)
                .attr("data-loan-id", &loan.id.to_string())
                .child(ElementBuilder::new("div").class("card-body").child(row).build())
                .build(),
        )
        .build()
}

/// Montos sin decimales sobrantes: 6.0 → "6", 2.5 → "2.5"
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

fn detail(icon_name: &str, label: &str, value: &str) -> Markup {
    ElementBuilder::new("div")
        .class("col-sm-6 mb-2")
        .child(icon(icon_name, "me-1"))
        .child(ElementBuilder::new("strong").text(label).build())
        .text(&format!(" {}", value))
        .build()
}
