// ============================================================================
// RESERVATIONS VIEW - Reservas del usuario
// ============================================================================

use chrono::NaiveDateTime;

use crate::config::CONFIG;
use crate::dom::{icon, ElementBuilder, Markup};
use crate::models::Reservation;
use crate::utils::format_short_date;
use crate::views::actions::{action_button, ActionKind};
use crate::views::shared::{badge, render_empty_state, reservation_status_badge, EmptyHint};

pub const RESERVATION_CARD_CLASS: &str = "reservation-card";

/// Solo las reservas de `user_id`. `now` decide el aviso de "Próxima a vencer".
pub fn render_reservations(reservations: &[Reservation], user_id: i64, now: NaiveDateTime) -> Markup {
    let mine: Vec<&Reservation> = reservations
        .iter()
        .filter(|reservation| reservation.usuario_id == user_id)
        .collect();

    if mine.is_empty() {
        return render_empty_state(
            "calendar-x",
            "No tienes reservas activas",
            &EmptyHint::Navigate {
                hint: "Visita el catálogo para hacer una reserva",
                href: CONFIG.routes.catalog.clone(),
                label: "Ir al Catálogo",
            },
        );
    }
    Markup::concat(mine.into_iter().map(|reservation| render_reservation_card(reservation, now)))
}

pub fn render_reservation_card(reservation: &Reservation, now: NaiveDateTime) -> Markup {
    let mut details = ElementBuilder::new("div")
        .class("row text-muted small")
        .child(detail("book", "Libro ID:", &reservation.libro_id.to_string()))
        .child(detail("calendar", "Fecha reserva:", &format_short_date(reservation.fecha_reserva.date())))
        .child(detail("clock", "Vence:", &format_short_date(reservation.fecha_vencimiento.date())))
        .child(
            ElementBuilder::new("div")
                .class("col-sm-6 mb-2")
                .child(badge(reservation_status_badge(&reservation.estado), reservation.estado.as_str()))
                .build(),
        );

    if reservation.is_expiring(now, CONFIG.loan_config.expiring_threshold_days) {
        details = details.child(
            ElementBuilder::new("div")
                .class("col-12 mt-2")
                .child(
                    ElementBuilder::new("span")
                        .class("badge bg-warning text-dark expiring-badge")
                        .child(icon("exclamation-triangle", "me-1"))
                        .text("Próxima a vencer")
                        .build(),
                )
                .build(),
        );
    }

    let action = if reservation.is_active() {
        action_button(ActionKind::Cancel, reservation.id, "btn btn-danger btn-sm", "x-circle", "Cancelar", true)
    } else {
        ElementBuilder::new("span")
            .class("text-muted fst-italic")
            .text(reservation.estado.as_str())
            .build()
    };

    let row = ElementBuilder::new("div")
        .class("row align-items-center")
        .child(
            ElementBuilder::new("div")
                .class("col-md-8")
                .child(
                    ElementBuilder::new("h5")
                        .class("card-title fw-bold text-primary")
                        .text(&format!("Reserva #{}", reservation.id))
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
                .add_class(RESERVATION_CARD_CLASS)
                .attr("data-reservation-id", &reservation.id.to_string())
                .child(ElementBuilder::new("div").class("card-body").child(row).build())
                .build(),
        )
        .build()
}

fn detail(icon_name: &str, label: &str, value: &str) -> Markup {
    ElementBuilder::new("div")
        .class("col-sm-6 mb-2")
        .child(icon(icon_name, "me-1"))
        .child(ElementBuilder::new("strong").text(label).build())
        .text(&format!(" {}", value))
        .build()
}
