// ============================================================================
// BADGES - Estado → variante visual
// ============================================================================
// Funciones totales: un estado desconocido nunca falla, usa FALLBACK_BADGE.
// ============================================================================

use crate::dom::{ElementBuilder, Markup};
use crate::models::{LoanStatus, ReservationStatus};

pub const FALLBACK_BADGE: &str = "bg-light text-dark";

pub fn loan_status_badge(status: &LoanStatus) -> &'static str {
    match status {
        LoanStatus::Activo => "bg-success",
        LoanStatus::Devuelto => "bg-secondary",
        LoanStatus::Vencido => "bg-danger",
        LoanStatus::Unknown(_) => FALLBACK_BADGE,
    }
}

pub fn reservation_status_badge(status: &ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Activa => "bg-warning text-dark",
        ReservationStatus::Cancelada => "bg-secondary",
        ReservationStatus::Completada => "bg-success",
        ReservationStatus::Vencida => "bg-danger",
        ReservationStatus::Unknown(_) => FALLBACK_BADGE,
    }
}

pub fn badge(variant: &str, text: &str) -> Markup {
    ElementBuilder::new("span")
        .class("badge")
        .add_class(variant)
        .text(text)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statuses_use_fallback() {
        assert_eq!(loan_status_badge(&LoanStatus::Unknown("perdido".into())), FALLBACK_BADGE);
        assert_eq!(
            reservation_status_badge(&ReservationStatus::Unknown(String::new())),
            FALLBACK_BADGE
        );
    }

    #[test]
    fn known_statuses_map_to_fixed_variants() {
        assert_eq!(loan_status_badge(&LoanStatus::Activo), "bg-success");
        assert_eq!(loan_status_badge(&LoanStatus::Vencido), "bg-danger");
        assert_eq!(reservation_status_badge(&ReservationStatus::Activa), "bg-warning text-dark");
        assert_eq!(reservation_status_badge(&ReservationStatus::Completada), "bg-success");
    }
}
