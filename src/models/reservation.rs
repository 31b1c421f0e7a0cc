use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Estado de una reserva. Cualquier valor desconocido se conserva en `Unknown`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Activa,
    Cancelada,
    Completada,
    Vencida,
    Unknown(String),
}

impl From<String> for ReservationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "activa" => ReservationStatus::Activa,
            "cancelada" => ReservationStatus::Cancelada,
            "completada" => ReservationStatus::Completada,
            "vencida" => ReservationStatus::Vencida,
            _ => ReservationStatus::Unknown(value),
        }
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Activa => "activa",
            ReservationStatus::Cancelada => "cancelada",
            ReservationStatus::Completada => "completada",
            ReservationStatus::Vencida => "vencida",
            ReservationStatus::Unknown(raw) => raw,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Reservation {
    pub id: i64,
    pub usuario_id: i64,
    pub libro_id: i64,
    #[serde(with = "crate::models::dates")]
    pub fecha_reserva: NaiveDateTime,
    #[serde(with = "crate::models::dates")]
    pub fecha_vencimiento: NaiveDateTime,
    pub estado: ReservationStatus,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.estado == ReservationStatus::Activa
    }

    /// Días enteros (redondeando hacia arriba) hasta el vencimiento
    pub fn days_until_expiry(&self, now: NaiveDateTime) -> i64 {
        let millis = (self.fecha_vencimiento - now).num_milliseconds();
        let day = 24 * 60 * 60 * 1000;
        // ceil para enteros con signo
        millis.div_euclid(day) + i64::from(millis.rem_euclid(day) != 0)
    }

    /// Activa y vence en `threshold_days` días o menos. Se recalcula en cada render.
    pub fn is_expiring(&self, now: NaiveDateTime, threshold_days: i64) -> bool {
        self.is_active() && self.days_until_expiry(now) <= threshold_days
    }
}

/// Cuerpo de POST /reservations
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewReservation {
    pub usuario_id: i64,
    pub libro_id: i64,
}
