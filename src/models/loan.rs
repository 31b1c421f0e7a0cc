use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Estado de un préstamo. Cualquier valor desconocido se conserva en `Unknown`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanStatus {
    Activo,
    Devuelto,
    Vencido,
    Unknown(String),
}

impl From<String> for LoanStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "activo" => LoanStatus::Activo,
            "devuelto" => LoanStatus::Devuelto,
            "vencido" => LoanStatus::Vencido,
            _ => LoanStatus::Unknown(value),
        }
    }
}

impl From<LoanStatus> for String {
    fn from(status: LoanStatus) -> Self {
        status.as_str().to_string()
    }
}

impl LoanStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LoanStatus::Activo => "activo",
            LoanStatus::Devuelto => "devuelto",
            LoanStatus::Vencido => "vencido",
            LoanStatus::Unknown(raw) => raw,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Loan {
    pub id: i64,
    pub usuario_id: i64,
    pub libro_id: i64,
    #[serde(with = "crate::models::dates")]
    pub fecha_prestamo: NaiveDateTime,
    #[serde(with = "crate::models::dates")]
    pub fecha_devolucion_esperada: NaiveDateTime,
    #[serde(default, with = "crate::models::dates::option")]
    pub fecha_devolucion_real: Option<NaiveDateTime>,
    pub estado: LoanStatus,
    #[serde(default)]
    pub multa: f64,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.estado == LoanStatus::Activo
    }

    pub fn has_fine(&self) -> bool {
        self.multa > 0.0
    }
}

/// Cuerpo de POST /loans
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewLoan {
    pub usuario_id: i64,
    pub libro_id: i64,
    pub dias_prestamo: u32,
}
