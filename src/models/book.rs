use serde::{Deserialize, Serialize};

/// Libro del catálogo (snapshot de solo lectura)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Book {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub autor_id: Option<i64>,
    pub categoria: String,
    pub isbn: String,
    #[serde(rename = "año_publicacion")]
    pub anio_publicacion: i32,
    pub editorial: String,
    pub ejemplares_disponibles: u32,
    #[serde(default)]
    pub ejemplares_totales: Option<u32>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.ejemplares_disponibles > 0
    }

    /// Coincidencia (sin mayúsculas) en título, categoría o editorial
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.titulo.to_lowercase().contains(&term)
            || self.categoria.to_lowercase().contains(&term)
            || self.editorial.to_lowercase().contains(&term)
    }
}
