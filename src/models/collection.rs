use serde::de::DeserializeOwned;

use crate::models::{Book, Loan, Reservation};

/// Una de las colecciones remotas (libros, préstamos, reservas)
pub trait Collection: Clone + DeserializeOwned + 'static {
    /// Nombre para logs y mensajes
    const NAME: &'static str;

    /// Endpoint relativo al API root
    const PATH: &'static str;

    /// Mensaje visible cuando falla la carga
    const LOAD_ERROR: &'static str;

    /// Usuario dueño del registro, si la colección es por usuario
    fn owner_id(&self) -> Option<i64> {
        None
    }
}

impl Collection for Book {
    const NAME: &'static str = "libros";
    const PATH: &'static str = "/books";
    const LOAD_ERROR: &'static str = "Error al cargar los libros";
}

impl Collection for Loan {
    const NAME: &'static str = "préstamos";
    const PATH: &'static str = "/loans";
    const LOAD_ERROR: &'static str = "Error al cargar los préstamos";

    fn owner_id(&self) -> Option<i64> {
        Some(self.usuario_id)
    }
}

impl Collection for Reservation {
    const NAME: &'static str = "reservas";
    const PATH: &'static str = "/reservations";
    const LOAD_ERROR: &'static str = "Error al cargar las reservas";

    fn owner_id(&self) -> Option<i64> {
        Some(self.usuario_id)
    }
}
