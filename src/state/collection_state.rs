// ============================================================================
// COLLECTION STATE - Snapshot en memoria de una colección remota
// ============================================================================
// Siempre reemplazo completo: sin merge ni diff. Cargas concurrentes no se
// deduplican; gana la última respuesta en resolver.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiResult;
use crate::models::Collection;
use crate::services::ApiClient;

pub struct CollectionStore<E> {
    items: Rc<RefCell<Vec<E>>>,
    loaded: Rc<RefCell<bool>>,
}

impl<E> Clone for CollectionStore<E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            loaded: self.loaded.clone(),
        }
    }
}

impl<E: Collection> CollectionStore<E> {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
            loaded: Rc::new(RefCell::new(false)),
        }
    }

    /// GET completo y reemplazo del snapshot. En error el snapshot previo queda intacto.
    pub async fn load(&self, api: &ApiClient) -> ApiResult<usize> {
        let fresh = api.get_collection::<E>().await.map_err(|e| {
            log::error!("❌ [STORE] Error cargando {}: {}", E::NAME, e);
            e
        })?;
        let count = fresh.len();
        self.replace(fresh);
        log::info!("📋 [STORE] {} {} cargados", count, E::NAME);
        Ok(count)
    }

    /// Tras una mutación: misma operación que `load`
    pub async fn reload(&self, api: &ApiClient) -> ApiResult<usize> {
        self.load(api).await
    }

    pub fn replace(&self, items: Vec<E>) {
        *self.items.borrow_mut() = items;
        *self.loaded.borrow_mut() = true;
    }

    pub fn items(&self) -> Vec<E> {
        self.items.borrow().clone()
    }

    /// Solo los registros del usuario indicado (filtrado local)
    pub fn scoped(&self, user_id: i64) -> Vec<E> {
        self.items
            .borrow()
            .iter()
            .filter(|item| item.owner_id() == Some(user_id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }
}

impl<E: Collection> Default for CollectionStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
