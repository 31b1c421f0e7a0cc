// ============================================================================
// PAGE STATE - Estados de una página
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::PageView;

/// Unauthenticated→Redirected es terminal; el error visible vuelve a Ready
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Ready,
    Mutating,
    Redirected,
}

#[derive(Clone)]
pub struct PageState {
    status: Rc<RefCell<PageStatus>>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            status: Rc::new(RefCell::new(PageStatus::Loading)),
        }
    }

    pub fn status(&self) -> PageStatus {
        *self.status.borrow()
    }

    /// Ignorado tras una redirección
    pub fn set_status(&self, status: PageStatus) {
        let mut current = self.status.borrow_mut();
        if *current != PageStatus::Redirected {
            *current = status;
        }
    }

    pub fn is_redirected(&self) -> bool {
        self.status() == PageStatus::Redirected
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Muestra el indicador de carga y lo oculta al salir de scope, pase lo que pase
pub struct LoadingGuard<'a> {
    view: &'a dyn PageView,
}

impl<'a> LoadingGuard<'a> {
    pub fn start(view: &'a dyn PageView) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirected_is_terminal() {
        let state = PageState::new();
        assert_eq!(state.status(), PageStatus::Loading);
        state.set_status(PageStatus::Redirected);
        state.set_status(PageStatus::Ready);
        assert!(state.is_redirected());
    }
}
