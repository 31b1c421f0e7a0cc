// ============================================================================
// NOTIFICATION STATE - Una sola alerta visible a la vez
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
    Info,
}

impl NotificationKind {
    /// Sufijo de la clase `alert-*`
    pub fn css_suffix(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Danger => "danger",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Danger, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }

    /// Los éxitos quedan hasta que el usuario los cierra; el resto se auto-elimina
    pub fn auto_dismiss_ms(&self, dismiss_after_ms: u32) -> Option<u32> {
        match self.kind {
            NotificationKind::Success => None,
            _ => Some(dismiss_after_ms),
        }
    }
}

/// Alerta actualmente visible. Mostrar una nueva descarta la anterior.
#[derive(Clone, Default)]
pub struct NotificationState {
    current: Rc<RefCell<Option<(u64, Notification)>>>,
    next_id: Rc<RefCell<u64>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza la alerta visible; devuelve el id de la nueva
    pub fn show(&self, notification: Notification) -> u64 {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        *self.current.borrow_mut() = Some((id, notification));
        id
    }

    /// Cierra la alerta solo si sigue siendo la misma (un timer viejo no borra una nueva)
    pub fn dismiss(&self, id: u64) -> bool {
        let mut current = self.current.borrow_mut();
        match current.as_ref() {
            Some((visible, _)) if *visible == id => {
                *current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().as_ref().map(|(_, n)| n.clone())
    }
}
