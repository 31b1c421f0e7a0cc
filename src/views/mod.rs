// ============================================================================
// VIEWS - Renderizado puro (datos → Markup)
// ============================================================================
// Ninguna vista toca el DOM ni la red; las páginas vuelcan el resultado.
// ============================================================================

pub mod actions;
pub mod catalog;
pub mod dashboard;
pub mod loans;
pub mod login;
pub mod reservations;
pub mod shared;

pub use actions::{action_button, ActionKind, UserAction};
pub use catalog::{filter_books, render_book_card, render_books};
pub use dashboard::{render_stats, DashboardStats};
pub use loans::{render_loan_card, render_loans};
pub use login::{render_logout_overlay, submit_button_label, FieldValidity, PasswordVisibility};
pub use reservations::{render_reservation_card, render_reservations};
