// ============================================================================
// VIEWMODELS - Lógica de UI sin DOM
// ============================================================================

pub mod auth_viewmodel;
pub mod mutation_viewmodel;

pub use auth_viewmodel::{AuthViewModel, LoginOutcome, LogoutOutcome};
pub use mutation_viewmodel::{failure_message, MutationOutcome, MutationViewModel};
