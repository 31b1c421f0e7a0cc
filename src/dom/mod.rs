// ============================================================================
// DOM MODULE - Markup puro + helpers web-sys (solo wasm32)
// ============================================================================

pub mod builder;

#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;

pub use builder::*;

#[cfg(target_arch = "wasm32")]
pub use element::*;
#[cfg(target_arch = "wasm32")]
pub use events::*;
