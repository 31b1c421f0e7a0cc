// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod collection_state;
pub mod notification_state;
pub mod page_state;

pub use collection_state::*;
pub use notification_state::*;
pub use page_state::*;
