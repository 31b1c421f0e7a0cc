pub mod badges;
pub mod empty_state;
pub mod header;
pub mod notification;

pub use badges::*;
pub use empty_state::*;
pub use header::*;
pub use notification::*;
