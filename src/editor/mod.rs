pub mod ipc;
pub mod list;
pub mod path;
pub mod reducer;
pub mod session;

pub use reducer::{LayoutAction, LayoutReducer, LayoutState, MetaForm};
pub use session::{ApplyReport, Session};
