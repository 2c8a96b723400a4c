//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - resolve shapes into GPU-ready vertices once, at record time
//! - keep draws in submission order (later draws paint over earlier ones)
//! - stay renderer-agnostic so recording is testable without a device

mod cmd;
mod list;

pub use cmd::{DrawCmd, Topology};
pub use list::DrawList;
