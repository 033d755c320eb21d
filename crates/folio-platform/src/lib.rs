//! Host service abstractions for the folio terminal.
//!
//! The terminal core never touches a page directly. Scrolling sections into
//! view and opening external resources go through [`PageHost`]; timestamps go
//! through [`TimeService`].

mod host;
mod services;

pub use host::{MemoryHost, OpenTarget, PageHost};
pub use services::{DesktopClock, SystemTime, TimeService};
