//! Reusable UI components
//!
//! Buttons, form fields, section headings, form status lines and tag pills.

mod button;
mod input;
mod section_header;
mod status_line;
mod tag_pill;

pub use button::*;
pub use input::*;
pub use section_header::*;
pub use status_line::*;
pub use tag_pill::*;
