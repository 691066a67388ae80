//! Page sections and desktop-only building blocks.
//!
//! Generic widgets (buttons, inputs, headings) live in `sudeva-ui`.

mod about;
mod contact;
mod footer;
mod hero;
pub mod icons;
mod knowledge;
mod nav_header;
mod projects;
mod services;
pub mod site_image;
mod team;
mod why_us;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use knowledge::Knowledge;
pub use nav_header::NavHeader;
pub use projects::Projects;
pub use services::{Services, Showcase};
pub use team::Team;
pub use why_us::WhyUs;
