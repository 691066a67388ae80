//! Pages. The site is a single scrolling page.

mod landing;

pub use landing::Landing;
