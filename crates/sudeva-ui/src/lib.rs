//! Sudeva Engineers UI Components
//!
//! Dioxus building blocks shared by every section of the landing page.
//!
//! ## Look
//!
//! A light corporate palette:
//! - **Emerald (#065f46)**: brand colour, primary buttons, header links on hover
//! - **Slate (#0f172a / #475569)**: body text and muted copy
//! - **White**: page background and cards
//!
//! Class names are plain and semantic (`btn-primary`, `input-field`,
//! `status-line success`); the global stylesheet lives in the desktop crate.

pub mod components;

pub use components::*;
