//! View renderers, one per route. Each is a pure function of the
//! loaded stores and the page's own UI state.

pub mod category;
pub mod contact;
pub mod error;
pub mod home;
pub mod product;
