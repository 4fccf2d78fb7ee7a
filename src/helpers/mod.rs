//! Helper functions for templates
//!
//! Escaping, date formats and the URL resolvers that templates would
//! otherwise reach for as globals.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
