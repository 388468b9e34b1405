//! License templates: the bundled catalog and placeholder rendering.
//!
//! Templates live under `licenses/LICENSE-<UPPERCASE-ID>` and are compiled
//! into the binary. Each may contain any number of `{year}`, `{name}` and
//! `{email}` tokens.

mod render;
mod store;

#[cfg(test)]
mod tests;

pub use render::{current_year, render};
pub use store::{catalog, load_template, resolve_identifier};
