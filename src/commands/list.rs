//! Implementation of `licensegen --list`.

use crate::license::catalog;

/// One supported license identifier per line, in catalog order.
pub fn catalog_listing() -> String {
    catalog().map(|id| format!("{}\n", id)).collect()
}
