//! The bundled template store.
//!
//! The table below is the single source of truth: the list offered to the
//! user is read from it, so every selectable license has a template.

use crate::error::{LicenseError, Result};

/// Bundled templates in the order they are offered to the user.
const TEMPLATES: &[(&str, &str)] = &[
    ("Apache-2.0", include_str!("../../licenses/LICENSE-APACHE-2.0")),
    ("MIT", include_str!("../../licenses/LICENSE-MIT")),
    ("ISC", include_str!("../../licenses/LICENSE-ISC")),
    ("BSD-3-Clause", include_str!("../../licenses/LICENSE-BSD-3-CLAUSE")),
    ("BSD-2-Clause", include_str!("../../licenses/LICENSE-BSD-2-CLAUSE")),
    ("BSD-1-Clause", include_str!("../../licenses/LICENSE-BSD-1-CLAUSE")),
    ("Unlicense", include_str!("../../licenses/LICENSE-UNLICENSE")),
    ("WTFPL", include_str!("../../licenses/LICENSE-WTFPL")),
    ("GLWTPL", include_str!("../../licenses/LICENSE-GLWTPL")),
];

/// Supported license identifiers, in display order.
pub fn catalog() -> impl ExactSizeIterator<Item = &'static str> {
    TEMPLATES.iter().map(|(id, _)| *id)
}

/// Load the template text for `identifier`, matched case-insensitively.
pub fn load_template(identifier: &str) -> Result<&'static str> {
    let wanted = identifier.to_uppercase();
    let (id, text) = TEMPLATES
        .iter()
        .find(|(id, _)| id.to_uppercase() == wanted)
        .ok_or_else(|| LicenseError::TemplateNotFound(identifier.to_string()))?;

    let resource = format!("LICENSE-{}", wanted);
    tracing::debug!(license = *id, %resource, "template loaded");
    Ok(*text)
}

/// Map user input such as `mit` or `apache-2.0` to its catalog spelling.
pub fn resolve_identifier(input: &str) -> Result<&'static str> {
    let wanted = input.trim().to_uppercase();
    catalog()
        .find(|id| id.to_uppercase() == wanted)
        .ok_or_else(|| LicenseError::UnknownLicense {
            id: input.to_string(),
            supported: catalog().collect::<Vec<_>>().join(", "),
        })
}
