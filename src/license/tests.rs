//! Tests for the template store and renderer.

use crate::error::LicenseError;
use crate::license::{catalog, current_year, load_template, render, resolve_identifier};

const DECLARED_ORDER: [&str; 9] = [
    "Apache-2.0",
    "MIT",
    "ISC",
    "BSD-3-Clause",
    "BSD-2-Clause",
    "BSD-1-Clause",
    "Unlicense",
    "WTFPL",
    "GLWTPL",
];

#[test]
fn test_catalog_matches_declared_order() {
    let ids: Vec<_> = catalog().collect();
    assert_eq!(ids, DECLARED_ORDER);
}

#[test]
fn test_every_catalog_entry_has_a_template() {
    for id in catalog() {
        let text = load_template(id).unwrap();
        assert!(!text.trim().is_empty(), "{} template is empty", id);
    }
}

#[test]
fn test_load_template_is_case_insensitive() {
    let canonical = load_template("Apache-2.0").unwrap();
    assert_eq!(load_template("apache-2.0").unwrap(), canonical);
    assert_eq!(load_template("APACHE-2.0").unwrap(), canonical);
    assert_eq!(load_template("bsd-3-clause").unwrap(), load_template("BSD-3-Clause").unwrap());
}

#[test]
fn test_load_template_unknown_identifier() {
    let err = load_template("GPL-3.0").unwrap_err();
    assert!(matches!(err, LicenseError::TemplateNotFound(ref id) if id == "GPL-3.0"));
}

#[test]
fn test_rendered_templates_have_no_placeholders() {
    for id in catalog() {
        for email in ["", "ada@example.com"] {
            let text = render(load_template(id).unwrap(), 2024, "Ada Lovelace", email);
            for token in ["{year}", "{name}", "{email}"] {
                assert!(!text.contains(token), "{} still contains {}", id, token);
            }
        }
    }
}

#[test]
fn test_render_without_email_omits_markup() {
    let text = render("Copyright (c) {year} {name} {email}\n", 2024, "Ada Lovelace", "");
    assert_eq!(text, "Copyright (c) 2024 Ada Lovelace \n");
    assert!(!text.contains("<>"));
    assert!(!text.contains("{email}"));
}

#[test]
fn test_render_with_email_wraps_in_angle_brackets() {
    let text = render(load_template("MIT").unwrap(), 2024, "Ada Lovelace", "ada@example.com");
    assert!(text.contains("Copyright (c) 2024 Ada Lovelace <ada@example.com>"));
    assert!(!text.contains("{email}"));
}

#[test]
fn test_render_replaces_every_occurrence() {
    let text = render("{name} and {name} in {year}, {year}", 2031, "Ada", "");
    assert_eq!(text, "Ada and Ada in 2031, 2031");
}

#[test]
fn test_render_inserts_name_verbatim() {
    let text = render("[{name}]", 2024, "  O'Brien & <Co>  ", "");
    assert_eq!(text, "[  O'Brien & <Co>  ]");
}

#[test]
fn test_render_leaves_other_braces_alone() {
    let text = render("{year} {unknown} {{name}}", 2024, "Ada", "");
    assert_eq!(text, "2024 {unknown} {Ada}");
}

#[test]
fn test_unlicense_has_no_holder() {
    let template = load_template("Unlicense").unwrap();
    assert_eq!(render(template, 2024, "Ada", "ada@example.com"), template);
}

#[test]
fn test_current_year_is_four_digits() {
    let year = current_year();
    assert!((1000..=9999).contains(&year));
}

#[test]
fn test_resolve_identifier_canonicalises() {
    assert_eq!(resolve_identifier("mit").unwrap(), "MIT");
    assert_eq!(resolve_identifier(" unlicense ").unwrap(), "Unlicense");
    assert_eq!(resolve_identifier("BSD-2-CLAUSE").unwrap(), "BSD-2-Clause");
}

#[test]
fn test_resolve_identifier_lists_supported_on_error() {
    let err = resolve_identifier("GPL-3.0").unwrap_err();
    assert!(matches!(err, LicenseError::UnknownLicense { .. }));
    let msg = err.to_string();
    assert!(msg.contains("GPL-3.0"));
    assert!(msg.contains("Apache-2.0, MIT, ISC"));
}
