use chrono::{Datelike, Local};

const YEAR: &str = "{year}";
const NAME: &str = "{name}";
const EMAIL: &str = "{email}";

/// Fill the `{year}`, `{name}` and `{email}` placeholders of a license template.
///
/// Every occurrence is replaced, in the order year, name, email. The name is
/// inserted verbatim. A non-empty email is wrapped as `<email>`; an empty one
/// removes the token without leaving brackets behind.
///
/// ```ignore
/// let text = render("Copyright {year} {name} {email}", 2024, "Ada", "ada@example.com");
/// assert_eq!(text, "Copyright 2024 Ada <ada@example.com>");
/// ```
pub fn render(template: &str, year: i32, name: &str, email: &str) -> String {
    let email = if email.is_empty() {
        String::new()
    } else {
        format!("<{}>", email)
    };

    template
        .replace(YEAR, &year.to_string())
        .replace(NAME, name)
        .replace(EMAIL, &email)
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}
