//! Body template rendering.
//!
//! Bodies are stored as static markdown with `{{key}}` placeholders, one per
//! Swagger URL key. Rendering happens once, when the catalog is built.

use crate::core::config::SwaggerUrls;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{key}}` placeholder with the configured URL for `key`.
///
/// A single left-to-right pass: inserted URLs are never scanned again, so a
/// configured value containing `{{...}}` lands in the body verbatim.
/// Placeholders whose key is not configured are left untouched.
pub fn render_body(template: &str, urls: &SwaggerUrls) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated placeholder
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match urls.get(key) {
            Some(url) => result.push_str(url),
            None => {
                result.push_str(OPEN);
                result.push_str(key);
                result.push_str(CLOSE);
            }
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    result.push_str(rest);
    result
}

/// Check whether a rendered body still contains a placeholder.
#[cfg(test)]
pub(crate) fn has_placeholders(body: &str) -> bool {
    body.contains(OPEN) && body.contains(CLOSE)
}
