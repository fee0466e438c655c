//! Image references and outbound links stored on records.
//!
//! Images live in an external blob store. Records keep whatever reference
//! the store handed back: an absolute URL, a path relative to the site root
//! (`/menu-items/1700000000-cay.jpg`) or an inline `data:image/...` URI.

use validator::ValidateUrl;

use crate::error::CoreError;

fn is_web_url(value: &str) -> bool {
    (value.starts_with("https://") || value.starts_with("http://"))
        && value.to_owned().validate_url()
}

/// Whether `value` is a usable image reference.
pub fn is_image_ref(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if let Some(inline) = value.strip_prefix("data:image/") {
        return inline.contains(',');
    }
    if let Some(path) = value.strip_prefix('/') {
        // `//host/...` is protocol-relative, not a site path.
        return !path.is_empty() && !path.starts_with('/');
    }
    is_web_url(value)
}

pub fn validate_image_ref(field: &str, value: &str) -> Result<(), CoreError> {
    if is_image_ref(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field}: expected an absolute URL, a site path or a data:image URI"
        )))
    }
}

/// Validate an outbound link such as a maps URL. Only `http(s)` is accepted.
pub fn validate_web_link(field: &str, value: &str) -> Result<(), CoreError> {
    if is_web_url(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("{field}: '{value}' is not a valid URL")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_blob_store_references() {
        assert!(is_image_ref("/menu-items/1700000000-cay.jpg"));
        assert!(is_image_ref("https://cdn.example.com/a.jpg"));
        assert!(is_image_ref("data:image/png;base64,iVBORw0KGgo="));
    }

    #[test]
    fn rejects_other_strings() {
        assert!(!is_image_ref(""));
        assert!(!is_image_ref("/"));
        assert!(!is_image_ref("//evil.example/a.jpg"));
        assert!(!is_image_ref("javascript:alert(1)"));
        assert!(!is_image_ref("data:text/html,<b>x</b>"));
        assert!(!is_image_ref("cay.jpg"));
        assert!(!is_image_ref("/menu items/a.jpg"));
        assert_matches!(
            validate_image_ref("image_url", "cay.jpg"),
            Err(CoreError::Validation(msg)) if msg.starts_with("image_url")
        );
    }

    #[test]
    fn web_links_must_be_http() {
        assert!(validate_web_link("google_maps_url", "https://maps.app.goo.gl/abc").is_ok());
        assert!(validate_web_link("google_maps_url", "/maps").is_err());
        assert!(validate_web_link("google_maps_url", "ftp://example.com").is_err());
    }
}
