//! Custom field validators referenced from `#[validate(custom(...))]` attributes.

use std::borrow::Cow;

use validator::{ValidateUrl, ValidationError};

use crate::server::util::{parse::parse_release_date, slug::slugify};

/// Rejects names and slugs that normalize to an empty slug.
pub fn validate_sluggable(value: &str) -> Result<(), ValidationError> {
    if slugify(value).is_empty() {
        return Err(ValidationError::new("slug").with_message(Cow::from(
            "name must contain at least one letter or digit",
        )));
    }

    Ok(())
}

/// Accepts `YYYY-MM-DD` dates and RFC 3339 datetimes.
pub fn validate_release_date(value: &str) -> Result<(), ValidationError> {
    if parse_release_date(value).is_none() {
        return Err(ValidationError::new("release_date").with_message(Cow::from(
            "must be a YYYY-MM-DD date or an RFC 3339 datetime",
        )));
    }

    Ok(())
}

/// Requires every entry of an image list to be a URL.
pub fn validate_image_urls(urls: &[String]) -> Result<(), ValidationError> {
    if let Some(invalid) = urls.iter().find(|url| !url.validate_url()) {
        return Err(ValidationError::new("url")
            .with_message(Cow::from(format!("'{}' is not a valid URL", invalid))));
    }

    Ok(())
}
