//! Rendering of request validation failures into client-facing messages.

use validator::{ValidationError, ValidationErrors};

/// Flattens field errors into a single message such as
/// `Validation failed: name: must be between 1 and 100 characters; rating: must be between 0 and 5`.
///
/// Fields are reported in alphabetical order using their camelCase JSON names so the
/// message lines up with the request body the client sent.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(describe_error)
                .collect::<Vec<_>>()
                .join(", ");

            (to_camel_case(&field), messages)
        })
        .collect();

    fields.sort();

    let details = fields
        .into_iter()
        .map(|(field, messages)| format!("{}: {}", field, messages))
        .collect::<Vec<_>>()
        .join("; ");

    format!("Validation failed: {}", details)
}

fn describe_error(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let param = |key: &str| error.params.get(key).map(|value| value.to_string());

    match error.code.as_ref() {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {} characters", min, max),
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            (None, None) => "has an invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {}", min),
            (None, Some(max)) => format!("must be at most {}", max),
            (None, None) => "is out of range".to_string(),
        },
        "url" => "must be a valid URL".to_string(),
        "email" => "must be a valid email address".to_string(),
        code => format!("is invalid ({})", code),
    }
}

fn to_camel_case(field: &str) -> String {
    let mut camel = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            camel.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }

    camel
}
