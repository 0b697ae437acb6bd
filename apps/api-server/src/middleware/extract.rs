//! Extractor configuration - malformed bodies, query strings and paths become 422s.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, web};
use blog_shared::FieldError;

use super::error::AppError;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let field_error = match &err {
        JsonPayloadError::Deserialize(e) => {
            let msg = e.to_string();
            if let Some(field) = missing_field(&msg) {
                FieldError::new(["body", field], "Field required", "missing")
            } else {
                let kind = if e.is_data() { "value_error" } else { "json_invalid" };
                FieldError::new(["body"], msg, kind)
            }
        }
        JsonPayloadError::ContentType => FieldError::new(
            ["body"],
            "Expected a JSON body (Content-Type: application/json)",
            "content_type",
        ),
        other => FieldError::new(["body"], other.to_string(), "json_invalid"),
    };
    AppError::Validation(vec![field_error]).into()
}

const INT_PARSING: &str = "Input should be a valid integer, unable to parse string as an integer";

/// Paging parameters are the only typed query fields; name whichever failed to parse.
fn query_error(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let mut errors: Vec<FieldError> =
        web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map(|pairs| {
                pairs
                    .into_inner()
                    .into_iter()
                    .filter(|(name, value)| {
                        matches!(name.as_str(), "skip" | "limit") && value.parse::<i64>().is_err()
                    })
                    .map(|(name, _)| {
                        FieldError::new(["query".to_owned(), name], INT_PARSING, "int_parsing")
                    })
                    .collect()
            })
            .unwrap_or_default();
    if errors.is_empty() {
        errors.push(FieldError::new(["query"], err.to_string(), "int_parsing"));
    }
    AppError::Validation(errors).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> Error {
    let mut errors: Vec<FieldError> = req
        .match_info()
        .iter()
        .filter(|(_, value)| value.parse::<i32>().is_err())
        .map(|(name, _)| FieldError::new(["path", name], INT_PARSING, "int_parsing"))
        .collect();
    if errors.is_empty() {
        errors.push(FieldError::new(["path"], err.to_string(), "int_parsing"));
    }
    AppError::Validation(errors).into()
}

/// Extract `title` from serde_json's "missing field `title` at line 1 column 2".
fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_serde_message() {
        assert_eq!(
            missing_field("missing field `author` at line 1 column 40"),
            Some("author")
        );
        assert_eq!(missing_field("expected value at line 1 column 1"), None);
    }
}
