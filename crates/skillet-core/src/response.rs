//! The uniform result envelope returned by every service operation.
//!
//! Status tags are transport-free; the serving layer alone decides what they
//! mean on the wire.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    Created,
    NoContent,
    NotFound,
    BadRequest,
    NotAcceptable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// A coded, human-readable outcome description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Message {
    pub code: String,
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn info(code: &str) -> Self {
        Self {
            code: code.to_string(),
            text: catalog_text(code),
            severity: Severity::Info,
        }
    }

    pub fn error(code: &str) -> Self {
        Self {
            code: code.to_string(),
            text: catalog_text(code),
            severity: Severity::Error,
        }
    }
}

/// Default texts for the known message codes. An unknown code falls back to
/// the code itself so a response never goes out without a readable message.
fn catalog_text(code: &str) -> String {
    match code {
        "success.findAll" => "Recipes listed",
        "success.Save" => "Recipe created",
        "error.Save" => "Recipe could not be saved",
        "success.Update" => "Recipe updated",
        "error.Update" => "Recipe could not be updated",
        "error.UpdateNoData" => "No recipe found with the given id",
        "error.IdMismatch" => "Recipe id in the body does not match the path",
        "success.Delete" => "Recipe deleted",
        "error.Delete" => "Recipe could not be deleted",
        "error.DeleteNoData" => "No recipe found with the given id",
        "success.Find" => "Recipe found",
        "error.Find" => "Recipe could not be fetched",
        "error.FindNoData" => "No recipe found with the given id",
        "success.Search" => "Recipes searched",
        "error.Search" => "Search criteria could not be applied",
        "error.findAll" => "Recipes could not be listed",
        other => return other.to_string(),
    }
    .to_string()
}

/// Envelope carried by every service response: payload, status tag, message.
/// Constructed once per operation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestResponse<T> {
    pub data: Option<T>,
    pub status: ResponseStatus,
    pub message: Message,
}

impl<T> RestResponse<T> {
    pub fn of(data: T, status: ResponseStatus, message: Message) -> Self {
        Self {
            data: Some(data),
            status,
            message,
        }
    }

    pub fn empty(status: ResponseStatus, message: Message) -> Self {
        Self {
            data: None,
            status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_screaming_snake_case() {
        let rendered = serde_json::to_value(ResponseStatus::NoContent).unwrap();
        assert_eq!(rendered, serde_json::json!("NO_CONTENT"));
        let rendered = serde_json::to_value(ResponseStatus::NotAcceptable).unwrap();
        assert_eq!(rendered, serde_json::json!("NOT_ACCEPTABLE"));
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = RestResponse::of(
            vec!["x".to_string()],
            ResponseStatus::Ok,
            Message::info("success.findAll"),
        );
        let rendered = serde_json::to_value(&envelope).unwrap();

        assert_eq!(rendered["status"], "OK");
        assert_eq!(rendered["message"]["severity"], "info");
        assert_eq!(rendered["message"]["code"], "success.findAll");
        assert_eq!(rendered["data"][0], "x");
    }

    #[test]
    fn test_unknown_code_falls_back_to_itself() {
        let message = Message::error("error.Nonesuch");
        assert_eq!(message.text, "error.Nonesuch");
    }
}
