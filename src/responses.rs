use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Envelope returned for every outcome of the delete endpoint.
///
/// Either `status` is `OK` and `alias` is set, or `status` is `Error` and
/// `error` is set. The constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
}

impl Response {
    pub fn ok(alias: String) -> Self {
        Self {
            status: Status::Ok,
            error: None,
            alias: Some(alias),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
            alias: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_keeps_empty_alias() {
        let body = serde_json::to_string(&Response::ok(String::new())).unwrap();

        assert_eq!(body, r#"{"status":"OK","alias":""}"#);
    }

    #[test]
    fn error_omits_alias() {
        let body = serde_json::to_string(&Response::error("empty request")).unwrap();

        assert_eq!(body, r#"{"status":"Error","error":"empty request"}"#);
    }
}
