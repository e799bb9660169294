use serde::{Deserialize, Deserializer};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request body is empty")]
    Empty,
    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Command body of the delete endpoint.
///
/// Missing or `null` fields decode as empty strings and unknown fields are
/// ignored; whether the values are acceptable is up to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteUrl {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub alias: String,
}

impl DeleteUrl {
    /// Decodes a raw request body.
    ///
    /// A body with no token at all (zero bytes or only JSON whitespace) is
    /// reported as [`DecodeError::Empty`], anything else that does not
    /// deserialize as [`DecodeError::Malformed`].
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        if body
            .iter()
            .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        {
            return Err(DecodeError::Empty);
        }

        serde_json::from_slice(body).map_err(Into::into)
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
