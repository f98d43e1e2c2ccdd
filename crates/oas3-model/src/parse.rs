//! Single-shot structural decode of an OpenAPI v3 JSON document.
//!
//! One operation, all-or-nothing: either the whole document decodes into an
//! [`Api`] tree or a [`ParseError`] reports where decoding stopped. There is
//! no partial recovery, no `$ref` dereferencing, and no second pass.

use std::io::{BufReader, Read};

use crate::spec::Api;

/// Failure to decode an input stream into an [`Api`].
///
/// Covers both malformed JSON and well-formed JSON whose shape does not
/// match the target field (an array where an object was expected, and so
/// on). The path names the offending region of the document; line and
/// column live on the underlying decoder error.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
  #[error("JSON deserialization error at {path}: {source}")]
  Json { path: String, source: serde_json::Error },
}

impl ParseError {
  /// Dotted path to the input region that failed to decode, e.g.
  /// `paths./accounts.get.parameters`. `.` alone means the document root.
  #[must_use]
  pub fn path(&self) -> &str {
    match self {
      Self::Json { path, .. } => path,
    }
  }
}

/// Deserializes one OpenAPI v3 JSON document from a reader.
///
/// The reader is buffered internally; EOF marks the end of the document and
/// any bytes past the closing value are left unread. Fields missing from the
/// input are left at their default state per the [`spec`](crate::spec)
/// module.
pub fn from_reader<R: Read>(reader: R) -> Result<Api, ParseError> {
  let mut de = serde_json::Deserializer::from_reader(BufReader::new(reader));
  decode(&mut de)
}

/// Deserializes one OpenAPI v3 JSON document from a string.
pub fn from_str(input: &str) -> Result<Api, ParseError> {
  let mut de = serde_json::Deserializer::from_str(input);
  decode(&mut de)
}

/// Deserializes one OpenAPI v3 JSON document from a byte slice.
pub fn from_slice(input: &[u8]) -> Result<Api, ParseError> {
  let mut de = serde_json::Deserializer::from_slice(input);
  decode(&mut de)
}

fn decode<'de, D>(deserializer: D) -> Result<Api, ParseError>
where
  D: serde::Deserializer<'de, Error = serde_json::Error>,
{
  match serde_path_to_error::deserialize::<_, Api>(deserializer) {
    Ok(api) => {
      log::debug!(
        "parsed OpenAPI document: version {:?}, {} paths, {} component groups",
        api.version,
        api.paths.len(),
        api.components.len()
      );
      Ok(api)
    }
    Err(err) => {
      let path = err.path().to_string();
      log::debug!("OpenAPI deserialization failed at {path}");
      Err(ParseError::Json { path, source: err.into_inner() })
    }
  }
}
