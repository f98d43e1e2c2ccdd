//! Typed records mirroring the OpenAPI v3 JSON shape.
//!
//! This is a specific-use-case subset, not an authoritative model of the
//! OpenAPI v3 specification structure. Every field is individually optional:
//! a key missing from the input leaves the field at its `Default` value, and
//! unmapped keys (vendor `x-` extensions and anything else) are ignored.
//!
//! The same semantic concept ("what value does this accept") appears at
//! different nesting depths in OpenAPI documents, so three leaf shapes
//! cooperate instead of one recursive schema type: [`Property`] describes a
//! field of a named [`Type`], [`Schema`] describes a parameter value, media
//! type content, or a property's array element, and [`Item`] describes an
//! array element at the deepest observed level. They duplicate the
//! `type`/`$ref`/`enum` fields; collapsing them would lose the fixed shape
//! that lets a structural decode absorb arrays-of-objects-with-arrays.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of a parsed OpenAPI v3 specification document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Api {
  /// OpenAPI semantic version, from the top-level `openapi` key.
  #[serde(default, rename = "openapi")]
  pub version: String,

  /// Meta-information about the API.
  #[serde(default)]
  pub info: Info,

  /// Servers the API may be reachable from, in preference order.
  #[serde(default)]
  pub servers: Vec<Server>,

  /// Paths the API serves, keyed by path and then by HTTP verb.
  #[serde(default)]
  pub paths: IndexMap<String, IndexMap<String, Method>>,

  /// Named component schemas, keyed by group (usually `schemas`) then name.
  #[serde(default)]
  pub components: IndexMap<String, IndexMap<String, Type>>,
}

impl Api {
  /// Iterates every operation as a `(path, verb, method)` triple in
  /// document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Method)> {
    self.paths.iter().flat_map(|(path, methods)| {
      methods
        .iter()
        .map(move |(verb, method)| (path.as_str(), verb.as_str(), method))
    })
  }

  /// The `components.schemas` group, the one `$ref` strings usually point
  /// into. Reference resolution itself is left to the caller.
  #[must_use]
  pub fn component_schemas(&self) -> Option<&IndexMap<String, Type>> {
    self.components.get("schemas")
  }
}

/// Meta-information about the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
}

/// A base URL the API is called from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Server {
  #[serde(default)]
  pub url: String,
}

/// One HTTP verb on one path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Method {
  /// Tags classifying the operation, in document order.
  #[serde(default)]
  pub tags: Vec<String>,

  // Summary and description overlap conceptually; real documents populate
  // either or both, and the consumer decides precedence.
  #[serde(default)]
  pub summary: String,
  #[serde(default)]
  pub description: String,

  /// Identifier for what the operation does.
  #[serde(default, rename = "operationId")]
  pub operation_id: String,

  /// Inputs the operation may be called with, in document order.
  #[serde(default)]
  pub parameters: Vec<Parameter>,

  /// Expected responses, keyed by HTTP status code.
  #[serde(default)]
  pub responses: IndexMap<String, Response>,

  /// Body of the request. `None` for verbs that carry no body, which is
  /// distinct from a present-but-empty body.
  #[serde(default, rename = "requestBody")]
  pub request_body: Option<RequestBody>,
}

/// One input to a [`Method`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Parameter {
  /// Parameter name, e.g. `accountId`.
  #[serde(default)]
  pub name: String,

  /// Where the parameter occurs in the HTTP call: `query`, `path`,
  /// `header`, or `cookie`.
  #[serde(default, rename = "in")]
  pub location: String,

  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub required: bool,

  /// Value scheme, inlined directly under the `schema` key. This level is
  /// the only one where the document flattens `schema` onto its parent.
  #[serde(default)]
  pub schema: Schema,
}

/// Body accepted by verbs such as POST.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestBody {
  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub content: Content,

  #[serde(default)]
  pub required: bool,
}

/// Expected result for one HTTP status code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
  #[serde(default)]
  pub description: String,

  #[serde(default)]
  pub content: Content,
}

/// Body content: media type to (`schema` to [`Schema`]). The inner key is
/// the literal `schema` in practice.
pub type Content = IndexMap<String, IndexMap<String, Schema>>;

/// A named component schema, the "object" super type.
///
/// Addressed by name from `$ref` strings elsewhere in the document; `$ref`
/// values stay opaque here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Type {
  /// Names of properties the component requires.
  #[serde(default)]
  pub required: Vec<String>,

  /// A value such as `object`.
  #[serde(default)]
  pub r#type: String,

  #[serde(default)]
  pub properties: IndexMap<String, Property>,
}

/// One field of a [`Type`].
///
/// `r#type` and `ref_path` are both optional and not mutually exclusive:
/// real documents have been observed carrying either, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Property {
  #[serde(default)]
  pub r#type: String,

  #[serde(default, rename = "$ref")]
  pub ref_path: String,

  /// Array element description, when the property is an array.
  #[serde(default)]
  pub items: Schema,

  #[serde(default)]
  pub format: String,

  #[serde(default)]
  pub nullable: bool,

  #[serde(default, rename = "enum")]
  pub enums: Vec<String>,
}

/// Value scheme for a parameter, media type content, or a property's array
/// element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
  /// Enumerated values the scheme allows, if any.
  #[serde(default, rename = "enum")]
  pub enums: Vec<String>,

  /// Array element description. Empty when the scheme is not an array.
  #[serde(default)]
  pub items: Item,

  #[serde(default)]
  pub r#type: String,

  /// Reference path. When omitted here it is often found on
  /// `items.ref_path` instead.
  #[serde(default, rename = "$ref")]
  pub ref_path: String,

  /// Default value of the scheme.
  #[serde(default)]
  pub default: String,
}

impl Schema {
  /// Whether this scheme describes an array: a populated `items` type or
  /// reference marks it as one.
  #[must_use]
  pub fn is_array(&self) -> bool {
    !self.items.r#type.is_empty() || !self.items.ref_path.is_empty()
  }
}

/// Description of one array element's value. Leaf level; nothing nests
/// below it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Item {
  #[serde(default, rename = "enum")]
  pub enums: Vec<String>,

  #[serde(default)]
  pub r#type: String,

  #[serde(default, rename = "$ref")]
  pub ref_path: String,
}
