//! Practical-subset data model and deserializer for OpenAPI v3
//! specification documents.
//!
//! This crate maps the fields that spec inspectors, cross-spec correlators,
//! and generators actually read, and tolerates real-world documents whose
//! schema composition strays from the standard. It is not an authoritative
//! OpenAPI v3 implementation: there is no validation against the OpenAPI
//! JSON Schema, no `$ref` resolution (`$ref` values stay opaque strings),
//! and no write path back to JSON.
//!
//! Decoding is structural and all-or-nothing: one call, one document, one
//! [`Api`] tree or one [`ParseError`]. The returned tree is plain owned
//! data; nothing here mutates it afterwards, so independent parses can run
//! on separate threads without coordination.
//!
//! ## Usage
//!
//! ```no_run
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("openapi.json")?;
//! let api = oas3_model::from_reader(file)?;
//!
//! for (path, verb, method) in api.operations() {
//!   println!("{} {} ({})", verb.to_uppercase(), path, method.operation_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod parse;
pub mod spec;

pub use parse::{ParseError, from_reader, from_slice, from_str};
pub use spec::{
  Api, Content, Info, Item, Method, Parameter, Property, RequestBody, Response, Schema, Server,
  Type,
};
