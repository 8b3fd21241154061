//! # folio-renderer
//!
//! A small logic-light template engine for rendering a portfolio site (or any
//! text output) from a JSON data document.
//!
//! ## Grammar
//!
//! | Form        | Syntax                                       |
//! |-------------|----------------------------------------------|
//! | Variable    | `{{dotted.path}}`                            |
//! | Loop        | `{{#dotted.path}} ... {{/dotted.path}}`      |
//! | Conditional | `{{#if dotted.path}} ... {{else}} ... {{/if}}` |
//! | Current     | `{{.}}` inside a loop over primitives        |
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//!
//! let data = json!({ "name": "Ada", "tags": ["math", "poetry"] });
//! let out = folio_renderer::render("{{name}}: {{#tags}}[{{.}}]{{/tags}}", &data);
//! assert_eq!(out, "Ada: [math][poetry]");
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod path;

pub use context::TemplateContext;
pub use engine::TemplateEngine;
pub use error::RenderError;
pub use eval::{process_conditionals, process_loops, render, substitute_variables, Passes, Template};
pub use path::{resolve, Lookup};
