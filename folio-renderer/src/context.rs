//! Template context — the JSON tree a render resolves paths against.

use serde::Serialize;
use serde_json::Value;

use crate::error::RenderError;
use crate::path::{resolve, Lookup};

/// Root data for a render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    root: Value,
}

impl TemplateContext {
    pub fn new(root: Value) -> Self {
        TemplateContext { root }
    }

    /// Build a context from any serializable value.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, RenderError> {
        Ok(TemplateContext { root: serde_json::to_value(data)? })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a dotted path against the root.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        resolve(&self.root, path)
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

impl From<Value> for TemplateContext {
    fn from(root: Value) -> Self {
        TemplateContext::new(root)
    }
}
