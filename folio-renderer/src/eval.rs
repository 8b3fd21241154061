//! Template evaluation.
//!
//! [`render`] evaluates every directive in one walk of the parsed tree.
//! Variables resolve against the root first, even inside loop bodies; a
//! variable the root cannot resolve falls back to the current loop element.
//! Loops and conditionals resolve against the innermost context.
//! The three single-pass operations evaluate one directive kind and re-emit
//! the others verbatim, so they can be applied one after another.
//!
//! Missing data never fails a render:
//! - an unresolved variable keeps its `{{path}}` text;
//! - a loop over a missing or non-sequence value renders nothing;
//! - a conditional over a missing value takes the else branch.

use std::fmt::Write as _;

use serde_json::Value;

use crate::parser::{parse, write_source_all, Node};
use crate::path::{resolve, Lookup};

/// Which directive kinds an evaluation interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passes {
    pub variables: bool,
    pub loops: bool,
    pub conditionals: bool,
}

impl Passes {
    pub const ALL: Passes = Passes { variables: true, loops: true, conditionals: true };
    pub const VARIABLES: Passes = Passes { variables: true, loops: false, conditionals: false };
    pub const LOOPS: Passes = Passes { variables: false, loops: true, conditionals: false };
    pub const CONDITIONALS: Passes = Passes { variables: false, loops: false, conditionals: true };
    pub const NONE: Passes = Passes { variables: false, loops: false, conditionals: false };
}

/// A parsed template borrowing its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Self {
        Template { nodes: parse(source) }
    }

    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    /// Evaluate every directive against `data`.
    pub fn render(&self, data: &Value) -> String {
        self.render_passes(data, Passes::ALL)
    }

    /// Evaluate only the directive kinds enabled in `passes`.
    pub fn render_passes(&self, data: &Value, passes: Passes) -> String {
        let mut out = String::new();
        eval_nodes(&self.nodes, Scope::root(data), passes, &mut out);
        out
    }
}

/// Render `template` against `data`.
pub fn render(template: &str, data: &Value) -> String {
    Template::parse(template).render(data)
}

/// Replace `{{path}}` tags the root resolves, including those inside loop
/// bodies; every block tag is kept.
pub fn substitute_variables(template: &str, data: &Value) -> String {
    Template::parse(template).render_passes(data, Passes::VARIABLES)
}

/// Expand `{{#name}}...{{/name}}` blocks. Bodies are fully rendered per element.
pub fn process_loops(template: &str, data: &Value) -> String {
    Template::parse(template).render_passes(data, Passes::LOOPS)
}

/// Resolve `{{#if path}}...{{else}}...{{/if}}` blocks outside loops,
/// including conditionals nested inside the chosen branch.
pub fn process_conditionals(template: &str, data: &Value) -> String {
    Template::parse(template).render_passes(data, Passes::CONDITIONALS)
}

// ---------------------------------------------------------------------------
// Tree walk
// ---------------------------------------------------------------------------

/// Contexts visible at a point in the walk. Variables try the root first and
/// fall back to the loop element; loops and conditionals use the innermost.
#[derive(Debug, Clone, Copy)]
struct Scope<'v> {
    root: &'v Value,
    element: Option<&'v Value>,
}

impl<'v> Scope<'v> {
    fn root(root: &'v Value) -> Self {
        Scope { root, element: None }
    }

    fn with_element(self, element: &'v Value) -> Self {
        Scope { element: Some(element), ..self }
    }

    fn current(&self) -> &'v Value {
        self.element.unwrap_or(self.root)
    }

    fn write_variable(&self, path: &str, out: &mut String) -> bool {
        write_value(resolve(self.root, path), out)
            || self
                .element
                .is_some_and(|element| write_value(resolve(element, path), out))
    }
}

fn eval_nodes(nodes: &[Node<'_>], scope: Scope<'_>, passes: Passes, out: &mut String) {
    for node in nodes {
        eval_node(node, scope, passes, out);
    }
}

fn eval_node(node: &Node<'_>, scope: Scope<'_>, passes: Passes, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),

        Node::Variable { raw, path } => {
            if !passes.variables || !scope.write_variable(path, out) {
                out.push_str(raw);
            }
        }

        Node::Loop { name, body, .. } if passes.loops => {
            if let Lookup::Found(Value::Array(items)) = resolve(scope.current(), name) {
                for item in items {
                    eval_nodes(body, scope.with_element(item), Passes::ALL, out);
                }
            }
        }
        // Only root-resolvable variables are filled in ahead of expansion.
        Node::Loop { open, body, close, .. } => {
            out.push_str(open);
            let inner = Passes { variables: passes.variables, ..Passes::NONE };
            eval_nodes(body, scope, inner, out);
            out.push_str(close);
        }

        Node::Conditional {
            path,
            then_branch,
            else_branch,
            ..
        } if passes.conditionals => {
            if resolve(scope.current(), path).is_truthy() {
                eval_nodes(then_branch, scope, passes, out);
            } else if let Some(branch) = else_branch {
                eval_nodes(&branch.body, scope, passes, out);
            }
        }
        Node::Conditional {
            open,
            then_branch,
            else_branch,
            close,
            ..
        } => {
            out.push_str(open);
            eval_nodes(then_branch, scope, passes, out);
            if let Some(branch) = else_branch {
                out.push_str(branch.tag);
                eval_nodes(&branch.body, scope, passes, out);
            }
            out.push_str(close);
        }
    }
}

/// Write the string form of a resolved value. Returns `false` when the value
/// is not substitutable (missing or a mapping).
fn write_value(lookup: Lookup<'_>, out: &mut String) -> bool {
    let Some(value) = lookup.value() else {
        return false;
    };
    if value.is_object() {
        return false;
    }
    write_display(value, out);
    true
}

/// Scalars print as themselves; sequences join their elements with `,`.
/// Inside a sequence, `null` and mappings print as nothing.
fn write_display(value: &Value, out: &mut String) {
    write_item(value, out, false);
}

fn write_item(value: &Value, out: &mut String, nested: bool) {
    match value {
        Value::Null if !nested => out.push_str("null"),
        Value::String(s) => out.push_str(s),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_item(item, out, true);
            }
        }
        Value::Null | Value::Object(_) => {}
    }
}

/// Original source text of a node list.
pub fn source_text(nodes: &[Node<'_>]) -> String {
    let mut out = String::new();
    write_source_all(nodes, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hello_variable() {
        assert_eq!(render("Hello {{name}}", &json!({ "name": "Ada" })), "Hello Ada");
    }

    #[test]
    fn numbers_and_booleans_stringify() {
        let data = json!({ "n": 42, "f": 1.5, "b": true });
        assert_eq!(render("{{n}}/{{f}}/{{b}}", &data), "42/1.5/true");
    }

    #[test]
    fn sequences_join_with_commas() {
        let data = json!({ "tags": ["rust", "go", null, 3] });
        assert_eq!(render("{{tags}}", &data), "rust,go,,3");
    }

    #[test]
    fn null_prints_and_mappings_keep_the_token() {
        let data = json!({ "x": null, "m": { "k": 1 } });
        assert_eq!(render("[{{x}}] {{m}}", &data), "[null] {{m}}");
    }

    #[test]
    fn top_level_dot_keeps_the_token() {
        assert_eq!(render("{{.}}", &json!({ "a": 1 })), "{{.}}");
    }

    #[test]
    fn primitive_loop_uses_dot() {
        let data = json!({ "items": ["a", "b"] });
        assert_eq!(render("{{#items}}[{{.}}]{{/items}}", &data), "[a][b]");
    }

    #[test]
    fn loop_bodies_see_root_paths_first() {
        let data = json!({
            "personalInfo": { "name": "Ada" },
            "socialLinks": [{ "url": "u" }, { "url": "v" }]
        });
        assert_eq!(
            render(
                "{{#socialLinks}}{{personalInfo.name}}@{{url}};{{/socialLinks}}",
                &data
            ),
            "Ada@u;Ada@v;"
        );
    }

    #[test]
    fn root_keys_shadow_element_keys() {
        let data = json!({ "name": "root", "xs": [{ "name": "a" }, {}] });
        assert_eq!(render("{{#xs}}{{name}};{{/xs}}", &data), "root;root;");
    }

    #[test]
    fn element_fallback_keeps_missing_tokens() {
        let data = json!({ "tags": [{ "name": "X" }, {}] });
        assert_eq!(render("{{#tags}}{{name}},{{/tags}}", &data), "X,{{name}},");
    }

    #[test]
    fn root_null_inside_loop_prints_null() {
        let data = json!({ "x": null, "xs": [{ "x": "e" }] });
        assert_eq!(render("{{#xs}}{{x}}{{/xs}}", &data), "null");
    }

    #[test]
    fn conditional_inside_loop_uses_element() {
        let data = json!({ "xs": [{ "link": "u" }, { "link": "" }] });
        assert_eq!(
            render("{{#xs}}{{#if link}}<{{link}}>{{else}}-{{/if}}{{/xs}}", &data),
            "<u>-"
        );
    }

    #[test]
    fn substitute_variables_leaves_element_paths_for_loops() {
        let data = json!({ "a": "A", "xs": [{ "v": 1 }] });
        let staged = substitute_variables("{{#xs}}{{a}}{{v}}{{/xs}}", &data);
        assert_eq!(staged, "{{#xs}}A{{v}}{{/xs}}");
        assert_eq!(process_loops(&staged, &data), "A1");
    }

    #[test]
    fn substitute_variables_keeps_blocks() {
        let data = json!({ "a": "A", "t": true, "xs": [1] });
        assert_eq!(
            substitute_variables("{{a}}{{#if t}}{{a}}{{/if}}{{#xs}}{{a}}{{/xs}}", &data),
            "A{{#if t}}A{{/if}}{{#xs}}A{{/xs}}"
        );
    }

    #[test]
    fn process_loops_leaves_outer_variables() {
        let data = json!({ "a": "A", "xs": ["x"] });
        assert_eq!(
            process_loops("{{a}}{{#xs}}{{.}}{{/xs}}", &data),
            "{{a}}x"
        );
    }

    #[test]
    fn process_conditionals_leaves_loops_verbatim() {
        let data = json!({ "t": 1, "xs": [] });
        assert_eq!(
            process_conditionals("{{#if t}}{{#xs}}{{#if t}}y{{/if}}{{/xs}}{{/if}}", &data),
            "{{#xs}}{{#if t}}y{{/if}}{{/xs}}"
        );
    }

    #[test]
    fn passes_compose_to_a_full_render() {
        let data = json!({
            "name": "Ada",
            "show": true,
            "xs": [{ "v": 1 }, { "v": 2 }]
        });
        let template = "{{name}}:{{#xs}}{{v}}{{/xs}}{{#if show}}!{{else}}?{{/if}}";
        let staged = process_conditionals(
            &process_loops(&substitute_variables(template, &data), &data),
            &data,
        );
        assert_eq!(staged, render(template, &data));
        assert_eq!(staged, "Ada:12!");
    }

    #[test]
    fn template_round_trips_source() {
        let src = "x {{#if a}}{{b}}{{else}}c{{/if}} {{#d}}{{/d}}";
        assert_eq!(source_text(Template::parse(src).nodes()), src);
    }
}
