//! Template context and placeholder rendering.
//!
//! Generated file contents are plain text with `{{key}}` placeholders. The
//! context is a *flat* map: every value is a string, a boolean, or a list of
//! strings. Keeping it flat means the same map serves three consumers
//! without translation:
//!
//! 1. placeholder substitution in embedded templates,
//! 2. conditional logic inside content producers,
//! 3. the serialized per-project record written into the generated tree.
//!
//! # Rendering rules
//!
//! - `{{key}}` is replaced by the value's string form: strings verbatim,
//!   booleans as `true`/`false`, lists comma-joined.
//! - Unknown placeholders are left intact. A template asking for a key the
//!   context does not carry is a template bug, and leaving the marker in the
//!   output makes it visible instead of silently producing an empty string.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single flattened context value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
}

impl ContextValue {
    /// String form used for placeholder substitution.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(", "),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for ContextValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Flat key/value context for template rendering.
///
/// Keys are `'static` because the full key set is fixed by
/// [`ProjectConfig::template_context`]; a `BTreeMap` keeps the serialized
/// project record deterministic.
///
/// [`ProjectConfig::template_context`]: crate::domain::ProjectConfig::template_context
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateContext {
    values: BTreeMap<&'static str, ContextValue>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<ContextValue>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Boolean flag lookup; absent or non-boolean keys read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(ContextValue::as_bool).unwrap_or(false)
    }

    /// String lookup; absent or non-string keys read as `""`.
    pub fn str(&self, key: &str) -> &str {
        self.get(key).and_then(ContextValue::as_str).unwrap_or("")
    }

    /// Substitute every `{{key}}` placeholder in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut output = template.to_string();
        for (key, value) in &self.values {
            let placeholder = format!("{{{{{key}}}}}");
            if output.contains(&placeholder) {
                output = output.replace(&placeholder, &value.render());
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TemplateContext {
        let mut ctx = TemplateContext::new();
        ctx.insert("project_name", "blog_api");
        ctx.insert("use_database", true);
        ctx.insert("linters", vec!["ruff".to_string(), "black".to_string()]);
        ctx
    }

    #[test]
    fn renders_string_placeholders() {
        let ctx = sample();
        assert_eq!(ctx.render("name = \"{{project_name}}\""), "name = \"blog_api\"");
    }

    #[test]
    fn renders_bool_and_list_placeholders() {
        let ctx = sample();
        assert_eq!(ctx.render("db={{use_database}}"), "db=true");
        assert_eq!(ctx.render("tools: {{linters}}"), "tools: ruff, black");
    }

    #[test]
    fn unknown_placeholders_survive() {
        let ctx = sample();
        assert_eq!(ctx.render("{{missing}}"), "{{missing}}");
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let ctx = sample();
        assert_eq!(
            ctx.render("{{project_name}}/{{project_name}}"),
            "blog_api/blog_api"
        );
    }

    #[test]
    fn flag_defaults_to_false() {
        let ctx = sample();
        assert!(ctx.flag("use_database"));
        assert!(!ctx.flag("use_docker"));
        assert!(!ctx.flag("project_name")); // wrong type reads as false
    }

    #[test]
    fn serializes_as_flat_map() {
        let ctx = sample();
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["project_name"], "blog_api");
        assert_eq!(json["use_database"], true);
        assert_eq!(json["linters"][0], "ruff");
    }
}
