//! Declarative project structure tree.
//!
//! Generators never touch the filesystem directly. They assemble a
//! [`StructureSpec`], a tree of named directories and files, and hand it
//! to the materializer. Each file node carries its own content source
//! inline ([`FileContent`]), so a spec is self-contained: no side registry
//! mapping filenames to producers, no ordering coupling between a file and
//! a distant content table.
//!
//! Entries preserve declaration order so materialization is deterministic.

use crate::domain::{entities::render::TemplateContext, error::DomainError};

/// Content source for a single file node.
#[derive(Clone)]
pub enum FileContent {
    /// Verbatim content, written as-is.
    Literal(String),
    /// Embedded template, rendered against the context (`{{key}}`).
    Template(&'static str),
    /// Computed content; invoked with the context at materialization time.
    Producer(fn(&TemplateContext) -> String),
}

impl FileContent {
    /// Resolve to the final file body.
    pub fn resolve(&self, ctx: &TemplateContext) -> String {
        match self {
            Self::Literal(content) => content.clone(),
            Self::Template(template) => ctx.render(template),
            Self::Producer(produce) => produce(ctx),
        }
    }
}

impl std::fmt::Debug for FileContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(c) => f.debug_tuple("Literal").field(&c.len()).finish(),
            Self::Template(t) => f.debug_tuple("Template").field(&t.len()).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// A named node in the structure tree.
#[derive(Debug, Clone)]
pub enum StructureNode {
    Directory(StructureSpec),
    File(FileContent),
}

/// An ordered collection of named nodes (one directory level).
#[derive(Debug, Clone, Default)]
pub struct StructureSpec {
    entries: Vec<(String, StructureNode)>,
}

impl StructureSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subdirectory.
    pub fn dir(mut self, name: impl Into<String>, children: StructureSpec) -> Self {
        self.entries
            .push((name.into(), StructureNode::Directory(children)));
        self
    }

    /// Add an empty subdirectory.
    pub fn empty_dir(self, name: impl Into<String>) -> Self {
        self.dir(name, StructureSpec::new())
    }

    /// Add a file with the given content source.
    pub fn file(mut self, name: impl Into<String>, content: FileContent) -> Self {
        self.entries.push((name.into(), StructureNode::File(content)));
        self
    }

    /// Add a file rendered from an embedded template.
    pub fn template(self, name: impl Into<String>, template: &'static str) -> Self {
        self.file(name, FileContent::Template(template))
    }

    /// Add a file with literal content.
    pub fn literal(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.file(name, FileContent::Literal(content.into()))
    }

    pub fn entries(&self) -> &[(String, StructureNode)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the whole tree.
    ///
    /// Entry names must be non-empty single path components (no separators,
    /// no `.`/`..`) and unique within their parent.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (i, (name, node)) in self.entries.iter().enumerate() {
            if !is_valid_entry_name(name) {
                return Err(DomainError::InvalidEntryName { name: name.clone() });
            }
            if self.entries[..i].iter().any(|(other, _)| other == name) {
                return Err(DomainError::DuplicateEntry { name: name.clone() });
            }
            if let StructureNode::Directory(children) = node {
                children.validate()?;
            }
        }
        Ok(())
    }

    /// Total number of file nodes in the tree.
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                StructureNode::File(_) => 1,
                StructureNode::Directory(children) => children.file_count(),
            })
            .sum()
    }
}

fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> FileContent {
        FileContent::Literal(String::new())
    }

    #[test]
    fn preserves_declaration_order() {
        let spec = StructureSpec::new()
            .file("b.py", leaf())
            .file("a.py", leaf())
            .empty_dir("z");
        let names: Vec<_> = spec.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["b.py", "a.py", "z"]);
    }

    #[test]
    fn rejects_duplicate_siblings() {
        let spec = StructureSpec::new().file("a.py", leaf()).file("a.py", leaf());
        assert!(matches!(
            spec.validate(),
            Err(DomainError::DuplicateEntry { .. })
        ));
    }

    #[test]
    fn same_name_in_different_parents_is_fine() {
        let spec = StructureSpec::new()
            .dir("app", StructureSpec::new().file("__init__.py", leaf()))
            .dir("tests", StructureSpec::new().file("__init__.py", leaf()));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn rejects_path_separators_and_dots() {
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            let spec = StructureSpec::new().file(bad, leaf());
            assert!(
                matches!(spec.validate(), Err(DomainError::InvalidEntryName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn validates_nested_directories() {
        let spec = StructureSpec::new().dir(
            "app",
            StructureSpec::new().file("x", leaf()).file("x", leaf()),
        );
        assert!(spec.validate().is_err());
    }

    #[test]
    fn counts_files_recursively() {
        let spec = StructureSpec::new()
            .file("README.md", leaf())
            .dir(
                "app",
                StructureSpec::new()
                    .file("__init__.py", leaf())
                    .dir("core", StructureSpec::new().file("config.py", leaf())),
            )
            .empty_dir("alembic");
        assert_eq!(spec.file_count(), 3);
    }

    #[test]
    fn producer_content_resolves_with_context() {
        let mut ctx = TemplateContext::new();
        ctx.insert("project_name", "demo");
        let content = FileContent::Producer(|ctx| format!("# {}", ctx.str("project_name")));
        assert_eq!(content.resolve(&ctx), "# demo");
    }
}
