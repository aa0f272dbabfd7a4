//! Structure materializer - turns a [`StructureSpec`] into real files.
//!
//! The walk is depth-first in declaration order, but correctness does not
//! depend on that order: the parent directory is created (`create_dir_all`,
//! idempotent) immediately before EVERY file write, so a file node never
//! relies on a sibling directory node having been visited first.
//!
//! Existing files are silently overwritten. The first I/O failure aborts
//! the walk with an error annotated with the project-relative path of the
//! offending node; nothing already written is removed.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ApplicationError,
    domain::{FileContent, StructureNode, StructureSpec, TemplateContext},
    error::{ForgeError, ForgeResult},
    application::ports::Filesystem,
};

/// Write a validated structure tree under `root`.
///
/// `root` itself is created first; it may already exist (the caller decides
/// whether a pre-existing target is acceptable; generators extending an
/// existing project rely on this).
#[instrument(skip_all, fields(root = %root.display(), files = spec.file_count()))]
pub fn materialize(
    fs: &dyn Filesystem,
    root: &Path,
    spec: &StructureSpec,
    ctx: &TemplateContext,
) -> ForgeResult<()> {
    spec.validate().map_err(ForgeError::Domain)?;

    fs.create_dir_all(root)
        .map_err(|e| annotate(e, PathBuf::new()))?;

    walk(fs, root, Path::new(""), spec, ctx)
}

fn walk(
    fs: &dyn Filesystem,
    root: &Path,
    relative: &Path,
    spec: &StructureSpec,
    ctx: &TemplateContext,
) -> ForgeResult<()> {
    for (name, node) in spec.entries() {
        let rel = relative.join(name);
        let full = root.join(&rel);

        match node {
            StructureNode::Directory(children) => {
                fs.create_dir_all(&full)
                    .map_err(|e| annotate(e, rel.clone()))?;
                walk(fs, root, &rel, children, ctx)?;
            }
            StructureNode::File(content) => {
                write_file(fs, &full, &rel, content, ctx)?;
            }
        }
    }
    Ok(())
}

fn write_file(
    fs: &dyn Filesystem,
    full: &Path,
    rel: &Path,
    content: &FileContent,
    ctx: &TemplateContext,
) -> ForgeResult<()> {
    // mkdir -p right before the write; never trust visit order.
    if let Some(parent) = full.parent() {
        fs.create_dir_all(parent)
            .map_err(|e| annotate(e, rel.to_path_buf()))?;
    }

    let body = content.resolve(ctx);
    debug!(path = %rel.display(), bytes = body.len(), "writing file");

    fs.write_file(full, &body)
        .map_err(|e| annotate(e, rel.to_path_buf()))
}

/// Re-wrap a low-level failure with the project-relative path of the node
/// being materialized.
fn annotate(err: ForgeError, rel: PathBuf) -> ForgeError {
    ForgeError::Application(ApplicationError::GenerationFailed {
        path: rel,
        reason: err.to_string(),
    })
}
