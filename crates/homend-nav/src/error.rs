use homend_editor::command::NavKey;
use thiserror::Error;

/// A navigation press that could not do anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    /// A fresh press at the document boundary its key points to.
    #[error("Nothing to do: already at the {} of the buffer", boundary_name(.key))]
    BoundaryNoOp { key: NavKey },
}

const fn boundary_name(key: &NavKey) -> &'static str {
    match key {
        NavKey::Home => "beginning",
        NavKey::End => "end",
    }
}
