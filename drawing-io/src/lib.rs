pub mod document;
pub mod registration;
pub mod rw;
pub mod tokens;

use std::path::PathBuf;

use drawing_core::shape::ShapeKind;
use drawing_engine::FactoryError;
use thiserror::Error;

pub use document::GraphicsDoc;
pub use registration::{
    RegistrationOutcome, Registries, ShapeFactory, ShapeRwFactory, ensure_global_registration,
    global_rw_factory, global_shape_factory, register_builtin_kinds, register_kind,
};
pub use rw::ShapeReaderWriter;
pub use tokens::TokenReader;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to open {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file {path:?}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown shape id \"{id}\" at line {line}")]
    UnknownShape {
        id: String,
        line: usize,
        #[source]
        source: FactoryError,
    },
    #[error("no reader-writer registered for shape kind {kind}")]
    MissingReaderWriter {
        kind: ShapeKind,
        #[source]
        source: FactoryError,
    },
    #[error("invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },
    #[error("reader-writer for {expected} cannot handle a {actual} shape")]
    KindMismatch {
        expected: ShapeKind,
        actual: ShapeKind,
    },
    #[error("failed to emit record: {0}")]
    Stream(#[from] std::io::Error),
}
