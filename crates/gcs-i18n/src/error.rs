//! Error types for loading and writing translation catalogs.

use thiserror::Error;

/// Errors that can occur while loading a translation catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read a resource file.
    #[error("Failed to read translation resource {path}: {source}")]
    Io {
        /// Path of the resource that could not be read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("Malformed XML at byte {position}: {source}")]
    Xml {
        /// Byte offset reported by the reader.
        position: usize,
        /// Underlying reader error.
        #[source]
        source: quick_xml::Error,
    },

    /// Text content that is not valid UTF-8.
    #[error("Invalid UTF-8 text at byte {position}")]
    InvalidUtf8 {
        /// Byte offset reported by the reader.
        position: usize,
    },

    /// The document has no root element.
    #[error("Translation document has no root element")]
    MissingRoot,

    /// The root element is not `<TS>`.
    #[error("Expected <TS> root element, found <{found}>")]
    UnexpectedRoot {
        /// Name of the root element actually found.
        found: String,
    },

    /// The document ended while an element was still open.
    #[error("Unexpected end of document inside <{element}>")]
    UnexpectedEof {
        /// Innermost element left open.
        element: String,
    },

    /// A `<context>` block without a `<name>`.
    #[error("Context ending at byte {position} has no <name>")]
    MissingContextName {
        /// Byte offset of the closing tag.
        position: usize,
    },

    /// A `<message>` without a `<source>`.
    #[error("Message ending at byte {position} in context '{context}' has no <source>")]
    MissingSource {
        /// Context name, or empty when the name had not been read yet.
        context: String,
        /// Byte offset of the closing tag.
        position: usize,
    },
}

/// Result type for catalog loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while serializing a catalog.
#[derive(Error, Debug)]
pub enum WriteError {
    /// XML writer failure.
    #[error("Failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The writer produced bytes that are not UTF-8.
    #[error("Serialized document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
