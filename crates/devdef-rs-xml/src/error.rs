// crates/devdef-rs-xml/src/error.rs

use core::fmt;
use core::num::ParseIntError;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;
use std::io;
use std::path::PathBuf;

/// Coarse classification of a [`DevDefError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file to load does not exist.
    NotFound,
    /// The file could not be read or is not well-formed XML.
    MalformedDocument,
    /// A required element or attribute is missing, or a value is invalid.
    SchemaViolation,
    /// The target file could not be removed or written.
    WriteFailure,
}

/// Errors that can occur while loading or saving a device definition.
#[derive(Debug)]
pub enum DevDefError {
    /// The file to load does not exist.
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// An error from the underlying `quick-xml` deserializer or reader.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),

    /// The document root is not `<opensyde-device-definition>`.
    UnexpectedRoot { found: String },

    /// A required XML element was missing (e.g., device-name).
    MissingElement { element: &'static str },

    /// A required attribute was missing (e.g., @is-programmable).
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute is not a valid unsigned decimal number.
    InvalidAttributeFormat {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// A numeric attribute exceeds the range of its field.
    ValueOutOfRange {
        element: &'static str,
        attribute: &'static str,
        value: u64,
        max: u64,
    },

    /// A pre-existing file could not be erased before saving.
    RemoveFailed { path: PathBuf, source: io::Error },

    /// The document could not be written.
    WriteFailed { path: PathBuf, source: io::Error },
}

impl DevDefError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DevDefError::NotFound { .. } => ErrorKind::NotFound,
            DevDefError::Read { .. } | DevDefError::XmlParsing(_) => ErrorKind::MalformedDocument,
            DevDefError::UnexpectedRoot { .. }
            | DevDefError::MissingElement { .. }
            | DevDefError::MissingAttribute { .. }
            | DevDefError::InvalidAttributeFormat { .. }
            | DevDefError::ValueOutOfRange { .. } => ErrorKind::SchemaViolation,
            DevDefError::XmlSerializing(_)
            | DevDefError::FmtError(_)
            | DevDefError::RemoveFailed { .. }
            | DevDefError::WriteFailed { .. } => ErrorKind::WriteFailure,
        }
    }
}

impl From<DeError> for DevDefError {
    fn from(e: DeError) -> Self {
        DevDefError::XmlParsing(e)
    }
}

impl From<quick_xml::Error> for DevDefError {
    fn from(e: quick_xml::Error) -> Self {
        DevDefError::XmlParsing(DeError::from(e))
    }
}

impl From<SeError> for DevDefError {
    fn from(e: SeError) -> Self {
        DevDefError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for DevDefError {
    fn from(e: fmt::Error) -> Self {
        DevDefError::FmtError(e)
    }
}

impl fmt::Display for DevDefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevDefError::NotFound { path } => {
                write!(f, "File not found: \"{}\"", path.display())
            }
            DevDefError::Read { path, source } => {
                write!(f, "Could not read XML file \"{}\": {}", path.display(), source)
            }
            DevDefError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            DevDefError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            DevDefError::FmtError(e) => write!(f, "Formatting error: {}", e),
            DevDefError::UnexpectedRoot { found } => write!(
                f,
                "XML node \"opensyde-device-definition\" not found (root is \"{}\")",
                found
            ),
            DevDefError::MissingElement { element } => {
                write!(f, "XML node \"{}\" not found", element)
            }
            DevDefError::MissingAttribute { element, attribute } => write!(
                f,
                "XML node \"{}\" attribute \"{}\" not found",
                element, attribute
            ),
            DevDefError::InvalidAttributeFormat {
                element,
                attribute,
                value,
            } => write!(
                f,
                "XML node \"{}\" attribute \"{}\" contains invalid value \"{}\"",
                element, attribute, value
            ),
            DevDefError::ValueOutOfRange {
                element,
                attribute,
                value,
                max,
            } => write!(
                f,
                "XML node \"{}\" attribute \"{}\" value {} exceeds maximum {}",
                element, attribute, value, max
            ),
            DevDefError::RemoveFailed { path, source } => write!(
                f,
                "Could not erase pre-existing file \"{}\": {}",
                path.display(),
                source
            ),
            DevDefError::WriteFailed { path, source } => write!(
                f,
                "Could not write to file \"{}\": {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for DevDefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DevDefError::Read { source, .. }
            | DevDefError::RemoveFailed { source, .. }
            | DevDefError::WriteFailed { source, .. } => Some(source),
            DevDefError::XmlParsing(e) => Some(e),
            DevDefError::XmlSerializing(e) => Some(e),
            DevDefError::FmtError(e) => Some(e),
            _ => None,
        }
    }
}

/// Maps a failed integer parse of an attribute to an error naming the attribute.
pub(crate) fn invalid_format(
    element: &'static str,
    attribute: &'static str,
    value: &str,
) -> impl FnOnce(ParseIntError) -> DevDefError {
    let value = value.to_string();
    move |_| DevDefError::InvalidAttributeFormat {
        element,
        attribute,
        value,
    }
}
