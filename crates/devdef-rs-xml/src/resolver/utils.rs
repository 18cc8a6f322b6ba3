// crates/devdef-rs-xml/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::error::{DevDefError, invalid_format};
use std::path::{Component, Path, PathBuf};

/// Interprets a boolean attribute. Absent or unrecognized values are `false`.
pub(super) fn parse_bool(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        Some(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        None => false,
    }
}

/// Interprets a boolean attribute that must be present.
pub(super) fn require_bool(
    element: &'static str,
    attribute: &'static str,
    raw: Option<&str>,
) -> Result<bool, DevDefError> {
    match raw {
        Some(_) => Ok(parse_bool(raw)),
        None => Err(DevDefError::MissingAttribute { element, attribute }),
    }
}

/// Parses an unsigned decimal attribute and checks it fits into `T`.
pub(super) fn parse_unsigned<T: TryFrom<u64>>(
    element: &'static str,
    attribute: &'static str,
    raw: &str,
    max: u64,
) -> Result<T, DevDefError> {
    let value: u64 = raw
        .trim()
        .parse()
        .map_err(invalid_format(element, attribute, raw))?;
    T::try_from(value).map_err(|_| DevDefError::ValueOutOfRange {
        element,
        attribute,
        value,
        max,
    })
}

/// Parses an unsigned attribute that must be present.
pub(super) fn require_unsigned<T: TryFrom<u64>>(
    element: &'static str,
    attribute: &'static str,
    raw: Option<&str>,
    max: u64,
) -> Result<T, DevDefError> {
    let raw = raw.ok_or(DevDefError::MissingAttribute { element, attribute })?;
    parse_unsigned(element, attribute, raw, max)
}

/// Parses a `u32` attribute, falling back to `default` if it is absent.
pub(super) fn optional_u32(
    element: &'static str,
    attribute: &'static str,
    raw: Option<&str>,
    default: u32,
) -> Result<u32, DevDefError> {
    raw.map(|r| parse_unsigned(element, attribute, r, u32::MAX.into()))
        .transpose()
        .map(|v| v.unwrap_or(default))
}

/// Expands the image reference of a definition file to an absolute path.
///
/// Relative references are taken relative to the directory containing `source`.
/// An empty reference stays empty.
pub(super) fn resolve_image_path(image: &str, source: &Path) -> PathBuf {
    if image.is_empty() {
        return PathBuf::new();
    }

    let image = Path::new(image);
    let joined = if image.is_absolute() {
        image.to_path_buf()
    } else {
        source
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(image)
    };

    let absolute = std::path::absolute(&joined).unwrap_or(joined);
    normalize_lexically(&absolute)
}

/// Removes `.` and resolves `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // ".." above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component.as_os_str()),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
