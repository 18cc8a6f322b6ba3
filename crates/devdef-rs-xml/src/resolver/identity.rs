// crates/devdef-rs-xml/src/resolver/identity.rs

use super::utils::{require_bool, resolve_image_path};
use crate::error::DevDefError;
use crate::model;
use devdef_rs::types;
use std::path::Path;

/// Reads names, description, programming support and the image reference.
pub(super) fn resolve_identity(
    doc: &model::DeviceDefinitionDocument,
    source: &Path,
    def: &mut types::DeviceDefinition,
) -> Result<(), DevDefError> {
    def.device_name = doc
        .device_name
        .as_ref()
        .ok_or(DevDefError::MissingElement {
            element: "device-name",
        })?
        .value
        .clone();

    def.device_name_alias = doc
        .device_name_alias
        .as_ref()
        .map(|alias| alias.value.clone())
        .unwrap_or_default();

    def.other_accepted_names = doc
        .other_accepted_names
        .as_ref()
        .map(|names| names.names.iter().map(|n| n.value.clone()).collect())
        .unwrap_or_default();

    def.device_description = doc
        .device_description
        .as_ref()
        .ok_or(DevDefError::MissingElement {
            element: "device-description",
        })?
        .value
        .clone();

    // The element is optional, its attribute is not.
    def.programming_support = doc
        .programming_properties
        .as_ref()
        .map(|props| {
            require_bool(
                "programming-properties",
                "is-programmable",
                props.is_programmable.as_deref(),
            )
        })
        .transpose()?
        .unwrap_or(false);

    let image = doc.image.as_ref().ok_or(DevDefError::MissingElement {
        element: "image",
    })?;
    def.image_path = resolve_image_path(&image.value, source);
    def.file_path = source.to_path_buf();

    Ok(())
}
