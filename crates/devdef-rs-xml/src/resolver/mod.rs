// crates/devdef-rs-xml/src/resolver/mod.rs

//! Handles the business logic of resolving a `DeviceDefinition` from a deserialized document.
//!
//! The document arrives as an immutable tree; each sub-module handles one
//! part of it and fills a fresh definition that only reaches the caller if
//! every step succeeds.

use crate::error::DevDefError;
use crate::logging::{EventSink, LogContext, dd_debug, dd_info};
use crate::model;
use crate::parser::{FILE_VERSION, parse_hex_u16};
use devdef_rs::types;
use std::path::Path;

// --- Sub-modules ---

mod hardware;
mod identity;
mod protocols;
mod utils;
mod wait_times;

/// Resolves the final `DeviceDefinition` from the raw deserialized document.
///
/// Mandatory constructs are checked in document order, so the first missing
/// one is the one reported.
pub(crate) fn resolve_device_definition(
    doc: &model::DeviceDefinitionDocument,
    source: &Path,
    sink: &dyn EventSink,
) -> Result<types::DeviceDefinition, DevDefError> {
    let ctx = LogContext::loading(source);
    let mut def = types::DeviceDefinition::default();

    // --- File version ---
    let file_version = doc.file_version.as_ref().ok_or(DevDefError::MissingElement {
        element: "file-version",
    })?;
    // No special handling required yet based on version.
    match parse_hex_u16(file_version.value.trim()) {
        Ok(FILE_VERSION) => {}
        _ => dd_debug!(
            sink,
            ctx,
            "Unexpected file version \"{}\", reading as 0x{:04X}.",
            file_version.value,
            FILE_VERSION
        ),
    }

    // --- Identity and hardware ---
    identity::resolve_identity(doc, source, &mut def)?;
    hardware::resolve_bus_systems(doc, &mut def)?;
    hardware::resolve_bitrates(doc, &mut def)?;

    // --- Protocols ---
    if let Some(diagnostics) = &doc.protocols_diagnostics {
        def.diagnostic_protocols = protocols::resolve_diagnostic_protocols(diagnostics);
    }

    if let Some(flashloader) = &doc.protocols_flashloader {
        def.flashloader_protocols.reset_wait_times =
            wait_times::resolve_reset_wait_times(flashloader, &def, sink, &ctx)?;

        if let Some(stw) = &flashloader.stw_flashloader {
            def.flashloader_protocols.stw_can = protocols::resolve_stw_flashloader(stw);
        }
        if let Some(opensyde) = &flashloader.opensyde {
            protocols::resolve_opensyde_flashloader(opensyde, &mut def.flashloader_protocols)?;
        }
    }

    // --- Memory ---
    hardware::resolve_memory(doc, &mut def)?;

    for flag in def.inconsistent_transports() {
        dd_info!(
            sink,
            ctx,
            "{} is marked as supported, but the device has no {} bus.",
            flag,
            flag.bus()
        );
    }

    Ok(def)
}
