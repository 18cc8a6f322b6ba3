// crates/devdef-rs-xml/src/resolver/protocols.rs

use super::utils::{optional_u32, parse_bool};
use crate::error::DevDefError;
use crate::model;
use crate::model::protocols::TransportAttributes;
use devdef_rs::types;

/// Shared availability rule of all `<opensyde>` protocol elements.
///
/// A transport is supported only if both `support` and the transport's own
/// attribute are true. Missing attributes count as false.
pub(super) fn resolve_availability(attrs: &impl TransportAttributes) -> types::TransportSupport {
    let support = parse_bool(attrs.support());
    types::TransportSupport {
        can: support && parse_bool(attrs.can()),
        ethernet: support && parse_bool(attrs.ethernet()),
    }
}

/// Parses `<protocols-diagnostics>`. Absent sub-elements leave their protocol unsupported.
pub(super) fn resolve_diagnostic_protocols(
    model: &model::DiagnosticProtocols,
) -> types::DiagnosticProtocols {
    types::DiagnosticProtocols {
        kefex: model
            .kefex
            .as_ref()
            .is_some_and(|kefex| parse_bool(kefex.support.as_deref())),
        opensyde: model
            .opensyde
            .as_ref()
            .map(resolve_availability)
            .unwrap_or_default(),
    }
}

/// Parses the legacy `<stw-flashloader>` (CAN only).
///
/// Both `support` and `can` must be true. Missing attributes count as false.
pub(super) fn resolve_stw_flashloader(model: &model::protocols::StwFlashloader) -> bool {
    parse_bool(model.support.as_deref()) && parse_bool(model.can.as_deref())
}

/// Parses the flashloader `<opensyde>` element: availability plus its timing parameters.
pub(super) fn resolve_opensyde_flashloader(
    model: &model::protocols::OpenSydeFlashloader,
    flashloader: &mut types::FlashloaderProtocols,
) -> Result<(), DevDefError> {
    flashloader.opensyde = resolve_availability(model);
    flashloader.request_download_timeout = optional_u32(
        "opensyde",
        "requestdownloadtimeout",
        model.request_download_timeout.as_deref(),
        types::DEFAULT_REQUEST_DOWNLOAD_TIMEOUT_MS,
    )?;
    flashloader.transfer_data_timeout = optional_u32(
        "opensyde",
        "transferdatatimeout",
        model.transfer_data_timeout.as_deref(),
        types::DEFAULT_TRANSFER_DATA_TIMEOUT_MS,
    )?;
    flashloader.is_file_based = parse_bool(model.is_file_based.as_deref());
    Ok(())
}
