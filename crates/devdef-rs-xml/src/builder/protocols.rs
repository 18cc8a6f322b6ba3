// crates/devdef-rs-xml/src/builder/protocols.rs

use crate::model;
use crate::model::ValueAttribute;
use crate::model::protocols::{
    Kefex, OpenSydeDiagnostics, OpenSydeFlashloader, ResetWaitTimes, StwFlashloader,
};
use devdef_rs::types::{self, BusKind, ResetCategory};

/// Formats a flag the way Save writes every boolean.
fn flag(value: bool) -> Option<String> {
    Some(value.to_string())
}

/// Builds `<protocols-diagnostics>`.
///
/// `support` is written as the OR of the transport flags.
pub(super) fn build_model_diagnostic_protocols(
    protocols: &types::DiagnosticProtocols,
) -> model::DiagnosticProtocols {
    model::DiagnosticProtocols {
        kefex: Some(Kefex {
            support: flag(protocols.kefex),
        }),
        opensyde: Some(OpenSydeDiagnostics {
            support: flag(protocols.opensyde.any()),
            can: flag(protocols.opensyde.can),
            ethernet: flag(protocols.opensyde.ethernet),
        }),
    }
}

/// Builds `<protocols-flashloader>` with the six discrete reset wait times.
pub(super) fn build_model_flashloader_protocols(
    protocols: &types::FlashloaderProtocols,
) -> model::FlashloaderProtocols {
    model::FlashloaderProtocols {
        reset_wait_times: Some(build_model_reset_wait_times(&protocols.reset_wait_times)),
        legacy_reset_wait_time: None,
        stw_flashloader: Some(StwFlashloader {
            support: flag(protocols.stw_can),
            can: flag(protocols.stw_can),
        }),
        opensyde: Some(OpenSydeFlashloader {
            support: flag(protocols.opensyde.any()),
            can: flag(protocols.opensyde.can),
            ethernet: flag(protocols.opensyde.ethernet),
            request_download_timeout: Some(protocols.request_download_timeout.to_string()),
            transfer_data_timeout: Some(protocols.transfer_data_timeout.to_string()),
            is_file_based: flag(protocols.is_file_based),
        }),
    }
}

fn build_model_reset_wait_times(times: &types::ResetWaitTimes) -> ResetWaitTimes {
    let value = |category, bus| Some(ValueAttribute::new(times.get(category, bus)));
    ResetWaitTimes {
        no_changes_can: value(ResetCategory::NoChanges, BusKind::Can),
        no_changes_ethernet: value(ResetCategory::NoChanges, BusKind::Ethernet),
        no_fundamental_com_changes_can: value(ResetCategory::NoFundamentalComChanges, BusKind::Can),
        no_fundamental_com_changes_ethernet: value(
            ResetCategory::NoFundamentalComChanges,
            BusKind::Ethernet,
        ),
        fundamental_com_changes_can: value(ResetCategory::FundamentalComChanges, BusKind::Can),
        fundamental_com_changes_ethernet: value(
            ResetCategory::FundamentalComChanges,
            BusKind::Ethernet,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_is_or_of_transports() {
        let protocols = types::DiagnosticProtocols {
            kefex: false,
            opensyde: types::TransportSupport {
                can: false,
                ethernet: true,
            },
        };
        let model = build_model_diagnostic_protocols(&protocols);
        let opensyde = model.opensyde.unwrap();
        assert_eq!(opensyde.support.as_deref(), Some("true"));
        assert_eq!(opensyde.can.as_deref(), Some("false"));
        assert_eq!(opensyde.ethernet.as_deref(), Some("true"));
        assert_eq!(model.kefex.unwrap().support.as_deref(), Some("false"));

        let model = build_model_diagnostic_protocols(&types::DiagnosticProtocols::default());
        assert_eq!(model.opensyde.unwrap().support.as_deref(), Some("false"));
    }

    #[test]
    fn test_stw_writes_support_and_can() {
        let protocols = types::FlashloaderProtocols {
            stw_can: true,
            ..Default::default()
        };
        let stw = build_model_flashloader_protocols(&protocols)
            .stw_flashloader
            .unwrap();
        assert_eq!(stw.support.as_deref(), Some("true"));
        assert_eq!(stw.can.as_deref(), Some("true"));
    }

    #[test]
    fn test_reset_wait_times_are_discrete() {
        let mut protocols = types::FlashloaderProtocols::default();
        protocols
            .reset_wait_times
            .set(ResetCategory::FundamentalComChanges, BusKind::Ethernet, 4000);

        let model = build_model_flashloader_protocols(&protocols);
        assert!(model.legacy_reset_wait_time.is_none());
        let times = model.reset_wait_times.unwrap();
        assert_eq!(
            times.fundamental_com_changes_ethernet,
            Some(ValueAttribute::new(4000))
        );
        assert_eq!(
            times.no_changes_can,
            Some(ValueAttribute::new(types::DEFAULT_RESET_WAIT_TIME_MS))
        );
    }

    #[test]
    fn test_opensyde_parameters_written() {
        let protocols = types::FlashloaderProtocols {
            request_download_timeout: 45_000,
            is_file_based: true,
            ..Default::default()
        };
        let opensyde = build_model_flashloader_protocols(&protocols).opensyde.unwrap();
        assert_eq!(opensyde.request_download_timeout.as_deref(), Some("45000"));
        assert_eq!(opensyde.transfer_data_timeout.as_deref(), Some("2000"));
        assert_eq!(opensyde.is_file_based.as_deref(), Some("true"));
    }
}
