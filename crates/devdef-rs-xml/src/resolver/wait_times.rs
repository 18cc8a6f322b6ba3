// crates/devdef-rs-xml/src/resolver/wait_times.rs

//! Flashloader reset wait times, in either of the two file formats.
//!
//! Current files carry `<flashloader-reset-wait-times>` with one element per
//! change category and transport. Older files carry a single
//! `<flashloader-reset-wait-time value="..."/>` that applies to every case.
//! Both are normalized into `types::ResetWaitTimes` right here.

use super::utils::require_unsigned;
use crate::error::DevDefError;
use crate::logging::{EventSink, LogContext, dd_debug, dd_info};
use crate::model;
use crate::model::ValueAttribute;
use devdef_rs::types::{self, BusKind, ResetCategory};

/// Which encoding a file uses for its reset wait times.
enum WaitTimeSource<'a> {
    Discrete(&'a model::protocols::ResetWaitTimes),
    Legacy(&'a ValueAttribute),
    Absent,
}

impl<'a> WaitTimeSource<'a> {
    /// The current format wins if both are present.
    fn select(flashloader: &'a model::FlashloaderProtocols) -> Self {
        match (
            &flashloader.reset_wait_times,
            &flashloader.legacy_reset_wait_time,
        ) {
            (Some(times), _) => WaitTimeSource::Discrete(times),
            (None, Some(legacy)) => WaitTimeSource::Legacy(legacy),
            (None, None) => WaitTimeSource::Absent,
        }
    }
}

/// Resolves the six reset wait times.
///
/// `def` must already hold the bus counts; they decide whether a missing value
/// is worth an informational note.
pub(super) fn resolve_reset_wait_times(
    flashloader: &model::FlashloaderProtocols,
    def: &types::DeviceDefinition,
    sink: &dyn EventSink,
    ctx: &LogContext<'_>,
) -> Result<types::ResetWaitTimes, DevDefError> {
    let mut times = types::ResetWaitTimes::default();

    match WaitTimeSource::select(flashloader) {
        WaitTimeSource::Discrete(model) => {
            dd_debug!(sink, ctx, "Reading flashloader reset wait times per category.");
            let entries = [
                ("no-changes-can", ResetCategory::NoChanges, BusKind::Can, &model.no_changes_can),
                (
                    "no-changes-ethernet",
                    ResetCategory::NoChanges,
                    BusKind::Ethernet,
                    &model.no_changes_ethernet,
                ),
                (
                    "no-fundamental-com-changes-can",
                    ResetCategory::NoFundamentalComChanges,
                    BusKind::Can,
                    &model.no_fundamental_com_changes_can,
                ),
                (
                    "no-fundamental-com-changes-ethernet",
                    ResetCategory::NoFundamentalComChanges,
                    BusKind::Ethernet,
                    &model.no_fundamental_com_changes_ethernet,
                ),
                (
                    "fundamental-com-changes-can",
                    ResetCategory::FundamentalComChanges,
                    BusKind::Can,
                    &model.fundamental_com_changes_can,
                ),
                (
                    "fundamental-com-changes-ethernet",
                    ResetCategory::FundamentalComChanges,
                    BusKind::Ethernet,
                    &model.fundamental_com_changes_ethernet,
                ),
            ];

            for (element, category, bus, entry) in entries {
                match entry {
                    Some(attr) => {
                        let value =
                            require_unsigned(element, "value", attr.value.as_deref(), u32::MAX.into())?;
                        times.set(category, bus, value);
                    }
                    None if def.bus_count(bus) > 0 => {
                        dd_info!(
                            sink,
                            ctx,
                            "Default value for flashloader reset wait time \"{}\" ({} ms) used.",
                            element,
                            times.get(category, bus)
                        );
                    }
                    None => {}
                }
            }
        }
        WaitTimeSource::Legacy(legacy) => {
            let value: u32 = require_unsigned(
                "flashloader-reset-wait-time",
                "value",
                legacy.value.as_deref(),
                u32::MAX.into(),
            )?;
            times = types::ResetWaitTimes::uniform(value);
            dd_info!(
                sink,
                ctx,
                "Due to compatibility all flashloader reset wait times set to the same configuration value ({} ms).",
                value
            );
        }
        WaitTimeSource::Absent => {
            if def.num_can_buses > 0 || def.num_ethernet_buses > 0 {
                dd_info!(sink, ctx, "Default values for flashloader reset wait times were used.");
            }
        }
    }

    Ok(times)
}
