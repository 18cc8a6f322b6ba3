// crates/devdef-rs-xml/src/resolver/hardware.rs

use super::utils::{optional_u32, require_unsigned};
use crate::error::DevDefError;
use crate::model;
use devdef_rs::types;

/// Reads the bus counts from `<bus-systems-available>`. Both attributes are mandatory.
pub(super) fn resolve_bus_systems(
    doc: &model::DeviceDefinitionDocument,
    def: &mut types::DeviceDefinition,
) -> Result<(), DevDefError> {
    let buses = doc
        .bus_systems_available
        .as_ref()
        .ok_or(DevDefError::MissingElement {
            element: "bus-systems-available",
        })?;

    def.num_can_buses = require_unsigned(
        "bus-systems-available",
        "can",
        buses.can.as_deref(),
        u8::MAX.into(),
    )?;
    def.num_ethernet_buses = require_unsigned(
        "bus-systems-available",
        "ethernet",
        buses.ethernet.as_deref(),
        u8::MAX.into(),
    )?;
    Ok(())
}

/// Reads the supported CAN bitrates in document order.
pub(super) fn resolve_bitrates(
    doc: &model::DeviceDefinitionDocument,
    def: &mut types::DeviceDefinition,
) -> Result<(), DevDefError> {
    let support = doc
        .can_bitrates_support
        .as_ref()
        .ok_or(DevDefError::MissingElement {
            element: "can-bitrates-support",
        })?;

    def.supported_bitrates = support
        .bitrates
        .iter()
        .map(|bitrate| {
            require_unsigned(
                "can-bitrate",
                "value",
                bitrate.value.as_deref(),
                u16::MAX.into(),
            )
        })
        .collect::<Result<Vec<u16>, DevDefError>>()?;
    Ok(())
}

/// Reads the user EEPROM size. Absent `<memory>`, `<user-eeprom>` or `sizebytes` all mean 0.
pub(super) fn resolve_memory(
    doc: &model::DeviceDefinitionDocument,
    def: &mut types::DeviceDefinition,
) -> Result<(), DevDefError> {
    let size = doc
        .memory
        .as_ref()
        .and_then(|memory| memory.user_eeprom.as_ref())
        .and_then(|eeprom| eeprom.size_bytes.as_deref());

    def.user_eeprom_size_bytes = optional_u32("user-eeprom", "sizebytes", size, 0)?;
    Ok(())
}
