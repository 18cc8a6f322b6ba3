// crates/devdef-rs/src/types.rs

//! Public data structures describing a device definition.

use core::fmt;
use std::path::PathBuf;

/// Request download timeout of the openSYDE flashloader if the file does not specify one.
pub const DEFAULT_REQUEST_DOWNLOAD_TIMEOUT_MS: u32 = 20_000;

/// Transfer data timeout of the openSYDE flashloader if the file does not specify one.
pub const DEFAULT_TRANSFER_DATA_TIMEOUT_MS: u32 = 2_000;

/// Flashloader reset wait time used for every category the file does not specify.
pub const DEFAULT_RESET_WAIT_TIME_MS: u32 = 1_000;

/// The two bus transports a device can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusKind {
    Can,
    Ethernet,
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusKind::Can => write!(f, "CAN"),
            BusKind::Ethernet => write!(f, "Ethernet"),
        }
    }
}

/// Availability of a protocol split by transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportSupport {
    pub can: bool,
    pub ethernet: bool,
}

impl TransportSupport {
    /// Returns the flag for the given transport.
    pub fn on(&self, bus: BusKind) -> bool {
        match bus {
            BusKind::Can => self.can,
            BusKind::Ethernet => self.ethernet,
        }
    }

    /// True if the protocol is available on at least one transport.
    pub fn any(&self) -> bool {
        self.can || self.ethernet
    }
}

/// Diagnostic protocols offered by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticProtocols {
    /// Legacy KEFEX protocol (CAN only).
    pub kefex: bool,
    /// openSYDE diagnostic protocol.
    pub opensyde: TransportSupport,
}

/// The three kinds of change a flashloader reset wait time applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetCategory {
    /// Nothing relevant to communication changed.
    NoChanges,
    /// Communication settings changed, but not fundamentally.
    NoFundamentalComChanges,
    /// Fundamental communication settings (e.g. bitrate, node ID) changed.
    FundamentalComChanges,
}

impl ResetCategory {
    pub const ALL: [ResetCategory; 3] = [
        ResetCategory::NoChanges,
        ResetCategory::NoFundamentalComChanges,
        ResetCategory::FundamentalComChanges,
    ];
}

/// A wait time per transport, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusWaitTime {
    pub can: u32,
    pub ethernet: u32,
}

impl Default for BusWaitTime {
    fn default() -> Self {
        Self {
            can: DEFAULT_RESET_WAIT_TIME_MS,
            ethernet: DEFAULT_RESET_WAIT_TIME_MS,
        }
    }
}

/// Time to wait after a flashloader reset before talking to the device again.
///
/// One value per combination of [`ResetCategory`] and [`BusKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetWaitTimes {
    pub no_changes: BusWaitTime,
    pub no_fundamental_com_changes: BusWaitTime,
    pub fundamental_com_changes: BusWaitTime,
}

impl ResetWaitTimes {
    /// All six wait times set to the same value.
    pub fn uniform(value_ms: u32) -> Self {
        let both = BusWaitTime {
            can: value_ms,
            ethernet: value_ms,
        };
        Self {
            no_changes: both,
            no_fundamental_com_changes: both,
            fundamental_com_changes: both,
        }
    }

    fn category(&self, category: ResetCategory) -> &BusWaitTime {
        match category {
            ResetCategory::NoChanges => &self.no_changes,
            ResetCategory::NoFundamentalComChanges => &self.no_fundamental_com_changes,
            ResetCategory::FundamentalComChanges => &self.fundamental_com_changes,
        }
    }

    fn category_mut(&mut self, category: ResetCategory) -> &mut BusWaitTime {
        match category {
            ResetCategory::NoChanges => &mut self.no_changes,
            ResetCategory::NoFundamentalComChanges => &mut self.no_fundamental_com_changes,
            ResetCategory::FundamentalComChanges => &mut self.fundamental_com_changes,
        }
    }

    /// Returns the wait time in milliseconds.
    pub fn get(&self, category: ResetCategory, bus: BusKind) -> u32 {
        let times = self.category(category);
        match bus {
            BusKind::Can => times.can,
            BusKind::Ethernet => times.ethernet,
        }
    }

    pub fn set(&mut self, category: ResetCategory, bus: BusKind, value_ms: u32) {
        let times = self.category_mut(category);
        match bus {
            BusKind::Can => times.can = value_ms,
            BusKind::Ethernet => times.ethernet = value_ms,
        }
    }
}

/// Flashloader protocols offered by the device and their parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashloaderProtocols {
    /// Legacy STW flashloader (CAN only).
    pub stw_can: bool,
    /// openSYDE flashloader.
    pub opensyde: TransportSupport,
    /// openSYDE "request download" service timeout in milliseconds.
    pub request_download_timeout: u32,
    /// openSYDE "transfer data" service timeout in milliseconds.
    pub transfer_data_timeout: u32,
    /// The openSYDE flashloader expects files instead of hex records.
    pub is_file_based: bool,
    pub reset_wait_times: ResetWaitTimes,
}

impl Default for FlashloaderProtocols {
    fn default() -> Self {
        Self {
            stw_can: false,
            opensyde: TransportSupport::default(),
            request_download_timeout: DEFAULT_REQUEST_DOWNLOAD_TIMEOUT_MS,
            transfer_data_timeout: DEFAULT_TRANSFER_DATA_TIMEOUT_MS,
            is_file_based: false,
            reset_wait_times: ResetWaitTimes::default(),
        }
    }
}

/// A single protocol availability flag, as reported by
/// [`DeviceDefinition::inconsistent_transports`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFlag {
    KefexDiagnostics,
    OpenSydeDiagnostics(BusKind),
    StwFlashloader,
    OpenSydeFlashloader(BusKind),
}

impl ProtocolFlag {
    /// The transport the flag refers to.
    pub fn bus(&self) -> BusKind {
        match self {
            ProtocolFlag::KefexDiagnostics | ProtocolFlag::StwFlashloader => BusKind::Can,
            ProtocolFlag::OpenSydeDiagnostics(bus) | ProtocolFlag::OpenSydeFlashloader(bus) => *bus,
        }
    }
}

impl fmt::Display for ProtocolFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolFlag::KefexDiagnostics => write!(f, "KEFEX diagnostics"),
            ProtocolFlag::OpenSydeDiagnostics(bus) => write!(f, "openSYDE diagnostics on {}", bus),
            ProtocolFlag::StwFlashloader => write!(f, "STW flashloader"),
            ProtocolFlag::OpenSydeFlashloader(bus) => write!(f, "openSYDE flashloader on {}", bus),
        }
    }
}

/// Capabilities of one device type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceDefinition {
    pub device_name: String,
    /// Alternative display name; empty if the device has none.
    pub device_name_alias: String,
    /// Further names under which this device type is recognized.
    pub other_accepted_names: Vec<String>,
    pub device_description: String,
    /// Absolute path of the device image.
    pub image_path: PathBuf,
    /// Path of the file this definition was loaded from.
    pub file_path: PathBuf,
    pub programming_support: bool,
    pub num_can_buses: u8,
    pub num_ethernet_buses: u8,
    /// Supported CAN bitrates in kbit/s, in file order.
    pub supported_bitrates: Vec<u16>,
    pub diagnostic_protocols: DiagnosticProtocols,
    pub flashloader_protocols: FlashloaderProtocols,
    pub user_eeprom_size_bytes: u32,
}

impl DeviceDefinition {
    /// Resets every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of buses the device has on the given transport.
    pub fn bus_count(&self, bus: BusKind) -> u8 {
        match bus {
            BusKind::Can => self.num_can_buses,
            BusKind::Ethernet => self.num_ethernet_buses,
        }
    }

    /// Checks whether `name` identifies this device type.
    ///
    /// Matches the device name, the alias (if any) and all other accepted names.
    pub fn accepts_name(&self, name: &str) -> bool {
        self.device_name == name
            || (!self.device_name_alias.is_empty() && self.device_name_alias == name)
            || self.other_accepted_names.iter().any(|n| n == name)
    }

    /// Name to show to users: the alias if set, the device name otherwise.
    pub fn display_name(&self) -> &str {
        if self.device_name_alias.is_empty() {
            &self.device_name
        } else {
            &self.device_name_alias
        }
    }

    /// True if any diagnostic protocol is available on the given transport.
    pub fn is_diagnosis_available(&self, bus: BusKind) -> bool {
        let protocols = &self.diagnostic_protocols;
        match bus {
            BusKind::Can => protocols.kefex || protocols.opensyde.can,
            BusKind::Ethernet => protocols.opensyde.ethernet,
        }
    }

    /// True if any flashloader protocol is available on the given transport.
    pub fn is_flashing_available(&self, bus: BusKind) -> bool {
        let protocols = &self.flashloader_protocols;
        match bus {
            BusKind::Can => protocols.stw_can || protocols.opensyde.can,
            BusKind::Ethernet => protocols.opensyde.ethernet,
        }
    }

    /// Lists the protocol flags that are set for a transport the device has no bus on.
    pub fn inconsistent_transports(&self) -> Vec<ProtocolFlag> {
        let diag = &self.diagnostic_protocols;
        let flash = &self.flashloader_protocols;
        let flags = [
            (ProtocolFlag::KefexDiagnostics, diag.kefex),
            (ProtocolFlag::OpenSydeDiagnostics(BusKind::Can), diag.opensyde.can),
            (ProtocolFlag::OpenSydeDiagnostics(BusKind::Ethernet), diag.opensyde.ethernet),
            (ProtocolFlag::StwFlashloader, flash.stw_can),
            (ProtocolFlag::OpenSydeFlashloader(BusKind::Can), flash.opensyde.can),
            (ProtocolFlag::OpenSydeFlashloader(BusKind::Ethernet), flash.opensyde.ethernet),
        ];

        flags
            .into_iter()
            .filter(|(flag, set)| *set && self.bus_count(flag.bus()) == 0)
            .map(|(flag, _)| flag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let def = DeviceDefinition::default();
        assert!(!def.programming_support);
        assert_eq!(def.user_eeprom_size_bytes, 0);
        assert_eq!(def.flashloader_protocols.request_download_timeout, 20_000);
        assert_eq!(def.flashloader_protocols.transfer_data_timeout, 2_000);
        assert!(!def.flashloader_protocols.is_file_based);
        for category in ResetCategory::ALL {
            for bus in [BusKind::Can, BusKind::Ethernet] {
                assert_eq!(
                    def.flashloader_protocols.reset_wait_times.get(category, bus),
                    DEFAULT_RESET_WAIT_TIME_MS
                );
            }
        }
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut def = DeviceDefinition {
            device_name: "ESX3CM".into(),
            num_can_buses: 2,
            supported_bitrates: vec![125, 250],
            user_eeprom_size_bytes: 8192,
            ..Default::default()
        };
        def.flashloader_protocols.is_file_based = true;

        def.clear();
        assert_eq!(def, DeviceDefinition::default());
    }

    #[test]
    fn test_reset_wait_times_get_set() {
        let mut times = ResetWaitTimes::uniform(500);
        assert_eq!(times.get(ResetCategory::FundamentalComChanges, BusKind::Ethernet), 500);

        times.set(ResetCategory::NoFundamentalComChanges, BusKind::Can, 1500);
        assert_eq!(times.no_fundamental_com_changes.can, 1500);
        assert_eq!(times.no_fundamental_com_changes.ethernet, 500);
        assert_eq!(times.get(ResetCategory::NoChanges, BusKind::Can), 500);
    }

    #[test]
    fn test_accepts_name() {
        let def = DeviceDefinition {
            device_name: "ESX3CM".into(),
            device_name_alias: "ESX-3CM Controller".into(),
            other_accepted_names: vec!["ESX3CM_OLD".into()],
            ..Default::default()
        };
        assert!(def.accepts_name("ESX3CM"));
        assert!(def.accepts_name("ESX-3CM Controller"));
        assert!(def.accepts_name("ESX3CM_OLD"));
        assert!(!def.accepts_name("ESX3XL"));
        assert!(!DeviceDefinition::default().accepts_name("ESX3CM"));
        assert_eq!(def.display_name(), "ESX-3CM Controller");
    }

    #[test]
    fn test_protocol_availability() {
        let mut def = DeviceDefinition::default();
        def.diagnostic_protocols.kefex = true;
        def.flashloader_protocols.opensyde.ethernet = true;

        assert!(def.is_diagnosis_available(BusKind::Can));
        assert!(!def.is_diagnosis_available(BusKind::Ethernet));
        assert!(!def.is_flashing_available(BusKind::Can));
        assert!(def.is_flashing_available(BusKind::Ethernet));
    }

    #[test]
    fn test_inconsistent_transports() {
        let mut def = DeviceDefinition {
            num_can_buses: 1,
            ..Default::default()
        };
        def.diagnostic_protocols.opensyde = TransportSupport {
            can: true,
            ethernet: true,
        };
        def.flashloader_protocols.stw_can = true;

        assert_eq!(
            def.inconsistent_transports(),
            vec![ProtocolFlag::OpenSydeDiagnostics(BusKind::Ethernet)]
        );

        def.num_ethernet_buses = 1;
        assert!(def.inconsistent_transports().is_empty());
    }
}
