#![doc = "Data model of an ECU device definition."]
#![doc = ""]
#![doc = "A `DeviceDefinition` describes what one device type is capable of: the"]
#![doc = "buses it has, which diagnostic and flashloader protocols it speaks on"]
#![doc = "them, flashloader timing parameters and its user memory layout."]
#![doc = ""]
#![doc = "The definition is plain data owned by the caller. Reading it from and"]
#![doc = "writing it to device definition files is done by `devdef-rs-xml`."]

// --- Foundation Modules ---
pub mod types;

// --- Top-level Exports ---
pub use types::{
    BusKind, BusWaitTime, DEFAULT_REQUEST_DOWNLOAD_TIMEOUT_MS, DEFAULT_RESET_WAIT_TIME_MS,
    DEFAULT_TRANSFER_DATA_TIMEOUT_MS, DeviceDefinition, DiagnosticProtocols,
    FlashloaderProtocols, ProtocolFlag, ResetCategory, ResetWaitTimes, TransportSupport,
};
