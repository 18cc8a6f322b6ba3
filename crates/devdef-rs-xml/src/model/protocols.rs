// crates/devdef-rs-xml/src/model/protocols.rs

//! Contains model structs related to `<protocols-diagnostics>` and `<protocols-flashloader>`.

use super::common::ValueAttribute;
use serde::{Deserialize, Serialize};

/// Attribute accessors shared by every `<opensyde>` protocol element.
pub trait TransportAttributes {
    fn support(&self) -> Option<&str>;
    fn can(&self) -> Option<&str>;
    fn ethernet(&self) -> Option<&str>;
}

/// Represents `<kefex support="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Kefex {
    #[serde(rename = "@support", default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
}

/// Represents the diagnostic `<opensyde support="..." can="..." ethernet="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OpenSydeDiagnostics {
    #[serde(rename = "@support", default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(rename = "@can", default, skip_serializing_if = "Option::is_none")]
    pub can: Option<String>,
    #[serde(rename = "@ethernet", default, skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<String>,
}

impl TransportAttributes for OpenSydeDiagnostics {
    fn support(&self) -> Option<&str> {
        self.support.as_deref()
    }
    fn can(&self) -> Option<&str> {
        self.can.as_deref()
    }
    fn ethernet(&self) -> Option<&str> {
        self.ethernet.as_deref()
    }
}

/// Represents `<protocols-diagnostics>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DiagnosticProtocols {
    #[serde(rename = "kefex", default, skip_serializing_if = "Option::is_none")]
    pub kefex: Option<Kefex>,

    #[serde(rename = "opensyde", default, skip_serializing_if = "Option::is_none")]
    pub opensyde: Option<OpenSydeDiagnostics>,
}

/// Represents `<flashloader-reset-wait-times>` (current format, one value per case).
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ResetWaitTimes {
    #[serde(rename = "no-changes-can", default, skip_serializing_if = "Option::is_none")]
    pub no_changes_can: Option<ValueAttribute>,

    #[serde(
        rename = "no-changes-ethernet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub no_changes_ethernet: Option<ValueAttribute>,

    #[serde(
        rename = "no-fundamental-com-changes-can",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub no_fundamental_com_changes_can: Option<ValueAttribute>,

    #[serde(
        rename = "no-fundamental-com-changes-ethernet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub no_fundamental_com_changes_ethernet: Option<ValueAttribute>,

    #[serde(
        rename = "fundamental-com-changes-can",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fundamental_com_changes_can: Option<ValueAttribute>,

    #[serde(
        rename = "fundamental-com-changes-ethernet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fundamental_com_changes_ethernet: Option<ValueAttribute>,
}

/// Represents `<stw-flashloader support="..." can="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StwFlashloader {
    #[serde(rename = "@support", default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(rename = "@can", default, skip_serializing_if = "Option::is_none")]
    pub can: Option<String>,
}

/// Represents the flashloader `<opensyde>` element with its timing parameters.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OpenSydeFlashloader {
    #[serde(rename = "@support", default, skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(rename = "@can", default, skip_serializing_if = "Option::is_none")]
    pub can: Option<String>,
    #[serde(rename = "@ethernet", default, skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<String>,
    #[serde(
        rename = "@requestdownloadtimeout",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub request_download_timeout: Option<String>, // xsd:unsignedInt
    #[serde(
        rename = "@transferdatatimeout",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_data_timeout: Option<String>, // xsd:unsignedInt
    #[serde(
        rename = "@is-file-based",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_file_based: Option<String>,
}

impl TransportAttributes for OpenSydeFlashloader {
    fn support(&self) -> Option<&str> {
        self.support.as_deref()
    }
    fn can(&self) -> Option<&str> {
        self.can.as_deref()
    }
    fn ethernet(&self) -> Option<&str> {
        self.ethernet.as_deref()
    }
}

/// Represents `<protocols-flashloader>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FlashloaderProtocols {
    #[serde(
        rename = "flashloader-reset-wait-times",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_wait_times: Option<ResetWaitTimes>,

    /// Older files carry a single wait time for every case.
    #[serde(
        rename = "flashloader-reset-wait-time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_reset_wait_time: Option<ValueAttribute>,

    #[serde(
        rename = "stw-flashloader",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stw_flashloader: Option<StwFlashloader>,

    #[serde(rename = "opensyde", default, skip_serializing_if = "Option::is_none")]
    pub opensyde: Option<OpenSydeFlashloader>,
}
