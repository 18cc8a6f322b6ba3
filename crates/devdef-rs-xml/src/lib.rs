// crates/devdef-rs-xml/src/lib.rs

#![doc = "Loads and saves ECU device definition files."]
#![doc = ""]
#![doc = "A device definition file is an XML document rooted at"]
#![doc = "`<opensyde-device-definition>` describing the buses, protocols, flashloader"]
#![doc = "timings and memory of one device type. This crate turns such a document into"]
#![doc = "a `devdef_rs::DeviceDefinition` and back."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_device_definition`: Loading a definition file from disk."]
#![doc = "- `load_device_definition_from_str`: Parsing a document held in memory."]
#![doc = "- `save_device_definition`: Replacing a file with a freshly written definition."]
#![doc = "- `save_device_definition_to_string`: Serializing a definition to a `String`."]
#![doc = "- `DeviceDefinitionFiler`: The same operations with a caller-supplied `EventSink`."]

// --- Crate Modules ---

mod builder;
mod error;
mod filer;
pub mod logging;
mod model;
mod parser;
mod resolver;

// --- Public API Re-exports ---

pub use builder::save_device_definition_to_string;
pub use error::{DevDefError, ErrorKind};
pub use filer::{DeviceDefinitionFiler, load_device_definition, save_device_definition};
pub use logging::{CollectingSink, EventSink, LogContext, LogEvent, LogMetadata, LogSink};
pub use parser::{FILE_VERSION, ROOT_ELEMENT, load_device_definition_from_str};

pub use devdef_rs::DeviceDefinition;
