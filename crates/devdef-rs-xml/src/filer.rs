// crates/devdef-rs-xml/src/filer.rs

//! File-level Load and Save.
//!
//! Every failure is returned to the caller and also reported to the sink as an
//! error event, tagged with the operation and the file it concerns.

use crate::builder::save_device_definition_to_string;
use crate::error::DevDefError;
use crate::logging::{EventSink, LogContext, LogSink, dd_debug, dd_error};
use crate::parser::parse_document;
use devdef_rs::DeviceDefinition;
use std::fs;
use std::path::Path;

/// Loads and saves device definition files, reporting to an injected sink.
pub struct DeviceDefinitionFiler<'a> {
    sink: &'a dyn EventSink,
}

impl<'a> DeviceDefinitionFiler<'a> {
    pub fn new(sink: &'a dyn EventSink) -> Self {
        Self { sink }
    }

    /// Loads the device definition stored at `path`.
    ///
    /// # Errors
    /// `NotFound` if the file does not exist, `MalformedDocument` if it cannot
    /// be read or parsed, `SchemaViolation` if it does not follow the format.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DeviceDefinition, DevDefError> {
        let path = path.as_ref();
        let result = read_document(path).and_then(|xml| parse_document(&xml, path, self.sink));
        self.report_load(path, result)
    }

    /// Parses a document held in memory.
    ///
    /// `source_path` stands in for the file the document came from; see
    /// [`load_device_definition_from_str`](crate::load_device_definition_from_str).
    pub fn load_from_str(
        &self,
        xml_content: &str,
        source_path: impl AsRef<Path>,
    ) -> Result<DeviceDefinition, DevDefError> {
        let path = source_path.as_ref();
        self.report_load(path, parse_document(xml_content, path, self.sink))
    }

    fn report_load(
        &self,
        path: &Path,
        result: Result<DeviceDefinition, DevDefError>,
    ) -> Result<DeviceDefinition, DevDefError> {
        let ctx = LogContext::loading(path);
        match &result {
            Ok(def) => dd_debug!(self.sink, ctx, "Loaded device \"{}\".", def.device_name),
            Err(e) => dd_error!(self.sink, ctx, "{}", e),
        }
        result
    }

    /// Loads into an existing definition.
    ///
    /// `def` is cleared first. It receives the loaded content only if loading
    /// succeeds and stays cleared otherwise.
    pub fn load_into(
        &self,
        def: &mut DeviceDefinition,
        path: impl AsRef<Path>,
    ) -> Result<(), DevDefError> {
        def.clear();
        *def = self.load(path)?;
        Ok(())
    }

    /// Writes `def` to `path`, replacing any file already there.
    ///
    /// # Errors
    /// `WriteFailure` if an existing file cannot be removed, the document cannot
    /// be serialized, or the new file cannot be written.
    pub fn save(&self, def: &DeviceDefinition, path: impl AsRef<Path>) -> Result<(), DevDefError> {
        let path = path.as_ref();
        let ctx = LogContext::saving(path);

        let result = write_document(def, path);
        match &result {
            Ok(()) => dd_debug!(self.sink, ctx, "Saved device \"{}\".", def.device_name),
            Err(e) => dd_error!(self.sink, ctx, "{}", e),
        }
        result
    }
}

fn read_document(path: &Path) -> Result<String, DevDefError> {
    if !path.exists() {
        return Err(DevDefError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| DevDefError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(def: &DeviceDefinition, path: &Path) -> Result<(), DevDefError> {
    if path.exists() {
        fs::remove_file(path).map_err(|source| DevDefError::RemoveFailed {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let xml = save_device_definition_to_string(def)?;
    fs::write(path, xml).map_err(|source| DevDefError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a device definition file, reporting notes to the `log` facade.
///
/// # Errors
/// See [`DeviceDefinitionFiler::load`].
pub fn load_device_definition(path: impl AsRef<Path>) -> Result<DeviceDefinition, DevDefError> {
    DeviceDefinitionFiler::new(&LogSink).load(path)
}

/// Saves a device definition file, reporting notes to the `log` facade.
///
/// # Errors
/// See [`DeviceDefinitionFiler::save`].
pub fn save_device_definition(
    def: &DeviceDefinition,
    path: impl AsRef<Path>,
) -> Result<(), DevDefError> {
    DeviceDefinitionFiler::new(&LogSink).save(def, path)
}
