// crates/devdef-rs-xml/tests/robustness.rs

use devdef_rs_xml::{
    CollectingSink, DevDefError, DeviceDefinition, DeviceDefinitionFiler, ErrorKind,
    load_device_definition, load_device_definition_from_str, save_device_definition,
};
use log::Level;
use std::fs;
use std::path::Path;

const SOURCE: &str = "/defs/robustness.syde_devdef";

/// Builds a minimal valid document with the given bus attributes and extra body.
fn document(bus_attributes: &str, extra: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<opensyde-device-definition>
  <file-version>0x0001</file-version>
  <device-name>ESX3CM</device-name>
  <device-description>Controller</device-description>
  {extra}
  <image>esx3cm.png</image>
  <bus-systems-available {bus_attributes}/>
  <can-bitrates-support>
    <can-bitrate value="125"/>
  </can-bitrates-support>
</opensyde-device-definition>"#
    )
}

fn load(xml: &str) -> Result<DeviceDefinition, DevDefError> {
    load_device_definition_from_str(xml, Path::new(SOURCE))
}

#[test]
fn test_bus_count_upper_bound() {
    let def = load(&document(r#"can="255" ethernet="0""#, "")).expect("255 buses must load");
    assert_eq!(def.num_can_buses, 255);

    let err = load(&document(r#"can="256" ethernet="0""#, "")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert!(matches!(
        err,
        DevDefError::ValueOutOfRange {
            element: "bus-systems-available",
            attribute: "can",
            value: 256,
            max: 255,
        }
    ));
}

#[test]
fn test_bus_count_not_a_number() {
    let err = load(&document(r#"can="two" ethernet="0""#, "")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert!(matches!(err, DevDefError::InvalidAttributeFormat { .. }));

    let err = load(&document(r#"can="-1" ethernet="0""#, "")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
}

#[test]
fn test_missing_bus_attribute() {
    let err = load(&document(r#"can="1""#, "")).unwrap_err();
    assert!(matches!(
        err,
        DevDefError::MissingAttribute {
            element: "bus-systems-available",
            attribute: "ethernet",
        }
    ));
}

#[test]
fn test_programming_properties_need_attribute() {
    // The element is optional, but once present its attribute is mandatory.
    let err = load(&document(
        r#"can="1" ethernet="0""#,
        "<programming-properties/>",
    ))
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert_eq!(
        err.to_string(),
        "XML node \"programming-properties\" attribute \"is-programmable\" not found"
    );

    let def = load(&document(
        r#"can="1" ethernet="0""#,
        r#"<programming-properties is-programmable="1"/>"#,
    ))
    .unwrap();
    assert!(def.programming_support);
}

#[test]
fn test_missing_mandatory_elements() {
    let xml = document(r#"can="1" ethernet="0""#, "");

    let cases = [
        ("<file-version>0x0001</file-version>", "file-version"),
        ("<device-name>ESX3CM</device-name>", "device-name"),
        (
            "<device-description>Controller</device-description>",
            "device-description",
        ),
        ("<image>esx3cm.png</image>", "image"),
        (
            r#"<bus-systems-available can="1" ethernet="0"/>"#,
            "bus-systems-available",
        ),
    ];

    for (snippet, element) in cases {
        let err = load(&xml.replace(snippet, "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation, "removing {}", element);
        assert_eq!(
            err.to_string(),
            format!("XML node \"{}\" not found", element)
        );
    }
}

#[test]
fn test_first_missing_element_is_reported() {
    let xml = document(r#"can="1" ethernet="0""#, "")
        .replace("<device-name>ESX3CM</device-name>", "")
        .replace("<image>esx3cm.png</image>", "");
    let err = load(&xml).unwrap_err();
    assert!(matches!(
        err,
        DevDefError::MissingElement {
            element: "device-name"
        }
    ));
}

#[test]
fn test_bitrate_out_of_range() {
    let xml = document(r#"can="1" ethernet="0""#, "")
        .replace(r#"<can-bitrate value="125"/>"#, r#"<can-bitrate value="65536"/>"#);
    let err = load(&xml).unwrap_err();
    assert!(matches!(
        err,
        DevDefError::ValueOutOfRange {
            element: "can-bitrate",
            ..
        }
    ));
}

#[test]
fn test_wrong_root_element() {
    let xml = document(r#"can="1" ethernet="0""#, "")
        .replace("opensyde-device-definition", "device-definition");
    let err = load(&xml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert!(matches!(err, DevDefError::UnexpectedRoot { .. }));
}

#[test]
fn test_malformed_document() {
    for xml in [
        "",
        "not xml at all",
        "<opensyde-device-definition><device-name>ESX3CM</device-description>",
    ] {
        let err = load(xml).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::MalformedDocument,
            "input {:?} gave {}",
            xml,
            err
        );
    }
}

#[test]
fn test_unknown_content_is_ignored() {
    let xml = document(
        r#"can="1" ethernet="0" usb="4""#,
        r#"<future-feature enabled="true"><nested/></future-feature>"#,
    );
    let def = load(&xml).unwrap();
    assert_eq!(def.num_can_buses, 1);
}

#[test]
fn test_unknown_element_between_bitrates_is_skipped() {
    let xml = document(r#"can="1" ethernet="0""#, "").replace(
        r#"<can-bitrate value="125"/>"#,
        r#"<can-bitrate value="125"/><note/><can-bitrate value="250"/>"#,
    );
    let def = load(&xml).unwrap();
    assert_eq!(def.supported_bitrates, vec![125, 250]);
}

#[test]
fn test_unknown_element_between_accepted_names_is_skipped() {
    let xml = document(
        r#"can="1" ethernet="0""#,
        r#"<other-accepted-names>
    <other-accepted-name>ESX3CM_A</other-accepted-name>
    <comment>renamed in 2019</comment>
    <other-accepted-name>ESX3CM_B</other-accepted-name>
  </other-accepted-names>"#,
    );
    let def = load(&xml).unwrap();
    assert_eq!(def.other_accepted_names, vec!["ESX3CM_A", "ESX3CM_B"]);
}

#[test]
fn test_duplicated_single_element_is_rejected() {
    let xml = document(
        r#"can="1" ethernet="0""#,
        "<device-name>OTHER</device-name>",
    );
    let err = load(&xml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDocument);

    let xml = document(r#"can="1" ethernet="0""#, "").replace(
        "<device-name>ESX3CM</device-name>",
        "<device-name>ESX<b/>3CM</device-name>",
    );
    let err = load(&xml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDocument);
}

#[test]
fn test_missing_file_resets_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.syde_devdef");

    let err = load_device_definition(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let sink = CollectingSink::new();
    let mut def = DeviceDefinition {
        device_name: "previous".into(),
        supported_bitrates: vec![125],
        ..Default::default()
    };
    let err = DeviceDefinitionFiler::new(&sink)
        .load_into(&mut def, &path)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(def, DeviceDefinition::default());
    assert_eq!(sink.count(Level::Error), 1);
}

#[test]
fn test_failed_load_leaves_descriptor_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.syde_devdef");
    fs::write(&path, document(r#"can="300" ethernet="0""#, "")).unwrap();

    let mut def = DeviceDefinition {
        device_name: "previous".into(),
        ..Default::default()
    };
    let sink = CollectingSink::new();
    let err = DeviceDefinitionFiler::new(&sink)
        .load_into(&mut def, &path)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    assert_eq!(def, DeviceDefinition::default());
    assert!(sink.contains(Level::Error, "exceeds maximum 255"));
}

#[test]
fn test_save_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.syde_devdef");

    let err = save_device_definition(&DeviceDefinition::default(), &path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(!path.exists());
}

#[test]
fn test_save_when_target_is_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("occupied");
    fs::create_dir(&path).unwrap();

    // A directory cannot be erased like a file.
    let err = save_device_definition(&DeviceDefinition::default(), &path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(matches!(err, DevDefError::RemoveFailed { .. }));
}
