use std::error::Error;
use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use lightsail_props::config::{Definition, load_and_validate, load_from_str};
use lightsail_props::errors::LightsailError;
use lightsail_props::lightsail::BlueprintFamily;
use lightsail_props::render::{render_definition, render_definition_json};
use lightsail_props::types::Deferrable;
use lightsail_props_test_utils::builders::{DefinitionBuilder, instance_config, snapshot_add_on};
use lightsail_props_test_utils::{demo_path, init_tracing};

type TestResult = Result<(), Box<dyn Error>>;

fn write_definition(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn minimal_demo_loads_with_defaults() -> TestResult {
    init_tracing();

    let def = load_and_validate(demo_path("minimal.toml"))?;
    assert_eq!(def.len(), 1);

    let inst = def.get("DemoInstance").expect("DemoInstance present");
    assert_eq!(inst.blueprint().id(), "amazon_linux_2023");
    assert_eq!(inst.blueprint().family(), BlueprintFamily::LinuxOs);
    assert_eq!(inst.bundle().id(), "small_3_0");
    assert_eq!(inst.instance_name(), "demoinstance");
    assert_eq!(inst.add_ons().len(), 1);
    assert!(inst.add_ons()[0].auto_snapshot_add_on_request.is_none());

    Ok(())
}

#[test]
fn full_demo_renders_like_hand_built_instance() -> TestResult {
    init_tracing();

    let def = load_and_validate(demo_path("full.toml"))?;
    let resources = serde_json::to_value(render_definition(&def))?;
    let props = &resources["DemoInstance"]["Properties"];

    assert_eq!(props["InstanceName"], "DemoInstance");
    assert_eq!(props["KeyPairName"], "DemoKeyPair");
    assert_eq!(props["UserData"], "echo \"Test\"");
    assert_eq!(
        props["AddOns"],
        json!([{
            "AddOnType": "AutoSnapshot",
            "AutoSnapshotAddOnRequest": { "SnapshotTimeOfDay": "06:00" },
            "Status": "Enabled",
        }])
    );
    assert_eq!(props["Networking"]["Ports"][0]["CommonName"], "SSH");
    assert_eq!(props["Networking"]["Ports"][0]["FromPort"], 22);

    Ok(())
}

#[test]
fn web_fleet_demo_covers_custom_sections() -> TestResult {
    init_tracing();

    let def = load_and_validate(demo_path("web-fleet.toml"))?;
    assert_eq!(def.len(), 3);

    let ids: Vec<&str> = def.instances().map(|i| i.logical_id()).collect();
    assert_eq!(ids, vec!["Api", "Blog", "Windows"]);

    let api = def.get("Api").unwrap();
    let ports: Vec<&str> = api
        .networking()
        .ports
        .iter()
        .map(|p| p.common_name.as_str())
        .collect();
    assert_eq!(ports, vec!["HTTPS", "API", "Ping"]);
    assert_eq!(api.networking().ports[1].cidrs, vec!["10.0.0.0/16".to_string()]);
    assert_eq!(
        api.add_ons()[0]
            .auto_snapshot_add_on_request
            .as_ref()
            .unwrap()
            .snapshot_time_of_day(),
        &Deferrable::parameter("ApiSnapshotTime")
    );
    assert_eq!(api.hardware().unwrap().disks.as_ref().unwrap().len(), 3);

    let windows = def.get("Windows").unwrap();
    assert_eq!(windows.instance_name(), "win-build-01");
    assert!(windows.add_ons().is_empty());

    let rendered: serde_json::Value = serde_json::from_str(&render_definition_json(&def, false)?)?;
    assert_eq!(
        rendered["Api"]["Properties"]["Networking"]["MonthlyTransfer"],
        json!({ "GbPerMonthAllocated": "2048" })
    );
    assert_eq!(
        rendered["Api"]["Properties"]["AddOns"][0]["AutoSnapshotAddOnRequest"]["SnapshotTimeOfDay"],
        json!({ "Ref": "ApiSnapshotTime" })
    );
    assert_eq!(rendered["Blog"]["Properties"]["BlueprintId"], "wordpress");

    Ok(())
}

#[test]
fn invalid_snapshot_format_fails_to_load() {
    match load_and_validate(demo_path("invalid-snapshot-format.toml")) {
        Err(LightsailError::SnapshotTimeFormat(value)) => assert_eq!(value, "0600"),
        other => panic!("Expected SnapshotTimeFormat error, got: {:?}", other),
    }
}

#[test]
fn invalid_snapshot_range_fails_to_load() {
    match load_and_validate(demo_path("invalid-snapshot-range.toml")) {
        Err(LightsailError::SnapshotTimeRange(value)) => assert_eq!(value, "25:00"),
        other => panic!("Expected SnapshotTimeRange error, got: {:?}", other),
    }
}

#[test]
fn import_value_snapshot_time_is_accepted() -> TestResult {
    let raw = load_from_str(
        r#"
[instance.Web]
blueprint = "nginx"
bundle = "micro_3_0"

[[instance.Web.add_on]]
snapshot_time_of_day = { import_value = "shared-snapshot-time" }
"#,
    )?;
    let def = Definition::try_from(raw)?;
    let rendered = serde_json::to_value(render_definition(&def))?;

    assert_eq!(
        rendered["Web"]["Properties"]["AddOns"][0]["AutoSnapshotAddOnRequest"]["SnapshotTimeOfDay"],
        json!({ "Fn::ImportValue": "shared-snapshot-time" })
    );
    Ok(())
}

#[test]
fn empty_definition_is_rejected() {
    let file = write_definition("# nothing here\n");
    match load_and_validate(file.path()) {
        Err(LightsailError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn unknown_fields_are_toml_errors() {
    let file = write_definition(
        r#"
[instance.Web]
blueprint = "nginx"
bundle = "micro_3_0"
bundel = "typo"
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(LightsailError::TomlError(_))
    ));
}

#[test]
fn unknown_networking_preset_is_a_config_error() {
    let file = write_definition(
        r#"
[instance.Web]
blueprint = "nginx"
bundle = "micro_3_0"
networking = "mail_server"
"#,
    );
    match load_and_validate(file.path()) {
        Err(LightsailError::ConfigError(msg)) => {
            assert!(msg.contains("mail_server"));
            assert!(msg.contains("Web"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn duplicate_physical_names_are_rejected() {
    let file = write_definition(
        r#"
[instance.Web]
blueprint = "nginx"
bundle = "micro_3_0"

[instance.web]
blueprint = "nginx"
bundle = "micro_3_0"
"#,
    );
    match load_and_validate(file.path()) {
        Err(LightsailError::ConfigError(msg)) => assert!(msg.contains("share the instance name")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn conflicting_hardware_layouts_are_rejected() {
    let file = write_definition(
        r#"
[instance.Web]
blueprint = "nginx"
bundle = "micro_3_0"

[instance.Web.hardware]
system_disk_size = "40"
disks = [{ disk_name = "Disk1", path = "/dev/xvda" }]
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(LightsailError::ConfigError(_))
    ));
}

#[test]
fn snapshot_time_on_other_add_on_type_is_rejected() {
    let file = write_definition(
        r#"
[instance.Web]
blueprint = "nginx"
bundle = "micro_3_0"

[[instance.Web.add_on]]
add_on_type = "StopInstanceOnIdle"
snapshot_time_of_day = "06:00"
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(LightsailError::ConfigError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_and_validate("does/not/exist/Lightsail.toml"),
        Err(LightsailError::IoError(_))
    ));
}

#[test]
fn builder_definitions_validate_add_ons() {
    let mut bad = instance_config("nginx", "micro_3_0");
    bad.add_on = Some(vec![snapshot_add_on(Some("7:00".into()))]);
    let raw = DefinitionBuilder::new().with_instance("Web", bad).raw();
    assert!(matches!(
        Definition::try_from(raw),
        Err(LightsailError::SnapshotTimeFormat(_))
    ));

    let mut good = instance_config("nginx", "micro_3_0");
    good.add_on = Some(vec![snapshot_add_on(None)]);
    let def = DefinitionBuilder::new().with_instance("Web", good).build();
    let request = def.get("Web").unwrap().add_ons()[0]
        .auto_snapshot_add_on_request
        .clone()
        .unwrap();
    assert_eq!(request.snapshot_time_of_day().as_known(), Some("06:00"));
}
