use std::error::Error;

use serde_json::{Value, json};

use lightsail_props::errors::LightsailError;
use lightsail_props::lightsail::{
    AddOn, Blueprint, Bundle, Hardware, Instance, InstanceProps, Networking, Port,
};
use lightsail_props::types::{AddOnStatus, Deferrable};
use lightsail_props_test_utils::builders::InstancePropsBuilder;
use lightsail_props_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn properties(instance: &Instance) -> Value {
    serde_json::to_value(instance.render_properties()).expect("properties serialize")
}

fn open_port(name: &str, protocol: &str, from: i32, to: i32) -> Value {
    json!({
        "AccessDirection": "inbound",
        "AccessFrom": "Anywhere (0.0.0.0/0)",
        "AccessType": "Public",
        "CidrListAliases": [],
        "Cidrs": [],
        "CommonName": name,
        "FromPort": from,
        "Ipv6Cidrs": [],
        "Protocol": protocol,
        "ToPort": to,
    })
}

#[test]
fn minimum_properties_apply_defaults() -> TestResult {
    init_tracing();

    let instance = Instance::new(
        "DemoInstance",
        InstanceProps::new(Blueprint::AMAZON_LINUX_2023, Bundle::SMALL_3_0),
    )?;

    let props = properties(&instance);
    assert_eq!(
        props,
        json!({
            "AddOns": [{ "AddOnType": "AutoSnapshot", "Status": "Enabled" }],
            "BlueprintId": "amazon_linux_2023",
            "BundleId": "small_3_0",
            "InstanceName": "demoinstance",
            "Networking": { "Ports": [] },
            "UserData": "",
        })
    );

    Ok(())
}

#[test]
fn maximum_properties_render_every_facet() -> TestResult {
    init_tracing();

    let instance = InstancePropsBuilder::new()
        .add_on(AddOn::auto_snapshot(None)?)
        .networking(Networking::ssh_only())
        .key_pair_name("DemoKeyPair")
        .instance_name("DemoInstance")
        .user_data("echo \"Test\"")
        .build("DemoInstance");

    assert_eq!(
        properties(&instance),
        json!({
            "AddOns": [{
                "AddOnType": "AutoSnapshot",
                "AutoSnapshotAddOnRequest": { "SnapshotTimeOfDay": "06:00" },
                "Status": "Enabled",
            }],
            "BlueprintId": "amazon_linux_2023",
            "BundleId": "small_3_0",
            "InstanceName": "DemoInstance",
            "KeyPairName": "DemoKeyPair",
            "Networking": { "Ports": [open_port("SSH", "tcp", 22, 22)] },
            "UserData": "echo \"Test\"",
        })
    );

    Ok(())
}

#[test]
fn resource_carries_lightsail_type() {
    let instance = InstancePropsBuilder::new().build("Web");
    let resource = serde_json::to_value(instance.render()).unwrap();

    assert_eq!(resource["Type"], "AWS::Lightsail::Instance");
    assert_eq!(resource["Properties"]["BundleId"], "small_3_0");
}

#[test]
fn blueprint_ids_pass_through() {
    for blueprint in [
        Blueprint::AMAZON_LINUX_2023,
        Blueprint::WORDPRESS,
        Blueprint::WINDOWS_SERVER_2022,
        Blueprint::WINDOWS_SERVER_2019_SQL_2016_EXPRESS,
    ] {
        let expected = blueprint.id().to_string();
        let instance = InstancePropsBuilder::new()
            .blueprint(blueprint)
            .build("DemoInstance");
        assert_eq!(properties(&instance)["BlueprintId"], expected.as_str());
    }
}

#[test]
fn networking_presets_render_expected_ports() {
    let cases = [
        (Networking::custom(vec![Port::http()]), vec![open_port("HTTP", "tcp", 80, 80)]),
        (
            Networking::web_server(),
            vec![
                open_port("HTTP", "tcp", 80, 80),
                open_port("HTTPS", "tcp", 443, 443),
            ],
        ),
        (
            Networking::web_server_with_ssh(),
            vec![
                open_port("HTTP", "tcp", 80, 80),
                open_port("HTTPS", "tcp", 443, 443),
                open_port("SSH", "tcp", 22, 22),
            ],
        ),
        (
            Networking::windows_server(),
            vec![
                open_port("RDP", "tcp", 3389, 3389),
                open_port("HTTP", "tcp", 80, 80),
                open_port("HTTPS", "tcp", 443, 443),
            ],
        ),
    ];

    for (networking, ports) in cases {
        let instance = InstancePropsBuilder::new()
            .networking(networking)
            .build("DemoInstance");
        assert_eq!(properties(&instance)["Networking"], json!({ "Ports": ports }));
    }
}

#[test]
fn deferred_snapshot_time_renders_as_ref() -> TestResult {
    let instance = InstancePropsBuilder::new()
        .add_on(AddOn::auto_snapshot(Some(Deferrable::parameter("SnapshotTime")))?)
        .add_on(AddOn::auto_snapshot(Some("18:00".into()))?.with_status(AddOnStatus::Disabled))
        .build("DemoInstance");

    let add_ons = &properties(&instance)["AddOns"];
    assert_eq!(
        add_ons[0]["AutoSnapshotAddOnRequest"]["SnapshotTimeOfDay"],
        json!({ "Ref": "SnapshotTime" })
    );
    assert_eq!(add_ons[1]["AutoSnapshotAddOnRequest"]["SnapshotTimeOfDay"], "18:00");
    assert_eq!(add_ons[1]["Status"], "Disabled");

    Ok(())
}

#[test]
fn explicit_empty_add_ons_are_kept_empty() {
    let instance = InstancePropsBuilder::new().no_add_ons().build("DemoInstance");
    assert_eq!(properties(&instance)["AddOns"], json!([]));
}

#[test]
fn hardware_is_rendered_when_given() -> TestResult {
    let instance = InstancePropsBuilder::new()
        .hardware(Hardware::basic("40", ["100"])?)
        .build("DemoInstance");

    assert_eq!(
        properties(&instance)["Hardware"],
        json!({
            "Disks": [
                { "DiskName": "Disk1", "IsSystemDisk": true, "Path": "/dev/xvda", "SizeInGb": "40" },
                { "DiskName": "Disk2", "IsSystemDisk": false, "Path": "/dev/xvdb", "SizeInGb": "100" },
            ]
        })
    );

    Ok(())
}

#[test]
fn generated_names_are_lowercased_and_sanitised() -> TestResult {
    let instance = InstancePropsBuilder::new().build("My_Web.Server-01");
    assert_eq!(instance.instance_name(), "mywebserver-01");

    let long_id = "A".repeat(100);
    let instance = InstancePropsBuilder::new().build(&long_id);
    assert_eq!(instance.instance_name().len(), 64);
    assert!(instance.instance_name().chars().all(|c| c == 'a'));

    Ok(())
}

#[test]
fn unusable_logical_id_without_name_is_rejected() {
    let result = Instance::new("___", InstancePropsBuilder::new().props());
    match result {
        Err(LightsailError::ConfigError(msg)) => assert!(msg.contains("instance_name")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let named = InstancePropsBuilder::new().instance_name("ok-name").props();
    assert!(Instance::new("___", named).is_ok());
}

#[test]
fn empty_bundle_id_is_rejected() {
    let props = InstancePropsBuilder::new().bundle(Bundle::of("  ")).props();
    assert!(matches!(
        Instance::new("DemoInstance", props),
        Err(LightsailError::ConfigError(_))
    ));
}
