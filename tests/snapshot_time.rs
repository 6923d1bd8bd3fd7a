use proptest::prelude::*;

use lightsail_props::errors::LightsailError;
use lightsail_props::lightsail::{AddOn, AutoSnapshotAddOn, validate_snapshot_time_of_day};
use lightsail_props::types::Deferrable;

#[test]
fn accepts_well_formed_time() {
    let value = validate_snapshot_time_of_day(Some("06:00".into())).unwrap();
    assert_eq!(value, Deferrable::known("06:00"));
}

#[test]
fn omitted_time_defaults_to_six() {
    let value = validate_snapshot_time_of_day(None).unwrap();
    assert_eq!(value.as_known(), Some("06:00"));

    let addon = AutoSnapshotAddOn::new(None).unwrap();
    assert_eq!(addon.snapshot_time_of_day().as_known(), Some("06:00"));
}

#[test]
fn missing_colon_is_a_format_error() {
    match validate_snapshot_time_of_day(Some("0600".into())) {
        Err(err @ LightsailError::SnapshotTimeFormat(_)) => {
            let msg = err.to_string();
            assert!(msg.contains("\"HH:00\""), "{msg}");
            assert!(msg.contains("\"0600\""), "{msg}");
        }
        other => panic!("Expected SnapshotTimeFormat error, got: {:?}", other),
    }
}

#[test]
fn other_malformed_shapes_are_format_errors() {
    for bad in ["6:00", "06:30", "06:00:00", " 06:00", "ab:00", "", "24h"] {
        let result = validate_snapshot_time_of_day(Some(bad.into()));
        assert!(
            matches!(result, Err(LightsailError::SnapshotTimeFormat(ref v)) if v == bad),
            "{bad:?} -> {result:?}"
        );
    }
}

#[test]
fn hour_out_of_range_is_a_range_error() {
    match validate_snapshot_time_of_day(Some("25:00".into())) {
        Err(err @ LightsailError::SnapshotTimeRange(_)) => {
            let msg = err.to_string();
            assert!(msg.contains("between 00 and 23"), "{msg}");
            assert!(msg.contains("\"25:00\""), "{msg}");
        }
        other => panic!("Expected SnapshotTimeRange error, got: {:?}", other),
    }

    assert!(matches!(
        validate_snapshot_time_of_day(Some("99:00".into())),
        Err(LightsailError::SnapshotTimeRange(_))
    ));
    assert!(matches!(
        validate_snapshot_time_of_day(Some("24:00".into())),
        Err(LightsailError::SnapshotTimeRange(_))
    ));
}

#[test]
fn deferred_values_skip_validation() {
    let param = Deferrable::parameter("SnapshotTime");
    assert_eq!(
        validate_snapshot_time_of_day(Some(param.clone())).unwrap(),
        param
    );

    let import = Deferrable::import_value("shared-snapshot-time");
    let addon = AutoSnapshotAddOn::new(Some(import.clone())).unwrap();
    assert_eq!(addon.snapshot_time_of_day(), &import);
}

#[test]
fn auto_snapshot_add_on_propagates_errors() {
    assert!(AddOn::auto_snapshot(Some("0600".into())).is_err());

    let addon = AddOn::auto_snapshot(Some("23:00".into())).unwrap();
    assert_eq!(addon.add_on_type, "AutoSnapshot");
    let request = addon.auto_snapshot_add_on_request.as_ref().unwrap();
    assert_eq!(request.snapshot_time_of_day().as_known(), Some("23:00"));
}

proptest! {
    #[test]
    fn every_valid_hour_is_accepted_unchanged(hour in 0u8..=23) {
        let time = format!("{hour:02}:00");
        let value = validate_snapshot_time_of_day(Some(time.clone().into())).unwrap();
        prop_assert_eq!(value, Deferrable::Known(time));
    }

    #[test]
    fn every_hour_above_23_is_out_of_range(hour in 24u8..=99) {
        let time = format!("{hour:02}:00");
        let result = validate_snapshot_time_of_day(Some(time.clone().into()));
        prop_assert!(matches!(result, Err(LightsailError::SnapshotTimeRange(v)) if v == time));
    }

    #[test]
    fn non_zero_minutes_are_format_errors(hour in 0u8..=23, minute in 1u8..=59) {
        let time = format!("{hour:02}:{minute:02}");
        let result = validate_snapshot_time_of_day(Some(time.into()));
        prop_assert!(matches!(result, Err(LightsailError::SnapshotTimeFormat(_))));
    }

    #[test]
    fn arbitrary_strings_never_panic(s in ".*") {
        let _ = validate_snapshot_time_of_day(Some(s.into()));
    }
}
