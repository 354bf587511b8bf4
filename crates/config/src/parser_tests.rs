// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use umbra_core::Contact;

const PLAN: &str = "\
# Eclipse plan, 2026-08-12
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Verif,1,1,1,1
Photo,Max,-,00:00:10,-,-,-,-,-,8.0,1600,0.008,0
Boucle,C1,+,00:01:00,+,00:30:00,30,-,-,-,1600,-,0
Interval,C2,+,00:00:05,+,00:02:00,10,-,-,-,-,-,250
";

#[test]
fn parses_full_plan() {
    let config = parse_plan(PLAN).unwrap();

    assert!(!config.test_mode);
    assert!(config.verification.is_some());
    assert_eq!(config.actions.len(), 3);
    assert_eq!(
        config.contacts.get(Contact::Max),
        "16:03:53".parse().unwrap()
    );
}

#[test]
fn photo_line_becomes_single_shot() {
    let config = parse_plan(PLAN).unwrap();

    let ActionSpec::SingleShot { start, exposure } = &config.actions[0] else {
        panic!("expected SingleShot, got {:?}", config.actions[0]);
    };
    assert_eq!(start.reference, TimeReference::Contact(Contact::Max));
    assert_eq!(start.operator, Operator::Minus);
    assert_eq!(start.offset_secs, 10);
    assert_eq!(exposure.aperture, Some(8.0));
    assert_eq!(exposure.iso, Some(1600));
    assert_eq!(exposure.shutter_secs, Some(0.008));
}

#[test]
fn boucle_line_becomes_bounded_loop() {
    let config = parse_plan(PLAN).unwrap();

    let ActionSpec::BoundedLoop {
        start,
        end,
        interval_secs,
        exposure,
    } = &config.actions[1]
    else {
        panic!("expected BoundedLoop, got {:?}", config.actions[1]);
    };
    assert_eq!(start.reference, TimeReference::Contact(Contact::C1));
    assert_eq!(start.offset_secs, 60);
    // End shares the start's reference point
    assert_eq!(end.reference, TimeReference::Contact(Contact::C1));
    assert_eq!(end.operator, Operator::Plus);
    assert_eq!(end.offset_secs, 1800);
    assert_eq!(*interval_secs, 30.0);
    // Unset aperture/shutter stay unset
    assert_eq!(exposure.aperture, None);
    assert_eq!(exposure.iso, Some(1600));
}

#[test]
fn interval_line_becomes_counted_interval() {
    let config = parse_plan(PLAN).unwrap();

    let ActionSpec::CountedInterval {
        count, exposure, ..
    } = &config.actions[2]
    else {
        panic!("expected CountedInterval, got {:?}", config.actions[2]);
    };
    assert_eq!(*count, 10);
    assert_eq!(exposure.mlu_delay_ms, 250);
}

#[test]
fn test_mode_flag() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,1
Photo,Max,-,00:00:10,-,-,-,-,-,-,-,-,0
";
    let config = parse_plan(plan).unwrap();
    assert!(config.test_mode);
}

#[test]
fn absolute_time_reference() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Photo,-,+,09:30:00,-,-,-,-,-,-,-,-,0
";
    let config = parse_plan(plan).unwrap();
    let ActionSpec::SingleShot { start, .. } = &config.actions[0] else {
        panic!("expected SingleShot");
    };
    assert_eq!(start.reference, TimeReference::Absolute);
    assert_eq!(start.offset_secs, 9 * 3600 + 30 * 60);
}

#[test]
fn missing_config_line_is_an_error() {
    let plan = "Photo,Max,-,00:00:10,-,-,-,-,-,-,-,-,0\n";
    assert!(matches!(
        parse_plan(plan),
        Err(PlanError::MissingContacts)
    ));
}

#[test]
fn plan_without_actions_is_an_error() {
    let plan = "Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0\n";
    assert!(matches!(parse_plan(plan), Err(PlanError::NoActions)));
}

#[test]
fn unknown_reference_reports_line_number() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Photo,C7,-,00:00:10,-,-,-,-,-,-,-,-,0
";
    let err = parse_plan(plan).unwrap_err();
    let PlanError::Syntax { line, message } = err else {
        panic!("expected Syntax error, got {:?}", err);
    };
    assert_eq!(line, 2);
    assert!(message.contains("unknown time reference"));
}

#[test]
fn invalid_operator_is_rejected() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Photo,Max,*,00:00:10,-,-,-,-,-,-,-,-,0
";
    let err = parse_plan(plan).unwrap_err();
    assert!(err.to_string().contains("invalid operator"));
}

#[test]
fn malformed_time_is_rejected() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Photo,Max,-,25:00:00,-,-,-,-,-,-,-,-,0
";
    let err = parse_plan(plan).unwrap_err();
    assert!(err.to_string().contains("invalid hour"));
}

#[test]
fn boucle_without_interval_is_rejected() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Boucle,C2,+,00:00:05,-,00:01:00,-,-,-,-,-,-,0
";
    let err = parse_plan(plan).unwrap_err();
    assert!(err.to_string().contains("requires an interval"));
}

#[test]
fn boucle_with_zero_interval_is_rejected() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Boucle,C2,+,00:00:05,-,00:01:00,0,-,-,-,-,-,0
";
    let err = parse_plan(plan).unwrap_err();
    assert!(err.to_string().contains("interval must be positive"));
}

#[test]
fn short_action_line_is_rejected() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Photo,Max,-,00:00:10
";
    let err = parse_plan(plan).unwrap_err();
    assert!(err.to_string().contains("requires at least 13 fields"));
}

#[test]
fn unknown_line_kinds_are_skipped() {
    let plan = "\
Config,14:41:05,16:02:49,16:03:53,16:04:58,17:31:03,0
Bogus,1,2,3
Photo,Max,-,00:00:10,-,-,-,-,-,-,-,-,0
";
    let config = parse_plan(plan).unwrap();
    assert_eq!(config.actions.len(), 1);
}

#[test]
fn load_plan_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eclipse.txt");
    std::fs::write(&path, PLAN).unwrap();

    let config = load_plan(&path).unwrap();
    assert_eq!(config.actions.len(), 3);
}

#[test]
fn load_plan_missing_file_is_io_error() {
    let err = load_plan(std::path::Path::new("/nonexistent/eclipse.txt")).unwrap_err();
    assert!(matches!(err, PlanError::Io(_)));
}
