//! Golden tests for the clinic file parser.
//!
//! Each case is a whole clinic file and the outcome loading it must have.

use std::io::Write;

use clinic_core::models::{CprLevel, JobTitle, RoomType};
use clinic_core::parser::{parse_str, ParseError, Section};
use clinic_core::Clinic;

const FULL_CLINIC: &str = "\
Cybernetic Implant Clinic
4
0 0 10 10 WAITING Front Waiting Room
10 0 20 10 EXAM Triage
20 0 30 10 exam Exam Room 2
30 0 40 10 Procedure Procedure Suite
3
PHYSICIAN Amy Anguish DOCTORAL 1234567890
NURSE Benny Bruise MASTERS 9876543210
RECEPTION Frank Febrile ALLIED bls
4
1 Aandi Acute 1/1/1981
1 Beth Bunion 3/2/1992
2 Cindy Cyst 5/5/1955
4 David Dyspepsia 12/12/2000
";

/// Expected failure for a malformed file.
struct GoldenCase {
    id: &'static str,
    input: &'static str,
    expected_message: &'static str,
}

fn get_failure_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "blank-name",
            input: "\n1\n",
            expected_message: "Clinic name is missing or blank",
        },
        GoldenCase {
            id: "room-count-not-integer",
            input: "Clinic\nfour\n",
            expected_message: "Line 2: number of rooms is invalid: \"four\"",
        },
        GoldenCase {
            id: "room-count-overflows",
            input: "Clinic\n99999999999999999999999\n",
            expected_message: "Line 2: number of rooms is invalid: \"99999999999999999999999\"",
        },
        GoldenCase {
            id: "room-count-huge",
            input: "Clinic\n18446744073709551615\n",
            expected_message: "Unexpected end of input: expected 18446744073709551615 rooms, found 0",
        },
        GoldenCase {
            id: "staff-count-huge",
            input: "Clinic\n0\n1000000000\nNURSE Benny Bruise MASTERS 9876543210\n",
            expected_message: "Unexpected end of input: expected 1000000000 staff members, found 1",
        },
        GoldenCase {
            id: "patient-count-huge",
            input: "Clinic\n1\n0 0 1 1 WAITING Front\n0\n1000000000\n",
            expected_message: "Unexpected end of input: expected 1000000000 patients, found 0",
        },
        GoldenCase {
            id: "room-section-short",
            input: "Clinic\n2\n0 0 1 1 WAITING Front\n",
            expected_message: "Unexpected end of input: expected 2 rooms, found 1",
        },
        GoldenCase {
            id: "bad-room-type",
            input: "Clinic\n1\n0 0 1 1 CLOSET Broom\n0\n0\n",
            expected_message: "Line 3: Unknown room type: CLOSET",
        },
        GoldenCase {
            id: "coordinate-not-integer",
            input: "Clinic\n1\n0 0 x 1 WAITING Front\n0\n0\n",
            expected_message: "Line 3: room coordinate must be an integer, got \"x\"",
        },
        GoldenCase {
            id: "negative-coordinate",
            input: "Clinic\n1\n0 -5 1 1 WAITING Front\n0\n0\n",
            expected_message: "Line 3: Coordinates cannot be negative: (0, -5)",
        },
        GoldenCase {
            id: "coordinate-too-large",
            input: "Clinic\n1\n0 0 4294967296 1 WAITING Front\n0\n0\n",
            expected_message: "Line 3: Coordinates must not exceed 4294967295: (4294967296, 1)",
        },
        GoldenCase {
            id: "staff-count-missing",
            input: "Clinic\n1\n0 0 1 1 WAITING Front\n",
            expected_message: "Number of staff members is missing",
        },
        GoldenCase {
            id: "staff-incomplete",
            input: "Clinic\n0\n1\nNURSE Benny Bruise\n0\n",
            expected_message: "Line 4: incomplete staff record",
        },
        GoldenCase {
            id: "bad-cpr-level",
            input: "Clinic\n0\n1\nRECEPTION Frank Febrile ALLIED Z\n0\n",
            expected_message: "Line 4: Unknown CPR level: Z",
        },
        GoldenCase {
            id: "patient-room-out-of-range",
            input: "Clinic\n1\n0 0 1 1 WAITING Front\n0\n1\n2 Aandi Acute 1/1/1981\n",
            expected_message: "Line 6: room 2 does not exist (clinic has 1 rooms)",
        },
        GoldenCase {
            id: "patient-incomplete",
            input: "Clinic\n1\n0 0 1 1 WAITING Front\n0\n1\n1 Aandi Acute\n",
            expected_message: "Line 6: incomplete patient record",
        },
        GoldenCase {
            id: "exam-room-double-booked",
            input: "Clinic\n1\n0 0 1 1 EXAM Triage\n0\n2\n1 Aandi Acute 1/1/1981\n1 Beth Bunion 3/2/1992\n",
            expected_message: "Line 7: room 1 is already occupied by another patient",
        },
    ]
}

#[test]
fn test_golden_failures() {
    for case in get_failure_cases() {
        let err = Clinic::load_str(case.input).expect_err(case.id);
        assert_eq!(
            err.to_string(),
            case.expected_message,
            "Case {} produced the wrong error",
            case.id
        );
    }
}

#[test]
fn test_declared_counts_and_room_numbers() {
    let doc = parse_str(FULL_CLINIC).unwrap();
    assert_eq!(doc.rooms.len(), 4);
    assert_eq!(doc.staff.len(), 3);
    assert_eq!(doc.patients.len(), 4);

    let numbers: Vec<_> = doc.rooms.iter().map(|r| r.number()).collect();
    assert_eq!(numbers, vec![Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(doc.rooms[2].name(), "Exam Room 2");
    assert_eq!(doc.rooms[3].room_type(), RoomType::Procedure);

    assert_eq!(doc.staff[1].job_title(), JobTitle::Nurse);
    assert_eq!(doc.staff[2].cpr_level(), Some(CprLevel::Bls));
}

#[test]
fn test_loaded_clinic_matches_file() {
    let clinic = Clinic::load_str(FULL_CLINIC).unwrap();
    assert_eq!(clinic.room_count(), 4);
    assert_eq!(clinic.staff().len(), 3);
    assert_eq!(clinic.patient_count(), 4);

    let ids: Vec<u32> = clinic.patients().iter().map(|p| p.id().0).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    let assignments = clinic.room_assignments();
    assert_eq!(assignments[&1].len(), 2);
    assert_eq!(assignments[&2].len(), 1);
    assert!(!assignments.contains_key(&3));
    assert_eq!(assignments[&4][0].date_of_birth(), "12/12/2000");
}

#[test]
fn test_failed_load_reports_section() {
    let err = parse_str("Clinic\n0\n2\nNURSE Benny Bruise MASTERS 9876543210\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedEof {
            section: Section::Staff,
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FULL_CLINIC.as_bytes()).unwrap();

    let clinic = Clinic::load_from_path(file.path().to_str().unwrap()).unwrap();
    assert_eq!(clinic.clinic_name(), "Cybernetic Implant Clinic");

    assert!(matches!(
        Clinic::load_from_path("https://example.org/clinic.txt"),
        Err(ParseError::RemoteSource(_))
    ));
}
