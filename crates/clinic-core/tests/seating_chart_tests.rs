//! Seating chart round trip: load a file, move people around, render.

use clinic_core::{Clinic, PatientId, SeatingChart, StaffId};

const CLINIC: &str = "\
Cybernetic Implant Clinic
3
0 0 10 10 WAITING Front
10 0 20 10 EXAM Triage
20 0 30 10 PROCEDURE Suture
2
PHYSICIAN Amy Anguish DOCTORAL 1234567890
NURSE Benny Bruise MASTERS 9876543210
4
1 Aandi Acute 1/1/1981
1 Beth Bunion 3/2/1992
2 Cindy Cyst 5/5/1955
1 David Dyspepsia 12/12/2000
";

#[test]
fn test_every_active_patient_listed_once() {
    let mut clinic = Clinic::load_str(CLINIC).unwrap();
    clinic.assign_room(3, 1).unwrap();
    clinic.send_patient_home(PatientId(3), StaffId(0)).unwrap();

    let chart = SeatingChart::from_clinic(&clinic);
    let mut seen: Vec<(u32, PatientId)> = chart
        .rooms
        .iter()
        .flat_map(|room| room.patients.iter().map(move |p| (room.number, p.id)))
        .collect();
    seen.sort();
    assert_eq!(
        seen,
        vec![(1, PatientId(0)), (2, PatientId(2)), (3, PatientId(1))]
    );

    let text = chart.render();
    for name in ["Aandi Acute", "Beth Bunion", "Cindy Cyst"] {
        assert_eq!(text.matches(name).count(), 1, "{name} should appear once");
    }
    assert!(!text.contains("David Dyspepsia"));
}

#[test]
fn test_chart_shows_staff_under_patient() {
    let mut clinic = Clinic::load_str(CLINIC).unwrap();
    clinic
        .assign_multiple_clinical_staff_to_patient(PatientId(2), &[StaffId(0), StaffId(1)])
        .unwrap();

    let text = SeatingChart::from_clinic(&clinic).render();
    let triage = text
        .split("Room 2: EXAM Triage")
        .nth(1)
        .and_then(|rest| rest.split("Room 3:").next())
        .unwrap();
    assert!(triage.contains("Cindy Cyst"));
    assert!(triage.contains("Dr. Amy Anguish (NPI: 1234567890)"));
    assert!(triage.contains("Nurse Benny Bruise (NPI: 9876543210)"));
}

#[test]
fn test_json_snapshot() {
    let clinic = Clinic::load_str(CLINIC).unwrap();
    let json = SeatingChart::from_clinic(&clinic).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["clinic_name"], "Cybernetic Implant Clinic");
    assert_eq!(value["rooms"].as_array().unwrap().len(), 3);
    assert_eq!(value["rooms"][0]["patients"].as_array().unwrap().len(), 3);
    assert_eq!(value["rooms"][1]["patients"][0]["full_name"], "Cindy Cyst");
    assert_eq!(value["rooms"][2]["room_type"], "PROCEDURE");
}
