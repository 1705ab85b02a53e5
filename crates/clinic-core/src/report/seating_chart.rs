//! Seating chart: every room with its occupants, their visits and staff.

use serde::{Deserialize, Serialize};

use crate::models::{Patient, PatientId, Person, RoomType, Staff, VisitStatus};
use crate::registry::Clinic;

/// Snapshot of room occupancy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatingChart {
    pub clinic_name: String,
    pub rooms: Vec<RoomEntry>,
}

/// One room and the active patients in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomEntry {
    pub number: u32,
    pub room_type: RoomType,
    pub name: String,
    /// e.g. "[0,0 to 10,10]"
    pub coordinates: String,
    pub patients: Vec<PatientEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientEntry {
    pub id: PatientId,
    pub full_name: String,
    pub date_of_birth: String,
    pub visit_status: VisitStatus,
    pub visits: Vec<VisitEntry>,
    pub staff: Vec<StaffEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitEntry {
    /// `%Y-%m-%d %H:%M:%S`
    pub registered_at: String,
    pub chief_complaint: String,
    pub body_temperature_celsius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffEntry {
    /// Title-prefixed, e.g. "Dr. Amy Anguish"
    pub display_name: String,
    pub identifier_kind: String,
    pub identifier: String,
}

impl SeatingChart {
    /// Build the chart from the registry's public view.
    pub fn from_clinic(clinic: &Clinic) -> Self {
        let occupancy = clinic.room_assignments();
        let staff = clinic.patient_staff_assignments();

        let rooms = clinic
            .rooms()
            .into_iter()
            .filter_map(|room| {
                let number = room.number()?;
                let patients = occupancy
                    .get(&number)
                    .into_iter()
                    .flatten()
                    .filter(|p| !p.is_discharged())
                    .map(|p| PatientEntry::new(p, staff.get(&p.id()).map(Vec::as_slice).unwrap_or(&[])))
                    .collect();
                Some(RoomEntry {
                    number,
                    room_type: room.room_type(),
                    name: room.name().to_string(),
                    coordinates: room.coordinates(),
                    patients,
                })
            })
            .collect();

        Self {
            clinic_name: clinic.clinic_name().to_string(),
            rooms,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain text chart.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("========== {} SEATING CHART ==========\n", self.clinic_name));
        out.push('\n');
        for room in &self.rooms {
            room.render_into(&mut out);
            out.push('\n');
        }
        out.push_str("========== END OF SEATING CHART ==========\n");
        out
    }

    /// Total number of patients shown.
    pub fn patient_count(&self) -> usize {
        self.rooms.iter().map(|r| r.patients.len()).sum()
    }
}

impl RoomEntry {
    pub(super) fn header(&self) -> String {
        format!(
            "Room {}: {} {} {}",
            self.number, self.room_type, self.name, self.coordinates
        )
    }

    pub(super) fn render_into(&self, out: &mut String) {
        out.push_str(&format!("{}\n", self.header()));
        out.push_str("------------------------------------------------------\n");
        if self.patients.is_empty() {
            out.push_str("  No patients assigned.\n");
        }
        for patient in &self.patients {
            patient.render_into(out);
        }
        out.push_str("------------------------------------------------------\n");
    }
}

impl PatientEntry {
    pub(super) fn new(patient: &Patient, staff: &[Staff]) -> Self {
        Self {
            id: patient.id(),
            full_name: patient.full_name(),
            date_of_birth: patient.date_of_birth().to_string(),
            visit_status: patient.visit_status(),
            visits: patient
                .visits()
                .iter()
                .map(|v| VisitEntry {
                    registered_at: v.formatted_registered_at(),
                    chief_complaint: v.chief_complaint().to_string(),
                    body_temperature_celsius: v.body_temperature(),
                })
                .collect(),
            staff: staff
                .iter()
                .map(|s| StaffEntry {
                    display_name: format!("{} {}", s.title_prefix(), s.full_name()),
                    identifier_kind: s.identifier().kind().to_string(),
                    identifier: s.identifier().value().to_string(),
                })
                .collect(),
        }
    }

    pub(super) fn render_into(&self, out: &mut String) {
        out.push_str(&format!(
            "Patient:\n\t{} (Patient ID: {}, DOB: {}, Status: {})\n",
            self.full_name, self.id, self.date_of_birth, self.visit_status
        ));

        if self.visits.is_empty() {
            out.push_str("\tNo visit records found.\n");
        } else {
            out.push_str("\tVisit Records:\n");
            for visit in &self.visits {
                out.push_str(&format!(
                    "\t\tRegistration: {}, Chief Complaint: {}, Body Temperature: {:.1} °C\n",
                    visit.registered_at, visit.chief_complaint, visit.body_temperature_celsius
                ));
            }
        }

        if self.staff.is_empty() {
            out.push_str("\tNo staff assigned to this patient.\n");
        } else {
            out.push_str("\tAssigned Staff:\n");
            for staff in &self.staff {
                out.push_str(&format!(
                    "\t\t{} ({}: {})\n",
                    staff.display_name, staff.identifier_kind, staff.identifier
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StaffId, Temperature};
    use chrono::NaiveDate;

    const CLINIC: &str = "\
Cybernetic Implant Clinic
2
0 0 10 10 WAITING Front
10 0 20 10 EXAM Triage
1
PHYSICIAN Amy Anguish DOCTORAL 1234567890
2
1 Aandi Acute 1/1/1981
2 Beth Bunion 3/2/1992
";

    fn clinic() -> Clinic {
        let mut clinic = Clinic::load_str(CLINIC).unwrap();
        clinic
            .assign_clinical_staff_to_patient(PatientId(1), StaffId(0))
            .unwrap();
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        clinic
            .register_existing_patient_visit("Beth", "Bunion", "3/2/1992", at, "Sprain", Temperature::celsius(36.5))
            .unwrap();
        clinic
    }

    #[test]
    fn test_chart_structure() {
        let chart = SeatingChart::from_clinic(&clinic());
        assert_eq!(chart.clinic_name, "Cybernetic Implant Clinic");
        assert_eq!(chart.rooms.len(), 2);
        assert_eq!(chart.patient_count(), 2);

        let triage = &chart.rooms[1];
        assert_eq!(triage.header(), "Room 2: EXAM Triage [10,0 to 20,10]");
        let beth = &triage.patients[0];
        assert_eq!(beth.staff[0].display_name, "Dr. Amy Anguish");
        assert_eq!(beth.staff[0].identifier_kind, "NPI");
        assert_eq!(beth.visits[0].registered_at, "2024-03-01 09:30:00");
    }

    #[test]
    fn test_render() {
        let text = SeatingChart::from_clinic(&clinic()).render();
        assert!(text.starts_with("========== Cybernetic Implant Clinic SEATING CHART =========="));
        assert!(text.contains("Aandi Acute (Patient ID: 0, DOB: 1/1/1981, Status: IN_PROGRESS)"));
        assert!(text.contains("\t\tDr. Amy Anguish (NPI: 1234567890)"));
        assert!(text.contains("Chief Complaint: Sprain, Body Temperature: 36.5 °C"));
        assert!(text.contains("\tNo visit records found.\n"));
        assert!(text.ends_with("========== END OF SEATING CHART ==========\n"));
    }

    #[test]
    fn test_room_text_layout() {
        let chart = SeatingChart::from_clinic(&clinic());
        let mut out = String::new();
        chart.rooms[1].render_into(&mut out);
        assert_eq!(
            out,
            "Room 2: EXAM Triage [10,0 to 20,10]\n\
             ------------------------------------------------------\n\
             Patient:\n\
             \tBeth Bunion (Patient ID: 1, DOB: 3/2/1992, Status: IN_PROGRESS)\n\
             \tVisit Records:\n\
             \t\tRegistration: 2024-03-01 09:30:00, Chief Complaint: Sprain, Body Temperature: 36.5 °C\n\
             \tAssigned Staff:\n\
             \t\tDr. Amy Anguish (NPI: 1234567890)\n\
             ------------------------------------------------------\n"
        );
    }

    #[test]
    fn test_empty_room() {
        let mut clinic = clinic();
        clinic.remove_patient_from_room(PatientId(1)).unwrap();
        let chart = SeatingChart::from_clinic(&clinic);
        assert!(chart.rooms[1].patients.is_empty());
        assert!(chart.render().contains("  No patients assigned.\n"));
    }

    #[test]
    fn test_json_round_trip() {
        let chart = SeatingChart::from_clinic(&clinic());
        let json = chart.to_json().unwrap();
        assert!(json.contains("\"room_type\": \"EXAM\""));
        assert!(json.contains("\"visit_status\": \"IN_PROGRESS\""));
        let parsed: SeatingChart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, chart);
    }
}
