//! Patient models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ModelError, ModelResult, Person, PersonName, VisitRecord, VisitStatus};

/// Shown when a patient has no visits on file.
pub const NO_VISITS: &str = "No visit records available.";

/// Clinic-assigned patient number. Never reused, even after discharge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A patient known to the clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    name: PersonName,
    id: PatientId,
    /// Date of birth, kept exactly as entered
    date_of_birth: String,
    visits: Vec<VisitRecord>,
    /// Number of the room the patient currently sits in
    room: Option<u32>,
    visit_status: VisitStatus,
}

impl Patient {
    pub fn new(first: &str, last: &str, id: PatientId, date_of_birth: &str) -> ModelResult<Self> {
        let name = PersonName::new(first, last)?;
        if date_of_birth.trim().is_empty() {
            return Err(ModelError::BlankDateOfBirth);
        }
        Ok(Self {
            name,
            id,
            date_of_birth: date_of_birth.to_string(),
            visits: Vec::new(),
            room: None,
            visit_status: VisitStatus::InProgress,
        })
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Same first name, last name and date of birth.
    pub fn is_same_person(&self, first: &str, last: &str, date_of_birth: &str) -> bool {
        self.name.matches(first, last) && self.date_of_birth == date_of_birth
    }

    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    pub fn latest_visit(&self) -> Option<&VisitRecord> {
        self.visits.last()
    }

    /// Chief complaint of the most recent visit.
    pub fn latest_chief_complaint(&self) -> &str {
        self.latest_visit()
            .map(VisitRecord::chief_complaint)
            .unwrap_or(NO_VISITS)
    }

    pub fn room(&self) -> Option<u32> {
        self.room
    }

    pub fn visit_status(&self) -> VisitStatus {
        self.visit_status
    }

    pub fn is_discharged(&self) -> bool {
        self.visit_status == VisitStatus::Discharged
    }

    pub(crate) fn add_visit(&mut self, visit: VisitRecord) {
        self.visits.push(visit);
    }

    pub(crate) fn set_room(&mut self, room: Option<u32>) {
        self.room = room;
    }

    pub(crate) fn set_visit_status(&mut self, status: VisitStatus) {
        self.visit_status = status;
    }
}

impl Person for Patient {
    fn name(&self) -> &PersonName {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "{} (Patient ID: {}, DOB: {}, Status: {})",
            self.full_name(),
            self.id,
            self.date_of_birth,
            self.visit_status
        )
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.date_of_birth == other.date_of_birth
    }
}

impl Eq for Patient {}
