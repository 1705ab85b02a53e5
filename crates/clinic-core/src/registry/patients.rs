//! Patient registration, lookup and discharge.

use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::{Clinic, ClinicError, ClinicResult, Outcome, Rejection};
use crate::models::{Patient, PatientId, Person, StaffId, Temperature, VisitRecord, VisitStatus};

/// Room every new patient is placed in.
pub const INTAKE_ROOM: u32 = 1;

impl Clinic {
    /// Register a first-time patient with one visit and place them in the
    /// intake room. Returns the new patient's ID.
    pub fn register_new_patient_visit(
        &mut self,
        first: &str,
        last: &str,
        date_of_birth: &str,
        registered_at: NaiveDateTime,
        chief_complaint: &str,
        temperature: Temperature,
    ) -> ClinicResult<Outcome<PatientId>> {
        if self.rooms.is_empty() {
            return Err(ClinicError::NoRooms);
        }

        if let Some(existing) = self.find_by_identity(first, last, date_of_birth) {
            let id = existing.id();
            warn!(patient = %id, "Patient already registered");
            return Ok(Outcome::Rejected(Rejection::DuplicatePatient(id)));
        }

        let id = PatientId(self.next_patient_id);
        let mut patient = Patient::new(first, last, id, date_of_birth)?;
        patient.add_visit(VisitRecord::new(registered_at, chief_complaint, temperature)?);

        let intake = &self.rooms[0];
        if let Some(&occupant) = intake.patients().first() {
            if !intake.has_space_for(id) {
                warn!(room = INTAKE_ROOM, %occupant, "Intake room occupied");
                return Ok(Outcome::Rejected(Rejection::RoomOccupied {
                    room: INTAKE_ROOM,
                    occupant,
                }));
            }
        }

        self.patients.push(patient);
        self.next_patient_id += 1;
        self.attach_to_room(INTAKE_ROOM, id)?;

        info!(patient = %id, name = %format!("{first} {last}"), "Registered new patient");
        Ok(Outcome::Applied(id))
    }

    /// Add a visit to a patient already on file, matched on name and date
    /// of birth. ID, room and status are left alone.
    pub fn register_existing_patient_visit(
        &mut self,
        first: &str,
        last: &str,
        date_of_birth: &str,
        registered_at: NaiveDateTime,
        chief_complaint: &str,
        temperature: Temperature,
    ) -> ClinicResult<Outcome<PatientId>> {
        let Some(pos) = self
            .patients
            .iter()
            .position(|p| p.is_same_person(first, last, date_of_birth))
        else {
            warn!(name = %format!("{first} {last}"), "No patient on file");
            return Ok(Outcome::Rejected(Rejection::PatientNotFound));
        };

        let visit = VisitRecord::new(registered_at, chief_complaint, temperature)?;
        let patient = &mut self.patients[pos];
        patient.add_visit(visit);
        info!(patient = %patient.id(), visits = patient.visits().len(), "Registered visit");
        Ok(Outcome::Applied(patient.id()))
    }

    /// Find an active patient by ID (numeric term) or by full name,
    /// ignoring case.
    pub fn search_patient(&self, term: &str) -> Option<Patient> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        match term.parse::<u32>() {
            Ok(id) => self.find_patient(PatientId(id)).cloned(),
            Err(_) => self
                .patients
                .iter()
                .find(|p| p.name().matches_full_name(term))
                .cloned(),
        }
    }

    /// Move a patient to COMPLETED or AWAITING_RESULTS (or back to
    /// IN_PROGRESS). Discharge goes through [`Clinic::send_patient_home`].
    pub fn set_visit_status(&mut self, patient: PatientId, status: VisitStatus) -> ClinicResult<()> {
        if status == VisitStatus::Discharged {
            return Err(ClinicError::DischargeRequiresApproval);
        }
        let pos = self.patient_position(patient)?;
        self.patients[pos].set_visit_status(status);
        info!(patient = %patient, %status, "Updated visit status");
        Ok(())
    }

    /// Discharge a patient on a physician's approval. The patient leaves
    /// their room, loses staff assignments and is delisted; the discharged
    /// record is handed back.
    pub fn send_patient_home(&mut self, patient: PatientId, approver: StaffId) -> ClinicResult<Patient> {
        let pos = self.patient_position(patient)?;
        if !self.staff_entry(approver)?.is_physician() {
            return Err(ClinicError::ApproverNotPhysician(approver));
        }

        let room = self.detach_from_room(patient);
        self.staff_assignments.remove(&patient);

        let mut discharged = self.patients.remove(pos);
        discharged.set_visit_status(VisitStatus::Discharged);
        info!(patient = %patient, approver = %approver, room = ?room, "Discharged patient");
        Ok(discharged)
    }

    fn find_by_identity(&self, first: &str, last: &str, date_of_birth: &str) -> Option<&Patient> {
        self.patients
            .iter()
            .find(|p| p.is_same_person(first, last, date_of_birth))
    }
}
