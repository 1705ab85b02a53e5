//! Staff roster and patient assignments.

use tracing::{debug, info, warn};

use super::{Clinic, ClinicError, ClinicResult, Outcome, Rejection};
use crate::models::{same_ignoring_case, PatientId, Person, Staff, StaffId};

impl Clinic {
    /// Add a physician or nurse to the roster.
    pub fn register_clinical_staff(&mut self, staff: Staff) -> ClinicResult<StaffId> {
        if !staff.is_clinical() {
            return Err(ClinicError::NonClinicalRegistration);
        }
        let id = StaffId(self.staff.len());
        info!(staff = %id, name = %staff.full_name(), title = %staff.job_title(), "Registered clinical staff");
        self.staff.push(staff);
        Ok(id)
    }

    /// Every staff member whose full name or identifier (NPI or CPR level)
    /// matches `term`, ignoring case.
    pub fn search_staff(&self, term: &str) -> Vec<(StaffId, Staff)> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        self.staff
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                s.name().matches_full_name(term)
                    || same_ignoring_case(s.identifier().value(), term)
            })
            .map(|(index, s)| (StaffId(index), s.clone()))
            .collect()
    }

    /// Deactivate a staff member. They stay on the roster but take no new
    /// patients.
    pub fn deactivate_staff(&mut self, staff: StaffId) -> ClinicResult<Outcome<()>> {
        self.staff_entry(staff)?;
        if !self.staff[staff.0].deactivate() {
            return Ok(Outcome::Unchanged);
        }
        if !self.deactivated.contains(&staff) {
            self.deactivated.push(staff);
        }
        info!(staff = %staff, "Deactivated staff member");
        Ok(Outcome::Applied(()))
    }

    pub fn assign_clinical_staff_to_patient(
        &mut self,
        patient: PatientId,
        staff: StaffId,
    ) -> ClinicResult<Outcome<()>> {
        self.check_assignment(patient, staff)?;
        Ok(self.assign_checked(patient, staff))
    }

    /// Assign several staff members at once. Every ID is checked before
    /// anything is assigned; the outcomes line up with `staff`.
    pub fn assign_multiple_clinical_staff_to_patient(
        &mut self,
        patient: PatientId,
        staff: &[StaffId],
    ) -> ClinicResult<Vec<Outcome<()>>> {
        for id in staff {
            self.check_assignment(patient, *id)?;
        }
        Ok(staff
            .iter()
            .map(|id| self.assign_checked(patient, *id))
            .collect())
    }

    /// Clinical staff currently assigned to a patient.
    pub fn assigned_clinical_staff(&self, patient: PatientId) -> ClinicResult<Vec<Staff>> {
        self.patient_position(patient)?;
        Ok(self
            .staff_assignments
            .get(&patient)
            .map(|ids| ids.iter().filter_map(|id| self.staff.get(id.0).cloned()).collect())
            .unwrap_or_default())
    }

    fn check_assignment(&self, patient: PatientId, staff: StaffId) -> ClinicResult<()> {
        self.patient_position(patient)?;
        if !self.staff_entry(staff)?.is_clinical() {
            return Err(ClinicError::NotClinicalStaff(staff));
        }
        Ok(())
    }

    fn assign_checked(&mut self, patient: PatientId, staff: StaffId) -> Outcome<()> {
        let active = self.staff.get(staff.0).is_some_and(Staff::is_active);
        if !active {
            warn!(staff = %staff, patient = %patient, "Skipping deactivated staff member");
            return Outcome::Rejected(Rejection::StaffDeactivated(staff));
        }

        let assigned = self.staff_assignments.entry(patient).or_default();
        if assigned.contains(&staff) {
            warn!(staff = %staff, patient = %patient, "Staff member already assigned");
            return Outcome::Rejected(Rejection::StaffAlreadyAssigned { patient, staff });
        }
        assigned.push(staff);
        debug!(staff = %staff, patient = %patient, "Assigned staff member");
        Outcome::Applied(())
    }
}
