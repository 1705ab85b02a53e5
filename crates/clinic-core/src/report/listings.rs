//! Smaller text reports: one room, one patient, the staff roster.

use crate::models::{PatientId, Person};
use crate::registry::{Clinic, ClinicError, ClinicResult};

use super::{PatientEntry, RoomEntry};

/// Which part of the roster to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffFilter {
    #[default]
    All,
    Clinical,
    NonClinical,
}

impl StaffFilter {
    fn heading(&self) -> &'static str {
        match self {
            StaffFilter::All => "Staff",
            StaffFilter::Clinical => "Clinical Staff",
            StaffFilter::NonClinical => "Non-Clinical Staff",
        }
    }
}

/// Header and occupants of one room.
pub fn room_info(clinic: &Clinic, room_number: u32) -> ClinicResult<String> {
    let room = clinic
        .room(room_number)
        .ok_or(ClinicError::RoomNotFound(room_number))?;
    let staff = clinic.patient_staff_assignments();

    let patients = room
        .patients()
        .iter()
        .filter_map(|id| clinic.patient(*id))
        .filter(|p| !p.is_discharged())
        .map(|p| PatientEntry::new(&p, staff.get(&p.id()).map(Vec::as_slice).unwrap_or(&[])))
        .collect();

    let entry = RoomEntry {
        number: room_number,
        room_type: room.room_type(),
        name: room.name().to_string(),
        coordinates: room.coordinates(),
        patients,
    };
    let mut out = String::new();
    entry.render_into(&mut out);
    Ok(out)
}

/// Description, room, visits and staff of one active patient.
pub fn patient_details(clinic: &Clinic, patient: PatientId) -> ClinicResult<String> {
    let found = clinic
        .patient(patient)
        .ok_or(ClinicError::PatientNotFound(patient))?;
    let staff = clinic.assigned_clinical_staff(patient)?;

    let room = found
        .room()
        .and_then(|n| clinic.room(n).map(|room| format!("Room {n}: {} {}", room.room_type(), room.name())))
        .unwrap_or_else(|| "No room assigned".to_string());

    let mut out = format!("{}\n{}\n", found.description(), room);
    PatientEntry::new(&found, &staff).render_into(&mut out);
    Ok(out)
}

/// One line per staff member, with their roster ID and status.
pub fn staff_listing(clinic: &Clinic, filter: StaffFilter) -> String {
    let mut out = format!("{}:\n", filter.heading());
    let mut listed = 0;
    for (index, staff) in clinic.staff().iter().enumerate() {
        let keep = match filter {
            StaffFilter::All => true,
            StaffFilter::Clinical => staff.is_clinical(),
            StaffFilter::NonClinical => !staff.is_clinical(),
        };
        if !keep {
            continue;
        }
        listed += 1;
        out.push_str(&format!(
            "  [{}] {} [{}]\n",
            index,
            staff.description(),
            staff.activation_status()
        ));
    }
    if listed == 0 {
        out.push_str("  None\n");
    }
    out
}
