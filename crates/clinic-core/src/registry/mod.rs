//! Clinic registry: the in-memory aggregate of rooms, staff and patients.
//!
//! All cross references (room occupancy, patient room, staff assignments)
//! are mutated only through [`Clinic`], so the room map and each
//! [`Room`]'s own patient list always agree.

mod patients;
mod rooms;
mod staff;

pub use patients::INTAKE_ROOM;

use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

use thiserror::Error;
use tracing::info;

use crate::models::{ModelError, Patient, PatientId, Room, Staff, StaffId};
use crate::parser::{self, ClinicDocument, ParseError, ParseResult};

/// Precondition violations. The call is refused and nothing changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClinicError {
    #[error("Clinic has no rooms")]
    NoRooms,

    #[error("Room {0} does not exist")]
    RoomNotFound(u32),

    #[error("Patient index {index} is out of range (clinic has {count} patients)")]
    PatientIndexOutOfRange { index: usize, count: usize },

    #[error("Patient {0} is not tracked by the clinic")]
    PatientNotFound(PatientId),

    #[error("Staff member {0} is not registered")]
    StaffNotFound(StaffId),

    #[error("Staff member {0} is not clinical staff")]
    NotClinicalStaff(StaffId),

    #[error("Only clinical staff can be registered this way")]
    NonClinicalRegistration,

    #[error("Staff member {0} is not a physician and cannot approve a discharge")]
    ApproverNotPhysician(StaffId),

    #[error("Patients are discharged through send_patient_home")]
    DischargeRequiresApproval,

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// Business rule that stopped an operation. Nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    DuplicatePatient(PatientId),
    PatientNotFound,
    RoomOccupied { room: u32, occupant: PatientId },
    NotInRoom(PatientId),
    StaffDeactivated(StaffId),
    StaffAlreadyAssigned { patient: PatientId, staff: StaffId },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::DuplicatePatient(id) => {
                write!(f, "Patient already registered with ID {id}")
            }
            Rejection::PatientNotFound => f.write_str("No matching patient found"),
            Rejection::RoomOccupied { room, occupant } => {
                write!(f, "Room {room} is already occupied by patient {occupant}")
            }
            Rejection::NotInRoom(id) => write!(f, "Patient {id} is not assigned to a room"),
            Rejection::StaffDeactivated(id) => write!(f, "Staff member {id} is deactivated"),
            Rejection::StaffAlreadyAssigned { patient, staff } => {
                write!(f, "Staff member {staff} is already assigned to patient {patient}")
            }
        }
    }
}

/// Result of an operation that business rules may turn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    /// The requested state already held.
    Unchanged,
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// The clinic registry.
#[derive(Debug, Clone)]
pub struct Clinic {
    name: String,
    /// Room `n` lives at index `n - 1`.
    rooms: Vec<Room>,
    /// Never shrinks, so a [`StaffId`] stays valid.
    staff: Vec<Staff>,
    /// Active (not discharged) patients in registration order.
    patients: Vec<Patient>,
    /// Mirrors each room's patient list. Entries appear on first
    /// assignment; empty non-waiting rooms lose theirs.
    room_assignments: BTreeMap<u32, Vec<PatientId>>,
    staff_assignments: BTreeMap<PatientId, Vec<StaffId>>,
    deactivated: Vec<StaffId>,
    /// One past the highest patient ID ever issued.
    next_patient_id: u32,
}

impl Clinic {
    /// An empty clinic.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            staff: Vec::new(),
            patients: Vec::new(),
            room_assignments: BTreeMap::new(),
            staff_assignments: BTreeMap::new(),
            deactivated: Vec::new(),
            next_patient_id: 0,
        }
    }

    /// Build a clinic from a parsed file. Patient IDs are their position in
    /// the file, and each patient is placed in the room the file names.
    pub fn from_document(document: ClinicDocument) -> ParseResult<Self> {
        let ClinicDocument {
            clinic_name,
            rooms,
            staff,
            patients,
        } = document;

        let mut clinic = Self::new(clinic_name);
        clinic.rooms = rooms;
        clinic.staff = staff;
        let room_count = clinic.rooms.len();

        for record in patients {
            let id = PatientId(clinic.next_patient_id);
            let patient = Patient::new(
                &record.first_name,
                &record.last_name,
                id,
                &record.date_of_birth,
            )
            .map_err(|source| ParseError::InvalidRecord {
                line: record.line,
                source,
            })?;

            clinic.patients.push(patient);
            clinic.next_patient_id += 1;
            clinic
                .attach_to_room(record.room, id)
                .map_err(|err| match err {
                    ClinicError::Model(ModelError::RoomFull(room)) => ParseError::RoomOccupied {
                        line: record.line,
                        room,
                    },
                    ClinicError::Model(source) => ParseError::InvalidRecord {
                        line: record.line,
                        source,
                    },
                    _ => ParseError::RoomOutOfRange {
                        line: record.line,
                        room: record.room.into(),
                        room_count,
                    },
                })?;
        }

        info!(
            clinic = %clinic.name,
            rooms = clinic.rooms.len(),
            staff = clinic.staff.len(),
            patients = clinic.patients.len(),
            "Loaded clinic"
        );
        Ok(clinic)
    }

    /// Parse and build a clinic from any reader. Nothing is kept on failure.
    pub fn load<R: BufRead>(reader: R) -> ParseResult<Self> {
        Self::from_document(parser::parse_document(reader)?)
    }

    pub fn load_str(input: &str) -> ParseResult<Self> {
        Self::from_document(parser::parse_str(input)?)
    }

    /// Load from a local path. `http(s)://` locators are refused.
    pub fn load_from_path(locator: &str) -> ParseResult<Self> {
        Self::load(parser::open_source(locator)?)
    }

    // =========================================================================
    // Read access. Everything handed out is an owned copy.
    // =========================================================================

    pub fn clinic_name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    pub fn room(&self, number: u32) -> Option<Room> {
        self.find_room(number).cloned()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn staff(&self) -> Vec<Staff> {
        self.staff.clone()
    }

    pub fn staff_member(&self, id: StaffId) -> Option<Staff> {
        self.staff.get(id.0).cloned()
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    pub fn patient(&self, id: PatientId) -> Option<Patient> {
        self.find_patient(id).cloned()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn deactivated_staff(&self) -> Vec<Staff> {
        self.deactivated
            .iter()
            .filter_map(|id| self.staff.get(id.0).cloned())
            .collect()
    }

    /// Room number → patients currently in it.
    pub fn room_assignments(&self) -> BTreeMap<u32, Vec<Patient>> {
        self.room_assignments
            .iter()
            .map(|(room, ids)| {
                let patients = ids
                    .iter()
                    .filter_map(|id| self.find_patient(*id).cloned())
                    .collect();
                (*room, patients)
            })
            .collect()
    }

    /// Patient → clinical staff assigned to them.
    pub fn patient_staff_assignments(&self) -> BTreeMap<PatientId, Vec<Staff>> {
        self.staff_assignments
            .iter()
            .map(|(patient, ids)| {
                let staff = ids
                    .iter()
                    .filter_map(|id| self.staff.get(id.0).cloned())
                    .collect();
                (*patient, staff)
            })
            .collect()
    }

    fn find_patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    fn patient_position(&self, id: PatientId) -> ClinicResult<usize> {
        self.patients
            .iter()
            .position(|p| p.id() == id)
            .ok_or(ClinicError::PatientNotFound(id))
    }

    fn find_room(&self, number: u32) -> Option<&Room> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.rooms.get(index)
    }

    fn room_position(&self, number: u32) -> ClinicResult<usize> {
        self.find_room(number)
            .map(|_| number as usize - 1)
            .ok_or(ClinicError::RoomNotFound(number))
    }

    fn staff_entry(&self, id: StaffId) -> ClinicResult<&Staff> {
        self.staff.get(id.0).ok_or(ClinicError::StaffNotFound(id))
    }
}
