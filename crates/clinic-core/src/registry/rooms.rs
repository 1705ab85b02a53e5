//! Room placement.

use tracing::{debug, warn};

use super::{Clinic, ClinicError, ClinicResult, Outcome, Rejection};
use crate::models::{Corner, PatientId, Room, RoomType};

impl Clinic {
    /// Add a room, numbered after the existing ones. Returns its number.
    pub fn add_room(
        &mut self,
        name: &str,
        room_type: RoomType,
        lower_left: Corner,
        upper_right: Corner,
    ) -> ClinicResult<u32> {
        let mut room = Room::new(name, room_type, lower_left, upper_right)?;
        let number = u32::try_from(self.rooms.len() + 1).unwrap_or(u32::MAX);
        room.set_number(number)?;
        self.rooms.push(room);
        debug!(room = number, %room_type, name, "Added room");
        Ok(number)
    }

    /// Move the active patient at `patient_index` into `room_number`.
    pub fn assign_room(
        &mut self,
        room_number: u32,
        patient_index: usize,
    ) -> ClinicResult<Outcome<()>> {
        let room_pos = self.room_position(room_number)?;
        let patient = self
            .patients
            .get(patient_index)
            .ok_or(ClinicError::PatientIndexOutOfRange {
                index: patient_index,
                count: self.patients.len(),
            })?;
        let id = patient.id();

        if patient.room() == Some(room_number) {
            return Ok(Outcome::Unchanged);
        }

        let room = &self.rooms[room_pos];
        let blocking = room.patients().first().copied();
        if let Some(occupant) = blocking.filter(|_| !room.has_space_for(id)) {
            warn!(room = room_number, patient = %id, %occupant, "Room already occupied");
            return Ok(Outcome::Rejected(Rejection::RoomOccupied {
                room: room_number,
                occupant,
            }));
        }

        let from = self.detach_from_room(id);
        self.attach_to_room(room_number, id)?;
        debug!(patient = %id, from = ?from, to = room_number, "Moved patient");
        Ok(Outcome::Applied(()))
    }

    /// Take a patient out of whatever room they are in. Returns the room
    /// they left.
    pub fn remove_patient_from_room(&mut self, patient: PatientId) -> ClinicResult<Outcome<u32>> {
        self.patient_position(patient)?;
        match self.detach_from_room(patient) {
            Some(room) => {
                debug!(patient = %patient, room, "Removed patient from room");
                Ok(Outcome::Applied(room))
            }
            None => Ok(Outcome::Rejected(Rejection::NotInRoom(patient))),
        }
    }

    /// Place a patient into a room, keeping the map, the room and the
    /// patient's back reference in step.
    pub(super) fn attach_to_room(&mut self, room_number: u32, patient: PatientId) -> ClinicResult<()> {
        let room_pos = self.room_position(room_number)?;
        let patient_pos = self.patient_position(patient)?;

        self.rooms[room_pos].admit(patient)?;
        let occupants = self.room_assignments.entry(room_number).or_default();
        if !occupants.contains(&patient) {
            occupants.push(patient);
        }
        self.patients[patient_pos].set_room(Some(room_number));
        Ok(())
    }

    /// Inverse of `attach_to_room`. Found by scanning the room map.
    pub(super) fn detach_from_room(&mut self, patient: PatientId) -> Option<u32> {
        let room_number = self
            .room_assignments
            .iter()
            .find(|(_, occupants)| occupants.contains(&patient))
            .map(|(room, _)| *room)?;

        let mut drop_entry = false;
        if let Some(occupants) = self.room_assignments.get_mut(&room_number) {
            occupants.retain(|p| *p != patient);
            drop_entry = occupants.is_empty();
        }

        if let Ok(room_pos) = self.room_position(room_number) {
            let room = &mut self.rooms[room_pos];
            room.release(patient);
            drop_entry &= !room.room_type().is_shared();
        }
        if drop_entry {
            self.room_assignments.remove(&room_number);
        }

        if let Ok(patient_pos) = self.patient_position(patient) {
            self.patients[patient_pos].set_room(None);
        }
        Some(room_number)
    }
}
