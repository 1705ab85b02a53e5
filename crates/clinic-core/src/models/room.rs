//! Room models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Keyword, ModelError, ModelResult, PatientId};

/// Highest room number a clinic may use.
pub const MAX_ROOM_NUMBER: u32 = 100;

/// Kind of room. Only waiting rooms hold more than one patient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Waiting,
    Exam,
    Procedure,
}

impl RoomType {
    pub fn is_shared(&self) -> bool {
        matches!(self, RoomType::Waiting)
    }
}

impl Keyword for RoomType {
    const KIND: &'static str = "room type";
    const ALL: &'static [Self] = &[RoomType::Waiting, RoomType::Exam, RoomType::Procedure];

    fn as_str(&self) -> &'static str {
        match self {
            RoomType::Waiting => "WAITING",
            RoomType::Exam => "EXAM",
            RoomType::Procedure => "PROCEDURE",
        }
    }
}

keyword_traits!(RoomType);

/// A corner of a room on the floor plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Corner {
    pub x: u32,
    pub y: u32,
}

impl Corner {
    pub fn new(x: i64, y: i64) -> ModelResult<Self> {
        if x < 0 || y < 0 {
            return Err(ModelError::NegativeCoordinate { x, y });
        }
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self { x, y }),
            _ => Err(ModelError::CoordinateOutOfRange { x, y }),
        }
    }
}

/// A room on the clinic floor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    name: String,
    room_type: RoomType,
    lower_left: Corner,
    upper_right: Corner,
    /// Zero until assigned.
    number: u32,
    patients: Vec<PatientId>,
}

impl Room {
    pub fn new(
        name: &str,
        room_type: RoomType,
        lower_left: Corner,
        upper_right: Corner,
    ) -> ModelResult<Self> {
        if name.trim().is_empty() {
            return Err(ModelError::BlankRoomName);
        }
        Ok(Self {
            name: name.to_string(),
            room_type,
            lower_left,
            upper_right,
            number: 0,
            patients: Vec::new(),
        })
    }

    /// Assign the room number. It can be set once, within 1..=100.
    pub fn set_number(&mut self, number: u32) -> ModelResult<()> {
        if self.number != 0 {
            return Err(ModelError::RoomNumberAlreadySet(self.number));
        }
        if number == 0 || number > MAX_ROOM_NUMBER {
            return Err(ModelError::RoomNumberOutOfRange(number.into()));
        }
        self.number = number;
        Ok(())
    }

    /// Room number, or `None` before one has been assigned.
    pub fn number(&self) -> Option<u32> {
        (self.number != 0).then_some(self.number)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn corners(&self) -> (Corner, Corner) {
        (self.lower_left, self.upper_right)
    }

    /// e.g. "[0,0 to 10,10]".
    pub fn coordinates(&self) -> String {
        format!(
            "[{},{} to {},{}]",
            self.lower_left.x, self.lower_left.y, self.upper_right.x, self.upper_right.y
        )
    }

    pub fn patients(&self) -> &[PatientId] {
        &self.patients
    }

    pub fn is_occupied(&self) -> bool {
        !self.patients.is_empty()
    }

    /// True if `patient` could be placed here right now.
    pub fn has_space_for(&self, patient: PatientId) -> bool {
        self.room_type.is_shared() || self.patients.iter().all(|p| *p == patient)
    }

    pub(crate) fn admit(&mut self, patient: PatientId) -> ModelResult<()> {
        if self.number == 0 {
            return Err(ModelError::RoomNumberUnset);
        }
        if !self.has_space_for(patient) {
            return Err(ModelError::RoomFull(self.number));
        }
        if !self.patients.contains(&patient) {
            self.patients.push(patient);
        }
        Ok(())
    }

    pub(crate) fn release(&mut self, patient: PatientId) -> bool {
        let before = self.patients.len();
        self.patients.retain(|p| *p != patient);
        self.patients.len() != before
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.room_type, self.name, self.coordinates())
    }
}
