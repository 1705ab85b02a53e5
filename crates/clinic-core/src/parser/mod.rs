//! Clinic file parser.
//!
//! A clinic file is line oriented and strictly ordered:
//!
//! ```text
//! Cybernetic Implant Clinic          <- clinic name
//! 2                                  <- room count
//! 0 0 10 10 WAITING Front Waiting    <- x1 y1 x2 y2 TYPE name...
//! 10 0 20 10 EXAM Triage
//! 1                                  <- staff count
//! PHYSICIAN Amy Anguish DOCTORAL 1234567890
//! 1                                  <- patient count
//! 1 Aandi Acute 1/1/1981             <- room first last dob
//! ```
//!
//! Parsing produces a [`ClinicDocument`]; the registry turns it into a
//! [`Clinic`](crate::registry::Clinic) only if the whole file is valid.

mod lines;
mod records;
mod source;

pub use records::*;
pub use source::*;

use std::fmt;
use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::models::{ModelError, Room, Staff, MAX_ROOM_NUMBER};
use lines::LineReader;

/// Clinic file format errors.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Remote clinic sources are not supported: {0}")]
    RemoteSource(String),

    #[error("Clinic name is missing or blank")]
    MissingClinicName,

    #[error("Number of {section} is missing")]
    MissingCount { section: Section },

    #[error("Line {line}: number of {section} is invalid: {value:?}")]
    InvalidCount {
        line: usize,
        section: Section,
        value: String,
    },

    #[error("Unexpected end of input: expected {expected} {section}, found {found}")]
    UnexpectedEof {
        section: Section,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: incomplete {} record", .section.singular())]
    IncompleteRecord { line: usize, section: Section },

    #[error("Line {line}: {field} must be an integer, got {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: ModelError,
    },

    #[error("Line {line}: room {room} does not exist (clinic has {room_count} rooms)")]
    RoomOutOfRange {
        line: usize,
        room: i64,
        room_count: usize,
    },

    #[error("Line {line}: room {room} is already occupied by another patient")]
    RoomOccupied { line: usize, room: u32 },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The three counted sections of a clinic file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Rooms,
    Staff,
    Patients,
}

impl Section {
    pub fn singular(&self) -> &'static str {
        match self {
            Section::Rooms => "room",
            Section::Staff => "staff",
            Section::Patients => "patient",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Rooms => "rooms",
            Section::Staff => "staff members",
            Section::Patients => "patients",
        })
    }
}

/// Everything a clinic file declares, validated line by line.
#[derive(Debug, Clone)]
pub struct ClinicDocument {
    pub clinic_name: String,
    /// Numbered 1..=N in file order.
    pub rooms: Vec<Room>,
    pub staff: Vec<Staff>,
    /// Room numbers are already checked against the room count.
    pub patients: Vec<PatientRecord>,
}

/// Parse a whole clinic file.
pub fn parse_document<R: BufRead>(reader: R) -> ParseResult<ClinicDocument> {
    let mut lines = LineReader::new(reader);

    let clinic_name = match lines.next_line()? {
        Some((_, name)) if !name.trim().is_empty() => name.trim().to_string(),
        _ => return Err(ParseError::MissingClinicName),
    };

    let room_count = lines.count(Section::Rooms)?;
    let mut rooms = Vec::with_capacity(room_count.min(MAX_ROOM_NUMBER as usize));
    for index in 0..room_count {
        let (line, text) = lines.record(Section::Rooms, room_count, index)?;
        rooms.push(parse_room(line, &text, index + 1)?);
    }

    let staff_count = lines.count(Section::Staff)?;
    let mut staff = Vec::new();
    for index in 0..staff_count {
        let (line, text) = lines.record(Section::Staff, staff_count, index)?;
        staff.push(parse_staff(line, &text)?);
    }

    let patient_count = lines.count(Section::Patients)?;
    let mut patients = Vec::new();
    for index in 0..patient_count {
        let (line, text) = lines.record(Section::Patients, patient_count, index)?;
        patients.push(parse_patient(line, &text, rooms.len())?);
    }

    debug!(
        clinic = %clinic_name,
        rooms = rooms.len(),
        staff = staff.len(),
        patients = patients.len(),
        "Parsed clinic file"
    );

    Ok(ClinicDocument {
        clinic_name,
        rooms,
        staff,
        patients,
    })
}

/// Parse a clinic file held in memory.
pub fn parse_str(input: &str) -> ParseResult<ClinicDocument> {
    parse_document(input.as_bytes())
}
