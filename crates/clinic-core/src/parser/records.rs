//! Parsers for single room, staff and patient lines.

use crate::models::{
    CprLevel, Corner, EducationLevel, JobTitle, Keyword, ModelError, Room, RoomType, Staff,
};

use super::{ParseError, ParseResult, Section};

/// A patient line, checked against the room count but not yet placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    /// Line the record came from, for error reporting
    pub line: usize,
    pub room: u32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

/// `x1 y1 x2 y2 TYPE name...`; the name is the rest of the line.
pub fn parse_room(line: usize, text: &str, number: usize) -> ParseResult<Room> {
    let invalid = |source: ModelError| ParseError::InvalidRecord { line, source };

    let (fields, name) = split_fields(text, 5)
        .filter(|(_, name)| !name.is_empty())
        .ok_or(ParseError::IncompleteRecord {
            line,
            section: Section::Rooms,
        })?;

    let mut coords = [0i64; 4];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        *slot = parse_integer(line, "room coordinate", field)?;
    }

    let room_type = RoomType::parse_keyword(fields[4]).map_err(invalid)?;
    let lower_left = Corner::new(coords[0], coords[1]).map_err(invalid)?;
    let upper_right = Corner::new(coords[2], coords[3]).map_err(invalid)?;

    let mut room = Room::new(name, room_type, lower_left, upper_right).map_err(invalid)?;
    room.set_number(u32::try_from(number).unwrap_or(u32::MAX))
        .map_err(invalid)?;
    Ok(room)
}

/// `JOBTITLE first last EDUCATION identifier`. Reception staff carry a CPR
/// level, everyone else an NPI.
pub fn parse_staff(line: usize, text: &str) -> ParseResult<Staff> {
    let invalid = |source: ModelError| ParseError::InvalidRecord { line, source };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let [title, first, last, education, identifier, ..] = fields[..] else {
        return Err(ParseError::IncompleteRecord {
            line,
            section: Section::Staff,
        });
    };

    let job_title = JobTitle::parse_keyword(title).map_err(invalid)?;
    let education = EducationLevel::parse_keyword(education).map_err(invalid)?;

    if job_title.is_clinical() {
        Staff::clinical(first, last, job_title, education, identifier).map_err(invalid)
    } else {
        let cpr_level = CprLevel::parse_keyword(identifier).map_err(invalid)?;
        Staff::non_clinical(first, last, education, cpr_level).map_err(invalid)
    }
}

/// `roomNumber first last dob`, with the room number in `1..=room_count`.
pub fn parse_patient(line: usize, text: &str, room_count: usize) -> ParseResult<PatientRecord> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [room, first, last, dob, ..] = fields[..] else {
        return Err(ParseError::IncompleteRecord {
            line,
            section: Section::Patients,
        });
    };

    let room = parse_integer(line, "room number", room)?;
    let room = u32::try_from(room)
        .ok()
        .filter(|r| *r >= 1 && (*r as usize) <= room_count)
        .ok_or(ParseError::RoomOutOfRange {
            line,
            room,
            room_count,
        })?;

    Ok(PatientRecord {
        line,
        room,
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: dob.to_string(),
    })
}

fn parse_integer(line: usize, field: &'static str, value: &str) -> ParseResult<i64> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        field,
        value: value.to_string(),
    })
}

/// Split off `count` whitespace-separated fields and return them with the
/// trimmed remainder of the line.
fn split_fields(text: &str, count: usize) -> Option<(Vec<&str>, &str)> {
    let mut rest = text.trim_start();
    let mut fields = Vec::with_capacity(count);
    for _ in 0..count {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        fields.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    Some((fields, rest.trim_end()))
}
