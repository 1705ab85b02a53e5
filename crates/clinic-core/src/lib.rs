//! Clinic Registry Core Library
//!
//! In-memory record keeping for a small clinic: rooms, staff, patients and
//! the assignments between them.
//!
//! # Architecture
//!
//! ```text
//! clinic file (local path)
//!        │
//!        ▼
//!     parser ──► ClinicDocument ──► Clinic::from_document
//!                                         │
//!                       ┌─────────────────▼─────────────────┐
//!                       │              Clinic               │
//!                       │  rooms  staff  active patients    │
//!                       │  room → patients                  │
//!                       │  patient → clinical staff         │
//!                       └─────────────────┬─────────────────┘
//!                                         │ read-only
//!                        ┌────────────────┼────────────────┐
//!                        ▼                ▼                ▼
//!                  Seating chart      Room info      Staff listing
//!                  (text / JSON)   Patient details
//! ```
//!
//! # Outcomes
//!
//! Broken preconditions (unknown room, unknown staff, non-physician
//! approver) are errors. Business rules (occupied room, duplicate patient,
//! deactivated staff) come back as [`Outcome::Rejected`] and leave the
//! clinic untouched.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Staff, Room, VisitRecord, etc.)
//! - [`parser`]: Line-oriented clinic file parser
//! - [`registry`]: The [`Clinic`] aggregate and its operations
//! - [`report`]: Seating chart and listings

pub mod models;
pub mod parser;
pub mod registry;
pub mod report;

// Re-export commonly used types
pub use models::{
    CprLevel, EducationLevel, JobTitle, Patient, PatientId, Person, Room, RoomType, Staff,
    StaffId, Temperature, VisitRecord, VisitStatus,
};
pub use parser::{ParseError, ParseResult};
pub use registry::{Clinic, ClinicError, ClinicResult, Outcome, Rejection};
pub use report::{SeatingChart, StaffFilter};
