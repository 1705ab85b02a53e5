//! Read-only reports over a [`Clinic`](crate::registry::Clinic).

mod listings;
mod seating_chart;

pub use listings::*;
pub use seating_chart::*;
