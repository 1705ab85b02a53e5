//! Visit records and vital signs.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Keyword, ModelError, ModelResult};

/// Shown in place of a blank chief complaint.
pub const NO_CHIEF_COMPLAINT: &str = "No chief complaint recorded.";

/// Timestamp layout used in reports.
pub const REGISTRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Visit status, shared by patients and their visit records.
///
/// `InProgress` moves to `Completed` or `AwaitingResults`; `Discharged` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitStatus {
    #[default]
    InProgress,
    Completed,
    AwaitingResults,
    Discharged,
}

impl Keyword for VisitStatus {
    const KIND: &'static str = "visit status";
    const ALL: &'static [Self] = &[
        VisitStatus::InProgress,
        VisitStatus::Completed,
        VisitStatus::AwaitingResults,
        VisitStatus::Discharged,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::InProgress => "IN_PROGRESS",
            VisitStatus::Completed => "COMPLETED",
            VisitStatus::AwaitingResults => "AWAITING_RESULTS",
            VisitStatus::Discharged => "DISCHARGED",
        }
    }
}

/// Review state of a visit record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl Keyword for ApprovalStatus {
    const KIND: &'static str = "approval status";
    const ALL: &'static [Self] = &[
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Denied,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Denied => "DENIED",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Keyword for TemperatureUnit {
    const KIND: &'static str = "temperature unit";
    const ALL: &'static [Self] = &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "CELSIUS",
            TemperatureUnit::Fahrenheit => "FAHRENHEIT",
        }
    }
}

keyword_traits!(VisitStatus, ApprovalStatus, TemperatureUnit);

/// A body temperature reading as entered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Celsius,
        }
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Fahrenheit,
        }
    }

    pub fn to_celsius(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value,
            TemperatureUnit::Fahrenheit => (self.value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// One registration of a patient at the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRecord {
    registered_at: NaiveDateTime,
    chief_complaint: String,
    /// Always Celsius, whatever unit the reading was taken in.
    body_temperature: f64,
    /// Unit the reading was entered in.
    temperature_unit: TemperatureUnit,
    visit_status: VisitStatus,
    approval_status: ApprovalStatus,
}

impl VisitRecord {
    /// Create a pending, in-progress visit record.
    pub fn new(
        registered_at: NaiveDateTime,
        chief_complaint: &str,
        temperature: Temperature,
    ) -> ModelResult<Self> {
        if !temperature.value.is_finite() {
            return Err(ModelError::InvalidTemperature(temperature.value));
        }

        let chief_complaint = match chief_complaint.trim() {
            "" => NO_CHIEF_COMPLAINT.to_string(),
            complaint => complaint.to_string(),
        };

        Ok(Self {
            registered_at,
            chief_complaint,
            body_temperature: temperature.to_celsius(),
            temperature_unit: temperature.unit,
            visit_status: VisitStatus::InProgress,
            approval_status: ApprovalStatus::Pending,
        })
    }

    pub fn registered_at(&self) -> NaiveDateTime {
        self.registered_at
    }

    pub fn formatted_registered_at(&self) -> String {
        self.registered_at.format(REGISTRATION_FORMAT).to_string()
    }

    pub fn chief_complaint(&self) -> &str {
        &self.chief_complaint
    }

    /// Body temperature in Celsius.
    pub fn body_temperature(&self) -> f64 {
        self.body_temperature
    }

    /// e.g. "37.0 °C".
    pub fn formatted_body_temperature(&self) -> String {
        format!("{:.1} °C", self.body_temperature)
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    pub fn visit_status(&self) -> VisitStatus {
        self.visit_status
    }

    pub fn set_visit_status(&mut self, status: VisitStatus) {
        self.visit_status = status;
    }

    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    pub fn set_approval_status(&mut self, status: ApprovalStatus) {
        self.approval_status = status;
    }
}

impl fmt::Display for VisitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registration: {}, Chief Complaint: {}, Body Temperature: {}",
            self.formatted_registered_at(),
            self.chief_complaint,
            self.formatted_body_temperature()
        )
    }
}
