//! Staff models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Keyword, ModelError, ModelResult, Person, PersonName};

/// Position of a staff member in the clinic roster. Rosters never shrink,
/// so an ID stays valid for the life of the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaffId(pub usize);

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job title of a staff member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobTitle {
    Physician,
    Nurse,
    Reception,
}

impl JobTitle {
    /// Lower-case title, e.g. "physician".
    pub fn title(&self) -> &'static str {
        match self {
            JobTitle::Physician => "physician",
            JobTitle::Nurse => "nurse",
            JobTitle::Reception => "reception",
        }
    }

    /// Prefix placed before a staff member's name.
    pub fn title_prefix(&self) -> &'static str {
        match self {
            JobTitle::Physician => "Dr.",
            JobTitle::Nurse => "Nurse",
            JobTitle::Reception => "Reception",
        }
    }

    pub fn is_clinical(&self) -> bool {
        !matches!(self, JobTitle::Reception)
    }
}

impl Keyword for JobTitle {
    const KIND: &'static str = "job title";
    const ALL: &'static [Self] = &[JobTitle::Physician, JobTitle::Nurse, JobTitle::Reception];

    fn as_str(&self) -> &'static str {
        match self {
            JobTitle::Physician => "PHYSICIAN",
            JobTitle::Nurse => "NURSE",
            JobTitle::Reception => "RECEPTION",
        }
    }
}

/// Highest education level of a staff member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    Doctoral,
    Masters,
    Allied,
}

impl EducationLevel {
    /// Lower-case display form.
    pub fn level(&self) -> &'static str {
        match self {
            EducationLevel::Doctoral => "doctoral",
            EducationLevel::Masters => "masters",
            EducationLevel::Allied => "allied",
        }
    }
}

impl Keyword for EducationLevel {
    const KIND: &'static str = "education level";
    const ALL: &'static [Self] = &[
        EducationLevel::Doctoral,
        EducationLevel::Masters,
        EducationLevel::Allied,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Doctoral => "DOCTORAL",
            EducationLevel::Masters => "MASTERS",
            EducationLevel::Allied => "ALLIED",
        }
    }
}

/// CPR certification tier held by non-clinical staff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CprLevel {
    A,
    B,
    C,
    Bls,
}

impl Keyword for CprLevel {
    const KIND: &'static str = "CPR level";
    const ALL: &'static [Self] = &[CprLevel::A, CprLevel::B, CprLevel::C, CprLevel::Bls];

    fn as_str(&self) -> &'static str {
        match self {
            CprLevel::A => "A",
            CprLevel::B => "B",
            CprLevel::C => "C",
            CprLevel::Bls => "BLS",
        }
    }
}

/// Whether a staff member may take new patient assignments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationStatus {
    #[default]
    Active,
    Deactivated,
}

impl Keyword for ActivationStatus {
    const KIND: &'static str = "activation status";
    const ALL: &'static [Self] = &[ActivationStatus::Active, ActivationStatus::Deactivated];

    fn as_str(&self) -> &'static str {
        match self {
            ActivationStatus::Active => "ACTIVE",
            ActivationStatus::Deactivated => "DEACTIVATED",
        }
    }
}

/// National Provider Identifier: exactly ten ASCII digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Npi(String);

impl Npi {
    pub fn new(value: &str) -> ModelResult<Self> {
        if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value.to_string()))
        } else {
            Err(ModelError::InvalidNpi(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Npi {
    type Error = ModelError;

    fn try_from(value: String) -> ModelResult<Self> {
        Npi::new(&value)
    }
}

impl From<Npi> for String {
    fn from(npi: Npi) -> Self {
        npi.0
    }
}

/// Which kind of identifier a staff member carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    #[serde(rename = "NPI")]
    Npi,
    #[serde(rename = "CPR")]
    Cpr,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Npi => f.write_str("NPI"),
            IdentifierKind::Cpr => f.write_str("CPR"),
        }
    }
}

/// Clinical staff are identified by NPI, non-clinical staff by CPR level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaffIdentifier {
    Clinical { npi: Npi },
    NonClinical { cpr_level: CprLevel },
}

impl StaffIdentifier {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            StaffIdentifier::Clinical { .. } => IdentifierKind::Npi,
            StaffIdentifier::NonClinical { .. } => IdentifierKind::Cpr,
        }
    }

    /// The NPI digits or the CPR level keyword.
    pub fn value(&self) -> &str {
        match self {
            StaffIdentifier::Clinical { npi } => npi.as_str(),
            StaffIdentifier::NonClinical { cpr_level } => cpr_level.as_str(),
        }
    }
}

/// A member of the clinic staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    name: PersonName,
    job_title: JobTitle,
    education_level: EducationLevel,
    identifier: StaffIdentifier,
    activation_status: ActivationStatus,
}

impl Staff {
    /// Create a physician or nurse. The NPI must be ten digits.
    pub fn clinical(
        first: &str,
        last: &str,
        job_title: JobTitle,
        education_level: EducationLevel,
        npi: &str,
    ) -> ModelResult<Self> {
        if !job_title.is_clinical() {
            return Err(ModelError::IdentifierMismatch(job_title));
        }
        Ok(Self {
            name: PersonName::new(first, last)?,
            job_title,
            education_level,
            identifier: StaffIdentifier::Clinical { npi: Npi::new(npi)? },
            activation_status: ActivationStatus::Active,
        })
    }

    /// Create a reception staff member.
    pub fn non_clinical(
        first: &str,
        last: &str,
        education_level: EducationLevel,
        cpr_level: CprLevel,
    ) -> ModelResult<Self> {
        Ok(Self {
            name: PersonName::new(first, last)?,
            job_title: JobTitle::Reception,
            education_level,
            identifier: StaffIdentifier::NonClinical { cpr_level },
            activation_status: ActivationStatus::Active,
        })
    }

    pub fn job_title(&self) -> JobTitle {
        self.job_title
    }

    pub fn education_level(&self) -> EducationLevel {
        self.education_level
    }

    pub fn identifier(&self) -> &StaffIdentifier {
        &self.identifier
    }

    pub fn activation_status(&self) -> ActivationStatus {
        self.activation_status
    }

    pub fn is_active(&self) -> bool {
        self.activation_status == ActivationStatus::Active
    }

    pub fn is_clinical(&self) -> bool {
        matches!(self.identifier, StaffIdentifier::Clinical { .. })
    }

    pub fn is_physician(&self) -> bool {
        self.job_title == JobTitle::Physician
    }

    pub fn npi(&self) -> Option<&str> {
        match &self.identifier {
            StaffIdentifier::Clinical { npi } => Some(npi.as_str()),
            StaffIdentifier::NonClinical { .. } => None,
        }
    }

    pub fn cpr_level(&self) -> Option<CprLevel> {
        match self.identifier {
            StaffIdentifier::NonClinical { cpr_level } => Some(cpr_level),
            StaffIdentifier::Clinical { .. } => None,
        }
    }

    pub fn title_prefix(&self) -> &'static str {
        self.job_title.title_prefix()
    }

    pub fn role(&self) -> &'static str {
        if self.is_clinical() {
            "Clinical Staff"
        } else {
            "Non-Clinical Staff"
        }
    }

    /// Returns false if the staff member was already deactivated.
    pub(crate) fn deactivate(&mut self) -> bool {
        let changed = self.is_active();
        self.activation_status = ActivationStatus::Deactivated;
        changed
    }
}

impl Person for Staff {
    fn name(&self) -> &PersonName {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "{} {} - {} - {} - {} ({}: {})",
            self.title_prefix(),
            self.full_name(),
            self.job_title.title(),
            self.education_level.level(),
            self.role(),
            self.identifier.kind(),
            self.identifier.value(),
        )
    }
}

impl PartialEq for Staff {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.job_title == other.job_title
            && self.education_level == other.education_level
            && self.identifier == other.identifier
    }
}

impl Eq for Staff {}

keyword_traits!(JobTitle, EducationLevel, CprLevel, ActivationStatus);

#[cfg(test)]
mod tests {
    use super::*;

    fn physician() -> Staff {
        Staff::clinical(
            "Amy",
            "Anguish",
            JobTitle::Physician,
            EducationLevel::Doctoral,
            "1234567890",
        )
        .unwrap()
    }

    #[test]
    fn test_clinical_staff() {
        let staff = physician();
        assert!(staff.is_clinical());
        assert!(staff.is_physician());
        assert!(staff.is_active());
        assert_eq!(staff.npi(), Some("1234567890"));
        assert_eq!(staff.identifier().kind(), IdentifierKind::Npi);
        assert_eq!(staff.title_prefix(), "Dr.");
        assert_eq!(staff.role(), "Clinical Staff");
    }

    #[test]
    fn test_npi_validation() {
        for bad in ["", "123456789", "12345678901", "12345abcde", "１２３４５６７８９０"] {
            let result = Staff::clinical(
                "Amy",
                "Anguish",
                JobTitle::Nurse,
                EducationLevel::Masters,
                bad,
            );
            assert!(matches!(result, Err(ModelError::InvalidNpi(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_reception_cannot_be_clinical() {
        let result = Staff::clinical(
            "Frank",
            "Febrile",
            JobTitle::Reception,
            EducationLevel::Allied,
            "1234567890",
        );
        assert_eq!(result.unwrap_err(), ModelError::IdentifierMismatch(JobTitle::Reception));
    }

    #[test]
    fn test_non_clinical_staff() {
        let staff = Staff::non_clinical("Frank", "Febrile", EducationLevel::Allied, CprLevel::Bls)
            .unwrap();
        assert!(!staff.is_clinical());
        assert_eq!(staff.job_title(), JobTitle::Reception);
        assert_eq!(staff.cpr_level(), Some(CprLevel::Bls));
        assert_eq!(staff.identifier().value(), "BLS");
        assert_eq!(staff.role(), "Non-Clinical Staff");
        assert_eq!(
            staff.description(),
            "Reception Frank Febrile - reception - allied - Non-Clinical Staff (CPR: BLS)"
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!("physician".parse::<JobTitle>().unwrap(), JobTitle::Physician);
        assert_eq!("Nurse".parse::<JobTitle>().unwrap(), JobTitle::Nurse);
        assert_eq!("masters".parse::<EducationLevel>().unwrap(), EducationLevel::Masters);
        assert_eq!("bls".parse::<CprLevel>().unwrap(), CprLevel::Bls);
        assert_eq!(
            "janitor".parse::<JobTitle>().unwrap_err(),
            ModelError::UnknownVariant {
                kind: "job title",
                value: "janitor".into()
            }
        );
    }

    #[test]
    fn test_deactivate_once() {
        let mut staff = physician();
        assert!(staff.deactivate());
        assert!(!staff.deactivate());
        assert_eq!(staff.activation_status(), ActivationStatus::Deactivated);
        // Activation status does not take part in equality.
        assert_eq!(staff, physician());
    }

    #[test]
    fn test_description() {
        assert_eq!(
            physician().description(),
            "Dr. Amy Anguish - physician - doctoral - Clinical Staff (NPI: 1234567890)"
        );
    }
}
