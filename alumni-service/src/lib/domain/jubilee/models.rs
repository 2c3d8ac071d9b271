use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::jubilee::errors::ParticipantIdError;
use crate::user::errors::EnumParseError;

/// Registered Silver Jubilee participant.
///
/// Which personal fields are required depends on the participant category;
/// guests and babies instead carry a link to the main participant they
/// accompany. Every participant gets a unique secret code at registration.
#[derive(Debug, Clone)]
pub struct JubileeParticipant {
    pub id: ParticipantId,
    pub participant_category: ParticipantCategory,
    pub secret_code: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub alternative_phone_number: Option<String>,
    pub email: Option<String>,
    pub hsc_passing_year: Option<i32>,
    pub group: Option<JubileeGroup>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    pub payment_type: PaymentType,
    pub amount_type: AmountType,
    pub amount: f64,
    pub comments: Option<String>,
    pub father_name: Option<String>,
    pub father_phone_number: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_phone_number: Option<String>,
    pub mother_occupation: Option<String>,
    pub main_participant_batch: Option<i32>,
    pub main_participant_group: Option<JubileeGroup>,
    pub main_participant_id: Option<ParticipantId>,
    pub main_participant_name: Option<String>,
    pub guest_name: Option<String>,
    pub guest_mobile_number: Option<String>,
    pub baby_name: Option<String>,
    pub baby_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Participant unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, ParticipantIdError> {
        Uuid::parse_str(s)
            .map(ParticipantId)
            .map_err(|e| ParticipantIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantCategory {
    Alumni,
    Student,
    Guest,
    Baby,
    #[serde(rename = "Lifetime Membership")]
    LifetimeMembership,
}

impl ParticipantCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantCategory::Alumni => "Alumni",
            ParticipantCategory::Student => "Student",
            ParticipantCategory::Guest => "Guest",
            ParticipantCategory::Baby => "Baby",
            ParticipantCategory::LifetimeMembership => "Lifetime Membership",
        }
    }

    /// Guests and babies ride on a main participant's registration.
    pub fn is_companion(&self) -> bool {
        matches!(self, ParticipantCategory::Guest | ParticipantCategory::Baby)
    }
}

impl FromStr for ParticipantCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alumni" => Ok(ParticipantCategory::Alumni),
            "Student" => Ok(ParticipantCategory::Student),
            "Guest" => Ok(ParticipantCategory::Guest),
            "Baby" => Ok(ParticipantCategory::Baby),
            "Lifetime Membership" => Ok(ParticipantCategory::LifetimeMembership),
            _ => Err(EnumParseError::unknown("participant category", s)),
        }
    }
}

impl fmt::Display for ParticipantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JubileeGroup {
    Science,
    #[serde(rename = "Business Studies")]
    BusinessStudies,
    Humanities,
}

impl JubileeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            JubileeGroup::Science => "Science",
            JubileeGroup::BusinessStudies => "Business Studies",
            JubileeGroup::Humanities => "Humanities",
        }
    }

    /// Two-digit code used inside secret codes.
    pub fn code(&self) -> &'static str {
        match self {
            JubileeGroup::Science => "01",
            JubileeGroup::BusinessStudies => "02",
            JubileeGroup::Humanities => "03",
        }
    }
}

impl FromStr for JubileeGroup {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Science" => Ok(JubileeGroup::Science),
            "Business Studies" => Ok(JubileeGroup::BusinessStudies),
            "Humanities" => Ok(JubileeGroup::Humanities),
            _ => Err(EnumParseError::unknown("group", s)),
        }
    }
}

impl fmt::Display for JubileeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(EnumParseError::unknown("gender", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "Don't know")]
    DontKnow,
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::DontKnow => "Don't know",
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
        }
    }
}

impl FromStr for BloodGroup {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Don't know" => Ok(BloodGroup::DontKnow),
            "A+" => Ok(BloodGroup::APositive),
            "A-" => Ok(BloodGroup::ANegative),
            "B+" => Ok(BloodGroup::BPositive),
            "B-" => Ok(BloodGroup::BNegative),
            "O+" => Ok(BloodGroup::OPositive),
            "O-" => Ok(BloodGroup::ONegative),
            "AB+" => Ok(BloodGroup::AbPositive),
            "AB-" => Ok(BloodGroup::AbNegative),
            _ => Err(EnumParseError::unknown("blood group", s)),
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    Bkash,
    Nagad,
    Cash,
    #[serde(rename = "Bank Account")]
    BankAccount,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Bkash => "Bkash",
            PaymentType::Nagad => "Nagad",
            PaymentType::Cash => "Cash",
            PaymentType::BankAccount => "Bank Account",
        }
    }
}

impl FromStr for PaymentType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bkash" => Ok(PaymentType::Bkash),
            "Nagad" => Ok(PaymentType::Nagad),
            "Cash" => Ok(PaymentType::Cash),
            "Bank Account" => Ok(PaymentType::BankAccount),
            _ => Err(EnumParseError::unknown("payment type", s)),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Registration,
    Donation,
}

impl AmountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountType::Registration => "Registration",
            AmountType::Donation => "Donation",
        }
    }
}

impl FromStr for AmountType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Registration" => Ok(AmountType::Registration),
            "Donation" => Ok(AmountType::Donation),
            _ => Err(EnumParseError::unknown("amount type", s)),
        }
    }
}

impl fmt::Display for AmountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to register a participant.
///
/// Field requirements vary by category and are enforced by the service.
#[derive(Debug, Clone)]
pub struct RegisterParticipantCommand {
    pub participant_category: ParticipantCategory,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub alternative_phone_number: Option<String>,
    pub email: Option<String>,
    pub hsc_passing_year: Option<i32>,
    pub group: Option<JubileeGroup>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    pub payment_type: PaymentType,
    pub amount_type: AmountType,
    pub amount: f64,
    pub comments: Option<String>,
    pub father_name: Option<String>,
    pub father_phone_number: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_phone_number: Option<String>,
    pub mother_occupation: Option<String>,
    pub main_participant_batch: Option<i32>,
    pub main_participant_group: Option<JubileeGroup>,
    pub main_participant_id: Option<ParticipantId>,
    pub guest_name: Option<String>,
    pub guest_mobile_number: Option<String>,
    pub baby_name: Option<String>,
    pub baby_phone: Option<String>,
}

/// Command to update a participant; only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateParticipantCommand {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub alternative_phone_number: Option<String>,
    pub email: Option<String>,
    pub hsc_passing_year: Option<i32>,
    pub group: Option<JubileeGroup>,
    pub gender: Option<Gender>,
    pub blood_group: Option<BloodGroup>,
    pub payment_type: Option<PaymentType>,
    pub amount_type: Option<AmountType>,
    pub amount: Option<f64>,
    pub comments: Option<String>,
}

/// Participants of one batch/group combination.
#[derive(Debug, Clone)]
pub struct BatchGroupListing {
    pub batch: i32,
    pub group: JubileeGroup,
    pub total: usize,
    pub participants: Vec<JubileeParticipant>,
}

/// Outcome of a CSV bulk import. Row numbers are 1-based and count the
/// header line, matching what a spreadsheet shows.
#[derive(Debug, Clone, Serialize)]
pub struct CsvImportReport {
    pub created: usize,
    pub failed: Vec<CsvRowFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CsvRowFailure {
    pub row: usize,
    pub error: String,
}
