//! Lead request model and field validation
//!
//! A [`LeadRequest`] is what a prospective customer fills in on the quote
//! form. Every rule is checked independently so each field can show its own
//! hint next to the control.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of digits a phone number must have
pub const PHONE_DIGITS: usize = 10;

/// Form fields, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeadField {
    Name,
    MovingDate,
    Phone,
    Email,
    MovingFrom,
    MovingTo,
    Message,
}

impl LeadField {
    pub const ALL: [LeadField; 7] = [
        LeadField::Name,
        LeadField::MovingDate,
        LeadField::Phone,
        LeadField::Email,
        LeadField::MovingFrom,
        LeadField::MovingTo,
        LeadField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadField::Name => "Full Name",
            LeadField::MovingDate => "Moving Date",
            LeadField::Phone => "Phone",
            LeadField::Email => "Email",
            LeadField::MovingFrom => "Moving From",
            LeadField::MovingTo => "Moving To",
            LeadField::Message => "Additional Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, LeadField::Message)
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty or whitespace only
    Required(LeadField),
    /// Email is not a syntactically valid address
    InvalidEmail,
    /// Phone is not exactly ten decimal digits
    InvalidPhone,
    /// Moving date is today or earlier
    DateNotInFuture,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidEmail => write!(f, "Invalid email"),
            FieldError::InvalidPhone => write!(f, "Phone must be {} digits", PHONE_DIGITS),
            FieldError::DateNotInFuture => write!(f, "Select tomorrow or later"),
        }
    }
}

/// Per-field validation failures, ordered by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<LeadField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: LeadField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: LeadField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Hint text for a field, if it failed
    pub fn message(&self, field: LeadField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn clear(&mut self, field: LeadField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

/// Quote request as entered by the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub moving_from: String,
    pub moving_to: String,
    /// Serialized as an ISO calendar date (`YYYY-MM-DD`)
    pub moving_date: Option<NaiveDate>,
    #[serde(default)]
    pub message: String,
}

impl LeadRequest {
    /// Fresh form contents: every text field empty, moving date on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            moving_from: String::new(),
            moving_to: String::new(),
            moving_date: Some(today),
            message: String::new(),
        }
    }

    /// Raw text of a field as bound to its form control
    pub fn field(&self, field: LeadField) -> String {
        match field {
            LeadField::Name => self.name.clone(),
            LeadField::Email => self.email.clone(),
            LeadField::Phone => self.phone.clone(),
            LeadField::MovingFrom => self.moving_from.clone(),
            LeadField::MovingTo => self.moving_to.clone(),
            LeadField::MovingDate => self
                .moving_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            LeadField::Message => self.message.clone(),
        }
    }

    /// Update a field from its control's raw value. An unparsable date
    /// clears the moving date.
    pub fn set_field(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::MovingFrom => self.moving_from = value,
            LeadField::MovingTo => self.moving_to = value,
            LeadField::MovingDate => self.moving_date = parse_date(&value),
            LeadField::Message => self.message = value,
        }
    }

    /// Check a single field against its rule
    pub fn validate_field(&self, field: LeadField, today: NaiveDate) -> Result<(), FieldError> {
        match field {
            LeadField::Name => require_text(&self.name, field),
            LeadField::MovingFrom => require_text(&self.moving_from, field),
            LeadField::MovingTo => require_text(&self.moving_to, field),
            LeadField::Email => {
                require_text(&self.email, field)?;
                if is_valid_email(&self.email) {
                    Ok(())
                } else {
                    Err(FieldError::InvalidEmail)
                }
            }
            LeadField::Phone => {
                require_text(&self.phone, field)?;
                if is_valid_phone(&self.phone) {
                    Ok(())
                } else {
                    Err(FieldError::InvalidPhone)
                }
            }
            LeadField::MovingDate => match self.moving_date {
                None => Err(FieldError::Required(field)),
                Some(date) if date > today => Ok(()),
                Some(_) => Err(FieldError::DateNotInFuture),
            },
            LeadField::Message => Ok(()),
        }
    }

    /// Check every field. All rules must pass for the request to be sent.
    pub fn validate(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in LeadField::ALL {
            if let Err(error) = self.validate_field(field, today) {
                errors.insert(field, error);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn require_text(value: &str, field: LeadField) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

/// Parse the value of an `<input type="date">`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// First date the form accepts
pub fn earliest_moving_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Exactly ten ASCII digits, nothing else (no spaces, dashes or prefix)
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Standard `local@domain.tld` address syntax.
///
/// Local part: letters, digits and ``!#$%&'*+/=?^_`{|}~.-``, no leading,
/// trailing or doubled dots. Domain: dot-separated labels of letters,
/// digits and hyphens (not at either end of a label), at least two labels,
/// alphabetic top-level label of two or more characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') || local.is_empty() || local.len() > 64 || domain.len() > 255 {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c))
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..");
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}
