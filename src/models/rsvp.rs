use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RsvpSubmission {
    pub id: Uuid,
    pub guest_name: String,
    pub will_attend: bool,
    pub number_of_guests: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated confirmation, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpCreate {
    pub guest_name: String,
    pub will_attend: bool,
    pub number_of_guests: i32,
    pub notes: Option<String>,
}

/// Raw form input before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpInput {
    pub guest_name: String,
    /// "yes" or "no"; anything else is rejected.
    pub attendance: String,
    pub number_of_guests: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RsvpValidationError {
    #[error("Nama harus diisi (2-100 karakter)")]
    InvalidName,
    #[error("Mohon pilih konfirmasi kehadiran")]
    MissingAttendance,
    #[error("Jumlah tamu harus antara 1 dan 5")]
    InvalidGuestCount,
    #[error("Catatan maksimal 500 karakter")]
    NotesTooLong,
}

/// Checks a raw submission against the form rules.
///
/// Whitespace around the name is dropped before the length check; an
/// empty notes field becomes `None` so the row stores NULL rather than
/// an empty string.
pub fn validate_rsvp(input: &RsvpInput) -> Result<RsvpCreate, RsvpValidationError> {
    let guest_name = input.guest_name.trim();
    if guest_name.chars().count() < 2 || guest_name.chars().count() > 100 {
        return Err(RsvpValidationError::InvalidName);
    }

    let will_attend = match input.attendance.as_str() {
        "yes" => true,
        "no" => false,
        _ => return Err(RsvpValidationError::MissingAttendance),
    };

    let number_of_guests = input.number_of_guests.unwrap_or(1);
    if !(1..=5).contains(&number_of_guests) {
        return Err(RsvpValidationError::InvalidGuestCount);
    }

    let notes = input
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    if let Some(n) = notes {
        if n.chars().count() > 500 {
            return Err(RsvpValidationError::NotesTooLong);
        }
    }

    Ok(RsvpCreate {
        guest_name: guest_name.to_string(),
        will_attend,
        number_of_guests,
        notes: notes.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> RsvpInput {
        RsvpInput {
            guest_name: "Budi Santoso".into(),
            attendance: "yes".into(),
            number_of_guests: Some(2),
            notes: None,
        }
    }

    #[test]
    fn accepts_a_plain_submission() {
        let created = validate_rsvp(&base_input()).unwrap();
        assert_eq!(created.guest_name, "Budi Santoso");
        assert!(created.will_attend);
        assert_eq!(created.number_of_guests, 2);
        assert_eq!(created.notes, None);
    }

    #[test]
    fn trims_name_before_checking_length() {
        let mut input = base_input();
        input.guest_name = "  Ani  ".into();
        assert_eq!(validate_rsvp(&input).unwrap().guest_name, "Ani");

        input.guest_name = "   A   ".into();
        assert_eq!(validate_rsvp(&input), Err(RsvpValidationError::InvalidName));
    }

    #[test]
    fn rejects_out_of_range_names() {
        let mut input = base_input();
        input.guest_name = "A".into();
        assert_eq!(validate_rsvp(&input), Err(RsvpValidationError::InvalidName));

        input.guest_name = "x".repeat(101);
        assert_eq!(validate_rsvp(&input), Err(RsvpValidationError::InvalidName));

        input.guest_name = "x".repeat(100);
        assert!(validate_rsvp(&input).is_ok());
    }

    #[test]
    fn attendance_must_be_yes_or_no() {
        let mut input = base_input();
        input.attendance = "no".into();
        assert!(!validate_rsvp(&input).unwrap().will_attend);

        input.attendance = "maybe".into();
        assert_eq!(
            validate_rsvp(&input),
            Err(RsvpValidationError::MissingAttendance)
        );

        input.attendance = String::new();
        assert_eq!(
            validate_rsvp(&input),
            Err(RsvpValidationError::MissingAttendance)
        );
    }

    #[test]
    fn guest_count_defaults_to_one_and_stays_in_range() {
        let mut input = base_input();
        input.number_of_guests = None;
        assert_eq!(validate_rsvp(&input).unwrap().number_of_guests, 1);

        input.number_of_guests = Some(0);
        assert_eq!(
            validate_rsvp(&input),
            Err(RsvpValidationError::InvalidGuestCount)
        );

        input.number_of_guests = Some(6);
        assert_eq!(
            validate_rsvp(&input),
            Err(RsvpValidationError::InvalidGuestCount)
        );

        input.number_of_guests = Some(5);
        assert!(validate_rsvp(&input).is_ok());
    }

    #[test]
    fn blank_notes_become_none() {
        let mut input = base_input();
        input.notes = Some("   ".into());
        assert_eq!(validate_rsvp(&input).unwrap().notes, None);

        input.notes = Some("Mohon tempat duduk dekat pintu".into());
        assert_eq!(
            validate_rsvp(&input).unwrap().notes.as_deref(),
            Some("Mohon tempat duduk dekat pintu")
        );

        input.notes = Some("x".repeat(501));
        assert_eq!(validate_rsvp(&input), Err(RsvpValidationError::NotesTooLong));
    }
}
