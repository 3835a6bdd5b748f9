use serde::Deserialize;
use undangan::models::RsvpInput;

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

#[derive(Deserialize)]
pub struct ContentEditForm {
    pub field: String,
    pub value: String,
}

#[derive(Deserialize)]
pub struct PhotoTextForm {
    pub field: String,
    pub value: String,
}

#[derive(Deserialize)]
pub struct RsvpForm {
    pub guest_name: String,
    #[serde(default)]
    pub attendance: String,
    pub number_of_guests: Option<i32>,
    pub notes: Option<String>,
}

impl RsvpForm {
    pub fn into_input(self) -> RsvpInput {
        RsvpInput {
            guest_name: self.guest_name,
            attendance: self.attendance,
            number_of_guests: self.number_of_guests,
            notes: self.notes,
        }
    }
}

#[derive(Deserialize)]
pub struct CountdownQuery {
    /// `DD:HH:MM:SS` the client currently shows; drives the flip cards.
    pub prev: Option<String>,
}
