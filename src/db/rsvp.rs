//! Writes of the `rsvp_submissions` table.

use crate::models::{RsvpCreate, RsvpSubmission};
use sqlx::PgPool;

pub async fn insert_submission(
    pool: &PgPool,
    rsvp: &RsvpCreate,
) -> Result<RsvpSubmission, sqlx::Error> {
    sqlx::query_as::<_, RsvpSubmission>(
        "INSERT INTO rsvp_submissions (guest_name, will_attend, number_of_guests, notes)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&rsvp.guest_name)
    .bind(rsvp.will_attend)
    .bind(rsvp.number_of_guests)
    .bind(&rsvp.notes)
    .fetch_one(pool)
    .await
}
