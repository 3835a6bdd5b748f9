mod common;

#[cfg(test)]
pub mod rsvp_tests {
    use sqlx::PgPool;

    use undangan::db::rsvp::*;
    use undangan::models::{validate_rsvp, RsvpCreate, RsvpInput};

    #[sqlx::test(migrations = "./migrations")]
    async fn submission_round_trips_through_the_table(pool: PgPool) {
        let created = RsvpCreate {
            guest_name: "Siti Rahma".to_string(),
            will_attend: true,
            number_of_guests: 3,
            notes: Some("Datang bersama keluarga".to_string()),
        };

        let saved = insert_submission(&pool, &created)
            .await
            .expect("Failed insert");

        assert_eq!(saved.guest_name, "Siti Rahma");
        assert!(saved.will_attend);
        assert_eq!(saved.number_of_guests, 3);
        assert_eq!(saved.notes.as_deref(), Some("Datang bersama keluarga"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn blank_notes_are_stored_as_null(pool: PgPool) {
        let input = RsvpInput {
            guest_name: "Budi".to_string(),
            attendance: "no".to_string(),
            number_of_guests: None,
            notes: Some("   ".to_string()),
        };
        let created = validate_rsvp(&input).expect("Validation failed");

        let saved = insert_submission(&pool, &created)
            .await
            .expect("Failed insert");

        assert!(!saved.will_attend);
        assert_eq!(saved.number_of_guests, 1);
        assert_eq!(saved.notes, None);

        let is_null: bool = sqlx::query_scalar(
            "SELECT notes IS NULL FROM rsvp_submissions WHERE id = $1",
        )
        .bind(saved.id)
        .fetch_one(&pool)
        .await
        .expect("Failed null check");
        assert!(is_null);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn guest_count_bounds_are_enforced_by_the_schema_too(pool: PgPool) {
        let out_of_range = RsvpCreate {
            guest_name: "Tamu Nakal".to_string(),
            will_attend: true,
            number_of_guests: 9,
            notes: None,
        };

        // Validation normally stops this; the CHECK constraint is the
        // backstop.
        let result = insert_submission(&pool, &out_of_range).await;
        assert!(result.is_err());
    }
}
