mod common;

#[cfg(test)]
pub mod content_tests {
    use sqlx::PgPool;

    use undangan::db::content::*;
    use undangan::models::default_fields;
    use undangan::services::editable::commit_text;

    #[sqlx::test(migrations = "./migrations")]
    async fn missing_section_reads_as_defaults(pool: PgPool) {
        let record = get_content(&pool, "welcome")
            .await
            .expect("Failed content query");

        assert_eq!(record.id, None);
        assert_eq!(record.fields, default_fields("welcome"));
        assert_eq!(record.field("title"), "Selamat Datang");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn edited_field_layers_over_defaults(pool: PgPool) {
        let updated = update_field(&pool, "welcome", "title", "Halo Semua")
            .await
            .expect("Failed field update");

        assert!(updated.id.is_some());
        assert_eq!(updated.field("title"), "Halo Semua");
        // Untouched fields keep their default copy.
        assert_eq!(
            updated.field("quote"),
            default_fields("welcome")["quote"]
        );

        let reread = get_content(&pool, "welcome")
            .await
            .expect("Failed content query");
        assert_eq!(reread.field("title"), "Halo Semua");
        assert_eq!(reread.id, updated.id);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn repeated_edits_reuse_one_row(pool: PgPool) {
        let first = update_field(&pool, "venue", "venue_name", "Aula Barat")
            .await
            .expect("Failed field update");
        let second = update_field(&pool, "venue", "address", "Jl. Merdeka 1")
            .await
            .expect("Failed field update");

        assert_eq!(first.id, second.id);
        assert_eq!(second.field("venue_name"), "Aula Barat");
        assert_eq!(second.field("address"), "Jl. Merdeka 1");

        let rows: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM editable_content WHERE section_name = $1")
                .bind("venue")
                .fetch_one(&pool)
                .await
                .expect("Failed count query");
        assert_eq!(rows, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn sections_do_not_share_rows(pool: PgPool) {
        update_field(&pool, "welcome", "title", "A")
            .await
            .expect("Failed field update");
        update_field(&pool, "closing", "title", "B")
            .await
            .expect("Failed field update");

        let welcome = get_content(&pool, "welcome").await.unwrap();
        let closing = get_content(&pool, "closing").await.unwrap();

        assert_eq!(welcome.field("title"), "A");
        assert_eq!(closing.field("title"), "B");
        assert_ne!(welcome.id, closing.id);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn commit_policy_keeps_previous_value_on_empty_edit(pool: PgPool) {
        update_field(&pool, "welcome", "title", "Tetap Ada")
            .await
            .expect("Failed field update");

        // The endpoint runs every edit through commit_text first; an
        // empty commit never reaches the database.
        if let Some(value) = commit_text("   \n  ") {
            update_field(&pool, "welcome", "title", &value)
                .await
                .expect("Failed field update");
        }

        let record = get_content(&pool, "welcome").await.unwrap();
        assert_eq!(record.field("title"), "Tetap Ada");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unknown_section_still_reads(pool: PgPool) {
        let record = get_content(&pool, "guestbook")
            .await
            .expect("Failed content query");
        assert_eq!(record.id, None);
        assert!(record.fields.is_empty());
        assert_eq!(record.field("anything"), "");
    }
}
