use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Field name -> text, the JSONB payload of one `editable_content` row.
pub type ContentFields = BTreeMap<String, String>;

/// A named bundle of editable text fields for one page section.
///
/// `id` is `None` until the first edit-commit creates the backing row;
/// every later write targets that id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: Option<Uuid>,
    pub section: String,
    pub fields: ContentFields,
}

impl ContentRecord {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Sections the editing endpoints accept.
pub const KNOWN_SECTIONS: &[&str] = &[
    "landing",
    "welcome",
    "story",
    "venue",
    "timeline",
    "dress_code",
    "gallery",
    "rsvp",
    "closing",
    "countdown",
];

pub fn is_known_section(name: &str) -> bool {
    KNOWN_SECTIONS.contains(&name)
}

/// Built-in copy shown before any edit has ever been committed.
///
/// Unknown sections get an empty map; reads still succeed, writes are
/// rejected at the endpoint.
pub fn default_fields(section: &str) -> ContentFields {
    let pairs: &[(&str, &str)] = match section {
        "landing" => &[
            ("main_title", "Lukman & Destry"),
            ("sub_title", "THE MIRACLE MORNING"),
            ("date_text", "Sabtu, 15 September 2026"),
            ("venue_text", "Grand Ballroom \u{2022} Jakarta"),
            ("enter_button", "Buka Undangan"),
        ],
        "welcome" => &[
            ("title", "Selamat Datang"),
            (
                "description",
                "Dengan penuh kebahagiaan dan kehormatan, kami mengundang Anda \
                 untuk berbagi momen istimewa bersama kami dalam perayaan yang \
                 penuh keajaiban dan keanggunan.",
            ),
            (
                "quote",
                "Setiap momen berharga dimulai dengan undangan untuk bersama",
            ),
        ],
        "story" => &[
            ("title", "Kisah Perjalanan Kami"),
            ("empty_text", "Belum ada cerita foto yang tersedia."),
        ],
        "venue" => &[
            ("section_title", "Informasi Acara"),
            ("location_title", "Lokasi"),
            ("venue_name", "Grand Ballroom"),
            ("hotel_name", "Hotel Mulia Senayan"),
            ("address", "Jl. Asia Afrika No. 8, Jakarta"),
            ("date_title", "Tanggal"),
            ("date_value", "Sabtu, 15 September 2026"),
            ("time_title", "Waktu"),
            ("time_value", "19.00 WIB - Selesai"),
        ],
        "timeline" => &[
            ("title", "Rangkaian Acara"),
            ("subtitle", "Timeline malam keajaiban kami"),
            ("item1_time", "18:30 WIB"),
            ("item1_title", "Pendaftaran Tamu"),
            ("item2_time", "19:00 WIB"),
            ("item2_title", "Pembukaan Acara"),
            ("item3_time", "19:30 WIB"),
            ("item3_title", "Welcome Dinner"),
            ("item4_time", "20:30 WIB"),
            ("item4_title", "Entertainment"),
            ("item5_time", "21:30 WIB"),
            ("item5_title", "Networking Session"),
            ("item6_time", "22:30 WIB"),
            ("item6_title", "Penutupan"),
        ],
        "dress_code" => &[
            ("title", "Dress Code"),
            ("subtitle", "Black Tie / Formal Evening Attire"),
            ("men_title", "Pria"),
            ("men_description", "Jas formal berwarna gelap dengan dasi."),
            ("women_title", "Wanita"),
            ("women_description", "Gaun malam atau pakaian formal elegan."),
        ],
        "gallery" => &[
            ("title", "Galeri Momen"),
            ("empty_text", "Galeri masih kosong."),
        ],
        "rsvp" => &[
            ("section_title", "Konfirmasi Kehadiran"),
            ("section_subtitle", "Mohon konfirmasi kehadiran Anda"),
            ("name_label", "Nama Lengkap *"),
            ("attendance_label", "Konfirmasi Kehadiran *"),
            ("guest_count_label", "Jumlah Tamu *"),
            ("notes_label", "Catatan (Opsional)"),
            ("submit_button", "Kirim Konfirmasi"),
            ("success_title", "Terima Kasih!"),
            (
                "success_message",
                "Konfirmasi kehadiran Anda telah kami terima.",
            ),
            ("success_detail_yes", "Kami menantikan kehadiran Anda!"),
            ("success_detail_no", "Terima kasih atas konfirmasinya."),
        ],
        "closing" => &[
            ("title", "Sampai Bertemu"),
            (
                "message",
                "Merupakan suatu kehormatan dan kebahagiaan bagi kami apabila \
                 Bapak/Ibu/Saudara/i berkenan hadir untuk memberikan doa restu.",
            ),
        ],
        "countdown" => &[
            ("title", "Menghitung Mundur Hari Bahagia"),
            // Empty means: use the configured event date.
            ("target_date", ""),
            ("days_label", "Hari"),
            ("hours_label", "Jam"),
            ("minutes_label", "Menit"),
            ("seconds_label", "Detik"),
        ],
        _ => &[],
    };

    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_section_has_defaults() {
        for section in KNOWN_SECTIONS {
            assert!(
                !default_fields(section).is_empty(),
                "section {section} has no default copy"
            );
        }
    }

    #[test]
    fn unknown_section_defaults_are_empty() {
        assert!(default_fields("guestbook").is_empty());
        assert!(!is_known_section("guestbook"));
    }

    #[test]
    fn record_field_falls_back_to_empty() {
        let record = ContentRecord {
            id: None,
            section: "welcome".into(),
            fields: default_fields("welcome"),
        };
        assert_eq!(record.field("title"), "Selamat Datang");
        assert_eq!(record.field("no_such_field"), "");
    }
}
