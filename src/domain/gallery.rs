//! Progress-photo gallery types.

use chrono::NaiveDate;
use serde::Serialize;

/// A stored progress photo.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProgressPhoto {
    pub id: i64,
    pub user_id: Option<i64>,
    pub photo: String,
    pub taken_at: NaiveDate,
}

/// Photos grouped by the day they were taken, newest day first.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoGroup {
    /// Display label, e.g. "14 March".
    pub time: String,
    /// Public URLs of the photos taken that day.
    pub photo: Vec<String>,
}

/// Groups photos by `taken_at`, preserving the newest-first row order
/// within and across groups. `to_url` maps a stored filename to its
/// public URL.
pub fn group_by_day(photos: &[ProgressPhoto], to_url: impl Fn(&str) -> String) -> Vec<PhotoGroup> {
    let mut groups: Vec<(NaiveDate, PhotoGroup)> = Vec::new();
    for p in photos {
        match groups.iter_mut().find(|(d, _)| *d == p.taken_at) {
            Some((_, g)) => g.photo.push(to_url(&p.photo)),
            None => groups.push((
                p.taken_at,
                PhotoGroup {
                    time: display_date(p.taken_at),
                    photo: vec![to_url(&p.photo)],
                },
            )),
        }
    }
    groups.into_iter().map(|(_, g)| g).collect()
}

/// "14 March" style label used by the gallery screen.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

/// Suggested date for the next progress photo: 30 days after the most
/// recent one. `photos` must be newest first.
pub fn next_reminder(photos: &[ProgressPhoto]) -> Option<NaiveDate> {
    photos
        .first()
        .map(|p| p.taken_at + chrono::Duration::days(30))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: i64, name: &str, date: &str) -> ProgressPhoto {
        ProgressPhoto {
            id,
            user_id: Some(1),
            photo: name.to_string(),
            taken_at: date.parse().unwrap(),
        }
    }

    #[test]
    fn photos_grouped_by_day() {
        let rows = vec![
            photo(3, "c.png", "2024-03-14"),
            photo(2, "b.png", "2024-03-14"),
            photo(1, "a.png", "2024-02-01"),
        ];
        let groups = group_by_day(&rows, |name| format!("/uploads/{}", name));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].photo, vec!["/uploads/c.png", "/uploads/b.png"]);
        assert_eq!(groups[1].photo, vec!["/uploads/a.png"]);
    }

    #[test]
    fn display_date_label() {
        let date: NaiveDate = "2024-03-14".parse().unwrap();
        assert_eq!(display_date(date), "14 March");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_by_day(&[], |n| n.to_string());
        assert!(groups.is_empty());
    }

    #[test]
    fn reminder_is_thirty_days_after_the_newest_photo() {
        let rows = vec![
            photo(2, "b.png", "2024-03-14"),
            photo(1, "a.png", "2024-02-01"),
        ];
        assert_eq!(next_reminder(&rows), Some("2024-04-13".parse().unwrap()));
        assert_eq!(next_reminder(&[]), None);
    }
}
