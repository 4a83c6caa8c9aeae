use rewindcli::analysis::report::{DEFAULT_POSITION_THRESHOLD, clamp_threshold, cross_year_report};
use rewindcli::types::SavedSong;

// Helper function to create a saved (year, song) pair
fn create_saved(track_id: &str, year: i32, position: u32) -> (i32, SavedSong) {
    (
        year,
        SavedSong {
            track_id: track_id.to_string(),
            track_name: format!("{}_name", track_id),
            artist_name: format!("{}_artist", track_id),
            album_name: format!("{}_album", track_id),
            album_image: None,
            position,
            added_at: 0,
        },
    )
}

#[test]
fn test_clamp_threshold() {
    assert_eq!(clamp_threshold(0), 1);
    assert_eq!(clamp_threshold(1), 1);
    assert_eq!(clamp_threshold(50), 50);
    assert_eq!(clamp_threshold(100), 100);
    assert_eq!(clamp_threshold(500), 100);
    assert_eq!(DEFAULT_POSITION_THRESHOLD, 50);
}

#[test]
fn test_report_excludes_single_year_tracks() {
    let songs = vec![
        create_saved("A", 2022, 1),
        create_saved("A", 2023, 4),
        create_saved("B", 2023, 2),
    ];

    let report = cross_year_report(&songs, 50, None, None);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].track_id, "A");
}

#[test]
fn test_report_counts_distinct_years() {
    // two rows in the same year count one year but two appearances
    let songs = vec![
        create_saved("A", 2022, 3),
        create_saved("A", 2022, 9),
        create_saved("A", 2023, 6),
    ];

    let report = cross_year_report(&songs, 50, None, None);
    assert_eq!(report[0].years_appeared, 2);
    assert_eq!(report[0].years_list, vec![2022, 2023]);
    assert_eq!(report[0].total_appearances, 3);
    assert_eq!(report[0].average_position, 6.0);
    assert_eq!(report[0].best_position, 3);
    assert_eq!(report[0].worst_position, 9);
}

#[test]
fn test_report_position_threshold() {
    let songs = vec![
        create_saved("A", 2022, 10),
        create_saved("A", 2023, 60), // above threshold, filtered out
        create_saved("A", 2024, 20),
        create_saved("B", 2022, 70),
        create_saved("B", 2023, 80),
    ];

    let report = cross_year_report(&songs, 50, None, None);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].track_id, "A");
    assert_eq!(report[0].years_list, vec![2022, 2024]);

    // a looser threshold lets B through as well
    let report = cross_year_report(&songs, 100, None, None);
    assert_eq!(report.len(), 2);
}

#[test]
fn test_report_year_range() {
    let songs = vec![
        create_saved("A", 2019, 1),
        create_saved("A", 2021, 2),
        create_saved("A", 2023, 3),
    ];

    let report = cross_year_report(&songs, 50, Some(2020), Some(2022));
    // only 2021 remains inside the range, so the track is single-year
    assert!(report.is_empty());

    let report = cross_year_report(&songs, 50, Some(2020), None);
    assert_eq!(report[0].years_list, vec![2021, 2023]);

    let report = cross_year_report(&songs, 50, None, Some(2021));
    assert_eq!(report[0].years_list, vec![2019, 2021]);
}

#[test]
fn test_report_ordering() {
    let songs = vec![
        // B: two years, avg 2.0
        create_saved("B", 2022, 2),
        create_saved("B", 2023, 2),
        // A: three years, avg 30.0
        create_saved("A", 2021, 30),
        create_saved("A", 2022, 30),
        create_saved("A", 2023, 30),
        // C: two years, avg 1.5 (beats B on the average tiebreak)
        create_saved("C", 2022, 1),
        create_saved("C", 2023, 2),
    ];

    let report = cross_year_report(&songs, 50, None, None);
    let ids: Vec<&str> = report.iter().map(|s| s.track_id.as_str()).collect();

    // years appeared descending first, then average position ascending
    assert_eq!(ids, vec!["A", "C", "B"]);
}

#[test]
fn test_report_empty_input() {
    let report = cross_year_report(&[], 50, None, None);
    assert!(report.is_empty());
}
