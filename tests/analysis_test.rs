use rewindcli::analysis::aggregate::{WEIGHT_RANK, WEIGHT_YEARS};
use rewindcli::analysis::*;
use rewindcli::types::{AlbumImage, Playlist, PlaylistTracksRef, SongAppearance, Track, TrackAlbum, TrackArtist};

// Helper function to create a test appearance
fn create_appearance(track_id: &str, year: i32, rank: u32) -> SongAppearance {
    SongAppearance {
        track_id: track_id.to_string(),
        track_name: format!("{}_name", track_id),
        artist_name: format!("{}_artist", track_id),
        year,
        rank,
        album_image: None,
    }
}

// Helper function to create a test playlist
fn create_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        tracks: PlaylistTracksRef { total: 0 },
    }
}

// Helper function to create a test track
fn create_track(id: Option<&str>, name: &str, artist: &str) -> Track {
    Track {
        id: id.map(str::to_string),
        name: name.to_string(),
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", name),
            name: artist.to_string(),
        }],
        album: TrackAlbum {
            id: None,
            name: format!("{}_album", name),
            images: vec![AlbumImage {
                url: format!("https://img.test/{}", name),
                height: Some(640),
                width: Some(640),
            }],
        },
    }
}

#[test]
fn test_aggregate_reference_example() {
    let appearances = vec![
        create_appearance("A", 2023, 1),
        create_appearance("B", 2023, 2),
        create_appearance("A", 2024, 1),
    ];

    let analysis = aggregate_appearances(appearances);
    assert_eq!(analysis.len(), 2);

    let a = &analysis[0];
    assert_eq!(a.track_id, "A");
    assert_eq!(a.total_appearances, 2);
    assert_eq!(a.years_appeared, vec![2023, 2024]);
    assert_eq!(a.average_rank, 1.0);
    // both appearances sit at the group's max rank, so the rank score is zero
    assert_eq!(a.popularity_score, 200);

    let b = &analysis[1];
    assert_eq!(b.track_id, "B");
    assert_eq!(b.total_appearances, 1);
    assert_eq!(b.years_appeared, vec![2023]);
    assert_eq!(b.average_rank, 2.0);
    assert_eq!(b.popularity_score, 100);
}

#[test]
fn test_aggregate_output_length_equals_distinct_tracks() {
    let appearances = vec![
        create_appearance("A", 2020, 3),
        create_appearance("B", 2020, 1),
        create_appearance("A", 2021, 2),
        create_appearance("C", 2021, 5),
        create_appearance("B", 2022, 4),
    ];

    let analysis = aggregate_appearances(appearances);
    assert_eq!(analysis.len(), 3);
}

#[test]
fn test_total_appearances_counts_raw_records() {
    // the same track twice within one year's list counts twice
    let appearances = vec![
        create_appearance("A", 2023, 1),
        create_appearance("A", 2023, 7),
    ];

    let analysis = aggregate_appearances(appearances);
    assert_eq!(analysis.len(), 1);
    assert_eq!(analysis[0].total_appearances, 2);
    assert_eq!(analysis[0].average_rank, 4.0);
}

#[test]
fn test_years_appeared_distinct_and_ascending() {
    let appearances = vec![
        create_appearance("A", 2024, 1),
        create_appearance("A", 2020, 2),
        create_appearance("A", 2024, 3),
        create_appearance("A", 2022, 4),
    ];

    let analysis = aggregate_appearances(appearances);
    assert_eq!(analysis[0].years_appeared, vec![2020, 2022, 2024]);
}

#[test]
fn test_rank_score_rewards_top_positions() {
    // ranks 1 and 5: max rank 5, rank score (5-1) + (5-5) = 4
    let appearances = vec![
        create_appearance("A", 2023, 1),
        create_appearance("A", 2024, 5),
    ];

    let analysis = aggregate_appearances(appearances);
    assert_eq!(
        analysis[0].popularity_score,
        2 * WEIGHT_YEARS + 4 * WEIGHT_RANK
    );
    assert_eq!(analysis[0].average_rank, 3.0);
}

#[test]
fn test_popularity_monotone_in_appearance_count() {
    // all appearances at rank 1 keep the rank score at zero, so the score
    // grows only with the appearance count
    let two = aggregate_appearances(vec![
        create_appearance("A", 2022, 1),
        create_appearance("A", 2023, 1),
    ]);
    let three = aggregate_appearances(vec![
        create_appearance("A", 2022, 1),
        create_appearance("A", 2023, 1),
        create_appearance("A", 2024, 1),
    ]);

    assert!(three[0].popularity_score > two[0].popularity_score);
}

#[test]
fn test_aggregate_sorted_descending_with_stable_ties() {
    // C and D end up with identical scores; the stable sort must keep their
    // first-seen order
    let appearances = vec![
        create_appearance("C", 2023, 1),
        create_appearance("D", 2023, 2),
        create_appearance("B", 2023, 3),
        create_appearance("B", 2024, 3),
    ];

    let analysis = aggregate_appearances(appearances);
    assert_eq!(analysis[0].track_id, "B");
    assert_eq!(analysis[1].track_id, "C");
    assert_eq!(analysis[2].track_id, "D");
    assert_eq!(analysis[1].popularity_score, analysis[2].popularity_score);
}

#[test]
fn test_aggregate_empty_input() {
    let analysis = aggregate_appearances(Vec::new());
    assert!(analysis.is_empty());
}

#[test]
fn test_aggregate_is_idempotent() {
    let appearances = vec![
        create_appearance("A", 2020, 2),
        create_appearance("B", 2021, 1),
        create_appearance("A", 2022, 9),
    ];

    let first = aggregate_appearances(appearances.clone());
    let second = aggregate_appearances(appearances);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_display_strings_come_from_first_appearance() {
    let mut early = create_appearance("A", 2020, 1);
    early.track_name = "Original Name".to_string();
    let mut late = create_appearance("A", 2021, 1);
    late.track_name = "Remastered Name".to_string();

    let analysis = aggregate_appearances(vec![early, late]);
    assert_eq!(analysis[0].track_name, "Original Name");
}

#[test]
fn test_extract_year_loose_rule() {
    assert_eq!(extract_year("Your Top Songs 2023"), Some(2023));
    assert_eq!(extract_year("Liked Songs"), None);

    // not anchored to the 2000s and takes the first match
    assert_eq!(extract_year("1999 remix"), Some(1999));
    assert_eq!(extract_year("2019 vs 2020"), Some(2019));
}

#[test]
fn test_extract_year_strict_rule() {
    assert_eq!(extract_wrapped_year("Wrapped 2022"), Some(2022));
    assert_eq!(extract_wrapped_year("Your Top Songs 2023"), Some(2023));

    // strict rule only accepts standalone 20xx tokens
    assert_eq!(extract_wrapped_year("1999 remix"), None);
    assert_eq!(extract_wrapped_year("Liked Songs"), None);
    assert_eq!(extract_wrapped_year("20234 songs"), None);
}

#[test]
fn test_year_rules_diverge_on_purpose() {
    // the two call sites use different rules; this divergence is load-bearing
    let name = "1975 favourites";
    assert_eq!(extract_year(name), Some(1975));
    assert_eq!(extract_wrapped_year(name), None);
}

#[test]
fn test_is_top_songs_playlist() {
    assert!(is_top_songs_playlist("Your Top Songs 2022"));
    assert!(is_top_songs_playlist("Wrapped 2022"));
    assert!(is_top_songs_playlist("2022 Top Tracks"));
    assert!(is_top_songs_playlist("Top Songs of 2019"));

    // case-insensitive
    assert!(is_top_songs_playlist("YOUR TOP SONGS 2021"));
    assert!(is_top_songs_playlist("wrapped 2020"));

    assert!(!is_top_songs_playlist("Discover Weekly"));
    assert!(!is_top_songs_playlist("Top Songs"));
    assert!(!is_top_songs_playlist("Liked Songs"));
}

#[test]
fn test_identify_top_songs_playlists_preserves_order() {
    let playlists = vec![
        create_playlist("p1", "Discover Weekly"),
        create_playlist("p2", "Wrapped 2022"),
        create_playlist("p3", "Your Top Songs 2021"),
        create_playlist("p4", "Road Trip"),
        create_playlist("p5", "Your Top Songs 2021"),
    ];

    let detected = identify_top_songs_playlists(&playlists);
    let ids: Vec<&str> = detected.iter().map(|p| p.id.as_str()).collect();

    // original order, no dedup of playlists covering the same year
    assert_eq!(ids, vec!["p2", "p3", "p5"]);
}

#[test]
fn test_extract_track_ids_order_and_duplicates() {
    let text = "https://open.spotify.com/track/abc123 https://open.spotify.com/track/def456";
    assert_eq!(extract_track_ids(text), vec!["abc123", "def456"]);

    let with_dupes = "track/x1 some words track/x2\ntrack/x1";
    assert_eq!(extract_track_ids(with_dupes), vec!["x1", "x2", "x1"]);

    // query strings end the identifier token
    let with_query = "https://open.spotify.com/track/abc123?si=xyz";
    assert_eq!(extract_track_ids(with_query), vec!["abc123"]);

    assert!(extract_track_ids("no links here").is_empty());
}

#[test]
fn test_split_song_urls() {
    let text = "  https://a.test/track/1\nhttps://a.test/track/2   https://a.test/track/3\n\n";
    assert_eq!(
        split_song_urls(text),
        vec![
            "https://a.test/track/1",
            "https://a.test/track/2",
            "https://a.test/track/3"
        ]
    );

    assert!(split_song_urls("   \n \n ").is_empty());
}

#[test]
fn test_appearances_from_tracks_ranks_survivors() {
    let tracks = vec![
        create_track(Some("t1"), "First", "Artist A"),
        create_track(None, "Local File", "Artist B"),
        create_track(Some("t2"), "Second", "Artist C"),
    ];

    let appearances = appearances_from_tracks(&tracks, 2023);
    assert_eq!(appearances.len(), 2);

    // ranks are assigned after dropping id-less tracks
    assert_eq!(appearances[0].track_id, "t1");
    assert_eq!(appearances[0].rank, 1);
    assert_eq!(appearances[1].track_id, "t2");
    assert_eq!(appearances[1].rank, 2);
    assert_eq!(appearances[1].year, 2023);
    assert_eq!(appearances[1].artist_name, "Artist C");
    assert_eq!(
        appearances[1].album_image.as_deref(),
        Some("https://img.test/Second")
    );
}

#[test]
fn test_appearances_from_tracks_unknown_artist_fallback() {
    let mut track = create_track(Some("t1"), "Song", "ignored");
    track.artists.clear();

    let appearances = appearances_from_tracks(&[track], 2020);
    assert_eq!(appearances[0].artist_name, "Unknown Artist");
}
