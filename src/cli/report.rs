use tabled::Table;

use crate::{
    analysis::{self, report::DEFAULT_POSITION_THRESHOLD},
    info,
    management::SavedSongsManager,
    types::ReportTableRow,
    utils, warning,
};

/// Prints the cross-year report over saved per-year selections.
///
/// Unlike the analyze commands this reads only local storage; it counts
/// distinct years per track and keeps tracks that appear in more than one
/// year, ordered by years appeared and average position.
pub async fn report(threshold: Option<u32>, min_year: Option<i32>, max_year: Option<i32>) {
    let songs_mgr = match SavedSongsManager::load().await {
        Ok(manager) => manager,
        Err(_) => {
            warning!("No saved songs found. Run rewindcli sync or rewindcli songs add first.");
            return;
        }
    };

    let songs = analysis::cross_year_report(
        &songs_mgr.all_songs(),
        threshold.unwrap_or(DEFAULT_POSITION_THRESHOLD),
        min_year,
        max_year,
    );

    if songs.is_empty() {
        info!("No songs appear in more than one year yet.");
        return;
    }

    let rows: Vec<ReportTableRow> = songs
        .into_iter()
        .map(|s| ReportTableRow {
            track: s.track_name,
            artist: s.artist_name,
            years: utils::join_years(&s.years_list),
            avg_position: format!("{:.1}", s.average_position),
            best: s.best_position,
            worst: s.worst_position,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
