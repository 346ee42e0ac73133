//! Integration tests for mono-output.

use mono_core::{SimConfig, Space};
use mono_sim::Tally;

fn config(games: u64) -> SimConfig {
    SimConfig { games, moves_per_game: 40, ..SimConfig::default() }
}

/// A small hand-built tally: two moves landing on 7, one redirected to 15,
/// one ending in jail.
fn sample_tally() -> Tally {
    let mut t = Tally::new();
    t.record_land(Space(7));
    t.record_end(Space(15));
    t.record_land(Space(7));
    t.record_end(Space(7));
    t.record_land(Space(30));
    t.record_end(Space::JAIL);
    t.record_game();
    t
}

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::text::{BANNER, TextWriter};
    use crate::writer::TallyWriter;

    fn render(config: &SimConfig, tally: &Tally) -> Vec<String> {
        let mut w = TextWriter::new(Vec::new());
        w.write_tally(config, tally).unwrap();
        w.finish().unwrap();
        let bytes = w.into_inner().unwrap();
        String::from_utf8(bytes).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn banner_then_lands_then_ends() {
        let lines = render(&config(3), &sample_tally());
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[1], "RUNNING 3 GAMES");
        assert_eq!(lines[2], "PLAYING 40 MOVES");
        assert_eq!(lines[3], "DONE!");
        assert_eq!(lines[4], "LANDS");
        assert_eq!(lines[5 + 40], "ENDS");
        assert_eq!(lines.len(), 5 + 40 + 1 + 40);
    }

    #[test]
    fn counters_in_space_order() {
        let lines = render(&config(1), &sample_tally());
        let lands = &lines[5..45];
        let ends = &lines[46..86];
        assert_eq!(lands[7], "2");
        assert_eq!(lands[30], "1");
        assert_eq!(lands[0], "0");
        assert_eq!(ends[15], "1");
        assert_eq!(ends[7], "1");
        assert_eq!(ends[10], "1");
        assert_eq!(ends[30], "0");
    }

    #[test]
    fn text_finish_idempotent() {
        let mut w = TextWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, TALLY_FILE};
    use crate::row::TallyRow;
    use crate::writer::TallyWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TALLY_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["space", "name", "lands", "ends", "land_share", "end_share"]);
    }

    #[test]
    fn csv_one_row_per_space() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tally(&config(1), &sample_tally()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TALLY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 40);
        assert_eq!(&rows[7][0], "7");
        assert_eq!(&rows[7][1], "Chance 1");
        assert_eq!(&rows[7][2], "2");        // lands
        assert_eq!(&rows[10][3], "1");       // ends in jail
        assert_eq!(&rows[10][5], "0.333333"); // 1 of 3 ends
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn rows_follow_board_order() {
        let rows = TallyRow::from_tally(&sample_tally());
        assert_eq!(rows.len(), 40);
        assert_eq!(rows[0].name, "GO");
        assert_eq!(rows[39].name, "Boardwalk");
        assert!((rows[7].land_share - 2.0 / 3.0).abs() < 1e-12);
        let total: f64 = rows.iter().map(|r| r.end_share).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn integration_csv() {
        use mono_sim::{NoopObserver, RunnerBuilder};

        let runner = RunnerBuilder::new(config(200)).chunk_games(50).build().unwrap();
        let tally = runner.run(&mut NoopObserver).unwrap();

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tally(runner.config(), &tally).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TALLY_FILE)).unwrap();
        let ends: u64 = rdr
            .records()
            .map(|r| r.unwrap()[3].parse::<u64>().unwrap())
            .sum();
        assert_eq!(ends, 200 * 40);
    }
}
