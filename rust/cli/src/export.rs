//! CSV rendering of probability tables.
//!
//! One file is produced per target-count-in-deck (s). Rows are the number of
//! target cards in hand (k), columns the hand sizes (h). Four targets in a
//! sixty-card deck, exact counts:
//!
//! ```text
//!  ,1,2,3
//! 0,0.93333,0.87006,0.81005
//! 1,0.06667,0.12655,0.18001
//! 2, ,0.00339,0.00982
//! 3, , ,0.00012
//! ```
//!
//! Two transforms are applied before formatting. For "at most" tables in the
//! best-of-one format the value is squared: this approximates single-game hand
//! smoothing and has no known exact formula, so it is kept as is. An inverse
//! export replaces the value with `1 - value`; combined with "at most" the row
//! label moves up by one, since `1 - AtMost(k)` is `AtLeast(k + 1)`.

use std::io::Write;
use std::path::{Path, PathBuf};

use carddraw_engine::engine::ProbabilityEngine;
use carddraw_engine::table::ProbabilityKind;
use carddraw_engine::verify::{SUM_PRECISION_DIGITS, round_to};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::io_utils::require_dir;

/// Match format the exported odds are meant for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFormat {
    /// Best of one
    Bo1,
    /// Best of three
    Bo3,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Inversion {
    Normal,
    Inverse,
}

impl Inversion {
    pub fn from_flag(inverse: bool) -> Self {
        if inverse {
            Inversion::Inverse
        } else {
            Inversion::Normal
        }
    }
}

/// One family of CSV files: a file-name prefix plus how to transform values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub prefix: String,
    pub kind: ProbabilityKind,
    pub match_format: MatchFormat,
    pub inversion: Inversion,
}

impl ExportRequest {
    pub fn new(
        prefix: impl Into<String>,
        kind: ProbabilityKind,
        match_format: MatchFormat,
        inversion: Inversion,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            kind,
            match_format,
            inversion,
        }
    }

    /// The four sets written by `generate`.
    pub fn standard_set() -> Vec<ExportRequest> {
        vec![
            ExportRequest::new(
                "mtg_exact",
                ProbabilityKind::Exact,
                MatchFormat::Bo3,
                Inversion::Normal,
            ),
            ExportRequest::new(
                "mtg_atleast",
                ProbabilityKind::AtLeast,
                MatchFormat::Bo3,
                Inversion::Normal,
            ),
            ExportRequest::new(
                "mtg_atmost",
                ProbabilityKind::AtMost,
                MatchFormat::Bo3,
                Inversion::Normal,
            ),
            ExportRequest::new(
                "mtg_atmost_bo1_inverse",
                ProbabilityKind::AtMost,
                MatchFormat::Bo1,
                Inversion::Inverse,
            ),
        ]
    }

    fn shifts_rows(&self) -> bool {
        self.kind == ProbabilityKind::AtMost && self.inversion == Inversion::Inverse
    }

    /// Applies the format and inversion transforms to one table value.
    pub fn transform(&self, value: f64) -> f64 {
        let mut v = value;
        if self.kind == ProbabilityKind::AtMost && self.match_format == MatchFormat::Bo1 {
            v = v.powi(2);
        }
        if self.inversion == Inversion::Inverse {
            v = 1.0 - v;
        }
        v
    }
}

/// Blank for values that round to zero, otherwise five fixed decimals.
pub fn format_cell(value: f64) -> String {
    if round_to(value, SUM_PRECISION_DIGITS) == 0.0 {
        " ".to_string()
    } else {
        format!("{:.5}", value)
    }
}

pub fn export_file_name(prefix: &str, deck_size: usize, specific_in_deck: usize) -> String {
    format!("{}_{}_{}.csv", prefix, deck_size, specific_in_deck)
}

/// Renders the table for one s as CSV text, one line per row.
pub fn render_csv(
    engine: &ProbabilityEngine,
    specific_in_deck: usize,
    request: &ExportRequest,
) -> Result<String, CliError> {
    let cfg = engine.config();
    let table = engine.table(request.kind);

    let mut out = String::from(" ");
    for h in cfg.hand_sizes() {
        out.push_str(&format!(",{}", h));
    }
    out.push('\n');

    let last_row = if request.shifts_rows() {
        cfg.max_hand_size().checked_sub(1)
    } else {
        Some(cfg.max_hand_size())
    };
    let Some(last_row) = last_row else {
        return Ok(out);
    };

    for k in 0..=last_row {
        let label = if request.shifts_rows() { k + 1 } else { k };
        out.push_str(&label.to_string());
        for h in cfg.hand_sizes() {
            out.push(',');
            if k > h {
                out.push(' ');
                continue;
            }
            let value = table.get(specific_in_deck, h, k).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "no {} value for {} target cards, hand {}, {} in hand",
                    request.kind, specific_in_deck, h, k
                ))
            })?;
            out.push_str(&format_cell(request.transform(value)));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Writes one CSV per configured s into `dir`, replacing existing files.
/// The directory must already exist.
pub fn write_export(
    engine: &ProbabilityEngine,
    dir: &Path,
    request: &ExportRequest,
) -> Result<Vec<PathBuf>, CliError> {
    require_dir(dir).map_err(CliError::InvalidInput)?;
    let cfg = engine.config();
    let mut written = Vec::with_capacity(cfg.card_counts().count());
    for s in cfg.card_counts() {
        let path = dir.join(export_file_name(&request.prefix, cfg.deck_size(), s));
        let csv = render_csv(engine, s, request)?;
        let mut file = std::fs::File::create(&path).map(std::io::BufWriter::new)?;
        file.write_all(csv.as_bytes())?;
        file.flush()?;
        written.push(path);
    }
    debug!(
        prefix = %request.prefix,
        deck_size = cfg.deck_size(),
        files = written.len(),
        "export set written"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carddraw_engine::config::DeckConfiguration;

    fn engine() -> ProbabilityEngine {
        ProbabilityEngine::new(DeckConfiguration::new(60, 1, 4, 1, 3).unwrap()).unwrap()
    }

    fn exact() -> ExportRequest {
        ExportRequest::new("t", ProbabilityKind::Exact, MatchFormat::Bo3, Inversion::Normal)
    }

    #[test]
    fn header_lists_hand_sizes() {
        let csv = render_csv(&engine(), 4, &exact()).unwrap();
        assert_eq!(csv.lines().next(), Some(" ,1,2,3"));
    }

    #[test]
    fn rows_cover_zero_to_max_hand() {
        let csv = render_csv(&engine(), 4, &exact()).unwrap();
        let labels: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(labels, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn cells_beyond_hand_size_are_blank() {
        let csv = render_csv(&engine(), 4, &exact()).unwrap();
        let row3: Vec<&str> = csv.lines().nth(4).unwrap().split(',').collect();
        assert_eq!(row3[1], " ");
        assert_eq!(row3[2], " ");
        assert_ne!(row3[3], " ");
    }

    #[test]
    fn first_cell_is_four_in_sixty_miss() {
        let csv = render_csv(&engine(), 4, &exact()).unwrap();
        let row0: Vec<&str> = csv.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(row0[1], format!("{:.5}", 56.0 / 60.0));
        let row1: Vec<&str> = csv.lines().nth(2).unwrap().split(',').collect();
        assert_eq!(row1[1], "0.06667");
    }

    #[test]
    fn zero_values_are_blank() {
        // one target card: two hits in a hand of two is impossible
        let csv = render_csv(&engine(), 1, &exact()).unwrap();
        let row2: Vec<&str> = csv.lines().nth(3).unwrap().split(',').collect();
        assert_eq!(row2[2], " ");
        assert_eq!(row2[3], " ");
    }

    #[test]
    fn bo1_at_most_squares_the_value() {
        let req = ExportRequest::new(
            "t",
            ProbabilityKind::AtMost,
            MatchFormat::Bo1,
            Inversion::Normal,
        );
        assert_eq!(req.transform(0.5), 0.25);
        let bo3 = ExportRequest::new(
            "t",
            ProbabilityKind::AtMost,
            MatchFormat::Bo3,
            Inversion::Normal,
        );
        assert_eq!(bo3.transform(0.5), 0.5);
    }

    #[test]
    fn bo1_does_not_touch_other_kinds() {
        let req = ExportRequest::new(
            "t",
            ProbabilityKind::AtLeast,
            MatchFormat::Bo1,
            Inversion::Normal,
        );
        assert_eq!(req.transform(0.5), 0.5);
    }

    #[test]
    fn inverse_at_most_squares_then_complements_and_shifts_labels() {
        let req = ExportRequest::new(
            "t",
            ProbabilityKind::AtMost,
            MatchFormat::Bo1,
            Inversion::Inverse,
        );
        assert_eq!(req.transform(0.5), 0.75);

        let e = engine();
        let csv = render_csv(&e, 4, &req).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        // header + rows k = 0..=2 labelled 1..=3
        assert_eq!(lines.len(), 4);
        let labels: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(labels, vec!["1", "2", "3"]);

        let at_most = e.probability(4, 1, 0, ProbabilityKind::AtMost).unwrap();
        let row: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(row[1], format!("{:.5}", 1.0 - at_most * at_most));
    }

    #[test]
    fn inverse_of_certain_value_is_blank() {
        let req = ExportRequest::new(
            "t",
            ProbabilityKind::AtLeast,
            MatchFormat::Bo3,
            Inversion::Inverse,
        );
        assert_eq!(format_cell(req.transform(1.0)), " ");
        let csv = render_csv(&engine(), 2, &req).unwrap();
        // at least zero is always 1, so the inverse row 0 is empty
        assert_eq!(csv.lines().nth(1), Some("0, , , "));
    }

    #[test]
    fn format_cell_rounds_to_five_places() {
        assert_eq!(format_cell(0.123456), "0.12346");
        assert_eq!(format_cell(1.0), "1.00000");
        assert_eq!(format_cell(4e-11), " ");
        assert_eq!(format_cell(-1e-16), " ");
    }

    #[test]
    fn file_name_joins_prefix_deck_and_count() {
        assert_eq!(export_file_name("mtg_exact", 60, 4), "mtg_exact_60_4.csv");
    }

    #[test]
    fn write_export_creates_one_file_per_count() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_export(&engine(), dir.path(), &exact()).unwrap();
        assert_eq!(written.len(), 4);
        let body = std::fs::read_to_string(dir.path().join("t_60_4.csv")).unwrap();
        assert!(body.starts_with(" ,1,2,3\n"));
    }

    #[test]
    fn write_export_replaces_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("t_60_1.csv");
        std::fs::write(&target, "stale content that is much longer than a header").unwrap();
        write_export(&engine(), dir.path(), &exact()).unwrap();
        let body = std::fs::read_to_string(target).unwrap();
        assert!(!body.contains("stale"));
    }

    #[test]
    fn write_export_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = write_export(&engine(), &missing, &exact()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn standard_set_has_four_families() {
        let prefixes: Vec<String> = ExportRequest::standard_set()
            .into_iter()
            .map(|r| r.prefix)
            .collect();
        assert_eq!(
            prefixes,
            vec!["mtg_exact", "mtg_atleast", "mtg_atmost", "mtg_atmost_bo1_inverse"]
        );
    }
}
