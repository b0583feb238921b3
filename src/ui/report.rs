// LogTriage - ui/report.rs
//
// Text rendering of level counts and filtered records.
// Pure functions: every renderer returns a String; the caller decides
// where it is written.

use crate::core::filter::normalise_level;
use crate::core::model::{LevelCount, LogRecord};
use crate::ui::theme::{level_colour, paint_level};
use crate::util::constants::{HEADER_COUNT, HEADER_LEVEL};
use comfy_table::presets::ASCII_NO_BORDERS;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Two-column table of level and count, one row per distinct level in
/// first-seen order. Level cells carry their level colour when `styled`.
pub fn render_counts(counts: &LevelCount, styled: bool) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_NO_BORDERS);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    table.set_header(vec![
        Cell::new(HEADER_LEVEL).set_alignment(CellAlignment::Center),
        Cell::new(HEADER_COUNT).set_alignment(CellAlignment::Center),
    ]);

    for (level, count) in counts.iter() {
        let mut level_cell = Cell::new(level).set_alignment(CellAlignment::Center);
        if styled {
            level_cell = level_cell
                .fg(level_colour(level).table_colour())
                .add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            level_cell,
            Cell::new(count).set_alignment(CellAlignment::Center),
        ]);
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}

/// Detail lines for the records that matched `level`.
///
/// One `date time - message` line per record under a header naming the
/// level. With no records a single "no logs" line is rendered instead.
pub fn render_filtered(records: &[LogRecord], level: &str, styled: bool) -> String {
    let shown = paint_level(&normalise_level(level), styled);

    if records.is_empty() {
        return format!("No logs for level '{shown}'\n");
    }

    let mut out = format!("Log details for level '{shown}':\n");
    for record in records {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out
}

/// `date time - message`
pub fn format_record(record: &LogRecord) -> String {
    format!("{} {} - {}", record.date, record.time, record.message)
}
