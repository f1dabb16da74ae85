//! Report rendering.
//!
//! Turns [`ScheduleResult`]s into text (title banner, Gantt chart and a
//! bordered metrics table) or JSON.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::models::{ScheduleResult, ScheduleRow, Timeline};

/// Width of one Gantt chart column.
const GANTT_CELL_WIDTH: usize = 8;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON array of results.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders every result in the given format.
pub fn render<W: Write>(
    w: &mut W,
    results: &[ScheduleResult],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(w)?;
                }
                render_text(w, result)?;
            }
            Ok(())
        }
        OutputFormat::Json => render_json(w, results),
    }
}

/// Renders one result as text: title, Gantt chart, schedule table.
pub fn render_text<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    write_title(w, &result.title)?;
    write_gantt(w, &result.timeline)?;
    write_schedule(w, result)
}

/// Renders results as a pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, results: &[ScheduleResult]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, results)?;
    writeln!(w)
}

fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {}", " ".repeat(title.len() / 2), title)?;
    writeln!(w, "{rule}")
}

/// Writes the PID row and the start-time row.
///
/// Idle periods get their own `-` column so the start times stay aligned
/// with the CPU's actual occupancy.
fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    let mut columns: Vec<(String, u64)> = Vec::with_capacity(timeline.len());
    let mut previous_stop = 0;
    for slice in timeline {
        if slice.start > previous_stop {
            columns.push(("-".to_string(), previous_stop));
        }
        columns.push((slice.pid.to_string(), slice.start));
        previous_stop = slice.stop;
    }

    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for (label, _) in &columns {
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(label.len()) / 2);
        write!(w, "{padding}{label}{padding}|")?;
    }
    writeln!(w)?;

    for (_, start) in &columns {
        write!(w, "{start}\t")?;
    }
    if let Some(end) = timeline.end() {
        write!(w, "{end}")?;
    }
    write!(w, "\n\n")
}

fn write_schedule<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    let metrics = &result.metrics;
    let table = TextTable {
        headers: ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: result.rows.iter().map(row_cells).collect(),
        footer: vec![
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format!("Average\n{:.2}", metrics.average_wait),
            format!("Average\n{:.2}", metrics.average_turnaround),
            format!("Throughput\n{:.2}/t", metrics.throughput),
        ],
    };

    writeln!(w, "Schedule table")?;
    table.render(w)
}

fn row_cells(row: &ScheduleRow) -> Vec<String> {
    vec![
        row.pid.to_string(),
        row.priority.map_or_else(|| "-".to_string(), |p| p.to_string()),
        row.burst.to_string(),
        row.arrival.to_string(),
        row.wait.to_string(),
        row.turnaround.to_string(),
        row.exit.to_string(),
    ]
}

/// Minimal bordered table: centred header, right-aligned body, centred
/// multi-line footer.
struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Vec<String>,
}

impl TextTable {
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        let footer_rows = self.footer.iter().map(|cell| cell.lines().collect::<Vec<_>>());
        for (i, lines) in footer_rows.enumerate() {
            for line in lines {
                widen(&mut widths, i, line);
            }
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widen(&mut widths, i, cell);
            }
        }
        widths
    }

    fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let separator: String = widths
            .iter()
            .fold(String::from("+"), |acc, width| acc + &"-".repeat(width + 2) + "+");

        writeln!(w, "{separator}")?;
        write_line(w, &widths, &self.headers, Align::Center)?;
        writeln!(w, "{separator}")?;
        for row in &self.rows {
            write_line(w, &widths, row, Align::Right)?;
        }
        writeln!(w, "{separator}")?;

        let footer: Vec<Vec<&str>> = self.footer.iter().map(|c| c.lines().collect()).collect();
        let height = footer.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let cells: Vec<&str> = footer
                .iter()
                .map(|lines| lines.get(line).copied().unwrap_or(""))
                .collect();
            write_line(w, &widths, &cells, Align::Center)?;
        }
        if height > 0 {
            writeln!(w, "{separator}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Align {
    Center,
    Right,
}

fn widen(widths: &mut Vec<usize>, column: usize, cell: &str) {
    let len = cell.chars().count();
    match widths.get_mut(column) {
        Some(width) => *width = (*width).max(len),
        None => widths.push(len),
    }
}

fn write_line<W: Write, S: AsRef<str>>(
    w: &mut W,
    widths: &[usize],
    cells: &[S],
    align: Align,
) -> io::Result<()> {
    write!(w, "|")?;
    for (i, &width) in widths.iter().enumerate() {
        let cell: &str = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
        match align {
            Align::Center => write!(w, " {cell:^width$} |")?,
            Align::Right => write!(w, " {cell:>width$} |")?,
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{FirstComeFirstServed, RoundRobin, Scheduler, ShortestJobFirst};
    use pretty_assertions::assert_eq;

    fn render_to_string(result: &ScheduleResult) -> String {
        let mut out = Vec::new();
        render_text(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fcfs_report() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();

        let expected = "\
----------------------------------------------
            First-come, first-serve
----------------------------------------------
Gantt schedule
|   1   |   2   |
0\t5\t8

Schedule table
+----+----------+-------+---------+---------+------------+------------+
| ID | Priority | Burst | Arrival |  Wait   | Turnaround |    Exit    |
+----+----------+-------+---------+---------+------------+------------+
|  1 |        - |     5 |       0 |       0 |          5 |          5 |
|  2 |        - |     3 |       1 |       4 |          7 |          8 |
+----+----------+-------+---------+---------+------------+------------+
|    |          |       |         | Average |  Average   | Throughput |
|    |          |       |         |  2.00   |    6.00    |   0.25/t   |
+----+----------+-------+---------+---------+------------+------------+
";
        assert_eq!(render_to_string(&result), expected);
    }

    #[test]
    fn test_gantt_shows_idle_gap() {
        let processes = vec![Process::new(1, 2, 1), Process::new(2, 5, 2)];
        let result = ShortestJobFirst::new().schedule(&processes).unwrap();

        let mut out = Vec::new();
        write_gantt(&mut out, &result.timeline).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Gantt schedule\n|   -   |   1   |   -   |   2   |\n0\t2\t3\t5\t7\n\n"
        );
    }

    #[test]
    fn test_priority_column() {
        let processes = vec![Process::new(1, 0, 2).with_priority(9)];
        let result = FirstComeFirstServed.schedule(&processes).unwrap();
        let text = render_to_string(&result);
        assert!(text.contains("|  1 |        9 |     2 |"));
    }

    #[test]
    fn test_render_multiple_separated() {
        let processes = vec![Process::new(1, 0, 2)];
        let results = vec![
            FirstComeFirstServed.schedule(&processes).unwrap(),
            RoundRobin::new().schedule(&processes).unwrap(),
        ];
        let mut out = Vec::new();
        render(&mut out, &results, OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("First-come, first-serve"));
        assert!(text.contains("Round-robin"));
        assert!(text.contains("+\n\n----"));
    }

    #[test]
    fn test_json_output() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 2)];
        let results = vec![RoundRobin::new().schedule(&processes).unwrap()];

        let mut out = Vec::new();
        render(&mut out, &results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value[0]["algorithm"], "round_robin");
        assert_eq!(value[0]["title"], "Round-robin");
        assert_eq!(value[0]["rows"][1]["exit"], 4);
        assert_eq!(value[0]["timeline"][4]["start"], 4);
        assert_eq!(value[0]["timeline"][4]["stop"], 6);
        assert_eq!(value[0]["metrics"]["makespan"], 6);
    }

    #[test]
    fn test_json_round_trip() {
        let processes = vec![Process::new(1, 0, 3).with_priority(1)];
        let results = vec![ShortestJobFirst::new().schedule(&processes).unwrap()];

        let mut out = Vec::new();
        render_json(&mut out, &results).unwrap();
        let parsed: Vec<ScheduleResult> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0].algorithm, results[0].algorithm);
        assert_eq!(parsed[0].rows, results[0].rows);
        assert_eq!(parsed[0].timeline, results[0].timeline);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "text");
    }
}
