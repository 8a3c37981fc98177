use crate::core::Participant;
use crate::ranking::CategoryRanking;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Sink for board and roster output.
pub trait OutputWriter {
    fn write_board(&mut self, board: &[CategoryRanking]) -> anyhow::Result<()>;
    fn write_roster(&mut self, roster: &[Participant]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_board(&mut self, board: &[CategoryRanking]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(board)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_roster(&mut self, roster: &[Participant]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(roster)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn medal(position: usize) -> ColoredString {
        match position {
            1 => "1st".yellow().bold(),
            2 => "2nd".white().bold(),
            3 => "3rd".truecolor(205, 127, 50).bold(),
            _ => format!("{position}th").normal(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_board(&mut self, board: &[CategoryRanking]) -> anyhow::Result<()> {
        if board.is_empty() {
            writeln!(self.writer, "{}", "No rankable categories yet.".dimmed())?;
            return Ok(());
        }
        for ranking in board {
            writeln!(
                self.writer,
                "\n{} {}",
                ranking.category.name().cyan().bold(),
                format!("({} classified)", ranking.classified).dimmed()
            )?;

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["", "Name", "Entry", "Mean", "Median", "Std dev"]);
            for (i, entry) in ranking.entries.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(Self::medal(i + 1)),
                    Cell::new(&entry.participant.name),
                    Cell::new(&entry.participant.entry),
                    Cell::new(format!("{:.2}", entry.mean)),
                    Cell::new(format!("{:.2}", entry.median)),
                    Cell::new(format!("{:.2}", entry.stddev)),
                ]);
            }
            writeln!(self.writer, "{table}")?;
        }
        Ok(())
    }

    fn write_roster(&mut self, roster: &[Participant]) -> anyhow::Result<()> {
        if roster.is_empty() {
            writeln!(self.writer, "{}", "No participants registered.".dimmed())?;
            return Ok(());
        }
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Category", "Name", "Entry"]);
        for participant in roster {
            table.add_row(vec![
                Cell::new(&participant.category),
                Cell::new(&participant.name),
                Cell::new(&participant.entry),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

/// Build a writer for the requested format, targeting a file or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
