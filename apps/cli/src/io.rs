//! Console implementation of the confirmation/progress IO surface.

use std::io::{BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};
use roster_core::ConfirmationIo;
use roster_render::{REPOSITORY_TABLE_HEADERS, repository_table_rows};
use roster_shared::{Repository, Result, RosterError};

/// Interactive console IO: a spinner for stage narration and a blocking
/// stdin prompt for selection confirmation.
pub struct ConsoleIo {
    spinner: ProgressBar,
}

impl ConsoleIo {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    /// Stop the spinner once the run is over.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn print_selection(&self, candidates: &[Repository]) {
        if candidates.is_empty() {
            println!("No repositories matched the selection criteria.");
            return;
        }

        let rows = repository_table_rows(candidates);

        // Column widths sized to the longest cell, header included.
        let mut widths: Vec<usize> = REPOSITORY_TABLE_HEADERS
            .iter()
            .map(|h| h.len())
            .collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let print_row = |cells: &[String]| {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{c:<w$}", w = widths[i]))
                .collect();
            println!("  {}", line.join("  "));
        };

        print_row(
            &REPOSITORY_TABLE_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>(),
        );
        for row in &rows {
            print_row(row);
        }
        println!();
    }
}

impl ConfirmationIo for ConsoleIo {
    fn confirm_selection(
        &self,
        candidates: &[Repository],
        operation_description: &str,
        auto_accept: bool,
    ) -> Result<bool> {
        self.spinner.suspend(|| {
            println!();
            self.print_selection(candidates);

            if auto_accept {
                println!("Proceeding without confirmation ({operation_description}).");
                return Ok(true);
            }

            print!("Proceed with \"{operation_description}\" for {} repositories? [y/N]: ",
                candidates.len());
            std::io::stdout()
                .flush()
                .map_err(|e| RosterError::io("stdout", e))?;

            let mut answer = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut answer)
                .map_err(|e| RosterError::io("stdin", e))?;

            let answer = answer.trim().to_ascii_lowercase();
            Ok(answer == "y" || answer == "yes")
        })
    }

    fn title(&self, text: &str) {
        self.spinner.suspend(|| {
            println!("{text}");
            println!("{}", "=".repeat(text.len()));
        });
    }

    fn section(&self, text: &str) {
        self.spinner.set_message(text.to_string());
    }
}
