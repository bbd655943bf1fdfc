//! Plain-text console rendering of pagination progress

use crate::Result;
use crate::api::models::UserRecord;
use crate::core::paginator::{RunSummary, Termination};
use crate::core::traits::PaginationReporter;
use crate::map_display_error;
use std::io::Write;

const PAGE_SEPARATOR: &str = "-------------------------";

/// Writes the user listing to `out` and failure notices to `err`
pub struct ConsoleReporter<W: Write, E: Write> {
    out: W,
    err: E,
    debug: bool,
}

impl<W: Write, E: Write> ConsoleReporter<W, E> {
    pub fn new(out: W, err: E, debug: bool) -> Self {
        Self { out, err, debug }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn line(&mut self, text: &str) -> Result<()> {
        map_display_error!(writeln!(self.out, "{}", text), "write stdout")?;
        Ok(())
    }

    fn err_line(&mut self, text: &str) -> Result<()> {
        map_display_error!(writeln!(self.err, "{}", text), "write stderr")?;
        Ok(())
    }

    /// Print one page of users: header, names (plus dumps in debug mode), separator
    pub fn print_page(&mut self, page: u32, users: &[UserRecord]) -> Result<()> {
        self.line(&format!("\n--- Users on Page {} ---", page))?;
        for user in users {
            self.line(&format!("Name: {}", user.full_name()))?;
            if self.debug {
                self.line(&format!("  Debug Info: {}", user.debug_dump()))?;
            }
        }
        self.line(PAGE_SEPARATOR)?;
        map_display_error!(self.out.flush(), "flush stdout")?;
        Ok(())
    }

    /// Run banner: where the users come from and whether dumps are on
    pub fn print_run_settings(&mut self, base_url: &str, debug: bool) -> Result<()> {
        self.line(&format!("Using API Base URL: {}", base_url))?;
        self.line(&format!("Debugging Enabled: {}", debug))
    }

    pub fn print_empty_page(&mut self, page: u32) -> Result<()> {
        self.line(&format!("\nNo users found on page {}.", page))
    }

    pub fn print_settings(&mut self, settings: &[(&'static str, String)]) -> Result<()> {
        for (key, value) in settings {
            self.line(&format!("{} = {}", key, value))?;
        }
        Ok(())
    }
}

impl<W: Write, E: Write> PaginationReporter for ConsoleReporter<W, E> {
    fn run_started(&mut self) -> Result<()> {
        self.line("\n--- Fetching All Users Across Pages ---")
    }

    fn page_fetched(&mut self, page: u32, users: &[UserRecord]) -> Result<()> {
        self.print_page(page, users)
    }

    fn run_finished(&mut self, summary: &RunSummary) -> Result<()> {
        match &summary.termination {
            Termination::Exhausted { page } => {
                self.line(&format!(
                    "\nNo more users found on page {}. Stopping pagination.",
                    page
                ))?;
            }
            Termination::Failed { page, error } => {
                self.err_line(&format!(
                    "\nError detected during fetch on page {}: {}",
                    page,
                    error.reason()
                ))?;
            }
            Termination::PageLimitReached { limit } => {
                self.line(&format!(
                    "\nReached the page limit of {}. Stopping pagination.",
                    limit
                ))?;
            }
        }

        self.line("\n--- Finished Fetching All Pages ---")?;
        match &summary.termination {
            Termination::Exhausted { .. } => {
                self.line("All available pages fetched successfully.")?
            }
            Termination::Failed { .. } => self.err_line("Pagination terminated due to an error.")?,
            Termination::PageLimitReached { .. } => {
                self.line("Pagination stopped at the page limit; more pages may exist.")?
            }
        }
        map_display_error!(self.out.flush(), "flush stdout")?;
        Ok(())
    }
}
