//! `mono-output` — result writers for rust_mono.
//!
//! | Writer         | Output                                                  |
//! |----------------|---------------------------------------------------------|
//! | [`TextWriter`] | banner, `LANDS` + 40 counters, `ENDS` + 40 counters     |
//! | [`CsvWriter`]  | `tally.csv`: one row per space with counts and shares   |
//!
//! Both implement [`TallyWriter`] and only ever see a finished
//! `mono_sim::Tally`: nothing here runs while games are being simulated.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mono_output::{TallyWriter, TextWriter};
//!
//! let tally = runner.run(&mut NoopObserver)?;
//! let mut out = TextWriter::new(std::io::stdout().lock());
//! out.write_tally(runner.config(), &tally)?;
//! out.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::TallyRow;
pub use text::TextWriter;
pub use writer::TallyWriter;
