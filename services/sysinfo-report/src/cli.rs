//! Console entry point logic

use std::io::{self, Write};

use crate::collector::{Collector, FactsProvider};
use crate::hello_world;
use crate::report::build_report;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Print the greeting, then the report, returning the process exit status
///
/// The greeting is written and flushed before any fact is queried. On
/// failure nothing further goes to `out`; the cause goes to `err`.
pub async fn run<P, O, E>(collector: &Collector<P>, out: &mut O, err: &mut E) -> io::Result<u8>
where
    P: FactsProvider,
    O: Write,
    E: Write,
{
    writeln!(out, "{}", hello_world())?;
    out.flush()?;

    match build_report(collector).await {
        Ok(report) => {
            writeln!(out, "{}", report)?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            writeln!(err, "Error retrieving system information: {}", e)?;
            Ok(EXIT_FAILURE)
        }
    }
}
