use std::io::{BufRead, Write};

use tracing::info;

use crate::checker::DomainChecker;
use crate::domain::Domain;
use crate::error::Result;
use crate::input::{read_request, InputOptions, Request};

/// Output line for a forbidden domain
pub const BAD: &str = "Bad";
/// Output line for an allowed domain
pub const GOOD: &str = "Good";

/// Verdict text for a single query
pub fn verdict(checker: &DomainChecker, domain: &Domain) -> &'static str {
    if checker.is_forbidden(domain) {
        BAD
    } else {
        GOOD
    }
}

/// Check every query of `request`, writing one verdict line each in query order.
pub fn check_request<W: Write>(request: Request, output: &mut W) -> Result<()> {
    let checker = DomainChecker::new(request.forbidden);

    let mut bad = 0usize;
    for query in &request.queries {
        let line = verdict(&checker, query);
        if line == BAD {
            bad += 1;
        }
        writeln!(output, "{}", line)?;
    }
    output.flush()?;

    info!(
        forbidden = checker.len(),
        queries = request.queries.len(),
        bad,
        "checked domains"
    );
    Ok(())
}

/// Read a full request from `input` and write verdicts to `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, options: &InputOptions) -> Result<()> {
    let request = read_request(input, options)?;
    check_request(request, output)
}
