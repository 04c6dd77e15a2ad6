//! Domain Checker - forbidden-domain lookup with subdomain-inclusive matching
//!
//! A domain is forbidden when it equals a forbidden domain or is any
//! subdomain of one: with `gdz.com` forbidden, `new.gdz.com` and
//! `a.b.gdz.com` are forbidden too, while `gdz.com.ru` is not.
//!
//! Domains are stored reversed (`"mail.ru"` becomes `"ur.liam."`), which
//! turns "is subdomain of" into a string-prefix test. The checker keeps the
//! forbidden domains sorted in that form and drops entries covered by a more
//! general one, so each query is one binary search.
//!
//! # Example
//!
//! ```rust
//! use domain_checker::{Domain, DomainChecker};
//!
//! let forbidden = ["gdz.ru", "gdz.com", "gdz.ru"]
//!     .iter()
//!     .map(|name| Domain::new(name))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let checker = DomainChecker::new(forbidden);
//!
//! assert!(checker.is_forbidden(&Domain::new("gdz.ru").unwrap()));
//! assert!(checker.is_forbidden(&Domain::new("new.gdz.com").unwrap()));
//! assert!(!checker.is_forbidden(&Domain::new("gdz.pointers.ru").unwrap()));
//! ```
//!
//! # Input Format
//!
//! ```text
//! N
//! <N forbidden domains, one per line>
//! M
//! <M domains to check, one per line>
//! ```
//!
//! [`run`] prints `Bad` or `Good` for each of the M domains, in order.
//!
//! ## Validation
//!
//! | Mode | Behavior |
//! |------|----------|
//! | `Strict` (default) | Rejects empty names, empty labels (`.com`, `com.`, `a..b`) and whitespace |
//! | `Lenient` | Encodes any text unchanged |

pub mod checker;
pub mod domain;
pub mod error;
pub mod input;
pub mod run;

// Re-export commonly used items
pub use checker::DomainChecker;
pub use domain::{Domain, Validation};
pub use error::{CheckerError, Result};
pub use input::{
    parse_request, read_request, read_request_from_file, DomainReader, InputOptions, Request,
};
pub use run::{check_request, run, verdict, BAD, GOOD};
