//! Forbidden-domain set.
//!
//! [`DomainChecker`] keeps the forbidden domains sorted by encoded form and
//! reduced to the most general entries, so a query needs a single binary
//! search and one prefix comparison.
//!
//! ```
//! use domain_checker::{Domain, DomainChecker};
//!
//! let checker: DomainChecker = ["gdz.ru", "gdz.com"]
//!     .iter()
//!     .map(|name| Domain::new(name).unwrap())
//!     .collect();
//!
//! assert!(checker.is_forbidden(&Domain::new("new.gdz.com").unwrap()));
//! assert!(!checker.is_forbidden(&Domain::new("gdz.pointers.ru").unwrap()));
//! ```

use tracing::{debug, trace};

use crate::domain::Domain;

/// Immutable set of forbidden domains with subdomain-inclusive lookup
#[derive(Debug, Clone, Default)]
pub struct DomainChecker {
    /// Sorted, and no entry is a subdomain of another
    domains: Vec<Domain>,
}

impl DomainChecker {
    /// Build a checker from any collection of forbidden domains.
    ///
    /// Duplicates and domains already covered by a more general entry are
    /// dropped. Sorting places every domain directly before its subdomains,
    /// so comparing each entry with the last kept one is enough.
    pub fn new(domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut domains: Vec<Domain> = domains.into_iter().collect();
        let input_len = domains.len();

        domains.sort_unstable();
        domains.dedup_by(|current, kept| current.is_subdomain_of(kept));

        debug!(
            input = input_len,
            kept = domains.len(),
            "built forbidden domain set"
        );

        Self { domains }
    }

    /// Check if `domain` equals or lies below any forbidden domain.
    ///
    /// The only possible ancestor is the last entry not greater than
    /// `domain`; anything sorting between an ancestor and `domain` would
    /// itself be a subdomain of that ancestor and was removed on build.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        let upper = self.domains.partition_point(|entry| entry <= domain);
        let forbidden = upper
            .checked_sub(1)
            .map(|idx| domain.is_subdomain_of(&self.domains[idx]))
            .unwrap_or(false);

        trace!(domain = %domain, forbidden, "checked domain");
        forbidden
    }

    /// The reduced forbidden domains in sorted order
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of domains kept after reduction
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}
