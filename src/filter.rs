use crate::model::Activation;
use crate::sota::SummitLookup;
use log::trace;

pub const DEFAULT_ASSOCS: [&str; 2] = ["W4V", "W7V"];

/// Association allow-list. Only summits in these associations are ever looked up.
#[derive(Clone, Debug)]
pub struct RestrictionFilter {
    pub assocs: Vec<String>,
}

impl Default for RestrictionFilter {
    fn default() -> Self {
        Self { assocs: DEFAULT_ASSOCS.iter().map(|a| a.to_string()).collect() }
    }
}

impl RestrictionFilter {
    pub fn new(assocs: Vec<String>) -> Self {
        Self { assocs }
    }

    pub fn checks(&self, assoc: &str) -> bool {
        self.assocs.iter().any(|a| a == assoc)
    }

    /// Allow-listed and restricted. Outside the allow-list no request is made.
    pub fn is_restricted<L: SummitLookup + ?Sized>(&self, lookup: &L, r: &Activation) -> bool {
        if !self.checks(&r.association) {
            trace!("{}/{}: association not checked", r.association, r.summit);
            return false;
        }
        lookup.has_restrictions(&r.association, &r.summit)
    }

    /// Stable: survivors keep their input order.
    pub fn restricted<'a, L: SummitLookup + ?Sized>(
        &self,
        lookup: &L,
        records: &'a [Activation],
    ) -> Vec<&'a Activation> {
        records.iter().filter(|r| self.is_restricted(lookup, r)).collect()
    }
}
