use crate::{phonenormalizer::errors::SourceError, rule_table::RuleTable};

/// Anything able to materialize a codes table: an in-memory table, json text,
/// a local file or a remote document. Isolates the normalizer from the way
/// the table is obtained.
pub trait RuleTableProvider {
    /// Produces a validated, order preserving table or fails without side
    /// effects.
    fn provide(&self) -> Result<RuleTable, SourceError>;
}

impl RuleTableProvider for RuleTable {
    fn provide(&self) -> Result<RuleTable, SourceError> {
        Ok(self.clone())
    }
}
