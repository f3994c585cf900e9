mod country_rule;
mod rule_table;
pub mod sources;

pub use country_rule::CountryRule;
pub use rule_table::RuleTable;
