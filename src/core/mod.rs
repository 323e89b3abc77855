pub mod directory;
pub mod ledger;
pub mod payperiod;
pub mod session;
pub mod summary;
