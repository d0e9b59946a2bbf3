pub mod calc;
pub mod dashboard;
pub mod market;
pub mod vaults;
