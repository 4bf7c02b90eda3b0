pub mod juso;
pub mod observability;
pub mod spreadsheet;
