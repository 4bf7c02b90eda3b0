//! Fixed worksheet layout shared by the upload scan, the worker and the
//! row processor. Column A holds the source address; B, C and D receive
//! the refined address, the status marker and the zip code.

pub const SOURCE_COL: u32 = 0;
pub const ADDRESS_COL: u32 = 1;
pub const STATUS_COL: u32 = 2;
pub const ZIP_COL: u32 = 3;

/// First data row; row 0 is the header.
pub const FIRST_DATA_ROW: u32 = 1;
