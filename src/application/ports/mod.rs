mod row_processor;

pub use row_processor::{RowProcessor, RowProcessorFault};
