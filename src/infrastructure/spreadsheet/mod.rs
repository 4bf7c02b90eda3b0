mod csv_document;

pub use csv_document::CsvDocument;
