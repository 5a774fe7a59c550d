// ==========================================
// Course Planner - importer layer
// ==========================================
// External catalog data in. Output is a validated, immutable
// Catalog; nothing downstream re-checks what is enforced here.
// ==========================================

// Module declarations
pub mod catalog_importer;
pub mod error;
pub mod file_parser;

// Core re-exports
pub use catalog_importer::{columns, CatalogImporter};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
