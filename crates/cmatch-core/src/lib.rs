pub mod hash;
pub mod locate;
pub mod transform;
pub mod translate;
pub mod validate;

pub use hash::{hash_cell, hash_table, sha256_hex};
pub use locate::{LocationColumns, ZipScan, find_location_columns, resolve_zip, resolve_zips};
pub use transform::project;
pub use translate::{DuplicateHeader, Translation, normalize_header, resolve_header, translate_headers};
pub use validate::{SchemaCheck, check_schema, format_error};
