//! Catalog loading

pub mod csv_parser;

pub use csv_parser::{
    parse_catalog_csv, parse_catalog_reader, parse_course_list, parse_credit_hours,
    CatalogLoadError,
};
