//! Loading specifications from disk

pub mod specification;

pub use specification::{
    find_specification, parse_specification, parse_specification_from_file,
    parse_specification_from_str,
};
