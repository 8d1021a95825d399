//! Route extraction from page file paths.
//!
//! A page file path goes through three steps:
//!
//! 1. the first occurrence of the pages directory name and the file
//!    extension are removed ([`PageFile`]);
//! 2. bracketed dynamic segments are collected into the query map
//!    ([`Segment`]);
//! 3. a trailing `index` is stripped to form the pathname.
//!
//! Extraction is total: any input string yields either a route or is
//! filtered out as non-routable.

mod extract;
mod page_file;
mod segment;

pub use extract::extract_routes;
pub use page_file::PageFile;
pub use segment::{Segment, classify, find_segments};
