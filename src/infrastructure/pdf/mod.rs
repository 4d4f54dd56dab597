//! PDF reading backed by `lopdf`.

pub mod lopdf_reader;

pub use lopdf_reader::LopdfLinkReader;
