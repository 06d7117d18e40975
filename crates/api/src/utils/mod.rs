pub mod form;

pub use form::parse_pairs;
