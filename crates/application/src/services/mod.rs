pub mod cell_format;
pub mod query_args;

pub use cell_format::{escape_html, format_display_date, format_input_datetime, parse_timestamp};
pub use query_args::add_query_args;
