mod html_table;

pub use html_table::HtmlTableRenderer;
