use zerospam_domain::BlockedRecord;

use crate::services::{escape_html, format_input_datetime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablenavPosition {
    Top,
    Bottom,
}

pub(super) fn ip_lookup_link(lookup_url: &str, ip: &str) -> String {
    format!(
        r#"<a href="{}{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(lookup_url),
        urlencoding::encode(ip),
        escape_html(ip)
    )
}

pub(super) fn update_block_button(record: &BlockedRecord) -> String {
    format!(
        r#"<button class="button zerospam-block-trigger" data-ip="{}" data-reason="{}" data-start="{}" data-end="{}" data-type="{}">Update Block</button>"#,
        escape_html(&record.user_ip),
        escape_html(record.reason.as_deref().unwrap_or_default()),
        format_input_datetime(record.start_block.as_deref()),
        format_input_datetime(record.end_block.as_deref()),
        escape_html(&record.blocked_type),
    )
}

pub(super) fn row_checkbox(record: &BlockedRecord) -> String {
    format!(
        r#"<input type="checkbox" name="ids[]" value="{}" />"#,
        record.blocked_id
    )
}

pub(super) fn add_blocked_ip_toolbar() -> String {
    concat!(
        r#"<div class="alignleft actions">"#,
        r#"<button class="button zerospam-block-trigger">Add Blocked IP Address</button>"#,
        "</div>"
    )
    .to_string()
}
