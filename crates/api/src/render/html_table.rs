use std::fmt::Write;
use zerospam_application::ports::{SortableColumn, TableRenderer, TableView};
use zerospam_application::services::{add_query_args, escape_html};
use zerospam_domain::SortOrder;

/// Plain HTML admin chrome for a [`TableView`]: one form holding the bulk
/// action selectors, search box, sortable headers, rows and page links.
#[derive(Debug, Default, Clone)]
pub struct HtmlTableRenderer;

impl HtmlTableRenderer {
    pub fn new() -> Self {
        Self
    }

    fn bulk_actions(view: &TableView, field: &str) -> String {
        let mut html = format!(
            r#"<div class="alignleft actions bulkactions"><select name="{0}" id="bulk-{0}"><option value="-1">Bulk actions</option>"#,
            field
        );
        for action in &view.bulk_actions {
            let _ = write!(
                html,
                r#"<option value="{}">{}</option>"#,
                escape_html(action.key),
                escape_html(action.label)
            );
        }
        html.push_str(r#"</select><input type="submit" class="button action" value="Apply" /></div>"#);
        html
    }

    fn search_box(view: &TableView) -> String {
        format!(
            r#"<p class="search-box"><label class="screen-reader-text" for="blocked-search">Search IP</label><input type="search" id="blocked-search" name="s" value="{}" /><input type="submit" class="button" value="Search IP" /></p>"#,
            escape_html(view.search.as_deref().unwrap_or_default())
        )
    }

    fn header_cell(view: &TableView, key: &str, label: &str) -> String {
        if key == "cb" {
            return format!(
                r#"<td class="manage-column column-cb check-column">{}</td>"#,
                label
            );
        }

        match view.sortable.iter().find(|s| s.key == key) {
            Some(sortable) => {
                let (state, next) = Self::sort_state(view, sortable);
                let href = add_query_args(
                    &view.request_uri,
                    &[("orderby", sortable.orderby), ("order", next.as_str())],
                );
                format!(
                    r#"<th scope="col" class="manage-column column-{} {}"><a href="{}"><span>{}</span></a></th>"#,
                    key,
                    state,
                    escape_html(&href),
                    escape_html(label)
                )
            }
            None => format!(
                r#"<th scope="col" class="manage-column column-{}">{}</th>"#,
                key,
                escape_html(label)
            ),
        }
    }

    /// CSS state for a sortable header and the order its link switches to.
    fn sort_state(view: &TableView, sortable: &SortableColumn) -> (String, SortOrder) {
        if view.orderby == sortable.orderby {
            let next = match view.order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
            (format!("sorted {}", view.order), next)
        } else {
            let first = if sortable.initially_desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            let shown = match first {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
            (format!("sortable {}", shown), first)
        }
    }

    fn pagination(view: &TableView) -> String {
        let Some(pagination) = &view.pagination else {
            return String::new();
        };

        let noun = if pagination.total_items == 1 { "item" } else { "items" };
        let mut html = format!(
            r#"<div class="tablenav-pages"><span class="displaying-num">{} {}</span>"#,
            pagination.total_items, noun
        );

        if pagination.total_pages > 1 {
            let current = u64::from(view.current_page).min(pagination.total_pages);
            let link = |page: u64, text: &str, class: &str| {
                let href =
                    add_query_args(&view.request_uri, &[("paged", page.to_string().as_str())]);
                format!(
                    r#"<a class="{}" href="{}">{}</a>"#,
                    class,
                    escape_html(&href),
                    text
                )
            };

            html.push_str(r#"<span class="pagination-links">"#);
            if current > 1 {
                html.push_str(&link(1, "&laquo;", "first-page button"));
                html.push_str(&link(current - 1, "&lsaquo;", "prev-page button"));
            }
            let _ = write!(
                html,
                r#"<span class="paging-input">{} of <span class="total-pages">{}</span></span>"#,
                current, pagination.total_pages
            );
            if current < pagination.total_pages {
                html.push_str(&link(current + 1, "&rsaquo;", "next-page button"));
                html.push_str(&link(pagination.total_pages, "&raquo;", "last-page button"));
            }
            html.push_str("</span>");
        }

        html.push_str("</div>");
        html
    }

    fn body(view: &TableView) -> String {
        let visible: Vec<_> = view
            .columns
            .iter()
            .filter(|c| !view.hidden.contains(&c.key))
            .collect();

        if view.rows.is_empty() {
            return format!(
                r#"<tr class="no-items"><td class="colspanchange" colspan="{}">No items found.</td></tr>"#,
                visible.len()
            );
        }

        let mut html = String::new();
        for row in &view.rows {
            let _ = write!(html, r#"<tr id="blocked-{}">"#, row.id);
            for column in &visible {
                let cell = row.cell(column.key).unwrap_or_default();
                if column.key == "cb" {
                    let _ = write!(html, r#"<th scope="row" class="check-column">{}</th>"#, cell);
                } else {
                    let _ = write!(
                        html,
                        r#"<td class="{0} column-{0}" data-colname="{1}">{2}</td>"#,
                        column.key,
                        escape_html(column.label),
                        cell
                    );
                }
            }
            html.push_str("</tr>");
        }
        html
    }
}

impl TableRenderer for HtmlTableRenderer {
    fn render(&self, view: &TableView) -> String {
        let header_row: String = view
            .columns
            .iter()
            .filter(|c| !view.hidden.contains(&c.key))
            .map(|c| Self::header_cell(view, c.key, c.label))
            .collect();

        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="wrap"><h1 class="wp-heading-inline">{}</h1>"#,
            escape_html(view.plural)
        );
        let _ = write!(
            html,
            r#"<form method="post" action="{}">"#,
            escape_html(&view.request_uri)
        );
        if let Some(nonce) = &view.nonce {
            let _ = write!(
                html,
                r#"<input type="hidden" name="zerospam_nonce" value="{}" />"#,
                escape_html(nonce)
            );
        }
        html.push_str(&Self::search_box(view));

        html.push_str(r#"<div class="tablenav top">"#);
        html.push_str(&Self::bulk_actions(view, "action"));
        html.push_str(&view.top_nav);
        html.push_str(&Self::pagination(view));
        html.push_str("</div>");

        let _ = write!(
            html,
            r#"<table class="wp-list-table widefat fixed striped table-view-list"><thead><tr>{0}</tr></thead><tbody>{1}</tbody><tfoot><tr>{0}</tr></tfoot></table>"#,
            header_row,
            Self::body(view)
        );

        html.push_str(r#"<div class="tablenav bottom">"#);
        html.push_str(&Self::bulk_actions(view, "action2"));
        html.push_str(&view.bottom_nav);
        html.push_str(&Self::pagination(view));
        html.push_str("</div></form></div>");
        html
    }
}
