use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use zerospam_domain::{
    offset_for_page, sanitize_text, BlockedRecord, DomainError, EmptyResultPolicy,
    PaginationArgs, QueryDescriptor, SortOrder, TableRequest, WhereCondition, PER_PAGE,
};

use super::columns::{ColumnHeaders, BULK_ACTIONS, COLUMNS, SORTABLE_COLUMNS};
use super::markup::{
    add_blocked_ip_toolbar, ip_lookup_link, row_checkbox, update_block_button, TablenavPosition,
};
use crate::ports::{
    BulkAction, Column, NonceVerifier, RenderedCell, RenderedRow, RowStore, SortableColumn,
    TableView,
};
use crate::services::{add_query_args, escape_html, format_display_date, parse_timestamp};

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_ORDERBY: &str = "date_added";

#[derive(Debug, Clone)]
pub struct TableSettings {
    pub ip_lookup_url: String,
    pub empty_result: EmptyResultPolicy,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            ip_lookup_url: "https://www.zerospam.org/ip-lookup/".to_string(),
            empty_result: EmptyResultPolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkActionOutcome {
    /// No bulk action selected, or one that does nothing.
    None,
    /// Nonce missing or invalid; nothing was touched.
    Rejected,
    Deleted { requested: usize, deleted: usize },
}

/// Result of a successful preparation.
#[derive(Debug, Clone)]
pub struct TablePage {
    pub items: Vec<BlockedRecord>,
    pub pagination: PaginationArgs,
    pub column_headers: ColumnHeaders,
    pub current_page: u32,
    /// Request URI carrying the active `type` / `s` filters.
    pub request_uri: String,
}

/// The blocked-IP admin list: builds queries from request parameters,
/// formats rows for display and runs the bulk delete.
pub struct BlockedTable {
    store: Arc<dyn RowStore>,
    nonces: Arc<dyn NonceVerifier>,
    settings: TableSettings,
}

impl BlockedTable {
    pub const TABLE: &'static str = "blocked";
    pub const ID_FIELD: &'static str = "blocked_id";
    pub const NONCE_ACTION: &'static str = "zerospam_nonce";
    pub const SINGULAR: &'static str = "WordPress Zero Spam Blocked IP";
    pub const PLURAL: &'static str = "WordPress Zero Spam Blocked IPs";

    pub fn new(
        store: Arc<dyn RowStore>,
        nonces: Arc<dyn NonceVerifier>,
        settings: TableSettings,
    ) -> Self {
        Self {
            store,
            nonces,
            settings,
        }
    }

    /// Runs any pending bulk action, then loads the requested page.
    ///
    /// `Ok(None)` means nothing was prepared: the page query matched no rows
    /// and the table is configured with [`EmptyResultPolicy::Skip`].
    #[instrument(skip(self, request), fields(page = request.page_number()))]
    pub async fn prepare_items(
        &self,
        request: &TableRequest,
    ) -> Result<Option<TablePage>, DomainError> {
        let outcome = self.process_bulk_action(request).await;
        debug!(?outcome, "Bulk action processed");

        let current_page = request.page_number();
        let descriptor = Self::build_query(request);

        let items = self.store.query(Self::TABLE, &descriptor).await?;
        if items.is_empty() && self.settings.empty_result == EmptyResultPolicy::Skip {
            debug!("Page query returned no rows, skipping pagination");
            return Ok(None);
        }

        let total_items = self
            .store
            .query(Self::TABLE, &descriptor.without_paging())
            .await?
            .len() as u64;

        let pagination =
            PaginationArgs::new(total_items, PER_PAGE, descriptor.orderby.clone(), descriptor.order);

        let request_uri = Self::canonical_request_uri(&request.request_uri, &descriptor);

        debug!(
            count = items.len(),
            total_items,
            total_pages = pagination.total_pages,
            "Blocked IPs retrieved successfully"
        );

        Ok(Some(TablePage {
            items,
            pagination,
            column_headers: Self::column_headers(),
            current_page,
            request_uri,
        }))
    }

    /// Page query for a request: 50 rows, newest first unless told otherwise,
    /// limited to IP-keyed records and narrowed by `type` and `s`.
    pub fn build_query(request: &TableRequest) -> QueryDescriptor {
        let order = request
            .order()
            .map(|o| SortOrder::parse_lenient(&o))
            .unwrap_or(SortOrder::Desc);
        let orderby = request
            .orderby()
            .unwrap_or_else(|| DEFAULT_ORDERBY.to_string());
        let offset = offset_for_page(request.page_number(), PER_PAGE);

        let mut descriptor = QueryDescriptor::new(order, orderby)
            .paged(PER_PAGE, offset)
            .with_condition(WhereCondition::exact("key_type", "ip"));

        if let Some(blocked_type) = request.blocked_type_filter() {
            descriptor.push_condition(WhereCondition::exact("blocked_type", blocked_type));
        }

        if let Some(ip) = request.ip_filter() {
            descriptor.push_condition(WhereCondition::contains("user_ip", ip));
        }

        descriptor
    }

    fn canonical_request_uri(request_uri: &str, descriptor: &QueryDescriptor) -> String {
        let paging_options: Vec<(&str, &str)> = descriptor
            .conditions
            .iter()
            .filter_map(|c| match c.field.as_str() {
                "blocked_type" => Some(("type", c.value.as_str())),
                "user_ip" => Some(("s", c.value.as_str())),
                _ => None,
            })
            .collect();

        add_query_args(request_uri, &paging_options)
    }

    pub fn column_default(&self, record: &BlockedRecord, column: &str) -> String {
        match column {
            "user_ip" => ip_lookup_link(&self.settings.ip_lookup_url, &record.user_ip),
            "date_added" | "start_block" | "end_block" => {
                if column == "end_block" && record.is_permanent() {
                    return NOT_AVAILABLE.to_string();
                }
                record
                    .field(column)
                    .as_deref()
                    .and_then(parse_timestamp)
                    .map(|dt| format_display_date(&dt))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
            }
            "actions" => update_block_button(record),
            other => match record.field(other) {
                Some(value) if !value.is_empty() => escape_html(&value),
                _ => NOT_AVAILABLE.to_string(),
            },
        }
    }

    pub fn column_cb(&self, record: &BlockedRecord) -> String {
        row_checkbox(record)
    }

    pub fn get_columns() -> Vec<Column> {
        COLUMNS.to_vec()
    }

    pub fn get_sortable_columns() -> Vec<SortableColumn> {
        SORTABLE_COLUMNS.to_vec()
    }

    pub fn get_hidden_columns() -> Vec<&'static str> {
        Vec::new()
    }

    pub fn get_bulk_actions() -> Vec<BulkAction> {
        BULK_ACTIONS.to_vec()
    }

    pub fn column_headers() -> ColumnHeaders {
        ColumnHeaders {
            columns: Self::get_columns(),
            hidden: Self::get_hidden_columns(),
            sortable: Self::get_sortable_columns(),
        }
    }

    /// Deletes the selected rows one by one when the action is `delete` and
    /// the nonce checks out. A failed delete is logged and the rest still run.
    #[instrument(skip(self, request), fields(ids = request.ids.len()))]
    pub async fn process_bulk_action(&self, request: &TableRequest) -> BulkActionOutcome {
        let Some(action) = request.current_action() else {
            return BulkActionOutcome::None;
        };

        match action.as_str() {
            "delete" => {
                if !self.nonces.verify(&request.nonce(), Self::NONCE_ACTION) {
                    debug!("Bulk delete ignored: nonce verification failed");
                    return BulkActionOutcome::Rejected;
                }

                let mut deleted = 0;
                for raw in &request.ids {
                    let Some(id) = parse_id(raw) else {
                        warn!(id = %raw, "Skipping non-numeric blocked id");
                        continue;
                    };

                    match self.store.delete(Self::TABLE, Self::ID_FIELD, id).await {
                        Ok(()) => deleted += 1,
                        Err(e) => error!(blocked_id = id, error = %e, "Failed to delete blocked IP"),
                    }
                }

                info!(
                    requested = request.ids.len(),
                    deleted, "Bulk delete of blocked IPs finished"
                );

                BulkActionOutcome::Deleted {
                    requested: request.ids.len(),
                    deleted,
                }
            }
            // Deleting every row is not offered.
            "delete_all" => BulkActionOutcome::None,
            _ => BulkActionOutcome::None,
        }
    }

    pub fn extra_tablenav(&self, position: TablenavPosition) -> String {
        match position {
            TablenavPosition::Top => add_blocked_ip_toolbar(),
            TablenavPosition::Bottom => String::new(),
        }
    }

    fn render_row(&self, record: &BlockedRecord) -> RenderedRow {
        let cells = COLUMNS
            .iter()
            .map(|column| RenderedCell {
                column: column.key,
                html: match column.key {
                    "cb" => self.column_cb(record),
                    key => self.column_default(record, key),
                },
            })
            .collect();

        RenderedRow {
            id: record.blocked_id,
            cells,
        }
    }

    /// Data contract for the renderer. A missing page still yields the
    /// toolbar and headers, just without rows or pagination.
    pub fn build_view(&self, page: Option<&TablePage>, request: &TableRequest) -> TableView {
        let descriptor = Self::build_query(request);
        let headers = page
            .map(|p| p.column_headers.clone())
            .unwrap_or_else(Self::column_headers);

        TableView {
            singular: Self::SINGULAR,
            plural: Self::PLURAL,
            columns: headers.columns,
            sortable: headers.sortable,
            hidden: headers.hidden,
            rows: page
                .map(|p| p.items.iter().map(|r| self.render_row(r)).collect())
                .unwrap_or_default(),
            pagination: page.map(|p| p.pagination.clone()),
            current_page: page
                .map(|p| p.current_page)
                .unwrap_or_else(|| request.page_number()),
            bulk_actions: Self::get_bulk_actions(),
            top_nav: self.extra_tablenav(TablenavPosition::Top),
            bottom_nav: self.extra_tablenav(TablenavPosition::Bottom),
            orderby: descriptor.orderby,
            order: descriptor.order,
            search: request.ip_filter(),
            request_uri: page
                .map(|p| p.request_uri.clone())
                .unwrap_or_else(|| request.request_uri.clone()),
            nonce: None,
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    sanitize_text(raw).parse::<i64>().ok()
}
