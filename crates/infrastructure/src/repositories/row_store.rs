use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, error, instrument, warn};
use zerospam_application::ports::RowStore;
use zerospam_domain::{BlockedRecord, DomainError, Match, QueryDescriptor};

type BlockedRow = (
    i64,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

const SELECT_COLUMNS: &str =
    "blocked_id, user_ip, blocked_type, start_block, end_block, date_added, reason";

/// Tables this store will touch, with the columns allowed in filters,
/// sorting and deletes. Anything else never reaches SQL.
const TABLES: &[(&str, &[&str])] = &[(
    "blocked",
    &[
        "blocked_id",
        "key_type",
        "user_ip",
        "blocked_type",
        "start_block",
        "end_block",
        "date_added",
        "reason",
    ],
)];

const FALLBACK_ORDERBY: &str = "date_added";

pub struct SqliteRowStore {
    pool: SqlitePool,
}

impl SqliteRowStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn columns_of(table: &str) -> Result<&'static [&'static str], DomainError> {
        TABLES
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, columns)| *columns)
            .ok_or_else(|| DomainError::InvalidRequest(format!("Unknown table: {}", table)))
    }

    fn row_to_record(row: BlockedRow) -> BlockedRecord {
        let (blocked_id, user_ip, blocked_type, start_block, end_block, date_added, reason) = row;
        BlockedRecord {
            blocked_id,
            user_ip,
            blocked_type,
            start_block,
            end_block,
            date_added,
            reason,
        }
    }

    /// Builds the SELECT for a descriptor and the values to bind, in order.
    pub(crate) fn build_select(
        table: &str,
        descriptor: &QueryDescriptor,
    ) -> Result<(String, Vec<String>), DomainError> {
        let columns = Self::columns_of(table)?;
        let mut sql = format!("SELECT {} FROM {}", SELECT_COLUMNS, table);
        let mut binds = Vec::with_capacity(descriptor.conditions.len());

        for (i, condition) in descriptor.conditions.iter().enumerate() {
            if !columns.contains(&condition.field.as_str()) {
                return Err(DomainError::InvalidColumn(condition.field.clone()));
            }
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            match condition.matching {
                Match::Exact => {
                    sql.push_str(&format!("{} = ?", condition.field));
                    binds.push(condition.value.clone());
                }
                Match::Contains => {
                    sql.push_str(&format!("{} LIKE ? ESCAPE '\\'", condition.field));
                    binds.push(format!("%{}%", escape_like(&condition.value)));
                }
            }
        }

        let orderby = if columns.contains(&descriptor.orderby.as_str()) {
            descriptor.orderby.as_str()
        } else {
            warn!(orderby = %descriptor.orderby, "Unknown sort column, falling back");
            FALLBACK_ORDERBY
        };
        sql.push_str(&format!(
            " ORDER BY {} {}, blocked_id {}",
            orderby,
            descriptor.order.as_str().to_uppercase(),
            descriptor.order.as_str().to_uppercase()
        ));

        match (descriptor.limit, descriptor.offset) {
            (Some(limit), offset) => {
                sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset.unwrap_or(0)));
            }
            (None, Some(offset)) => {
                sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset));
            }
            (None, None) => {}
        }

        Ok((sql, binds))
    }
}

fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[async_trait]
impl RowStore for SqliteRowStore {
    #[instrument(skip(self, descriptor))]
    async fn query(
        &self,
        table: &str,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<BlockedRecord>, DomainError> {
        let (sql, binds) = Self::build_select(table, descriptor)?;

        let mut query = sqlx::query_as::<_, BlockedRow>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query blocked rows");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(count = rows.len(), "Blocked rows fetched");
        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, table: &str, id_field: &str, id: i64) -> Result<(), DomainError> {
        let columns = Self::columns_of(table)?;
        if !columns.contains(&id_field) {
            return Err(DomainError::InvalidColumn(id_field.to_string()));
        }

        let sql = format!("DELETE FROM {} WHERE {} = ?", table, id_field);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete blocked row");
                DomainError::DatabaseError(e.to_string())
            })?;

        debug!(rows_affected = result.rows_affected(), "Blocked row deleted");
        Ok(())
    }
}
