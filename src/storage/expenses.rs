//! Expense store backed by SQLite
//!
//! `ExpenseStore` owns a single long-lived connection. Every operation is one
//! SQL statement, so it either applies completely or not at all. The store
//! performs no validation of field values; that is the caller's job.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Params, Row, ToSql};

use crate::error::ExpenseResult;
use crate::models::{CategoryTotal, Expense, ExpenseId, ExpenseInput, Money};

use super::schema;

const SELECT_COLUMNS: &str = "SELECT id, date, category, amount, description FROM expenses";
const NEWEST_FIRST: &str = "ORDER BY date DESC, id DESC";

/// Persistent collection of expense records
#[derive(Debug)]
pub struct ExpenseStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl ExpenseStore {
    /// Open or create a database at the given path
    pub fn open(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;
        schema::run_migrations(&conn)?;

        tracing::debug!(path = %path.display(), "Opened expense database");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> ExpenseResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema::run_migrations(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Location of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert a new expense and return its freshly assigned ID
    pub fn add(&self, input: &ExpenseInput) -> ExpenseResult<ExpenseId> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO expenses (date, category, amount, description) VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(params![
            input.date,
            input.category,
            input.amount,
            input.description
        ])?;

        let id = ExpenseId::from_raw(self.conn.last_insert_rowid());
        tracing::debug!(%id, date = %input.date, category = %input.category, "Inserted expense");
        Ok(id)
    }

    /// Every expense, newest date first (ties: most recently inserted first)
    pub fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.query_expenses(&format!("{} {}", SELECT_COLUMNS, NEWEST_FIRST), [])
    }

    /// Point lookup; `None` when no expense has this ID
    pub fn get_by_id(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let expense = stmt.query_row([id], row_to_expense).optional()?;
        tracing::debug!(%id, found = expense.is_some(), "Looked up expense");
        Ok(expense)
    }

    /// Replace every field except the ID
    ///
    /// Returns `false` without touching anything when `id` does not exist.
    pub fn update(&self, id: ExpenseId, input: &ExpenseInput) -> ExpenseResult<bool> {
        let mut stmt = self.conn.prepare_cached(
            "UPDATE expenses SET date = ?1, category = ?2, amount = ?3, description = ?4 \
             WHERE id = ?5",
        )?;
        let changed = stmt.execute(params![
            input.date,
            input.category,
            input.amount,
            input.description,
            id
        ])?;

        tracing::debug!(%id, changed, "Updated expense");
        Ok(changed > 0)
    }

    /// Remove an expense permanently
    ///
    /// Returns `false` when `id` does not exist.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("DELETE FROM expenses WHERE id = ?1")?;
        let changed = stmt.execute([id])?;

        tracing::debug!(%id, changed, "Deleted expense");
        Ok(changed > 0)
    }

    /// Expenses whose category matches exactly (case-sensitive)
    pub fn get_by_category(&self, category: &str) -> ExpenseResult<Vec<Expense>> {
        self.query_expenses(
            &format!("{} WHERE category = ?1 {}", SELECT_COLUMNS, NEWEST_FIRST),
            [category],
        )
    }

    /// Expenses dated between `start` and `end`, both inclusive
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ExpenseResult<Vec<Expense>> {
        self.query_expenses(
            &format!(
                "{} WHERE date BETWEEN ?1 AND ?2 {}",
                SELECT_COLUMNS, NEWEST_FIRST
            ),
            [start, end],
        )
    }

    /// Sum of all amounts; zero for an empty store
    pub fn get_total(&self) -> ExpenseResult<Money> {
        let total: Money = self.conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses",
            [],
            |r| r.get(0),
        )?;
        tracing::debug!(total = total.cents(), "Computed total");
        Ok(total)
    }

    /// Per-category sums, largest total first
    ///
    /// Equal totals are ordered by category name.
    pub fn get_total_by_category(&self) -> ExpenseResult<Vec<CategoryTotal>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT category, SUM(amount) AS total FROM expenses \
             GROUP BY category ORDER BY total DESC, category ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryTotal::new(row.get::<_, String>(0)?, row.get(1)?))
        })?;
        let totals = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(categories = totals.len(), "Computed category totals");
        Ok(totals)
    }

    /// Sum of amounts dated within the given calendar month; zero when none match
    pub fn get_monthly_total(&self, year: i32, month: u32) -> ExpenseResult<Money> {
        let total: Money = self.conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses \
             WHERE strftime('%Y', date) = ?1 AND strftime('%m', date) = ?2",
            params![format!("{:04}", year), format!("{:02}", month)],
            |r| r.get(0),
        )?;
        tracing::debug!(year, month, total = total.cents(), "Computed monthly total");
        Ok(total)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))?;
        tracing::debug!(count, "Counted expenses");
        Ok(count as usize)
    }

    /// Distinct categories that appear in stored expenses, sorted
    pub fn categories_in_use(&self) -> ExpenseResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT DISTINCT category FROM expenses ORDER BY category ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let categories: Vec<String> = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(categories = categories.len(), "Listed categories in use");
        Ok(categories)
    }

    fn query_expenses<P: Params>(&self, sql: &str, params: P) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, row_to_expense)?;
        let expenses = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(sql, rows = expenses.len(), "Queried expenses");
        Ok(expenses)
    }
}

fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        // Older rows may carry NULL instead of ''
        description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.cents()))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Money::from_cents)
    }
}

impl ToSql for ExpenseId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_raw()))
    }
}

impl FromSql for ExpenseId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(ExpenseId::from_raw)
    }
}
