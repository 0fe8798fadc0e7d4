//! Mapping of sqlx errors into [`AppError`].

use sqlx::postgres::PgDatabaseError;

use catalog_core::error::{AppError, ErrorKind};

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Convert a sqlx error into an [`AppError`].
///
/// Unique violations become [`ErrorKind::DuplicateKey`] carrying the
/// server's `DETAIL` line (e.g. `Key (slug)=(tee) already exists.`).
/// Everything else becomes [`ErrorKind::Database`] with `context` as the
/// message and the driver error as the source.
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    if let Some(detail) = unique_violation_detail(&err) {
        return AppError::duplicate_key(detail);
    }
    AppError::with_source(ErrorKind::Database, context, err)
}

fn unique_violation_detail(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return None;
    }
    let detail = db_err
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(|pg| pg.detail())
        .map(str::to_string)
        .unwrap_or_else(|| db_err.message().to_string());
    Some(detail)
}
