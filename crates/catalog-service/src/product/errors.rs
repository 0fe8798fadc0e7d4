//! Classification of store failures into caller-facing errors.

use std::error::Error as _;

use tracing::{Dispatch, error};

use catalog_core::error::AppError;

/// Message returned in place of any error the caller should not see.
pub const INTERNAL_MESSAGE: &str = "Unexpected error, check server logs";

/// Map a store error to what the caller is allowed to see.
///
/// Duplicate keys keep the database's constraint detail. Not-found,
/// forbidden and validation errors pass through. Everything else is logged
/// on `logger` with its source chain and replaced by a generic internal
/// error.
pub fn classify(logger: &Dispatch, err: AppError) -> AppError {
    if err.kind.is_client_facing() {
        return err;
    }

    let chain = source_chain(&err);
    tracing::dispatcher::with_default(logger, || {
        error!(kind = %err.kind, detail = %err.message, causes = %chain, "Unhandled store error");
    });
    AppError::internal(INTERNAL_MESSAGE)
}

fn source_chain(err: &AppError) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}
