use crate::domain::errors::PersistenceError;

/// Translate a sqlx failure into the domain's persistence error. Postgres
/// SQLSTATE codes are numeric, so they parse directly; anything without a
/// usable code (I/O faults, pool timeouts) reports 0.
pub fn map_sqlx(err: sqlx::Error) -> PersistenceError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err
                .code()
                .and_then(|code| code.as_ref().parse::<i32>().ok())
                .unwrap_or(0);
            PersistenceError::new(db_err.message(), code)
        }
        _ => PersistenceError::new(err.to_string(), 0),
    }
}
