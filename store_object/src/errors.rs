use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database operation '{operation}' on '{table}' failed: {source}")]
    DatabaseOperation {
        table: String,
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Validation error on '{table}.{field}': {message}")]
    Validation {
        table: String,
        field: String,
        message: String,
    },

    #[error("Serialization error on '{table}': {message}")]
    Serialization { table: String, message: String },

    #[error("Invalid operation on {entity}: {message}")]
    InvalidOperation { entity: String, message: String },
}

impl StoreError {
    pub fn database_operation(table: &str, operation: &str, source: sqlx::Error) -> Self {
        StoreError::DatabaseOperation {
            table: table.to_string(),
            operation: operation.to_string(),
            source,
        }
    }

    pub fn validation(table: &str, field: &str, message: impl Into<String>) -> Self {
        StoreError::Validation {
            table: table.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn serialization(table: &str, message: impl std::fmt::Display) -> Self {
        StoreError::Serialization {
            table: table.to_string(),
            message: message.to_string(),
        }
    }

    pub fn invalid_operation(entity: &str, message: impl Into<String>) -> Self {
        StoreError::InvalidOperation {
            entity: entity.to_string(),
            message: message.into(),
        }
    }

    /// Whether the underlying database error is a UNIQUE constraint violation
    pub fn is_unique_violation(&self) -> bool {
        self.database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false)
    }

    /// Whether the underlying database error is a FOREIGN KEY constraint violation
    pub fn is_foreign_key_violation(&self) -> bool {
        self.database_error()
            .map(|e| e.is_foreign_key_violation())
            .unwrap_or(false)
    }

    fn database_error(&self) -> Option<&(dyn sqlx::error::DatabaseError + 'static)> {
        match self {
            StoreError::DatabaseOperation { source, .. } => source.as_database_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_table_and_operation() {
        let err = StoreError::database_operation("hotels", "get_by_id", sqlx::Error::RowNotFound);
        let message = err.to_string();
        assert!(message.contains("get_by_id"));
        assert!(message.contains("hotels"));
    }

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        let err = StoreError::invalid_operation("User", "unknown role 'pilot'");
        assert!(!err.is_unique_violation());
        assert!(!err.is_foreign_key_violation());
        assert_eq!(err.to_string(), "Invalid operation on User: unknown role 'pilot'");
    }
}
