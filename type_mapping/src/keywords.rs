//! Reserved SQL keywords
//!
//! Shared by compile-time identifier validation in `table-derive` and runtime
//! validation in `store-object`, so both reject the same names.

const RESERVED_KEYWORDS: &[&str] = &[
    // SQL standard keywords
    "SELECT",
    "INSERT",
    "UPDATE",
    "DELETE",
    "FROM",
    "WHERE",
    "JOIN",
    "INNER",
    "LEFT",
    "RIGHT",
    "FULL",
    "OUTER",
    "CROSS",
    "NATURAL",
    "ON",
    "AS",
    "AND",
    "OR",
    "NOT",
    "NULL",
    "TRUE",
    "FALSE",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "END",
    "IF",
    "EXISTS",
    "IN",
    "IS",
    "LIKE",
    "GLOB",
    "BETWEEN",
    "ORDER",
    "BY",
    "GROUP",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "UNION",
    "INTERSECT",
    "EXCEPT",
    "ALL",
    "DISTINCT",
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "CREATE",
    "DROP",
    "ALTER",
    "TABLE",
    "INDEX",
    "VIEW",
    "DATABASE",
    "SCHEMA",
    "PRIMARY",
    "KEY",
    "FOREIGN",
    "REFERENCES",
    "UNIQUE",
    "CHECK",
    "DEFAULT",
    "CONSTRAINT",
    "COLUMN",
    "ADD",
    "RENAME",
    "TO",
    "INTO",
    "VALUES",
    "SET",
    // SQLite specific keywords
    "AUTOINCREMENT",
    "ROWID",
    "PRAGMA",
    "VACUUM",
    "ATTACH",
    "DETACH",
    "REINDEX",
    "REPLACE",
    "TEMP",
    "TEMPORARY",
    "TRANSACTION",
    "BEGIN",
    "COMMIT",
    "ROLLBACK",
    "SAVEPOINT",
    "RELEASE",
    "TRIGGER",
    "RETURNING",
    "CONFLICT",
    "NOTHING",
    "GENERATED",
    "ALWAYS",
    "STORED",
    "VIRTUAL",
    "WITHOUT",
    "ESCAPE",
    "COLLATE",
    "CAST",
    "INTEGER",
    "TEXT",
    "REAL",
    "BLOB",
    "NUMERIC",
    "BOOLEAN",
    "DATE",
    "TIME",
    "TIMESTAMP",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
];

/// Check if a name is a reserved SQL keyword (case-insensitive)
pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
}
