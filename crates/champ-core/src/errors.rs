use thiserror::Error;

/// Result type alias using ChampError
pub type Result<T> = std::result::Result<T, ChampError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxErrorKind {
    // Lookup
    NotFound,
    AmbiguousUpdate,

    // Storage
    DataAccess,
    ConnectionUnavailable,
    ConstraintViolation,
    Persistence,

    // Ambient
    InvalidConfig,
}

impl TxErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TxErrorKind::NotFound => "ERR_NOT_FOUND",
            TxErrorKind::AmbiguousUpdate => "ERR_AMBIGUOUS_UPDATE",
            TxErrorKind::DataAccess => "ERR_DATA_ACCESS",
            TxErrorKind::ConnectionUnavailable => "ERR_CONNECTION_UNAVAILABLE",
            TxErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            TxErrorKind::Persistence => "ERR_PERSISTENCE",
            TxErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the operation
/// and entity context needed when reading logs.
#[derive(Debug, Clone)]
pub struct TxError {
    kind: TxErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<TxError>>,
}

impl TxError {
    /// Create a new error with the specified kind
    pub fn new(kind: TxErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a transaction number, a user number, a migration id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: TxError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> TxErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&TxError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for TxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for TxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures of the transaction store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChampError {
    /// A statement could not be executed or its rows could not be decoded
    #[error("Data access failure: {message}")]
    DataAccess { message: String },

    /// The connection provider could not hand out a connection
    #[error("Connection unavailable: {reason}")]
    ConnectionUnavailable { reason: String },

    /// No row matched the given transaction number
    #[error("Transaction not found: {transaction_number}")]
    RecordNotFound { transaction_number: String },

    /// An update keyed on transaction number touched more than one row
    #[error("Update of transaction {transaction_number} affected {rows_affected} rows")]
    MultipleRowsAffected {
        transaction_number: String,
        rows_affected: usize,
    },

    /// A configuration value is missing or not one of the accepted values
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Conversion from ChampError to the structured TxError
impl From<ChampError> for TxError {
    fn from(err: ChampError) -> Self {
        match err {
            ChampError::DataAccess { message } => {
                TxError::new(TxErrorKind::DataAccess).with_message(message)
            }

            ChampError::ConnectionUnavailable { reason } => {
                TxError::new(TxErrorKind::ConnectionUnavailable).with_message(reason)
            }

            ChampError::RecordNotFound { transaction_number } => {
                TxError::new(TxErrorKind::NotFound)
                    .with_entity_id(transaction_number)
                    .with_message("Transaction not found")
            }

            ChampError::MultipleRowsAffected {
                transaction_number,
                rows_affected,
            } => TxError::new(TxErrorKind::AmbiguousUpdate)
                .with_entity_id(transaction_number)
                .with_message(format!("Number of rows affected is {}", rows_affected)),

            ChampError::InvalidConfig { reason } => {
                TxError::new(TxErrorKind::InvalidConfig).with_message(reason)
            }
        }
    }
}

/// Conversion back into the domain taxonomy, used by write outcomes
impl From<TxError> for ChampError {
    fn from(err: TxError) -> Self {
        match err.kind() {
            TxErrorKind::ConnectionUnavailable => ChampError::ConnectionUnavailable {
                reason: err.to_string(),
            },
            TxErrorKind::InvalidConfig => ChampError::InvalidConfig {
                reason: err.to_string(),
            },
            _ => ChampError::DataAccess {
                message: err.to_string(),
            },
        }
    }
}
