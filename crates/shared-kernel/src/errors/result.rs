use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Value Objects, Use Cases, Repositories (Ports).
/// Il force le développeur à traduire les erreurs techniques en erreurs métier.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Cache, Bootstrap, Configuration, API.
pub type AppResult<T> = std::result::Result<T, AppError>;
