use thiserror::Error;

pub type HubResult<T> = Result<T, HubError>;

#[derive(Error, Debug, Clone)]
pub enum HubError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate prop '{key}': prop keys must be unique within a schema")]
    DuplicateProp { key: String },

    #[error("Duplicate token '{key}': token keys must be unique within a library")]
    DuplicateToken { key: String },

    #[error("Invalid token value '{value}' for '{key}': {reason}")]
    InvalidTokenValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate component id '{id}'")]
    DuplicateComponent { id: String },

    #[error("Duplicate library id '{id}'")]
    DuplicateLibrary { id: String },

    #[error("Duplicate site id '{id}'")]
    DuplicateSite { id: String },

    #[error("Duplicate user id '{id}'")]
    DuplicateUser { id: String },

    #[error("Duplicate asset id '{id}'")]
    DuplicateAsset { id: String },

    #[error("Duplicate installation id '{id}'")]
    DuplicateInstallation { id: String },

    #[error("Duplicate instance id '{id}': instance ids must be unique within a page layout")]
    DuplicateInstance { id: String },

    #[error("Unknown library '{id}'")]
    UnknownLibrary { id: String },

    #[error("Unknown site '{id}'")]
    UnknownSite { id: String },

    #[error("Unknown prop '{key}' in schema")]
    UnknownProp { key: String },

    #[error("YAML error: {0}")]
    YamlError(String),
}

impl From<serde_yaml::Error> for HubError {
    fn from(err: serde_yaml::Error) -> Self {
        HubError::YamlError(err.to_string())
    }
}
