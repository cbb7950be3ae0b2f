use meme_room_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_transparently() {
        let error: ApplicationError = DomainError::NoActiveBackground { entries: 2 }.into();
        assert!(matches!(error, ApplicationError::Domain(_)));
        assert_eq!(
            error.to_string(),
            "stored gallery has 2 background(s) but none is active"
        );
    }

    #[test]
    fn display_prefixes_are_stable() {
        assert!(ApplicationError::Persistence("x".into())
            .to_string()
            .starts_with("persistence error:"));
        assert!(ApplicationError::Decode("x".into())
            .to_string()
            .starts_with("decode error:"));
        assert!(ApplicationError::Config("x".into())
            .to_string()
            .starts_with("config error:"));
    }
}
