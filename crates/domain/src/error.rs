#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("stored gallery has {entries} background(s) but none is active")]
    NoActiveBackground { entries: usize },
}
