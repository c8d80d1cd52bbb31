/// Errors raised while building an article catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate article slug `{slug}` (ids {first_id} and {second_id})")]
    DuplicateSlug { slug: String, first_id: u32, second_id: u32 },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

/// Rejections from the comment, contact and newsletter stores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{}", .0.join(" "))]
    Invalid(Vec<String>),

    #[error("email already subscribed: {0}")]
    AlreadySubscribed(String),
}

impl IntakeError {
    /// Human-readable reasons suitable for showing next to a form.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            IntakeError::Invalid(reasons) => reasons.clone(),
            IntakeError::AlreadySubscribed(_) => {
                vec!["This email is already subscribed.".to_string()]
            },
        }
    }
}
