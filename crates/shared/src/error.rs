#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("recipe catalog is empty")]
    EmptyCatalog,

    #[error("day {index} is out of range for a plan of {len} days")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("duplicate recipe id `{0}` in catalog")]
    DuplicateRecipe(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! ensure_slot {
    ($index:expr, $len:expr $(,)?) => {
        if $index >= $len {
            return Err($crate::Error::SlotOutOfRange {
                index: $index,
                len: $len,
            });
        }
    };
}
