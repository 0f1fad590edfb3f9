/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating the core data model.
///
/// All of these are recoverable: callers surface them as log messages
/// rather than aborting the session.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested item name is not registered in the catalog.
    #[error("unknown item: \"{0}\"")]
    UnknownItem(String),

    /// An item with the same name is already registered.
    #[error("item already registered: \"{0}\"")]
    DuplicateItem(String),

    /// A recipe with the same output is already registered.
    #[error("recipe already registered: \"{0}\"")]
    DuplicateRecipe(String),

    /// Adding the items would push the inventory past its weight limit.
    #[error("carrying {quantity} more {item} would exceed the weight limit")]
    CapacityExceeded {
        /// The item that could not be added.
        item: String,
        /// How many units the caller tried to add.
        quantity: u32,
    },

    /// The inventory holds fewer units than the caller asked to remove.
    #[error("not enough {item}: requested {requested}, held {held}")]
    InsufficientQuantity {
        /// The item that could not be removed.
        item: String,
        /// How many units the caller asked for.
        requested: u32,
        /// How many units are actually held.
        held: u32,
    },

    /// The embedded starter table failed to parse.
    #[error("starter table: {0}")]
    Data(#[from] serde_json::Error),
}
