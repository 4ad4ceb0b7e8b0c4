mod list_owned_names;

pub use list_owned_names::{ListOwnedNamesUseCase, OwnedName};
