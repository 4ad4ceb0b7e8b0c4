pub mod names;
pub mod profile;
pub mod resolution;

// Re-export use cases
pub use names::{ListOwnedNamesUseCase, OwnedName};
pub use profile::{GetProfileUseCase, ResolverProfile};
pub use resolution::{RecordHandle, ResolutionContext, ResolveNameUseCase};
