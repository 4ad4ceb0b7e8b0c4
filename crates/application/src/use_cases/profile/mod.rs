mod get_profile;

pub use get_profile::{GetProfileUseCase, ProfileEntry, ResolverProfile, PROFILE_COIN_TYPES, PROFILE_TEXT_KEYS};
