pub mod classifier;
pub mod types;

pub use classifier::{classify, compute_profile, determine_authority, determine_type, Classification};
pub use types::{Authority, HdType, Profile, Strategy, PROFILE_PLACEHOLDER};
