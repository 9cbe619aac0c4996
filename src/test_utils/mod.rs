pub mod assertions;
pub mod fixtures;
pub mod helpers;
pub mod mocks;

pub use assertions::TestAssertions;
pub use fixtures::TestFixtures;
pub use helpers::TestHelpers;
