pub mod builder;
pub mod constant;
pub mod endpoint;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ADMIN_ID, TEST_GUIDE_ID, TEST_TOURIST_ID},
        fixtures::{factory, token},
        TestBuilder, TestError, TestSetup,
    };
}
