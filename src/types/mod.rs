pub mod profile;
pub mod response;
pub mod resume;

pub use profile::Profile;
pub use resume::{Customizations, PublicAccess, Resume, Visibility};
