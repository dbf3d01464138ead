pub mod ats_handlers;
pub mod render_handlers;
pub mod system_handlers;
pub mod template_handlers;

pub use ats_handlers::*;
pub use render_handlers::*;
pub use system_handlers::*;
pub use template_handlers::*;
