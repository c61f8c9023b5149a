pub mod alert;
pub mod auth;
pub mod field;
pub mod guard;
pub mod navbar;
pub mod page;

pub use alert::ErrorAlert;
pub use field::TextField;
pub use guard::{ProtectedRoute, RoleProtectedRoute};
pub use navbar::{ConditionalNavbar, PublicNavbar, UserNavbar};
pub use page::{Loading, Page};
