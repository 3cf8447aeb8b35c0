pub mod guard;
pub mod session;

pub use guard::{SubmissionGuard, SubmissionTicket};
pub use session::SessionStore;
