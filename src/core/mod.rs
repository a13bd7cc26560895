pub mod dataset;
pub mod log;
pub mod notify;
pub mod reconciler;
pub mod roster;
pub mod session;
pub mod source;
pub mod summary;

pub use reconciler::{LatenessPolicy, Reconciler, Transition};
pub use roster::Roster;
pub use session::{AttendanceSession, SessionRunner};
