//! Non-DOM half of the triangle widget.
//!
//! A [`ChatSession`] owns the interaction controller and the chat transcript,
//! and resolves chat questions through a local or remote tutor.

pub mod error;
pub mod remote;
pub mod source;
pub mod session;

pub use error::ChatError;
pub use remote::RemoteTutor;
pub use session::ChatSession;
pub use source::TutorSource;
