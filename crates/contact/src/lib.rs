//! Contact form submission service.
//!
//! Validates a [`ContactSubmission`], renders the operator notification and
//! the auto-reply, then hands both to a [`Mailer`], notification first.

mod command;
mod mailer;
mod message;

pub use command::*;
pub use mailer::*;
pub use message::*;
pub use portfolio_shared::contact::ContactSubmission;
