//! Submission side of the contact form: the form state machine the page
//! drives and the HTTP client it submits through.

mod api;
mod form;

pub use api::*;
pub use form::*;
pub use portfolio_shared::contact::ContactSubmission;
