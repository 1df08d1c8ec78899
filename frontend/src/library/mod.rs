// Screen independent part of the digital library admin:
// draft state, the form state machine and the HTTP collaborator.

pub mod api;
pub mod draft;
pub mod error;
pub mod form;
pub mod listing;
pub mod notify;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{HttpApi, LibraryApi};
pub use draft::{DraftField, UploadTarget};
pub use error::RequestFailure;
pub use form::{FormError, FormMode, LoadOutcome, Phase, ResourceForm, UploadOutcome};
pub use listing::{fetch_rows, ListingRow};
pub use notify::Notify;
pub use session::{Session, SessionError};
