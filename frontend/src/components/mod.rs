pub mod imports;

mod error;
mod loading;
mod session;
mod title;
mod toasts;

pub mod library;

pub use error::ErrorPage;
pub use loading::LoadingBox;
pub use session::WithSession;
pub use title::PageTitle;
pub use toasts::WithToasts;
