mod imports;

mod digital_library;
mod error_body;
mod upload;
mod user_info;

pub use digital_library::{DigitalLibraryRecord, DigitalLibraryResource, DATE_FORMAT};
pub use error_body::ApiErrorBody;
pub use upload::{UploadResponse, UploadedFile};
pub use user_info::UserInfo;

pub use secrecy::{ExposeSecret, SecretString};
pub use serde::{Deserialize, Serialize};
pub use validator::Validate;
