use crate::imports::*;

/// Error payload of the API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub message: String,
}
