use crate::imports::*;
use chrono::NaiveDate;
use serde::Deserializer;
use validator::{Validate, ValidationError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of create and update requests.
///
/// Every field is required, `date_published` holds a calendar date
/// formatted as [`DATE_FORMAT`].
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalLibraryResource {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub author: String,
    #[validate(custom(function = "not_blank"))]
    pub image: String,
    #[validate(custom(function = "not_blank"))]
    pub resource_file: String,
    #[validate(custom(function = "calendar_date"))]
    pub date_published: String,
}

/// Stored resource as returned by the API.
///
/// `date_published` is whatever the server sends, usually a full timestamp.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DigitalLibraryRecord {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(flatten)]
    pub resource: DigitalLibraryResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl DigitalLibraryRecord {
    pub fn body(&self) -> &DigitalLibraryResource {
        &self.resource
    }

    pub fn into_body(self) -> DigitalLibraryResource {
        self.resource
    }
}

fn not_blank(value: &String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn calendar_date(value: &String) -> Result<(), ValidationError> {
    not_blank(value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date"))
}

// mongo style string ids and numeric ids are both in use
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(
        Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
            RawId::Text(id) => id,
            RawId::Number(id) => id.to_string(),
        }),
    )
}
