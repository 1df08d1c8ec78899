use super::api::LibraryApi;
use super::draft::date_component;
use super::error::RequestFailure;

use interfacing::DigitalLibraryRecord;

/// One card of the listing screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    /// `None` for records the server returned without an id, those cannot be edited.
    pub id: Option<String>,
    pub title: String,
    pub byline: String,
}

impl From<DigitalLibraryRecord> for ListingRow {
    fn from(record: DigitalLibraryRecord) -> Self {
        let resource = record.resource;
        Self {
            id: record.id,
            byline: format!(
                "{}, {}",
                resource.author,
                date_component(&resource.date_published)
            ),
            title: resource.title,
        }
    }
}

pub async fn fetch_rows<A: LibraryApi>(api: &A) -> Result<Vec<ListingRow>, RequestFailure> {
    let records = api.list().await?;
    Ok(records.into_iter().map(ListingRow::from).collect())
}
