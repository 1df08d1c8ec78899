use chrono::{DateTime, NaiveDate};
use interfacing::{DigitalLibraryRecord, DigitalLibraryResource, Validate, DATE_FORMAT};
use std::fmt;

/// Fields of the resource being edited, exactly what gets submitted.
pub type ResourceDraft = DigitalLibraryResource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    Author,
    Image,
    ResourceFile,
    DatePublished,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        Self::Title,
        Self::Description,
        Self::Author,
        Self::Image,
        Self::ResourceFile,
        Self::DatePublished,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Author => "Author",
            Self::Image => "Image",
            Self::ResourceFile => "Resource File",
            Self::DatePublished => "Date Published",
        }
    }

    /// Name on the wire and html id of the input.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Author => "author",
            Self::Image => "image",
            Self::ResourceFile => "resourceFile",
            Self::DatePublished => "datePublished",
        }
    }

    fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "author" => Some(Self::Author),
            "image" => Some(Self::Image),
            "resource_file" => Some(Self::ResourceFile),
            "date_published" => Some(Self::DatePublished),
            _ => None,
        }
    }

    pub fn get(self, draft: &ResourceDraft) -> &str {
        match self {
            Self::Title => &draft.title,
            Self::Description => &draft.description,
            Self::Author => &draft.author,
            Self::Image => &draft.image,
            Self::ResourceFile => &draft.resource_file,
            Self::DatePublished => &draft.date_published,
        }
    }

    pub fn set(self, draft: &mut ResourceDraft, value: String) {
        let slot = match self {
            Self::Title => &mut draft.title,
            Self::Description => &mut draft.description,
            Self::Author => &mut draft.author,
            Self::Image => &mut draft.image,
            Self::ResourceFile => &mut draft.resource_file,
            Self::DatePublished => &mut draft.date_published,
        };
        *slot = value;
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields that can be filled from an uploaded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadTarget {
    Image,
    ResourceFile,
}

impl UploadTarget {
    pub fn field(self) -> DraftField {
        match self {
            Self::Image => DraftField::Image,
            Self::ResourceFile => DraftField::ResourceFile,
        }
    }
}

/// Fields that block submission, in form order.
pub fn invalid_fields(draft: &ResourceDraft) -> Vec<DraftField> {
    let errors = match draft.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };
    let names = errors
        .field_errors()
        .into_keys()
        .filter_map(|name| DraftField::from_field_name(name.as_ref()))
        .collect::<Vec<_>>();

    DraftField::ALL
        .into_iter()
        .filter(|field| names.contains(field))
        .collect()
}

pub fn draft_from_record(record: DigitalLibraryRecord) -> ResourceDraft {
    let mut draft = record.into_body();
    draft.date_published = date_component(&draft.date_published);
    draft
}

/// Reduces a server timestamp to the `YYYY-MM-DD` a date input expects.
///
/// The date is taken as written, in the timestamp's own offset.
pub fn date_component(value: &str) -> String {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.date_naive().format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return date.format(DATE_FORMAT).to_string();
    }

    value.chars().take(10).collect()
}
