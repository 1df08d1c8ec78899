// In-memory collaborators for driving the form without a browser.

use super::api::LibraryApi;
use super::draft::ResourceDraft;
use super::error::RequestFailure;
use super::notify::{Navigate, Notify};
use crate::router::Route;

use async_trait::async_trait;
use interfacing::{DigitalLibraryRecord, UploadResponse};
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Fetch(String),
    Create(ResourceDraft),
    Update(String, ResourceDraft),
    Upload(String),
}

/// Records every call, answers with canned responses.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub record: DigitalLibraryRecord,
    pub upload_response: Option<UploadResponse>,
    pub fail_fetch: Option<RequestFailure>,
    pub fail_save: Option<RequestFailure>,
    pub fail_upload: Option<RequestFailure>,
}

impl FakeApi {
    pub fn serving(record: DigitalLibraryRecord) -> Self {
        Self {
            record,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record_call(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl LibraryApi for FakeApi {
    // file name
    type File = String;

    async fn list(&self) -> Result<Vec<DigitalLibraryRecord>, RequestFailure> {
        self.record_call(Call::List);
        match &self.fail_fetch {
            Some(failure) => Err(failure.clone()),
            None => Ok(vec![self.record.clone()]),
        }
    }

    async fn fetch(&self, id: &str) -> Result<DigitalLibraryRecord, RequestFailure> {
        self.record_call(Call::Fetch(id.to_owned()));
        match &self.fail_fetch {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.record.clone()),
        }
    }

    async fn create(&self, resource: &ResourceDraft) -> Result<(), RequestFailure> {
        self.record_call(Call::Create(resource.clone()));
        match &self.fail_save {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    async fn update(&self, id: &str, resource: &ResourceDraft) -> Result<(), RequestFailure> {
        self.record_call(Call::Update(id.to_owned(), resource.clone()));
        match &self.fail_save {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    async fn upload(&self, file: String) -> Result<UploadResponse, RequestFailure> {
        self.record_call(Call::Upload(file.clone()));
        if let Some(failure) = &self.fail_upload {
            return Err(failure.clone());
        }
        Ok(self
            .upload_response
            .clone()
            .unwrap_or_else(|| UploadResponse::Reference(format!("https://cdn.example.org/{}", file))))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notify for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_owned());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

pub fn filled_draft() -> ResourceDraft {
    ResourceDraft {
        title: "Things Fall Apart".into(),
        description: "A novel about Okonkwo".into(),
        author: "Chinua Achebe".into(),
        image: "https://cdn.example.org/cover.jpg".into(),
        resource_file: "https://cdn.example.org/book.pdf".into(),
        date_published: "1958-06-17".into(),
    }
}

pub fn stored_record(id: &str) -> DigitalLibraryRecord {
    DigitalLibraryRecord {
        id: Some(id.to_owned()),
        resource: ResourceDraft {
            title: "T".into(),
            description: "Original description".into(),
            author: "Original author".into(),
            image: "https://cdn.example.org/original.jpg".into(),
            resource_file: "https://cdn.example.org/original.pdf".into(),
            date_published: "2024-01-05T00:00:00Z".into(),
        },
        created_at: Some("2024-01-06T10:00:00Z".into()),
        updated_at: None,
    }
}
