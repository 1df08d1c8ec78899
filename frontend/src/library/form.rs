//! State machine behind the create and edit screens.
//!
//! Everything here is synchronous: each outbound call is split into a
//! `begin_*` step that hands out a request and a `finish_*` step that
//! takes its result. The screen runs the request in between, so the
//! draft is never borrowed across an await.

use super::api::LibraryApi;
use super::draft::{draft_from_record, invalid_fields, DraftField, ResourceDraft, UploadTarget};
use super::error::RequestFailure;
use super::notify::{Navigate, Notify};
use crate::router::Route;

use interfacing::DigitalLibraryRecord;
use std::collections::HashMap;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    fn saved_message(&self) -> &'static str {
        match self {
            Self::Create => "Resource created successfully",
            Self::Edit { .. } => "Resource updated successfully",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Edit only, waiting for the stored record.
    Loading,
    LoadFailed { message: String },
    Ready,
    Submitting,
    /// Terminal, the screen is navigating away.
    Saved,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("The resource is not loaded")]
    NotReady,

    #[error("The resource is already being saved")]
    Busy,

    #[error("Please fill in: {}", join_labels(.0))]
    Invalid(Vec<DraftField>),
}

fn join_labels(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub struct ResourceForm {
    mode: FormMode,
    phase: Phase,
    draft: ResourceDraft,
    fetch_pending: bool,
    // pending upload count per target
    uploads: HashMap<UploadTarget, usize>,
}

impl ResourceForm {
    pub fn new(mode: FormMode) -> Self {
        let phase = match mode {
            FormMode::Create => Phase::Ready,
            FormMode::Edit { .. } => Phase::Loading,
        };

        Self {
            mode,
            phase,
            draft: ResourceDraft::default(),
            fetch_pending: false,
            uploads: HashMap::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn draft(&self) -> &ResourceDraft {
        &self.draft
    }

    pub fn value(&self, field: DraftField) -> &str {
        field.get(&self.draft)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_uploading(&self, target: UploadTarget) -> bool {
        self.uploads.get(&target).copied().unwrap_or_default() > 0
    }

    fn is_editing(&self, id: &str) -> bool {
        matches!(&self.mode, FormMode::Edit { id: current } if current == id)
    }

    fn is_editable(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Submitting)
    }

    /// Fetch of the stored record. `None` in create mode, once loaded,
    /// or while a fetch is already out.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        let FormMode::Edit { id } = &self.mode else {
            return None;
        };
        if self.fetch_pending || !matches!(self.phase, Phase::Loading | Phase::LoadFailed { .. }) {
            return None;
        }

        debug!(id = %id, "loading resource");
        self.phase = Phase::Loading;
        self.fetch_pending = true;
        Some(LoadRequest { id: id.clone() })
    }

    pub fn finish_load(&mut self, outcome: LoadOutcome, notify: &impl Notify) {
        let LoadOutcome { id, result } = outcome;
        if !self.is_editing(&id) {
            warn!(%id, mode = ?self.mode, "dropping load result of another resource");
            return;
        }

        self.fetch_pending = false;
        if self.phase != Phase::Loading {
            warn!(phase = ?self.phase, "dropping load result");
            return;
        }

        match result {
            Ok(record) => {
                self.draft = draft_from_record(record);
                self.phase = Phase::Ready;
                debug!("resource loaded");
            }
            Err(failure) => {
                warn!(error = %failure, "resource failed to load");
                notify.error(failure.message());
                self.phase = Phase::LoadFailed {
                    message: failure.message().to_owned(),
                };
            }
        }
    }

    /// Returns whether the draft changed.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        if !self.is_editable() {
            debug!(field = field.key(), phase = ?self.phase, "ignoring input");
            return false;
        }
        field.set(&mut self.draft, value.into());
        true
    }

    pub fn begin_submit(&mut self) -> Result<SubmitRequest, FormError> {
        match self.phase {
            Phase::Ready => {}
            Phase::Submitting | Phase::Saved => return Err(FormError::Busy),
            Phase::Loading | Phase::LoadFailed { .. } => return Err(FormError::NotReady),
        }

        let invalid = invalid_fields(&self.draft);
        if !invalid.is_empty() {
            debug!(?invalid, "submit blocked");
            return Err(FormError::Invalid(invalid));
        }

        info!(mode = ?self.mode, "submitting resource");
        self.phase = Phase::Submitting;
        Ok(SubmitRequest {
            mode: self.mode.clone(),
            resource: self.draft.clone(),
        })
    }

    pub fn finish_submit(
        &mut self,
        result: Result<(), RequestFailure>,
        notify: &impl Notify,
        navigate: &impl Navigate,
    ) {
        if self.phase != Phase::Submitting {
            warn!(phase = ?self.phase, "dropping submit result");
            return;
        }

        match result {
            Ok(()) => {
                info!(mode = ?self.mode, "resource saved");
                self.phase = Phase::Saved;
                notify.success(self.mode.saved_message());
                navigate.navigate(Route::DigitalLibrary);
            }
            Err(failure) => {
                warn!(error = %failure, "resource was not saved");
                self.phase = Phase::Ready;
                notify.error(failure.message());
            }
        }
    }

    pub fn begin_upload<F>(&mut self, target: UploadTarget, file: F) -> UploadRequest<F> {
        *self.uploads.entry(target).or_default() += 1;
        debug!(?target, "upload started");
        UploadRequest {
            mode: self.mode.clone(),
            target,
            file,
        }
    }

    /// The last upload to complete for a target wins.
    pub fn finish_upload(&mut self, outcome: UploadOutcome, notify: &impl Notify) {
        let UploadOutcome { mode, target, result } = outcome;
        if mode != self.mode {
            warn!(?target, ?mode, "dropping upload started by another form");
            return;
        }

        if let Some(pending) = self.uploads.get_mut(&target) {
            *pending = pending.saturating_sub(1);
            if *pending == 0 {
                self.uploads.remove(&target);
            }
        }

        if self.phase == Phase::Saved {
            debug!(?target, "upload finished after save");
            return;
        }

        match result {
            Ok(reference) => {
                debug!(?target, %reference, "upload finished");
                target.field().set(&mut self.draft, reference);
                notify.success("File uploaded successfully");
            }
            Err(failure) => {
                warn!(?target, error = %failure, "upload failed");
                notify.error(failure.message());
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    id: String,
}

impl LoadRequest {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn send<A: LibraryApi>(self, api: &A) -> LoadOutcome {
        let result = api.fetch(&self.id).await;
        LoadOutcome {
            id: self.id,
            result,
        }
    }
}

/// Fetched record, tagged with the id it was requested for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    pub id: String,
    pub result: Result<DigitalLibraryRecord, RequestFailure>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    mode: FormMode,
    resource: ResourceDraft,
}

impl SubmitRequest {
    pub fn resource(&self) -> &ResourceDraft {
        &self.resource
    }

    pub async fn send<A: LibraryApi>(self, api: &A) -> Result<(), RequestFailure> {
        match &self.mode {
            FormMode::Create => api.create(&self.resource).await,
            FormMode::Edit { id } => api.update(id, &self.resource).await,
        }
    }
}

#[derive(Debug)]
pub struct UploadRequest<F> {
    mode: FormMode,
    target: UploadTarget,
    file: F,
}

impl<F: 'static> UploadRequest<F> {
    pub fn target(&self) -> UploadTarget {
        self.target
    }

    pub async fn send<A: LibraryApi<File = F>>(self, api: &A) -> UploadOutcome {
        let result = api.upload(self.file).await.and_then(|response| {
            response.into_reference().ok_or_else(|| {
                RequestFailure::new("Upload response did not contain a file reference")
            })
        });

        UploadOutcome {
            mode: self.mode,
            target: self.target,
            result,
        }
    }
}

/// Result of an upload, tagged with the form and field it was meant for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutcome {
    pub mode: FormMode,
    pub target: UploadTarget,
    pub result: Result<String, RequestFailure>,
}
