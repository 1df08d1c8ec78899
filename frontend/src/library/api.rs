use super::error::RequestFailure;
use super::session::Session;
use crate::conf::Conf;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use interfacing::{DigitalLibraryRecord, DigitalLibraryResource, UploadResponse};
use serde::de::DeserializeOwned;
use static_routes::*;
use std::rc::Rc;
use tracing::{debug, info, warn};
use web_sys::{File, FormData};

/// HTTP collaborator of the library screens.
///
/// Futures are not `Send`, everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait LibraryApi {
    /// Local file handed to [`LibraryApi::upload`].
    type File: 'static;

    async fn list(&self) -> Result<Vec<DigitalLibraryRecord>, RequestFailure>;

    async fn fetch(&self, id: &str) -> Result<DigitalLibraryRecord, RequestFailure>;

    async fn create(&self, resource: &DigitalLibraryResource) -> Result<(), RequestFailure>;

    async fn update(&self, id: &str, resource: &DigitalLibraryResource)
        -> Result<(), RequestFailure>;

    async fn upload(&self, file: Self::File) -> Result<UploadResponse, RequestFailure>;
}

trait RequestExtend {
    fn static_get(base_url: &str, static_path: impl Get) -> Self;
    fn static_post(base_url: &str, static_path: impl Post) -> Self;
    fn static_put(base_url: &str, static_path: impl Put) -> Self;
}

impl RequestExtend for Request {
    fn static_get(base_url: &str, static_path: impl Get) -> Self {
        Request::get(&static_path.get().complete_with_base(base_url))
    }

    fn static_post(base_url: &str, static_path: impl Post) -> Self {
        Request::post(&static_path.post().complete_with_base(base_url))
    }

    fn static_put(base_url: &str, static_path: impl Put) -> Self {
        Request::put(&static_path.put().complete_with_base(base_url))
    }
}

trait ResponseExtend {
    fn log_status(&self);
}

impl ResponseExtend for Response {
    fn log_status(&self) {
        info!(url = %self.url(), status = self.status(), "response");
    }
}

/// [`LibraryApi`] over `fetch`, authorized with the session's bearer token.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: Rc<str>,
    session: Rc<Session>,
}

impl HttpApi {
    pub fn new(conf: &Conf, session: Rc<Session>) -> Self {
        Self {
            base_url: conf.api.base_url.as_str().into(),
            session,
        }
    }

    fn authorized(&self, request: Request) -> Request {
        request.header("Authorization", &self.session.authorization())
    }

    async fn send(&self, request: Request) -> Result<Response, RequestFailure> {
        let response = self.authorized(request).send().await.map_err(|e| {
            warn!(error = %e, "request was not sent");
            RequestFailure::from(e)
        })?;
        response.log_status();

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let failure = RequestFailure::from_response(status, &body);
        warn!(status, message = failure.message(), "request failed");
        Err(failure)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, RequestFailure> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl LibraryApi for HttpApi {
    type File = File;

    async fn list(&self) -> Result<Vec<DigitalLibraryRecord>, RequestFailure> {
        let request = Request::static_get(&self.base_url, routes().api.digital_library);
        self.send_json(request).await
    }

    async fn fetch(&self, id: &str) -> Result<DigitalLibraryRecord, RequestFailure> {
        debug!(id, "fetching resource");
        let request = Request::static_get(&self.base_url, routes().api.digital_library.item(id));
        self.send_json(request).await
    }

    async fn create(&self, resource: &DigitalLibraryResource) -> Result<(), RequestFailure> {
        debug!(title = %resource.title, "creating resource");
        let request =
            Request::static_post(&self.base_url, routes().api.digital_library).json(resource)?;
        self.send(request).await.map(|_| ())
    }

    async fn update(
        &self,
        id: &str,
        resource: &DigitalLibraryResource,
    ) -> Result<(), RequestFailure> {
        debug!(id, title = %resource.title, "updating resource");
        let request =
            Request::static_put(&self.base_url, routes().api.digital_library.item(id))
                .json(resource)?;
        self.send(request).await.map(|_| ())
    }

    async fn upload(&self, file: File) -> Result<UploadResponse, RequestFailure> {
        debug!(name = %file.name(), size = file.size(), "uploading file");

        let body = FormData::new()
            .map_err(|e| RequestFailure::from_js(e, "Could not prepare the upload"))?;
        body.append_with_blob("file", &file)
            .map_err(|e| RequestFailure::from_js(e, "Could not read the selected file"))?;

        // the browser sets the multipart boundary itself
        let request = Request::static_post(&self.base_url, routes().api.upload).body(body);
        self.send_json(request).await
    }
}
