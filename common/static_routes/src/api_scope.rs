#[allow(unused_imports)]
use crate::primitives::{Get, Post, Put, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub upload: Upload,
    pub digital_library: DigitalLibrary,
}

#[derive(Default, Post)]
pub struct Upload;

impl Url for Upload {
    fn postfix(&self) -> &str {
        "/upload"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

// listing and creation share the collection path
#[derive(Default, Get, Post)]
pub struct DigitalLibrary;

impl DigitalLibrary {
    pub fn item(&self, id: impl AsRef<str>) -> DigitalLibraryItem {
        DigitalLibraryItem {
            postfix: format!("{}/{}", self.postfix(), urlencoding::encode(id.as_ref())),
        }
    }
}

impl Url for DigitalLibrary {
    fn postfix(&self) -> &str {
        "/digital-library"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Get, Put)]
pub struct DigitalLibraryItem {
    postfix: String,
}

impl Url for DigitalLibraryItem {
    fn postfix(&self) -> &str {
        &self.postfix
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}
