#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub home: Home,
    pub unauthorized: Unauthorized,
    pub digital_library: DigitalLibrary,
    pub admin: Admin,
}

#[derive(Default)]
pub struct Admin {
    pub create_resource: CreateResource,
}

impl Admin {
    pub fn edit_resource(&self, id: impl AsRef<str>) -> EditResource {
        EditResource {
            postfix: format!(
                "/admin/digital-library/{}/edit",
                urlencoding::encode(id.as_ref())
            ),
        }
    }
}

#[derive(Default, Get)]
pub struct Home;

impl Url for Home {
    fn postfix(&self) -> &str {
        "/"
    }
}

#[derive(Default, Get)]
pub struct Unauthorized;

impl Url for Unauthorized {
    fn postfix(&self) -> &str {
        "/401"
    }
}

// resource listing, where the editors return after saving
#[derive(Default, Get)]
pub struct DigitalLibrary;

impl Url for DigitalLibrary {
    fn postfix(&self) -> &str {
        "/digital-library"
    }
}

#[derive(Default, Get)]
pub struct CreateResource;

impl Url for CreateResource {
    fn postfix(&self) -> &str {
        "/admin/digital-library/create"
    }
}

#[derive(Get)]
pub struct EditResource {
    postfix: String,
}

impl Url for EditResource {
    fn postfix(&self) -> &str {
        &self.postfix
    }
}
