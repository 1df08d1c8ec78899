pub use crate::conf::ConfCtx;
pub use crate::router::Route;

pub use std::rc::Rc;

pub use stylist::css;
pub use stylist::yew::{styled_component, Global};
pub use tracing::{debug, info, warn};
pub use web_sys::{HtmlInputElement, HtmlTextAreaElement};
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub use super::session::SessionCtx;
pub use super::toasts::{ToastCtx, ToastCtxSub};

use crate::library::HttpApi;

/// API client for the signed in administrator.
///
/// Only valid for components rendered below `WithSession`.
pub fn library_api<COMP: Component>(ctx: &Context<COMP>) -> HttpApi {
    let (conf, _) = ctx
        .link()
        .context::<ConfCtx>(Callback::noop())
        .expect("Conf context does not exist");
    let (session, _) = ctx
        .link()
        .context::<SessionCtx>(Callback::noop())
        .expect("Session context does not exist");

    HttpApi::new(&conf, session)
}
