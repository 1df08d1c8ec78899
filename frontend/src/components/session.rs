use crate::components::imports::*;
use crate::components::LoadingBox;
use crate::library::{Session, SessionError};

pub type SessionCtx = Rc<Session>;

/// Renders its children only once a session is available,
/// sends the visitor to the unauthorized page otherwise.
pub struct WithSession {
    session: SessionState,
}

enum SessionState {
    Unloaded,
    Loaded(SessionCtx),
    Rejected,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Debug)]
pub enum Msg {
    SessionLoaded(Session),
    SessionError(SessionError),
}

impl Component for WithSession {
    type Message = Msg;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: SessionState::Unloaded,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session {
            SessionState::Unloaded => html! { <LoadingBox/> },
            SessionState::Loaded(session) => {
                html! {
                    <ContextProvider<SessionCtx> context={session.clone()}>
                        { ctx.props().children.clone() }
                    </ContextProvider<SessionCtx>>
                }
            }
            SessionState::Rejected => html! {},
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::SessionLoaded(session) => {
                debug!(user = %session.user().name, "session loaded");
                self.session = SessionState::Loaded(Rc::new(session));
                true
            }
            Self::Message::SessionError(e) => {
                match &e {
                    SessionError::Missing => info!("no session, redirecting"),
                    SessionError::Storage(source) => {
                        warn!(error = %e, %source, "session rejected, redirecting")
                    }
                }
                self.session = SessionState::Rejected;
                let navigator = ctx
                    .link()
                    .navigator()
                    .expect("WithSession is rendered inside a router");
                navigator.push(&Route::Unauthorized);
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let (conf, _) = ctx
                .link()
                .context::<ConfCtx>(Callback::noop())
                .expect("Conf context does not exist");

            ctx.link()
                .send_message(match Session::load(&conf.session.storage_key) {
                    Ok(session) => Self::Message::SessionLoaded(session),
                    Err(e) => Self::Message::SessionError(e),
                });
        }
    }
}
