// Notification sink of the admin screens.
//
// The provider owns the visible toasts, subscribers only get a handle
// that pushes new ones upstream.

use crate::components::imports::*;
use crate::library::Notify;

use gloo_timers::callback::Timeout;
use std::collections::HashMap;

const DEFAULT_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: AttrValue,
}

#[derive(derivative::Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct Toasts {
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    push: Callback<Toast>,
}

impl Toasts {
    fn emit(&self, kind: ToastKind, message: &str) {
        self.push.emit(Toast {
            kind,
            message: message.to_owned().into(),
        });
    }
}

impl Notify for Toasts {
    fn success(&self, message: &str) {
        self.emit(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.emit(ToastKind::Error, message);
    }
}

pub type ToastCtx = Rc<Toasts>;

pub struct ToastCtxSub {
    ctx: ToastCtx,
    // keep handle for component rerender after the provider changes
    _ctx_handle: ContextHandle<ToastCtx>,
}

impl AsRef<Toasts> for ToastCtxSub {
    fn as_ref(&self) -> &Toasts {
        &self.ctx
    }
}

impl ToastCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ToastCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Toast context does not exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ToastCtx) {
        self.ctx = ctx;
    }
}

pub struct WithToasts {
    toasts: ToastCtx,
    shown: Vec<(usize, Toast)>,
    next_id: usize,
    // dropping a timeout cancels it
    timers: HashMap<usize, Timeout>,
    timeout_ms: u32,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Debug)]
pub enum Msg {
    Push(Toast),
    Dismiss(usize),
}

impl Component for WithToasts {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let timeout_ms = ctx
            .link()
            .context::<ConfCtx>(Callback::noop())
            .map(|(conf, _)| conf.toasts.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            toasts: Rc::new(Toasts {
                push: ctx.link().callback(Msg::Push),
            }),
            shown: Vec::new(),
            next_id: 0,
            timers: HashMap::new(),
            timeout_ms,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let stack_style = css!(
            "
            position: fixed; top: 15px; right: 15px;
            display: flex; flex-direction: column;
            z-index: 1000;
            max-width: 400px;
        "
        );

        let toasts = self
            .shown
            .iter()
            .map(|(id, toast)| {
                let id = *id;
                let onclick = ctx.link().callback(move |_| Msg::Dismiss(id));
                let color = match toast.kind {
                    ToastKind::Success => "#2e7d32",
                    ToastKind::Error => "#c62828",
                };
                let toast_style = css!(
                    "
                    background-color: ${color}; color: white;
                    padding: 12px 20px; margin-bottom: 10px;
                    border-radius: 5px;
                    cursor: pointer;
                ",
                    color = color
                );

                html! {
                    <div key={id} {onclick} class={toast_style} role="alert">
                        { toast.message.clone() }
                    </div>
                }
            })
            .collect::<Html>();

        html! {
            <>
                <div class={stack_style}>{ toasts }</div>
                <ContextProvider<ToastCtx> context={self.toasts.clone()}>
                    { ctx.props().children.clone() }
                </ContextProvider<ToastCtx>>
            </>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::Push(toast) => {
                debug!(kind = ?toast.kind, message = %toast.message, "toast");
                let id = self.next_id;
                self.next_id += 1;

                let link = ctx.link().clone();
                let timer = Timeout::new(self.timeout_ms, move || {
                    link.send_message(Msg::Dismiss(id));
                });
                self.timers.insert(id, timer);
                self.shown.push((id, toast));
                true
            }
            Self::Message::Dismiss(id) => {
                self.timers.remove(&id);
                let before = self.shown.len();
                self.shown.retain(|(shown_id, _)| *shown_id != id);
                self.shown.len() != before
            }
        }
    }
}
