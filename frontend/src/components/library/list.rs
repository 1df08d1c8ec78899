use crate::components::imports::*;
use crate::components::{LoadingBox, PageTitle};
use crate::library::{fetch_rows, ListingRow, Notify, RequestFailure};

pub struct ResourceList {
    resources: Resources,
    toasts: ToastCtxSub,
}

enum Resources {
    Loading,
    Loaded(Vec<ListingRow>),
    Failed,
}

pub enum Msg {
    ToastContextUpdate(ToastCtx),
    ResourcesLoaded(Result<Vec<ListingRow>, RequestFailure>),
}

impl ResourceList {
    fn resource_view(ctx: &Context<Self>, resource: &ListingRow) -> Html {
        let resource_classes = css!(
            "
            border: 2px solid #444;
            width: 800px;
            max-width: 90vw;
            margin-bottom: 20px;
            padding: 15px 30px;
            border-radius: 5px;
            "
        );

        let edit_button = match &resource.id {
            None => html! {},
            Some(id) => {
                let navigator = ctx
                    .link()
                    .navigator()
                    .expect("ResourceList is rendered inside a router");
                let id = id.clone();
                let onclick = Callback::from(move |_| {
                    navigator.push(&Route::EditResource { id: id.clone() });
                });

                html! {
                    <button {onclick}>{ "Edit" }</button>
                }
            }
        };

        html! {
            <div key={resource.id.clone().unwrap_or_else(|| resource.title.clone())} class={resource_classes}>
                <h2>{ &resource.title }</h2>
                <p>{ &resource.byline }</p>
                { edit_button }
            </div>
        }
    }
}

impl Component for ResourceList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            resources: Resources::Loading,
            toasts: ToastCtxSub::subscribe(ctx, Self::Message::ToastContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let wrapper_classes = css!(
            "
            display: flex;
            flex-direction: column;
            align-items: center;
        "
        );

        let resources = match &self.resources {
            Resources::Loading => html! { <LoadingBox/> },
            Resources::Failed => html! { <p>{ "Could not load the digital library" }</p> },
            Resources::Loaded(resources) if resources.is_empty() => {
                html! { <p>{ "No resources yet" }</p> }
            }
            Resources::Loaded(resources) => resources
                .iter()
                .map(|resource| Self::resource_view(ctx, resource))
                .collect::<Html>(),
        };

        html! {
            <>
                <PageTitle title="Digital Library"/>
                <div class={wrapper_classes}>
                    <h1>{ "Digital Library" }</h1>
                    <p>
                        <Link<Route> to={Route::CreateResource}>{ "Add resource" }</Link<Route>>
                    </p>
                    { resources }
                </div>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let api = library_api(ctx);
            ctx.link()
                .send_future(async move { Msg::ResourcesLoaded(fetch_rows(&api).await) });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToastContextUpdate(toasts) => {
                self.toasts.set(toasts);
                false
            }
            Self::Message::ResourcesLoaded(Ok(resources)) => {
                debug!(count = resources.len(), "resources loaded");
                self.resources = Resources::Loaded(resources);
                true
            }
            Self::Message::ResourcesLoaded(Err(failure)) => {
                self.toasts.as_ref().error(failure.message());
                self.resources = Resources::Failed;
                true
            }
        }
    }
}
