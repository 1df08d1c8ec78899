use crate::components::imports::*;
use crate::components::{LoadingBox, PageTitle};
use crate::library::{
    DraftField, FormError, FormMode, LoadOutcome, Notify, Phase, RequestFailure, ResourceForm,
    UploadOutcome, UploadTarget,
};

use web_sys::File;

/// Create and edit screen of a digital library resource.
pub struct ResourceEditor {
    form: ResourceForm,
    toasts: ToastCtxSub,
}

pub enum Msg {
    ToastContextUpdate(ToastCtx),
    Loaded(LoadOutcome),
    RetryLoad,
    FieldChanged(DraftField, String),
    FileSelected(UploadTarget, File),
    Uploaded(UploadOutcome),
    Submit,
    Submitted(Result<(), RequestFailure>),
    Nothing,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: FormMode,
}

impl ResourceEditor {
    fn heading(&self) -> &'static str {
        match self.form.mode() {
            FormMode::Create => "Add Digital Library Resource",
            FormMode::Edit { .. } => "Edit Digital Library Resource",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self.form.mode() {
            FormMode::Create => "Add Resource",
            FormMode::Edit { .. } => "Update Resource",
        }
    }

    fn load(&mut self, ctx: &Context<Self>) {
        if let Some(request) = self.form.begin_load() {
            let api = library_api(ctx);
            ctx.link()
                .send_future(async move { Msg::Loaded(request.send(&api).await) });
        }
    }

    fn labeled(field: DraftField, controls: Html) -> Html {
        let group_classes = css!(
            "
            margin-bottom: 20px;

            label {
                display: block;
                font-weight: bold;
                margin-bottom: 8px;
            }

            input, textarea {
                display: block;
                width: 100%;
                box-sizing: border-box;
                padding: 6px 12px;
                margin-bottom: 8px;
            }
        "
        );

        html! {
            <div class={group_classes}>
                <label for={field.key()}>{ field.label() }</label>
                { controls }
            </div>
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: DraftField,
        input_type: &'static str,
        placeholder: Option<&'static str>,
    ) -> Html {
        let oninput = ctx.link().callback(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            Msg::FieldChanged(field, input.value())
        });

        html! {
            <input id={field.key()} name={field.key()} type={input_type} required=true
                {placeholder} {oninput}
                value={ self.form.value(field).to_owned() }
            />
        }
    }

    fn description_input(&self, ctx: &Context<Self>) -> Html {
        let field = DraftField::Description;
        let oninput = ctx.link().callback(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            Msg::FieldChanged(field, input.value())
        });

        html! {
            <textarea id={field.key()} name={field.key()} rows="3" required=true {oninput}
                value={ self.form.value(field).to_owned() }
            />
        }
    }

    // url typed by hand, or filled by uploading a file
    fn upload_input(&self, ctx: &Context<Self>, target: UploadTarget, placeholder: &'static str) -> Html {
        let field = target.field();
        let onchange = ctx.link().callback(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            match input.files().and_then(|files| files.get(0)) {
                Some(file) => Msg::FileSelected(target, file),
                None => Msg::Nothing,
            }
        });

        let loading = if self.form.is_uploading(target) {
            html! { <LoadingBox/> }
        } else {
            html! {}
        };

        html! {
            <>
                { self.text_input(ctx, field, "text", Some(placeholder)) }
                <input type="file" name={format!("{}Upload", field.key())} {onchange}/>
                { loading }
            </>
        }
    }

    fn form_view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        let submitting = self.form.is_submitting();
        let submit_loading = if submitting {
            html! { <LoadingBox/> }
        } else {
            html! {}
        };

        html! {
            <form {onsubmit}>
                { Self::labeled(DraftField::Title, self.text_input(ctx, DraftField::Title, "text", None)) }
                { Self::labeled(DraftField::Description, self.description_input(ctx)) }
                { Self::labeled(DraftField::Author, self.text_input(ctx, DraftField::Author, "text", None)) }
                { Self::labeled(DraftField::Image, self.upload_input(ctx, UploadTarget::Image, "Enter image URL")) }
                { Self::labeled(DraftField::ResourceFile, self.upload_input(ctx, UploadTarget::ResourceFile, "Enter file URL")) }
                { Self::labeled(DraftField::DatePublished, self.text_input(ctx, DraftField::DatePublished, "date", None)) }

                <div>
                    <button type="submit" disabled={submitting}>{ self.submit_label() }</button>
                    { submit_loading }
                </div>
            </form>
        }
    }

    fn load_failed_view(&self, ctx: &Context<Self>, message: &str) -> Html {
        let onclick = ctx.link().callback(|_| Msg::RetryLoad);

        html! {
            <div>
                <p class={css!("color: #c62828;")}>{ message.to_owned() }</p>
                <button {onclick}>{ "Retry" }</button>
                <Link<Route> to={Route::DigitalLibrary}>{ "Back to library" }</Link<Route>>
            </div>
        }
    }
}

impl Component for ResourceEditor {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ResourceForm::new(ctx.props().mode.clone()),
            toasts: ToastCtxSub::subscribe(ctx, Self::Message::ToastContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page_classes = css!(
            "
            max-width: 700px;
            margin: 0 auto;
            padding: 20px;
        "
        );

        let body = match self.form.phase() {
            Phase::Loading => html! { <LoadingBox/> },
            Phase::LoadFailed { message } => self.load_failed_view(ctx, message),
            Phase::Ready | Phase::Submitting | Phase::Saved => self.form_view(ctx),
        };

        html! {
            <div class={page_classes}>
                <PageTitle title={self.heading()}/>
                <h1>{ self.heading() }</h1>
                { body }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.load(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let mode = &ctx.props().mode;
        if self.form.mode() != mode {
            debug!(?mode, "editor mode changed");
            self.form = ResourceForm::new(mode.clone());
            self.load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToastContextUpdate(toasts) => {
                self.toasts.set(toasts);
                false
            }
            Self::Message::Loaded(outcome) => {
                self.form.finish_load(outcome, self.toasts.as_ref());
                true
            }
            Self::Message::RetryLoad => {
                self.load(ctx);
                true
            }
            Self::Message::FieldChanged(field, value) => self.form.set_field(field, value),
            Self::Message::FileSelected(target, file) => {
                let request = self.form.begin_upload(target, file);
                let api = library_api(ctx);
                ctx.link()
                    .send_future(async move { Msg::Uploaded(request.send(&api).await) });
                true
            }
            Self::Message::Uploaded(outcome) => {
                self.form.finish_upload(outcome, self.toasts.as_ref());
                true
            }
            Self::Message::Submit => {
                match self.form.begin_submit() {
                    Ok(request) => {
                        let api = library_api(ctx);
                        ctx.link()
                            .send_future(async move { Msg::Submitted(request.send(&api).await) });
                    }
                    Err(e @ FormError::Invalid(_)) => self.toasts.as_ref().error(&e.to_string()),
                    Err(e) => debug!(error = %e, "submit ignored"),
                }
                true
            }
            Self::Message::Submitted(result) => {
                let navigator = ctx
                    .link()
                    .navigator()
                    .expect("ResourceEditor is rendered inside a router");
                self.form
                    .finish_submit(result, self.toasts.as_ref(), &navigator);
                true
            }
            Self::Message::Nothing => false,
        }
    }
}
