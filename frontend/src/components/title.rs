use crate::components::imports::*;

// drawbacks:
//      evaluation order matters, and it's top to down
//      so set title only from top components
// advantages:
//      simple, available from anywhere, efficient dynamic updating
pub struct PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

impl Component for PageTitle {
    type Message = ();
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = &ctx.props().title;
        debug!(%title, "setting page title");
        gloo_utils::document().set_title(title);
        html! {}
    }
}
