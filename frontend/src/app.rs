use crate::components::WithToasts;
use crate::conf::ConfCtx;
use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub conf: ConfCtx,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    html! {
        <ContextProvider<ConfCtx> context={props.conf.clone()}>
            <WithToasts>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </WithToasts>
        </ContextProvider<ConfCtx>>
    }
}
