use crate::router::Route;

use yew::prelude::*;
use yew_router::prelude::Redirect;

pub fn switch(routes: Route) -> Html {
    use crate::components::library::{ResourceEditor, ResourceList};
    use crate::components::*;
    use crate::library::FormMode;

    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::DigitalLibrary}/> },
        Route::DigitalLibrary => html! {<WithSession><ResourceList/></WithSession>},
        Route::CreateResource => html! {
            <WithSession><ResourceEditor mode={FormMode::Create}/></WithSession>
        },
        Route::EditResource { id } => html! {
            <WithSession><ResourceEditor mode={FormMode::Edit { id }}/></WithSession>
        },
        Route::Unauthorized => html! {
            <ErrorPage code={401} msg="Sign in as an administrator to manage the digital library"/>
        },
        Route::NotFound => html! {<ErrorPage code={404} msg="Page not found"/>},
    }
}
