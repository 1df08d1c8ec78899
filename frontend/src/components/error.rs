use crate::components::imports::*;
use crate::components::PageTitle;

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub msg: AttrValue,
    pub code: u32,
}

#[styled_component]
pub fn ErrorPage(props: &ErrorProps) -> Html {
    let ErrorProps { msg, code } = props;

    let global_style = css! {"padding: 40px;"};

    html! {
        <div class={css!{"font-size: 40px;"}}>
            <Global css={global_style}/>
            <PageTitle title={code.to_string()}/>
            <div class={css!{"color:#ff5050;"}}>{ code }</div>
            { msg }
            <div class={css!{"font-size: 20px; margin-top: 20px;"}}>
                <Link<Route> to={Route::DigitalLibrary}>{ "Back to the digital library" }</Link<Route>>
            </div>
        </div>
    }
}
