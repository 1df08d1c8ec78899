use crate::components::imports::*;

#[styled_component]
pub fn LoadingBox() -> Html {
    let css = css! {"
        display: inline-block;
        margin: 0 10px;
        opacity: 0.7;
        font-style: italic;
    "};

    html! {<span class={css} role="status">{ "Loading..." }</span>}
}
