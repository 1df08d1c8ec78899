mod app;
mod components;
mod conf;
mod library;
mod router;
mod switch;
mod telemetry;

use std::rc::Rc;

fn main() {
    let conf = conf::Conf::load().expect("Failed to load configuration");
    telemetry::init(&conf.log.level);
    tracing::info!(api = %conf.api.base_url, "starting digital library admin");

    yew::Renderer::<app::App>::with_props(app::Props {
        conf: Rc::new(conf),
    })
    .render();
}
