mod backend;
mod config;
mod status;

use yew::prelude::*;

use crate::config::Config;
use crate::status::StatusView;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Config,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <div class="App">
            <header class="App-header">
                <StatusView config={props.config.clone()} />
            </header>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = Config::from_build_env();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
