mod components;
mod fx;
mod model;
mod rsvp;
mod storage;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
