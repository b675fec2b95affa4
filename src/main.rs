use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod engine;
mod contact;
mod dom;
mod components {
    pub mod nav;
    pub mod back_to_top;
    pub mod faq;
    pub mod contact_form;
    pub mod ripple;
    pub mod tilt;
    pub mod lazy_image;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod contact;
}

use components::nav::Nav;
use dom::frame::FrameLoop;
use pages::{
    home::Home,
    about::About,
    services::Services,
    contact::Contact,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about/")]
    About,
    #[at("/services/")]
    Services,
    #[at("/contact/")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Unknown route, sending home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let frame_loop = use_state(FrameLoop::attach);

    {
        let frame_loop = (*frame_loop).clone();
        use_effect_with_deps(move |_| move || frame_loop.detach(), ());
    }

    html! {
        <ContextProvider<FrameLoop> context={(*frame_loop).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<FrameLoop>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
