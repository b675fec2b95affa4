use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::dom::page::use_scroll_frame;
use crate::engine::chrome::ChromeThresholds;
use crate::engine::frame::HandlerControl;
use crate::Route;

const LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Contact, "Contact"),
];

/// Class list for a nav link: `active` when it points at the current route.
pub fn link_classes(target: &Route, current: Option<&Route>) -> Classes {
    classes!("nav-link", (current == Some(target)).then(|| "active"))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        let thresholds = ChromeThresholds::default();
        use_scroll_frame(move |snapshot| {
            is_scrolled.set(thresholds.evaluate(snapshot.scroll_y).nav_scrolled);
            HandlerControl::Keep
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Al Shamil Turning"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        LINKS.iter().map(|(target, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={target.clone()} classes={link_classes(target, route.as_ref())}>
                                    {*label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.8rem 0;
                    background: rgba(12, 22, 36, 0.95);
                    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.2);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    color: #fff;
                    font-size: 1.4rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #f5a623;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 25px;
                    height: 3px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem 2rem;
                        background: rgba(12, 22, 36, 0.98);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_route_is_active() {
        let classes = link_classes(&Route::About, Some(&Route::About));
        assert!(classes.contains("active"));
        assert!(classes.contains("nav-link"));

        assert!(!link_classes(&Route::Home, Some(&Route::About)).contains("active"));
        assert!(!link_classes(&Route::Home, None).contains("active"));
    }
}
