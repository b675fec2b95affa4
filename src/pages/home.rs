use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::dom::add_class;
use crate::dom::page::use_page_effects;
use crate::engine::profile::PageEffects;
use crate::Route;

/// Hero button entrance: fade in almost at once, then start floating once
/// the fade has played out.
pub const CTA_FADE_IN_MS: u32 = 100;
pub const CTA_PULSE_MS: u32 = 2000;

fn start_cta_sequence(button: HtmlElement) -> [Timeout; 2] {
    let fading = button.clone();
    let fade_in = Timeout::new(CTA_FADE_IN_MS, move || {
        add_class(&fading, "fade-in-complete");
    });
    let pulse = Timeout::new(CTA_PULSE_MS, move || {
        if button.style().set_property("transition", "none").is_err() {
            debug!("could not clear hero button transition");
        }
        add_class(&button, "pulse-animation");
        debug!("hero button pulsing");
    });
    [fade_in, pulse]
}

struct Stat {
    count: u32,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { count: 25, label: "Years of Experience" },
    Stat { count: 1200, label: "Projects Delivered" },
    Stat { count: 350, label: "Industrial Clients" },
    Stat { count: 40, label: "Skilled Technicians" },
];

struct Highlight {
    title: &'static str,
    text: &'static str,
    reveal: &'static str,
}

const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "Brush Kart Manufacturing",
        text: "Road sweeper brush karts built in-house to the exact fit of your machine.",
        reveal: "fade-in-left",
    },
    Highlight {
        title: "Hydraulic Systems",
        text: "Cylinders, pumps and power packs repaired, rebuilt and tested under load.",
        reveal: "fade-in-up",
    },
    Highlight {
        title: "Fabrication & Welding",
        text: "Structural steel, stainless and aluminium work for plants and workshops.",
        reveal: "fade-in-up",
    },
    Highlight {
        title: "Machine Servicing",
        text: "Planned maintenance and breakdown support across the Emirates.",
        reveal: "fade-in-right",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let effects = PageEffects::home();
    let back_to_top = effects.back_to_top;
    use_page_effects(effects);
    let cta_ref = use_node_ref();

    {
        let cta_ref = cta_ref.clone();
        use_effect_with_deps(
            move |_| {
                let timers = cta_ref
                    .cast::<web_sys::Element>()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    .map(start_cta_sequence);
                move || drop(timers)
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section id="hero" class="hero-section">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1 class="slide-up">{"Precision Turning & Industrial Solutions"}</h1>
                    <p class="fade-in">{"Al Hayl Industrial Area, Fujairah. Serving the UAE since 1999."}</p>
                    <a href="#services" class="cta-button" ref={cta_ref}>{"Explore Our Services"}</a>
                </div>
                <div class="scroll-indicator">
                    <span></span>
                </div>
            </section>

            <section id="services" class="services-preview">
                <div id="services-bg" class="section-bg"></div>
                <h2 class="fade-in-up">{"What We Do"}</h2>
                <div class="highlight-grid">
                    {
                        HIGHLIGHTS.iter().map(|h| html! {
                            <div class={classes!("highlight-card", h.reveal)}>
                                <h3>{h.title}</h3>
                                <p>{h.text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="zoom-in">
                    <Link<Route> to={Route::Services} classes="secondary-button">
                        {"All Services"}
                    </Link<Route>>
                </div>
            </section>

            <section id="stats" class="stats-section">
                <div id="stats-bg" class="section-bg"></div>
                <div class="stats-grid">
                    {
                        STATS.iter().map(|stat| html! {
                            <div class="count-up pop-in">
                                <span class="stat-number" data-count={stat.count.to_string()}>{"0"}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="why-us">
                <div class="parallax-bg"></div>
                <div class="slide-in-left">
                    <h2>{"Built in Fujairah"}</h2>
                    <p>{"Every part is turned, milled and inspected in our own workshop, so lead times stay short and quality stays ours."}</p>
                </div>
                <div class="slide-in-right">
                    <Link<Route> to={Route::Contact} classes="secondary-button">
                        {"Request a Quote"}
                    </Link<Route>>
                </div>
            </section>

            <BackToTop variant={back_to_top} />

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #0c1624 url('/static/images/hero.jpg') center / cover no-repeat;
                    overflow: hidden;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(12, 22, 36, 0.45);
                    transition: background 0.5s ease;
                }
                .hero-overlay.scrolled {
                    background: rgba(12, 22, 36, 0.75);
                }
                .hero-content {
                    position: relative;
                    text-align: center;
                    color: #fff;
                    transition: transform 0.5s ease, opacity 0.5s ease;
                }
                .hero-content.scrolled {
                    transform: translateY(-20px);
                    opacity: 0.85;
                }
                .cta-button {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 50px;
                    background: #f5a623;
                    color: #0c1624;
                    font-weight: 600;
                    text-decoration: none;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .cta-button.fade-in-complete {
                    opacity: 1;
                    transform: translateY(0);
                }
                .cta-button.pulse-animation {
                    animation: float-pulse 3s ease-in-out infinite;
                }
                @keyframes float-pulse {
                    0%, 100% { transform: translateY(0); box-shadow: 0 4px 15px rgba(245, 166, 35, 0.4); }
                    50% { transform: translateY(-6px); box-shadow: 0 10px 25px rgba(245, 166, 35, 0.6); }
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transition: opacity 0.3s ease;
                }
                .scroll-indicator.hidden {
                    opacity: 0;
                }
                .services-preview,
                .stats-section,
                .why-us {
                    position: relative;
                    padding: 6rem 2rem;
                    overflow: hidden;
                }
                .section-bg,
                .parallax-bg {
                    position: absolute;
                    inset: -20% 0;
                    z-index: -1;
                    background-size: cover;
                }
                .highlight-grid,
                .stats-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #f5a623;
                }
                .fade-in, .slide-up, .fade-in-up, .fade-in-left, .fade-in-right,
                .zoom-in, .pop-in, .slide-in-left, .slide-in-right {
                    opacity: 0;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .slide-up, .fade-in-up { transform: translateY(40px); }
                .fade-in-left, .slide-in-left { transform: translateX(-40px); }
                .fade-in-right, .slide-in-right { transform: translateX(40px); }
                .zoom-in { transform: scale(0.9); }
                .pop-in { transform: scale(0.8); }
                .visible {
                    opacity: 1;
                    transform: none;
                }
                "#}
            </style>
        </div>
    }
}
