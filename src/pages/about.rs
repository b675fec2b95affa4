use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::lazy_image::LazyImage;
use crate::components::tilt::TiltCard;
use crate::dom::page::use_page_effects;
use crate::engine::profile::PageEffects;

struct Counter {
    target: u32,
    suffix: &'static str,
    duration_ms: Option<u32>,
    label: &'static str,
}

const COUNTERS: [Counter; 4] = [
    Counter { target: 25, suffix: "+", duration_ms: None, label: "Years in Fujairah" },
    Counter { target: 1200, suffix: "+", duration_ms: None, label: "Jobs Completed" },
    Counter { target: 98, suffix: "%", duration_ms: Some(2500), label: "Repeat Customers" },
    Counter { target: 24, suffix: "/7", duration_ms: Some(1500), label: "Breakdown Support" },
];

/// Delay before the page fades in after mounting.
pub const PAGE_FADE_IN_MS: u32 = 100;

pub fn page_classes(shown: bool) -> Classes {
    classes!("about-page", shown.then_some("page-shown"))
}

const FACILITIES: [(&str, &str, &str); 3] = [
    (
        "CNC Turning",
        "Lathes up to 3 m between centres for shafts, rollers and pins.",
        "/static/images/about/cnc.jpg",
    ),
    (
        "Hydraulic Test Bench",
        "Pressure testing up to 350 bar before anything leaves the shop.",
        "/static/images/about/test-bench.jpg",
    ),
    (
        "Fabrication Bay",
        "MIG, TIG and arc welding with overhead cranes for heavy assemblies.",
        "/static/images/about/fabrication.jpg",
    ),
];

const TEAM: [(&str, &str); 3] = [
    ("Workshop", "Machinists and welders with decades on the tools."),
    ("Field Service", "Mobile crews for on-site repairs across the Emirates."),
    ("Engineering", "Reverse engineering and drawings for parts no longer made."),
];

#[function_component(About)]
pub fn about() -> Html {
    let effects = PageEffects::about();
    let back_to_top = effects.back_to_top;
    use_page_effects(effects);
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let fade_in = Timeout::new(PAGE_FADE_IN_MS, move || shown.set(true));
                move || drop(fade_in)
            },
            (),
        );
    }

    html! {
        <div class={page_classes(*shown)}>
            <section class="parallax-section about-hero" data-speed="0.4">
                <div class="parallax-bg"></div>
                <div class="about-hero-content">
                    <h1>{"About Al Shamil Turning"}</h1>
                    <p>{"A family workshop that grew into one of Fujairah's trusted industrial partners."}</p>
                </div>
            </section>

            <section class="story">
                <div class="slide-in-left">
                    <h2>{"Our Story"}</h2>
                    <p>{"We started with a single lathe in Al Hayl Industrial Area. Today we turn, fabricate and service equipment for municipalities, quarries and contractors across the UAE."}</p>
                </div>
                <div class="slide-in-right">
                    <h2>{"Our Promise"}</h2>
                    <p>{"Honest quotes, realistic lead times and parts that fit the first time."}</p>
                </div>
            </section>

            <section class="counters">
                {
                    COUNTERS.iter().map(|c| html! {
                        <div class="counter-item">
                            <span
                                class="stat-number"
                                data-target={c.target.to_string()}
                                data-suffix={c.suffix}
                                data-duration={c.duration_ms.map(|ms| ms.to_string())}
                            >
                                {"0"}
                            </span>
                            <span class="stat-label">{c.label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="parallax-section facilities" data-speed="0.3">
                <div class="parallax-bg"></div>
                <h2>{"Our Facilities"}</h2>
                <div class="facility-grid">
                    {
                        FACILITIES.iter().map(|(title, text, image)| html! {
                            <div class="facility-item">
                                <LazyImage src={*image} alt={*title} />
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="team">
                <h2>{"Our People"}</h2>
                <div class="team-grid">
                    {
                        TEAM.iter().map(|(title, text)| html! {
                            <TiltCard classes={classes!("team-member", "card")}>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </TiltCard>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <BackToTop variant={back_to_top} />

            <style>
                {r#"
                .about-page {
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .about-page.page-shown {
                    opacity: 1;
                }
                .lazy-image {
                    width: 100%;
                    border-radius: 8px;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .lazy-image.loaded {
                    opacity: 1;
                }
                .parallax-section {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 2rem;
                }
                .parallax-section .parallax-bg {
                    position: absolute;
                    inset: -30% 0;
                    z-index: -1;
                    background: #0c1624 url('/static/images/workshop.jpg') center / cover;
                    will-change: transform;
                }
                .story,
                .counters,
                .team {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }
                .counters,
                .facility-grid,
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .stat-number {
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: #f5a623;
                }
                .slide-in-left,
                .slide-in-right,
                .counter-item,
                .facility-item,
                .team-member {
                    opacity: 0;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .slide-in-left { transform: translateX(-50px); }
                .slide-in-right { transform: translateX(50px); }
                .counter-item,
                .facility-item,
                .team-member { transform: translateY(30px); }
                .visible {
                    opacity: 1;
                    transform: none;
                }
                .team-member {
                    padding: 2rem;
                    border-radius: 12px;
                    background: #fff;
                    box-shadow: 0 4px 20px rgba(12, 22, 36, 0.08);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_hidden_until_the_fade_in() {
        let hidden = page_classes(false);
        assert!(hidden.contains("about-page"));
        assert!(!hidden.contains("page-shown"));
        assert!(page_classes(true).contains("page-shown"));
    }
}
