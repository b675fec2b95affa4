use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::ripple::RippleLink;
use crate::dom::page::use_page_effects;
use crate::engine::profile::PageEffects;
use crate::Route;

struct ServiceCard {
    title: &'static str,
    text: &'static str,
    points: [&'static str; 3],
}

const SERVICES: [ServiceCard; 5] = [
    ServiceCard {
        title: "Brush Kart Manufacturing",
        text: "Replacement brush karts for road sweepers, built to match the original mounting.",
        points: ["Gutter and main brush karts", "Custom bristle patterns", "Short lead times"],
    },
    ServiceCard {
        title: "Hydraulic System Solutions",
        text: "Diagnosis, rebuild and testing of hydraulic components for heavy equipment.",
        points: ["Cylinder reseal and rechrome", "Pump and motor overhaul", "Hose assembly"],
    },
    ServiceCard {
        title: "Industrial Fabrication & Welding",
        text: "Structures, frames and repairs in mild steel, stainless and aluminium.",
        points: ["MIG, TIG and arc welding", "On-site repairs", "Plate rolling"],
    },
    ServiceCard {
        title: "Machine Servicing & Maintenance",
        text: "Planned maintenance contracts that keep plants and fleets running.",
        points: ["Preventive schedules", "Breakdown call-outs", "Spare parts sourcing"],
    },
    ServiceCard {
        title: "Technical Consultation",
        text: "Second opinions, reverse engineering and drawings for discontinued parts.",
        points: ["Failure analysis", "Part redesign", "Material selection"],
    },
];

const STATS: [(u32, &str, &str); 3] = [
    (1200, "+", "Parts Machined Yearly"),
    (48, "h", "Typical Turnaround"),
    (100, "%", "Pressure Tested"),
];

const VIDEOS: [(&str, &str); 2] = [
    ("/static/videos/lathe.mp4", "Turning a 2 m drive shaft"),
    ("/static/videos/hydraulic.mp4", "Testing a rebuilt cylinder"),
];

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    src: &'static str,
    caption: &'static str,
}

/// Hides the caption overlay while the video plays.
#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let playing = use_state_eq(|| false);

    let set_playing = |value: bool| {
        let playing = playing.clone();
        Callback::from(move |_: Event| playing.set(value))
    };

    html! {
        <div class="video-card fade-in-up">
            <video src={props.src} controls={true} preload="metadata"
                onplay={set_playing(true)}
                onpause={set_playing(false)}
                onended={set_playing(false)}
            />
            <div class="video-overlay" style={if *playing { "opacity: 0;" } else { "opacity: 1;" }}>
                <span>{props.caption}</span>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let effects = PageEffects::services();
    let back_to_top = effects.back_to_top;
    use_page_effects(effects);

    html! {
        <div class="services-page">
            <section class="services-hero">
                <div class="services-hero-content">
                    <h1 class="fade-in-up">{"Our Services"}</h1>
                    <p class="fade-in-up">{"From a single shaft to a full hydraulic overhaul."}</p>
                </div>
            </section>

            <section class="service-list">
                {
                    SERVICES.iter().map(|s| html! {
                        <article class="service-card">
                            <h3>{s.title}</h3>
                            <p>{s.text}</p>
                            <ul>
                                { for s.points.iter().map(|p| html! { <li>{*p}</li> }) }
                            </ul>
                        </article>
                    }).collect::<Html>()
                }
            </section>

            <section class="service-stats">
                {
                    STATS.iter().map(|(target, suffix, label)| html! {
                        <div class="stat">
                            <span class="stat-number" data-target={target.to_string()} data-suffix={*suffix}>
                                {"0"}
                            </span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="video-gallery">
                <h2 class="fade-in-up">{"In the Workshop"}</h2>
                <div class="video-grid">
                    {
                        VIDEOS.iter().map(|(src, caption)| html! {
                            <VideoCard src={*src} caption={*caption} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="cta-section">
                <h2 class="fade-in-up">{"Have a job for us?"}</h2>
                <RippleLink to={Route::Contact} classes="btn-primary">
                    {"Get a Quote"}
                </RippleLink>
            </section>

            <BackToTop variant={back_to_top} />

            <style>
                {r#"
                .services-hero {
                    min-height: 60vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    background: #0c1624 url('/static/images/services-hero.jpg') center / cover no-repeat;
                }
                .service-list,
                .service-stats,
                .video-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    padding: 2rem;
                    border-radius: 12px;
                    background: #fff;
                    box-shadow: 0 4px 20px rgba(12, 22, 36, 0.08);
                }
                @keyframes slideInUp {
                    from {
                        opacity: 0;
                        transform: translateY(30px) scale(0.95);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0) scale(1);
                    }
                }
                .stat-number {
                    font-size: 2.6rem;
                    font-weight: 700;
                    color: #26b6cb;
                }
                .video-card {
                    position: relative;
                }
                .video-card video {
                    width: 100%;
                    border-radius: 12px;
                }
                .video-overlay {
                    position: absolute;
                    inset: auto 0 0 0;
                    padding: 1rem;
                    color: #fff;
                    background: linear-gradient(transparent, rgba(12, 22, 36, 0.8));
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .fade-in-up {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in-up.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .cta-section {
                    padding: 5rem 2rem;
                    text-align: center;
                }
                .btn-primary {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 50px;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(135deg, #4a8aba, #26b6cb);
                }
                "#}
            </style>
        </div>
    }
}
