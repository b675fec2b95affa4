use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::faq::{Faq, FaqEntry};
use crate::dom::page::use_page_effects;
use crate::engine::profile::PageEffects;

const INFO: [(&str, &str, &str); 4] = [
    ("Visit Us", "AL Hayl Industrial Area, Behind National Hypermarket", "Fujairah, United Arab Emirates"),
    ("Call Us", "+971 50 579 7905", "Saturday to Thursday"),
    ("Email Us", "info@alshamilturning.com", "We reply within 24 hours"),
    ("Working Hours", "7:30 AM to 6:30 PM", "Friday closed"),
];

const SERVICE_ITEMS: [&str; 5] = [
    "Brush Kart Manufacturing",
    "Hydraulic System Solutions",
    "Industrial Fabrication & Welding",
    "Machine Servicing & Maintenance",
    "Technical Consultation",
];

const MAP_INFO: [(&str, &str); 3] = [
    ("From Fujairah City", "15 minutes via Sheikh Khalifa Road"),
    ("Landmark", "Behind National Hypermarket, Al Hayl"),
    ("Parking", "Truck access and loading bay on site"),
];

const GALLERY: [(&str, &str); 6] = [
    ("/static/images/gallery/lathe.jpg", "CNC turning"),
    ("/static/images/gallery/brush-kart.jpg", "Brush kart assembly"),
    ("/static/images/gallery/cylinder.jpg", "Hydraulic cylinder rebuild"),
    ("/static/images/gallery/welding.jpg", "Structural welding"),
    ("/static/images/gallery/shaft.jpg", "Drive shaft repair"),
    ("/static/images/gallery/workshop.jpg", "Our workshop"),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How quickly can you quote a job?",
            answer: "Most quotes go out the same day. Send drawings or photos with your message and we will come back with a price and lead time.",
        },
        FaqEntry {
            question: "Do you work on site?",
            answer: "Yes. Our field crew handles hydraulic and welding repairs across the Emirates when equipment cannot come to the workshop.",
        },
        FaqEntry {
            question: "Can you make a part that is no longer available?",
            answer: "Usually. We reverse engineer worn or broken parts, prepare drawings and machine replacements from suitable material.",
        },
        FaqEntry {
            question: "Do you offer maintenance contracts?",
            answer: "We offer planned maintenance for plants and fleets, with priority call-outs for contract customers.",
        },
    ]
}

/// Overlay opacity cycles shown → hidden → shown; untouched it follows CSS.
pub fn next_overlay(current: Option<bool>) -> Option<bool> {
    Some(current != Some(true))
}

pub fn overlay_style(state: Option<bool>) -> Option<&'static str> {
    state.map(|shown| if shown { "opacity: 1;" } else { "opacity: 0;" })
}

/// While one service item is hovered the others fade back. The reveal owns the
/// item's own opacity, so the dim goes on its label.
pub fn dim_style(hovered: Option<usize>, index: usize) -> Option<&'static str> {
    match hovered {
        Some(h) if h != index => Some("opacity: 0.6;"),
        _ => None,
    }
}

#[function_component(ServiceList)]
fn service_list() -> Html {
    let hovered = use_state_eq(|| None::<usize>);

    html! {
        <aside class="service-list">
            <h3>{"What we can help with"}</h3>
            {
                SERVICE_ITEMS.iter().enumerate().map(|(index, item)| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <div class="service-item" {onmouseenter} {onmouseleave}>
                            <span class="service-label" style={dim_style(*hovered, index)}>{*item}</span>
                        </div>
                    }
                }).collect::<Html>()
            }
        </aside>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryItemProps {
    src: &'static str,
    caption: &'static str,
}

#[function_component(GalleryItem)]
fn gallery_item(props: &GalleryItemProps) -> Html {
    let overlay = use_state_eq(|| None::<bool>);

    let onclick = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(next_overlay(*overlay)))
    };

    html! {
        <div class="gallery-item" {onclick}>
            <img src={props.src} alt={props.caption} loading="lazy" />
            <div class="gallery-overlay" style={overlay_style(*overlay)}>
                <span>{props.caption}</span>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let effects = PageEffects::contact();
    let back_to_top = effects.back_to_top;
    use_page_effects(effects);

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Get in Touch"}</h1>
                <p>{"Tell us what you need and we will take it from there."}</p>
                <a href="#contact-form-section" class="hero-link">{"Send a message"}</a>
            </section>

            <section class="info-cards">
                {
                    INFO.iter().map(|(title, line, note)| html! {
                        <div class="info-card">
                            <h3>{*title}</h3>
                            <p>{*line}</p>
                            <small>{*note}</small>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section id="contact-form-section" class="form-section">
                <div class="form-wrapper">
                    <h2>{"Send Us a Message"}</h2>
                    <ContactForm />
                </div>
                <ServiceList />
            </section>

            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                <Faq entries={faq_entries()} />
            </section>

            <section class="map-section">
                <iframe
                    title="Al Shamil Turning location"
                    src="https://www.google.com/maps?q=Al+Hayl+Industrial+Area+Fujairah&output=embed"
                    loading="lazy"
                />
                <div class="map-info">
                    {
                        MAP_INFO.iter().map(|(title, text)| html! {
                            <div class="map-info-item">
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="gallery-section">
                <h2>{"Our Work"}</h2>
                <div class="gallery-grid">
                    {
                        GALLERY.iter().map(|(src, caption)| html! {
                            <GalleryItem src={*src} caption={*caption} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <BackToTop variant={back_to_top} />

            <style>
                {r#"
                .contact-hero {
                    min-height: 50vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    background: #0c1624 url('/static/images/contact-hero.jpg') center / cover;
                }
                .info-cards,
                .gallery-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .form-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.2rem;
                }
                .form-group label {
                    color: #6b7785;
                    transition: color 0.3s ease;
                }
                .form-group.focused label,
                .form-group.has-value label {
                    color: #4a8aba;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.8rem 1rem;
                    border: 1px solid #d6dde4;
                    border-radius: 8px;
                }
                .form-group.focused input,
                .form-group.focused select,
                .form-group.focused textarea {
                    border-color: #4a8aba;
                }
                .submit-btn:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .form-message {
                    margin-top: 1rem;
                    padding: 1rem;
                    border-radius: 8px;
                }
                .form-message.success {
                    color: #1e6b3a;
                    background: #e3f6ea;
                }
                .form-message.error {
                    color: #8a1f1f;
                    background: #fbe7e7;
                }
                .service-item {
                    padding: 0.75rem 0;
                    border-bottom: 1px solid #e5e9f0;
                    cursor: default;
                }
                .service-label {
                    display: block;
                    transition: opacity 0.3s ease;
                }
                .faq-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    padding: 1.2rem;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                }
                .map-section {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    padding: 4rem 2rem;
                }
                .map-section iframe {
                    width: 100%;
                    min-height: 360px;
                    border: 0;
                }
                .gallery-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 12px;
                    cursor: pointer;
                }
                .gallery-item img {
                    width: 100%;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .gallery-item img.loaded {
                    opacity: 1;
                }
                .gallery-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    padding: 1rem;
                    color: #fff;
                    background: linear-gradient(transparent, rgba(12, 22, 36, 0.8));
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-item:hover .gallery-overlay {
                    opacity: 1;
                }
                @media (max-width: 768px) {
                    .form-section,
                    .map-section {
                        grid-template-columns: 1fr;
                    }
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
    fn overlay_toggles_from_untouched() {
        let first = next_overlay(None);
        assert_eq!(first, Some(true));
        let second = next_overlay(first);
        assert_eq!(second, Some(false));
        assert_eq!(next_overlay(second), Some(true));
    }

    #[test]
    fn hovering_a_service_dims_the_rest() {
        assert_eq!(dim_style(None, 0), None);
        assert_eq!(dim_style(Some(2), 2), None);
        assert_eq!(dim_style(Some(2), 0), Some("opacity: 0.6;"));
        assert_eq!(dim_style(Some(2), 4), Some("opacity: 0.6;"));
    }

    #[test]
    fn untouched_overlay_has_no_inline_style() {
        assert_eq!(overlay_style(None), None);
        assert_eq!(overlay_style(Some(true)), Some("opacity: 1;"));
        assert_eq!(overlay_style(Some(false)), Some("opacity: 0;"));
    }
}
