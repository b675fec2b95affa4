use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

pub const TILT_REST: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

const MAX_DEGREES: f64 = 10.0;

/// Leans the card toward the pointer position it was entered at.
pub fn tilt_transform(offset_x: f64, offset_y: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return TILT_REST.to_string();
    }
    // `+ 0.0` folds -0 into 0.
    let x_rotation = ((offset_y - height / 2.0) / height) * MAX_DEGREES + 0.0;
    let y_rotation = ((offset_x - width / 2.0) / width) * -MAX_DEGREES + 0.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
        x_rotation, y_rotation
    )
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub classes: Classes,
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let transform = use_state_eq(|| None::<String>);

    let onmouseenter = {
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = e.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
                return;
            };
            transform.set(Some(tilt_transform(
                e.offset_x() as f64,
                e.offset_y() as f64,
                card.offset_width() as f64,
                card.offset_height() as f64,
            )));
        })
    };
    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(Some(TILT_REST.to_string())))
    };

    let style = (*transform).as_ref().map(|t| format!("transform: {};", t));

    html! {
        <div class={props.classes.clone()} {style} {onmouseenter} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_the_card_does_not_rotate() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-10px)"
        );
    }

    #[test]
    fn corners_lean_five_degrees() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0),
            "perspective(1000px) rotateX(-5deg) rotateY(5deg) translateY(-10px)"
        );
        assert_eq!(
            tilt_transform(200.0, 100.0, 200.0, 100.0),
            "perspective(1000px) rotateX(5deg) rotateY(-5deg) translateY(-10px)"
        );
    }

    #[test]
    fn unmeasured_cards_stay_at_rest() {
        assert_eq!(tilt_transform(10.0, 10.0, 0.0, 0.0), TILT_REST);
    }
}
