use yew::prelude::*;

/// Lazy images stay transparent until the browser has them, then fade in.
pub fn image_classes(loaded: bool) -> Classes {
    classes!("lazy-image", loaded.then_some("loaded"))
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let loaded = use_state_eq(|| false);

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <img
            class={image_classes(*loaded)}
            src={props.src.clone()}
            alt={props.alt.clone()}
            loading="lazy"
            {onload}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loaded_images_are_shown() {
        let waiting = image_classes(false);
        assert!(waiting.contains("lazy-image"));
        assert!(!waiting.contains("loaded"));

        let ready = image_classes(true);
        assert!(ready.contains("lazy-image"));
        assert!(ready.contains("loaded"));
    }
}
