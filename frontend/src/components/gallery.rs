use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="lightbox" onclick={on_close}>
            <img src={props.image.clone()} alt="Zoom" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ZoomGalleryProps {
    pub images: &'static [&'static str],
    pub alt_prefix: AttrValue,
}

/// Square thumbnails; clicking one opens it full screen.
#[function_component(ZoomGallery)]
pub fn zoom_gallery(props: &ZoomGalleryProps) -> Html {
    let selected = use_state(|| None::<&'static str>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <>
            <div class="zoom-gallery">
                { for props.images.iter().enumerate().map(|(i, &image)| {
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(image)))
                    };
                    html! {
                        <div class="zoom-thumb" {onclick}>
                            <img src={image} alt={format!("{} {}", props.alt_prefix, i + 1)} />
                        </div>
                    }
                }) }
            </div>
            if let Some(image) = *selected {
                <Lightbox image={image} on_close={close} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageGridProps {
    pub images: &'static [&'static str],
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageGrid)]
pub fn image_grid(props: &ImageGridProps) -> Html {
    html! {
        <div class={classes!("image-grid", props.class.clone())}>
            { for props.images.iter().map(|&image| html! {
                <div class="image-grid-item">
                    <img src={image} alt={props.alt.clone()} loading="lazy" />
                </div>
            }) }
        </div>
    }
}
