use leptos::prelude::*;

/// Renders an [`icondata`] icon as inline SVG sized to the surrounding text.
#[component]
pub fn Icon(
    /// The icon to draw.
    icon: icondata::Icon,
    /// Classes of the `<svg>` element.
    #[prop(optional, into)]
    class: Signal<String>,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=move || class.get()
            style=icon.style
            viewBox=icon.view_box
            width="1em"
            height="1em"
            fill=icon.fill.unwrap_or("currentColor")
            stroke=icon.stroke
            stroke-width=icon.stroke_width
            stroke-linecap=icon.stroke_linecap
            stroke-linejoin=icon.stroke_linejoin
            aria-hidden="true"
            inner_html=icon.data
        ></svg>
    }
}
