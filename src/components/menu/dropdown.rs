use desktop_menu_model::prelude::{NO_CATEGORIES, ProductCategories, SubItem};
use leptos::{ev::MouseEvent, prelude::*};

const PANEL_CLASS: &str = "absolute left-0 z-50 mt-0 w-56 bg-white rounded-md shadow-lg";

/// Stops the click from reaching the top-level label, then reports it.
fn link_click(on_select: Callback<()>) -> impl Fn(MouseEvent) + Clone + 'static {
    move |event: MouseEvent| {
        event.stop_propagation();
        on_select.run(());
    }
}

/// Dropdown of the catalog entry, listing the product categories.
#[component]
pub fn CategoryDropdown(
    /// Categories to list. Empty shows the placeholder.
    #[prop(into)]
    categories: Signal<ProductCategories>,
    /// Called after a category link was clicked.
    #[prop(into)]
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=PANEL_CLASS>
            <div class="py-1">
                {move || {
                    let categories = categories.get();
                    if categories.is_empty() {
                        view! { <div class="py-2 px-4 text-sm text-gray-500">{NO_CATEGORIES}</div> }
                            .into_any()
                    } else {
                        categories
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class="relative group/subitem">
                                        <a
                                            href=category.href()
                                            class="block py-2 px-4 uppercase lg:flex lg:justify-between lg:items-center text-md text-[#a31010] hover:text-secondary hover:bg-gray-100"
                                            on:click=link_click(on_select)
                                        >
                                            {category.label().to_string()}
                                        </a>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Dropdown of a standard entry, listing its static sub-items.
#[component]
pub fn SubItemDropdown(
    /// Links to list, in order.
    items: Vec<SubItem>,
    /// Called after a sub-item link was clicked.
    #[prop(into)]
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=PANEL_CLASS>
            <div class="py-1">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="relative group/subitem">
                                <a
                                    href=item.path
                                    class="block py-2 px-4 text-sm text-gray-700 lg:flex lg:justify-between lg:items-center hover:text-secondary hover:bg-gray-100"
                                    on:click=link_click(on_select)
                                >
                                    {item.title}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
