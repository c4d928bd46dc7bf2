use super::menu_item::MenuItem;
use super::skeleton::MenuBarSkeleton;
use crate::components::icon::Icon;
use crate::settings::use_menu_settings;
use desktop_menu_model::prelude::{LogoDescriptor, MenuEntry, ProductCategories, tel_href};
use leptos::{either::Either, prelude::*};
use log::debug;

/// The desktop header.
///
/// Shows [`MenuBarSkeleton`] while `is_loading` is set. Otherwise renders the
/// logo (only when the descriptor carries a photo), the help desk phone link,
/// one [`MenuItem`] per entry and the inquiry button.
#[component]
pub fn MenuBar(
    /// Top-level entries, rendered in order.
    #[prop(into)]
    menu_items: Signal<Vec<MenuEntry>>,
    /// Receives the path of a clicked top-level label.
    #[prop(into)]
    on_navigate: Callback<String>,
    /// Logo descriptor. Without a photo no image is shown.
    #[prop(optional, into)]
    logo: MaybeProp<LogoDescriptor>,
    /// Help desk number. Used verbatim in the `tel:` link.
    #[prop(into)]
    phone_no: Signal<String>,
    /// Called with `true` when the inquiry button is pressed.
    #[prop(into)]
    show_inquiry_form: Callback<bool>,
    /// Categories listed under the catalog entry.
    #[prop(optional, into)]
    product_categories: Signal<ProductCategories>,
    /// Shows the skeleton instead of the header.
    #[prop(optional, into)]
    is_loading: Signal<bool>,
) -> impl IntoView {
    let settings = use_menu_settings();

    move || {
        if is_loading.get() {
            return Either::Left(view! { <MenuBarSkeleton /> });
        }

        let logo_endpoint = settings.logo_endpoint.clone();
        let logo_view = move || {
            logo.get().and_then(|logo| {
                logo.src(&logo_endpoint).map(|src| {
                    view! {
                        <div class="relative w-52 h-24">
                            <img
                                src=src
                                alt=logo.alt().to_string()
                                title=logo.title().to_string()
                                class="object-contain w-full h-full"
                            />
                        </div>
                    }
                })
            })
        };

        Either::Right(view! {
            <div class="hidden w-full lg:block">
                <div class="flex items-center w-full font-semibold bg-white">
                    <a href="/" class="flex justify-center items-center px-4 h-24 w-[20%]">
                        {logo_view}
                    </a>

                    <div class="flex flex-col border-l w-[80%]">
                        <div class="border-b">
                            <div class="flex gap-6 justify-end items-center py-4 px-8">
                                <div class="flex gap-2 justify-center items-center">
                                    <Icon icon=icondata::BiPhoneRegular class="w-5 h-5 text-[#bf2e2e]" />
                                    <p class="font-bold text-gray-500 uppercase">
                                        {settings.help_desk_label.clone()}
                                        <a
                                            href=move || tel_href(&phone_no.get())
                                            class="ml-1 text-black hover:text-blue-500"
                                        >
                                            {move || phone_no.get()}
                                        </a>
                                    </p>
                                </div>
                            </div>
                        </div>

                        <div class="flex justify-between items-center">
                            <div class="flex items-center py-2 pl-8 space-x-8">
                                {move || {
                                    menu_items
                                        .get()
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <MenuItem
                                                    entry=entry
                                                    on_navigate=on_navigate
                                                    categories=product_categories
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>

                            <div class="flex items-center h-full">
                                <button
                                    class="py-4 px-8 h-full text-white uppercase border border-gray-400 transition-colors duration-300 bg-[#bf2e2e] hover:bg-[#cd1d1d]"
                                    on:click=move |_| {
                                        debug!("Inquiry form requested");
                                        show_inquiry_form.run(true);
                                    }
                                >
                                    {settings.inquiry_label.clone()}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use desktop_menu_model::prelude::{MenuPayload, SKELETON_ITEM_COUNT};

    fn render(payload: MenuPayload, is_loading: bool) -> String {
        Owner::new().with(|| {
            view! {
                <MenuBar
                    menu_items=payload.menu_items
                    on_navigate=Callback::new(|_: String| {})
                    logo=payload.colorlogo
                    phone_no=payload.phone_no
                    show_inquiry_form=Callback::new(|_: bool| {})
                    product_categories=payload.product_categories
                    is_loading=is_loading
                />
            }
            .to_html()
        })
    }

    fn payload(json: &str) -> MenuPayload {
        MenuPayload::from_json(json).unwrap()
    }

    #[test]
    fn test_loading_renders_skeleton_only() {
        let html = render(
            payload(r#"{"menuItems":[{"pagename":"Home","path":"/"}],"phoneNo":"123"}"#),
            true,
        );
        assert_eq!(html.matches(r#"data-skeleton="item""#).count(), SKELETON_ITEM_COUNT);
        assert!(!html.contains("Home"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_header_contents() {
        let html = render(
            payload(
                r#"{
                    "menuItems": [
                        {"pagename": "Home", "path": "/"},
                        {"pagename": "Products"}
                    ],
                    "colorlogo": {"photo": "logo.png"},
                    "phoneNo": "+45 70 20 30 40"
                }"#,
            ),
            false,
        );
        assert!(html.contains(r#"href="tel:+45 70 20 30 40""#));
        assert!(html.contains(r#"src="/api/logo/download/logo.png""#));
        assert!(html.contains(r#"alt="Company Logo""#));
        assert!(html.contains("Home"));
        assert!(html.contains("Products"));
        assert!(html.contains("Inquiry Now"));
        assert!(html.contains("Help Desk :"));
    }

    #[test]
    fn test_logo_without_photo_renders_no_image() {
        let html = render(payload(r#"{"colorlogo": {"alt": "Acme"}}"#), false);
        assert!(!html.contains("<img"));
        assert!(html.contains(r#"href="/""#));
    }
}
