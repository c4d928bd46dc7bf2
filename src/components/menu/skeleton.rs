use desktop_menu_model::SKELETON_ITEM_COUNT;
use leptos::prelude::*;

const PULSE: &str = "bg-gray-200 rounded animate-pulse";

/// Static placeholder shown while the menu data is loading.
///
/// Has the same outline as [`MenuBar`](super::MenuBar) and no event handlers.
#[component]
pub fn MenuBarSkeleton() -> impl IntoView {
    view! {
        <div class="hidden lg:block" aria-busy="true">
            <div class="flex items-center w-full font-semibold bg-white">
                <div class="flex justify-center items-center px-4 h-24 w-[20%]">
                    <div data-skeleton="logo" class=format!("w-32 h-16 {PULSE}")></div>
                </div>
                <div class="flex flex-col border-l w-[80%]">
                    <div class="border-b">
                        <div class="flex gap-6 justify-end items-center py-4 px-8">
                            <div data-skeleton="phone" class=format!("h-5 w-36 {PULSE}")></div>
                        </div>
                    </div>
                    <div class="flex justify-between items-center">
                        <div class="flex justify-center items-center pl-8 space-x-8 font-bold uppercase">
                            {(0..SKELETON_ITEM_COUNT)
                                .map(|_| {
                                    view! {
                                        <div data-skeleton="item" class=format!("h-6 w-24 {PULSE}")></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex items-center h-full">
                            <div data-skeleton="cta" class=format!("h-12 w-32 {PULSE}")></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
