use super::dropdown::{CategoryDropdown, SubItemDropdown};
use crate::components::icon::Icon;
use crate::settings::use_menu_settings;
use desktop_menu_model::prelude::{HoverEvent, HoverIntent, MenuEntry, ProductCategories, TimerAction};
use leptos::{either::EitherOf3, html::Div, prelude::*};
use leptos_use::on_click_outside;
use log::{debug, error};

/// The single timer slot of one menu item.
type TimerSlot = StoredValue<Option<TimeoutHandle>>;

fn clear_timer(timer: TimerSlot) {
    if let Some(Some(handle)) = timer.try_update_value(Option::take) {
        handle.clear();
    }
}

/// Feeds `event` into the hover state machine and applies the resulting timer action.
///
/// Every access goes through `try_*`, so a timer that outlives its item
/// finds the state disposed and does nothing.
fn dispatch(intent: RwSignal<HoverIntent>, timer: TimerSlot, event: HoverEvent) {
    let Some(action) = intent.try_update(|intent| intent.handle(event)) else {
        return;
    };
    match action {
        TimerAction::Keep => {}
        TimerAction::Cancel => clear_timer(timer),
        TimerAction::Restart { ticket, delay } => {
            clear_timer(timer);
            match set_timeout_with_handle(
                move || dispatch(intent, timer, HoverEvent::TimerFired(ticket)),
                delay,
            ) {
                Ok(handle) => {
                    if timer.try_set_value(Some(handle)).is_some() {
                        handle.clear();
                    }
                }
                Err(e) => {
                    error!("Could not schedule the hover timer: {e:?}");
                    let _ = intent.try_update(HoverIntent::force_close);
                }
            }
        }
    }
}

/// Hands the entry's path to `on_navigate`. Entries without a click target do nothing.
fn navigate(click_target: Option<&str>, on_navigate: Callback<String>) {
    if let Some(path) = click_target {
        debug!("Navigating to {path}");
        on_navigate.run(path.to_string());
    }
}

fn label_class(open: bool) -> String {
    format!(
        "flex items-center py-2 px-4 font-bold text-black uppercase cursor-pointer text-md hover:text-secondary {}",
        if open { "text-secondary" } else { "" }
    )
    .trim_end()
    .to_string()
}

fn arrow_class(open: bool) -> &'static str {
    if open {
        "ml-1 transition-transform duration-200 rotate-180"
    } else {
        "ml-1 transition-transform duration-200"
    }
}

/// One top-level entry of the menu bar.
///
/// Hovering opens the dropdown after the configured delay and leaving closes
/// it after the same delay. A click anywhere outside the item closes it at
/// once. Clicking the label navigates to the entry's path, except for
/// the catalog entry which has no click action.
#[component]
pub fn MenuItem(
    /// The entry to render.
    entry: MenuEntry,
    /// Receives the path of a clicked label.
    #[prop(into)]
    on_navigate: Callback<String>,
    /// Listed by the catalog entry's dropdown.
    #[prop(optional, into)]
    categories: Signal<ProductCategories>,
) -> impl IntoView {
    let settings = use_menu_settings();
    let intent = RwSignal::new(HoverIntent::new(settings.hover_delay));
    let timer: TimerSlot = StoredValue::new(None);
    let is_open = Memo::new(move |_| intent.with(HoverIntent::is_open));
    let target = NodeRef::<Div>::new();

    // Fires on the click that follows a pointerdown outside the item. The
    // listener is removed together with this item's owner.
    let _ = on_click_outside(target, move |_| {
        dispatch(intent, timer, HoverEvent::ClickOutside);
    });
    on_cleanup(move || clear_timer(timer));

    let click_target = entry.click_target().map(ToString::to_string);
    let on_label_click = move |_| navigate(click_target.as_deref(), on_navigate);
    let on_select = Callback::new(move |()| dispatch(intent, timer, HoverEvent::LinkActivated));

    let has_dropdown = entry.has_dropdown();
    let is_catalog = entry.is_catalog();
    let label = entry.label().to_string();
    let sub_items = entry.sub_items;

    view! {
        <div
            node_ref=target
            class="relative group"
            on:mouseenter=move |_| dispatch(intent, timer, HoverEvent::PointerEnter)
            on:mouseleave=move |_| dispatch(intent, timer, HoverEvent::PointerLeave)
        >
            <div class=move || label_class(is_open.get()) on:click=on_label_click>
                {label}
                {has_dropdown
                    .then(|| {
                        view! {
                            <Icon
                                icon=icondata::BiChevronDownRegular
                                class=Signal::derive(move || arrow_class(is_open.get()).to_string())
                            />
                        }
                    })}
            </div>
            {move || {
                if !is_open.get() {
                    EitherOf3::A(())
                } else if is_catalog {
                    EitherOf3::B(view! { <CategoryDropdown categories=categories on_select=on_select /> })
                } else if sub_items.is_empty() {
                    EitherOf3::A(())
                } else {
                    EitherOf3::C(view! { <SubItemDropdown items=sub_items.clone() on_select=on_select /> })
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desktop_menu_model::prelude::{DropdownPhase, Ticket};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_label_click_navigates_once_with_path() {
        Owner::new().with(|| {
            let calls = Arc::new(Mutex::new(Vec::<String>::new()));
            let on_navigate = Callback::new({
                let calls = Arc::clone(&calls);
                move |path: String| calls.lock().unwrap().push(path)
            });

            for entry in [
                MenuEntry::new("About").with_path("/about"),
                MenuEntry::new("Products").with_path("/products"),
                MenuEntry::new("Contact").with_path(""),
                MenuEntry::new("Company").with_sub_item("Team", "/team"),
            ] {
                navigate(entry.click_target(), on_navigate);
            }

            assert_eq!(*calls.lock().unwrap(), vec!["/about".to_string()]);
        });
    }

    #[test]
    fn test_dispatch_without_timer_change_stays_local() {
        Owner::new().with(|| {
            let intent = RwSignal::new(HoverIntent::default());
            let timer = TimerSlot::new(None);

            dispatch(intent, timer, HoverEvent::ClickOutside);
            dispatch(intent, timer, HoverEvent::PointerLeave);
            dispatch(intent, timer, HoverEvent::TimerFired(Ticket::default()));

            assert_eq!(intent.get_untracked().phase(), DropdownPhase::Closed);
            assert!(timer.get_value().is_none());
        });
    }

    #[test]
    fn test_dispatch_after_dispose_is_noop() {
        let owner = Owner::new();
        let (intent, timer) = owner.with(|| (RwSignal::new(HoverIntent::default()), TimerSlot::new(None)));
        owner.cleanup();

        // A timer that outlived its item, then a late pointer event.
        dispatch(intent, timer, HoverEvent::TimerFired(Ticket::default()));
        dispatch(intent, timer, HoverEvent::PointerEnter);

        assert!(intent.try_get_untracked().is_none());
        assert!(timer.try_get_value().is_none());
    }

    #[test]
    fn test_label_highlight_follows_open_state() {
        assert!(label_class(true).ends_with("text-secondary"));
        assert!(!label_class(false).contains(" text-secondary"));
        assert!(arrow_class(true).contains("rotate-180"));
        assert!(!arrow_class(false).contains("rotate-180"));
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use desktop_menu_model::prelude::NO_CATEGORIES;

    fn render(entry: MenuEntry) -> String {
        Owner::new().with(|| {
            view! { <MenuItem entry=entry on_navigate=Callback::new(|_: String| {}) /> }.to_html()
        })
    }

    #[test]
    fn test_closed_item_renders_label_without_panel() {
        let html = render(MenuEntry::new("Company").with_sub_item("Team", "/team"));
        assert!(html.contains("Company"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("/team"));
    }

    #[test]
    fn test_catalog_starts_closed_and_plain_items_have_no_arrow() {
        let html = render(MenuEntry::new("Products"));
        assert!(html.contains("<svg"));
        assert!(!html.contains(NO_CATEGORIES));

        let html = render(MenuEntry::new("Contact").with_path("/contact"));
        assert!(!html.contains("<svg"));
    }
}
