//! Navbar component.

use crate::components::atoms::icons::{Bars3Icon, XMarkIcon};
use crate::core::breakpoints::{Breakpoint, LG};
use crate::features::navbar::state::{
    NavLink, NavbarState, container_classes, desktop_link_classes, desktop_nav_classes,
    header_classes, menu_button_classes, mobile_menu_classes,
};
use gloo::events::EventListener;
use gloo::utils::window;
use std::rc::Rc;
use yew::prelude::*;

/// Events that change the navbar flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavbarAction {
    /// Hamburger button pressed.
    ToggleMenu,
    /// A mobile link was followed.
    CloseMenu,
    /// Window scrolled to the given vertical offset.
    Scrolled(f64),
    /// Window resized to the given width.
    Resized(u16, Breakpoint),
}

impl Reducible for NavbarState {
    type Action = NavbarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavbarAction::ToggleMenu => self.toggle_menu(),
            NavbarAction::CloseMenu => self.close_menu(),
            NavbarAction::Scrolled(offset) => self.on_scroll(offset),
            NavbarAction::Resized(width, breakpoint) => self.on_resize(width, breakpoint),
        };
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Navbar configuration.
#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Brand slot; defaults to the text "Your Brand".
    #[prop_or_default]
    pub logo: Option<Html>,
    /// Links shown in both the desktop row and the mobile drawer.
    pub items: Vec<NavLink>,
    /// Call-to-action appended to the mobile drawer.
    #[prop_or_default]
    pub cta: Option<Html>,
    /// Extra classes for the `<header>`.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for the inner container.
    #[prop_or_default]
    pub container_class: Classes,
    /// Extra classes for desktop links.
    #[prop_or_default]
    pub item_class: Classes,
    /// Tailwind screen at which the desktop row replaces the drawer.
    #[prop_or(AttrValue::from(LG.name))]
    pub mobile_breakpoint: AttrValue,
    /// Pin the bar to the top of the viewport.
    #[prop_or_default]
    pub sticky: bool,
}

/// Top navigation bar with a collapsible mobile drawer.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let state = use_reducer(NavbarState::default);
    let breakpoint = Breakpoint::by_name(&props.mobile_breakpoint).unwrap_or(LG);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |breakpoint| {
                let breakpoint = *breakpoint;
                let on_scroll = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&window(), "scroll", move |_event| {
                        let offset = window().scroll_y().unwrap_or(0.0);
                        dispatcher.dispatch(NavbarAction::Scrolled(offset));
                    })
                };
                let on_resize = EventListener::new(&window(), "resize", move |_event| {
                    dispatcher.dispatch(NavbarAction::Resized(viewport_width(), breakpoint));
                });
                move || {
                    drop(on_scroll);
                    drop(on_resize);
                }
            },
            breakpoint,
        );
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavbarAction::ToggleMenu))
    };
    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavbarAction::CloseMenu))
    };
    let desktop_link = desktop_link_classes(&props.item_class);

    html! {
        <header class={header_classes(props.sticky, state.scrolled, &props.class)}>
            <div class={container_classes(&props.container_class)}>
                <div class="font-bold text-xl text-gray-900 dark:text-gray-100">
                    {props.logo.clone().unwrap_or_else(|| html! { "Your Brand" })}
                </div>
                <nav class={desktop_nav_classes(breakpoint)}>
                    {for props.items.iter().map(|link| html! {
                        <a
                            key={link.href.clone()}
                            href={link.href.clone()}
                            class={desktop_link.clone()}
                            target={link.target().map(AttrValue::from)}
                            rel={link.rel().map(AttrValue::from)}
                        >
                            {link.label.clone()}
                        </a>
                    })}
                </nav>
                <button
                    type="button"
                    class={menu_button_classes(breakpoint)}
                    aria-label="Toggle Menu"
                    aria-expanded={if state.mobile_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    {if state.mobile_open {
                        html! { <XMarkIcon class="h-6 w-6" /> }
                    } else {
                        html! { <Bars3Icon class="h-6 w-6" /> }
                    }}
                </button>
            </div>
            <div class={mobile_menu_classes(breakpoint, state.mobile_open)}>
                <div class="py-4 px-4 flex flex-col space-y-4">
                    {for props.items.iter().map(|link| html! {
                        <a
                            key={link.href.clone()}
                            href={link.href.clone()}
                            class="block text-gray-700 dark:text-gray-200 py-2 px-4 rounded-md hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors duration-200"
                            target={link.target().map(AttrValue::from)}
                            rel={link.rel().map(AttrValue::from)}
                            onclick={close_menu.clone()}
                        >
                            {link.label.clone()}
                        </a>
                    })}
                    {props.cta.as_ref().map_or_else(Html::default, |cta| html! { <div class="mt-2">{cta.clone()}</div> })}
                </div>
            </div>
        </header>
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn viewport_width() -> u16 {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    width.clamp(0.0, f64::from(u16::MAX)) as u16
}
