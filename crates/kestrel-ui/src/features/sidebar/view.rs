//! Sidebar and sidebar item components.

use crate::components::atoms::icons::{ChevronFirstIcon, ChevronLastIcon, MoreVerticalIcon};
use crate::features::sidebar::state::{SidebarState, item_classes};
use yew::prelude::*;

/// Signed-in user shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarProfile {
    /// Display name.
    pub name: AttrValue,
    /// Secondary line, usually an email address.
    pub email: AttrValue,
    /// Avatar image URL.
    pub avatar_url: AttrValue,
}

impl Default for SidebarProfile {
    fn default() -> Self {
        Self {
            name: AttrValue::from("John Doe"),
            email: AttrValue::from("johndoe@gmail.com"),
            avatar_url: AttrValue::from(
                "https://ui-avatars.com/api/?background=0D8ABC&color=fff&bold=true",
            ),
        }
    }
}

/// Sidebar configuration.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Logo image shown in the header.
    #[prop_or(AttrValue::from("https://img.logoipsum.com/243.svg"))]
    pub logo_src: AttrValue,
    /// Footer profile card.
    #[prop_or_default]
    pub profile: SidebarProfile,
    /// Initial layout.
    #[prop_or(true)]
    pub expanded: bool,
    /// Usually a list of [`SidebarItem`]s.
    #[prop_or_default]
    pub children: Children,
}

/// Vertical navigation that collapses to an icon rail.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let state = {
        let expanded = props.expanded;
        use_state(move || SidebarState { expanded })
    };
    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.toggled()))
    };
    let current = *state;

    html! {
        <aside class={current.aside_classes()}>
            <nav class="h-full flex flex-col bg-white border-r shadow-sm dark:bg-gray-900 dark:border-gray-700">
                <div class="p-4 pb-2 flex justify-between items-center">
                    <img src={props.logo_src.clone()} class={current.logo_classes()} alt="" />
                    <button
                        type="button"
                        class="p-1.5 rounded-lg hover:bg-slate-300"
                        aria-label={if current.expanded { "Collapse sidebar" } else { "Expand sidebar" }}
                        onclick={toggle}
                    >
                        {if current.expanded {
                            html! { <ChevronFirstIcon class="h-6 w-6" /> }
                        } else {
                            html! { <ChevronLastIcon class="h-6 w-6" /> }
                        }}
                    </button>
                </div>
                <ContextProvider<SidebarState> context={current}>
                    <ul class="flex-1 px-3">{ for props.children.iter() }</ul>
                </ContextProvider<SidebarState>>
                <div class="border-t flex p-3">
                    <img src={props.profile.avatar_url.clone()} alt="profile" class="w-10 h-10 rounded-md" />
                    <div class={current.profile_classes()}>
                        <div class="leading-4">
                            <h4 class="font-semibold">{props.profile.name.clone()}</h4>
                            <span class="text-slate-500 text-sm">{props.profile.email.clone()}</span>
                        </div>
                        <MoreVerticalIcon class="h-5 w-5" />
                    </div>
                </div>
            </nav>
        </aside>
    }
}

/// One sidebar entry.
#[derive(Properties, PartialEq)]
pub struct SidebarItemProps {
    /// Leading icon.
    #[prop_or_default]
    pub icon: Html,
    /// Label, also used as the collapsed tooltip.
    pub text: AttrValue,
    /// Highlight as the current location.
    #[prop_or_default]
    pub active: bool,
    /// Show the unread/alert dot.
    #[prop_or_default]
    pub alert: bool,
}

/// Entry rendered inside a [`Sidebar`]; reads the expanded flag from context.
#[function_component(SidebarItem)]
pub fn sidebar_item(props: &SidebarItemProps) -> Html {
    let state = use_context::<SidebarState>().unwrap_or_default();

    html! {
        <li class={item_classes(props.active)}>
            {props.icon.clone()}
            <span class={state.label_classes()}>{props.text.clone()}</span>
            {if props.alert {
                html! { <div class={state.alert_classes()}></div> }
            } else {
                html! {}
            }}
            {if state.shows_tooltip() {
                html! {
                    <div class="absolute left-full rounded-md px-2 py-1 ml-6 bg-indigo-100 text-sm text-indigo-800 invisible opacity-20 -translate-x-3 transition-all group-hover:visible group-hover:opacity-100 group-hover:translate-x-0">
                        {props.text.clone()}
                    </div>
                }
            } else {
                html! {}
            }}
        </li>
    }
}
