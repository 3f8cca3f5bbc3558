//! Inline SVG icons (24px grid, heroicons/lucide geometry).

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum IconVariant {
    #[default]
    Outline,
    Solid,
}

#[derive(Properties, PartialEq, Eq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) variant: IconVariant,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let fill = match props.variant {
        IconVariant::Outline => "none",
        IconVariant::Solid => "currentColor",
    };
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="1.5"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

#[function_component(ChevronDownIcon)]
pub(crate) fn chevron_down_icon(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m19.5 8.25-7.5 7.5-7.5-7.5" /> })
}

#[function_component(ChevronFirstIcon)]
pub(crate) fn chevron_first_icon(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m17 18-6-6 6-6M7 6v12" /> })
}

#[function_component(ChevronLastIcon)]
pub(crate) fn chevron_last_icon(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m7 18 6-6-6-6m10 0v12" /> })
}

#[function_component(MoreVerticalIcon)]
pub(crate) fn more_vertical_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 5h.01M12 12h.01M12 19h.01" /> },
    )
}

#[function_component(Bars3Icon)]
pub(crate) fn bars3_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5" /> },
    )
}

#[function_component(XMarkIcon)]
pub(crate) fn x_mark_icon(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M6 18 18 6M6 6l12 12" /> })
}

#[function_component(MagnifyingGlassIcon)]
pub(crate) fn magnifying_glass_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="m21 21-5.197-5.197m0 0A7.5 7.5 0 1 0 5.196 5.196a7.5 7.5 0 0 0 10.607 10.607Z" /> },
    )
}

#[function_component(MoonIcon)]
pub(crate) fn moon_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M21.752 15.002A9.72 9.72 0 0 1 18 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 0 0 3 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 0 0 9.002-5.998Z" /> },
    )
}

#[function_component(SunIcon)]
pub(crate) fn sun_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 3v2.25m6.364.386-1.591 1.591M21 12h-2.25m-.386 6.364-1.591-1.591M12 18.75V21m-4.773-4.227-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 1 1-7.5 0 3.75 3.75 0 0 1 7.5 0Z" /> },
    )
}
