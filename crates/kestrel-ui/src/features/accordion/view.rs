//! Accordion component.

use crate::components::atoms::icons::ChevronDownIcon;
use crate::features::accordion::state::{
    AccordionMode, AccordionStyle, DEFAULT_TRANSITION_MS, OpenSet, resolve_item_id,
};
use yew::prelude::*;

/// One collapsible section.
#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    /// Stable identifier; derived from the position when absent.
    pub id: Option<AttrValue>,
    /// Text shown on the toggle button.
    pub title: AttrValue,
    /// Body revealed when the item is open.
    pub content: Html,
}

/// Accordion configuration.
#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    /// Sections in display order.
    pub items: Vec<AccordionItem>,
    /// Single or multiple expansion.
    #[prop_or_default]
    pub mode: AccordionMode,
    /// Extra classes for the container.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for each item wrapper.
    #[prop_or_default]
    pub item_class: Classes,
    /// Extra classes for each title button.
    #[prop_or_default]
    pub title_class: Classes,
    /// Extra classes for each content panel.
    #[prop_or_default]
    pub content_class: Classes,
    /// Transition length in milliseconds.
    #[prop_or(DEFAULT_TRANSITION_MS)]
    pub transition_duration: u32,
    /// Draw borders around items.
    #[prop_or_default]
    pub bordered: bool,
}

/// Expandable list of sections backed by an [`OpenSet`].
#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(OpenSet::new);
    let style = AccordionStyle {
        item_class: props.item_class.clone(),
        title_class: props.title_class.clone(),
        content_class: props.content_class.clone(),
        transition_ms: props.transition_duration,
        bordered: props.bordered,
    };
    let count = props.items.len();

    html! {
        <div class={classes!("accordion", props.class.clone())}>
            {for props.items.iter().enumerate().map(|(index, item)| {
                let id = resolve_item_id(item.id.as_deref(), index);
                let is_open = open.is_open(&id);
                let onclick = {
                    let open = open.clone();
                    let mode = props.mode;
                    let id = id.clone();
                    Callback::from(move |_: MouseEvent| open.set(open.toggle(mode, &id)))
                };
                html! {
                    <div key={id} class={style.item_classes(index, count)}>
                        <button
                            type="button"
                            class={style.title_classes(is_open)}
                            aria-expanded={if is_open { "true" } else { "false" }}
                            {onclick}
                        >
                            {item.title.clone()}
                            <ChevronDownIcon class={style.chevron_classes(is_open)} />
                        </button>
                        <div class={style.content_classes(is_open)}>
                            <div class="py-3 px-4 text-gray-700 dark:text-gray-300">
                                {item.content.clone()}
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
