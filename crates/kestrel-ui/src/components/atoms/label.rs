//! Form label atom with the shared typography.

use crate::core::classes::merge_classes;
use yew::prelude::*;

const LABEL_BASE: &str =
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

#[derive(Properties, PartialEq)]
pub(crate) struct LabelProps {
    #[prop_or_default]
    pub(crate) html_for: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// `<label>` forwarding `for` and merging caller classes over the base styling.
#[function_component(Label)]
pub(crate) fn label(props: &LabelProps) -> Html {
    html! {
        <label class={merge_classes(LABEL_BASE, &props.class)} for={props.html_for.clone()}>
            { for props.children.iter() }
        </label>
    }
}
