//! Feed accordion component.

use crate::features::accordion::state::{AccordionMode, OpenSet};
use crate::features::feed::api::fetch_entries;
use crate::features::feed::state::{FeedState, marker, sample_entries};
use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Feed accordion configuration.
#[derive(Properties, PartialEq, Eq)]
pub struct FeedAccordionProps {
    /// Endpoint returning `[{id, title, description}]`; bundled samples when absent.
    #[prop_or_default]
    pub source: Option<AttrValue>,
}

/// Accordion whose sections are loaded over HTTP.
#[function_component(FeedAccordion)]
pub fn feed_accordion(props: &FeedAccordionProps) -> Html {
    let feed = use_state(|| FeedState::Loading);
    let open = use_state(OpenSet::new);

    {
        let feed = feed.clone();
        use_effect_with_deps(
            move |source| {
                let Some(url) = source.clone() else {
                    feed.set(FeedState::Ready(sample_entries()));
                    return;
                };
                feed.set(FeedState::Loading);
                spawn_local(async move {
                    let outcome = fetch_entries(&url).await;
                    if let Err(err) = &outcome {
                        console::error!("feed load failed", url.to_string(), err.to_string());
                    }
                    feed.set(FeedState::from_outcome(outcome));
                });
            },
            props.source.clone(),
        );
    }

    match &*feed {
        FeedState::Loading => html! { <p>{"Loading..."}</p> },
        FeedState::Failed(message) => html! { <p class="text-red-600">{format!("Error: {message}")}</p> },
        FeedState::Ready(entries) if entries.is_empty() => html! { <h1>{"No Data Found"}</h1> },
        FeedState::Ready(entries) => html! {
            <>
                {for entries.iter().map(|entry| {
                    let key = entry.key();
                    let is_open = open.is_open(&key);
                    let onclick = {
                        let open = open.clone();
                        let key = key.clone();
                        Callback::from(move |_: MouseEvent| open.set(open.toggle(AccordionMode::Single, &key)))
                    };
                    html! {
                        <div
                            key={key}
                            class="cursor-pointer flex flex-col border-b border-gray-300 p-4 w-100 overflow-hidden"
                            {onclick}
                        >
                            <header class="flex flex-row justify-between items-center">
                                <h1>{entry.title.clone()}</h1>
                                <span>{marker(is_open)}</span>
                            </header>
                            {if is_open {
                                html! { <p>{entry.description.clone()}</p> }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                })}
            </>
        },
    }
}
