//! Search component.

use crate::components::atoms::icons::{IconVariant, MagnifyingGlassIcon, XMarkIcon};
use crate::core::classes::merge_classes;
use crate::features::search::lookup::{SearchLookup, SearchResult};
use crate::features::search::state::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_RESULTS, SearchCommand, SearchState, Ticket, is_dismiss_key,
};
use gloo::console;
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

/// Search box configuration.
#[derive(Properties, PartialEq)]
pub struct SearchProps {
    /// Async `term -> results` backend.
    pub on_search: SearchLookup,
    /// Called with the chosen result's link; assigns `window.location` when absent.
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
    /// Input placeholder.
    #[prop_or(AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
    /// Quiet period before the lookup runs.
    #[prop_or(DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u32,
    /// Cap on displayed results.
    #[prop_or(DEFAULT_MAX_RESULTS)]
    pub max_results: usize,
    /// `id` of the input, for an external `<label for>`.
    #[prop_or_default]
    pub input_id: Option<AttrValue>,
    /// Extra classes for the wrapper.
    #[prop_or_default]
    pub class: Classes,
}

/// Text input with a debounced lookup and a results dropdown.
#[function_component(Search)]
pub fn search(props: &SearchProps) -> Html {
    let state = use_mut_ref(SearchState::default);
    let timer = use_mut_ref(|| None as Option<Timeout>);
    let input_ref = use_node_ref();
    let redraw = use_force_update();

    {
        let timer = timer.clone();
        use_effect_with_deps(
            move |_| {
                move || drop(timer.borrow_mut().take())
            },
            (),
        );
    }

    let oninput = {
        let state = state.clone();
        let timer = timer.clone();
        let redraw = redraw.clone();
        let lookup = props.on_search.clone();
        let debounce = props.debounce_ms;
        let max_results = props.max_results;
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let command = state.borrow_mut().input(input.value());
            drop(timer.borrow_mut().take());
            if let SearchCommand::Schedule { ticket, term } = command {
                let run = {
                    let state = state.clone();
                    let redraw = redraw.clone();
                    let lookup = lookup.clone();
                    move || run_lookup(&state, &redraw, &lookup, ticket, term, max_results)
                };
                *timer.borrow_mut() = Some(Timeout::new(debounce, run));
            }
            redraw.force_update();
        })
    };

    let clear = {
        let state = state.clone();
        let timer = timer.clone();
        let redraw = redraw.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |()| {
            drop(timer.borrow_mut().take());
            state.borrow_mut().clear();
            if let Some(input) = input_ref.cast::<HtmlElement>()
                && let Err(err) = input.focus()
            {
                console::error!("search input focus failed", err);
            }
            redraw.force_update();
        })
    };

    let onkeydown = {
        let clear = clear.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_dismiss_key(&event.key()) {
                clear.emit(());
            }
        })
    };

    let select = {
        let state = state.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |result: SearchResult| {
            drop(timer.borrow_mut().take());
            let link = state.borrow_mut().select(&result);
            redraw.force_update();
            if let Some(navigate) = &on_navigate {
                navigate.emit(link);
                return;
            }
            if let Err(err) = window().location().assign(&link) {
                console::error!("search navigation failed", err);
            }
        })
    };

    let snapshot = state.borrow().clone();

    html! {
        <div class={merge_classes("relative w-full", &props.class)}>
            <div class="relative flex items-center">
                <input
                    ref={input_ref}
                    id={props.input_id.clone()}
                    type="search"
                    class="w-full py-2 px-4 pl-10 pr-12 text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 dark:focus:ring-blue-400 transition-colors duration-200"
                    placeholder={props.placeholder.clone()}
                    value={snapshot.term().to_string()}
                    {oninput}
                    {onkeydown}
                    aria-label="Search"
                    autocomplete="off"
                />
                <div class="absolute left-3 pointer-events-none">
                    <MagnifyingGlassIcon
                        class="h-5 w-5 text-gray-500 dark:text-gray-400"
                        variant={IconVariant::Outline}
                    />
                </div>
                {if snapshot.has_term() {
                    let onclick = clear.reform(|_: MouseEvent| ());
                    html! {
                        <button
                            type="button"
                            class="absolute right-3 bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 rounded-full p-1 focus:outline-none focus:ring-2 focus:ring-blue-500 dark:focus:ring-blue-400 transition-colors duration-200"
                            aria-label="Clear search"
                            {onclick}
                        >
                            <XMarkIcon class="h-4 w-4 text-gray-500 dark:text-gray-400" />
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
            {if snapshot.is_open() {
                html! {
                    <div class="absolute z-10 w-full mt-2 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-md shadow-lg overflow-hidden">
                        {if snapshot.is_searching() {
                            html! { <div class="py-2 px-4 text-gray-500 dark:text-gray-400">{"Searching..."}</div> }
                        } else {
                            html! {}
                        }}
                        {for snapshot.results().iter().map(|result| {
                            let onclick = {
                                let select = select.clone();
                                let result = result.clone();
                                Callback::from(move |_: MouseEvent| select.emit(result.clone()))
                            };
                            html! {
                                <button
                                    key={result.id.clone()}
                                    type="button"
                                    class="block w-full py-2 px-4 text-left text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus:bg-gray-100 dark:focus:bg-gray-700 transition-colors duration-200"
                                    {onclick}
                                >
                                    <div class="font-medium">{result.title.clone()}</div>
                                    <div class="text-sm text-gray-500 dark:text-gray-400">{result.description.clone()}</div>
                                </button>
                            }
                        })}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn run_lookup(
    state: &Rc<RefCell<SearchState>>,
    redraw: &UseForceUpdateHandle,
    lookup: &SearchLookup,
    ticket: Ticket,
    term: String,
    max_results: usize,
) {
    if !state.borrow_mut().begin(ticket) {
        return;
    }
    redraw.force_update();
    let state = state.clone();
    let redraw = redraw.clone();
    let pending = lookup.call(term);
    spawn_local(async move {
        let outcome = pending.await;
        if let Err(err) = &outcome {
            console::error!("search lookup failed", err.to_string());
        }
        if state.borrow_mut().resolve(ticket, outcome, max_results) {
            redraw.force_update();
        }
    });
}
