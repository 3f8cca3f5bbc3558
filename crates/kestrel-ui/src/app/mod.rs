use crate::app::demo::{catalog_lookup, nav_links};
use crate::components::atoms::label::Label;
use crate::features::accordion::state::AccordionMode;
use crate::features::accordion::view::{Accordion, AccordionItem};
use crate::features::feed::view::FeedAccordion;
use crate::features::navbar::view::Navbar;
use crate::features::search::lookup::SearchLookup;
use crate::features::search::view::Search;
use crate::features::sidebar::view::{Sidebar, SidebarItem};
use crate::features::theme_toggle::view::ThemeToggle;
use gloo::console;
use gloo::utils::window;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod demo;
mod routes;

#[function_component(KestrelApp)]
pub(crate) fn kestrel_app() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
                <Sidebar>
                    <SidebarItem icon={html! { <span aria-hidden="true">{"◆"}</span> }} text="Dashboard" active=true />
                    <SidebarItem icon={html! { <span aria-hidden="true">{"▤"}</span> }} text="Projects" alert=true />
                    <SidebarItem icon={html! { <span aria-hidden="true">{"✉"}</span> }} text="Inbox" />
                    <SidebarItem icon={html! { <span aria-hidden="true">{"⚙"}</span> }} text="Settings" />
                </Sidebar>
                <div class="flex-1">
                    <Navbar
                        items={nav_links()}
                        cta={html! {
                            <Link<Route>
                                to={Route::Pricing}
                                classes="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded"
                            >
                                {"Pricing"}
                            </Link<Route>>
                        }}
                        class="bg-gray-50 dark:bg-gray-800"
                        container_class="max-w-screen-xl"
                        sticky=true
                    />
                    <div class="flex justify-end p-4">
                        <ThemeToggle />
                    </div>
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        other => html! {
            <div class="container mx-auto p-4">
                <h2 class="text-2xl font-bold mb-4">{other.title()}</h2>
                <Link<Route> to={Route::Home} classes="text-blue-600 underline">{"Back home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(HomePage)]
fn home_page() -> Html {
    let navigator = use_navigator();
    let lookup = use_memo(|_| SearchLookup::new(catalog_lookup), ());
    let on_navigate = Callback::from(move |link: String| {
        match (Route::recognize(&link), navigator.as_ref()) {
            (Some(route), Some(navigator)) if !link.starts_with("http") => navigator.push(&route),
            _ => {
                if let Err(err) = window().location().assign(&link) {
                    console::error!("navigation failed", err);
                }
            }
        }
    });

    html! {
        <div class="container mx-auto p-4">
            <div class="mb-8 max-w-xl">
                <Label html_for="site-search" class="mb-2 block">{"Search the site"}</Label>
                <Search
                    input_id="site-search"
                    on_search={(*lookup).clone()}
                    on_navigate={on_navigate}
                />
            </div>
            <h2 class="text-2xl font-bold mb-4">{"Single Accordion"}</h2>
            <Accordion
                items={accordion_items()}
                mode={AccordionMode::Single}
                title_class="border-b-1 border-black dark:border-b-1 dark:border-white"
            />
            <h2 class="text-2xl font-bold mt-8 mb-4">{"Multiple Accordion"}</h2>
            <Accordion items={accordion_items()} mode={AccordionMode::Multiple} bordered=true />
            <h2 class="text-2xl font-bold mt-8 mb-4">{"Remote Accordion"}</h2>
            <FeedAccordion />
        </div>
    }
}

fn accordion_items() -> Vec<AccordionItem> {
    (1..=3)
        .map(|n| AccordionItem {
            id: Some(AttrValue::from(format!("section{n}"))),
            title: AttrValue::from(format!("Section {n}")),
            content: html! { <p>{format!("This is the content for section {n}.")}</p> },
        })
        .collect()
}

/// Mount the demo application on `#root`, or on `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<KestrelApp>::with_root(root).render();
    } else {
        yew::Renderer::<KestrelApp>::new().render();
    }
}
