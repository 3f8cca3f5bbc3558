//! Routing definitions for the demo site.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[at("/pricing")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
            Self::Pricing => "Pricing",
            Self::NotFound => "Not found",
        }
    }
}
