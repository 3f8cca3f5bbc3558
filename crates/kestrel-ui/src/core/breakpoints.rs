//! Responsive breakpoint definitions shared with the Tailwind config.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Tailwind screen prefix (`"lg"`, `"2xl"`, ...).
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound in CSS pixels, `None` for the widest screen.
    pub max_width: Option<u16>,
}

/// Extra-small screens (phones in portrait).
pub const XS: Breakpoint = Breakpoint {
    name: "xs",
    min_width: 0,
    max_width: Some(639),
};
/// Small screens.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 640,
    max_width: Some(767),
};
/// Medium screens (tablets).
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// Large screens (laptops). Default mobile-menu cut-over for the navbar.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: Some(1279),
};
/// Extra-large screens.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1280,
    max_width: Some(1535),
};
/// Anything wider than `xl`.
pub const XXL: Breakpoint = Breakpoint {
    name: "2xl",
    min_width: 1536,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 6] = [XS, SM, MD, LG, XL, XXL];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XXL)
}

impl Breakpoint {
    /// Look up a breakpoint by its Tailwind prefix.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        BREAKPOINTS.iter().copied().find(|bp| bp.name == name)
    }

    /// Whether a viewport of `width` pixels is at or above this breakpoint.
    #[must_use]
    pub const fn reached_by(self, width: u16) -> bool {
        width >= self.min_width
    }

    /// Prefix a utility class with this breakpoint (`lg:flex`).
    #[must_use]
    pub fn variant(self, class: &str) -> String {
        format!("{}:{class}", self.name)
    }
}
