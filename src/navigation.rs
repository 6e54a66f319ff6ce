use crate::{
    guard::{self, DenyReason, GuardDecision},
    models::{Role, Session},
};

/// Where denied navigations and the root path land.
pub const FALLBACK_PATH: &str = "/home";

/// View
///
/// The pages the portal can show. `Home` is the initial view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    AdminDashboard,
    UserDashboard,
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::AdminDashboard => "Admin Dashboard",
            View::UserDashboard => "User Dashboard",
            View::NotFound => "Page Not Found",
        }
    }
}

/// RouteTarget
///
/// What a matched path leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(&'static str),
    View(View),
}

/// RouteEntry
///
/// One row of the route table: a path, its target, and the role a session
/// must hold to enter it (`None` for unprotected routes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub target: RouteTarget,
    pub required_role: Option<Role>,
}

/// ROUTES
///
/// The route table. Both the HTTP router and `resolve` are driven from it;
/// anything not listed here renders `View::NotFound`.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        target: RouteTarget::Redirect(FALLBACK_PATH),
        required_role: None,
    },
    RouteEntry {
        path: "/home",
        target: RouteTarget::View(View::Home),
        required_role: None,
    },
    RouteEntry {
        path: "/admin",
        target: RouteTarget::View(View::AdminDashboard),
        required_role: Some(Role::Admin),
    },
    RouteEntry {
        path: "/user",
        target: RouteTarget::View(View::UserDashboard),
        required_role: Some(Role::User),
    },
];

/// Resolution
///
/// The result of matching a path against the route table, before any guard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Redirect(&'static str),
    Render {
        view: View,
        required_role: Option<Role>,
    },
}

/// resolve
///
/// Matches `path` (query string ignored) against `ROUTES`. Matching is exact,
/// the same way the HTTP router matches.
pub fn resolve(path: &str) -> Resolution {
    let path = path.split(['?', '#']).next().unwrap_or(path);

    match ROUTES.iter().find(|entry| entry.path == path) {
        Some(RouteEntry {
            target: RouteTarget::Redirect(to),
            ..
        }) => Resolution::Redirect(*to),
        Some(RouteEntry {
            target: RouteTarget::View(view),
            required_role,
            ..
        }) => Resolution::Render {
            view: *view,
            required_role: *required_role,
        },
        None => Resolution::Render {
            view: View::NotFound,
            required_role: None,
        },
    }
}

/// Navigation
///
/// The end result of a navigation attempt: the view actually shown, whether
/// any redirect happened on the way, and the guard's reason if it intervened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub view: View,
    pub redirected: bool,
    pub denied: Option<DenyReason>,
}

/// navigate
///
/// Resolves `path`, follows redirects and applies the route guard against
/// `session`. A denied navigation continues at `FALLBACK_PATH`.
pub fn navigate(session: &Session, path: &str) -> Navigation {
    let mut current = path;
    let mut redirected = false;
    let mut denied = None;

    // Each route entry can be visited at most once on a redirect chain.
    for _ in 0..=ROUTES.len() {
        match resolve(current) {
            Resolution::Redirect(to) => {
                current = to;
                redirected = true;
            }
            Resolution::Render {
                view,
                required_role: Some(required),
            } => match guard::evaluate(session, required) {
                GuardDecision::Allow => {
                    return Navigation { view, redirected, denied };
                }
                GuardDecision::Deny(reason) => {
                    denied = Some(reason);
                    current = FALLBACK_PATH;
                    redirected = true;
                }
            },
            Resolution::Render { view, required_role: None } => {
                return Navigation { view, redirected, denied };
            }
        }
    }

    tracing::warn!(path, "redirect loop in route table, showing not-found view");
    Navigation {
        view: View::NotFound,
        redirected,
        denied,
    }
}

/// Navigator
///
/// The view state machine: holds `current_view`, starting at `Home`, and moves
/// to whatever view a navigation attempt ends on. There is no terminal state.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.current
    }

    pub fn go(&mut self, session: &Session, path: &str) -> Navigation {
        let navigation = navigate(session, path);
        self.current = navigation.view;
        navigation
    }
}
