//! Askama page templates for the portal's views.

use askama::Template;
use axum::response::Html;

use crate::{
    models::{Role, Session},
    navigation::View,
};

/// NavBar
///
/// Navigation bar and login dialog state shared by every page.
#[derive(Debug, Clone)]
pub struct NavBar {
    pub logged_in: bool,
    pub role_label: &'static str,
    pub roles: Vec<Role>,
}

impl From<&Session> for NavBar {
    fn from(session: &Session) -> Self {
        Self {
            logged_in: session.is_authenticated(),
            role_label: session.role().map(|role| role.label()).unwrap_or(""),
            roles: Role::ALL.to_vec(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavBar,
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub nav: NavBar,
}

#[derive(Template)]
#[template(path = "user_dashboard.html")]
pub struct UserDashboardTemplate {
    pub nav: NavBar,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub nav: NavBar,
    pub path: String,
}

fn render<T: Template>(template: T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| format!("Template error: {}", e)))
}

/// render_view
///
/// Renders `view` for the given session. `path` is only shown on the
/// not-found page.
pub fn render_view(view: View, session: &Session, path: &str) -> Html<String> {
    let nav = NavBar::from(session);

    match view {
        View::Home => render(HomeTemplate { nav }),
        View::AdminDashboard => render(AdminDashboardTemplate { nav }),
        View::UserDashboard => render(UserDashboardTemplate { nav }),
        View::NotFound => render(NotFoundTemplate {
            nav,
            path: path.to_string(),
        }),
    }
}
