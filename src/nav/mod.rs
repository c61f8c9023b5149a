//! Navigation bar selection and the navigation sink used for forced redirects.

pub mod redirect;

use std::sync::LazyLock;

use regex::Regex;

#[cfg(target_arch = "wasm32")]
pub use redirect::BrowserRedirect;
pub use redirect::Redirect;

use crate::{
    guard::Landing,
    model::user::{Role, Session},
};

pub const HOME_PATH: &str = "/";

static LOGIN_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/auth/(ngo|user|donor|volunteer|admin)-login$").unwrap());
static REGISTER_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/auth/(user|ngo|donor|volunteer|admin)-register$").unwrap());

/// Navigation bar variant rendered above the routed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    /// Links to login and registration.
    Public,
    /// Links for a signed in user, including logout.
    Authenticated,
    /// No floating navigation at all.
    Hidden,
}

/// Picks the navigation bar for `path` given the current session, first matching rule wins:
///
/// 1. The home page always gets the public bar.
/// 2. NGO accounts never see the floating bar.
/// 3. Login selection and login pages hide the bar.
/// 4. Registration pages hide the bar.
/// 5. Otherwise the authenticated bar with a session, the public bar without.
pub fn select_nav(path: &str, session: Option<&Session>) -> NavVariant {
    let path = strip_query(path);

    if path == HOME_PATH || path.is_empty() {
        return NavVariant::Public;
    }

    if session.is_some_and(|s| s.role() == Role::Ngo) {
        return NavVariant::Hidden;
    }

    if is_login_path(path) || REGISTER_PAGE.is_match(path) {
        return NavVariant::Hidden;
    }

    match session {
        Some(_) => NavVariant::Authenticated,
        None => NavVariant::Public,
    }
}

/// Login selection or one of the per-role login pages.
pub fn is_login_path(path: &str) -> bool {
    let path = strip_query(path);
    path == Landing::SelectLogin.path() || LOGIN_PAGE.is_match(path)
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
