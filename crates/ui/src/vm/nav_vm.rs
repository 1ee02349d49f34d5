use crate::routes::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Go(Route),
    SignOut,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItemVm {
    pub label: &'static str,
    pub action: NavAction,
    pub active: bool,
}

impl NavItemVm {
    fn go(label: &'static str, route: Route, current_path: &str) -> Self {
        let active = route.to_string() == current_path;
        Self {
            label,
            action: NavAction::Go(route),
            active,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.active {
            "btn btn-active"
        } else {
            "btn btn-ghost"
        }
    }
}

/// Navbar entries for the current session state.
#[must_use]
pub fn nav_items(signed_in: bool, current_path: &str) -> Vec<NavItemVm> {
    if signed_in {
        vec![
            NavItemVm::go("Dashboard", Route::Dashboard {}, current_path),
            NavItemVm {
                label: "Sign Out",
                action: NavAction::SignOut,
                active: false,
            },
        ]
    } else {
        vec![
            NavItemVm::go("Login", Route::Login {}, current_path),
            NavItemVm::go("Register", Route::Register {}, current_path),
        ]
    }
}
