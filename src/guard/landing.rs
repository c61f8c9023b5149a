use crate::model::user::Role;

/// Fixed destinations a route guard may redirect to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Landing {
    SelectLogin,
    AdminDashboard,
    NgoDashboard,
    DonorDashboard,
    VolunteerDashboard,
    UserChoice,
}

impl Landing {
    pub fn path(&self) -> &'static str {
        match self {
            Landing::SelectLogin => "/auth/select-login",
            Landing::AdminDashboard => "/dashboards/admin-dashboard",
            Landing::NgoDashboard => "/ngo-dashboard",
            Landing::DonorDashboard => "/donor-dashboard",
            Landing::VolunteerDashboard => "/volunteer-dashboard",
            Landing::UserChoice => "/auth/user-choice",
        }
    }
}

/// Default destination for a role; `None` (unknown role) goes to login selection.
pub fn landing_for(role: Option<Role>) -> Landing {
    match role {
        Some(Role::Admin) => Landing::AdminDashboard,
        Some(Role::Ngo) => Landing::NgoDashboard,
        Some(Role::Donor) => Landing::DonorDashboard,
        Some(Role::Volunteer) => Landing::VolunteerDashboard,
        Some(Role::User) => Landing::UserChoice,
        None => Landing::SelectLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_role_to_its_dashboard() {
        assert_eq!(
            landing_for(Some(Role::Admin)).path(),
            "/dashboards/admin-dashboard"
        );
        assert_eq!(landing_for(Some(Role::Ngo)).path(), "/ngo-dashboard");
        assert_eq!(landing_for(Some(Role::Donor)).path(), "/donor-dashboard");
        assert_eq!(
            landing_for(Some(Role::Volunteer)).path(),
            "/volunteer-dashboard"
        );
        assert_eq!(landing_for(Some(Role::User)).path(), "/auth/user-choice");
    }

    #[test]
    fn unknown_role_goes_to_login_selection() {
        assert_eq!(landing_for(None).path(), "/auth/select-login");
        assert_eq!(landing_for("SUPERUSER".parse().ok()), Landing::SelectLogin);
    }
}
