pub mod login;
pub mod register;
pub mod select_login;
pub mod user_choice;

pub use login::{AdminLogin, DonorLogin, NgoLogin, UserLogin, VolunteerLogin};
pub use register::{AdminRegister, DonorRegister, NgoRegister, UserRegister, VolunteerRegister};
pub use select_login::SelectLogin;
pub use user_choice::UserChoice;

use crate::{client::router::Route, model::user::Role};

pub fn login_route(role: Role) -> Route {
    match role {
        Role::User => Route::UserLogin {},
        Role::Donor => Route::DonorLogin {},
        Role::Volunteer => Route::VolunteerLogin {},
        Role::Ngo => Route::NgoLogin {},
        Role::Admin => Route::AdminLogin {},
    }
}

pub fn register_route(role: Role) -> Route {
    match role {
        Role::User => Route::UserRegister {},
        Role::Donor => Route::DonorRegister {},
        Role::Volunteer => Route::VolunteerRegister {},
        Role::Ngo => Route::NgoRegister {},
        Role::Admin => Route::AdminRegister {},
    }
}
