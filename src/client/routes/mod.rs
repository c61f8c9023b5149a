pub mod auth;
pub mod dashboard;
pub mod directory;
pub mod donate;
pub mod home;
pub mod ledger;
pub mod not_found;
pub mod transparency;
pub mod volunteer;

pub use directory::NgoDirectory;
pub use donate::DonationPage;
pub use home::Home;
pub use ledger::LedgerPage;
pub use not_found::NotFound;
pub use transparency::TransparencyPage;
pub use volunteer::VolunteerPage;
