pub static TEST_TOKEN: &str = "test-access-token";
pub static TEST_REFRESH_TOKEN: &str = "test-refresh-token";
/// Token issued by the mock refresh endpoint.
pub static TEST_REFRESHED_TOKEN: &str = "test-refreshed-access-token";

pub static TEST_EMAIL: &str = "priya@example.org";
pub static TEST_PASSWORD: &str = "correct horse battery";
pub static TEST_NAME: &str = "Priya Sharma";
pub static TEST_USER_ID: i64 = 42;

pub static TEST_NGO_ID: i64 = 7;
pub static TEST_ORGANIZATION: &str = "Helping Hands Foundation";
