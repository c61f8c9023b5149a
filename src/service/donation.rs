use dioxus_logger::tracing;

use crate::{
    error::Error,
    http::{ApiClient, Transport},
    model::donation::{CreateDonationRequest, DonationDto},
    nav::Redirect,
    session::KeyValueStore,
};

/// Status recorded for donations paid through the mock payment processor.
pub const COMPLETED: &str = "COMPLETED";

pub struct DonationService<'a, T, S, R> {
    client: &'a ApiClient<T, S, R>,
}

impl<'a, T, S, R> DonationService<'a, T, S, R>
where
    T: Transport,
    S: KeyValueStore,
    R: Redirect,
{
    /// Creates a new instance of [`DonationService`]
    pub fn new(client: &'a ApiClient<T, S, R>) -> Self {
        Self { client }
    }

    /// Records a paid donation.
    ///
    /// The donation is stored as completed whatever status the caller set, and is appended to
    /// the local donation cache. Failing to update the cache does not fail the donation.
    pub async fn create(&self, donation: CreateDonationRequest) -> Result<DonationDto, Error> {
        let request = CreateDonationRequest {
            status: COMPLETED.to_string(),
            ..donation
        };

        let created: DonationDto = self.client.post("/donations", &request).await?;

        match serde_json::to_value(&created) {
            Ok(value) => {
                if let Err(e) = self.client.sessions().remember_donation(&value) {
                    tracing::warn!("Failed to cache donation {}: {}", created.id, e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize donation {}: {}", created.id, e),
        }

        tracing::info!(ngo_id = request.ngo_id, "Donation {} recorded", created.id);

        Ok(created)
    }

    /// Donations made by a user, newest first as returned by the backend.
    pub async fn history(&self, user_id: i64) -> Result<Vec<DonationDto>, Error> {
        Ok(self
            .client
            .get(&format!("/donations/user/{}", user_id))
            .await?)
    }
}
