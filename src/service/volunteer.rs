use crate::{
    error::Error,
    http::{ApiClient, Transport},
    model::opportunity::{ApplicationDto, ApplicationRequest, OpportunityDto},
    nav::Redirect,
    session::KeyValueStore,
};

pub struct VolunteerService<'a, T, S, R> {
    client: &'a ApiClient<T, S, R>,
}

impl<'a, T, S, R> VolunteerService<'a, T, S, R>
where
    T: Transport,
    S: KeyValueStore,
    R: Redirect,
{
    /// Creates a new instance of [`VolunteerService`]
    pub fn new(client: &'a ApiClient<T, S, R>) -> Self {
        Self { client }
    }

    pub async fn opportunities(&self) -> Result<Vec<OpportunityDto>, Error> {
        Ok(self.client.get("/opportunities").await?)
    }

    pub async fn apply(&self, application: &ApplicationRequest) -> Result<ApplicationDto, Error> {
        Ok(self
            .client
            .post(
                &format!("/opportunities/{}/apply", application.opportunity_id),
                application,
            )
            .await?)
    }

    pub async fn applications(&self, user_id: i64) -> Result<Vec<ApplicationDto>, Error> {
        Ok(self
            .client
            .get(&format!("/applications/user/{}", user_id))
            .await?)
    }
}
