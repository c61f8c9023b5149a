use crate::{
    error::Error,
    http::{ApiClient, Transport},
    model::{
        donation::DonationDto,
        fund_report::{FundReportDto, FundReportRequest},
        ngo::{NgoDto, NgoProfileRequest, NgoSearch},
        opportunity::{OpportunityDto, OpportunityRequest},
        user::SessionUser,
    },
    nav::Redirect,
    session::KeyValueStore,
};

pub struct NgoService<'a, T, S, R> {
    client: &'a ApiClient<T, S, R>,
}

impl<'a, T, S, R> NgoService<'a, T, S, R>
where
    T: Transport,
    S: KeyValueStore,
    R: Redirect,
{
    /// Creates a new instance of [`NgoService`]
    pub fn new(client: &'a ApiClient<T, S, R>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<NgoDto>, Error> {
        Ok(self.client.get("/ngos").await?)
    }

    pub async fn get(&self, id: i64) -> Result<NgoDto, Error> {
        Ok(self.client.get(&format!("/ngos/{}", id)).await?)
    }

    /// NGO registered with `email`, used to resolve the logged in NGO's own record.
    pub async fn by_email(&self, email: &str) -> Result<NgoDto, Error> {
        let query = [("email".to_string(), email.to_string())];
        Ok(self.client.get_with_query("/ngos/by-email", &query).await?)
    }

    /// Id of the NGO record owned by `user`.
    ///
    /// Falls back to the profile cached at login and then to a lookup by email. `None` when the
    /// backend has no NGO registered under that email.
    pub async fn own_id(&self, user: &SessionUser) -> Result<Option<i64>, Error> {
        if let Some(id) = user.ngo_id {
            return Ok(Some(id));
        }

        let cached = self
            .client
            .sessions()
            .ngo_profile()
            .and_then(|profile| profile.get("id").and_then(serde_json::Value::as_i64));
        if cached.is_some() {
            return Ok(cached);
        }

        match self.by_email(&user.email).await {
            Ok(ngo) => Ok(Some(ngo.id)),
            Err(Error::HttpError(e)) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Searches the directory; blank filters are left out of the query.
    pub async fn search(&self, filters: &NgoSearch) -> Result<Vec<NgoDto>, Error> {
        Ok(self
            .client
            .get_with_query("/ngos/search", &filters.to_query())
            .await?)
    }

    pub async fn causes(&self) -> Result<Vec<String>, Error> {
        Ok(self.client.get("/ngos/causes").await?)
    }

    pub async fn locations(&self) -> Result<Vec<String>, Error> {
        Ok(self.client.get("/ngos/locations").await?)
    }

    pub async fn donations(&self, id: i64) -> Result<Vec<DonationDto>, Error> {
        Ok(self.client.get(&format!("/ngos/{}/donations", id)).await?)
    }

    pub async fn opportunities(&self, id: i64) -> Result<Vec<OpportunityDto>, Error> {
        Ok(self
            .client
            .get(&format!("/ngos/{}/opportunities", id))
            .await?)
    }

    pub async fn create(&self, profile: &NgoProfileRequest) -> Result<NgoDto, Error> {
        Ok(self.client.post("/ngos", profile).await?)
    }

    /// Publishes a new volunteer opportunity for the NGO.
    pub async fn create_opportunity(
        &self,
        ngo_id: i64,
        opportunity: &OpportunityRequest,
    ) -> Result<(), Error> {
        // The backend echoes the stored entity, which nests the whole NGO record
        let _: serde_json::Value = self
            .client
            .post(&format!("/ngos/{}/opportunities", ngo_id), opportunity)
            .await?;

        Ok(())
    }

    pub async fn update_opportunity(
        &self,
        ngo_id: i64,
        opportunity_id: i64,
        opportunity: &OpportunityRequest,
    ) -> Result<(), Error> {
        let _: serde_json::Value = self
            .client
            .put(
                &format!("/ngos/{}/opportunities/{}", ngo_id, opportunity_id),
                opportunity,
            )
            .await?;

        Ok(())
    }

    pub async fn delete_opportunity(&self, ngo_id: i64, opportunity_id: i64) -> Result<(), Error> {
        Ok(self
            .client
            .delete(&format!("/ngos/{}/opportunities/{}", ngo_id, opportunity_id))
            .await?)
    }

    /// Fund utilization reports of an NGO, newest report date first.
    pub async fn fund_reports(&self, ngo_id: i64) -> Result<Vec<FundReportDto>, Error> {
        Ok(self
            .client
            .get(&format!("/transparency/reports/ngo/{}", ngo_id))
            .await?)
    }

    pub async fn create_fund_report(
        &self,
        ngo_id: i64,
        report: &FundReportRequest,
    ) -> Result<FundReportDto, Error> {
        Ok(self
            .client
            .post(&format!("/transparency/reports/ngo/{}", ngo_id), report)
            .await?)
    }
}
