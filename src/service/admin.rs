use serde::Serialize;

use crate::{
    error::Error,
    http::{ApiClient, Transport},
    model::admin::AdminDashboardDto,
    nav::Redirect,
    session::KeyValueStore,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRequest<'a> {
    admin_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

pub struct AdminService<'a, T, S, R> {
    client: &'a ApiClient<T, S, R>,
}

impl<'a, T, S, R> AdminService<'a, T, S, R>
where
    T: Transport,
    S: KeyValueStore,
    R: Redirect,
{
    /// Creates a new instance of [`AdminService`]
    pub fn new(client: &'a ApiClient<T, S, R>) -> Self {
        Self { client }
    }

    pub async fn dashboard(&self) -> Result<AdminDashboardDto, Error> {
        Ok(self.client.get("/admin/dashboard").await?)
    }

    /// Approves a pending NGO registration on behalf of the logged in admin.
    pub async fn approve_ngo(&self, ngo_id: i64, notes: &str) -> Result<(), Error> {
        let request = ReviewRequest {
            admin_id: self.admin_id(),
            notes: Some(notes),
            reason: None,
        };
        let _: serde_json::Value = self
            .client
            .post(&format!("/admin/ngos/{}/approve", ngo_id), &request)
            .await?;

        Ok(())
    }

    pub async fn reject_ngo(&self, ngo_id: i64, reason: &str) -> Result<(), Error> {
        let request = ReviewRequest {
            admin_id: self.admin_id(),
            notes: None,
            reason: Some(reason),
        };
        let _: serde_json::Value = self
            .client
            .post(&format!("/admin/ngos/{}/reject", ngo_id), &request)
            .await?;

        Ok(())
    }

    fn admin_id(&self) -> Option<i64> {
        self.client.sessions().user().and_then(|user| user.id)
    }
}
