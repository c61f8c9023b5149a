//! JSON payloads matching the backend's response shapes.

use serde_json::{json, Value};

use crate::constant::{
    TEST_EMAIL, TEST_NAME, TEST_NGO_ID, TEST_ORGANIZATION, TEST_REFRESHED_TOKEN,
    TEST_REFRESH_TOKEN, TEST_TOKEN, TEST_USER_ID,
};

/// Stored session user record for `role`, serialized the way the client persists it.
pub fn user_json(role: &str) -> String {
    user(role).to_string()
}

/// Session user record for `role`; NGO accounts carry their organization linkage.
pub fn user(role: &str) -> Value {
    let mut user = json!({
        "id": TEST_USER_ID,
        "email": TEST_EMAIL,
        "name": TEST_NAME,
        "role": role,
    });

    if role.eq_ignore_ascii_case("NGO") {
        user["organizationName"] = json!(TEST_ORGANIZATION);
        user["ngoId"] = json!(TEST_NGO_ID);
    }

    user
}

/// Successful `POST /auth/login` body for `role`.
pub fn login_response(role: &str) -> Value {
    let mut body = json!({
        "token": TEST_TOKEN,
        "refreshToken": TEST_REFRESH_TOKEN,
        "id": TEST_USER_ID,
        "email": TEST_EMAIL,
        "fullName": TEST_NAME,
        "role": role,
    });

    if role.eq_ignore_ascii_case("NGO") {
        body["organizationName"] = json!(TEST_ORGANIZATION);
        body["ngoId"] = json!(TEST_NGO_ID);
    }

    body
}

/// Successful `POST /auth/refresh-token` body for `role`.
pub fn refresh_response(role: &str) -> Value {
    json!({
        "token": TEST_REFRESHED_TOKEN,
        "user": user(role),
    })
}

/// Error body in the backend's `{ "error": ... }` shape.
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

pub fn ngo(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "organizationName": name,
        "description": format!("{name} works with local communities."),
        "location": "Pune",
        "causes": ["Education", "Healthcare"],
        "isVerified": true,
        "createdAt": "2024-03-01T10:00:00",
    })
}

pub fn ngo_list() -> Value {
    json!([ngo(TEST_NGO_ID, TEST_ORGANIZATION), ngo(8, "Green Earth Trust")])
}

pub fn donation(id: i64, amount: f64) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "paymentMethod": "CARD",
        "pledgeType": "ONE_TIME",
        "status": "COMPLETED",
        "transactionId": format!("pay_{id}"),
        "donationDate": "2024-05-12T09:30:00",
        "userId": TEST_USER_ID,
        "ngoId": TEST_NGO_ID,
        "donorName": TEST_NAME,
    })
}

pub fn opportunity(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Weekend teaching sessions",
        "cause": "Education",
        "location": "Mumbai",
        "requirements": ["Teaching"],
        "volunteersNeeded": 10,
        "volunteersApplied": 3,
        "ngo": TEST_ORGANIZATION,
    })
}

pub fn fund_report(id: i64, received: f64, spent: f64) -> Value {
    json!({
        "id": id,
        "ngoId": TEST_NGO_ID,
        "reportDate": "2025-03-31",
        "totalFundsReceived": received,
        "totalFundsSpent": spent,
        "breakdown": "Education: 6000, Health camps: 2500",
        "createdAt": "2025-04-01T09:15:30",
    })
}

pub fn admin_dashboard() -> Value {
    json!({
        "overview": {
            "totalNgosRegistered": 14,
            "totalNgosVerified": 12,
            "totalNgosPending": 2,
            "totalUsersRegistered": 120,
            "totalDonationsAmount": 48250.5,
            "totalDonationsCount": 310,
            "activeVolunteerOpportunities": 9,
            "pendingVerifications": 2,
        },
        "alerts": [
            { "id": 1, "alertType": "VERIFICATION", "priority": "HIGH", "title": "Two NGOs awaiting verification" }
        ],
        "pendingVerifications": [
            { "id": 3, "organizationName": "River Care", "status": "PENDING" }
        ],
    })
}
