use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page, RoleProtectedRoute, TextField},
        format::format_amount,
        hooks::{use_client, use_session},
        routes::{
            dashboard::{DonationTable, StatCard},
            ledger::{FundReportTable, LedgerStats},
        },
    },
    error::{auth::FieldErrors, Error},
    model::{
        donation::DonationDto,
        fund_report::{FundReportDraft, FundReportDto},
        ngo::NgoDto,
        opportunity::{
            OpportunityDraft, OpportunityDto, DURATION_TYPES, OPPORTUNITY_CAUSES,
            TIME_COMMITMENTS, WORK_TYPES,
        },
        user::Role,
    },
    service::NgoService,
};

#[component]
pub fn NgoDashboard() -> Element {
    rsx!(
        document::Title { "NGO Dashboard | NGO Connect" }
        RoleProtectedRoute { roles: vec![Role::Ngo, Role::Admin],
            NgoOverview {}
        }
    )
}

#[derive(Clone, Debug, PartialEq)]
struct NgoData {
    profile: NgoDto,
    donations: Vec<DonationDto>,
    opportunities: Vec<OpportunityDto>,
    reports: Vec<FundReportDto>,
}

#[component]
fn NgoOverview() -> Element {
    let client = use_client();
    let session = use_session();
    let user = session.read().as_ref().map(|s| s.user.clone());
    let mut editing = use_signal(|| None::<OpportunityDraft>);
    let mut reporting = use_signal(|| false);

    let mut data = use_resource(move || {
        let client = client.clone();
        let user = user.clone();
        async move {
            let Some(user) = user else {
                return Ok(None);
            };
            let service = NgoService::new(&client);
            let Some(id) = service.own_id(&user).await? else {
                return Ok(None);
            };

            Ok::<_, Error>(Some(NgoData {
                profile: service.get(id).await?,
                donations: service.donations(id).await?,
                opportunities: service.opportunities(id).await?,
                reports: service.fund_reports(id).await?,
            }))
        }
    });

    rsx!(
        Page { class: "dashboard",
            {match &*data.read_unchecked() {
                Some(Ok(Some(data_ref))) => {
                    let raised: f64 = data_ref.donations.iter().map(|d| d.amount).sum();
                    let profile = &data_ref.profile;
                    let ngo_id = profile.id;
                    rsx! {
                        div { class: "dashboard-header",
                            h1 { class: "text-2xl", "{profile.organization_name}" }
                            if profile.is_verified == Some(true) {
                                span { class: "badge badge-success", "Verified" }
                            } else {
                                span { class: "badge", "Verification pending" }
                            }
                        }
                        if let Some(description) = &profile.description {
                            p { "{description}" }
                        }
                        div { class: "stats",
                            StatCard { title: "Funds Raised", value: format_amount(raised) }
                            StatCard { title: "Donations", value: data_ref.donations.len().to_string() }
                            StatCard { title: "Opportunities", value: data_ref.opportunities.len().to_string() }
                        }
                        div { class: "grid grid-2",
                            div { class: "card",
                                div { class: "card-body",
                                    h2 { class: "card-title", "Recent Donations" }
                                    DonationTable { donations: data_ref.donations.clone() }
                                }
                            }
                            div { class: "card",
                                div { class: "card-body",
                                    div { class: "row",
                                        h2 { class: "card-title", "Volunteer Opportunities" }
                                        button {
                                            class: "btn btn-primary btn-sm",
                                            onclick: move |_| editing.set(Some(OpportunityDraft::default())),
                                            "New Opportunity"
                                        }
                                    }
                                    if let Some(draft) = editing() {
                                        OpportunityForm {
                                            key: "{draft.id:?}",
                                            ngo_id,
                                            draft: draft.clone(),
                                            on_saved: move |_| {
                                                editing.set(None);
                                                data.restart();
                                            },
                                            on_cancel: move |_| editing.set(None),
                                        }
                                    }
                                    if data_ref.opportunities.is_empty() {
                                        p { class: "muted", "No opportunities published yet." }
                                    }
                                    ul { class: "list",
                                        for opportunity in data_ref.opportunities.iter() {
                                            OpportunityItem {
                                                key: "{opportunity.id}",
                                                ngo_id,
                                                opportunity: opportunity.clone(),
                                                on_edit: move |draft| editing.set(Some(draft)),
                                                on_deleted: move |_| data.restart(),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "card",
                            div { class: "card-body",
                                div { class: "row",
                                    h2 { class: "card-title", "Fund Utilization" }
                                    if !reporting() {
                                        button {
                                            class: "btn btn-primary btn-sm",
                                            onclick: move |_| reporting.set(true),
                                            "Add Fund Report"
                                        }
                                    }
                                }
                                if reporting() {
                                    FundReportForm {
                                        ngo_id,
                                        on_saved: move |_| {
                                            reporting.set(false);
                                            data.restart();
                                        },
                                        on_cancel: move |_| reporting.set(false),
                                    }
                                }
                                LedgerStats { reports: data_ref.reports.clone() }
                                FundReportTable { reports: data_ref.reports.clone() }
                            }
                        }
                    }
                }
                Some(Ok(None)) => rsx! {
                    h1 { class: "text-2xl", "NGO Dashboard" }
                    p { class: "muted", "This account is not linked to an NGO profile." }
                },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}

#[component]
fn OpportunityItem(
    ngo_id: i64,
    opportunity: OpportunityDto,
    on_edit: EventHandler<OpportunityDraft>,
    on_deleted: EventHandler<()>,
) -> Element {
    let client = use_client();
    let mut error = use_signal(|| None::<String>);
    let mut deleting = use_signal(|| false);

    let opportunity_id = opportunity.id;
    let draft = OpportunityDraft::from_existing(&opportunity);

    let delete = move |_| {
        let client = client.clone();
        async move {
            deleting.set(true);
            match NgoService::new(&client)
                .delete_opportunity(ngo_id, opportunity_id)
                .await
            {
                Ok(()) => {
                    tracing::info!(ngo_id, opportunity_id, "Opportunity deleted");
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::warn!("Failed to delete opportunity {}: {}", opportunity_id, e);
                    error.set(Some(e.user_message()));
                    deleting.set(false);
                }
            }
        }
    };

    rsx!(
        li {
            div { class: "row",
                div {
                    strong { "{opportunity.title}" }
                    " "
                    {format!(
                        "({}/{} volunteers)",
                        opportunity.volunteers_applied.unwrap_or_default(),
                        opportunity.volunteers_needed.unwrap_or_default(),
                    )}
                    if opportunity.is_active == Some(false) {
                        " "
                        span { class: "badge", "Inactive" }
                    }
                }
                div { class: "row-actions",
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| on_edit.call(draft.clone()),
                        "Edit"
                    }
                    button {
                        class: "btn btn-ghost btn-sm",
                        disabled: deleting(),
                        onclick: delete,
                        if deleting() { "Deleting..." } else { "Delete" }
                    }
                }
            }
            ErrorAlert { message: error() }
        }
    )
}

/// Create or edit form; an opportunity is edited when the draft carries an id.
#[component]
fn OpportunityForm(
    ngo_id: i64,
    draft: OpportunityDraft,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let client = use_client();
    let is_edit = draft.id.is_some();

    let mut form = use_signal(move || draft);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let client = client.clone();

        async move {
            let validated = form.read().validate();
            let request = match validated {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::default());
            error.set(None);
            submitting.set(true);

            let service = NgoService::new(&client);
            let opportunity_id = form.read().id;
            let result = match opportunity_id {
                Some(id) => service.update_opportunity(ngo_id, id, &request).await,
                None => service.create_opportunity(ngo_id, &request).await,
            };

            match result {
                Ok(()) => {
                    tracing::info!(ngo_id, ?opportunity_id, "Opportunity saved");
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::warn!("Failed to save opportunity: {}", e);
                    error.set(Some(e.user_message()));
                    submitting.set(false);
                }
            }
        }
    };

    let field_error = move |field: &str| field_errors.read().get(field).map(str::to_string);
    let current = form();

    rsx!(
        form { class: "form card-body", onsubmit,
            h3 { if is_edit { "Edit Opportunity" } else { "New Opportunity" } }
            ErrorAlert { message: error() }
            TextField {
                label: "Title",
                value: current.title.clone(),
                error: field_error("title"),
                oninput: move |v| form.write().title = v,
            }
            div { class: "field",
                label { class: "label", "Description" }
                textarea {
                    class: if field_error("description").is_some() { "input input-error" } else { "input" },
                    rows: 3,
                    value: current.description.clone(),
                    oninput: move |e| form.write().description = e.value(),
                }
                if let Some(message) = field_error("description") {
                    p { class: "field-error", "{message}" }
                }
            }
            TextField {
                label: "Skills Required (comma separated)",
                value: current.skills.clone(),
                error: field_error("skillsRequired"),
                oninput: move |v| form.write().skills = v,
            }
            TextField {
                label: "Volunteers Needed",
                input_type: "number",
                value: current.volunteers_needed.clone(),
                error: field_error("volunteersNeeded"),
                oninput: move |v| form.write().volunteers_needed = v,
            }
            TextField {
                label: "Location",
                value: current.location.clone(),
                error: field_error("location"),
                oninput: move |v| form.write().location = v,
            }
            label { class: "label", "Work Type" }
            select {
                class: "input",
                value: current.work_type.clone(),
                onchange: move |e| form.write().work_type = e.value(),
                for (value, label) in WORK_TYPES {
                    option { value, "{label}" }
                }
            }
            label { class: "label", "Cause" }
            select {
                class: "input",
                value: current.cause.clone(),
                onchange: move |e| form.write().cause = e.value(),
                for cause in OPPORTUNITY_CAUSES {
                    option { value: cause, "{cause}" }
                }
            }
            label { class: "label", "Time Commitment" }
            select {
                class: "input",
                value: current.time_commitment.clone(),
                onchange: move |e| form.write().time_commitment = e.value(),
                for commitment in TIME_COMMITMENTS {
                    option { value: commitment, "{commitment}" }
                }
            }
            label { class: "label", "Duration" }
            select {
                class: "input",
                value: current.duration_type.clone(),
                onchange: move |e| form.write().duration_type = e.value(),
                for (value, label) in DURATION_TYPES {
                    option { value, "{label}" }
                }
            }
            TextField {
                label: "Start Date",
                input_type: "date",
                value: current.start_date.clone(),
                error: field_error("startDate"),
                oninput: move |v| form.write().start_date = v,
            }
            if current.duration_type != DURATION_TYPES[0].0 {
                TextField {
                    label: "End Date",
                    input_type: "date",
                    value: current.end_date.clone(),
                    error: field_error("endDate"),
                    oninput: move |v| form.write().end_date = v,
                }
            }
            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: current.is_active,
                    onchange: move |e| form.write().is_active = e.checked(),
                }
                "Accepting applications"
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Saving..." } else if is_edit { "Update Opportunity" } else { "Create Opportunity" }
                }
            }
        }
    )
}

#[component]
fn FundReportForm(ngo_id: i64, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_client();

    let mut form = use_signal(FundReportDraft::default);
    let mut field_errors = use_signal(FieldErrors::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let client = client.clone();

        async move {
            let validated = form.read().validate();
            let request = match validated {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::default());
            error.set(None);
            submitting.set(true);

            match NgoService::new(&client)
                .create_fund_report(ngo_id, &request)
                .await
            {
                Ok(report) => {
                    tracing::info!(ngo_id, report_id = report.id, "Fund report published");
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::warn!("Failed to publish fund report: {}", e);
                    error.set(Some(e.user_message()));
                    submitting.set(false);
                }
            }
        }
    };

    let field_error = move |field: &str| field_errors.read().get(field).map(str::to_string);
    let current = form();

    rsx!(
        form { class: "form", onsubmit,
            ErrorAlert { message: error() }
            TextField {
                label: "Report Date",
                input_type: "date",
                value: current.report_date.clone(),
                error: field_error("reportDate"),
                oninput: move |v| form.write().report_date = v,
            }
            TextField {
                label: "Total Funds Received",
                input_type: "number",
                value: current.total_funds_received.clone(),
                error: field_error("totalFundsReceived"),
                oninput: move |v| form.write().total_funds_received = v,
            }
            TextField {
                label: "Total Funds Spent",
                input_type: "number",
                value: current.total_funds_spent.clone(),
                error: field_error("totalFundsSpent"),
                oninput: move |v| form.write().total_funds_spent = v,
            }
            div { class: "field",
                label { class: "label", "Breakdown" }
                textarea {
                    class: if field_error("breakdown").is_some() { "input input-error" } else { "input" },
                    rows: 3,
                    placeholder: "How the funds were used",
                    value: current.breakdown.clone(),
                    oninput: move |e| form.write().breakdown = e.value(),
                }
                if let Some(message) = field_error("breakdown") {
                    p { class: "field-error", "{message}" }
                }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Publishing..." } else { "Publish Report" }
                }
            }
        }
    )
}
