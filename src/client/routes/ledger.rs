use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page},
        format::format_amount,
        hooks::use_client,
    },
    model::fund_report::{FundReportDto, LedgerTotals},
    service::NgoService,
};

/// Public ledger of the fund reports one organization has published.
#[component]
pub fn LedgerPage() -> Element {
    let client = use_client();
    let mut selected = use_signal(|| None::<i64>);

    let ngos = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { NgoService::new(&client).list().await }
        }
    });

    let reports = use_resource(move || {
        let client = client.clone();
        let ngo_id = selected();
        async move {
            match ngo_id {
                Some(id) => NgoService::new(&client).fund_reports(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    rsx!(
        document::Title { "Fund Ledger | NGO Connect" }
        Page { class: "transparency",
            div { class: "dashboard-header",
                div {
                    h1 { class: "text-2xl", "Fund Ledger" }
                    p { "Funds received and spent, as reported by each organization." }
                }
            }
            {match &*ngos.read_unchecked() {
                Some(Ok(ngos)) => rsx! {
                    label { class: "label", "Organization" }
                    select {
                        class: "input",
                        onchange: move |e| selected.set(e.value().parse().ok()),
                        option { value: "", "Select an organization" }
                        for ngo in ngos.iter() {
                            option { key: "{ngo.id}", value: "{ngo.id}", "{ngo.organization_name}" }
                        }
                    }
                },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
            {match &*reports.read_unchecked() {
                Some(Ok(Some(reports))) => rsx! {
                    LedgerStats { reports: reports.clone() }
                    div { class: "card",
                        div { class: "card-body",
                            h2 { class: "card-title", "Reports" }
                            FundReportTable { reports: reports.clone() }
                        }
                    }
                },
                Some(Ok(None)) => rsx! {
                    p { class: "muted", "Choose an organization to see its ledger." }
                },
                Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
                None => rsx! { Loading {} },
            }}
        }
    )
}

#[component]
pub fn LedgerStats(reports: Vec<FundReportDto>) -> Element {
    let totals = LedgerTotals::of(&reports);

    rsx!(
        div { class: "stats",
            div { class: "stat",
                div { class: "stat-title", "Funds Received" }
                div { class: "stat-value", {format_amount(totals.received)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Funds Spent" }
                div { class: "stat-value", {format_amount(totals.spent)} }
            }
            div { class: "stat",
                div { class: "stat-title", "Balance" }
                div { class: "stat-value", {format_amount(totals.balance())} }
            }
        }
    )
}

#[component]
pub fn FundReportTable(reports: Vec<FundReportDto>) -> Element {
    if reports.is_empty() {
        return rsx!(p { class: "muted", "No fund reports published yet." });
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Report Date" }
                        th { "Received" }
                        th { "Spent" }
                        th { "Balance" }
                        th { "Breakdown" }
                    }
                }
                tbody {
                    {reports.iter().map(|report| rsx!(
                        tr { key: "{report.id}",
                            td { "{report.report_date}" }
                            td { {format_amount(report.total_funds_received)} }
                            td { {format_amount(report.total_funds_spent)} }
                            td { {format_amount(report.balance())} }
                            td { "{report.breakdown}" }
                        }
                    ))}
                }
            }
        }
    )
}
