use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ErrorAlert, Loading, Page},
        format::format_amount,
        hooks::{use_client, use_session},
        router::Route,
    },
    model::{
        donation::{DonationDraft, DonationDto, PledgeType, PAYMENT_METHODS, QUICK_AMOUNTS},
        ngo::NgoDto,
        payment::{PaymentReceipt, PaymentRequest},
    },
    service::{DonationService, MockPaymentProcessor, NgoService},
};

/// Step of the donation flow.
#[derive(Clone, Debug, PartialEq)]
enum Step {
    ChooseNgo,
    Details(NgoDto),
    Receipt {
        ngo: NgoDto,
        payment: PaymentReceipt,
        donation: DonationDto,
    },
}

#[component]
pub fn DonationPage() -> Element {
    let session = use_session();
    let mut step = use_signal(|| Step::ChooseNgo);

    if session.read().is_none() {
        return rsx!(
            document::Title { "Donate | NGO Connect" }
            Page { class: "centered",
                h1 { class: "text-2xl", "Make a Donation" }
                p { "Please log in to make a donation." }
                Link { to: Route::SelectLogin {}, class: "btn btn-primary", "Login" }
            }
        );
    }

    rsx!(
        document::Title { "Donate | NGO Connect" }
        Page { class: "donate",
            {match step() {
                Step::ChooseNgo => rsx! {
                    NgoPicker { on_select: move |ngo| step.set(Step::Details(ngo)) }
                },
                Step::Details(ngo) => rsx! {
                    DonationForm {
                        ngo,
                        on_back: move |_| step.set(Step::ChooseNgo),
                        on_success: move |(ngo, payment, donation)| step.set(Step::Receipt { ngo, payment, donation }),
                    }
                },
                Step::Receipt { ngo, payment, donation } => rsx! {
                    Receipt { ngo, payment, donation, on_done: move |_| step.set(Step::ChooseNgo) }
                },
            }}
        }
    )
}

#[component]
fn NgoPicker(on_select: EventHandler<NgoDto>) -> Element {
    let client = use_client();

    let ngos = use_resource(move || {
        let client = client.clone();
        async move { NgoService::new(&client).list().await }
    });

    rsx!(
        h1 { class: "text-2xl", "Choose an organization to support" }
        {match &*ngos.read_unchecked() {
            Some(Ok(ngos)) => rsx! {
                div { class: "grid grid-3",
                    for ngo in ngos.iter().cloned() {
                        div { key: "{ngo.id}", class: "card",
                            div { class: "card-body",
                                h3 { class: "card-title", "{ngo.organization_name}" }
                                p { {ngo.description.clone().unwrap_or_default()} }
                                button {
                                    class: "btn btn-primary btn-sm",
                                    onclick: move |_| on_select.call(ngo.clone()),
                                    "Donate"
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorAlert { message: e.user_message() } },
            None => rsx! { Loading {} },
        }}
    )
}

#[component]
fn DonationForm(
    ngo: NgoDto,
    on_back: EventHandler<()>,
    on_success: EventHandler<(NgoDto, PaymentReceipt, DonationDto)>,
) -> Element {
    let client = use_client();
    let session = use_session();
    let mut draft = use_signal(DonationDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut processing = use_signal(|| false);

    let ngo_name = ngo.organization_name.clone();

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let client = client.clone();
        let ngo = ngo.clone();

        async move {
            let Some(user) = session.read().as_ref().map(|s| s.user.clone()) else {
                error.set(Some("Please log in to make a donation".to_string()));
                return;
            };
            let Some(amount) = draft.read().amount() else {
                error.set(Some("Please select or enter a valid amount".to_string()));
                return;
            };

            error.set(None);
            processing.set(true);

            let payment = MockPaymentProcessor::default()
                .process(&PaymentRequest {
                    amount,
                    email: user.email.clone(),
                    name: user.name.clone(),
                })
                .await;

            let request = draft.read().to_request(ngo.id, user.id, &payment.payment_id);
            let result = match request {
                Some(request) => DonationService::new(&client).create(request).await,
                None => {
                    processing.set(false);
                    return;
                }
            };

            processing.set(false);
            match result {
                Ok(donation) => on_success.call((ngo, payment, donation)),
                Err(e) => {
                    tracing::error!("Payment {} succeeded but recording the donation failed: {}", payment.payment_id, e);
                    error.set(Some(e.user_message()));
                }
            }
        }
    };

    let current = draft();
    let amount_label = current.amount().map(format_amount).unwrap_or_else(|| "-".to_string());

    rsx!(
        div { class: "card donation-card",
            div { class: "card-body",
                h2 { class: "card-title", "Donate to {ngo_name}" }
                ErrorAlert { message: error() }
                form { class: "form", onsubmit,
                    label { class: "label", "Pledge" }
                    div { class: "segmented",
                        for pledge in PledgeType::ALL {
                            button {
                                r#type: "button",
                                class: if current.pledge_type == pledge { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                onclick: move |_| draft.write().pledge_type = pledge,
                                {pledge.label()}
                            }
                        }
                    }
                    label { class: "label", "Amount" }
                    div { class: "segmented",
                        for amount in QUICK_AMOUNTS {
                            button {
                                r#type: "button",
                                class: if current.custom_amount.is_empty() && current.selected_amount == amount { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                onclick: move |_| {
                                    let mut draft = draft.write();
                                    draft.selected_amount = amount;
                                    draft.custom_amount.clear();
                                },
                                {format_amount(amount)}
                            }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        min: "1",
                        placeholder: "Other amount",
                        value: current.custom_amount.clone(),
                        oninput: move |e| draft.write().custom_amount = e.value(),
                    }
                    label { class: "label", "Payment method" }
                    select {
                        class: "input",
                        value: current.payment_method.clone(),
                        onchange: move |e| draft.write().payment_method = e.value(),
                        for (label, value) in PAYMENT_METHODS {
                            option { value, "{label}" }
                        }
                    }
                    label { class: "label", "Message (optional)" }
                    textarea {
                        class: "input",
                        rows: 2,
                        value: current.message.clone(),
                        oninput: move |e| draft.write().message = e.value(),
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_back.call(()),
                            "Back"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: processing(),
                            if processing() { "Processing payment..." } else { "Donate {amount_label}" }
                        }
                    }
                }
                p { class: "muted", "Payments are simulated, no card is charged." }
            }
        }
    )
}

#[component]
fn Receipt(
    ngo: NgoDto,
    payment: PaymentReceipt,
    donation: DonationDto,
    on_done: EventHandler<()>,
) -> Element {
    let paid_at = payment.timestamp.format("%d %b %Y, %H:%M UTC").to_string();
    let pledge = donation.pledge_type.clone().unwrap_or_default();

    rsx!(
        div { class: "card receipt",
            div { class: "card-body",
                h2 { class: "card-title", "Thank you for your donation!" }
                dl { class: "details",
                    dt { "Organization" }
                    dd { "{ngo.organization_name}" }
                    dt { "Amount" }
                    dd { {format_amount(payment.amount)} " " "{payment.currency}" }
                    dt { "Pledge" }
                    dd { "{pledge}" }
                    dt { "Payment ID" }
                    dd { "{payment.payment_id}" }
                    dt { "Receipt" }
                    dd { "{payment.receipt}" }
                    dt { "Card" }
                    dd { "{payment.card.brand} ending {payment.card.last4}" }
                    dt { "Date" }
                    dd { "{paid_at}" }
                    dt { "Donation reference" }
                    dd { "#{donation.id}" }
                }
                div { class: "form-actions",
                    button { class: "btn btn-primary", onclick: move |_| on_done.call(()), "Donate again" }
                    Link { to: Route::Home {}, class: "btn btn-ghost", "Back to Home" }
                }
            }
        }
    )
}
