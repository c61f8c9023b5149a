use std::time::Duration;

use chrono::Utc;
use dioxus_logger::tracing;
use rand::{distr::Alphanumeric, Rng};

use crate::model::payment::{CardDetails, PaymentReceipt, PaymentRequest};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Stand-in for a payment gateway that approves every payment after a short delay.
#[derive(Clone, Copy, Debug)]
pub struct MockPaymentProcessor {
    delay: Duration,
}

impl Default for MockPaymentProcessor {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

impl MockPaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Simulates charging a test card for `payment.amount` rupees.
    pub async fn process(&self, payment: &PaymentRequest) -> PaymentReceipt {
        sleep(self.delay).await;

        let receipt = PaymentReceipt {
            success: true,
            payment_id: format!("pay_mock_{}", random_alphanumeric(16).to_ascii_lowercase()),
            amount: payment.amount,
            currency: "INR".to_string(),
            status: "succeeded".to_string(),
            timestamp: Utc::now(),
            receipt: format!("rcpt_{}", random_alphanumeric(8).to_ascii_uppercase()),
            payment_method: "card".to_string(),
            card: CardDetails {
                last4: "4242".to_string(),
                brand: "visa".to_string(),
                funding: "credit".to_string(),
            },
        };

        tracing::info!(
            amount = payment.amount,
            "Mock payment {} approved for {}",
            receipt.payment_id,
            payment.email
        );

        receipt
    }
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = duration.as_millis() as i32;
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });

    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
        tracing::warn!("Payment delay interrupted: {:?}", e);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use crate::{model::payment::PaymentRequest, service::payment::MockPaymentProcessor};

    fn request() -> PaymentRequest {
        PaymentRequest {
            amount: 1500.0,
            email: "donor@example.org".to_string(),
            name: "Ravi".to_string(),
        }
    }

    /// Expect identifiers in the gateway's formats
    #[tokio::test]
    async fn receipt_has_mock_identifiers() {
        let processor = MockPaymentProcessor::with_delay(Duration::ZERO);

        let receipt = processor.process(&request()).await;

        assert!(receipt.success);
        assert_eq!(receipt.amount, 1500.0);
        assert_eq!(receipt.currency, "INR");
        assert_eq!(receipt.status, "succeeded");

        let id = receipt.payment_id.strip_prefix("pay_mock_").unwrap();
        assert_eq!(id.len(), 16);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        let code = receipt.receipt.strip_prefix("rcpt_").unwrap();
        assert_eq!(code.len(), 8);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn payment_ids_differ() {
        let processor = MockPaymentProcessor::with_delay(Duration::ZERO);

        let first = processor.process(&request()).await;
        let second = processor.process(&request()).await;

        assert_ne!(first.payment_id, second.payment_id);
    }
}
