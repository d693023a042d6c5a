//! ChargeService and OrderService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use charge_types::{
        Address, AppError, ChargeError, ChargeRequest, ConfirmationError, ConfirmationSender,
        CreditCard, FixedIdSource, Money, Order, OrderConfirmationRequest, OrderItem,
        PlaceOrderRequest, Product,
    };

    use crate::{ChargeService, OrderService, RandomIdSource};

    /// Confirmation sender that records the order ids it was asked to
    /// confirm, optionally failing every call.
    #[derive(Clone)]
    pub struct RecordingSender {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl RecordingSender {
        pub fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail: true,
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConfirmationSender for RecordingSender {
        async fn send_order_confirmation(
            &self,
            req: &OrderConfirmationRequest,
        ) -> Result<(), ConfirmationError> {
            self.calls.lock().unwrap().push(req.order.order_id.clone());
            if self.fail {
                return Err(ConfirmationError::Rejected { status: 400 });
            }
            Ok(())
        }
    }

    fn valid_request() -> ChargeRequest {
        ChargeRequest {
            amount: Some(Money::new("USD", 10, 0).unwrap()),
            credit_card: Some(CreditCard::new("4111111111111111", Some("123"))),
        }
    }

    fn sample_order() -> Order {
        Order {
            order_id: "12345".to_string(),
            shipping_address: Address {
                street: "123 Test St".to_string(),
                city: "Test City".to_string(),
                state: "TS".to_string(),
                country: "Test Country".to_string(),
                zip_code: "12345".to_string(),
            },
            items: vec![OrderItem {
                item: Product {
                    product_id: "product1".to_string(),
                    quantity: 1,
                },
                cost: Money::new("USD", 10, 0).unwrap(),
            }],
        }
    }

    #[test]
    fn test_empty_request_fails_missing_fields() {
        let service = ChargeService::new(RandomIdSource);

        let result = service.charge(&ChargeRequest::default());

        assert_eq!(result, Err(ChargeError::MissingFields));
    }

    #[test]
    fn test_missing_amount_takes_precedence_over_card() {
        let service = ChargeService::new(RandomIdSource);

        // Card is present but invalid; the absent amount must win.
        let req = ChargeRequest {
            amount: None,
            credit_card: Some(CreditCard::new("", None::<String>)),
        };

        assert_eq!(service.charge(&req), Err(ChargeError::MissingFields));
    }

    #[test]
    fn test_missing_card_fails_missing_fields() {
        let service = ChargeService::new(RandomIdSource);

        let req = ChargeRequest {
            amount: Some(Money::new("USD", 10, 0).unwrap()),
            credit_card: None,
        };

        assert_eq!(service.charge(&req), Err(ChargeError::MissingFields));
    }

    #[test]
    fn test_empty_card_number_fails_invalid_credit_card() {
        let service = ChargeService::new(RandomIdSource);

        let req = ChargeRequest {
            amount: Some(Money::new("USD", 10, 0).unwrap()),
            credit_card: Some(CreditCard::new("", None::<String>)),
        };

        assert_eq!(service.charge(&req), Err(ChargeError::InvalidCreditCard));
    }

    #[test]
    fn test_missing_cvv_fails_invalid_credit_card() {
        let service = ChargeService::new(RandomIdSource);

        let req = ChargeRequest {
            amount: Some(Money::new("USD", 10, 0).unwrap()),
            credit_card: Some(CreditCard::new("4111111111111111", None::<String>)),
        };

        assert_eq!(service.charge(&req), Err(ChargeError::InvalidCreditCard));
    }

    #[test]
    fn test_zero_cvv_fails_invalid_credit_card() {
        let service = ChargeService::new(RandomIdSource);

        let req = ChargeRequest {
            amount: Some(Money::new("USD", 10, 0).unwrap()),
            credit_card: Some(CreditCard::new("4111111111111111", Some("0"))),
        };

        assert_eq!(service.charge(&req), Err(ChargeError::InvalidCreditCard));
    }

    #[test]
    fn test_negative_amount_fails_invalid_amount() {
        let service = ChargeService::new(RandomIdSource);

        // Built through serde to bypass the validating constructor.
        let amount: Money =
            serde_json::from_str(r#"{"currency_code":"USD","units":-10,"nanos":0}"#).unwrap();
        let req = ChargeRequest {
            amount: Some(amount),
            credit_card: Some(CreditCard::new("4111111111111111", Some("123"))),
        };

        assert!(matches!(
            service.charge(&req),
            Err(ChargeError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_valid_request_issues_prefixed_id() {
        let service = ChargeService::new(RandomIdSource);

        let result = service.charge(&valid_request()).unwrap();

        let suffix = result
            .transaction_id
            .strip_prefix("txn_")
            .expect("txn_ prefix");
        assert!(suffix.len() >= 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_identical_requests_get_distinct_ids() {
        let service = ChargeService::new(RandomIdSource);

        let first = service.charge(&valid_request()).unwrap();
        let second = service.charge(&valid_request()).unwrap();

        assert_ne!(first.transaction_id, second.transaction_id);
    }

    #[test]
    fn test_fixed_id_source_makes_issuance_deterministic() {
        let service = ChargeService::new(FixedIdSource::new("txn_fixed0001"));

        let result = service.charge(&valid_request()).unwrap();

        assert_eq!(result.transaction_id, "txn_fixed0001");
    }

    #[tokio::test]
    async fn test_place_order_charges_and_confirms() {
        let sender = RecordingSender::new();
        let service = OrderService::new(
            ChargeService::new(FixedIdSource::new("txn_fixed0001")),
            sender.clone(),
        );

        let receipt = service
            .place_order(PlaceOrderRequest {
                email: "test@example.com".to_string(),
                order: sample_order(),
                amount: Some(Money::new("USD", 10, 0).unwrap()),
                credit_card: Some(CreditCard::new("4111111111111111", Some("123"))),
            })
            .await
            .unwrap();

        assert_eq!(receipt.transaction_id, "txn_fixed0001");
        assert!(receipt.confirmation_sent);
        assert_eq!(sender.calls(), vec!["12345".to_string()]);
    }

    #[tokio::test]
    async fn test_place_order_charge_failure_skips_confirmation() {
        let sender = RecordingSender::new();
        let service = OrderService::new(ChargeService::new(RandomIdSource), sender.clone());

        let result = service
            .place_order(PlaceOrderRequest {
                email: "test@example.com".to_string(),
                order: sample_order(),
                amount: None,
                credit_card: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Charge(ChargeError::MissingFields))
        ));
        assert!(sender.calls().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_confirmation_failure_is_nonfatal() {
        let sender = RecordingSender::failing();
        let service = OrderService::new(ChargeService::new(RandomIdSource), sender.clone());

        let receipt = service
            .place_order(PlaceOrderRequest {
                email: "test@example.com".to_string(),
                order: sample_order(),
                amount: Some(Money::new("USD", 10, 0).unwrap()),
                credit_card: Some(CreditCard::new("4111111111111111", Some("123"))),
            })
            .await
            .unwrap();

        assert!(receipt.transaction_id.starts_with("txn_"));
        assert!(!receipt.confirmation_sent);
        assert_eq!(sender.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_place_order_empty_email_rejected_before_charging() {
        let sender = RecordingSender::new();
        let service = OrderService::new(ChargeService::new(RandomIdSource), sender.clone());

        let result = service
            .place_order(PlaceOrderRequest {
                email: "   ".to_string(),
                order: sample_order(),
                amount: Some(Money::new("USD", 10, 0).unwrap()),
                credit_card: Some(CreditCard::new("4111111111111111", Some("123"))),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(sender.calls().is_empty());
    }
}
