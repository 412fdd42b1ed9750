#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use crate::core::{
        ContactForm, ContactTransport, EndpointResponse, ErrorNotice, FormData, LanguageCode,
        Phase, SubmissionError, SubmissionStatus, TransportError,
    };

    /// Transport returning a canned outcome and recording every call
    struct MockTransport {
        outcome: Result<EndpointResponse, TransportError>,
        calls: Cell<usize>,
        last_payload: RefCell<Option<FormData>>,
    }

    impl MockTransport {
        fn new(outcome: Result<EndpointResponse, TransportError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                last_payload: RefCell::new(None),
            }
        }

        fn ok() -> Self {
            Self::new(Ok(EndpointResponse::new(200)))
        }
    }

    impl ContactTransport for MockTransport {
        async fn send(&self, payload: &FormData) -> Result<EndpointResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_payload.borrow_mut() = Some(payload.clone());
            self.outcome.clone()
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.handle_change("name", "João Pereira");
        form.handle_change("email", "joao@example.com");
        form.handle_change("phone", "11987654321");
        form.handle_change("message", "Quero uma cotação de frete.");
        form
    }

    #[tokio::test]
    async fn test_unacknowledged_submit_never_calls_transport() {
        let transport = MockTransport::ok();
        let mut form = filled_form();
        let before = form.clone();

        let result = form.submit(&transport).await;

        assert_eq!(result, Err(SubmissionError::GuardRejection));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form, before);
        assert_eq!(form.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_successful_submit_resets_everything() {
        let transport = MockTransport::ok();
        let mut form = filled_form();
        form.set_acknowledged(true);
        let sent = form.data.clone();

        let result = form.submit(&transport).await;

        assert_eq!(result, Ok(()));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(transport.last_payload.borrow().as_ref(), Some(&sent));
        assert_eq!(sent.phone, "+11 (98) 76543-21");

        assert_eq!(form.data.name, "");
        assert_eq!(form.data.email, "");
        assert_eq!(form.data.phone, "");
        assert_eq!(form.data.message, "");
        assert!(!form.acknowledged);
        assert_eq!(form.status, SubmissionStatus::Success);

        let lang = LanguageCode::De;
        assert_eq!(
            form.status.message(lang.translations()).as_deref(),
            Some(lang.translations().success_message)
        );
    }

    #[tokio::test]
    async fn test_server_error_message_is_shown_verbatim() {
        let transport = MockTransport::new(Ok(EndpointResponse::with_error(422, "X")));
        let mut form = filled_form();
        form.set_acknowledged(true);
        let before = form.data.clone();

        let result = form.submit(&transport).await;

        assert_eq!(
            result,
            Err(SubmissionError::ServerRejection {
                status: 422,
                message: Some("X".to_string()),
            })
        );
        assert_eq!(transport.calls.get(), 1);
        for lang in LanguageCode::all() {
            assert_eq!(
                form.status.message(lang.translations()).as_deref(),
                Some("X")
            );
        }
        assert_eq!(form.data, before);
        assert!(form.acknowledged);
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_generic_text() {
        let transport = MockTransport::new(Ok(EndpointResponse::new(500)));
        let mut form = filled_form();
        form.set_acknowledged(true);

        let _ = form.submit(&transport).await;

        assert_eq!(form.status, SubmissionStatus::Error(ErrorNotice::Generic));
        let t = LanguageCode::Pt.translations();
        assert_eq!(form.status.message(t).as_deref(), Some(t.error_message));
    }

    #[tokio::test]
    async fn test_transport_failure_shows_connection_error() {
        let transport = MockTransport::new(Err(TransportError::Request(
            "TypeError: Failed to fetch".to_string(),
        )));
        let mut form = filled_form();
        form.set_acknowledged(true);
        let before = form.data.clone();

        let result = form.submit(&transport).await;

        assert!(matches!(result, Err(SubmissionError::Transport(_))));
        let t = LanguageCode::En.translations();
        assert_eq!(form.status.message(t).as_deref(), Some(t.connection_error));
        // The raw failure never reaches the user
        assert!(
            !form
                .status
                .message(t)
                .unwrap_or_default()
                .contains("Failed to fetch")
        );
        assert_eq!(form.data, before);
        assert!(form.acknowledged);
    }

    #[tokio::test]
    async fn test_retry_after_failure_issues_one_request_each() {
        let failing = MockTransport::new(Err(TransportError::Request("offline".to_string())));
        let working = MockTransport::ok();
        let mut form = filled_form();
        form.set_acknowledged(true);

        let _ = form.submit(&failing).await;
        assert_eq!(failing.calls.get(), 1);

        assert_eq!(form.submit(&working).await, Ok(()));
        assert_eq!(working.calls.get(), 1);
        assert_eq!(failing.calls.get(), 1);
        assert!(form.data.is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_after_success_needs_new_acknowledgment() {
        let transport = MockTransport::ok();
        let mut form = filled_form();
        form.set_acknowledged(true);
        form.submit(&transport).await.unwrap();

        form.handle_change("message", "Outra dúvida");
        let result = form.submit(&transport).await;

        assert_eq!(result, Err(SubmissionError::GuardRejection));
        assert_eq!(transport.calls.get(), 1);
        // The previous success stays visible after a rejected attempt
        assert_eq!(form.status, SubmissionStatus::Success);
    }

    #[test]
    fn test_switching_language_changes_text_only() {
        let mut form = filled_form();
        form.set_acknowledged(true);
        form.begin_submit().unwrap();
        let _ = form.resolve(Err(TransportError::Request("offline".to_string())));
        let snapshot = form.clone();

        let messages: Vec<String> = LanguageCode::all()
            .iter()
            .filter_map(|lang| form.status.message(lang.translations()))
            .collect();

        assert_eq!(messages.len(), LanguageCode::all().len());
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(form, snapshot);
    }
}
