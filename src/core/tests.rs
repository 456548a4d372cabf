#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use chrono::{NaiveDate, TimeZone, Utc};
    use futures::executor::block_on;

    use crate::core::chat::{CANNED_REPLIES, ChatRole, ChatSession};
    use crate::core::lead::{FieldError, LeadField, LeadRequest};
    use crate::core::notice::{NoticeKind, NoticeQueue};
    use crate::core::section::{ScrollSpy, SectionBounds, SectionId};
    use crate::core::submission::{
        DEFAULT_LEAD_ENDPOINT, LeadForm, LeadTransport, REJECTED_MESSAGE, SUCCESS_MESSAGE,
        SubmitOutcome, TRANSPORT_FAILURE_MESSAGE, TransportError, TransportResponse,
    };
    use crate::core::Accordion;

    /// Transport that records every POST and replays scripted results
    #[derive(Default)]
    struct MockTransport {
        requests: RefCell<Vec<(String, String)>>,
        replies: RefCell<VecDeque<Result<TransportResponse, TransportError>>>,
    }

    impl MockTransport {
        fn replying(reply: Result<TransportResponse, TransportError>) -> Self {
            let mock = Self::default();
            mock.replies.borrow_mut().push_back(reply);
            mock
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }

        fn last_body(&self) -> serde_json::Value {
            let requests = self.requests.borrow();
            let (_, body) = requests.last().expect("no request recorded");
            serde_json::from_str(body).expect("body is not JSON")
        }
    }

    impl LeadTransport for MockTransport {
        async fn post_json(
            &self,
            url: &str,
            body: String,
        ) -> Result<TransportResponse, TransportError> {
            self.requests.borrow_mut().push((url.to_string(), body));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(TransportResponse::new(200, "{}")))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::new(today());
        for (field, value) in [
            (LeadField::Name, "Meera Iyer"),
            (LeadField::Email, "meera@example.in"),
            (LeadField::Phone, "9876543210"),
            (LeadField::MovingFrom, "Chennai"),
            (LeadField::MovingTo, "Hyderabad"),
            (LeadField::MovingDate, "2026-11-05"),
            (LeadField::Message, "3BHK, one car"),
        ] {
            form.set_field(field, value.to_string());
        }
        form
    }

    fn submit(form: &mut LeadForm, transport: &MockTransport, toasts: &mut NoticeQueue) {
        let (_, notices) = block_on(form.submit(transport, DEFAULT_LEAD_ENDPOINT, today()));
        toasts.extend(notices);
    }

    #[test]
    fn test_invalid_email_blocks_request() {
        let transport = MockTransport::default();
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();
        form.set_field(LeadField::Email, "not-an-email".to_string());

        submit(&mut form, &transport, &mut toasts);

        assert_eq!(transport.calls(), 0);
        assert_eq!(
            form.errors().get(LeadField::Email),
            Some(FieldError::InvalidEmail)
        );
        assert!(toasts.is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_any_missing_required_field_blocks_request() {
        let required = LeadField::ALL.into_iter().filter(|f| f.is_required());
        for field in required {
            let transport = MockTransport::default();
            let mut toasts = NoticeQueue::new();
            let mut form = filled_form();
            form.set_field(field, String::new());

            submit(&mut form, &transport, &mut toasts);

            assert_eq!(transport.calls(), 0, "{field:?} empty still sent");
            assert!(form.errors().get(field).is_some(), "{field:?} has no hint");
        }
    }

    #[test]
    fn test_same_day_move_blocks_request() {
        let transport = MockTransport::default();
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();
        form.set_field(LeadField::MovingDate, "2026-10-18".to_string());

        submit(&mut form, &transport, &mut toasts);
        assert_eq!(transport.calls(), 0);
        assert_eq!(
            form.errors().message(LeadField::MovingDate).as_deref(),
            Some("Select tomorrow or later")
        );

        form.set_field(LeadField::MovingDate, "2026-10-19".to_string());
        submit(&mut form, &transport, &mut toasts);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_valid_form_sends_exactly_one_post() {
        let transport = MockTransport::default();
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();

        submit(&mut form, &transport, &mut toasts);

        assert_eq!(transport.calls(), 1);
        assert_eq!(transport.requests.borrow()[0].0, DEFAULT_LEAD_ENDPOINT);
        let body = transport.last_body();
        assert_eq!(body["name"], "Meera Iyer");
        assert_eq!(body["email"], "meera@example.in");
        assert_eq!(body["phone"], "9876543210");
        assert_eq!(body["movingFrom"], "Chennai");
        assert_eq!(body["movingTo"], "Hyderabad");
        assert_eq!(body["movingDate"], "2026-11-05");
        assert_eq!(body["message"], "3BHK, one car");
    }

    #[test]
    fn test_accepted_submission_resets_form() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(200, "{\"ok\":true}")));
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();

        submit(&mut form, &transport, &mut toasts);

        assert_eq!(toasts.len(), 1);
        let toast = toasts.iter().next().unwrap();
        assert_eq!(toast.notice.kind, NoticeKind::Success);
        assert_eq!(toast.notice.message, SUCCESS_MESSAGE);

        let reset = form.request();
        assert_eq!(reset, &LeadRequest::new(today()));
        assert_eq!(reset.name, "");
        assert_eq!(reset.moving_date, Some(today()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_field_level_rejection_keeps_values() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(
            400,
            r#"{"errors":[{"message":"Phone already used"}]}"#,
        )));
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();
        let entered = form.request().clone();

        submit(&mut form, &transport, &mut toasts);

        assert_eq!(toasts.len(), 1);
        let toast = toasts.iter().next().unwrap();
        assert_eq!(toast.notice.kind, NoticeKind::Error);
        assert_eq!(toast.notice.message, "Phone already used");
        assert_eq!(form.request(), &entered);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_each_server_error_gets_its_own_notice() {
        let transport = MockTransport::replying(Ok(TransportResponse::new(
            422,
            r#"{"errors":[{"message":"a"},{"message":"b"},{"message":"c"}]}"#,
        )));
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();

        submit(&mut form, &transport, &mut toasts);

        let messages: Vec<_> = toasts.iter().map(|t| t.notice.message.clone()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unstructured_rejection_is_generic() {
        let transport =
            MockTransport::replying(Ok(TransportResponse::new(502, "<html>Bad Gateway</html>")));
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();

        submit(&mut form, &transport, &mut toasts);

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().notice.message, REJECTED_MESSAGE);
        assert_eq!(form.request().phone, "9876543210");
    }

    #[test]
    fn test_transport_failure_keeps_values_and_allows_retry() {
        let transport = MockTransport::replying(Err(TransportError::Network(
            "connection refused".to_string(),
        )));
        let mut toasts = NoticeQueue::new();
        let mut form = filled_form();

        let (outcome, notices) =
            block_on(form.submit(&transport, DEFAULT_LEAD_ENDPOINT, today()));
        toasts.extend(notices);

        assert!(matches!(outcome, Some(SubmitOutcome::TransportFailed(_))));
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts.iter().next().unwrap().notice.message,
            TRANSPORT_FAILURE_MESSAGE
        );
        assert!(!form.is_submitting());
        assert_eq!(form.request().name, "Meera Iyer");

        // User retries by hand; the default reply is a 200
        submit(&mut form, &transport, &mut toasts);
        assert_eq!(transport.calls(), 2);
        assert_eq!(form.request(), &LeadRequest::new(today()));
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let transport = MockTransport::default();
        let mut form = filled_form();
        assert!(matches!(
            form.begin_submit(today()),
            crate::core::SubmitStart::Ready(_)
        ));

        let (outcome, notices) =
            block_on(form.submit(&transport, DEFAULT_LEAD_ENDPOINT, today()));
        assert_eq!(outcome, None);
        assert!(notices.is_empty());
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn test_nav_click_activates_section_before_scrolling() {
        let layout = |id: SectionId| {
            let index = SectionId::ALL.iter().position(|s| *s == id)? as f64;
            let top = index * 900.0 - 900.0;
            Some(SectionBounds::new(top, top + 900.0))
        };
        let mut spy = ScrollSpy::new();
        spy.observe(layout);
        assert_eq!(spy.active(), SectionId::About);

        let target = spy.navigate(SectionId::Services, 900.0, layout);
        assert_eq!(spy.active(), SectionId::Services);
        assert!(target.is_some());
    }

    #[test]
    fn test_faq_panel_open_close_twice() {
        let mut faq = Accordion::<usize>::new();
        let original = faq.open_panel();
        for _ in 0..2 {
            faq.toggle(3);
            faq.toggle(3);
        }
        assert_eq!(faq.open_panel(), original);
    }

    #[test]
    fn test_chat_quote_request_gets_one_canned_reply() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let mut chat = ChatSession::new(now);
        let before = chat.messages().len();

        chat.send("Get a moving quote", now).unwrap();
        assert_eq!(chat.messages().len(), before + 1);
        assert_eq!(chat.messages().last().unwrap().role, ChatRole::User);

        chat.reply(0.42, now);
        assert_eq!(chat.messages().len(), before + 2);
        let reply = chat.messages().last().unwrap();
        assert_eq!(reply.role, ChatRole::Assistant);
        assert!(CANNED_REPLIES.contains(&reply.text.as_str()));
    }
}
