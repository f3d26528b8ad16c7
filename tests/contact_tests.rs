mod common;

#[cfg(test)]
pub mod contact_tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::always;

    use super::common::*;

    use portfolio::common::*;
    use portfolio::data::profile::CONTACT_EMAIL;
    use portfolio::models::*;
    use portfolio::services::contact::*;
    use portfolio::services::relay::Notifier;

    mock! {
        pub NotifierMock {}
        #[async_trait]
        impl Notifier for NotifierMock {
            async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
        }
    }

    fn flow_with(form: ContactForm) -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.edit(FormField::Name, form.name);
        flow.edit(FormField::Email, form.email);
        flow.edit(FormField::Subject, form.subject);
        flow.edit(FormField::Message, form.message);
        flow
    }

    #[test]
    fn test_validate_reports_blank_required_fields() {
        let result = get_blank_form().validate();
        assert_eq!(
            result,
            Err(ValidationError::MissingFields(vec![
                RequiredField::Name,
                RequiredField::Message
            ]))
        );
    }

    #[test]
    fn test_compose_with_email_and_subject() {
        let contact = get_filled_form().validate().unwrap();
        let notification = Notification::compose(&contact);

        assert_eq!(notification.from_name, "Maria Santos");
        assert_eq!(notification.from_email, "maria@example.com");
        assert_eq!(notification.subject, "[Portfolio Contact] Internship");
        assert_eq!(
            notification.message,
            "This message was sent from your portfolio contact form:\n\n\
             Name: Maria Santos\n\
             Email: maria@example.com\n\
             \nMessage:\nAre you open to a summer internship?\n\n---\n\
             You can reply directly to Maria Santos at maria@example.com"
        );
    }

    #[test]
    fn test_compose_without_email_or_subject() {
        let contact = get_anonymous_form().validate().unwrap();
        let notification = Notification::compose(&contact);

        assert_eq!(notification.from_email, NO_REPLY_ADDRESS);
        assert_eq!(notification.subject, "[Portfolio Contact] Message from Maria Santos");
        assert!(!notification.message.contains("Email:"));
        assert!(notification
            .message
            .ends_with("The sender did not provide an email address for replies."));
    }

    #[test]
    fn test_notification_validate_rejects_blank_message() {
        let notification = Notification {
            message: "  ".into(),
            ..get_seed_notification()
        };
        assert_eq!(
            notification.validate(),
            Err(ValidationError::MissingFields(vec![RequiredField::Message]))
        );
    }

    #[tokio::test]
    async fn test_submit_invalid_form_never_sends() {
        let mut notifier = MockNotifierMock::new();
        notifier.expect_send().never();

        let mut flow = flow_with(get_blank_form());
        let result = flow.submit(&notifier).await;

        assert!(matches!(result, Err(ContactError::Validation(_))));
        assert!(matches!(flow.status(), ContactStatus::Failed(ContactError::Validation(_))));
        assert_eq!(flow.form(), &get_blank_form());
    }

    #[tokio::test]
    async fn test_submit_without_name_never_sends() {
        let mut notifier = MockNotifierMock::new();
        notifier.expect_send().never();

        let mut flow = flow_with(get_nameless_form());
        let result = flow.submit(&notifier).await;

        let missing = ContactError::Validation(ValidationError::MissingFields(vec![RequiredField::Name]));
        assert_eq!(result, Err(missing.clone()));
        assert_eq!(flow.status(), &ContactStatus::Failed(missing));
        assert_eq!(flow.form(), &get_nameless_form());
    }

    #[tokio::test]
    async fn test_submit_without_message_never_sends() {
        let mut notifier = MockNotifierMock::new();
        notifier.expect_send().never();

        let mut flow = flow_with(get_empty_message_form());
        let result = flow.submit(&notifier).await;

        let missing = ContactError::Validation(ValidationError::MissingFields(vec![RequiredField::Message]));
        assert_eq!(result, Err(missing.clone()));
        assert_eq!(flow.status(), &ContactStatus::Failed(missing));
        assert_eq!(flow.form(), &get_empty_message_form());
    }

    #[test]
    fn test_compose_keeps_message_whitespace() {
        let form = ContactForm {
            message: "  fn main() {\n      println!(\"hi\");\n  }\n".to_string(),
            ..get_filled_form()
        };

        let notification = Notification::compose(&form.validate().unwrap());

        assert!(notification
            .message
            .contains("Message:\n  fn main() {\n      println!(\"hi\");\n  }\n\n\n---\n"));
    }

    #[tokio::test]
    async fn test_submit_success_sends_once_and_clears_form() {
        let mut notifier = MockNotifierMock::new();
        notifier
            .expect_send()
            .withf(|n: &Notification| n.subject == "[Portfolio Contact] Internship")
            .times(1)
            .returning(|_| Ok(()));

        let mut flow = flow_with(get_filled_form());
        let result = flow.submit(&notifier).await;

        assert_eq!(result, Ok(()));
        assert_eq!(flow.status(), &ContactStatus::Sent);
        assert!(flow.form().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_sends_once_and_keeps_form() {
        let mut notifier = MockNotifierMock::new();
        notifier
            .expect_send()
            .with(always())
            .times(1)
            .returning(|_| {
                Err(DeliveryError::Rejected {
                    status: 412,
                    body: "quota exceeded".into(),
                })
            });

        let mut flow = flow_with(get_filled_form());
        let result = flow.submit(&notifier).await;

        assert!(matches!(result, Err(ContactError::Delivery(DeliveryError::Rejected { status: 412, .. }))));
        assert_eq!(flow.form(), &get_filled_form());
        assert!(!flow.is_sending());
    }

    #[test]
    fn test_begin_submit_rejects_while_sending() {
        let mut flow = flow_with(get_filled_form());

        assert!(flow.begin_submit().is_ok());
        assert!(flow.is_sending());
        assert_eq!(flow.begin_submit(), Err(ContactError::InFlight));
        assert!(flow.is_sending());
    }

    #[test]
    fn test_finish_without_send_is_ignored() {
        let mut flow = flow_with(get_filled_form());

        assert!(!flow.finish(Ok(())));
        assert_eq!(flow.status(), &ContactStatus::Idle);
        assert_eq!(flow.form(), &get_filled_form());
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut flow = flow_with(get_filled_form());
        flow.begin_submit().unwrap();
        flow.finish(Ok(()));
        assert!(flow.status().modal().is_some());

        flow.dismiss();

        assert_eq!(flow.status(), &ContactStatus::Idle);
        assert!(flow.status().modal().is_none());
    }

    #[test]
    fn test_modal_content_per_outcome() {
        let sent = ContactStatus::Sent.modal().unwrap();
        assert_eq!(sent.kind, ModalKind::Success);
        assert_eq!(sent.message, SENT_MESSAGE);

        let invalid = ContactStatus::Failed(ValidationError::MissingFields(vec![RequiredField::Name]).into())
            .modal()
            .unwrap();
        assert_eq!(invalid.message, VALIDATION_MESSAGE);
        assert_eq!(invalid.fallback_email, None);

        let failed = ContactStatus::Failed(DeliveryError::Transport("offline".into()).into())
            .modal()
            .unwrap();
        assert_eq!(failed.kind, ModalKind::Error);
        assert_eq!(failed.message, DELIVERY_FAILED_MESSAGE);
        assert_eq!(failed.fallback_email, Some(CONTACT_EMAIL));

        assert!(ContactStatus::Sending.modal().is_none());
    }
}
