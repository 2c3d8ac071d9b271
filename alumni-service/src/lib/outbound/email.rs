use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::Address;
use lettre::AsyncSmtpTransport;
use lettre::AsyncTransport;
use lettre::Message;
use lettre::Tokio1Executor;

use crate::domain::notification::Mailer;
use crate::domain::notification::MailerError;
use crate::user::models::EmailAddress;

/// SMTP implementation of the [`Mailer`] port.
///
/// STARTTLS relay with credential auth; bodies are plain text.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    contact_email: String,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        username: String,
        password: String,
        sender: &str,
        contact_email: String,
    ) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .credentials(Credentials::new(username, password))
            .build();

        let sender = sender
            .parse::<Mailbox>()
            .map_err(|e| MailerError::InvalidRecipient(e.to_string()))?;

        Ok(Self {
            transport,
            sender,
            contact_email,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_password_reset(
        &self,
        to: &EmailAddress,
        recipient_name: &str,
        reset_link: &str,
    ) -> Result<(), MailerError> {
        let address = to
            .as_str()
            .parse::<Address>()
            .map_err(|e| MailerError::InvalidRecipient(e.to_string()))?;
        let recipient = Mailbox::new(Some(recipient_name.to_string()), address);

        let body = format!(
            "Dear {recipient_name},\n\n\
             We received a request to reset the password for your alumni \
             association account.\n\n\
             Use the link below to choose a new password. The link expires \
             in one hour and can be used once.\n\n\
             {reset_link}\n\n\
             If you did not request this, you can safely ignore this email; \
             your password will not change.\n\n\
             Questions? Write to {contact}.\n",
            recipient_name = recipient_name,
            reset_link = reset_link,
            contact = self.contact_email,
        );

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject("Password Reset Request")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| MailerError::MessageBuild(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailerError::Transport(e.to_string()))
    }
}
