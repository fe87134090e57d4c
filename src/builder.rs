use crate::client::LettermintClient;
use crate::email::{Attachment, EmailRequest, EmailResponse, Route};
use crate::error::LettermintError;

/// Fluent accumulator for a single [`EmailRequest`].
///
/// Obtained from [`LettermintClient::email`]. Recipient addresses pass
/// through the client's whitelist at the moment they are added, so the
/// stored request already holds filtered values. One builder produces one
/// request: `send` and `build` both consume it.
pub struct EmailBuilder<'a> {
    client: &'a LettermintClient,
    request: EmailRequest,
}

impl<'a> EmailBuilder<'a> {
    pub(crate) fn new(client: &'a LettermintClient) -> Self {
        Self {
            client,
            request: EmailRequest::default(),
        }
    }

    /// Sets the sender. May carry a display name:
    /// `"Jane Doe <jane@example.com>"`. The sender is never run through the
    /// whitelist.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.request.from = from.into();
        self
    }

    /// Sets the sender from separate display-name and address parts.
    pub fn from_named(self, name: impl AsRef<str>, email: impl AsRef<str>) -> Self {
        self.from(format!("{} <{}>", name.as_ref(), email.as_ref()))
    }

    /// Adds a recipient. May carry a display name.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        let to = self.filter(to.into());
        self.request.to.push(to);
        self
    }

    /// Adds a recipient from separate display-name and address parts.
    pub fn to_named(self, name: impl AsRef<str>, email: impl AsRef<str>) -> Self {
        self.to(format!("{} <{}>", name.as_ref(), email.as_ref()))
    }

    /// Adds a carbon-copy recipient.
    pub fn cc(mut self, cc: impl Into<String>) -> Self {
        let cc = self.filter(cc.into());
        self.request.cc.get_or_insert_with(Vec::new).push(cc);
        self
    }

    /// Adds a blind-carbon-copy recipient.
    pub fn bcc(mut self, bcc: impl Into<String>) -> Self {
        let bcc = self.filter(bcc.into());
        self.request.bcc.get_or_insert_with(Vec::new).push(bcc);
        self
    }

    /// Sets the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.request.subject = subject.into();
        self
    }

    /// Sets the plain-text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.text = Some(text.into());
        self
    }

    /// Sets the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.request.html = Some(html.into());
        self
    }

    /// Tags the email for reporting. An empty tag is ignored rather than
    /// overwriting a previously set one.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !tag.is_empty() {
            self.request.tag = Some(tag);
        }
        self
    }

    /// Routes the email through the transactional pipeline (the default).
    pub fn outgoing(mut self) -> Self {
        self.request.route = Route::Outgoing;
        self
    }

    /// Routes the email through the broadcast pipeline for marketing and
    /// newsletter traffic.
    pub fn broadcast(mut self) -> Self {
        self.request.route = Route::Broadcast;
        self
    }

    /// Attaches a file. `content` must already be base64-encoded; a
    /// `content_id` makes the attachment addressable inline via `cid:`.
    /// Attachments with an empty filename or empty content are dropped
    /// silently.
    pub fn add_attachment(
        mut self,
        filename: impl Into<String>,
        content: impl Into<String>,
        content_id: Option<String>,
    ) -> Self {
        let filename = filename.into();
        let content = content.into();
        if filename.is_empty() || content.is_empty() {
            return self;
        }
        self.request.attachments.push(Attachment {
            filename,
            content,
            content_id,
        });
        self
    }

    /// Deduplication key for the API's idempotency window. Sent as the
    /// `Idempotency-Key` header, never inside the body.
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.request.idempotency_key = Some(key.into());
        self
    }

    /// Hands the accumulated request back without dispatching it, for batch
    /// assembly via [`LettermintClient::send_batch`].
    pub fn build(self) -> EmailRequest {
        self.request
    }

    /// Dispatches the accumulated request.
    pub async fn send(self) -> Result<EmailResponse, LettermintError> {
        self.client.send_email(&self.request).await
    }

    fn filter(&self, address: String) -> String {
        self.client.whitelist().validate_and_filter(address)
    }
}
