use crate::NotifyError;
use serde::Serialize;

/// A DAPNET call: one text sent to a set of pagers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingCall {
    pub text: String,

    /// Recipient call signs.
    pub call_sign_names: Vec<String>,

    /// Transmitter groups broadcasting the call.
    pub transmitter_group_names: Vec<String>,

    pub emergency: bool,
}

/// Gateway acknowledgement of a delivered call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status returned by the gateway.
    pub status: u16,
}

/// Delivers paging calls.
pub trait Notifier {
    fn send(&self, call: &PagingCall) -> Result<Delivery, NotifyError>;
}
