//! [DAPNET] paging gateway client.
//!
//! [DAPNET]: https://hampager.de

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use tropo::{Delivery, Notifier, NotifyError, PagingCall};
use ureq::Agent;

pub struct Dapnet {
    agent: Agent,
    url: String,
    authorization: String,
}

impl Dapnet {
    pub fn new(agent: Agent, url: impl Into<String>, user: &str, pass: &str) -> Self {
        Self {
            agent,
            url: url.into(),
            authorization: basic_auth(user, pass),
        }
    }
}

impl Notifier for Dapnet {
    fn send(&self, call: &PagingCall) -> Result<Delivery, NotifyError> {
        debug!(
            "POST {} to {:?} via {:?}",
            self.url, call.call_sign_names, call.transmitter_group_names
        );
        match self
            .agent
            .post(&self.url)
            .set("Authorization", &self.authorization)
            .send_json(call)
        {
            Ok(response) => Ok(Delivery {
                status: response.status(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(NotifyError::Rejected { status }),
            Err(ureq::Error::Transport(t)) => Err(NotifyError::Transport(Box::new(t))),
        }
    }
}

fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}
