use super::http_client::HTTPClient;
use super::http_request::{queue_command_put::QueueCommandRequest, request_common::JSONBodyHTTPRequestType};
use crate::command::{CommandRecord, CommandSink};
use crate::config::SinkConfig;
use crate::{error, info, log};

/// Forwards commands to a flight computer reachable over HTTP.
///
/// Each command is sent once; transport failures and error responses count
/// as rejections.
#[derive(Debug)]
pub struct HTTPCommandSink {
    client: HTTPClient,
}

impl HTTPCommandSink {
    pub fn new(config: &SinkConfig) -> Self {
        info!("Forwarding flight computer commands to {}", config.base_url());
        Self { client: HTTPClient::new(config.base_url(), config.timeout()) }
    }

    pub fn url(&self) -> &str { self.client.url() }
}

impl CommandSink for HTTPCommandSink {
    fn queue_command(&self, record: &CommandRecord) -> bool {
        match (QueueCommandRequest { record }).send_request(&self.client) {
            Ok(resp) => {
                if let Some(queued) = resp.queued() {
                    log!("{} queued, {queued} command(s) pending", record.kind());
                }
                resp.accepted()
            }
            Err(err) => {
                error!("Could not queue {}: {err}", record.kind());
                false
            }
        }
    }
}
