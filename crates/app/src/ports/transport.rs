//! Transport port — outbound execution of resolved HTTP commands.

use std::future::Future;

use tvbridge_domain::command::CommandRequest;
use tvbridge_domain::error::HttpError;

/// Executes one fully-resolved command against a device endpoint.
///
/// Implementations live in adapter crates (e.g. the reqwest transport).
/// The contract mirrors the device side of the bridge:
///
/// - success means the device answered with a status in `[200, 300)`
/// - any other status is [`HttpError::Status`] carrying status and body
/// - failing to obtain a response at all is [`HttpError::Transport`]
/// - exactly one attempt is made; retry policy belongs to callers
/// - a bounded request timeout is the implementation's responsibility
pub trait CommandTransport: Send + Sync {
    /// Execute `request` and classify the outcome.
    fn execute(
        &self,
        request: &CommandRequest,
    ) -> impl Future<Output = Result<(), HttpError>> + Send;
}
