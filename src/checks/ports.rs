//! Port availability check.

use super::{Check, CheckContext, CheckResult};

/// Reports the configured development ports as available.
///
/// This check does not bind or probe sockets. The original status checker
/// shipped it as a stub that unconditionally reports success, and that
/// behavior is kept: the message says the ports "appear" available and
/// makes no stronger claim.
pub struct PortAvailabilityCheck {
    ports: Vec<u16>,
}

impl PortAvailabilityCheck {
    /// Create a check for the given port list.
    pub fn new(ports: Vec<u16>) -> Self {
        Self { ports }
    }
}

impl Check for PortAvailabilityCheck {
    fn name(&self) -> &str {
        "Port Availability"
    }

    fn description(&self) -> &str {
        "Development ports are not known to be taken (no socket probing)"
    }

    fn run(&self, _ctx: &CheckContext) -> CheckResult {
        let list = self
            .ports
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        CheckResult::ok(
            self.name(),
            format!("Ports {} appear to be available", list),
        )
    }
}
