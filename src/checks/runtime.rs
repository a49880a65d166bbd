//! Node.js version check.

use super::version::meets_minimum;
use super::{Check, CheckContext, CheckResult};

/// Checks that the installed Node.js meets the minimum supported version.
///
/// Comparison is segment-wise numeric via [`super::version`]. When the
/// version could not be probed at all the result is a warning, not an
/// error: installing Node is a recoverable user action.
pub struct RuntimeVersionCheck {
    minimum: String,
}

impl RuntimeVersionCheck {
    /// Create a check against the given minimum version.
    pub fn new(minimum: impl Into<String>) -> Self {
        Self {
            minimum: minimum.into(),
        }
    }
}

impl Check for RuntimeVersionCheck {
    fn name(&self) -> &str {
        "Node.js Version"
    }

    fn description(&self) -> &str {
        "Installed Node.js meets the minimum supported version"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let Some(current) = ctx.runtime_version() else {
            return CheckResult::warning(
                self.name(),
                format!(
                    "Unable to determine the Node.js version. Install Node.js {} or newer.",
                    self.minimum
                ),
            );
        };

        if meets_minimum(current, &self.minimum) {
            CheckResult::ok(self.name(), format!("Node.js {} is compatible", current))
        } else {
            CheckResult::error(
                self.name(),
                format!(
                    "Node.js {} is below the required version {}",
                    current, self.minimum
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ctx_with_version(version: Option<&str>) -> CheckContext {
        CheckContext::new("/proj", HashMap::new(), version.map(String::from))
    }

    #[test]
    fn version_above_minimum_is_ok() {
        let check = RuntimeVersionCheck::new("v14.0.0");
        let result = check.run(&ctx_with_version(Some("v22.1.0")));

        assert_eq!(result.status, crate::checks::CheckStatus::Ok);
        assert!(result.message.contains("v22.1.0"));
    }

    #[test]
    fn version_at_minimum_is_ok() {
        let check = RuntimeVersionCheck::new("v14.0.0");
        let result = check.run(&ctx_with_version(Some("v14.0.0")));

        assert_eq!(result.status, crate::checks::CheckStatus::Ok);
    }

    #[test]
    fn version_below_minimum_is_error() {
        let check = RuntimeVersionCheck::new("v14.0.0");
        let result = check.run(&ctx_with_version(Some("v9.0.0")));

        assert_eq!(result.status, crate::checks::CheckStatus::Error);
        assert!(result.message.contains("v9.0.0"));
        assert!(result.message.contains("v14.0.0"));
    }

    #[test]
    fn two_digit_major_compares_numerically() {
        // "v14" < "v9" lexically; must still pass.
        let check = RuntimeVersionCheck::new("v9.0.0");
        let result = check.run(&ctx_with_version(Some("v14.2.0")));

        assert_eq!(result.status, crate::checks::CheckStatus::Ok);
    }

    #[test]
    fn unknown_version_is_warning() {
        let check = RuntimeVersionCheck::new("v14.0.0");
        let result = check.run(&ctx_with_version(None));

        assert_eq!(result.status, crate::checks::CheckStatus::Warning);
        assert!(result.message.contains("v14.0.0"));
    }

    #[test]
    fn name_is_stable() {
        assert_eq!(RuntimeVersionCheck::new("v14.0.0").name(), "Node.js Version");
    }
}
