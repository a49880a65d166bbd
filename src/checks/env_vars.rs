//! Environment variable check.

use super::{Check, CheckContext, CheckResult};

/// Checks that every required environment variable is set and non-empty.
///
/// Missing variables are a warning, not an error: the user can export them
/// and re-run. An empty value counts as missing.
pub struct EnvVarCheck {
    vars: Vec<String>,
}

impl EnvVarCheck {
    /// Create a check for the given variable names.
    pub fn new(vars: Vec<String>) -> Self {
        Self { vars }
    }
}

impl Check for EnvVarCheck {
    fn name(&self) -> &str {
        "Environment Variables"
    }

    fn description(&self) -> &str {
        "Required environment variables are set"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let missing: Vec<&str> = self
            .vars
            .iter()
            .filter(|v| ctx.env_var(v).map_or(true, str::is_empty))
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            CheckResult::ok(
                self.name(),
                "All required environment variables are set",
            )
        } else {
            CheckResult::warning(
                self.name(),
                format!("Missing environment variables: {}", missing.join(", ")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ctx_with(pairs: &[(&str, &str)]) -> CheckContext {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CheckContext::new("/proj", env, None)
    }

    fn check_for(vars: &[&str]) -> EnvVarCheck {
        EnvVarCheck::new(vars.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn all_set_is_ok() {
        let check = check_for(&["NODE_ENV", "PORT"]);
        let result = check.run(&ctx_with(&[("NODE_ENV", "development"), ("PORT", "3000")]));

        assert_eq!(result.status, crate::checks::CheckStatus::Ok);
    }

    #[test]
    fn missing_vars_is_warning_listing_them() {
        let check = check_for(&["NODE_ENV", "PORT", "LOCAL_LOOP_CONFIG"]);
        let result = check.run(&ctx_with(&[("NODE_ENV", "development")]));

        assert_eq!(result.status, crate::checks::CheckStatus::Warning);
        assert_eq!(
            result.message,
            "Missing environment variables: PORT, LOCAL_LOOP_CONFIG"
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let check = check_for(&["PORT"]);
        let result = check.run(&ctx_with(&[("PORT", "")]));

        assert_eq!(result.status, crate::checks::CheckStatus::Warning);
        assert!(result.message.contains("PORT"));
    }

    #[test]
    fn empty_var_list_is_ok() {
        let check = check_for(&[]);
        let result = check.run(&ctx_with(&[]));

        assert_eq!(result.status, crate::checks::CheckStatus::Ok);
    }
}
