/// Route access policy: an explicit, ordered list of (path pattern,
/// requirement) rules.
///
/// Patterns are either an exact path or a prefix followed by `/**`, which
/// matches the prefix itself and everything below it. The first matching
/// rule wins; unmatched paths fall back to the policy default.
///
/// Evaluated once per request by the authorization guard, after the
/// authentication stage has had its chance to install a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No principal needed (login, registration, health probes).
    Public,
    /// A principal must have been installed by the authentication stage.
    Authenticated,
}

#[derive(Debug, Clone)]
struct AccessRule {
    pattern: String,
    requirement: Requirement,
}

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
    default: Requirement,
}

impl AccessPolicy {
    pub fn new(default: Requirement) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    pub fn rule(mut self, pattern: impl Into<String>, requirement: Requirement) -> Self {
        self.rules.push(AccessRule {
            pattern: pattern.into(),
            requirement,
        });
        self
    }

    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| pattern_matches(&rule.pattern, path))
            .map(|rule| rule.requirement)
            .unwrap_or(self.default)
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix("/**") {
        Some(prefix) => {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
        None => pattern == path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::new(Requirement::Authenticated)
            .rule("/health", Requirement::Public)
            .rule("/api/v1/auth/**", Requirement::Public)
    }

    #[test]
    fn exact_pattern_matches_exact_path_only() {
        let policy = policy();

        assert_eq!(policy.requirement_for("/health"), Requirement::Public);
        assert_eq!(
            policy.requirement_for("/health/live"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn wildcard_pattern_covers_prefix_and_children() {
        let policy = policy();

        assert_eq!(policy.requirement_for("/api/v1/auth"), Requirement::Public);
        assert_eq!(
            policy.requirement_for("/api/v1/auth/login"),
            Requirement::Public
        );
        // Prefix must end on a segment boundary
        assert_eq!(
            policy.requirement_for("/api/v1/authx"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn unmatched_paths_use_the_default() {
        let policy = policy();

        assert_eq!(
            policy.requirement_for("/api/v1/products"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = AccessPolicy::new(Requirement::Authenticated)
            .rule("/api/v1/**", Requirement::Public)
            .rule("/api/v1/orders/**", Requirement::Authenticated);

        // The broad rule is listed first, so it shadows the narrower one.
        assert_eq!(
            policy.requirement_for("/api/v1/orders/1"),
            Requirement::Public
        );
    }
}
