use std::collections::HashSet;

/// Address every non-whitelisted recipient is redirected to.
const TEST_INBOX: &str = "ok@testing.lettermint.co";

/// Recipient allow-list for development and staging environments.
///
/// Two entry shapes are supported: exact addresses (`user@example.com`,
/// with plus-addressing folded so `user+tag@example.com` matches too) and
/// domain wildcards (`*@example.com`). Matching is case-insensitive. An
/// empty whitelist disables filtering entirely, which is the production
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct EmailWhitelist {
    exact_matches: HashSet<String>,
    domain_wildcards: HashSet<String>,
}

impl EmailWhitelist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact_matches = HashSet::new();
        let mut domain_wildcards = HashSet::new();

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            let normalized = entry.to_lowercase();

            if normalized.starts_with("*@") {
                // Stored as "@example.com", with the `*` dropped
                domain_wildcards.insert(normalized[1..].to_string());
            } else if let Some(at) = normalized.find('@') {
                // '@' in first position leaves no local part; such entries
                // are skipped, as are ones without any '@' at all
                if at > 0 {
                    let plus = normalized[..at].find('+');
                    match plus {
                        // Store the base address so any plus-tag on it matches
                        Some(plus) if plus > 0 => {
                            let base =
                                format!("{}{}", &normalized[..plus], &normalized[at..]);
                            exact_matches.insert(base);
                        }
                        _ => {
                            exact_matches.insert(normalized);
                        }
                    }
                }
            }
        }

        Self {
            exact_matches,
            domain_wildcards,
        }
    }

    /// The whitelist only takes effect once at least one entry survived
    /// normalization. Empty means "allow everything".
    pub fn is_enabled(&self) -> bool {
        !self.exact_matches.is_empty() || !self.domain_wildcards.is_empty()
    }

    /// Returns the address untouched when it is blank, the whitelist is
    /// disabled, or the address is whitelisted (original casing and padding
    /// preserved). Anything else is replaced with the test inbox, with a
    /// warning emitted so the redirect is visible in logs.
    pub fn validate_and_filter(&self, address: String) -> String {
        if address.trim().is_empty() {
            return address;
        }
        if !self.is_enabled() {
            return address;
        }
        if self.is_whitelisted(address.trim()) {
            return address;
        }

        tracing::warn!(
            rejected = %address.trim(),
            redirected_to = %TEST_INBOX,
            "Recipient address is not whitelisted. Redirecting to the test inbox"
        );
        TEST_INBOX.to_string()
    }

    fn is_whitelisted(&self, address: &str) -> bool {
        let address = address.to_lowercase();
        if self.exact_matches.contains(&address) {
            return true;
        }

        if let Some(at) = address.find('@') {
            if at > 0 {
                let (local, domain) = address.split_at(at);

                // user+tag@example.com passes when user@example.com is listed
                if let Some(plus) = local.find('+') {
                    if plus > 0 {
                        let base = format!("{}{}", &local[..plus], domain);
                        if self.exact_matches.contains(&base) {
                            return true;
                        }
                    }
                }
                if self.domain_wildcards.contains(domain) {
                    return true;
                }
            }
        }
        false
    }
}
