use std::env;

/// Matcher configuration for the coarse route gate.
///
/// The gate works on path prefixes only. Public prefixes always pass,
/// protected prefixes require a session cookie to be present, and paths
/// matching neither list are allowed by default. Allow-by-default is a
/// policy choice, not an oversight: everything sensitive lives under the
/// protected prefixes, and the section guards do the real authorization.
#[derive(Clone, Debug)]
pub struct RouteRules {
    /// Name of the opaque session cookie minted by the backend auth provider.
    pub session_cookie: String,
    /// Prefixes that bypass the gate unconditionally.
    pub public_prefixes: Vec<String>,
    /// Prefixes that require a session cookie to be present.
    pub protected_prefixes: Vec<String>,
}

impl Default for RouteRules {
    fn default() -> Self {
        Self {
            session_cookie: "better-auth.session_token".to_string(),
            public_prefixes: vec![
                "/".to_string(),
                "/login".to_string(),
                "/register".to_string(),
            ],
            protected_prefixes: vec![
                "/dashboard".to_string(),
                "/tutor".to_string(),
                "/admin".to_string(),
            ],
        }
    }
}

impl RouteRules {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            session_cookie: env::var("SESSION_COOKIE_NAME")
                .unwrap_or(defaults.session_cookie),
            public_prefixes: env::var("PUBLIC_ROUTE_PREFIXES")
                .map(|raw| parse_prefix_list(&raw))
                .unwrap_or(defaults.public_prefixes),
            protected_prefixes: env::var("PROTECTED_ROUTE_PREFIXES")
                .map(|raw| parse_prefix_list(&raw))
                .unwrap_or(defaults.protected_prefixes),
        }
    }

    /// Whether the path matches a public prefix. The bare `/` entry matches
    /// only the root path exactly; every other entry is a prefix match.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes.iter().any(|prefix| {
            if prefix == "/" {
                path == "/"
            } else {
                path.starts_with(prefix.as_str())
            }
        })
    }

    /// Whether the path matches a protected prefix.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

fn parse_prefix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
