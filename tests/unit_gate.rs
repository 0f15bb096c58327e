use tutorlink_web::config::routes::RouteRules;
use tutorlink_web::middleware::gate::{GateDecision, decide};

fn custom_rules() -> RouteRules {
    RouteRules {
        session_cookie: "sid".to_string(),
        public_prefixes: vec!["/".to_string(), "/help".to_string()],
        protected_prefixes: vec!["/account".to_string(), "/billing".to_string()],
    }
}

#[test]
fn test_custom_protected_prefixes_require_cookie() {
    let rules = custom_rules();
    assert_eq!(
        decide(&rules, "/account", None),
        GateDecision::RedirectToLogin
    );
    assert_eq!(
        decide(&rules, "/billing/invoices", None),
        GateDecision::RedirectToLogin
    );
    assert_eq!(
        decide(&rules, "/account", Some("tok")),
        GateDecision::Allow
    );
}

#[test]
fn test_custom_public_prefixes_bypass_the_gate() {
    let rules = custom_rules();
    assert_eq!(decide(&rules, "/", None), GateDecision::Allow);
    assert_eq!(decide(&rules, "/help/contact", None), GateDecision::Allow);
}

#[test]
fn test_default_sections_no_longer_protected_under_custom_rules() {
    // Matcher lists are configuration, not hard-coded policy.
    let rules = custom_rules();
    assert_eq!(decide(&rules, "/dashboard", None), GateDecision::Allow);
    assert_eq!(decide(&rules, "/admin/users", None), GateDecision::Allow);
}

#[test]
fn test_public_beats_protected_when_prefixes_overlap() {
    let rules = RouteRules {
        session_cookie: "sid".to_string(),
        public_prefixes: vec!["/account/help".to_string()],
        protected_prefixes: vec!["/account".to_string()],
    };
    assert_eq!(decide(&rules, "/account/help", None), GateDecision::Allow);
    assert_eq!(
        decide(&rules, "/account/settings", None),
        GateDecision::RedirectToLogin
    );
}

#[test]
fn test_whitespace_only_cookie_still_counts_as_present() {
    // The gate checks for a non-empty value, nothing more. A whitespace
    // value is the backend's problem to reject at the identity check.
    let rules = custom_rules();
    assert_eq!(decide(&rules, "/account", Some(" ")), GateDecision::Allow);
}
