use spoofmx_domain::config::SpoofConfig;
use spoofmx_domain::{ForgeDecision, RecordType, SpoofPolicy};
use std::net::Ipv4Addr;

const MX: u16 = 15;
const A: u16 = 1;

#[test]
fn test_mx_for_forged_domain_is_forged() {
    let policy = SpoofPolicy::default();

    assert_eq!(
        policy.decide("example.com", MX),
        ForgeDecision::Mx {
            exchange: "att.example.com",
            preference: 10,
            glue: Ipv4Addr::new(10, 0, 0, 66),
            ttl: 300,
        }
    );
}

#[test]
fn test_domain_comparison_is_case_insensitive() {
    let policy = SpoofPolicy::default();
    assert!(policy.decide("EXAMPLE.Com", MX).is_forged());
    assert!(policy.decide("example.com.", MX).is_forged());
}

#[test]
fn test_other_domain_passes_through() {
    let policy = SpoofPolicy::default();
    assert_eq!(policy.decide("other.com", MX), ForgeDecision::PassThrough);
    assert_eq!(policy.decide("sub.example.com", MX), ForgeDecision::PassThrough);
}

#[test]
fn test_non_mx_types_pass_through_by_default() {
    let policy = SpoofPolicy::default();
    for qtype in [A, 28, 16, 255, 0] {
        assert_eq!(policy.decide("example.com", qtype), ForgeDecision::PassThrough);
    }
}

#[test]
fn test_a_forging_when_enabled() {
    let config = SpoofConfig {
        forge_a: true,
        attacker_ip: Ipv4Addr::new(192, 0, 2, 7),
        ..Default::default()
    };
    let policy = SpoofPolicy::from(&config);

    assert_eq!(
        policy.decide("example.com", RecordType::A.to_u16()),
        ForgeDecision::A {
            address: Ipv4Addr::new(192, 0, 2, 7),
            ttl: 300,
        }
    );
    assert_eq!(policy.decide("other.com", A), ForgeDecision::PassThrough);
    assert!(matches!(policy.decide("example.com", MX), ForgeDecision::Mx { .. }));
}

#[test]
fn test_decision_section_counts() {
    let policy = SpoofPolicy::default();

    let mx = policy.decide("example.com", MX);
    assert_eq!((mx.answer_count(), mx.additional_count()), (1, 1));

    let empty = policy.decide("other.com", MX);
    assert_eq!((empty.answer_count(), empty.additional_count()), (0, 0));

    let a = ForgeDecision::A {
        address: Ipv4Addr::LOCALHOST,
        ttl: 60,
    };
    assert_eq!((a.answer_count(), a.additional_count()), (1, 0));
}

#[test]
fn test_policy_uses_configured_values() {
    let config = SpoofConfig {
        forged_domain: "company.com".to_string(),
        attacker_mx: "mail.evil.test".to_string(),
        ttl: 60,
        mx_preference: 5,
        ..Default::default()
    };
    let policy = SpoofPolicy::new(&config);

    assert_eq!(policy.forged_domain(), "company.com");
    assert_eq!(policy.attacker_mx(), "mail.evil.test");
    assert_eq!(
        policy.decide("company.com", MX),
        ForgeDecision::Mx {
            exchange: "mail.evil.test",
            preference: 5,
            glue: Ipv4Addr::new(10, 0, 0, 66),
            ttl: 60,
        }
    );
    assert_eq!(policy.decide("example.com", MX), ForgeDecision::PassThrough);
}
