use ec2_dns_sync_domain::{zone_suffix_of, HostedZone, HostedZoneId};

#[test]
fn test_zone_suffix_drops_leftmost_label() {
    assert_eq!(zone_suffix_of("server.example.com").as_deref(), Some("example.com"));
    assert_eq!(zone_suffix_of("a.b.internal.corp").as_deref(), Some("b.internal.corp"));
    assert_eq!(zone_suffix_of("server.example.com.").as_deref(), Some("example.com"));
}

#[test]
fn test_zone_suffix_of_single_label_is_none() {
    assert!(zone_suffix_of("localhost").is_none());
    assert!(zone_suffix_of("host.").is_none());
    assert!(zone_suffix_of("").is_none());
}

#[test]
fn test_zone_id_strips_path_prefix() {
    assert_eq!(HostedZoneId::from_raw("/hostedzone/Z123ABC").as_str(), "Z123ABC");
    assert_eq!(HostedZoneId::from_raw("Z123ABC").as_str(), "Z123ABC");
    assert_eq!(HostedZoneId::from_raw("/hostedzone/Z9/").as_str(), "Z9");
}

#[test]
fn test_zone_name_match_ignores_root_dot_and_case() {
    let zone = HostedZone::new("/hostedzone/Z1", "Example.com.");

    assert!(zone.has_name("example.com"));
    assert!(zone.has_name("example.com."));
    assert!(!zone.has_name("sub.example.com"));
    assert!(!zone.has_name("example.org"));
}

#[test]
fn test_hosted_zone_exposes_bare_id() {
    let zone = HostedZone::new("/hostedzone/ZINTERNAL", "internal.corp.");
    assert_eq!(zone.id(), HostedZoneId::new("ZINTERNAL"));
}
