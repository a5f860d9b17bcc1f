use std::net::{IpAddr, Ipv4Addr};

use poem::Request;

use login_tracker::types::internal::context::RequestContext;

#[test]
fn test_from_request_prefers_x_forwarded_for() {
    let req = Request::builder()
        .header("X-Forwarded-For", "203.0.113.5, 10.0.0.1")
        .header("X-Real-IP", "198.51.100.7")
        .header("User-Agent", "TestAgent/1.0")
        .finish();

    let ctx = RequestContext::from_request(&req);

    assert_eq!(ctx.ip_address, Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5))));
    assert_eq!(ctx.user_agent.as_deref(), Some("TestAgent/1.0"));
}

#[test]
fn test_from_request_falls_back_to_x_real_ip() {
    let req = Request::builder()
        .header("X-Real-IP", "198.51.100.7")
        .finish();

    let ctx = RequestContext::from_request(&req);

    assert_eq!(ctx.ip_address, Some(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 7))));
}

#[test]
fn test_from_request_without_headers_yields_absent_fields() {
    let req = Request::builder().finish();

    let ctx = RequestContext::from_request(&req);

    assert!(ctx.ip_address.is_none());
    assert!(ctx.user_agent.is_none());
}

#[test]
fn test_request_ids_are_unique_per_context() {
    let a = RequestContext::new();
    let b = RequestContext::new();

    assert_ne!(a.request_id, b.request_id);
}

#[test]
fn test_builder_helpers() {
    let ctx = RequestContext::new()
        .with_ip_address(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5)))
        .with_user_agent("TestAgent/1.0");

    assert_eq!(ctx.ip_address, Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5))));
    assert_eq!(ctx.user_agent.as_deref(), Some("TestAgent/1.0"));
}
