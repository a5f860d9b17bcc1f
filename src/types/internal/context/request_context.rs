use std::net::IpAddr;

use poem::Request;

use super::request_id::RequestId;

/// Request context that flows through all layers
///
/// Carries the network facts about the current inbound request that the
/// audit trail records: the client address and the self-reported user
/// agent. Built once at the top of an endpoint and passed down explicitly;
/// code running outside an HTTP request has no context to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Value of the User-Agent header, if the client sent one
    pub user_agent: Option<String>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            ip_address: None,
            user_agent: None,
            request_id: RequestId::new(),
        }
    }

    /// Create a RequestContext from an inbound HTTP request
    ///
    /// # Arguments
    /// * `req` - The HTTP request
    pub fn from_request(req: &Request) -> Self {
        Self {
            ip_address: Self::extract_ip_address(req),
            user_agent: req.header("User-Agent").map(str::to_owned),
            request_id: RequestId::new(),
        }
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to the socket
    /// remote address.
    ///
    /// # Arguments
    /// * `req` - The HTTP request
    ///
    /// # Returns
    /// * `Some(IpAddr)` - IP address if found
    /// * `None` - No IP address could be determined
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        // Fall back to remote address
        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    /// Set the ip_address
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Set the user_agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
