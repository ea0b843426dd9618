//! Actor identity derivation.
//!
//! There is no account system: callers are identified by a one-way hash of
//! their network address mixed with a server secret. The same address and
//! secret always produce the same identifier, which is what makes favorites
//! idempotent per caller.

use std::net::SocketAddr;

use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

/// Length of an actor hash in hex characters.
pub const ACTOR_HASH_LENGTH: usize = 64;

/// Extract the client address for identity purposes.
///
/// Prefers the first hop of `x-forwarded-for` so identities stay stable
/// behind proxies, then the transport peer, then a literal sentinel.
pub fn client_addr(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}

/// Compute the actor hash for a client address.
///
/// SHA-256 of `address || secret`, as 64 lowercase hex characters. The
/// secret must never reach clients; without it the hash is not linkable
/// back to an address.
pub fn actor_hash(address: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(address.as_bytes());
    hasher.update(secret.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex.truncate(ACTOR_HASH_LENGTH);
    hex
}

/// Derive the actor hash for an inbound request.
pub fn actor_from_request(headers: &HeaderMap, peer: SocketAddr, secret: &str) -> String {
    actor_hash(&client_addr(headers, Some(peer)), secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> SocketAddr {
        "10.0.0.1:443".parse().unwrap()
    }

    #[test]
    fn test_actor_hash_is_deterministic() {
        let first = actor_hash("192.168.1.1", "secret");
        let second = actor_hash("192.168.1.1", "secret");
        assert_eq!(first, second);
        assert_eq!(first.len(), ACTOR_HASH_LENGTH);
    }

    #[test]
    fn test_actor_hash_depends_on_secret() {
        let with_a = actor_hash("192.168.1.1", "secret-a");
        let with_b = actor_hash("192.168.1.1", "secret-b");
        assert_ne!(with_a, with_b);
    }

    #[test]
    fn test_different_addresses_differ() {
        assert_ne!(
            actor_hash("192.168.1.1", "secret"),
            actor_hash("192.168.1.2", "secret")
        );
    }

    #[test]
    fn test_client_addr_prefers_forwarded_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            "203.0.113.7, 10.0.0.2, 10.0.0.3".parse().unwrap(),
        );

        assert_eq!(client_addr(&headers, Some(peer())), "203.0.113.7");
    }

    #[test]
    fn test_client_addr_falls_back_to_peer() {
        let headers = HeaderMap::new();
        assert_eq!(client_addr(&headers, Some(peer())), "10.0.0.1");
    }

    #[test]
    fn test_client_addr_unknown_sentinel() {
        let headers = HeaderMap::new();
        assert_eq!(client_addr(&headers, None), "unknown");
    }

    #[test]
    fn test_empty_forwarded_header_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "".parse().unwrap());
        assert_eq!(client_addr(&headers, Some(peer())), "10.0.0.1");
    }
}
