//! LAN address resolution
//!
//! Picks the IPv4 address peers on the local network can reach this host at.
//! Selection is a pure function over a snapshot of the OS adapter table.

use std::net::{IpAddr, Ipv4Addr};

use local_ip_address::list_afinet_netifas;

/// One address alias of an OS-reported network adapter.
#[derive(Debug, Clone)]
pub struct IfaceAlias {
    pub adapter: String,
    pub addr: IpAddr,
    pub internal: bool,
}

/// Picks a LAN-reachable IPv4 address out of an adapter alias table.
///
/// Adapters are visited in first-appearance order; each adapter contributes
/// its first alias that is IPv4, not `127.0.0.1` and not internal. A later
/// adapter's pick replaces an earlier one, so the last qualifying adapter in
/// table order wins. Returns `""` when nothing qualifies.
pub fn resolve_local_ipv4(aliases: &[IfaceAlias]) -> String {
    let mut adapters: Vec<&str> = Vec::new();
    for alias in aliases {
        if !adapters.contains(&alias.adapter.as_str()) {
            adapters.push(alias.adapter.as_str());
        }
    }

    let mut local_ip = String::new();
    for adapter in adapters {
        for alias in aliases.iter().filter(|a| a.adapter == adapter) {
            if qualifies(alias) {
                local_ip = alias.addr.to_string();
                break;
            }
        }
    }
    local_ip
}

fn qualifies(alias: &IfaceAlias) -> bool {
    match alias.addr {
        IpAddr::V4(v4) => v4 != Ipv4Addr::LOCALHOST && !alias.internal,
        IpAddr::V6(_) => false,
    }
}

/// Reads the live adapter table from the OS.
///
/// Enumeration failure degrades to an empty table; resolution then yields
/// `""` rather than an error.
pub fn detect_aliases() -> Vec<IfaceAlias> {
    match list_afinet_netifas() {
        Ok(netifas) => netifas
            .into_iter()
            .map(|(name, addr)| IfaceAlias {
                internal: addr.is_loopback(),
                adapter: name,
                addr,
            })
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to enumerate network interfaces: {}", e);
            Vec::new()
        }
    }
}

pub fn local_ipv4() -> String {
    resolve_local_ipv4(&detect_aliases())
}

pub fn public_url(ip: &str, port: u16) -> String {
    format!("http://{}:{}", ip, port)
}
