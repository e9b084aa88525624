use crate::errors::DomainError;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

/// A DNS server under test, as listed in the servers file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTarget {
    pub address: IpAddr,
    pub description: Arc<str>,
}

impl ServerTarget {
    pub fn new(address: IpAddr, description: impl Into<Arc<str>>) -> Self {
        Self {
            address,
            description: description.into(),
        }
    }

    /// Parses one `ipAddress, freeTextDescription` line.
    ///
    /// Comment and blank lines yield `Ok(None)`. Lines without a comma or with
    /// an address that is not an IPv4/IPv6 literal are errors.
    pub fn parse_line(line: &str) -> Result<Option<Self>, DomainError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (addr, desc) = line
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidServerLine(line.to_string()))?;

        let address = IpAddr::from_str(addr.trim())
            .map_err(|_| DomainError::InvalidIpAddress(addr.trim().to_string()))?;

        Ok(Some(Self::new(address, desc.trim())))
    }
}

/// Parses the servers file contents, keeping input order.
///
/// Malformed lines are passed to `on_skip` and dropped; they never fail the run.
pub fn parse_server_list<F>(contents: &str, mut on_skip: F) -> Vec<ServerTarget>
where
    F: FnMut(usize, &str, &DomainError),
{
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match ServerTarget::parse_line(line) {
            Ok(server) => server,
            Err(e) => {
                on_skip(idx + 1, line, &e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_line() {
        let server = ServerTarget::parse_line("1.1.1.1, Cloudflare")
            .unwrap()
            .unwrap();
        assert_eq!(server.address, "1.1.1.1".parse::<IpAddr>().unwrap());
        assert_eq!(server.description.as_ref(), "Cloudflare");
    }

    #[test]
    fn test_parse_ipv6_line() {
        let server = ServerTarget::parse_line("2001:4860:4860::8888,Google v6")
            .unwrap()
            .unwrap();
        assert!(server.address.is_ipv6());
        assert_eq!(server.description.as_ref(), "Google v6");
    }

    #[test]
    fn test_parse_empty_description() {
        let server = ServerTarget::parse_line("9.9.9.9,").unwrap().unwrap();
        assert_eq!(server.description.as_ref(), "");
    }

    #[test]
    fn test_comment_and_blank_lines_are_ignored() {
        assert!(ServerTarget::parse_line("# public resolvers").unwrap().is_none());
        assert!(ServerTarget::parse_line("   #8.8.8.8, google").unwrap().is_none());
        assert!(ServerTarget::parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn test_not_an_ip_is_rejected() {
        let err = ServerTarget::parse_line("not-an-ip, desc").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIpAddress(_)));
    }

    #[test]
    fn test_missing_comma_is_rejected() {
        let err = ServerTarget::parse_line("8.8.8.8 google").unwrap_err();
        assert!(matches!(err, DomainError::InvalidServerLine(_)));
    }

    #[test]
    fn test_parse_server_list_skips_malformed_lines() {
        let contents = "# servers\n1.1.1.1, cf\nnot-an-ip, desc\n\n8.8.8.8, google\n";
        let mut skipped = Vec::new();
        let servers = parse_server_list(contents, |line_no, _, _| skipped.push(line_no));

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].description.as_ref(), "cf");
        assert_eq!(servers[1].description.as_ref(), "google");
        assert_eq!(skipped, vec![3]);
    }
}
