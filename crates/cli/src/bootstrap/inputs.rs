use anyhow::Context;
use dnsperf_domain::{parse_domain_list, parse_server_list, ServerTarget};
use std::fs;
use std::sync::Arc;
use tracing::{debug, info};

pub fn load_servers(path: &str) -> anyhow::Result<Vec<ServerTarget>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading servers file {path}"))?;

    let servers = parse_server_list(&contents, |line_no, line, err| {
        debug!(file = path, line = line_no, content = line, error = %err, "Skipping server line");
    });

    info!(file = path, count = servers.len(), "Servers loaded");
    Ok(servers)
}

pub fn load_domains(path: &str) -> anyhow::Result<Vec<Arc<str>>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading domains file {path}"))?;

    let domains = parse_domain_list(&contents);

    info!(file = path, count = domains.len(), "Domains loaded");
    Ok(domains)
}
