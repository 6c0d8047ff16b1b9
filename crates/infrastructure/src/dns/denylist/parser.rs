//! Hosts-file parser.
//!
//! Only `0.0.0.0 <hostname>` lines count. The hostname ends at the first
//! whitespace or `#`; anything after it is ignored.

use rustc_hash::FxHashSet;

const SINK_ADDRESS: &str = "0.0.0.0";

/// Hostname blocked by one hosts-file line, if the line is a sink entry.
pub fn parse_hosts_line(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix(SINK_ADDRESS)?;

    // the address must be followed by whitespace, not more address
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let host = rest.trim_start();
    let end = host
        .find(|c: char| c.is_whitespace() || c == '#')
        .unwrap_or(host.len());
    let host = &host[..end];

    if host.is_empty() {
        return None;
    }

    Some(host)
}

/// Every blocked hostname in a hosts file. Malformed lines are skipped.
pub fn parse_hosts(text: &str) -> FxHashSet<String> {
    text.lines()
        .filter_map(parse_hosts_line)
        .map(str::to_string)
        .collect()
}
