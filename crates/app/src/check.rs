//! `app check`: preflight before deploying the proxy.

use std::fmt;
use std::net::SocketAddr;

use api::ProxyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "[OK]"),
            Status::Warn => write!(f, "[WARN]"),
            Status::Fail => write!(f, "[FAIL]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub status: Status,
    pub message: String,
}

impl CheckLine {
    fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

pub fn preflight(config: &ProxyConfig, addr: &str) -> Vec<CheckLine> {
    let mut lines = Vec::new();

    lines.push(match content::catalog() {
        Ok(catalog) => CheckLine::new(
            Status::Ok,
            format!(
                "catalog: {} exercises in {} sections",
                catalog.len(),
                catalog.sections().len()
            ),
        ),
        Err(err) => CheckLine::new(Status::Fail, format!("catalog: {err}")),
    });

    lines.push(if config.has_app_id() {
        CheckLine::new(Status::Ok, "WOLFRAM_APP_ID is set")
    } else {
        CheckLine::new(
            Status::Warn,
            "WOLFRAM_APP_ID is not set; /api/query will answer 500",
        )
    });

    lines.push(match addr.parse::<SocketAddr>() {
        Ok(parsed) => CheckLine::new(Status::Ok, format!("bind address {parsed}")),
        Err(err) => CheckLine::new(Status::Fail, format!("bind address {addr:?}: {err}")),
    });

    lines
}

#[must_use]
pub fn passed(lines: &[CheckLine]) -> bool {
    lines.iter().all(|l| l.status != Status::Fail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_app_id_is_only_a_warning() {
        let lines = preflight(&ProxyConfig::new(None), "0.0.0.0:3000");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "[OK] catalog: 74 exercises in 13 sections");
        assert_eq!(lines[1].status, Status::Warn);
        assert!(passed(&lines));
    }

    #[test]
    fn bad_bind_address_fails() {
        let lines = preflight(&ProxyConfig::new(Some("id".into())), "localhost");
        assert_eq!(lines[1].status, Status::Ok);
        assert_eq!(lines[2].status, Status::Fail);
        assert!(lines[2].to_string().starts_with("[FAIL] bind address"));
        assert!(!passed(&lines));
    }
}
