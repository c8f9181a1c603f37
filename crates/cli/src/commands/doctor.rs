//! Doctor command - validate configuration and show status

use anyhow::Result;
use requote_domain::{CredentialStore, PostSource, PostSourceError};
use serde::Serialize;
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::commands::run::build_credential_store;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    secrets: CheckResult,
    x_api: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        secrets: CheckResult::error("Not checked"),
        x_api: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    // Check config
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok(format!(
                "Configuration loaded (source: {}, secrets backend: {})",
                c.general.source, c.secrets.backend
            ));
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.secrets = check_secrets(config).await;
        report.x_api = check_x_api(config, args.live, &report.secrets).await;
    }

    let checks = [&report.config, &report.secrets, &report.x_api];
    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

async fn check_secrets(config: &AppConfig) -> CheckResult {
    let store = match build_credential_store(config) {
        Ok(s) => s,
        Err(e) => return CheckResult::error(format!("Invalid secrets config: {}", e)),
    };

    match store.bearer_token(&config.secrets.key).await {
        Ok(_) => CheckResult::ok(format!(
            "Bearer token for '{}' available via {} backend",
            config.secrets.key, config.secrets.backend
        )),
        Err(e) => CheckResult::error(format!("Credential check failed: {}", e)),
    }
}

async fn check_x_api(config: &AppConfig, live: bool, secrets: &CheckResult) -> CheckResult {
    if !live {
        return CheckResult::warn(format!(
            "Base URL: {} (pass --live to verify connectivity)",
            config.x.base_url
        ));
    }

    if !secrets.is_ok() {
        return CheckResult::error("Cannot check X API without a bearer token");
    }

    let store = match build_credential_store(config) {
        Ok(s) => s,
        Err(e) => return CheckResult::error(format!("Invalid secrets config: {}", e)),
    };

    let token = match store.bearer_token(&config.secrets.key).await {
        Ok(t) => t,
        Err(e) => return CheckResult::error(format!("Credential fetch failed: {}", e)),
    };

    let source = requote_adapters::x::XPostSource::with_base_url(config.x.base_url.clone());

    match source.resolve_user(&token, &config.general.source).await {
        Ok(user_id) => CheckResult::ok(format!(
            "Resolved {} to user id {}",
            config.general.source, user_id
        )),
        Err(PostSourceError::UserNotFound(u)) => {
            CheckResult::warn(format!("API reachable, but user '{}' not found", u))
        }
        Err(e) => CheckResult::error(format!("X API check failed: {}", e)),
    }
}

fn print_report(report: &DoctorReport) {
    println!("requote Doctor Report");
    println!("=====================");
    println!();

    print_check("Config", &report.config);
    print_check("Secrets", &report.secrets);
    print_check("X API", &report.x_api);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall != "error" {
        println!();
        println!("Ready to run! Try: requote run --dry-run");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
