use anyhow::{bail, Context};
use school_api::{HttpTransport, SchoolClient};
use school_config::AppConfig;
use school_desk::actions::FeeRequest;
use school_desk::domain_models::{summarize_fees, PaymentSummary};
use school_desk::middleware::{ApiMiddleware, LoggingMiddleware, NotificationMiddleware};
use school_desk::{logger, Action, AppState, Store};
use std::sync::Arc;
use std::time::Duration;

/// Longest we wait for the fee list
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

fn build_client(config: &AppConfig) -> anyhow::Result<SchoolClient> {
    let transport = HttpTransport::new(
        &config.base_url,
        config.api_token.clone(),
        &config.user_agent,
    )
    .context("Failed to create HTTP transport")?;

    Ok(SchoolClient::new(Arc::new(transport))
        .with_bulk_payment_timeout(config.bulk_payment_timeout()))
}

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting school-desk, logging to {:?}", log_file);

    let config = AppConfig::load();
    if config.school_id.trim().is_empty() {
        bail!("No school configured, set SCHOOL_ID or school_id in .school-desk.toml");
    }
    log::info!("Using backend {} for school {}", config.base_url, config.school_id);

    let client = build_client(&config)?;

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::default());
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(NotificationMiddleware::new()));
    store.add_middleware(Box::new(ApiMiddleware::new(client)?));

    store.dispatch(Action::fee(FeeRequest::FetchAll {
        school_id: config.school_id.clone(),
    }));

    if !store.wait_until(FETCH_TIMEOUT, |state| !state.fees.loading()) {
        bail!("No answer from {} within {:?}", config.base_url, FETCH_TIMEOUT);
    }
    store.process_pending();

    let fees = &store.state().fees;
    if let Some(failure) = fees.failure() {
        log::error!("Fee list failed: {}", failure);
        bail!("Fee list failed: {}", failure);
    }

    let records = fees
        .data()
        .and_then(|data| data.fees())
        .unwrap_or_default();
    let summary = records
        .iter()
        .map(|fee| summarize_fees(&fee.fee_details))
        .fold(PaymentSummary::default(), |acc, s| acc + s);

    log::info!("Fee summary: {:?}", summary);
    println!("Fee records: {}", records.len());
    println!("Total:   {}", summary.total);
    println!("Paid:    {}", summary.paid);
    println!("Partial: {}", summary.partial);
    println!("Unpaid:  {}", summary.unpaid);

    Ok(())
}
