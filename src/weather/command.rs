//! Fetch commands for the weather screens.
//!
//! These commands perform one client call each and send the seq-tagged
//! outcome back through the owning screen's channel. A send to a screen
//! that no longer listens is deliberately ignored.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::command::Command;
use crate::screens::fetch::FetchOutcome;
use crate::weather::client::WeatherClient;
use crate::weather::model::{CurrentReport, ForecastReport};

/// Fetch current conditions for one query.
pub struct FetchCurrentCmd {
    client: WeatherClient,
    query: String,
    seq: u64,
    tx: UnboundedSender<FetchOutcome<CurrentReport>>,
}

impl FetchCurrentCmd {
    pub const fn new(
        client: WeatherClient,
        query: String,
        seq: u64,
        tx: UnboundedSender<FetchOutcome<CurrentReport>>,
    ) -> Self {
        Self {
            client,
            query,
            seq,
            tx,
        }
    }
}

#[async_trait]
impl Command for FetchCurrentCmd {
    fn name(&self) -> String {
        format!("current conditions for '{}'", self.query)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let result = self.client.current(&self.query).await;
        let _ = self.tx.send(FetchOutcome {
            seq: self.seq,
            result,
        });
        Ok(())
    }
}

/// Fetch an N-day forecast for one query.
pub struct FetchForecastCmd {
    client: WeatherClient,
    query: String,
    days: u8,
    seq: u64,
    tx: UnboundedSender<FetchOutcome<ForecastReport>>,
}

impl FetchForecastCmd {
    pub const fn new(
        client: WeatherClient,
        query: String,
        days: u8,
        seq: u64,
        tx: UnboundedSender<FetchOutcome<ForecastReport>>,
    ) -> Self {
        Self {
            client,
            query,
            days,
            seq,
            tx,
        }
    }
}

#[async_trait]
impl Command for FetchForecastCmd {
    fn name(&self) -> String {
        format!("{}-day forecast for '{}'", self.days, self.query)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let result = self.client.forecast(&self.query, self.days).await;
        let _ = self.tx.send(FetchOutcome {
            seq: self.seq,
            result,
        });
        Ok(())
    }
}
