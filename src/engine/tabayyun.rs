use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tracing::debug;
use tracing::error;
use tracing::info;
use url::Url;

use super::assessor::Assessor;
use super::orchestrator::AssessmentOrchestrator;
use super::orchestrator::AssessmentState;
use super::orchestrator::ContinueAction;
use crate::Result;
use crate::config::Config;
use crate::config::load_config_or_default;
use crate::err_with_loc;
use crate::handler::shutdown::ShutdownSignal;
use crate::model::RiskVerdict;
use crate::pipeline::datasource::HttpIndexerClient;
use crate::pipeline::datasource::IndexerClient;
use crate::pipeline::processor::RiskClassifier;
use crate::tracing::setup_tracing;

pub const ENGINE_NAME: &str = "tabayyun";

/// Resolved command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub indexer_url: Option<Url>,
    pub json:        bool,
    pub watch:       bool,
    pub addresses:   Vec<String>,
}

#[derive(Clone)]
pub struct Tabayyun {
    pub config: Config,
    assessor:   Assessor<dyn IndexerClient>,
}

#[derive(Serialize)]
struct StateLine<'a> {
    #[serde(flatten)]
    state:    &'a AssessmentState,
    #[serde(rename = "continue")]
    continue_action: ContinueAction,
}

impl Tabayyun {
    pub async fn run(options: RunOptions) -> Result<()> {
        let mut config = load_config_or_default(&options.config_path)?;
        config.apply_env_overrides()?;
        if let Some(indexer_url) = options.indexer_url.clone() {
            config.indexer.base_url = indexer_url;
        }

        let _tracing_guard = setup_tracing(ENGINE_NAME, &config.logging)?;
        info!("Starting Tabayyun (تبيّن): The Verifier");
        debug!("config::indexer::{}::risk::{:?}", config.indexer.base_url, config.risk);

        let tabayyun = Tabayyun::new(config)?;
        let shutdown_signal = ShutdownSignal::new();

        let ctrl_c_signal = shutdown_signal.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("termination_signal::graceful_shutdown");
                ctrl_c_signal.shutdown();
            }
        });

        let result = if options.watch {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            tabayyun.watch(stdin, std::io::stdout(), options.json, shutdown_signal).await
        } else {
            tokio::select! {
                result = tabayyun.assess_all(&options.addresses, std::io::stdout(), options.json) => result,
                _ = shutdown_signal.wait_for_shutdown() => Ok(()),
            }
        };

        info!("tabayyun::shutdown");
        result
    }

    pub fn new(config: Config) -> Result<Self> {
        let client = HttpIndexerClient::new(config.indexer.clone())?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    pub fn with_client(
        config: Config,
        client: Arc<dyn IndexerClient>,
    ) -> Self {
        let classifier = RiskClassifier::new(config.risk.clone());
        Self {
            assessor: Assessor::new(client, classifier),
            config,
        }
    }

    /// Assess every address concurrently and write one report per address,
    /// in input order. Fails if any assessment failed.
    pub async fn assess_all<W: Write>(
        &self,
        addresses: &[String],
        mut out: W,
        json: bool,
    ) -> Result<()> {
        if addresses.is_empty() {
            return Err(err_with_loc!("no address given"));
        }

        let outcomes = join_all(addresses.iter().map(|address| self.assessor.assess(address))).await;

        let mut failures = 0;
        for (address, outcome) in addresses.iter().zip(outcomes) {
            match outcome {
                Ok(verdict) => out.write_all(render_verdict(&verdict, json)?.as_bytes())?,
                Err(e) => {
                    failures += 1;
                    error!("assessment_failed::address::{}::error::{}", address, e);
                    writeln!(out, "Address: {}\n  {}", address, e)?;
                },
            }
        }
        out.flush()?;

        if failures > 0 {
            return Err(err_with_loc!(format!("{} of {} assessments failed", failures, addresses.len())));
        }
        Ok(())
    }

    /// Treat each input line as the recipient field changing and print every
    /// state the orchestrator publishes. Returns once input is exhausted and
    /// the last assessment settled, or on shutdown.
    pub async fn watch<R, W>(
        &self,
        input: R,
        mut out: W,
        json: bool,
        shutdown_signal: ShutdownSignal,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let orchestrator = Arc::new(AssessmentOrchestrator::new(self.assessor.clone()));
        let mut states = orchestrator.subscribe();
        let mut lines = input.lines();
        let mut input_open = true;

        let stop = shutdown_signal.wait_for_shutdown();
        tokio::pin!(stop);

        loop {
            tokio::select! {
                line = lines.next_line(), if input_open => match line? {
                    Some(line) => {
                        orchestrator.on_address_changed(line.trim());
                    },
                    None => {
                        debug!("watch_input_closed");
                        input_open = false;
                        if !states.borrow().checking && !states.has_changed().unwrap_or(false) {
                            break;
                        }
                    },
                },
                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = states.borrow_and_update().clone();
                    writeln!(out, "{}", render_state(&state, json)?)?;
                    out.flush()?;
                    if !input_open && !state.checking {
                        break;
                    }
                },
                _ = &mut stop => {
                    info!("watch::shutdown");
                    break;
                },
            }
        }

        Ok(())
    }
}

fn render_verdict(
    verdict: &RiskVerdict,
    json: bool,
) -> Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(verdict)?))
    } else {
        Ok(format!("{}\n", verdict))
    }
}

fn render_state(
    state: &AssessmentState,
    json: bool,
) -> Result<String> {
    let continue_action = state.continue_action();
    if json {
        return Ok(serde_json::to_string(&StateLine { state, continue_action })?);
    }

    let body = match (&state.address, &state.verdict) {
        (None, _) => "no address to check".to_string(),
        (Some(address), _) if state.checking => format!("checking {}", address),
        (Some(_), Some(verdict)) => verdict.to_string(),
        (Some(address), None) => format!("risk assessment unavailable for {}", address),
    };
    Ok(format!("{}\n[{}]", body.trim_end(), continue_action.label))
}
