use super::ExtractNextNameserversUseCase;
use crate::ports::DnsTransport;
use ferrous_walk_domain::{
    DomainError, NameserverCandidate, Resolution, ResolutionStage, ResolverConfig,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct IterativeResolveSettings {
    pub root_servers: Vec<NameserverCandidate>,
    /// Rounds allowed before giving up; 0 means unbounded.
    pub max_hops: usize,
    pub deadline: Option<Duration>,
}

impl From<&ResolverConfig> for IterativeResolveSettings {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            root_servers: config.root_candidates(),
            max_hops: config.max_hops,
            deadline: config.resolve_deadline(),
        }
    }
}

/// Per-call walk state. Never outlives one `execute`.
struct ResolutionState {
    domain: Arc<str>,
    candidates: Vec<NameserverCandidate>,
    stage: ResolutionStage,
    stages: Vec<ResolutionStage>,
}

impl ResolutionState {
    fn new(domain: Arc<str>, roots: Vec<NameserverCandidate>) -> Self {
        Self {
            domain,
            candidates: roots,
            stage: ResolutionStage::Root,
            stages: Vec::new(),
        }
    }

    fn advance(&mut self, next: Vec<Ipv4Addr>) {
        self.stage = self.stage.next();
        self.candidates = next.into_iter().map(NameserverCandidate::new).collect();
    }

    fn candidate_addresses(&self) -> Vec<String> {
        self.candidates
            .iter()
            .map(|candidate| candidate.address.to_string())
            .collect()
    }
}

/// Walks the delegation hierarchy from the root servers down.
///
/// Each round tries the current candidates strictly in order. The first
/// server that answers decides the round: an answer ends the walk, a
/// referral becomes the next candidate list and the remaining servers of
/// the round are never queried. A round fails only when no server
/// responded at all.
pub struct ResolveIterativelyUseCase {
    transport: Arc<dyn DnsTransport>,
    extractor: Arc<ExtractNextNameserversUseCase>,
    settings: IterativeResolveSettings,
}

impl ResolveIterativelyUseCase {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        extractor: Arc<ExtractNextNameserversUseCase>,
        settings: IterativeResolveSettings,
    ) -> Self {
        Self {
            transport,
            extractor,
            settings,
        }
    }

    pub async fn execute(
        &self,
        domain: &str,
        cancel: &CancellationToken,
    ) -> Result<Resolution, DomainError> {
        let domain: Arc<str> = domain.into();
        info!("[Iterative DNS Lookup] Resolving {}", domain);

        match self.settings.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.walk(domain, cancel))
                .await
                .map_err(|_| DomainError::DeadlineExceeded)?,
            None => self.walk(domain, cancel).await,
        }
    }

    async fn walk(
        &self,
        domain: Arc<str>,
        cancel: &CancellationToken,
    ) -> Result<Resolution, DomainError> {
        let mut state = ResolutionState::new(domain, self.settings.root_servers.clone());

        while !state.candidates.is_empty() {
            if self.settings.max_hops > 0 && state.stages.len() >= self.settings.max_hops {
                return Err(DomainError::HopLimitExceeded {
                    hops: self.settings.max_hops,
                });
            }
            state.stages.push(state.stage);

            let mut next_servers = None;

            for candidate in &state.candidates {
                if cancel.is_cancelled() {
                    return Err(DomainError::Cancelled);
                }

                let response = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                    result = self.transport.query(candidate.address, &state.domain) => result,
                };

                match response {
                    Ok(message) => {
                        info!(
                            "[DEBUG] Querying {} server ({}) - SUCCESS",
                            state.stage, candidate
                        );

                        if let Some(answer) = message.first_answer() {
                            return Ok(Resolution {
                                domain: Arc::clone(&state.domain),
                                answer: answer.clone(),
                                stage: state.stage,
                                stages: state.stages,
                            });
                        }

                        debug!(
                            stage = %state.stage,
                            server = %candidate.address,
                            status = message.header.status,
                            authority = message.authority.len(),
                            "Referral received"
                        );

                        let extracted = tokio::select! {
                            biased;
                            _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                            servers = self.extractor.execute(&message) => servers,
                        };
                        next_servers = Some(extracted);
                        break;
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            "[ERROR] Query failed for {} server ({})",
                            state.stage, candidate
                        );
                    }
                }
            }

            let Some(next_servers) = next_servers else {
                return Err(DomainError::NoResponseInStage {
                    stage: state.stage,
                    servers: state.candidate_addresses(),
                });
            };

            if next_servers.is_empty() {
                return Err(DomainError::NoDelegationFound { stage: state.stage });
            }

            state.advance(next_servers);
        }

        Err(DomainError::NoDelegationFound { stage: state.stage })
    }
}
