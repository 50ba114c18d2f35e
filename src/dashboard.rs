use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use crate::analysis::ProfileScanner;
use crate::llm::InsightGenerator;
use crate::models::{InsightReport, ProfileSnapshot};

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ScanState {
    pub data: Option<ProfileSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AnalysisState {
    pub report: Option<InsightReport>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What happened to a request once it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guard rejected the request before any work was done.
    Skipped,
    /// Result was written to its slot.
    Applied,
    /// A newer request superseded this one; its result was dropped.
    Stale,
}

/// State slot plus the generation of the request allowed to write it.
#[derive(Default)]
struct Slot<T> {
    state: T,
    generation: u64,
}

impl<T> Slot<T> {
    fn begin(&mut self, state: T) -> u64 {
        self.generation += 1;
        self.state = state;
        self.generation
    }

    fn complete(&mut self, ticket: u64, state: T) -> Outcome {
        if ticket != self.generation {
            return Outcome::Stale;
        }
        self.state = state;
        Outcome::Applied
    }
}

/// A report may only land if neither slot moved on since it was requested.
#[derive(Debug, Clone, Copy)]
struct ReportTicket {
    scan: u64,
    analysis: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub scan: ScanState,
    pub analysis: AnalysisState,
    pub credential_present: bool,
}

impl DashboardView {
    /// Report generation is offered once a snapshot exists and no report does.
    pub fn can_generate(&self) -> bool {
        self.scan.data.is_some() && self.analysis.report.is_none() && !self.analysis.loading
    }
}

/// Session state: the current scan result and the current report.
///
/// Each slot is written only by its own request path. Overlapping requests
/// are not cancelled; instead each takes a generation ticket and a result is
/// discarded if a newer request on the same slot started in the meantime.
pub struct Dashboard {
    scanner: ProfileScanner,
    generator: InsightGenerator,
    credential: RwLock<String>,
    scan: Mutex<Slot<ScanState>>,
    analysis: Mutex<Slot<AnalysisState>>,
}

impl Dashboard {
    pub fn new(scanner: ProfileScanner, generator: InsightGenerator) -> Self {
        Self {
            scanner,
            generator,
            credential: RwLock::new(String::new()),
            scan: Mutex::new(Slot::default()),
            analysis: Mutex::new(Slot::default()),
        }
    }

    pub async fn set_credential(&self, credential: &str) {
        *self.credential.write().await = credential.to_string();
    }

    pub async fn submit_scan(&self, username: &str) -> Outcome {
        if username.trim().is_empty() {
            return Outcome::Skipped;
        }

        let ticket = {
            let mut scan = self.scan.lock().await;
            let ticket = scan.begin(ScanState {
                data: None,
                loading: true,
                error: None,
            });
            // a report belongs to exactly one snapshot
            self.analysis.lock().await.begin(AnalysisState::default());
            ticket
        };

        let state = match self.scanner.scan(username).await {
            Ok(data) => ScanState {
                data,
                loading: false,
                error: None,
            },
            Err(e) => {
                tracing::warn!("Scan of {} failed: {}", username.trim(), e);
                ScanState {
                    data: None,
                    loading: false,
                    error: Some(e.to_string()),
                }
            }
        };

        let outcome = self.scan.lock().await.complete(ticket, state);
        if outcome == Outcome::Stale {
            tracing::warn!("Discarding stale scan result for {}", username.trim());
        }
        outcome
    }

    pub async fn request_report(&self) -> Outcome {
        // scan before analysis, same order as submit_scan and view
        let (snapshot, ticket) = {
            let scan = self.scan.lock().await;
            let snapshot = match &scan.state.data {
                Some(snapshot) => snapshot.clone(),
                None => return Outcome::Skipped,
            };

            let mut analysis = self.analysis.lock().await;
            if analysis.state.report.is_some() || analysis.state.loading {
                return Outcome::Skipped;
            }
            let ticket = ReportTicket {
                scan: scan.generation,
                analysis: analysis.begin(AnalysisState {
                    report: None,
                    loading: true,
                    error: None,
                }),
            };
            (snapshot, ticket)
        };

        let credential = self.credential.read().await.clone();
        let state = match self.generator.analyze(&snapshot, &credential).await {
            Ok(report) => AnalysisState {
                report: Some(report),
                loading: false,
                error: None,
            },
            Err(e) => {
                tracing::warn!("Insight generation failed: {}", e);
                AnalysisState {
                    report: None,
                    loading: false,
                    error: Some(e.to_string()),
                }
            }
        };

        let outcome = {
            let scan = self.scan.lock().await;
            let mut analysis = self.analysis.lock().await;
            if scan.generation != ticket.scan {
                Outcome::Stale
            } else {
                analysis.complete(ticket.analysis, state)
            }
        };
        if outcome == Outcome::Stale {
            tracing::warn!("Discarding stale report for {}", snapshot.user.login);
        }
        outcome
    }

    pub async fn view(&self) -> DashboardView {
        let scan = self.scan.lock().await.state.clone();
        let analysis = self.analysis.lock().await.state.clone();

        DashboardView {
            scan,
            analysis,
            credential_present: !self.credential.read().await.is_empty(),
        }
    }

    pub async fn can_generate(&self) -> bool {
        self.view().await.can_generate()
    }
}
