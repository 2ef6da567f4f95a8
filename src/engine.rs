use crate::error::Result;
use crate::tools::highscores::{extract_highscores, HighscoresQuery, HighscoresResponse};
use crate::tools::overview::{extract_overview, OverviewResponse};
use crate::types::{ApiDetails, Information};
use chrono::{DateTime, Utc};

/// Supplies the metadata envelope stamped onto every response.
pub trait Envelope: Send + Sync {
    fn information(&self) -> Information;
}

/// Stamps the wall-clock time at extraction.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvelope {
    pub details: ApiDetails,
}

impl SystemEnvelope {
    pub fn new(details: ApiDetails) -> Self {
        Self { details }
    }
}

impl Envelope for SystemEnvelope {
    fn information(&self) -> Information {
        Information::new(self.details.clone(), Utc::now())
    }
}

/// Always stamps the same timestamp, for reproducible output.
#[derive(Debug, Clone)]
pub struct FixedEnvelope {
    pub details: ApiDetails,
    pub timestamp: DateTime<Utc>,
}

impl FixedEnvelope {
    pub fn new(details: ApiDetails, timestamp: DateTime<Utc>) -> Self {
        Self { details, timestamp }
    }
}

impl Envelope for FixedEnvelope {
    fn information(&self) -> Information {
        Information::new(self.details.clone(), self.timestamp)
    }
}

/// Facade pairing the extractors with an envelope source.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct Extractor<'a> {
    pub envelope: &'a dyn Envelope,
}

impl<'a> Extractor<'a> {
    pub fn new(envelope: &'a dyn Envelope) -> Self {
        Self { envelope }
    }

    pub fn overview(&self, html: &str) -> Result<OverviewResponse> {
        extract_overview(html, self.envelope.information())
    }

    pub fn highscores(&self, query: &HighscoresQuery, html: &str) -> Result<HighscoresResponse> {
        extract_highscores(query, html, self.envelope.information())
    }
}
