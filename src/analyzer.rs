use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::extract::{self, Extraction, Extractor};
use crate::patterns::PatternLibrary;
use crate::record::AnalysisRecord;

/// Runs every registered extractor over one page of text.
pub struct Analyzer<'p> {
    patterns: &'p PatternLibrary,
    extractors: Vec<Box<dyn Extractor>>,
    pool: Option<rayon::ThreadPool>,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Analyzer::new(PatternLibrary::standard())
    }
}

impl<'p> Analyzer<'p> {
    pub fn new(patterns: &'p PatternLibrary) -> Self {
        Analyzer {
            patterns,
            extractors: extract::standard_extractors(),
            pool: None,
        }
    }

    /// Runs extractors concurrently on a dedicated pool of `workers` threads.
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| Error::WorkerPool(e.to_string()))?;
        info!(action = "configure", component = "analyzer", worker_count = workers, "Using workers for extraction");
        self.pool = Some(pool);
        Ok(self)
    }

    /// Adds an extractor; it runs after the standard set and its
    /// contribution replaces any earlier value for the same field.
    pub fn register(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn analyze(&self, text: &str) -> Result<AnalysisRecord> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let start_time = Instant::now();
        info!(
            action = "start",
            component = "analyzer",
            extractor_count = self.extractors.len(),
            input_length = text.len(),
            "Starting page analysis"
        );

        let extractions: Vec<Extraction> = match &self.pool {
            Some(pool) => pool.install(|| {
                self.extractors
                    .par_iter()
                    .map(|e| self.run_one(e.as_ref(), text))
                    .collect()
            }),
            None => self
                .extractors
                .iter()
                .map(|e| self.run_one(e.as_ref(), text))
                .collect(),
        };

        // Collect preserves registration order, so folding is deterministic
        // whether or not the pool was used.
        let mut record = AnalysisRecord::default();
        for extraction in extractions {
            extraction.apply(&mut record);
        }

        info!(
            action = "complete",
            component = "analyzer",
            sections = record.sections.len(),
            brand_colors = record.colors.brand_colors.len(),
            headings = record.headings.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Page analysis completed"
        );
        Ok(record)
    }

    fn run_one(&self, extractor: &dyn Extractor, text: &str) -> Extraction {
        let start_time = Instant::now();
        let extraction = extractor.extract(text, self.patterns);
        debug!(
            action = "extract",
            component = "extractor",
            extractor = extractor.name(),
            duration_us = start_time.elapsed().as_micros(),
            "Extractor finished"
        );
        extraction
    }
}

/// Analyzes `text` with the standard pattern library, sequentially.
pub fn analyze(text: &str) -> Result<AnalysisRecord> {
    Analyzer::default().analyze(text)
}
