// src/checker/validator.rs
// =============================================================================
// This module decides whether a single URL is "valid".
//
// Two interchangeable strategies, one capability:
// - Probe: make a real HTTP HEAD request and accept only a 200 response
// - Format: match the URL against the known YouTube URL shapes, offline
//
// Both are variants of one enum with a single check() method, so the
// worker pool doesn't care which strategy it was handed. We use an enum
// instead of a trait because check() is async for the probe arm, and enum
// dispatch keeps that simple.
//
// Important: a URL failing a check is NOT an error. Timeouts, non-200
// responses, and malformed URLs are all just the "invalid" classification.
// The only real error here is failing to build the HTTP client at all.
// =============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use reqwest::{Client, StatusCode};
use std::time::Duration;

// How long we wait for a single HEAD request before classifying the URL
// as invalid
const PROBE_TIMEOUT_SECS: u64 = 10;

// The YouTube URL shapes we accept: watch?v=, embed/, v/ and the youtu.be
// short link, each carrying an exactly-11-character video id. The pattern
// is anchored at both ends so a 10- or 12-character id does not match.
const YOUTUBE_URL_PATTERN: &str = r"^(https?://)?(www\.)?(youtube\.com/(watch\?v=|embed/|v/)|youtu\.be/)[A-Za-z0-9_-]{11}$";

// A URL validation strategy
//
// Built once per run and shared (via Arc) by every worker in the pool.
pub enum Validator {
    /// Live HTTP HEAD probe; valid iff the response status is exactly 200
    Probe(Client),
    /// Offline format check against the known YouTube URL shapes
    Format(Regex),
}

impl Validator {
    // Builds the live-probe strategy
    //
    // The reqwest Client is the process-wide network resource: created
    // once here, dropped when the run ends. If it cannot be built the
    // whole run is aborted (there is nothing sensible to do without it).
    pub fn probe() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .danger_accept_invalid_certs(true) // Classify by status, not certificate hygiene
            .build()
            .context("failed to initialize the HTTP client")?;

        Ok(Validator::Probe(client))
    }

    // Builds the offline format-check strategy
    //
    // This cannot tell "video exists" from "video never existed" - it only
    // validates the syntactic shape of the URL.
    pub fn format() -> Self {
        // The pattern is a compile-time constant, so this cannot fail
        Validator::Format(Regex::new(YOUTUBE_URL_PATTERN).unwrap())
    }

    // Classifies one URL
    //
    // Returns true for valid, false for invalid. Never errors: transport
    // failures and timeouts are legitimate "invalid" outcomes.
    pub async fn check(&self, url: &str) -> bool {
        match self {
            Validator::Probe(client) => match client.head(url).send().await {
                Ok(response) => response.status() == StatusCode::OK,
                Err(_) => false,
            },
            Validator::Format(pattern) => pattern.is_match(url),
        }
    }
}
