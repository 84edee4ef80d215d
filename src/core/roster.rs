//! Cadet group loaded from a line-oriented text file.

use crate::errors::{AppError, AppResult};
use crate::models::cadet::Cadet;
use crate::models::residence::Residence;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    cadets: Vec<Cadet>,
}

impl Roster {
    pub fn new(cadets: Vec<Cadet>) -> Self {
        Self { cadets }
    }

    /// Read the roster file. A missing or unreadable file and a file without
    /// any cadet are both reported as errors.
    pub fn load(path: &str, commuter_marker: &str) -> AppResult<Self> {
        let content =
            fs::read_to_string(Path::new(path)).map_err(|e| AppError::ResourceUnavailable {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let roster = Self::parse(&content, commuter_marker);
        if roster.is_empty() {
            return Err(AppError::EmptyRoster(path.to_string()));
        }

        info!(path, cadets = roster.len(), "roster loaded");
        Ok(roster)
    }

    /// One cadet per line. A line containing `commuter_marker` belongs to a
    /// city commuter; the name is whatever precedes the marker.
    pub fn parse(content: &str, commuter_marker: &str) -> Self {
        let mut cadets = Vec::new();

        for (lineno, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let (name, residence) = match line.find(commuter_marker) {
                Some(pos) if !commuter_marker.is_empty() => {
                    (line[..pos].trim_end(), Residence::CityCommuter)
                }
                _ => (line, Residence::Dormitory),
            };

            if name.is_empty() {
                warn!(line = lineno + 1, "roster line has no name, skipped");
                continue;
            }

            cadets.push(Cadet::new(name, residence));
        }

        Self { cadets }
    }

    pub fn cadets(&self) -> &[Cadet] {
        &self.cadets
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cadet> {
        self.cadets.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cadets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cadets.is_empty()
    }
}
