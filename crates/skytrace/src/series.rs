//! SampleSeries - the ordered sample sequence of one channel.
//!
//! The series owns its samples together with the query state that
//! accelerates replay: the [`Cursor`] of the last resolved sample index and
//! the key of the last query. Both are reset whenever the samples change in
//! a way that could invalidate them.
//!
//! # Invariant
//!
//! After every successful insertion the samples are sorted by strictly
//! ascending timestamp: at most one sample per timestamp, and never the null
//! sentinel.

use std::ops::Index;

use tracing::{debug, trace, warn};

use crate::channel::AccessMode;
use crate::config::Window;
use crate::error::{ReplayError, Result};
use crate::sample::{Sample, Timestamp};
use crate::search::{cubic_support, linear_support, CubicSupport, Cursor, LinearSupport};

/// The chronologically ordered samples of one channel.
#[derive(Debug, Clone)]
pub struct SampleSeries<T: Sample> {
    samples: Vec<T>,
    cursor: Cursor,
    last_query: Option<(Timestamp, AccessMode)>,
    null: T,
}

impl<T: Sample> Default for SampleSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> SampleSeries<T> {
    /// Creates an empty series with the default cursor.
    pub fn new() -> Self {
        Self::with_cursor(Cursor::new())
    }

    /// Creates an empty series with the given cursor policy.
    pub fn with_cursor(cursor: Cursor) -> Self {
        Self {
            samples: Vec::new(),
            cursor,
            last_query: None,
            null: T::null(),
        }
    }

    /// Creates a series from samples in strictly ascending timestamp order.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::UnsortedSamples` if the timestamps are not
    /// strictly ascending, or `ReplayError::NullSample` if a sample is the
    /// null sentinel.
    pub fn from_samples(samples: Vec<T>) -> Result<Self> {
        let mut series = Self::new();
        series.set_samples(samples)?;
        Ok(series)
    }

    /// Replaces all samples, e.g. after loading a flight from storage.
    ///
    /// On error the series is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`SampleSeries::from_samples`].
    pub fn set_samples(&mut self, samples: Vec<T>) -> Result<()> {
        validate_sorted(&samples)?;
        debug!("Loaded {} samples", samples.len());
        self.samples = samples;
        self.reset_query_state();
        Ok(())
    }

    /// Inserts a sample recorded in chronological order. O(1).
    ///
    /// A sample with the same timestamp as the last one replaces it, so later
    /// duplicates win.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::OutOfOrder` if the sample is older than the last
    /// sample, or `ReplayError::NullSample` for the null sentinel. The series
    /// is left unchanged.
    pub fn upsert_last(&mut self, sample: T) -> Result<()> {
        if sample.is_null() {
            warn!("Rejected null sample");
            return Err(ReplayError::NullSample);
        }

        let timestamp = sample.timestamp();
        match self.samples.last_mut() {
            Some(last) if last.timestamp() == timestamp => *last = sample,
            Some(last) if last.timestamp() > timestamp => {
                let last = last.timestamp();
                warn!(
                    "Rejected out of order sample: timestamp {} precedes {}",
                    timestamp, last
                );
                return Err(ReplayError::OutOfOrder { timestamp, last });
            }
            _ => self.samples.push(sample),
        }
        self.last_query = None;
        Ok(())
    }

    /// Inserts a sample at any position, e.g. when merging imported data. O(n).
    ///
    /// A sample with an existing timestamp replaces the stored one; any other
    /// sample is inserted at its chronological position.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::NullSample` for the null sentinel.
    pub fn upsert(&mut self, sample: T) -> Result<()> {
        if sample.is_null() {
            warn!("Rejected null sample");
            return Err(ReplayError::NullSample);
        }

        let timestamp = sample.timestamp();
        match self.samples.iter().position(|s| s.timestamp() >= timestamp) {
            Some(index) if self.samples[index].timestamp() == timestamp => {
                self.samples[index] = sample;
            }
            Some(index) => {
                trace!("Merged sample at {} into index {}", timestamp, index);
                self.samples.insert(index, sample);
            }
            None => self.samples.push(sample),
        }
        self.last_query = None;
        Ok(())
    }

    /// Returns the first sample, or the null sentinel if the series is empty.
    pub fn get_first(&self) -> &T {
        self.samples.first().unwrap_or(&self.null)
    }

    /// Returns the last sample, or the null sentinel if the series is empty.
    pub fn get_last(&self) -> &T {
        self.samples.last().unwrap_or(&self.null)
    }

    /// Returns the sample at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.samples.get(index)
    }

    /// Returns the number of samples.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns all samples in chronological order.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Returns an iterator over the samples in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// Reserves capacity for at least `additional` more samples.
    pub fn reserve(&mut self, additional: usize) {
        self.samples.reserve(additional);
    }

    /// Returns the number of samples the series can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    /// Removes all samples and resets the cursor.
    pub fn clear(&mut self) {
        debug!("Cleared {} samples", self.samples.len());
        self.samples.clear();
        self.reset_query_state();
    }

    /// Returns the cursor of this series.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Locates the four samples supporting a cubic interpolation at `timestamp`.
    ///
    /// Advances the cursor. See [`crate::search::cubic_support`].
    pub fn cubic_support(
        &mut self,
        timestamp: Timestamp,
        window: Window,
    ) -> Option<CubicSupport<'_, T>> {
        cubic_support(&self.samples, timestamp, window, &mut self.cursor)
    }

    /// Locates the two samples supporting a linear interpolation at `timestamp`.
    ///
    /// Advances the cursor. See [`crate::search::linear_support`].
    pub fn linear_support(
        &mut self,
        timestamp: Timestamp,
        window: Window,
    ) -> Option<LinearSupport<'_, T>> {
        linear_support(&self.samples, timestamp, window, &mut self.cursor)
    }

    pub(crate) fn last_query(&self) -> Option<(Timestamp, AccessMode)> {
        self.last_query
    }

    pub(crate) fn remember_query(&mut self, timestamp: Timestamp, mode: AccessMode) {
        self.last_query = Some((timestamp, mode));
    }

    fn reset_query_state(&mut self) {
        self.cursor.reset();
        self.last_query = None;
    }
}

fn validate_sorted<T: Sample>(samples: &[T]) -> Result<()> {
    if samples.iter().any(Sample::is_null) {
        return Err(ReplayError::NullSample);
    }
    for (index, pair) in samples.windows(2).enumerate() {
        let previous = pair[0].timestamp();
        let timestamp = pair[1].timestamp();
        if timestamp <= previous {
            return Err(ReplayError::UnsortedSamples {
                index: index + 1,
                previous,
                timestamp,
            });
        }
    }
    Ok(())
}

impl<T: Sample> Index<usize> for SampleSeries<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.samples[index]
    }
}

impl<'a, T: Sample> IntoIterator for &'a SampleSeries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
