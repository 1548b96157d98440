// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

//! Progress observers for the long pruning scans.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrunePhase {
    ForwardReachability,
    RemoveUnreachable,
    BackwardReachability,
    RemoveNonReturning,
}

impl fmt::Display for PrunePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrunePhase::ForwardReachability => "getting reachable nodes from center",
            PrunePhase::RemoveUnreachable => "removing nodes unreachable from center",
            PrunePhase::BackwardReachability => "getting nodes that can reach the center",
            PrunePhase::RemoveNonReturning => "removing nodes that can not reach the center",
        };
        f.write_str(name)
    }
}

/// Receives "N% complete" notifications. Purely diagnostic.
pub trait ProgressSink {
    fn report(&mut self, phase: PrunePhase, percent: usize);
}

impl<F> ProgressSink for F
where
    F: FnMut(PrunePhase, usize),
{
    fn report(&mut self, phase: PrunePhase, percent: usize) {
        self(phase, percent)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _phase: PrunePhase, _percent: usize) {}
}

/// Forwards progress to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&mut self, phase: PrunePhase, percent: usize) {
        tracing::debug!(%phase, percent, "prune progress");
    }
}

/// Counts processed nodes for one phase and notifies the sink every
/// `interval` ticks.
pub struct ProgressCounter<'a, S: ProgressSink + ?Sized> {
    sink: &'a mut S,
    phase: PrunePhase,
    total: usize,
    interval: usize,
    processed: usize,
}

impl<'a, S: ProgressSink + ?Sized> ProgressCounter<'a, S> {
    pub fn new(sink: &'a mut S, phase: PrunePhase, total: usize, interval: usize) -> Self {
        Self {
            sink,
            phase,
            total,
            interval,
            processed: 0,
        }
    }

    pub fn tick(&mut self) {
        self.processed += 1;
        if self.interval == 0 || self.total == 0 {
            return;
        }
        if self.processed % self.interval == 0 {
            self.sink
                .report(self.phase, self.processed * 100 / self.total);
        }
    }

    pub fn processed(&self) -> usize {
        self.processed
    }
}
