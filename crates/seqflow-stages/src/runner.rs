//! Pipeline Runner: chains stages over one erased carrier
use crate::context::RunContext;
use crate::report::StageReport;
use crate::stage::{self, Stage};
use seqflow_core::{BoxError, ErasedSeq, Result};
use std::time::Instant;

/// Ordered list of stages. Element types may change at every boundary and
/// are only checked when a stage recovers its input, plus once more for the
/// declared output type at the end of a run.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn from_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn add_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn map<In, Out, F>(self, f: F) -> Self
    where
        In: 'static,
        Out: 'static,
        F: Fn(In) -> Out + 'static,
    {
        self.add_stage(stage::map(f))
    }

    pub fn try_map<In, Out, E, F>(self, f: F) -> Self
    where
        In: 'static,
        Out: 'static,
        E: Into<BoxError> + 'static,
        F: Fn(In) -> std::result::Result<Out, E> + 'static,
    {
        self.add_stage(stage::try_map(f))
    }

    pub fn filter<T, P>(self, predicate: P) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + 'static,
    {
        self.add_stage(stage::filter(predicate))
    }

    pub fn insert_first<T: Clone + 'static>(self, elem: T) -> Self {
        self.add_stage(stage::insert_first(elem))
    }

    pub fn insert_last<T: Clone + 'static>(self, elem: T) -> Self {
        self.add_stage(stage::insert_last(elem))
    }

    /// Stage ids joined with `→`, e.g. `filter→map→try_map`.
    pub fn pipeline_id(&self) -> String {
        self.stages
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join("→")
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run with a fresh default context.
    pub fn run<In: 'static, Out: 'static>(&self, input: Vec<In>) -> Result<Vec<Out>> {
        self.run_with_reports(input, &RunContext::default())
            .map(|(out, _)| out)
    }

    /// Run and return the per-stage reports when `ctx.collect_reports` is set.
    ///
    /// The first failing stage ends the run; later stages are never invoked
    /// and its error is returned unchanged.
    pub fn run_with_reports<In: 'static, Out: 'static>(
        &self,
        input: Vec<In>,
        ctx: &RunContext,
    ) -> Result<(Vec<Out>, Vec<StageReport>)> {
        let mut current = ErasedSeq::new(input);
        let mut reports = Vec::new();

        tracing::debug!(
            trace_id = %ctx.trace_id,
            label = ctx.label_or_default(),
            stages = self.stages.len(),
            "pipeline started"
        );

        for (index, stage) in self.stages.iter().enumerate() {
            let started_at = chrono::Utc::now();
            let start = Instant::now();
            let in_len = current.len();

            current = stage.run(current).map_err(|e| {
                tracing::warn!(
                    trace_id = %ctx.trace_id,
                    index,
                    stage = stage.id(),
                    completed = index,
                    reports = reports.len(),
                    error = %e,
                    "stage failed"
                );
                e
            })?;

            let latency_us = start.elapsed().as_micros() as u64;
            tracing::debug!(
                trace_id = %ctx.trace_id,
                index,
                stage = stage.id(),
                in_len,
                out_len = current.len(),
                latency_us,
                "stage done"
            );

            if ctx.collect_reports {
                reports.push(StageReport {
                    index,
                    id: stage.id().to_string(),
                    in_type: stage.in_type().to_string(),
                    out_type: stage.out_type().to_string(),
                    in_len,
                    out_len: current.len(),
                    started_at,
                    latency_us,
                });
            }
        }

        let output = current.into_vec::<Out>("pipe").map_err(|e| {
            tracing::warn!(trace_id = %ctx.trace_id, error = %e, "output type check failed");
            e
        })?;

        Ok((output, reports))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `stages` over `input` once and recover the result as `Vec<Out>`.
///
/// ```
/// use seqflow_stages::{pipe, stage};
///
/// let out: Vec<String> = pipe(
///     vec![1, 2, 3],
///     vec![
///         stage::filter(|i: &i32| *i > 1),
///         stage::map(|i: i32| (i * 10).to_string()),
///         stage::try_map(|s: String| Ok::<_, std::fmt::Error>(s + "!")),
///     ],
/// )
/// .unwrap();
/// assert_eq!(out, vec!["20!", "30!"]);
/// ```
pub fn pipe<In: 'static, Out: 'static>(
    input: Vec<In>,
    stages: Vec<Box<dyn Stage>>,
) -> Result<Vec<Out>> {
    Pipeline::from_stages(stages).run(input)
}
