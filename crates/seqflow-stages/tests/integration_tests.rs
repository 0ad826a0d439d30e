//! Integration tests for the pipeline composer.
//!
//! These tests drive `pipe` and `Pipeline` end to end across stages whose
//! element types change at every boundary.

use seqflow_core::{ErasedSeq, SeqError};
use seqflow_stages::{pipe, stage, Pipeline, RunContext, Stage};
use std::cell::Cell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Counts invocations and passes its input through untouched.
struct CountingStage {
    calls: Rc<Cell<usize>>,
}

impl Stage for CountingStage {
    fn id(&self) -> &'static str {
        "counting"
    }

    fn in_type(&self) -> &'static str {
        "*"
    }

    fn out_type(&self) -> &'static str {
        "*"
    }

    fn run(&self, input: ErasedSeq) -> seqflow_core::Result<ErasedSeq> {
        self.calls.set(self.calls.get() + 1);
        Ok(input)
    }
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_filter_map_try_map() {
    init_tracing();
    let result: Vec<String> = pipe(
        vec![1, 2, 3, 4, 5],
        vec![
            stage::filter(|i: &i32| *i > 1),
            stage::map(|i: i32| (i * 10).to_string()),
            stage::try_map(|s: String| Ok::<_, SeqError>(s + "!")),
        ],
    )
    .unwrap();

    assert_eq!(result, vec!["20!", "30!", "40!", "50!"]);
}

#[test]
fn test_int_string_int() {
    let result: Vec<i32> = pipe(
        vec![1, 2, 3],
        vec![
            stage::map(|i: i32| (i * 10).to_string()),
            stage::map(|s: String| s.parse::<i32>().unwrap_or_default() + 1),
        ],
    )
    .unwrap();

    assert_eq!(result, vec![11, 21, 31]);
}

#[test]
fn test_chained_maps() {
    let result: Vec<i32> = pipe(
        vec![1, 2, 3],
        vec![
            stage::map(|i: i32| i + 1),
            stage::map(|i: i32| i * 2),
            stage::map(|i: i32| i - 1),
        ],
    )
    .unwrap();

    assert_eq!(result, vec![3, 5, 7]);
}

#[test]
fn test_insert_in_pipeline() {
    let result: Vec<i32> = pipe(
        vec![2, 3],
        vec![
            stage::cons(1),
            stage::insert_last(4),
            stage::map(|i: i32| i * 10),
        ],
    )
    .unwrap();

    assert_eq!(result, vec![10, 20, 30, 40]);
}

#[test]
fn test_parse_strings() {
    let result: Vec<i32> = pipe(
        vec!["1", "2", "3"],
        vec![stage::try_map(|s: &'static str| s.parse::<i32>())],
    )
    .unwrap();

    assert_eq!(result, vec![1, 2, 3]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_declared_output_mismatch() {
    init_tracing();
    let result = pipe::<i32, String>(vec![1, 2, 3], vec![stage::map(|i: i32| i * 2)]);

    match result {
        Err(SeqError::TypeMismatch {
            context,
            expected,
            got,
        }) => {
            assert_eq!(context, "pipe");
            assert_eq!(expected, "alloc::string::String");
            assert_eq!(got, "i32");
        }
        other => panic!("expected output mismatch, got {:?}", other),
    }
}

#[test]
fn test_element_error_is_relayed() {
    let err = pipe::<&'static str, i32>(
        vec!["1", "not a number", "3"],
        vec![stage::try_map(|s: &'static str| s.parse::<i32>())],
    )
    .unwrap_err();

    let source = err.element_source().unwrap();
    assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
}

#[test]
fn test_insert_wrong_type() {
    let err = pipe::<i32, i32>(vec![1], vec![stage::insert_first("zero")]).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_later_stages_never_run() {
    init_tracing();
    let before = Rc::new(Cell::new(0));
    let after = Rc::new(Cell::new(0));
    let mapped = Rc::new(Cell::new(0));
    let mapped_in = Rc::clone(&mapped);

    let pipeline = Pipeline::new()
        .add_stage(Box::new(CountingStage {
            calls: Rc::clone(&before),
        }))
        .try_map(|i: i32| {
            if i == 2 {
                Err(format!("bad element {}", i))
            } else {
                Ok(i)
            }
        })
        .add_stage(Box::new(CountingStage {
            calls: Rc::clone(&after),
        }))
        .map(move |i: i32| {
            mapped_in.set(mapped_in.get() + 1);
            i
        });

    let err = pipeline.run::<i32, i32>(vec![1, 2, 3]).unwrap_err();

    assert!(err.to_string().contains("bad element 2"));
    assert_eq!(before.get(), 1);
    assert_eq!(after.get(), 0);
    assert_eq!(mapped.get(), 0);
}

#[test]
fn test_mismatch_in_middle_stops_run() {
    let after = Rc::new(Cell::new(0));
    let pipeline = Pipeline::new()
        .map(|i: i32| i.to_string())
        .filter(|i: &i32| *i > 0)
        .add_stage(Box::new(CountingStage {
            calls: Rc::clone(&after),
        }));

    let err = pipeline.run::<i32, i32>(vec![1]).unwrap_err();
    assert!(err.to_string().contains("filter"));
    assert_eq!(after.get(), 0);
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_empty_input_runs_every_stage() {
    let calls = Rc::new(Cell::new(0));
    let result: Vec<String> = Pipeline::new()
        .add_stage(Box::new(CountingStage {
            calls: Rc::clone(&calls),
        }))
        .map(|i: i32| i.to_string())
        .add_stage(Box::new(CountingStage {
            calls: Rc::clone(&calls),
        }))
        .run(Vec::<i32>::new())
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_reports_serialize() {
    let ctx = RunContext::from_json(r#"{ "label": "reports", "collect_reports": true }"#).unwrap();
    let (out, reports) = Pipeline::new()
        .insert_first(0)
        .map(|i: i32| i * 3)
        .run_with_reports::<i32, i32>(vec![1, 2], &ctx)
        .unwrap();

    assert_eq!(out, vec![0, 3, 6]);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].dropped(), -1);

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["id"], "insert_first");
    assert_eq!(json[1]["index"], 1);
}
