//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating submissions and workflow
//! events, plus `fake`-backed lecturer names.

use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{LecturerId, Month};
use domain_claims::ClaimSubmission;

use crate::builders::SubmissionBuilder;

/// A random plausible lecturer name
pub fn lecturer_name() -> String {
    Name().fake()
}

/// Strategy for positive hours with up to eight decimal places
///
/// Covers fractions far below a cent as well as whole-hour values up to
/// a billion; the product with [`rate_strategy`] always fits a `Decimal`.
pub fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..=8).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy for positive hourly rates with up to eight decimal places
pub fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..=8).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy for any positive `Decimal`, up to `Decimal::MAX` and down to
/// 28 decimal places
pub fn extreme_decimal_strategy() -> impl Strategy<Value = Decimal> {
    (1i128..(1i128 << 96), 0u32..=28)
        .prop_map(|(units, scale)| Decimal::from_i128_with_scale(units, scale))
}

pub fn month_strategy() -> impl Strategy<Value = Month> {
    proptest::sample::select(Month::ALL.to_vec())
}

/// Strategy for valid submissions, returned with the parsed hours and rate
pub fn valid_submission_strategy() -> impl Strategy<Value = (ClaimSubmission, Decimal, Decimal)> {
    (hours_strategy(), rate_strategy(), month_strategy(), 2000i32..2100i32, 1u32..50u32).prop_map(
        |(hours, rate, month, year, lecturer)| {
            let submission = SubmissionBuilder::new()
                .with_lecturer(LecturerId::new(lecturer), format!("Lecturer {lecturer}"))
                .with_period(month.name(), year.to_string())
                .with_hours(hours)
                .with_rate(rate)
                .build();
            (submission, hours, rate)
        },
    )
}

/// Strategy for well-formed submissions whose hours and rate may be huge
/// or very precise, returned with the parsed hours and rate
pub fn extreme_submission_strategy() -> impl Strategy<Value = (ClaimSubmission, Decimal, Decimal)> {
    (extreme_decimal_strategy(), extreme_decimal_strategy()).prop_map(|(hours, rate)| {
        let submission = SubmissionBuilder::new().with_hours(hours).with_rate(rate).build();
        (submission, hours, rate)
    })
}

/// Workflow events applied to a random existing claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowEvent {
    Submit,
    CoordinatorApprove(usize),
    CoordinatorReject(usize),
    ManagerFinalApprove(usize),
    ManagerReturn(usize),
    RejectWithoutReason(usize),
    ReturnWithoutReason(usize),
}

/// Strategy for event sequences; indexes pick among claims submitted so far
pub fn workflow_events_strategy(max_len: usize) -> impl Strategy<Value = Vec<WorkflowEvent>> {
    let event = prop_oneof![
        3 => Just(WorkflowEvent::Submit),
        2 => (0usize..16).prop_map(WorkflowEvent::CoordinatorApprove),
        1 => (0usize..16).prop_map(WorkflowEvent::CoordinatorReject),
        2 => (0usize..16).prop_map(WorkflowEvent::ManagerFinalApprove),
        1 => (0usize..16).prop_map(WorkflowEvent::ManagerReturn),
        1 => (0usize..16).prop_map(WorkflowEvent::RejectWithoutReason),
        1 => (0usize..16).prop_map(WorkflowEvent::ReturnWithoutReason),
    ];
    proptest::collection::vec(event, 1..max_len)
}
