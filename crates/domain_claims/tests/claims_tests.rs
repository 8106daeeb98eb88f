//! Comprehensive tests for domain_claims

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{AmountFormatter, ClaimId, LecturerId, Month, RandFormatter};

use domain_claims::claim::{ClaimStatus, NextStage};
use domain_claims::export::{pending_csv, CSV_HEADER};
use domain_claims::prompt::{AcceptSuggested, ReasonRequest};
use domain_claims::{ApprovalWorkflow, ClaimError, Progress, WorkflowConfig};

use test_utils::{
    assert_money_eq, assert_not_queued, assert_queue_invariant, assert_tracked, lecturer_name,
    extreme_submission_strategy, valid_submission_strategy, workflow_events_strategy, IdFixtures,
    SubmissionBuilder,
    TemporalFixtures, TestClaimBuilder, WorkflowEvent, WorkflowFixtures,
};

// ============================================================================
// Submission Tests
// ============================================================================

mod submission_tests {
    use super::*;

    #[test]
    fn test_submit_october_claim() {
        let mut wf = WorkflowFixtures::empty();
        let submission = SubmissionBuilder::new()
            .with_period("October", "2024")
            .with_hours(40)
            .with_rate(150)
            .build();

        let claim = wf.submit(&submission).unwrap();

        assert_eq!(claim.id.to_string(), "C001");
        assert_money_eq(&claim.amount, dec!(6000));
        assert_eq!(claim.status, ClaimStatus::PendingCoordinatorReview);
        assert_eq!(claim.period.month, Month::October);
        assert_tracked(&wf, claim.id, "Pending Coordinator Review", Progress::SUBMITTED);
    }

    #[test]
    fn test_submit_records_documents_and_notes() {
        let mut wf = WorkflowFixtures::empty();
        let name = lecturer_name();
        let submission = SubmissionBuilder::new()
            .with_lecturer(LecturerId::new(7), name.clone())
            .with_documents(3)
            .with_notes("Includes exam marking hours")
            .build();

        let claim = wf.submit(&submission).unwrap();

        assert_eq!(claim.lecturer_name, name.trim());
        assert_eq!(claim.lecturer_id, LecturerId::new(7));
        assert_eq!(claim.document_count, 3);
        assert_eq!(claim.notes, "Includes exam marking hours");
    }

    #[test]
    fn test_missing_period_is_validation_error() {
        let mut wf = WorkflowFixtures::empty();
        let submission = SubmissionBuilder::new().with_period("", "2024").build();

        let err = wf.submit(&submission).unwrap_err();

        assert!(matches!(err, ClaimError::Validation { field: "period", .. }));
        assert!(err.is_user_error());
        assert!(wf.store().pending_claims().is_empty());
        assert!(wf.tracking().is_empty());
    }

    #[test]
    fn test_malformed_hours_does_not_consume_an_id() {
        let mut wf = WorkflowFixtures::empty();
        let bad = SubmissionBuilder::new().with_hours("forty").build();
        assert!(wf.submit(&bad).is_err());

        let good = wf.submit(&SubmissionBuilder::new().build()).unwrap();
        assert_eq!(good.id, IdFixtures::first_claim());
    }

    #[test]
    fn test_amount_keeps_sub_cent_precision() {
        let mut wf = WorkflowFixtures::empty();
        let submission = SubmissionBuilder::new().with_hours("1.5").with_rate("150.12345").build();

        let claim = wf.submit(&submission).unwrap();
        assert_eq!(claim.amount.amount(), dec!(225.185175));
        assert_eq!(RandFormatter.format(&claim.amount), "R 225,19");
    }

    #[test]
    fn test_tiny_claim_is_not_zero() {
        let mut wf = WorkflowFixtures::empty();
        let submission = SubmissionBuilder::new().with_hours("0.00001").with_rate("1").build();

        let claim = wf.submit(&submission).unwrap();
        assert_eq!(claim.amount.amount(), dec!(0.00001));
        assert!(!claim.amount.is_zero());
    }

    #[test]
    fn test_overflowing_amount_is_rejected_without_consuming_an_id() {
        let mut wf = WorkflowFixtures::empty();
        let huge = SubmissionBuilder::new()
            .with_hours("79228162514264337593543950335")
            .with_rate("2")
            .build();

        let err = wf.submit(&huge).unwrap_err();
        assert!(matches!(err, ClaimError::Validation { field: "hours", .. }));
        assert_eq!(wf.store().last_allocated(), None);
        assert!(wf.store().pending_claims().is_empty());
        assert!(wf.tracking().all().is_empty());

        let good = wf.submit(&SubmissionBuilder::new().build()).unwrap();
        assert_eq!(good.id, IdFixtures::first_claim());
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        let mut wf = WorkflowFixtures::empty();
        let submission = SubmissionBuilder::new().with_period("Brumaire", "2024").build();

        let err = wf.submit(&submission).unwrap_err();
        assert!(matches!(err, ClaimError::Validation { field: "month", .. }));
    }
}

// ============================================================================
// Identifier Tests
// ============================================================================

mod identifier_tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_are_never_reused() {
        let mut wf = WorkflowFixtures::empty();
        let first = wf.submit(&SubmissionBuilder::new().build()).unwrap();
        wf.coordinator_reject(first.id, Some("Insufficient documentation"))
            .unwrap();
        let second = wf.submit(&SubmissionBuilder::new().build()).unwrap();
        let third = wf.submit(&SubmissionBuilder::new().build()).unwrap();

        assert_eq!(first.id.to_string(), "C001");
        assert_eq!(second.id.to_string(), "C002");
        assert_eq!(third.id.to_string(), "C003");
    }

    #[test]
    fn test_submissions_after_samples_continue_sequence() {
        let mut wf = WorkflowFixtures::with_samples();
        let claim = wf.submit(&SubmissionBuilder::new().build()).unwrap();
        assert_eq!(claim.id.to_string(), "C005");
    }
}

// ============================================================================
// Coordinator Tests
// ============================================================================

mod coordinator_tests {
    use super::*;

    #[test]
    fn test_approve_moves_claim_to_manager_queue() {
        let mut wf = WorkflowFixtures::empty();
        let claim = wf.submit(&SubmissionBuilder::new().build()).unwrap();

        let projection = wf.coordinator_approve(claim.id).unwrap().unwrap();

        assert_eq!(projection.id, claim.id);
        assert_eq!(projection.amount, claim.amount);
        assert_eq!(projection.lecturer_name, claim.lecturer_name);
        assert_eq!(projection.period, claim.period);
        assert_eq!(projection.submitted_at, claim.submitted_at);
        assert_eq!(projection.final_status, ClaimStatus::PendingFinalApproval);
        assert_eq!(projection.coordinator_decision, "Approved");
        assert_eq!(projection.coordinator_name, "Coordinator User");

        assert!(wf.store().pending_claim(claim.id).is_none());
        assert_eq!(wf.store().manager_queue().len(), 1);
        assert_tracked(&wf, claim.id, "Approved by Coordinator", Progress::COORDINATOR_APPROVED);
    }

    #[test]
    fn test_configured_coordinator_name_is_recorded() {
        let mut wf = ApprovalWorkflow::new(WorkflowConfig {
            coordinator_name: "Ms. Naidoo".to_string(),
            ..WorkflowConfig::default()
        });
        let claim = wf.submit(&SubmissionBuilder::new().build()).unwrap();

        let projection = wf.coordinator_approve(claim.id).unwrap().unwrap();
        assert_eq!(projection.coordinator_name, "Ms. Naidoo");
    }

    #[test]
    fn test_reject_is_terminal() {
        let mut wf = WorkflowFixtures::empty();
        let claim = wf.submit(&SubmissionBuilder::new().build()).unwrap();

        let rejected = wf
            .coordinator_reject(claim.id, Some("Insufficient documentation"))
            .unwrap()
            .unwrap();

        assert_eq!(rejected.status, ClaimStatus::RejectedByCoordinator);
        assert_not_queued(&wf, claim.id);
        assert_tracked(&wf, claim.id, "Rejected by Coordinator", Progress::COMPLETE);
        assert_eq!(
            wf.tracking().get(claim.id).unwrap().next_stage(),
            NextStage::ProcessComplete
        );
    }

    #[test]
    fn test_reject_without_reason_changes_nothing() {
        let mut wf = WorkflowFixtures::with_samples();
        let before_pending = wf.store().pending_claims().to_vec();
        let before_manager = wf.store().manager_queue().to_vec();
        let before_tracking = wf.tracking().all().to_vec();

        for reason in [None, Some(""), Some("   ")] {
            let err = wf.coordinator_reject(ClaimId::new(1), reason).unwrap_err();
            assert!(matches!(err, ClaimError::ReasonRequired { action: "reject", .. }));
        }

        assert_eq!(wf.store().pending_claims(), before_pending.as_slice());
        assert_eq!(wf.store().manager_queue(), before_manager.as_slice());
        assert_eq!(wf.tracking().all(), before_tracking.as_slice());
    }

    #[test]
    fn test_cancelled_prompt_aborts_reject() {
        let mut wf = WorkflowFixtures::with_samples();
        let mut cancel = |_: &ReasonRequest| -> Option<String> { None };

        let err = wf.coordinator_reject_with(ClaimId::new(2), &mut cancel).unwrap_err();

        assert!(matches!(err, ClaimError::ReasonRequired { .. }));
        assert!(wf.store().pending_claim(ClaimId::new(2)).is_some());
    }

    #[test]
    fn test_prompt_sees_rejection_request() {
        let mut wf = WorkflowFixtures::with_samples();
        let mut seen = None;
        let mut prompt = |request: &ReasonRequest| -> Option<String> {
            seen = Some(request.clone());
            Some(request.suggested.to_string())
        };

        wf.coordinator_reject_with(ClaimId::new(1), &mut prompt)
            .unwrap()
            .unwrap();

        let request = seen.unwrap();
        assert_eq!(request.claim_id, ClaimId::new(1));
        assert_eq!(request.suggested, "Insufficient documentation");
    }

    #[test]
    fn test_approve_unknown_claim_is_noop() {
        let mut wf = WorkflowFixtures::with_samples();

        assert!(wf.coordinator_approve(IdFixtures::missing_claim()).unwrap().is_none());
        // C003 already sits in the manager queue
        assert!(wf.coordinator_approve(ClaimId::new(3)).unwrap().is_none());
        assert_eq!(wf.store().manager_queue().len(), 2);
        assert_eq!(wf.store().pending_claims().len(), 2);
    }

    #[test]
    fn test_approving_twice_is_noop() {
        let mut wf = WorkflowFixtures::empty();
        let claim = wf.submit(&SubmissionBuilder::new().build()).unwrap();

        assert!(wf.coordinator_approve(claim.id).unwrap().is_some());
        assert!(wf.coordinator_approve(claim.id).unwrap().is_none());
        assert_eq!(wf.store().manager_queue().len(), 1);
    }
}

// ============================================================================
// Manager Tests
// ============================================================================

mod manager_tests {
    use super::*;

    #[test]
    fn test_final_approve_is_terminal() {
        let mut wf = WorkflowFixtures::with_samples();

        let approved = wf.manager_final_approve(ClaimId::new(3)).unwrap().unwrap();

        assert_eq!(approved.final_status, ClaimStatus::FinalApproved);
        assert_not_queued(&wf, ClaimId::new(3));
        assert_tracked(
            &wf,
            ClaimId::new(3),
            "Final Approved - Payment Processing",
            Progress::COMPLETE,
        );
        assert_eq!(
            wf.tracking().get(ClaimId::new(3)).unwrap().claim_status(),
            Some(ClaimStatus::FinalApproved)
        );
    }

    #[test]
    fn test_return_removes_claim_and_drops_progress() {
        let mut wf = WorkflowFixtures::with_samples();

        let returned = wf
            .manager_return(ClaimId::new(4), Some("Additional information required"))
            .unwrap()
            .unwrap();

        assert_eq!(returned.final_status, ClaimStatus::ReturnedForClarification);
        assert_not_queued(&wf, ClaimId::new(4));
        assert_tracked(&wf, ClaimId::new(4), "Returned for Clarification", Progress::RETURNED);
    }

    #[test]
    fn test_returned_claim_is_not_requeued_for_coordinator() {
        let mut wf = WorkflowFixtures::with_samples();
        wf.manager_return_with(ClaimId::new(4), &mut AcceptSuggested)
            .unwrap()
            .unwrap();

        assert_eq!(wf.store().pending_claims().len(), 2);
        assert!(wf.coordinator_approve(ClaimId::new(4)).unwrap().is_none());
    }

    #[test]
    fn test_return_without_reason_changes_nothing() {
        let mut wf = WorkflowFixtures::with_samples();
        let before_manager = wf.store().manager_queue().to_vec();
        let before_tracking = wf.tracking().all().to_vec();

        let err = wf.manager_return(ClaimId::new(3), Some("")).unwrap_err();

        assert!(matches!(err, ClaimError::ReasonRequired { action: "return", .. }));
        assert_eq!(wf.store().manager_queue(), before_manager.as_slice());
        assert_eq!(wf.tracking().all(), before_tracking.as_slice());
    }

    #[test]
    fn test_manager_actions_ignore_pending_claims() {
        let mut wf = WorkflowFixtures::with_samples();

        assert!(wf.manager_final_approve(ClaimId::new(1)).unwrap().is_none());
        assert!(wf.manager_return(ClaimId::new(1), Some("why")).unwrap().is_none());
        assert_tracked(&wf, ClaimId::new(1), "Pending Coordinator Review", Progress::SUBMITTED);
    }
}

// ============================================================================
// Lifecycle Scenarios
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_approve_path_scenario() {
        let mut wf = WorkflowFixtures::empty();
        let submission = SubmissionBuilder::new()
            .with_period("October", "2024")
            .with_hours(40)
            .with_rate(150)
            .build();

        let claim = wf.submit(&submission).unwrap();
        assert_money_eq(&claim.amount, dec!(6000));
        assert_tracked(&wf, claim.id, "Pending Coordinator Review", Progress::SUBMITTED);

        wf.coordinator_approve(claim.id).unwrap().unwrap();
        assert_eq!(wf.store().manager_queue().len(), 1);
        assert!(wf.store().pending_claims().is_empty());
        assert_eq!(wf.tracking().get(claim.id).unwrap().progress, Progress::COORDINATOR_APPROVED);

        wf.manager_final_approve(claim.id).unwrap().unwrap();
        assert!(wf.store().manager_queue().is_empty());
        let tracked = wf.tracking().get(claim.id).unwrap();
        assert_eq!(tracked.progress, Progress::COMPLETE);
        assert!(tracked.claim_status().unwrap().is_terminal());
    }

    #[test]
    fn test_progress_paths() {
        let mut wf = WorkflowFixtures::empty();
        let approve = wf.submit(&SubmissionBuilder::new().build()).unwrap().id;
        let reject = wf.submit(&SubmissionBuilder::new().build()).unwrap().id;
        let ret = wf.submit(&SubmissionBuilder::new().build()).unwrap().id;

        let progress =
            |wf: &ApprovalWorkflow, id: ClaimId| wf.tracking().get(id).unwrap().progress.percent();

        let mut approve_path = vec![progress(&wf, approve)];
        wf.coordinator_approve(approve).unwrap();
        approve_path.push(progress(&wf, approve));
        wf.manager_final_approve(approve).unwrap();
        approve_path.push(progress(&wf, approve));
        assert_eq!(approve_path, vec![25, 66, 100]);

        let mut reject_path = vec![progress(&wf, reject)];
        wf.coordinator_reject(reject, Some("duplicate")).unwrap();
        reject_path.push(progress(&wf, reject));
        assert_eq!(reject_path, vec![25, 100]);

        let mut return_path = vec![progress(&wf, ret)];
        wf.coordinator_approve(ret).unwrap();
        return_path.push(progress(&wf, ret));
        wf.manager_return(ret, Some("hours unclear")).unwrap();
        return_path.push(progress(&wf, ret));
        assert_eq!(return_path, vec![25, 66, 50]);
    }

    #[test]
    fn test_tracking_enumerates_in_submission_order() {
        let wf = WorkflowFixtures::with_samples();
        let lines: Vec<String> = wf.tracking().all().iter().map(|t| t.display()).collect();
        assert_eq!(
            lines,
            vec![
                "C001 - October 2024 (Pending Coordinator Review)",
                "C002 - October 2024 (Pending Coordinator Review)",
                "C003 - October 2024 (Approved by Coordinator)",
                "C004 - September 2024 (Approved by Coordinator)",
            ]
        );
    }

    #[test]
    fn test_claim_details_summary() {
        let wf = WorkflowFixtures::with_samples();
        let claim = wf.store().pending_claim(ClaimId::new(1)).unwrap();
        let details = claim.details(&RandFormatter);

        assert!(details.starts_with("Claim Details: C001"));
        assert!(details.contains("Lecturer: Dr. Smith (L001)"));
        assert!(details.contains("Amount: R 6 750,00"));
        assert!(details.contains("Documents: 2"));

        let manager = wf.store().manager_claim(ClaimId::new(3)).unwrap();
        let details = manager.details(&RandFormatter);
        assert!(details.contains("Coordinator: Dr. Wilson"));
        assert!(details.contains("Final Status: Pending Final Approval"));
    }
}

// ============================================================================
// Statistics Tests
// ============================================================================

mod statistics_tests {
    use super::*;

    #[test]
    fn test_sample_statistics() {
        let wf = WorkflowFixtures::with_samples();
        let stats = wf.statistics();

        assert_eq!(stats.pending_count(), 2);
        assert_eq!(stats.manager_queue_count(), 2);
        assert_eq!(stats.pending_final_approval_count(), 2);
        assert_eq!(stats.final_approved_count(), 0);
        assert!(stats.total_approved_amount().unwrap().is_zero());
        assert_eq!(stats.coordinator_summary(), "Total Pending Claims: 2");
    }

    #[test]
    fn test_final_approvals_are_totalled() {
        let mut wf = WorkflowFixtures::with_samples();
        wf.manager_final_approve(ClaimId::new(3)).unwrap();
        wf.manager_final_approve(ClaimId::new(4)).unwrap();

        let snapshot = wf.statistics().snapshot().unwrap();
        assert_eq!(snapshot.manager_queue_count, 0);
        assert_eq!(snapshot.final_approved_count, 2);
        assert_eq!(snapshot.pending_final_approval_count, 0);
        assert_money_eq(&snapshot.total_approved_amount, dec!(13000));
    }

    #[test]
    fn test_returned_claims_are_not_totalled() {
        let mut wf = WorkflowFixtures::with_samples();
        wf.manager_return(ClaimId::new(3), Some("check hours")).unwrap();

        let stats = wf.statistics();
        assert_eq!(stats.final_approved_count(), 0);
        assert!(stats.total_approved_amount().unwrap().is_zero());
        assert_eq!(wf.store().decided_claims().len(), 1);
    }

    #[test]
    fn test_manager_report_render() {
        let mut wf = WorkflowFixtures::with_samples();
        wf.manager_final_approve(ClaimId::new(3)).unwrap();

        let report = wf
            .statistics()
            .manager_report(TemporalFixtures::submitted_at())
            .unwrap();
        let text = report.render(&RandFormatter);

        assert!(text.contains("Total Claims in Queue: 1"));
        assert!(text.contains("Final Approved: 1"));
        assert!(text.contains("Pending Final Approval: 1"));
        assert!(text.contains("Total Amount Approved: R 7 200,00"));
        assert!(text.contains("Report Generated: 2024-10-19 09:30"));
    }
}

// ============================================================================
// Export Tests
// ============================================================================

mod export_tests {
    use super::*;

    #[test]
    fn test_single_claim_export() {
        let claim = TestClaimBuilder::new()
            .with_id(ClaimId::new(1))
            .with_hours(dec!(45))
            .build();
        assert_money_eq(&claim.amount, dec!(6750));

        let csv = pending_csv(&[claim]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "\"C001\",\"Dr. Smith\",\"October\",45,6750,\"Pending Coordinator Review\",\"2024-10-19\""
        );
    }

    #[test]
    fn test_export_of_sample_queue() {
        let wf = WorkflowFixtures::with_samples();
        let csv = pending_csv(wf.store().pending_claims()).unwrap();

        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("\"C002\",\"Prof. Johnson\",\"October\",38,5700,"));
    }

    #[test]
    fn test_fractional_hours_export() {
        let claim = TestClaimBuilder::new()
            .with_hours(dec!(7.5))
            .with_submitted_at(Utc::now())
            .build();
        let csv = pending_csv(&[claim]).unwrap();
        assert!(csv.contains(",7.5,1125,"));
    }
}

// ============================================================================
// Properties
// ============================================================================

// indexes past the end hit ids that were never allocated
fn pick(submitted: &[ClaimId], i: usize) -> ClaimId {
    submitted
        .get(i)
        .copied()
        .unwrap_or(ClaimId::new(900 + i as u32))
}

fn apply(wf: &mut ApprovalWorkflow, submitted: &mut Vec<ClaimId>, event: WorkflowEvent) {
    match event {
        WorkflowEvent::Submit => {
            let claim = wf.submit(&SubmissionBuilder::new().build()).unwrap();
            submitted.push(claim.id);
        }
        WorkflowEvent::CoordinatorApprove(i) => {
            wf.coordinator_approve(pick(submitted, i)).unwrap();
        }
        WorkflowEvent::CoordinatorReject(i) => {
            wf.coordinator_reject(pick(submitted, i), Some("rejected")).unwrap();
        }
        WorkflowEvent::ManagerFinalApprove(i) => {
            wf.manager_final_approve(pick(submitted, i)).unwrap();
        }
        WorkflowEvent::ManagerReturn(i) => {
            wf.manager_return(pick(submitted, i), Some("returned")).unwrap();
        }
        WorkflowEvent::RejectWithoutReason(i) => {
            let _ = wf.coordinator_reject(pick(submitted, i), None);
        }
        WorkflowEvent::ReturnWithoutReason(i) => {
            let _ = wf.manager_return(pick(submitted, i), Some(" "));
        }
    }
}

proptest! {
    #[test]
    fn amount_is_exactly_hours_times_rate((submission, hours, rate) in valid_submission_strategy()) {
        let mut wf = WorkflowFixtures::empty();
        let claim = wf.submit(&submission).unwrap();

        prop_assert_eq!(claim.amount.amount(), hours * rate);
        prop_assert_eq!(claim.amount.amount().scale(), hours.scale() + rate.scale());
        prop_assert_eq!(wf.tracking().get(claim.id).unwrap().progress, Progress::SUBMITTED);
    }

    #[test]
    fn extreme_inputs_are_exact_or_rejected((submission, hours, rate) in extreme_submission_strategy()) {
        let mut wf = WorkflowFixtures::empty();

        match wf.submit(&submission) {
            Ok(claim) => {
                prop_assert_eq!(Some(claim.amount.amount()), hours.checked_mul(rate));
                prop_assert_eq!(claim.amount.amount().scale(), hours.scale() + rate.scale());
            }
            Err(err) => {
                let is_hours_validation = matches!(err, ClaimError::Validation { field: "hours", .. });
                prop_assert!(is_hours_validation);
                prop_assert_eq!(wf.store().last_allocated(), None);
                prop_assert!(wf.tracking().all().is_empty());
            }
        }
    }

    #[test]
    fn random_event_sequences_keep_invariants(events in workflow_events_strategy(40)) {
        let mut wf = WorkflowFixtures::empty();
        let mut submitted = Vec::new();
        let mut last_progress = std::collections::HashMap::new();

        for event in events {
            apply(&mut wf, &mut submitted, event);
            assert_queue_invariant(&wf);

            for tracked in wf.tracking().all() {
                let previous = last_progress.insert(tracked.id, tracked.progress);
                if let Some(previous) = previous {
                    // the only permitted regression is 66 -> 50 on return
                    if tracked.progress < previous {
                        prop_assert_eq!(previous, Progress::COORDINATOR_APPROVED);
                        prop_assert_eq!(tracked.progress, Progress::RETURNED);
                    }
                }
            }
        }

        let ids: Vec<u32> = submitted.iter().map(|id| id.sequence()).collect();
        let expected: Vec<u32> = (1..=submitted.len() as u32).collect();
        prop_assert_eq!(ids, expected);
    }
}
