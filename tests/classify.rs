mod common;

use common::utc;
use fiber_reports::classify::{LifecycleStatus, classify};
use fiber_reports::model::{InstallationStatus, Module, ModuleName, WorkOrderStatus};
use fiber_reports::time_format::{PLACEHOLDER, TimestampFormatter};

const ALL_INSTALLATION_STATUSES: [InstallationStatus; 5] = [
    InstallationStatus::Unspecified,
    InstallationStatus::Pending,
    InstallationStatus::InProgress,
    InstallationStatus::Completed,
    InstallationStatus::Cancelled,
];

fn ont_sent() -> Module {
    Module::completed(ModuleName::OntSending, utc(2024, 3, 4, 9, 15, 0))
}

#[test]
fn cancelled_and_aborted_ignore_installation_state() {
    let module_sets = [vec![], vec![ont_sent()]];
    for installation in ALL_INSTALLATION_STATUSES {
        for modules in &module_sets {
            let cancelled = classify(WorkOrderStatus::Cancelled, installation, modules);
            assert_eq!(cancelled.status, LifecycleStatus::Cancelled);
            assert_eq!(cancelled.ont_sent_at, None);

            let aborted = classify(WorkOrderStatus::Aborted, installation, modules);
            assert_eq!(aborted.status, LifecycleStatus::Aborted);
            assert_eq!(aborted.ont_sent_at, None);
        }
    }
}

#[test]
fn completed_installation_wins_over_module_state() {
    let without_module = classify(
        WorkOrderStatus::Active,
        InstallationStatus::Completed,
        &[Module::pending(ModuleName::OntSending)],
    );
    assert_eq!(without_module.status, LifecycleStatus::ActivatedOntDiscovered);
    assert!(!without_module.ont_sent);

    let with_module = classify(
        WorkOrderStatus::Completed,
        InstallationStatus::Completed,
        &[ont_sent()],
    );
    assert_eq!(with_module.status, LifecycleStatus::ActivatedOntDiscovered);
    assert_eq!(with_module.ont_sent_at, Some(utc(2024, 3, 4, 9, 15, 0)));
}

#[test]
fn completed_ont_module_marks_equipment_sent() {
    let classification = classify(
        WorkOrderStatus::Completed,
        InstallationStatus::InProgress,
        &[Module::pending(ModuleName::Other(7)), ont_sent()],
    );
    assert_eq!(classification.status, LifecycleStatus::FinishedOntSent);
    assert!(classification.ont_sent);

    let formatter = TimestampFormatter::new("Europe/Vienna").expect("zone");
    assert_eq!(
        formatter.format(classification.ont_sent_at),
        "2024-03-04 10:15:00 CET"
    );
}

#[test]
fn other_completed_modules_do_not_count_as_sent() {
    let classification = classify(
        WorkOrderStatus::Active,
        InstallationStatus::Pending,
        &[Module::completed(ModuleName::Other(2), utc(2024, 1, 1, 0, 0, 0))],
    );
    assert_eq!(classification.status, LifecycleStatus::ProvidedToIkb);
    assert_eq!(classification.ont_sent_at, None);
}

#[test]
fn completed_work_order_without_shipment() {
    let classification = classify(
        WorkOrderStatus::Completed,
        InstallationStatus::Pending,
        &[Module::pending(ModuleName::OntSending)],
    );
    assert_eq!(classification.status, LifecycleStatus::FinishedOntNotSent);
    assert!(!classification.ont_sent);
}

#[test]
fn falls_back_to_provided() {
    for status in [WorkOrderStatus::Active, WorkOrderStatus::Unspecified] {
        let classification = classify(status, InstallationStatus::InProgress, &[]);
        assert_eq!(classification.status, LifecycleStatus::ProvidedToIkb);
    }
}

#[test]
fn last_completed_ont_module_supplies_the_instant() {
    let classification = classify(
        WorkOrderStatus::Active,
        InstallationStatus::Pending,
        &[
            Module::completed(ModuleName::OntSending, utc(2024, 5, 1, 8, 0, 0)),
            Module::pending(ModuleName::OntSending),
            Module::completed(ModuleName::OntSending, utc(2024, 5, 2, 8, 0, 0)),
        ],
    );
    assert_eq!(classification.ont_sent_at, Some(utc(2024, 5, 2, 8, 0, 0)));
}

#[test]
fn completed_module_without_instant_still_counts_as_sent() {
    let module = Module {
        name: ModuleName::OntSending,
        completed: true,
        completed_at: None,
    };
    let classification = classify(
        WorkOrderStatus::Active,
        InstallationStatus::Pending,
        &[module],
    );
    assert_eq!(classification.status, LifecycleStatus::FinishedOntSent);

    let formatter = TimestampFormatter::new("Europe/Vienna").expect("zone");
    assert_eq!(formatter.format(classification.ont_sent_at), PLACEHOLDER);
}

#[test]
fn labels_match_report_wording() {
    let labels: Vec<&str> = [
        LifecycleStatus::Cancelled,
        LifecycleStatus::Aborted,
        LifecycleStatus::ProvidedToIkb,
        LifecycleStatus::FinishedOntNotSent,
        LifecycleStatus::FinishedOntSent,
        LifecycleStatus::ActivatedOntDiscovered,
    ]
    .into_iter()
    .map(LifecycleStatus::label)
    .collect();

    assert_eq!(
        labels,
        [
            "Cancelled",
            "Aborted",
            "Provided to IKB",
            "Finished by IKB, ONT not sent",
            "Finished by IKB, ONT Sent",
            "Activated, ONT discovered",
        ]
    );
}
