//! End-to-end tests: settle, seat a roster, count neighbours

use branchnet::application::services::{NeighborOutcome, VillageService};
use branchnet::application::{ApplicationError, Roster};
use branchnet::config::Settings;
use branchnet::domain::{resolve, BranchRange, DomainError, Forest, Level, NodeId};
use branchnet::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn fixed_settings() -> Settings {
    Settings {
        trees: 1,
        seed: 1,
        large_branches: BranchRange { min: 3, max: 3 },
        middle_branches: BranchRange { min: 2, max: 2 },
    }
}

fn large_branches(forest: &Forest) -> Vec<NodeId> {
    let root = forest.roots()[0];
    (0..forest.child_count(root))
        .map(|i| forest.child_at(root, i).unwrap())
        .collect()
}

#[test]
fn given_elrond_scenario_when_searching_b_then_two_neighbours() {
    let service = VillageService::new(fixed_settings());
    let mut forest = service.settle().unwrap();
    let large = large_branches(&forest);

    // large #1: vacant children; large #2: Elrond with A and B
    let l1_children: Vec<NodeId> = (0..2).map(|j| forest.child_at(large[0], j).unwrap()).collect();
    forest.set_label(l1_children[0], "None").unwrap();
    forest.set_label(l1_children[1], "None").unwrap();
    forest.set_label(large[1], "Elrond").unwrap();
    let a = forest.child_at(large[1], 0).unwrap();
    let b = forest.child_at(large[1], 1).unwrap();
    forest.set_label(a, "A").unwrap();
    forest.set_label(b, "B").unwrap();

    assert_eq!(resolve(&forest, "B"), Ok(b));
    assert_eq!(forest.top_level_ancestor(b), Some(large[1]));
    assert_eq!(forest.count_labeled_descendants(large[1]), 3);

    let outcome = service.neighbors(&forest, "B").unwrap();
    assert_eq!(
        outcome,
        NeighborOutcome::Found {
            name: "B".into(),
            node: b,
            level: Level::Middle,
            neighbors: 2,
        }
    );
}

#[test]
fn given_roster_when_assigning_then_seats_follow_prompt_order() {
    let service = VillageService::new(fixed_settings());
    let mut forest = service.settle().unwrap();
    let mut roster = Roster::parse("X None None Elrond A B Y Z W");

    let summary = service.assign(&mut forest, &mut roster).unwrap();
    assert_eq!(summary.seats, 9);
    assert_eq!(summary.occupied, 7);
    assert_eq!(summary.unused, 0);

    let large = large_branches(&forest);
    assert_eq!(forest.label(large[1]), Some("Elrond"));
    assert_eq!(forest.label(forest.child_at(large[1], 1).unwrap()), Some("B"));

    match service.neighbors(&forest, "A").unwrap() {
        NeighborOutcome::Found { neighbors, .. } => assert_eq!(neighbors, 2),
        other => panic!("unexpected outcome: {:?}", other),
    }
    // X sits alone on its great branch with two vacant seats
    match service.neighbors(&forest, "X").unwrap() {
        NeighborOutcome::Found { neighbors, level, .. } => {
            assert_eq!(neighbors, 0);
            assert_eq!(level, Level::Large);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn given_short_roster_when_assigning_then_roster_exhausted() {
    let service = VillageService::new(fixed_settings());
    let mut forest = service.settle().unwrap();
    let mut roster = Roster::parse("one two three");

    let err = service.assign(&mut forest, &mut roster).unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::RosterExhausted {
            needed: 9,
            provided: 3
        }
    ));
}

#[test]
fn given_long_roster_when_assigning_then_reports_unused() {
    let service = VillageService::new(fixed_settings());
    let mut forest = service.settle().unwrap();
    let mut roster = Roster::new((0..12).map(|i| format!("elf{}", i)));

    let summary = service.assign(&mut forest, &mut roster).unwrap();
    assert_eq!(summary.unused, 3);
}

#[test]
fn given_unknown_name_when_searching_then_not_found_with_query() {
    let service = VillageService::new(fixed_settings());
    let forest = service.settle().unwrap();
    assert_eq!(
        service.neighbors(&forest, "Galadriel").unwrap(),
        NeighborOutcome::NotFound {
            name: "Galadriel".into()
        }
    );
}

#[test]
fn given_empty_name_when_searching_then_root_has_no_enclosing_branch() {
    let service = VillageService::new(fixed_settings());
    let forest = service.settle().unwrap();
    let err = service.neighbors(&forest, "").unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::NoEnclosingBranch { .. })
    ));
}

#[test]
fn given_default_settings_when_settling_then_five_trees() {
    let service = VillageService::new(Settings::default());
    let forest = service.settle().unwrap();
    assert_eq!(forest.roots().len(), 5);
    // 5 roots + 19 great branches + 49 middle branches for seed 1
    assert_eq!(forest.len(), 5 + 19 + 49);
}
