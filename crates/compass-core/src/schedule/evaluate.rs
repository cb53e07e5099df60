use serde::Serialize;

use crate::graph::{shortest_paths, Cost, GraphProvider};
use crate::schedule::{ClassCode, ClassInfo};

/// Verdict for one pair of back-to-back classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: ClassCode,
    pub to: ClassCode,
    /// Shortest travel time between the two locations, `None` if unreachable
    pub travel: Option<Cost>,
    /// Minutes between the end of `from` and the start of `to` (may be negative)
    pub gap: i64,
    pub feasible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "transitions", rename_all = "snake_case")]
pub enum ScheduleCheck {
    /// Fewer than two classes: there is no transition to check
    NotApplicable,
    Checked(Vec<Transition>),
}

/// Check every consecutive pair of classes ordered by start time
///
/// Classes starting at the same minute are ordered by class code. Each pair
/// gets a fresh shortest-path run from the earlier class's location; a pair
/// is feasible when the destination is reachable and the free window is at
/// least the travel time.
#[tracing::instrument(skip(provider, classes), fields(classes = classes.len()))]
pub fn verify_schedule(provider: &dyn GraphProvider, classes: &[&ClassInfo]) -> ScheduleCheck {
    if classes.len() < 2 {
        return ScheduleCheck::NotApplicable;
    }

    let mut ordered = classes.to_vec();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.code.cmp(&b.code)));

    let transitions = ordered
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let travel = shortest_paths(provider, from.location).distance(to.location);
            let gap = to.start.minutes_since(from.end);
            let feasible = travel.is_some_and(|needed| gap >= 0 && gap as u64 >= needed);

            Transition {
                from: from.code.clone(),
                to: to.code.clone(),
                travel,
                gap,
                feasible,
            }
        })
        .collect();

    ScheduleCheck::Checked(transitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CampusGraph;

    fn class(code: &str, location: u32, start: &str, end: &str) -> ClassInfo {
        ClassInfo {
            code: code.parse().unwrap(),
            location,
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    fn campus() -> CampusGraph {
        let mut graph = CampusGraph::new();
        graph.add_edge(13, 23, 4);
        graph.add_edge(14, 23, 3);
        graph.add_edge(22, 23, 2);
        graph.add_edge(23, 24, 5);
        graph
    }

    fn transitions(check: ScheduleCheck) -> Vec<Transition> {
        match check {
            ScheduleCheck::Checked(t) => t,
            ScheduleCheck::NotApplicable => panic!("expected transitions"),
        }
    }

    #[test]
    fn test_single_class_is_not_applicable() {
        let graph = campus();
        let only = class("COP3503", 23, "10:40", "11:30");
        assert_eq!(verify_schedule(&graph, &[&only]), ScheduleCheck::NotApplicable);
        assert_eq!(verify_schedule(&graph, &[]), ScheduleCheck::NotApplicable);
    }

    #[test]
    fn test_gap_equal_to_travel_is_feasible() {
        let graph = campus();
        let a = class("COP3503", 23, "10:40", "11:30");
        let b = class("SPC2608", 13, "11:34", "12:24");
        let result = transitions(verify_schedule(&graph, &[&b, &a]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].from.as_str(), "COP3503");
        assert_eq!(result[0].travel, Some(4));
        assert_eq!(result[0].gap, 4);
        assert!(result[0].feasible);
    }

    #[test]
    fn test_gap_shorter_than_travel_fails() {
        let graph = campus();
        let a = class("COP3503", 23, "10:40", "11:30");
        let b = class("SPC2608", 13, "11:33", "12:24");
        let result = transitions(verify_schedule(&graph, &[&a, &b]));
        assert!(!result[0].feasible);
    }

    #[test]
    fn test_unreachable_always_fails() {
        let mut graph = campus();
        graph.toggle(14, 23);
        let a = class("COP3503", 23, "08:00", "08:50");
        let b = class("COP3530", 14, "16:00", "16:50");
        let result = transitions(verify_schedule(&graph, &[&a, &b]));
        assert_eq!(result[0].travel, None);
        assert!(!result[0].feasible);
    }

    #[test]
    fn test_same_location_overlapping_classes_fail() {
        let graph = campus();
        let a = class("COP3503", 23, "10:00", "11:00");
        let b = class("COP3530", 23, "10:30", "11:30");
        let result = transitions(verify_schedule(&graph, &[&a, &b]));
        assert_eq!(result[0].travel, Some(0));
        assert_eq!(result[0].gap, -30);
        assert!(!result[0].feasible);
    }

    #[test]
    fn test_orders_by_start_then_code() {
        let graph = campus();
        let a = class("MAC2311", 22, "08:30", "09:20");
        let b = class("COP3530", 14, "08:30", "09:20");
        let c = class("ENC3246", 24, "12:00", "12:50");
        let result = transitions(verify_schedule(&graph, &[&c, &a, &b]));
        let pairs: Vec<(&str, &str)> = result
            .iter()
            .map(|t| (t.from.as_str(), t.to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("COP3530", "MAC2311"), ("MAC2311", "ENC3246")]);
    }
}
