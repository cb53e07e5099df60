use super::*;

/// Hub 23 with spokes 13, 14, 22, 24 and a ring 13-14-15-24
fn campus() -> Campus {
    let mut graph = CampusGraph::new();
    for (a, b, w) in [
        (13, 23, 4),
        (14, 23, 3),
        (22, 23, 2),
        (23, 24, 5),
        (13, 14, 2),
        (14, 15, 2),
        (15, 24, 3),
    ] {
        graph.add_edge(a, b, w);
    }

    let mut classes = ClassTable::new();
    for (code, location, start, end) in [
        ("COP3503", 23, "10:40", "11:30"),
        ("COP3530", 14, "11:45", "12:35"),
        ("ENC3246", 24, "13:00", "13:50"),
        ("SPC2608", 13, "11:34", "12:24"),
    ] {
        classes.insert(ClassInfo {
            code: code.parse().unwrap(),
            location,
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        });
    }

    Campus::new(graph, classes, 6)
}

fn enroll(campus: &mut Campus, id: &str, residence: NodeId, codes: &[&str]) -> StudentId {
    let student_id: StudentId = id.parse().unwrap();
    campus
        .insert_student(Student {
            id: student_id.clone(),
            name: "Test User".parse().unwrap(),
            residence,
            classes: codes.iter().map(|c| c.parse().unwrap()).collect(),
        })
        .unwrap();
    student_id
}

#[test]
fn test_isolating_residence_makes_classes_unreachable() {
    let mut campus = campus();
    let id = enroll(&mut campus, "40000001", 23, &["COP3503", "COP3530"]);

    let before = campus.shortest_times(&id).unwrap();
    let times: Vec<Option<Cost>> = before.routes.iter().map(|r| r.time).collect();
    assert_eq!(times, vec![Some(0), Some(3)]);

    let toggled = campus.toggle_edges(&[(13, 23), (14, 23), (22, 23), (23, 24)]);
    assert!(toggled.iter().all(|t| t.status == EdgeStatus::Closed));

    let after = campus.shortest_times(&id).unwrap();
    let times: Vec<Option<Cost>> = after.routes.iter().map(|r| r.time).collect();
    assert_eq!(times, vec![Some(0), None]);

    for other in [13, 14, 15, 22, 24] {
        assert!(!campus.is_connected(23, other));
    }
}

#[test]
fn test_toggle_absent_pair_is_reported() {
    let mut campus = campus();
    let result = campus.toggle_edges(&[(13, 24)]);
    assert_eq!(result[0].status, EdgeStatus::Absent);
    assert_eq!(campus.edge_status(13, 24), EdgeStatus::Absent);
    assert_eq!(campus.graph().edge_count(), 7);
}

#[test]
fn test_routes_are_ordered_by_code() {
    let mut campus = campus();
    let id = enroll(&mut campus, "40000002", 22, &["ENC3246", "COP3530", "COP3503"]);
    let routes = campus.shortest_times(&id).unwrap();
    let codes: Vec<&str> = routes.routes.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["COP3503", "COP3530", "ENC3246"]);
}

#[test]
fn test_routes_carry_location_names() {
    let mut campus = campus();
    campus.graph.set_name(14, "CSE Building");
    let id = enroll(&mut campus, "40000007", 23, &["COP3503", "COP3530"]);

    let routes = campus.shortest_times(&id).unwrap().routes;
    assert_eq!(routes[0].location_name, None);
    assert_eq!(routes[1].location_name.as_deref(), Some("CSE Building"));
}

#[test]
fn test_student_zone_cost() {
    let mut campus = campus();
    let id = enroll(&mut campus, "40000003", 23, &["COP3530", "ENC3246"]);
    let zone = campus.student_zone(&id).unwrap();
    assert_eq!(zone.zone.cost, 8);
}

#[test]
fn test_zone_of_class_at_residence_is_zero() {
    let mut campus = campus();
    let id = enroll(&mut campus, "40000004", 23, &["COP3503"]);
    assert_eq!(campus.student_zone(&id).unwrap().zone.cost, 0);
}

#[test]
fn test_verify_schedule_boundary_and_single_class() {
    let mut campus = campus();
    let both = enroll(&mut campus, "40000005", 23, &["COP3503", "SPC2608"]);
    let single = enroll(&mut campus, "40000006", 23, &["COP3503"]);

    match campus.verify_schedule(&both).unwrap().check {
        ScheduleCheck::Checked(transitions) => {
            assert_eq!(transitions.len(), 1);
            assert_eq!(transitions[0].travel, Some(4));
            assert_eq!(transitions[0].gap, 4);
            assert!(transitions[0].feasible);
        }
        ScheduleCheck::NotApplicable => panic!("two classes should be checked"),
    }

    assert_eq!(
        campus.verify_schedule(&single).unwrap().check,
        ScheduleCheck::NotApplicable
    );
}

#[test]
fn test_unknown_student_is_rejected() {
    let campus = campus();
    let id: StudentId = "99999999".parse().unwrap();
    assert!(matches!(
        campus.shortest_times(&id),
        Err(RosterError::UnknownStudent(_))
    ));
    assert!(campus.student_zone(&id).is_err());
    assert!(campus.verify_schedule(&id).is_err());
}
