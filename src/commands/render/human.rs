//! Plain-text lines of the classic command protocol

use std::io::{self, Write};

use compass_core::campus::{StudentRoutes, StudentSchedule};
use compass_core::graph::EdgeStatus;
use compass_core::schedule::ScheduleCheck;

use crate::commands::session::Response;

const SUCCESS: &str = "successful";
const FAILURE: &str = "unsuccessful";

pub fn write_response<W: Write>(out: &mut W, response: &Response) -> io::Result<()> {
    match response {
        Response::Success | Response::Toggled { .. } => writeln!(out, "{}", SUCCESS),
        Response::Failure { .. } => writeln!(out, "{}", FAILURE),
        Response::Removed { affected } => writeln!(out, "{}", affected),
        Response::Edge { status } => writeln!(out, "{}", edge_status(*status)),
        Response::Connected { connected } => {
            writeln!(out, "{}", if *connected { SUCCESS } else { FAILURE })
        }
        Response::Routes(routes) => write_routes(out, routes),
        Response::Zone(zone) => writeln!(
            out,
            "Student Zone Cost For {}: {}",
            zone.name, zone.zone.cost
        ),
        Response::Schedule(schedule) => write_schedule(out, schedule),
    }
}

fn edge_status(status: EdgeStatus) -> &'static str {
    match status {
        EdgeStatus::Open => "open",
        EdgeStatus::Closed => "closed",
        EdgeStatus::Absent => "DNE",
    }
}

fn write_routes<W: Write>(out: &mut W, routes: &StudentRoutes) -> io::Result<()> {
    writeln!(out, "Name: {}", routes.name)?;
    for route in &routes.routes {
        // -1 marks an unreachable class
        let time = route.time.map_or(-1, |t| t as i64);
        writeln!(out, "{} | Total Time: {}", route.code, time)?;
    }
    Ok(())
}

fn write_schedule<W: Write>(out: &mut W, schedule: &StudentSchedule) -> io::Result<()> {
    let transitions = match &schedule.check {
        ScheduleCheck::NotApplicable => return writeln!(out, "{}", FAILURE),
        ScheduleCheck::Checked(transitions) => transitions,
    };

    writeln!(out, "Schedule Check for {}:", schedule.name)?;
    for t in transitions {
        let verdict = if t.feasible {
            "\"Can make it!\""
        } else {
            "\"Cannot make it!\""
        };
        writeln!(out, "{} - {} {}", t.from, t.to, verdict)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_core::campus::ClassRoute;
    use compass_core::schedule::Transition;

    fn render(response: &Response) -> String {
        let mut buf = Vec::new();
        write_response(&mut buf, response).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_simple_outcomes() {
        assert_eq!(render(&Response::Success), "successful\n");
        assert_eq!(
            render(&Response::Failure {
                reason: "nope".into()
            }),
            "unsuccessful\n"
        );
        assert_eq!(render(&Response::Removed { affected: 2 }), "2\n");
        assert_eq!(
            render(&Response::Edge {
                status: EdgeStatus::Absent
            }),
            "DNE\n"
        );
        assert_eq!(
            render(&Response::Connected { connected: false }),
            "unsuccessful\n"
        );
    }

    #[test]
    fn test_routes_mark_unreachable() {
        let routes = StudentRoutes {
            name: "Test User".parse().unwrap(),
            residence: 23,
            routes: vec![
                ClassRoute {
                    code: "COP3503".parse().unwrap(),
                    location: 23,
                    location_name: None,
                    time: Some(0),
                },
                ClassRoute {
                    code: "COP3530".parse().unwrap(),
                    location: 14,
                    location_name: Some("CSE Building".into()),
                    time: None,
                },
            ],
        };
        assert_eq!(
            render(&Response::Routes(routes)),
            "Name: Test User\nCOP3503 | Total Time: 0\nCOP3530 | Total Time: -1\n"
        );
    }

    #[test]
    fn test_schedule_lines() {
        let schedule = StudentSchedule {
            name: "Alice".parse().unwrap(),
            check: ScheduleCheck::Checked(vec![
                Transition {
                    from: "COP3503".parse().unwrap(),
                    to: "COP3530".parse().unwrap(),
                    travel: Some(3),
                    gap: 15,
                    feasible: true,
                },
                Transition {
                    from: "COP3530".parse().unwrap(),
                    to: "ENC3246".parse().unwrap(),
                    travel: None,
                    gap: 25,
                    feasible: false,
                },
            ]),
        };
        assert_eq!(
            render(&Response::Schedule(schedule)),
            "Schedule Check for Alice:\n\
             COP3503 - COP3530 \"Can make it!\"\n\
             COP3530 - ENC3246 \"Cannot make it!\"\n"
        );
    }

    #[test]
    fn test_schedule_not_applicable() {
        let schedule = StudentSchedule {
            name: "Bob".parse().unwrap(),
            check: ScheduleCheck::NotApplicable,
        };
        assert_eq!(render(&Response::Schedule(schedule)), "unsuccessful\n");
    }
}
