//! Executes parsed commands against the loaded campus

use serde::Serialize;

use compass_core::campus::{
    Campus, StudentRoutes, StudentSchedule, StudentZone, ToggleResult,
};
use compass_core::graph::EdgeStatus;
use compass_core::roster::{RosterError, Student};

use crate::commands::parse::{parse_line, Request};

/// Structured result of one command, shared by every renderer
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Response {
    Success,
    Failure { reason: String },
    /// Students affected by `removeClass`
    Removed { affected: usize },
    Toggled { edges: Vec<ToggleResult> },
    Edge { status: EdgeStatus },
    Connected { connected: bool },
    Routes(StudentRoutes),
    Zone(StudentZone),
    Schedule(StudentSchedule),
}

impl Response {
    fn failure(reason: impl ToString) -> Self {
        Response::Failure {
            reason: reason.to_string(),
        }
    }
}

impl From<Result<(), RosterError>> for Response {
    fn from(result: Result<(), RosterError>) -> Self {
        match result {
            Ok(()) => Response::Success,
            Err(e) => Response::failure(e),
        }
    }
}

/// A response tagged with the command word that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub command: String,
    #[serde(flatten)]
    pub response: Response,
}

/// Campus state that lives across the commands of one run
pub struct Session {
    campus: Campus,
}

impl Session {
    pub fn new(campus: Campus) -> Self {
        Self { campus }
    }

    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    /// Parse and execute one command line
    pub fn execute_line(&mut self, line: &str) -> Reply {
        match parse_line(line) {
            Ok(request) => Reply {
                command: request.name().to_string(),
                response: self.execute(request),
            },
            Err(e) => {
                tracing::debug!(line, error = %e, "command rejected");
                Reply {
                    command: line.split_whitespace().next().unwrap_or_default().to_string(),
                    response: Response::failure(e),
                }
            }
        }
    }

    #[tracing::instrument(skip(self, request), fields(command = request.name()))]
    pub fn execute(&mut self, request: Request) -> Response {
        let response: Response = match request {
            Request::Insert {
                name,
                id,
                residence,
                declared,
                classes,
            } => {
                let max = self.campus.roster().max_classes();
                if declared > max {
                    Response::failure(RosterError::ClassCount {
                        count: declared,
                        max,
                    })
                } else {
                    self.campus
                        .insert_student(Student {
                            id,
                            name,
                            residence,
                            classes,
                        })
                        .into()
                }
            }
            Request::Remove { id } => self.campus.remove_student(&id).map(|_| ()).into(),
            Request::DropClass { id, code } => {
                self.campus.drop_class(&id, &code).map(|_| ()).into()
            }
            Request::ReplaceClass { id, old, new } => {
                self.campus.replace_class(&id, &old, &new).into()
            }
            Request::RemoveClass { code } => Response::Removed {
                affected: self.campus.remove_class(&code),
            },
            Request::ToggleEdgesClosure { pairs } => Response::Toggled {
                edges: self.campus.toggle_edges(&pairs),
            },
            Request::CheckEdgeStatus { a, b } => Response::Edge {
                status: self.campus.edge_status(a, b),
            },
            Request::IsConnected { a, b } => Response::Connected {
                connected: self.campus.is_connected(a, b),
            },
            Request::PrintShortestEdges { id } => match self.campus.shortest_times(&id) {
                Ok(routes) => Response::Routes(routes),
                Err(e) => Response::failure(e),
            },
            Request::PrintStudentZone { id } => match self.campus.student_zone(&id) {
                Ok(zone) => Response::Zone(zone),
                Err(e) => Response::failure(e),
            },
            Request::VerifySchedule { id } => match self.campus.verify_schedule(&id) {
                Ok(schedule) => Response::Schedule(schedule),
                Err(e) => Response::failure(e),
            },
        };

        if let Response::Failure { reason } = &response {
            tracing::debug!(%reason, "command unsuccessful");
        }
        response
    }
}
