//! Campus state: graph, class table and roster, plus the per-student queries

use serde::Serialize;

use crate::graph::{
    build_zone, is_reachable, shortest_paths, CampusGraph, Cost, EdgeKey, EdgeStatus, NodeId, Zone,
};
use crate::roster::{DropOutcome, Roster, RosterError, Student, StudentId, StudentName};
use crate::schedule::{verify_schedule, ClassCode, ClassInfo, ClassTable, ScheduleCheck};

/// Travel time from a student's residence to one class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRoute {
    pub code: ClassCode,
    pub location: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    /// `None` when no open route exists
    pub time: Option<Cost>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentRoutes {
    pub name: StudentName,
    pub residence: NodeId,
    /// Ordered by class code
    pub routes: Vec<ClassRoute>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentZone {
    pub name: StudentName,
    pub zone: Zone,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentSchedule {
    pub name: StudentName,
    pub check: ScheduleCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleResult {
    pub edge: EdgeKey,
    pub status: EdgeStatus,
}

#[derive(Debug, Clone, Default)]
pub struct Campus {
    graph: CampusGraph,
    classes: ClassTable,
    roster: Roster,
}

impl Campus {
    pub fn new(graph: CampusGraph, classes: ClassTable, max_classes: usize) -> Self {
        Self {
            graph,
            classes,
            roster: Roster::new(max_classes),
        }
    }

    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn insert_student(&mut self, student: Student) -> Result<(), RosterError> {
        self.roster.insert(student, &self.classes)
    }

    pub fn remove_student(&mut self, id: &StudentId) -> Result<Student, RosterError> {
        self.roster.remove(id)
    }

    pub fn drop_class(
        &mut self,
        id: &StudentId,
        code: &ClassCode,
    ) -> Result<DropOutcome, RosterError> {
        self.roster.drop_class(id, code)
    }

    pub fn replace_class(
        &mut self,
        id: &StudentId,
        old: &ClassCode,
        new: &ClassCode,
    ) -> Result<(), RosterError> {
        self.roster.replace_class(id, old, new, &self.classes)
    }

    pub fn remove_class(&mut self, code: &ClassCode) -> usize {
        self.roster.remove_class_everywhere(code)
    }

    /// Flip each listed edge; pairs that are not connections report `Absent`
    pub fn toggle_edges(&mut self, pairs: &[(NodeId, NodeId)]) -> Vec<ToggleResult> {
        pairs
            .iter()
            .map(|&(a, b)| {
                let status = self.graph.toggle(a, b);
                if status == EdgeStatus::Absent {
                    tracing::debug!(a, b, "toggle skipped: no such edge");
                }
                ToggleResult {
                    edge: EdgeKey::new(a, b),
                    status,
                }
            })
            .collect()
    }

    pub fn edge_status(&self, a: NodeId, b: NodeId) -> EdgeStatus {
        self.graph.status(a, b)
    }

    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        is_reachable(&self.graph, a, b)
    }

    /// Travel time from the student's residence to each of their classes
    pub fn shortest_times(&self, id: &StudentId) -> Result<StudentRoutes, RosterError> {
        let student = self.student(id)?;
        let paths = shortest_paths(&self.graph, student.residence);

        let routes = self
            .student_classes(student)
            .into_iter()
            .map(|class| ClassRoute {
                code: class.code.clone(),
                location: class.location,
                location_name: self.graph.name(class.location).map(str::to_string),
                time: paths.distance(class.location),
            })
            .collect();

        Ok(StudentRoutes {
            name: student.name.clone(),
            residence: student.residence,
            routes,
        })
    }

    pub fn student_zone(&self, id: &StudentId) -> Result<StudentZone, RosterError> {
        let student = self.student(id)?;
        let destinations: Vec<NodeId> = self
            .student_classes(student)
            .into_iter()
            .map(|class| class.location)
            .collect();

        Ok(StudentZone {
            name: student.name.clone(),
            zone: build_zone(&self.graph, student.residence, &destinations),
        })
    }

    pub fn verify_schedule(&self, id: &StudentId) -> Result<StudentSchedule, RosterError> {
        let student = self.student(id)?;
        let classes = self.student_classes(student);

        Ok(StudentSchedule {
            name: student.name.clone(),
            check: verify_schedule(&self.graph, &classes),
        })
    }

    fn student(&self, id: &StudentId) -> Result<&Student, RosterError> {
        self.roster
            .get(id)
            .ok_or_else(|| RosterError::UnknownStudent(id.clone()))
    }

    /// The student's classes in code order; codes missing from the table are skipped
    fn student_classes(&self, student: &Student) -> Vec<&ClassInfo> {
        student
            .classes
            .iter()
            .filter_map(|code| {
                let class = self.classes.get(code.as_str());
                if class.is_none() {
                    tracing::warn!(%code, student = %student.id, "class missing from table");
                }
                class
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
