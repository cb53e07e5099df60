//! Tokenizing one command line into a typed request

use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

use compass_core::graph::NodeId;
use compass_core::roster::{StudentId, StudentName};
use compass_core::schedule::ClassCode;

/// Why a command line could not be turned into a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: invalid {argument}: {value}")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },

    #[error("insert: name must be enclosed in double quotes")]
    UnquotedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Insert {
        name: StudentName,
        id: StudentId,
        residence: NodeId,
        /// Class count as written on the command line
        declared: usize,
        classes: BTreeSet<ClassCode>,
    },
    Remove {
        id: StudentId,
    },
    DropClass {
        id: StudentId,
        code: ClassCode,
    },
    ReplaceClass {
        id: StudentId,
        old: ClassCode,
        new: ClassCode,
    },
    RemoveClass {
        code: ClassCode,
    },
    ToggleEdgesClosure {
        pairs: Vec<(NodeId, NodeId)>,
    },
    CheckEdgeStatus {
        a: NodeId,
        b: NodeId,
    },
    IsConnected {
        a: NodeId,
        b: NodeId,
    },
    PrintShortestEdges {
        id: StudentId,
    },
    PrintStudentZone {
        id: StudentId,
    },
    VerifySchedule {
        id: StudentId,
    },
}

impl Request {
    /// Command word as written in scripts
    pub fn name(&self) -> &'static str {
        match self {
            Request::Insert { .. } => "insert",
            Request::Remove { .. } => "remove",
            Request::DropClass { .. } => "dropClass",
            Request::ReplaceClass { .. } => "replaceClass",
            Request::RemoveClass { .. } => "removeClass",
            Request::ToggleEdgesClosure { .. } => "toggleEdgesClosure",
            Request::CheckEdgeStatus { .. } => "checkEdgeStatus",
            Request::IsConnected { .. } => "isConnected",
            Request::PrintShortestEdges { .. } => "printShortestEdges",
            Request::PrintStudentZone { .. } => "printStudentZone",
            Request::VerifySchedule { .. } => "verifySchedule",
        }
    }
}

/// Whitespace tokens of one command, consumed left to right
struct Tokens<'a> {
    command: &'static str,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(command: &'static str, rest: &'a str) -> Self {
        Self {
            command,
            inner: rest.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ParseError> {
        let raw = self.inner.next().ok_or(ParseError::MissingArgument {
            command: self.command,
            argument,
        })?;
        raw.parse().map_err(|_| ParseError::InvalidArgument {
            command: self.command,
            argument,
            value: raw.to_string(),
        })
    }
}

/// Parse one command line
///
/// Tokens past the ones a command needs are ignored.
pub fn parse_line(line: &str) -> Result<Request, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    match word {
        "" => Err(ParseError::Empty),
        "insert" => parse_insert(rest),
        "remove" => {
            let mut t = Tokens::new("remove", rest);
            Ok(Request::Remove { id: t.next("id")? })
        }
        "dropClass" => {
            let mut t = Tokens::new("dropClass", rest);
            Ok(Request::DropClass {
                id: t.next("id")?,
                code: t.next("class code")?,
            })
        }
        "replaceClass" => {
            let mut t = Tokens::new("replaceClass", rest);
            Ok(Request::ReplaceClass {
                id: t.next("id")?,
                old: t.next("class code")?,
                new: t.next("class code")?,
            })
        }
        "removeClass" => {
            let mut t = Tokens::new("removeClass", rest);
            Ok(Request::RemoveClass {
                code: t.next("class code")?,
            })
        }
        "toggleEdgesClosure" => {
            let mut t = Tokens::new("toggleEdgesClosure", rest);
            let count: usize = t.next("edge count")?;
            let pairs = (0..count)
                .map(|_| -> Result<(NodeId, NodeId), ParseError> {
                    Ok((t.next("location id")?, t.next("location id")?))
                })
                .collect::<Result<Vec<_>, ParseError>>()?;
            Ok(Request::ToggleEdgesClosure { pairs })
        }
        "checkEdgeStatus" => {
            let mut t = Tokens::new("checkEdgeStatus", rest);
            Ok(Request::CheckEdgeStatus {
                a: t.next("location id")?,
                b: t.next("location id")?,
            })
        }
        "isConnected" => {
            let mut t = Tokens::new("isConnected", rest);
            Ok(Request::IsConnected {
                a: t.next("location id")?,
                b: t.next("location id")?,
            })
        }
        "printShortestEdges" => {
            let mut t = Tokens::new("printShortestEdges", rest);
            Ok(Request::PrintShortestEdges { id: t.next("id")? })
        }
        "printStudentZone" => {
            let mut t = Tokens::new("printStudentZone", rest);
            Ok(Request::PrintStudentZone { id: t.next("id")? })
        }
        "verifySchedule" => {
            let mut t = Tokens::new("verifySchedule", rest);
            Ok(Request::VerifySchedule { id: t.next("id")? })
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// `insert "NAME" ID RESIDENCE N CODE...`
fn parse_insert(rest: &str) -> Result<Request, ParseError> {
    let (_, quoted) = rest.split_once('"').ok_or(ParseError::UnquotedName)?;
    let (raw_name, after) = quoted.split_once('"').ok_or(ParseError::UnquotedName)?;

    let name = raw_name
        .parse()
        .map_err(|_| ParseError::InvalidArgument {
            command: "insert",
            argument: "name",
            value: raw_name.to_string(),
        })?;

    let mut t = Tokens::new("insert", after);
    let id = t.next("id")?;
    let residence = t.next("residence")?;
    let declared: usize = t.next("class count")?;
    if declared == 0 {
        return Err(ParseError::InvalidArgument {
            command: "insert",
            argument: "class count",
            value: declared.to_string(),
        });
    }

    let classes = (0..declared)
        .map(|_| t.next("class code"))
        .collect::<Result<BTreeSet<ClassCode>, ParseError>>()?;

    Ok(Request::Insert {
        name,
        id,
        residence,
        declared,
        classes,
    })
}
