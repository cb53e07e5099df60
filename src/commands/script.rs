//! Streaming a command script line by line

use std::io::{self, BufRead, Lines};

/// Non-empty, trimmed command lines read lazily from `source`
///
/// When the first such line is a bare integer it is the number of commands
/// that follow; anything past that count is never read.
pub struct CommandLines<B> {
    lines: Lines<B>,
    started: bool,
    /// Commands still allowed by the count header; `None` without a header
    remaining: Option<usize>,
}

impl<B: BufRead> CommandLines<B> {
    pub fn new(source: B) -> Self {
        Self {
            lines: source.lines(),
            started: false,
            remaining: None,
        }
    }
}

impl<B: BufRead> Iterator for CommandLines<B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        loop {
            let Some(line) = self.lines.next() else {
                if let Some(missing) = self.remaining.take() {
                    tracing::warn!(missing, "script has fewer commands than declared");
                    self.remaining = Some(0);
                }
                return None;
            };
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if !self.started {
                self.started = true;
                if let Ok(count) = trimmed.parse::<usize>() {
                    tracing::debug!(count, "script declares command count");
                    if count == 0 {
                        self.remaining = Some(0);
                        return None;
                    }
                    self.remaining = Some(count);
                    continue;
                }
            }

            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
            return Some(Ok(trimmed.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};

    fn collect(input: &str) -> Vec<String> {
        CommandLines::new(input.as_bytes())
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_count_header() {
        let input = "2\ncheckEdgeStatus 13 23\nisConnected 1 2\nremove 12345678\n";
        assert_eq!(
            collect(input),
            vec!["checkEdgeStatus 13 23", "isConnected 1 2"]
        );
    }

    #[test]
    fn test_without_header_all_lines_run() {
        let input = "\n  checkEdgeStatus 13 23  \n\nisConnected 1 2\n";
        assert_eq!(
            collect(input),
            vec!["checkEdgeStatus 13 23", "isConnected 1 2"]
        );
    }

    #[test]
    fn test_header_after_blank_lines() {
        let input = "\n\n  1 \nisConnected 1 2\nisConnected 3 4\n";
        assert_eq!(collect(input), vec!["isConnected 1 2"]);
    }

    #[test]
    fn test_short_script() {
        assert_eq!(collect("5\nisConnected 1 2\n"), vec!["isConnected 1 2"]);
        assert!(collect("").is_empty());
        assert!(collect("0\nisConnected 1 2").is_empty());
    }

    /// Reader that fails if asked for anything after its first chunk
    struct OneChunk {
        chunk: Option<&'static [u8]>,
    }

    impl Read for OneChunk {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let Some(chunk) = self.chunk.take() else {
                return Err(io::Error::other("read past the first chunk"));
            };
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn test_lines_are_yielded_before_input_ends() {
        let source = BufReader::new(OneChunk {
            chunk: Some(b"isConnected 1 2\n"),
        });
        let mut lines = CommandLines::new(source);

        assert_eq!(lines.next().unwrap().unwrap(), "isConnected 1 2");
        assert!(lines.next().unwrap().is_err());
    }

    #[test]
    fn test_count_header_stops_reading() {
        let source = BufReader::new(OneChunk {
            chunk: Some(b"1\nisConnected 1 2\n"),
        });
        let lines: Vec<String> = CommandLines::new(source)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["isConnected 1 2"]);
    }
}
